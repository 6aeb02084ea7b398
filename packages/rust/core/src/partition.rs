//! Recursive partitioning of a navigation tree into wiki pages.
//!
//! Every top-level navigation entry shaped like
//! `<li><span/><a href="…">Title</a>…</li>` gets its own page, linked from
//! the index page; everything else is written into the page currently open.
//! Only depth-0 entries split, so nested sections accumulate into their
//! top-level entry's page.

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use docwiki_markdown::back_link;
use docwiki_shared::Result;

use crate::dom::{self, DocNode};
use crate::link::render_link;
use crate::page::Page;

/// A navigation entry that qualifies for its own page.
struct SectionEntry<'a> {
    anchor: DocNode<'a>,
    title: &'a str,
}

impl<'a> SectionEntry<'a> {
    /// `node → first child → next sibling` must be an anchor with a text child.
    fn from_node(node: DocNode<'a>) -> Option<Self> {
        let anchor = node.first_child()?.next_sibling()?;
        if !dom::is_anchor(anchor) {
            return None;
        }
        match dom::first_child_text(anchor) {
            Some(title) => Some(Self { anchor, title }),
            None => {
                debug!("section anchor has no text, merging entry into current page");
                None
            }
        }
    }
}

/// Page name for a section: `<base>_<title>` lowercased, spaces as underscores.
///
/// Path separators in the title are kept, so a title like `Guides/Tutorials`
/// names a file in a missing subdirectory and page creation fails the run.
pub fn section_page_name(base_name: &str, title: &str) -> String {
    format!("{base_name}_{}", title.replace(' ', "_").to_lowercase())
}

/// Splits a navigation container into an index page and section pages.
pub struct Partitioner<'c> {
    dir: &'c Path,
    base_name: &'c str,
    columns: usize,
    docs_host: &'c str,
    exclude_titles: &'c [String],
    created: Vec<PathBuf>,
}

impl<'c> Partitioner<'c> {
    /// Section pages are created in `dir` and link back to `base_name`.
    pub fn new(
        dir: &'c Path,
        base_name: &'c str,
        columns: usize,
        docs_host: &'c str,
        exclude_titles: &'c [String],
    ) -> Self {
        Self {
            dir,
            base_name,
            columns,
            docs_host,
            exclude_titles,
            created: Vec::new(),
        }
    }

    /// Partition `nav` into `index` (depth 0) and per-section pages.
    pub fn run<W: Write>(&mut self, nav: DocNode<'_>, index: &mut Page<W>) -> Result<()> {
        self.partition(nav, index, 0)
    }

    /// Section pages written, in creation order.
    pub fn into_created(self) -> Vec<PathBuf> {
        self.created
    }

    fn partition<W: Write>(
        &mut self,
        node: DocNode<'_>,
        page: &mut Page<W>,
        depth: usize,
    ) -> Result<()> {
        if dom::is_anchor(node) {
            page.emit(&render_link(node, None, self.docs_host))?;
        }

        for child in node.children() {
            if depth == 0 {
                if let Some(entry) = SectionEntry::from_node(child) {
                    self.split(child, entry, page)?;
                    continue;
                }
            }
            self.partition(child, page, depth + 1)?;
        }

        Ok(())
    }

    fn split<W: Write>(
        &mut self,
        node: DocNode<'_>,
        entry: SectionEntry<'_>,
        parent: &mut Page<W>,
    ) -> Result<()> {
        if self.exclude_titles.iter().any(|t| t == entry.title) {
            debug!(title = entry.title, "excluded navigation entry skipped");
            return Ok(());
        }

        let name = section_page_name(self.base_name, entry.title);
        parent.emit(&render_link(entry.anchor, Some(&name), self.docs_host))?;

        let path = self.dir.join(format!("{name}.md"));
        let duplicate = self.created.contains(&path);
        if duplicate {
            warn!(path = %path.display(), "duplicate section title, overwriting page");
        }

        let mut page = Page::create(path, self.columns)?;
        page.write_raw(&back_link(self.base_name))?;
        page.write_table_header()?;
        self.partition(node, &mut page, 1)?;

        let (path, _) = page.finish()?;
        debug!(title = entry.title, path = %path.display(), "section page written");
        if !duplicate {
            self.created.push(path);
        }
        Ok(())
    }
}
