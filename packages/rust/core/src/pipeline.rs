//! End-to-end `build` pipeline: providers → fetch → locate navigation → pages.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use scraper::Html;
use tracing::{debug, info, instrument, warn};

use docwiki_crawler::{FetchOptions, Fetcher};
use docwiki_markdown::{heading, home_link};
use docwiki_shared::{DocWikiError, Provider, Result, WikiConfig};

use crate::locate::{Search, locate};
use crate::page::Page;
use crate::partition::Partitioner;

/// What one provider produced.
#[derive(Debug, Clone)]
pub struct ProviderReport {
    /// Provider display name.
    pub provider: String,
    /// Directory holding the provider's pages.
    pub dir: PathBuf,
    /// The provider's index page (`<slug>.md`).
    pub index_page: PathBuf,
    /// Section pages, in navigation order.
    pub section_pages: Vec<PathBuf>,
    /// Whether the navigation container was found in the fetched page.
    pub nav_found: bool,
}

/// Result of a full wiki build.
#[derive(Debug)]
pub struct WikiReport {
    /// Root directory of the wiki.
    pub output_root: PathBuf,
    /// Per-provider results, in processing order.
    pub providers: Vec<ProviderReport>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

impl WikiReport {
    /// Total number of pages written, index pages included.
    pub fn page_count(&self) -> usize {
        self.providers
            .iter()
            .map(|p| 1 + p.section_pages.len())
            .sum()
    }
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called before a provider is processed (`current` is 1-based).
    fn provider_started(&self, provider: &Provider, current: usize, total: usize);
    /// Called after a provider's pages are written.
    fn provider_done(&self, report: &ProviderReport);
    /// Called when the whole build completes.
    fn done(&self, report: &WikiReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn provider_started(&self, _provider: &Provider, _current: usize, _total: usize) {}
    fn provider_done(&self, _report: &ProviderReport) {}
    fn done(&self, _report: &WikiReport) {}
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds the wiki for every configured provider.
pub struct WikiBuilder {
    config: WikiConfig,
    fetcher: Fetcher,
}

impl WikiBuilder {
    pub fn new(config: WikiConfig) -> Result<Self> {
        let fetcher = Fetcher::new(FetchOptions::from(&config))?;
        Ok(Self { config, fetcher })
    }

    /// Process every provider in order under the configured output root.
    ///
    /// The first error aborts the build; pages already written stay on disk.
    #[instrument(skip_all, fields(root = %self.config.output_root.display()))]
    pub async fn build(&self, progress: &dyn ProgressReporter) -> Result<WikiReport> {
        let start = Instant::now();
        let root = &self.config.output_root;
        fs::create_dir_all(root).map_err(|e| DocWikiError::io(root, e))?;

        let total = self.config.providers.len();
        info!(providers = total, "building wiki");

        let mut providers = Vec::with_capacity(total);
        for (i, provider) in self.config.providers.iter().enumerate() {
            progress.provider_started(provider, i + 1, total);
            let report = self.process_provider(provider).await?;
            progress.provider_done(&report);
            providers.push(report);
        }

        let report = WikiReport {
            output_root: root.clone(),
            providers,
            elapsed: start.elapsed(),
        };

        info!(
            pages = report.page_count(),
            elapsed_ms = report.elapsed.as_millis() as u64,
            "wiki build complete"
        );
        progress.done(&report);

        Ok(report)
    }

    /// Write one provider's directory: index page, then one page per section.
    ///
    /// Fails if the provider directory already exists. Errors carry the
    /// provider name.
    #[instrument(skip_all, fields(provider = %provider))]
    pub async fn process_provider(&self, provider: &Provider) -> Result<ProviderReport> {
        self.write_provider(provider)
            .await
            .map_err(|e| e.for_provider(provider.name()))
    }

    async fn write_provider(&self, provider: &Provider) -> Result<ProviderReport> {
        let dir = self.config.output_root.join(provider.slug());
        fs::create_dir(&dir).map_err(|e| DocWikiError::io(&dir, e))?;

        let mut index = open_index_page(&dir, provider, self.config.columns)?;

        let url = self.fetcher.provider_url(provider)?;
        info!(%url, "fetching provider page");
        let body = match self.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(e) if self.config.lenient_fetch => {
                warn!(error = %e, "fetch failed, writing index page without navigation");
                String::new()
            }
            Err(e) => return Err(e),
        };

        let doc = Html::parse_document(&body);
        if !doc.errors.is_empty() {
            debug!(count = doc.errors.len(), "HTML parser recovered from errors");
        }

        let sections = write_navigation(&doc, &mut index, &dir, provider.slug(), &self.config)?;
        let (index_page, _) = index.finish()?;

        let report = ProviderReport {
            provider: provider.name().to_string(),
            dir,
            index_page,
            nav_found: sections.is_some(),
            section_pages: sections.unwrap_or_default(),
        };

        info!(
            sections = report.section_pages.len(),
            nav_found = report.nav_found,
            "provider pages written"
        );

        Ok(report)
    }
}

// ---------------------------------------------------------------------------
// Page bootstrapping
// ---------------------------------------------------------------------------

/// Create `<dir>/<slug>.md` with the title, home link and an empty table frame.
pub fn open_index_page(
    dir: &Path,
    provider: &Provider,
    columns: usize,
) -> Result<Page<BufWriter<File>>> {
    let path = dir.join(format!("{}.md", provider.slug()));
    let mut page = Page::create(path, columns)?;

    page.write_raw(&heading(provider.name()))?;
    page.write_raw(&home_link())?;
    page.write_table_header()?;

    Ok(page)
}

/// Locate the navigation container in `doc` and partition it into `index`
/// and section pages under `dir`.
///
/// Returns the section pages written, or `None` when the document has no
/// navigation container (the index page is then left as-is).
pub fn write_navigation<W: Write>(
    doc: &Html,
    index: &mut Page<W>,
    dir: &Path,
    base_name: &str,
    config: &WikiConfig,
) -> Result<Option<Vec<PathBuf>>> {
    let nav = match locate(doc.tree.root(), &config.nav) {
        Search::Found(node) => node,
        Search::NotFound => {
            warn!(
                tag = %config.nav.tag,
                class = %config.nav.class,
                "navigation container not found"
            );
            return Ok(None);
        }
    };

    let mut partitioner = Partitioner::new(
        dir,
        base_name,
        config.columns,
        &config.docs_host,
        &config.exclude_titles,
    );
    partitioner.run(nav, index)?;

    Ok(Some(partitioner.into_created()))
}
