//! Markdown emission for wiki pages.
//!
//! Provides the output sinks ([`RawSink`], [`TableSink`]) and the small set of
//! Markdown fragments every generated page is built from.

mod sink;

pub use sink::{RawSink, TableSink};

/// Link target of the wiki's landing page.
pub const HOME_PAGE: &str = "Home";

/// `# title` followed by a blank line.
pub fn heading(title: &str) -> String {
    format!("# {title}\n\n")
}

/// Inline Markdown link `[text](href)`.
pub fn link(text: &str, href: &str) -> String {
    format!("[{text}]({href})")
}

/// Link back to the parent page, on its own line.
pub fn back_link(page: &str) -> String {
    format!("{}\n", link(page, page))
}

/// Link to the wiki's landing page, followed by a blank line.
pub fn home_link() -> String {
    format!("{}\n\n", link(HOME_PAGE, HOME_PAGE))
}

/// The header row of `columns` empty cells and its `---` separator row.
pub fn table_frame(columns: usize) -> String {
    let mut frame = "| ".repeat(columns);
    frame.push_str("|\n");
    frame.push_str(&"| --- ".repeat(columns));
    frame.push_str("|\n");
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_frame_two_columns() {
        assert_eq!(table_frame(2), "| | |\n| --- | --- |\n");
    }

    #[test]
    fn table_frame_token_counts() {
        for columns in 1..=5 {
            let frame = table_frame(columns);
            let mut lines = frame.lines();
            let header = lines.next().unwrap();
            let separator = lines.next().unwrap();
            assert!(lines.next().is_none());

            assert_eq!(header, format!("{}|", "| ".repeat(columns)));
            assert_eq!(separator.matches("| --- ").count(), columns);
            assert!(separator.ends_with("|"));
        }
    }

    #[test]
    fn page_fragments() {
        assert_eq!(heading("AWS"), "# AWS\n\n");
        assert_eq!(link("EC2", "aws_ec2"), "[EC2](aws_ec2)");
        assert_eq!(back_link("aws"), "[aws](aws)\n");
        assert_eq!(home_link(), "[Home](Home)\n\n");
    }
}
