//! Core documentation-tree to wiki transducer for docwiki.
//!
//! This crate walks a parsed provider page, finds its navigation container
//! and partitions it into a linked set of Markdown pages:
//! - [`locate`] — short-circuiting search for the navigation container
//! - [`partition`] — recursive split of top-level entries into section pages
//! - [`link`] — anchor → Markdown token rendering
//! - [`pipeline`] — per-provider bootstrapping and the full `build` run

pub mod dom;
pub mod link;
pub mod locate;
pub mod page;
pub mod partition;
pub mod pipeline;

pub use link::{LinkToken, render_link};
pub use locate::{Search, locate};
pub use page::Page;
pub use partition::{Partitioner, section_page_name};
pub use pipeline::{ProgressReporter, ProviderReport, SilentProgress, WikiBuilder, WikiReport};
