//! Core domain types for docwiki runs.

use serde::{Deserialize, Serialize};

use crate::error::{DocWikiError, Result};

/// Providers processed when no list is configured, in processing order.
pub const DEFAULT_PROVIDERS: [&str; 5] = ["AWS", "AzureRM", "Google", "Alicloud", "OpenStack"];

/// Column count of every generated Markdown table.
pub const DEFAULT_COLUMNS: usize = 2;

// ---------------------------------------------------------------------------
// Provider
// ---------------------------------------------------------------------------

/// A documentation provider — the unit of work for one wiki section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    name: String,
    slug: String,
}

impl Provider {
    /// Create a provider from its display name (e.g. `AzureRM`).
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DocWikiError::validation("provider name is empty"));
        }
        if trimmed.contains(['/', '\\']) {
            return Err(DocWikiError::validation(format!(
                "provider name '{trimmed}' must not contain path separators"
            )));
        }

        Ok(Self {
            slug: trimmed.to_lowercase(),
            name: trimmed.to_string(),
        })
    }

    /// Display name, used for the page title.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased name, used for the directory, base file name and URL segment.
    pub fn slug(&self) -> &str {
        &self.slug
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

// ---------------------------------------------------------------------------
// NavSignature
// ---------------------------------------------------------------------------

/// Tag and class that identify the navigation container in a provider page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavSignature {
    /// Element name, e.g. `ul`.
    pub tag: String,
    /// Exact value of the `class` attribute, e.g. `nav docs-sidenav`.
    pub class: String,
}

impl Default for NavSignature {
    fn default() -> Self {
        Self {
            tag: "ul".into(),
            class: "nav docs-sidenav".into(),
        }
    }
}
