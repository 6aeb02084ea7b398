//! Application configuration for docwiki.
//!
//! User config lives at `~/.docwiki/docwiki.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DocWikiError, Result};
use crate::types::{DEFAULT_COLUMNS, DEFAULT_PROVIDERS, NavSignature, Provider};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docwiki.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docwiki";

// ---------------------------------------------------------------------------
// Config structs (matching docwiki.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Provider display names, processed in this order.
    #[serde(default = "default_providers")]
    pub providers: Vec<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Documentation site settings.
    #[serde(default)]
    pub site: SiteConfig,

    /// Navigation container detection and filtering.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
            defaults: DefaultsConfig::default(),
            site: SiteConfig::default(),
            navigation: NavigationConfig::default(),
        }
    }
}

fn default_providers() -> Vec<String> {
    DEFAULT_PROVIDERS.iter().map(|p| p.to_string()).collect()
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Root directory the wiki is written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Column count of generated tables.
    #[serde(default = "default_columns")]
    pub columns: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            columns: default_columns(),
        }
    }
}

fn default_output_dir() -> String {
    "wiki".into()
}
fn default_columns() -> usize {
    DEFAULT_COLUMNS
}

/// `[site]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Scheme and host of the documentation site; also prefixed to `/docs` links.
    #[serde(default = "default_docs_host")]
    pub docs_host: String,

    /// Path under which provider index pages live.
    #[serde(default = "default_providers_path")]
    pub providers_path: String,

    /// HTTP timeout for a provider page fetch.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Treat a failed fetch as an empty page instead of aborting the run.
    #[serde(default)]
    pub lenient_fetch: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            docs_host: default_docs_host(),
            providers_path: default_providers_path(),
            timeout_secs: default_timeout_secs(),
            lenient_fetch: false,
        }
    }
}

fn default_docs_host() -> String {
    "https://www.terraform.io".into()
}
fn default_providers_path() -> String {
    "/docs/providers".into()
}
fn default_timeout_secs() -> u64 {
    30
}

/// `[navigation]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Tag name of the navigation container.
    #[serde(default = "default_container_tag")]
    pub container_tag: String,

    /// Exact `class` attribute of the navigation container.
    #[serde(default = "default_container_class")]
    pub container_class: String,

    /// Top-level entry titles that never get their own page (exact match).
    #[serde(default = "default_exclude_titles")]
    pub exclude_titles: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            container_tag: default_container_tag(),
            container_class: default_container_class(),
            exclude_titles: default_exclude_titles(),
        }
    }
}

fn default_container_tag() -> String {
    NavSignature::default().tag
}
fn default_container_class() -> String {
    NavSignature::default().class
}
fn default_exclude_titles() -> Vec<String> {
    vec!["All Providers".into(), "AWS Provider".into()]
}

// ---------------------------------------------------------------------------
// Wiki config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime wiki configuration — merged from config file + CLI flags and validated.
#[derive(Debug, Clone)]
pub struct WikiConfig {
    /// Providers in processing order.
    pub providers: Vec<Provider>,
    /// Root directory the wiki is written into.
    pub output_root: PathBuf,
    /// Column count of generated tables (always >= 1).
    pub columns: usize,
    /// Documentation host without a trailing slash.
    pub docs_host: String,
    /// Path under which provider index pages live, without a trailing slash.
    pub providers_path: String,
    /// HTTP timeout in seconds.
    pub timeout_secs: u64,
    /// Whether a failed fetch degrades to an empty page.
    pub lenient_fetch: bool,
    /// Navigation container signature.
    pub nav: NavSignature,
    /// Excluded top-level entry titles.
    pub exclude_titles: Vec<String>,
}

impl TryFrom<&AppConfig> for WikiConfig {
    type Error = DocWikiError;

    fn try_from(config: &AppConfig) -> Result<Self> {
        if config.defaults.columns == 0 {
            return Err(DocWikiError::config("defaults.columns must be at least 1"));
        }
        if config.providers.is_empty() {
            return Err(DocWikiError::config("no providers configured"));
        }

        let docs_host = config.site.docs_host.trim_end_matches('/').to_string();
        let parsed = Url::parse(&docs_host).map_err(|e| {
            DocWikiError::parse(format!("invalid docs_host '{docs_host}': {e}"))
        })?;
        if parsed.host_str().is_none() {
            return Err(DocWikiError::config(format!(
                "docs_host '{docs_host}' has no host"
            )));
        }

        let providers = config
            .providers
            .iter()
            .map(Provider::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            providers,
            output_root: PathBuf::from(&config.defaults.output_dir),
            columns: config.defaults.columns,
            docs_host,
            providers_path: format!(
                "/{}",
                config.site.providers_path.trim_matches('/')
            ),
            timeout_secs: config.site.timeout_secs,
            lenient_fetch: config.site.lenient_fetch,
            nav: NavSignature {
                tag: config.navigation.container_tag.clone(),
                class: config.navigation.container_class.clone(),
            },
            exclude_titles: config.navigation.exclude_titles.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.docwiki/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocWikiError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.docwiki/docwiki.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| DocWikiError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| DocWikiError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| DocWikiError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocWikiError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocWikiError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("output_dir"));
        assert!(toml_str.contains("nav docs-sidenav"));
        assert!(toml_str.contains("All Providers"));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.columns, 2);
        assert_eq!(parsed.providers, default_providers());
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
providers = ["Google"]

[navigation]
exclude_titles = ["Google Provider"]
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.providers, vec!["Google".to_string()]);
        assert_eq!(config.navigation.exclude_titles, vec!["Google Provider"]);
        assert_eq!(config.navigation.container_tag, "ul");
        assert_eq!(config.site.docs_host, "https://www.terraform.io");
        assert!(!config.site.lenient_fetch);
    }

    #[test]
    fn wiki_config_from_app_config() {
        let mut app = AppConfig::default();
        app.site.docs_host = "https://docs.example.com/".into();
        app.site.providers_path = "docs/providers/".into();

        let wiki = WikiConfig::try_from(&app).expect("valid config");
        assert_eq!(wiki.docs_host, "https://docs.example.com");
        assert_eq!(wiki.providers_path, "/docs/providers");
        assert_eq!(wiki.columns, 2);
        assert_eq!(wiki.providers.len(), 5);
        assert_eq!(wiki.providers[1].slug(), "azurerm");
        assert_eq!(wiki.output_root, PathBuf::from("wiki"));
    }

    #[test]
    fn wiki_config_rejects_invalid_values() {
        let mut app = AppConfig::default();
        app.defaults.columns = 0;
        assert!(WikiConfig::try_from(&app).is_err());

        let mut app = AppConfig::default();
        app.site.docs_host = "not a url".into();
        let err = WikiConfig::try_from(&app).unwrap_err();
        assert!(err.to_string().contains("invalid docs_host"));

        let mut app = AppConfig::default();
        app.providers = vec!["AWS".into(), String::new()];
        assert!(WikiConfig::try_from(&app).is_err());
    }
}
