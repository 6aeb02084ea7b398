//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;
use docwiki_core::pipeline::{ProgressReporter, ProviderReport, WikiBuilder, WikiReport};
use docwiki_shared::{AppConfig, Provider, WikiConfig, init_config, load_config, load_config_from};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// docwiki — turn provider documentation into a Markdown wiki.
#[derive(Parser)]
#[command(
    name = "docwiki",
    version,
    about = "Turn a provider documentation site into a linked set of Markdown wiki pages.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.docwiki/docwiki.toml.
    #[arg(long, env = "DOCWIKI_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Build the wiki for every configured provider.
    Build {
        /// Output directory (defaults to `wiki`).
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Provider to build; repeat to build several, in order.
        #[arg(short, long = "provider")]
        providers: Vec<String>,

        /// Documentation host, e.g. https://www.terraform.io.
        #[arg(long)]
        docs_host: Option<String>,

        /// Write an index page without navigation when a fetch fails.
        #[arg(long)]
        lenient: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "docwiki=info",
        1 => "docwiki=debug",
        _ => "docwiki=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Build {
            out,
            providers,
            docs_host,
            lenient,
        } => {
            let overrides = BuildOverrides {
                out,
                providers,
                docs_host,
                lenient,
            };
            cmd_build(config_path, overrides).await
        }
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init().await,
            ConfigAction::Show => cmd_config_show(config_path).await,
        },
    }
}

/// Load the config file named on the command line, or the default one.
fn resolve_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(p) => load_config_from(p)?,
        None => load_config()?,
    };
    Ok(config)
}

/// `build` flags that override config file values.
#[derive(Debug, Default)]
struct BuildOverrides {
    out: Option<PathBuf>,
    providers: Vec<String>,
    docs_host: Option<String>,
    lenient: bool,
}

impl BuildOverrides {
    fn apply(self, config: &mut AppConfig) {
        if let Some(out) = self.out {
            config.defaults.output_dir = out.to_string_lossy().to_string();
        }
        if !self.providers.is_empty() {
            config.providers = self.providers;
        }
        if let Some(host) = self.docs_host {
            config.site.docs_host = host;
        }
        if self.lenient {
            config.site.lenient_fetch = true;
        }
    }
}

async fn cmd_build(config_path: Option<&Path>, overrides: BuildOverrides) -> Result<()> {
    let mut config = resolve_config(config_path)?;
    overrides.apply(&mut config);
    let wiki_config = WikiConfig::try_from(&config)?;

    info!(
        output = %wiki_config.output_root.display(),
        providers = wiki_config.providers.len(),
        docs_host = %wiki_config.docs_host,
        "building wiki"
    );

    let builder = WikiBuilder::new(wiki_config)?;
    let reporter = CliProgress::new();
    let result = builder.build(&reporter).await;
    let report = match result {
        Ok(report) => report,
        Err(e) => {
            reporter.spinner.abandon_with_message("build failed");
            return Err(e.into());
        }
    };

    println!();
    println!("  Wiki built!");
    println!("  Root:   {}", report.output_root.display());
    for provider in &report.providers {
        let nav = if provider.nav_found {
            ""
        } else {
            "  (no navigation found)"
        };
        println!(
            "  {:<10} {} section page(s){nav}",
            provider.provider,
            provider.section_pages.len()
        );
    }
    println!("  Pages:  {}", report.page_count());
    println!("  Time:   {:.1}s", report.elapsed.as_secs_f64());
    println!();

    Ok(())
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg}") {
            spinner.set_style(
                style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
            );
        }
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn provider_started(&self, provider: &Provider, current: usize, total: usize) {
        self.spinner
            .set_message(format!("Building [{current}/{total}] {provider}"));
    }

    fn provider_done(&self, report: &ProviderReport) {
        self.spinner.println(format!(
            "  ✓ {} → {}",
            report.provider,
            report.index_page.display()
        ));
    }

    fn done(&self, _report: &WikiReport) {
        self.spinner.finish_and_clear();
    }
}

async fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

async fn cmd_config_show(config_path: Option<&Path>) -> Result<()> {
    let config = resolve_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
