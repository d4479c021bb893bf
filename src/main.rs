//! Graduates Dashboard CLI
//!
//! - `serve`: host the built dashboard under its base path
//! - `render`: print the page a URL produces, without a browser
//! - `config`: print or write a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use graduates_dashboard::config::{generate_default_config, Config, LoggingConfig};
use graduates_dashboard::dashboard::Page;
use graduates_dashboard::dataset::DATASET;
use graduates_dashboard::state::{MemoryHistory, Theme, ViewController};

#[derive(Parser)]
#[command(name = "graduates-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "AlmaLaurea 2024 Computer Science graduates dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: user config dir, then ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the built dashboard
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
        /// Override the configured dist directory
        #[arg(long)]
        dist_dir: Option<PathBuf>,
    },

    /// Render the page a URL shows on first load
    Render {
        /// Page URL, e.g. "/?lang=en#studies"
        #[arg(default_value = "/")]
        url: String,
        /// Theme (light, dark)
        #[arg(long, default_value = "light")]
        theme: Theme,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, dist_dir } => {
            let resolved = Config::resolve(cli.config.as_deref()).context("Failed to load configuration")?;
            init_tracing(&resolved.config.logging);
            resolved.log();

            let mut config = resolved.config;

            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dist_dir) = dist_dir {
                config.server.dist_dir = dist_dir;
            }

            tracing::info!("Starting graduates dashboard v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Serving assets from {:?}", config.server.dist_dir);

            graduates_dashboard::server::serve(&config.server)
                .await
                .context("Dashboard host failed")?;
        }

        Commands::Render { url, theme, format } => {
            let mut controller = ViewController::new(MemoryHistory::new(&url));
            if theme != controller.state().theme {
                controller.toggle_theme();
            }

            let page = Page::build(&controller.state(), &DATASET);
            match format {
                OutputFormat::Text => print!("{}", page),
                OutputFormat::Json => {
                    let json = serde_json::to_string_pretty(&page).context("Failed to serialize page")?;
                    println!("{}", json);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)
                            .with_context(|| format!("Failed to create {:?}", parent))?;
                    }
                    std::fs::write(&path, &config).with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured level; logs go to stderr
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("graduates_dashboard={},tower_http={}", logging.level, logging.level).into()
    });
    let json = logging.format.eq_ignore_ascii_case("json");

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}
