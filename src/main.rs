// src/main.rs — mosdac entry point

use clap::Parser;

use mosdac_portal::cli::chart::ChartRequest;
use mosdac_portal::cli::{Cli, Commands};
use mosdac_portal::infra::config::Config;
use mosdac_portal::infra::logger;
use mosdac_portal::portal::open_source;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG / MOSDAC_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        None | Some(Commands::Portal) => {
            let source = open_source(&config);
            mosdac_portal::tui::run_portal(&config, source).await
        }
        Some(Commands::Chat) => mosdac_portal::cli::chat::run_chat(&config).await,
        Some(Commands::Chart {
            kind,
            series,
            format,
            theme,
            hover,
            output,
        }) => {
            let source = open_source(&config);
            let req = ChartRequest {
                kind,
                series,
                format,
                theme: theme.unwrap_or(config.portal.theme),
                hover,
            };
            mosdac_portal::cli::chart::run_chart(&config, source.as_ref(), req, output.as_deref())
                .await
        }
        Some(Commands::Catalog { search, json }) => {
            let source = open_source(&config);
            mosdac_portal::cli::catalog::run_catalog(source.as_ref(), &search, json).await
        }
        Some(Commands::Graph { search, kind, json }) => {
            let source = open_source(&config);
            mosdac_portal::cli::graph::run_graph(source.as_ref(), &search, kind, json).await
        }
    }
}
