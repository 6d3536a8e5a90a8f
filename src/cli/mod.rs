// src/cli/mod.rs — CLI definition (clap derive)

pub mod catalog;
pub mod chart;
pub mod chat;
pub mod graph;

use clap::{Parser, Subcommand, ValueEnum};

use crate::portal::graph::EntityKind;
use crate::portal::theme::ThemeMode;

#[derive(Parser)]
#[command(name = "mosdac", about = "MOSDAC AI portal for satellite data", version)]
pub struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the terminal portal (default)
    Portal,
    /// Talk to the assistant from the command line
    Chat,
    /// Export a chart as SVG or JSON geometry
    Chart {
        /// Chart type
        #[arg(value_enum)]
        kind: ChartKind,
        /// Dataset series key (defaults to the portal's series for the chart type)
        #[arg(long)]
        series: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value = "svg")]
        format: ChartFormat,
        /// Color theme (defaults to the configured one)
        #[arg(long)]
        theme: Option<ThemeMode>,
        /// Point (line) or slice (pie) to show as hovered
        #[arg(long)]
        hover: Option<usize>,
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Search the product catalog
    Catalog {
        /// Match against name, satellite and location
        #[arg(short, long, default_value = "")]
        search: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Explore the knowledge graph
    Graph {
        /// Match against entity names
        #[arg(short, long, default_value = "")]
        search: String,
        /// Only show entities of this type (satellite, mission, location, data)
        #[arg(long)]
        kind: Option<EntityKind>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Line,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartFormat {
    Svg,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_means_portal() {
        let cli = Cli::try_parse_from(["mosdac"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parse_chart_args() {
        let cli = Cli::try_parse_from([
            "mosdac", "chart", "pie", "--format", "json", "--theme", "dark", "--hover", "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Chart {
                kind,
                format,
                theme,
                hover,
                series,
                output,
            }) => {
                assert_eq!(kind, ChartKind::Pie);
                assert_eq!(format, ChartFormat::Json);
                assert_eq!(theme, Some(ThemeMode::Dark));
                assert_eq!(hover, Some(2));
                assert!(series.is_none());
                assert!(output.is_none());
            }
            _ => panic!("expected chart command"),
        }
    }

    #[test]
    fn test_parse_graph_kind() {
        let cli =
            Cli::try_parse_from(["mosdac", "graph", "--kind", "satellite", "--config", "x.toml"])
                .unwrap();
        assert_eq!(cli.config.as_deref(), Some("x.toml"));
        match cli.command {
            Some(Commands::Graph { kind, .. }) => assert_eq!(kind, Some(EntityKind::Satellite)),
            _ => panic!("expected graph command"),
        }
    }

    #[test]
    fn test_bad_theme_rejected() {
        assert!(Cli::try_parse_from(["mosdac", "chart", "line", "--theme", "sepia"]).is_err());
    }
}
