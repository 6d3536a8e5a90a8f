// src/infra/errors.rs — Error types for the portal

use thiserror::Error;

use crate::charts::ChartError;

#[derive(Error, Debug)]
pub enum PortalError {
    // Data errors
    #[error("Chart data rejected: {0}")]
    Chart(#[from] ChartError),

    #[error("Unknown data series '{key}'")]
    UnknownSeries { key: String },

    #[error("Link references unknown node '{id}'")]
    UnknownNode { id: String },

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset '{path}' is invalid: {message}")]
    Dataset { path: String, message: String },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_error_converts() {
        let err: PortalError = ChartError::EmptySeries.into();
        assert!(matches!(err, PortalError::Chart(ChartError::EmptySeries)));
        assert!(err.to_string().starts_with("Chart data rejected"));
    }

    #[test]
    fn test_io_error_message() {
        let err: PortalError = std::io::Error::other("disk").into();
        assert_eq!(err.to_string(), "IO error: disk");
    }

    #[test]
    fn test_unknown_node_message() {
        let err = PortalError::UnknownNode {
            id: "Chandrayaan".into(),
        };
        assert_eq!(err.to_string(), "Link references unknown node 'Chandrayaan'");
    }
}
