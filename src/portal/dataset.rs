// src/portal/dataset.rs — TOML dataset file as a data source

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use super::catalog::Product;
use super::data::{BuiltinData, Capability, PortalData, PortalDataSource};
use super::graph::KnowledgeGraph;
use super::stats::Stat;
use crate::charts::{ChartPoint, PieSlice};
use crate::infra::config::Config;
use crate::infra::errors::PortalError;

/// Portal data read once from a TOML file with the same shape as
/// [`PortalData`]. Missing sections are empty, not built-in.
#[derive(Debug, Clone)]
pub struct DatasetFile {
    path: PathBuf,
    data: PortalData,
}

impl DatasetFile {
    pub fn load(path: &Path) -> Result<Self, PortalError> {
        let content = std::fs::read_to_string(path)?;
        let data = Self::parse(&content).map_err(|e| match e {
            PortalError::Toml(err) => PortalError::Dataset {
                path: path.display().to_string(),
                message: err.message().to_string(),
            },
            other => other,
        })?;
        tracing::info!(
            "Loaded dataset from {} ({} line series, {} pie series, {} products)",
            path.display(),
            data.line_series.len(),
            data.pie_series.len(),
            data.products.len()
        );
        Ok(Self {
            path: path.to_path_buf(),
            data,
        })
    }

    pub fn parse(content: &str) -> Result<PortalData, PortalError> {
        let data: PortalData = toml::from_str(content)?;
        // dangling links should fail at load time, not on first render
        data.graph.segments()?;
        Ok(data)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &PortalData {
        &self.data
    }
}

#[async_trait]
impl PortalDataSource for DatasetFile {
    fn name(&self) -> &str {
        "dataset"
    }

    async fn line_series(&self, key: &str) -> Result<Vec<ChartPoint>, PortalError> {
        self.data.line(key)
    }

    async fn pie_series(&self, key: &str) -> Result<Vec<PieSlice>, PortalError> {
        self.data.pie(key)
    }

    async fn products(&self) -> Result<Vec<Product>, PortalError> {
        Ok(self.data.products.clone())
    }

    async fn knowledge_graph(&self) -> Result<KnowledgeGraph, PortalError> {
        Ok(self.data.graph.clone())
    }

    async fn capabilities(&self) -> Result<Vec<Capability>, PortalError> {
        Ok(self.data.capabilities.clone())
    }

    async fn stats(&self) -> Result<Vec<Stat>, PortalError> {
        Ok(self.data.stats.clone())
    }
}

/// Pick the data source named by the config. An unreadable dataset falls
/// back to the built-in data with a warning.
pub fn open_source(config: &Config) -> Arc<dyn PortalDataSource> {
    match config.data.dataset_path() {
        Some(path) => match DatasetFile::load(&path) {
            Ok(file) => Arc::new(file),
            Err(e) => {
                tracing::warn!("Dataset {} unusable: {e}; using built-in data", path.display());
                Arc::new(BuiltinData::new())
            }
        },
        None => Arc::new(BuiltinData::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r##"
[line_series]
rainfall = [
    { name = "Jul", users = 120.0 },
    { name = "Aug", users = 340.0 },
]

[pie_series]
coverage = [
    { name = "Land", value = 1.0, color = "#10B981" },
    { name = "Sea", value = 3.0, color = "#3B82F6" },
]

[[products]]
name = "Cyclone Track"
satellite = "INSAT-3D"
location = "Bay of Bengal"
resolution = "4km"
date = "2024-05-26"
size = "600 MB"
kind = "optical"

[[graph.nodes]]
id = "INSAT-3D"
x = 100.0
y = 100.0
color = "#4F46E5"
kind = "Satellite"

[[graph.nodes]]
id = "Weather"
x = 300.0
y = 120.0
color = "#8B5CF6"
kind = "Mission"

[[graph.links]]
source = "INSAT-3D"
target = "Weather"

[[stats]]
label = "Active Satellites"
value = 3
"##;

    #[tokio::test]
    async fn test_load_sample_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();
        let ds = DatasetFile::load(file.path()).unwrap();

        let line = ds.line_series("rainfall").await.unwrap();
        assert_eq!(line[1].users, 340.0);
        let pie = ds.pie_series("coverage").await.unwrap();
        assert_eq!(pie.len(), 2);
        assert_eq!(ds.products().await.unwrap()[0].satellite, "INSAT-3D");
        assert_eq!(ds.knowledge_graph().await.unwrap().links.len(), 1);
        assert!(ds.capabilities().await.unwrap().is_empty());
        assert_eq!(ds.stats().await.unwrap()[0].value, 3);
        assert_eq!(ds.path(), file.path());
    }

    #[test]
    fn test_dangling_link_rejected_at_load() {
        let content = r#"
[[graph.links]]
source = "a"
target = "b"
"#;
        let err = DatasetFile::parse(content).unwrap_err();
        assert!(matches!(err, PortalError::UnknownNode { .. }));
    }

    #[test]
    fn test_bad_toml_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[products]\nname = ").unwrap();
        let err = DatasetFile::load(file.path()).unwrap_err();
        assert!(matches!(err, PortalError::Dataset { .. }));
    }

    #[tokio::test]
    async fn test_open_source_falls_back_to_builtin() {
        let mut config = Config::default();
        assert_eq!(open_source(&config).name(), "builtin");

        config.data.dataset = Some("/definitely/not/here.toml".into());
        let src = open_source(&config);
        assert_eq!(src.name(), "builtin");
        assert!(src.line_series(crate::portal::data::MONTHLY_USERS).await.is_ok());
    }

    #[test]
    fn test_open_source_falls_back_on_rejected_dataset() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[[graph.links]]\nsource = \"a\"\ntarget = \"b\"\n").unwrap();
        let mut config = Config::default();
        config.data.dataset = Some(file.path().display().to_string());
        assert_eq!(open_source(&config).name(), "builtin");
    }
}
