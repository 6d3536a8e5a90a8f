// src/portal/navigation.rs — Page keys and the page-switch capability

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    AiAssistant,
    KnowledgeGraph,
    DataVisualization,
    ProductCatalog,
    LiveSatelliteTracker,
    MissionExplorer,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::AiAssistant,
        Page::KnowledgeGraph,
        Page::DataVisualization,
        Page::ProductCatalog,
        Page::LiveSatelliteTracker,
        Page::MissionExplorer,
    ];

    /// Resolve a routing key. Anything unrecognized lands on `Home`.
    pub fn from_key(key: &str) -> Self {
        match key.trim() {
            "home" => Page::Home,
            "aiassistant" => Page::AiAssistant,
            "knowledgegraph" => Page::KnowledgeGraph,
            "datavisualization" => Page::DataVisualization,
            "productcatalog" => Page::ProductCatalog,
            "livesatellitetracker" => Page::LiveSatelliteTracker,
            "missionexplorer" => Page::MissionExplorer,
            other => {
                tracing::debug!("Unknown page key '{}', falling back to home", other);
                Page::Home
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::AiAssistant => "aiassistant",
            Page::KnowledgeGraph => "knowledgegraph",
            Page::DataVisualization => "datavisualization",
            Page::ProductCatalog => "productcatalog",
            Page::LiveSatelliteTracker => "livesatellitetracker",
            Page::MissionExplorer => "missionexplorer",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::AiAssistant => "AI Assistant",
            Page::KnowledgeGraph => "Knowledge Graph",
            Page::DataVisualization => "Data Visualization",
            Page::ProductCatalog => "Product Catalog",
            Page::LiveSatelliteTracker => "Live Satellite Tracker",
            Page::MissionExplorer => "Mission Explorer",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(i: usize) -> Self {
        Self::ALL[i % Self::ALL.len()]
    }

    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(&self) -> Self {
        Self::from_index(self.index() + Self::ALL.len() - 1)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.key())
    }
}

/// The capability handed to every page: the only way to change pages.
pub trait Navigate {
    fn set_page(&mut self, key: &str) -> Page;
}

/// Holds the active page and remembers where it came from.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Page,
    previous: Option<Page>,
}

impl Navigator {
    pub fn new(start: Page) -> Self {
        Self {
            current: start,
            previous: None,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn previous(&self) -> Option<Page> {
        self.previous
    }

    pub fn go(&mut self, page: Page) -> Page {
        if page != self.current {
            tracing::debug!("Navigate {} -> {}", self.current, page);
            self.previous = Some(self.current);
            self.current = page;
        }
        self.current
    }

    pub fn home(&mut self) -> Page {
        self.go(Page::Home)
    }
}

impl Navigate for Navigator {
    fn set_page(&mut self, key: &str) -> Page {
        self.go(Page::from_key(key))
    }
}
