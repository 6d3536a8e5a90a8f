// src/portal/theme.rs — Process-wide light/dark presentation state.
//
// The shell owns the single `ThemeContext`; everything else holds a
// `ThemeSubscription` and only reads from it. Dropping a subscription
// unsubscribes.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{other}' (expected light or dark)")),
        }
    }
}

/// Owner of the current theme.
#[derive(Debug)]
pub struct ThemeContext {
    tx: watch::Sender<ThemeMode>,
}

/// Read-only view of the theme handed to presentation components.
#[derive(Debug, Clone)]
pub struct ThemeSubscription {
    rx: watch::Receiver<ThemeMode>,
}

impl ThemeContext {
    pub fn new(initial: ThemeMode) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn current(&self) -> ThemeMode {
        *self.tx.borrow()
    }

    pub fn toggle(&self) -> ThemeMode {
        let mut next = ThemeMode::Light;
        self.tx.send_modify(|mode| {
            *mode = mode.toggle();
            next = *mode;
        });
        tracing::debug!("Theme switched to {}", next);
        next
    }

    pub fn set(&self, mode: ThemeMode) {
        self.tx.send_if_modified(|current| {
            if *current == mode {
                false
            } else {
                *current = mode;
                true
            }
        });
    }

    pub fn subscribe(&self) -> ThemeSubscription {
        ThemeSubscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl ThemeSubscription {
    pub fn current(&self) -> ThemeMode {
        *self.rx.borrow()
    }

    /// True once per change since the last call to `current_if_changed`.
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// The theme, marking it seen.
    pub fn current_if_changed(&mut self) -> Option<ThemeMode> {
        if self.has_changed() {
            Some(*self.rx.borrow_and_update())
        } else {
            None
        }
    }

    /// Wait until the theme changes. Returns `None` when the context is gone.
    pub async fn changed(&mut self) -> Option<ThemeMode> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}
