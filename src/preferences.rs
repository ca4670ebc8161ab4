use crate::error::{HunterError, Result};
use crate::storage::{SharedStorage, THEME_KEY, VIEW_MODE_KEY};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = HunterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(HunterError::ValidationFailure(format!("unknown theme '{other}'"))),
        }
    }
}

/// How listing results are laid out
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = HunterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(HunterError::ValidationFailure(format!("unknown view mode '{other}'"))),
        }
    }
}

/// Device-wide display preferences.
///
/// Both values are stored as bare strings, not JSON.
pub struct Preferences {
    storage: SharedStorage,
    theme: Theme,
    view_mode: ViewMode,
}

impl Preferences {
    /// Read saved preferences, writing the default theme when none is saved
    pub fn load(storage: SharedStorage) -> Result<Self> {
        let theme = match read::<Theme>(&storage, THEME_KEY)? {
            Some(theme) => theme,
            None => {
                debug!("No saved theme, defaulting to {}", Theme::default());
                storage
                    .set(THEME_KEY, Theme::default().as_str())
                    .map_err(HunterError::storage)?;
                Theme::default()
            }
        };
        let view_mode = read::<ViewMode>(&storage, VIEW_MODE_KEY)?.unwrap_or_default();

        Ok(Self {
            storage,
            theme,
            view_mode,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.theme.toggled();
        self.storage
            .set(THEME_KEY, theme.as_str())
            .map_err(HunterError::storage)?;
        self.theme = theme;
        Ok(theme)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) -> Result<()> {
        self.storage
            .set(VIEW_MODE_KEY, view_mode.as_str())
            .map_err(HunterError::storage)?;
        self.view_mode = view_mode;
        Ok(())
    }
}

/// Unknown stored values fall back to the default
fn read<T: FromStr>(storage: &SharedStorage, key: &str) -> Result<Option<T>> {
    let raw = storage.get(key).map_err(HunterError::storage)?;
    Ok(raw.and_then(|raw| match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring unknown {} value '{}'", key, raw);
            None
        }
    }))
}
