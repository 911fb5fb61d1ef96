//! Color theme carried as session view-state.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Light or dark presentation theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
pub enum Theme {
    /// Light background.
    #[default]
    #[display("light")]
    Light,
    /// Dark background.
    #[display("dark")]
    Dark,
}

impl Theme {
    /// Returns the other theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
