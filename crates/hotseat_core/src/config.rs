//! Game setup configuration, read from TOML.
//!
//! ```toml
//! width = 8
//! height = 8
//! first_team = "white"
//! placement = "r3k2r/8/8/8/8/8/8/R3K2R"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::SetupError;
use crate::types::Team;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: i8,
    pub height: i8,
    /// FEN-style piece placement; the standard layout when absent.
    pub placement: Option<String>,
    pub first_team: Team,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            placement: None,
            first_team: Team::White,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, SetupError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let text = std::fs::read_to_string(path).map_err(|source| SetupError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Builds the initial board this configuration describes.
    pub fn build_board(&self) -> Result<Board, SetupError> {
        match &self.placement {
            Some(placement) => Board::from_placement(self.width, self.height, placement),
            None if self.width == 8 && self.height == 8 => Ok(Board::standard()),
            None => Err(SetupError::NonStandardBoard {
                width: self.width,
                height: self.height,
            }),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
