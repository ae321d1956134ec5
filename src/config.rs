use crate::domain::BoardConfig;
use crate::drag::Point;
use crate::error::{BoardError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Top-level settings: board layout plus drag behaviour
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub board: BoardConfig,
    pub drag: DragConfig,
}

impl Config {
    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.board.columns.is_empty() {
            return Err(BoardError::ConfigError(
                "board needs at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for name in &self.board.columns {
            if name.trim().is_empty() {
                return Err(BoardError::ConfigError("column names cannot be empty".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(BoardError::ConfigError(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
        }

        if self.board.max_card_len == 0 {
            return Err(BoardError::ConfigError(
                "max_card_len must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

/// Drag behaviour settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Added to the dragged card's position, e.g. (-25, -10) to offset a card header
    pub visual_offset_x: f64,
    pub visual_offset_y: f64,
    /// A drag with no pointer activity for this many seconds is cancelled. 0 = disabled.
    pub idle_timeout_secs: u32,
}

impl DragConfig {
    pub fn visual_offset(&self) -> Point {
        Point::new(self.visual_offset_x, self.visual_offset_y)
    }

    pub fn idle_timeout(&self) -> Option<chrono::Duration> {
        (self.idle_timeout_secs > 0)
            .then(|| chrono::Duration::seconds(i64::from(self.idle_timeout_secs)))
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            visual_offset_x: 0.0,
            visual_offset_y: 0.0,
            idle_timeout_secs: 30,
        }
    }
}
