use std::fs;
use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use crate::error::GameError;
use crate::grid::Grid;

/// Default board width in pixels.
pub const DEFAULT_GRID_WIDTH: u16 = 600;

/// Default board height in pixels.
pub const DEFAULT_GRID_HEIGHT: u16 = 600;

/// Default edge length of one cell in pixels.
pub const DEFAULT_CELL_SIZE: u16 = 10;

/// Simulation tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Number of countdown steps shown before the game starts running.
pub const DEFAULT_COUNTDOWN_STEPS: u32 = 3;

/// Duration of one countdown step in milliseconds.
pub const DEFAULT_COUNTDOWN_STEP_MS: u64 = 1000;

/// Segment count of a freshly created snake.
pub const INITIAL_SNAKE_LENGTH: u16 = 5;

/// Food placement attempts before accepting an occupied cell.
pub const DEFAULT_MAX_SPAWN_ATTEMPTS: u32 = 64;

/// Colors applied to all visual elements.
#[derive(Debug)]
pub struct Palette {
    pub snake: Color,
    pub snake_head: Color,
    pub food: Color,
    pub play_bg: Color,
    pub border_fg: Color,
    pub message: Color,
    pub status_text: Color,
}

/// Green snake on dark slate.
pub const PALETTE_DEFAULT: Palette = Palette {
    snake: Color::Rgb(0x0b, 0xf4, 0x5a),
    snake_head: Color::White,
    food: Color::Rgb(0x05, 0x77, 0x55),
    play_bg: Color::Black,
    border_fg: Color::Rgb(0x50, 0x57, 0x68),
    message: Color::Yellow,
    status_text: Color::DarkGray,
};

/// Upper half-block glyph; one terminal row shows two grid rows.
pub const GLYPH_HALF_UPPER: &str = "▀";

/// Tunable session parameters, loadable from a JSON file.
///
/// Every field is optional in the file; missing fields take the defaults
/// above.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub cell_size: u16,
    pub tick_interval_ms: u64,
    pub countdown_steps: u32,
    pub countdown_step_ms: u64,
    pub max_spawn_attempts: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            countdown_steps: DEFAULT_COUNTDOWN_STEPS,
            countdown_step_ms: DEFAULT_COUNTDOWN_STEP_MS,
            max_spawn_attempts: DEFAULT_MAX_SPAWN_ATTEMPTS,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parses a config from JSON text.
    pub fn from_json_str(raw: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: &Path) -> Result<Self, GameError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Validates the configured geometry.
    pub fn grid(&self) -> Result<Grid, GameError> {
        Grid::new(self.width, self.height, self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_CELL_SIZE, GameConfig};
    use crate::error::GameError;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = GameConfig::from_json_str(r#"{ "width": 200, "seed": 9 }"#)
            .expect("partial config should parse");

        assert_eq!(config.width, 200);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.cell_size, DEFAULT_CELL_SIZE);
        assert_eq!(config.height, GameConfig::default().height);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = GameConfig::from_json_str(r#"{ "colour": "green" }"#);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(GameConfig::from_json_str("not-json").is_err());
    }

    #[test]
    fn misaligned_geometry_fails_validation() {
        let config = GameConfig {
            width: 605,
            ..GameConfig::default()
        };

        assert!(matches!(
            config.grid(),
            Err(GameError::OutOfBoundsConfiguration { width: 605, .. })
        ));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let path = std::env::temp_dir().join("grid-snake-config-tests-does-not-exist.json");
        assert!(matches!(GameConfig::load(&path), Err(GameError::Io(_))));
    }
}
