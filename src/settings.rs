//! Game settings
//!
//! Every field has a default, so a config document only needs to name what it
//! overrides. Nothing is persisted: the browser reads an optional inline JSON
//! block, the native runner an optional file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Rect;
use crate::consts::*;

/// Errors produced while loading settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Layout of the obstacle sprite sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSheet {
    /// Image URL (browser only)
    pub url: String,
    pub columns: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// How far the art is drawn above the collision circle
    pub lift: f32,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            url: "assets/obstacles.png".to_string(),
            columns: SPRITE_COLUMNS,
            rows: SPRITE_ROWS,
            cell_width: SPRITE_CELL_SIZE,
            cell_height: SPRITE_CELL_SIZE,
            lift: SPRITE_LIFT,
        }
    }
}

impl SpriteSheet {
    /// Source rectangle of the cell at (column, row)
    pub fn region(&self, column: u32, row: u32) -> Rect {
        Rect::new(
            column as f32 * self.cell_width,
            row as f32 * self.cell_height,
            self.cell_width,
            self.cell_height,
        )
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Player ===
    pub player_radius: f32,
    /// Per-tick displacement
    pub player_speed: f32,
    pub player_deadband: f32,

    // === Obstacles ===
    pub obstacle_count: usize,
    pub obstacle_radius: f32,
    pub top_margin: f32,
    pub spacing_buffer: f32,
    pub max_attempts: u32,
    pub sprite: SpriteSheet,

    // === Misc ===
    /// Start with collision circles visible
    pub debug: bool,
    /// Fixed RNG seed (random per run when absent)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_deadband: PLAYER_DEADBAND,

            obstacle_count: OBSTACLE_COUNT,
            obstacle_radius: OBSTACLE_RADIUS,
            top_margin: TOP_MARGIN,
            spacing_buffer: SPACING_BUFFER,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            sprite: SpriteSheet::default(),

            debug: false,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be a positive number",
                })
            }
        }

        fn non_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(SettingsError::Invalid {
                    field,
                    reason: "must be zero or a positive number",
                })
            }
        }

        positive("canvas_width", self.canvas_width)?;
        positive("canvas_height", self.canvas_height)?;
        positive("player_radius", self.player_radius)?;
        non_negative("player_speed", self.player_speed)?;
        non_negative("player_deadband", self.player_deadband)?;
        positive("obstacle_radius", self.obstacle_radius)?;
        non_negative("top_margin", self.top_margin)?;
        non_negative("spacing_buffer", self.spacing_buffer)?;
        positive("sprite.cell_width", self.sprite.cell_width)?;
        positive("sprite.cell_height", self.sprite.cell_height)?;
        if !self.sprite.lift.is_finite() {
            return Err(SettingsError::Invalid {
                field: "sprite.lift",
                reason: "must be a finite number",
            });
        }
        if self.sprite.columns == 0 || self.sprite.rows == 0 {
            return Err(SettingsError::Invalid {
                field: "sprite",
                reason: "sheet needs at least one column and one row",
            });
        }
        Ok(())
    }

    /// Full canvas rectangle
    pub fn canvas(&self) -> Rect {
        Rect::new(0.0, 0.0, self.canvas_width, self.canvas_height)
    }

    /// Element id of the inline config block
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Load settings from an inline `<script type="application/json">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                    return settings;
                }
                Err(e) => log::error!("{e}; falling back to defaults"),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from an optional JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };

        let loaded = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Self::from_json(&json).map_err(|e| e.to_string()));

        match loaded {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::error!("{}: {e}; falling back to defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.canvas(), Rect::new(0.0, 0.0, 1280.0, 720.0));
        assert_eq!(settings.max_attempts, 500);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "obstacle_count": 3, "sprite": { "lift": 0.0 } }"#).unwrap();
        assert_eq!(settings.obstacle_count, 3);
        assert_eq!(settings.sprite.lift, 0.0);
        assert_eq!(settings.sprite.columns, SPRITE_COLUMNS);
        assert_eq!(settings.player_radius, PLAYER_RADIUS);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_malformed_json() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let err = Settings::from_json(r#"{ "obstacle_radius": 0.0 }"#).unwrap_err();
        match err {
            SettingsError::Invalid { field, .. } => assert_eq!(field, "obstacle_radius"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_sprite_sheet_rejected() {
        let mut settings = Settings::default();
        settings.sprite.rows = 0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid { field: "sprite", .. })
        ));
    }

    #[test]
    fn test_sprite_region() {
        let sheet = SpriteSheet::default();
        assert_eq!(sheet.region(0, 0), Rect::new(0.0, 0.0, 250.0, 250.0));
        assert_eq!(sheet.region(3, 2), Rect::new(750.0, 500.0, 250.0, 250.0));
    }
}
