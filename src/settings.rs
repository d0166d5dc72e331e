//! Game settings
//!
//! Read once at startup from an optional inline JSON block in the page.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// CSS fill colors for each layer of the frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub player: String,
    pub point: String,
    pub grid: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#03343b".to_string(),
            player: "#fbfbfb".to_string(),
            point: "#fa9503".to_string(),
            grid: "rgb(251 251 251 / 0.125)".to_string(),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canvas edge length in pixels (the canvas is square)
    pub canvas_size: u32,
    /// Grid columns (and rows)
    pub column_count: u32,
    /// Empty cells around the grid on each side
    pub border_padding: u32,
    /// Display refreshes per game tick
    pub tick_divisor: u64,
    /// Grid dot radius in pixels
    pub grid_dot_radius: f32,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            column_count: COLUMN_COUNT,
            border_padding: BORDER_PADDING,
            tick_divisor: TICK_DIVISOR,
            grid_dot_radius: GRID_DOT_RADIUS,
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Parse settings JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace values the game cannot run with
    pub fn sanitized(mut self) -> Self {
        if self.canvas_size == 0 {
            log::warn!("canvas_size must be positive, using {}", CANVAS_SIZE);
            self.canvas_size = CANVAS_SIZE;
        }
        if self.column_count == 0 {
            log::warn!("column_count must be positive, using {}", COLUMN_COUNT);
            self.column_count = COLUMN_COUNT;
        }
        if self.column_count > MAX_COLUMN_COUNT {
            log::warn!(
                "column_count {} too large, using {}",
                self.column_count,
                MAX_COLUMN_COUNT
            );
            self.column_count = MAX_COLUMN_COUNT;
        }
        if self.border_padding > MAX_BORDER_PADDING {
            log::warn!(
                "border_padding {} too large, using {}",
                self.border_padding,
                MAX_BORDER_PADDING
            );
            self.border_padding = MAX_BORDER_PADDING;
        }
        if self.tick_divisor == 0 {
            log::warn!("tick_divisor must be positive, using 1");
            self.tick_divisor = 1;
        }
        if !self.grid_dot_radius.is_finite() || self.grid_dot_radius < 0.0 {
            log::warn!("grid_dot_radius invalid, using {}", GRID_DOT_RADIUS);
            self.grid_dot_radius = GRID_DOT_RADIUS;
        }
        self
    }

    /// Id of the `<script type="application/json">` element holding overrides
    #[cfg(target_arch = "wasm32")]
    const CONFIG_ELEMENT_ID: &'static str = "game-config";

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let Some(text) = text else {
            log::info!("No #{} element, using default settings", Self::CONFIG_ELEMENT_ID);
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(settings) => {
                log::info!("Loaded settings from #{}", Self::CONFIG_ELEMENT_ID);
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Invalid settings JSON ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.canvas_size, 1024);
        assert_eq!(settings.column_count, 17);
        assert_eq!(settings.border_padding, 4);
        assert_eq!(settings.tick_divisor, 12);
        assert_eq!(settings.theme.background, "#03343b");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "column_count": 9, "theme": { "point": "red" } }"#)
            .unwrap();
        assert_eq!(settings.column_count, 9);
        assert_eq!(settings.tick_divisor, 12);
        assert_eq!(settings.theme.point, "red");
        assert_eq!(settings.theme.player, "#fbfbfb");
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Settings::from_json("{ column_count: }").is_err());
        assert!(Settings::from_json(r#"{ "column_count": -3 }"#).is_err());
    }

    #[test]
    fn test_sanitized_fixes_zeroes() {
        let settings = Settings {
            canvas_size: 0,
            column_count: 0,
            tick_divisor: 0,
            grid_dot_radius: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.canvas_size, CANVAS_SIZE);
        assert_eq!(settings.column_count, COLUMN_COUNT);
        assert_eq!(settings.tick_divisor, 1);
        assert_eq!(settings.grid_dot_radius, GRID_DOT_RADIUS);
    }

    #[test]
    fn test_sanitized_caps_huge_values() {
        let settings = Settings::from_json(r#"{ "column_count": 50000, "border_padding": 3000000000 }"#)
            .unwrap()
            .sanitized();
        assert_eq!(settings.column_count, MAX_COLUMN_COUNT);
        assert_eq!(settings.border_padding, MAX_BORDER_PADDING);

        let state = crate::sim::GameState::with_tick_divisor(settings.column_count, settings.tick_divisor);
        assert_eq!(state.grid.column_count, MAX_COLUMN_COUNT);
        assert_eq!(state.initial_collectibles(), (MAX_COLUMN_COUNT / 2).pow(2));

        let layout = crate::renderer::Layout::from_settings(&settings);
        assert!(layout.cell_size.is_finite() && layout.cell_size > 0.0);
    }
}
