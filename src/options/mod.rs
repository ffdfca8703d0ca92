//! Centralized orbit-control options with TOML preset support.
//!
//! All tweakable settings (bounds, speeds, damping, feature toggles,
//! device bindings) are consolidated here. Options serialize to/from TOML
//! for control presets, and expose a JSON Schema for host options UIs.

mod bindings;

use std::f32::consts::PI;
use std::path::Path;

pub use bindings::PanKeyBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::control::gesture::{MouseBindings, TouchBindings};
use crate::error::GimbalError;

/// Orbit-control configuration. Every field has a default, and the struct
/// uses `#[serde(default)]` so partial TOML files (e.g. only overriding
/// damping) work correctly.
///
/// Angular bounds are radians; distances are world units. Infinite bounds
/// mean unclamped.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit Controls", inline)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct OrbitOptions {
    /// Minimum distance to the target. Should be greater than 0.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Maximum distance to the target. Should be greater than the minimum.
    #[schemars(skip)]
    pub max_distance: f32,
    /// Minimum orthographic zoom level. Kept for projection parity; the
    /// perspective orbit path clamps distance instead.
    #[schemars(skip)]
    pub min_zoom: f32,
    /// Maximum orthographic zoom level. Kept for projection parity.
    #[schemars(skip)]
    pub max_zoom: f32,
    /// Minimum polar angle in radians, in `[0, π]`.
    #[schemars(skip)]
    pub min_polar_angle: f32,
    /// Maximum polar angle in radians, in `[0, π]`.
    #[schemars(skip)]
    pub max_polar_angle: f32,
    /// Minimum azimuth angle in radians. `-∞` leaves orbiting unbounded.
    #[schemars(skip)]
    pub min_azimuth_angle: f32,
    /// Maximum azimuth angle in radians. `+∞` leaves orbiting unbounded.
    #[schemars(skip)]
    pub max_azimuth_angle: f32,
    /// Whether rotation and zoom glide to a stop after release.
    #[schemars(title = "Damping")]
    pub enable_damping: bool,
    /// Rotation damping parameter.
    #[schemars(title = "Damping Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub damping_factor: f32,
    /// Zoom damping parameter.
    #[schemars(title = "Zoom Factor", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub zoom_factor: f32,
    /// Whether zoom gestures are recognized.
    #[schemars(title = "Zoom")]
    pub enable_zoom: bool,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub zoom_speed: f32,
    /// Whether rotate gestures are recognized.
    #[schemars(title = "Rotate")]
    pub enable_rotate: bool,
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 5.0), extend("step" = 0.1))]
    pub rotate_speed: f32,
    /// Whether pan gestures are recognized.
    #[schemars(title = "Pan")]
    pub enable_pan: bool,
    /// Keyboard pan step in screen-space pixels per key press.
    #[schemars(title = "Key Pan Speed", range(min = 1.0, max = 50.0), extend("step" = 1.0))]
    pub key_pan_speed: f32,
    /// Whether the camera orbits on its own while idle.
    #[schemars(title = "Auto-Rotate")]
    pub auto_rotate: bool,
    /// Seconds per automatic revolution.
    #[schemars(title = "Auto-Rotate Period", range(min = 0.5, max = 60.0), extend("step" = 0.5))]
    pub auto_rotate_speed: f32,
    /// Whether keyboard pan keys are recognized.
    #[schemars(title = "Keyboard Pan")]
    pub enable_keys: bool,
    /// Pointer-button → gesture bindings.
    #[schemars(skip)]
    pub mouse: MouseBindings,
    /// Finger-count → gesture bindings.
    #[schemars(skip)]
    pub touch: TouchBindings,
    /// Key → pan-direction bindings.
    #[schemars(skip)]
    pub keys: PanKeyBindings,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            min_distance: 0.1,
            max_distance: f32::INFINITY,
            min_zoom: 0.0,
            max_zoom: f32::INFINITY,
            min_polar_angle: 0.0,
            max_polar_angle: PI,
            min_azimuth_angle: f32::NEG_INFINITY,
            max_azimuth_angle: f32::INFINITY,
            enable_damping: true,
            damping_factor: 0.1,
            zoom_factor: 0.2,
            enable_zoom: true,
            zoom_speed: 1.0,
            enable_rotate: true,
            rotate_speed: 1.0,
            enable_pan: true,
            key_pan_speed: 7.0,
            auto_rotate: false,
            auto_rotate_speed: 2.0,
            enable_keys: false,
            mouse: MouseBindings::default(),
            touch: TouchBindings::default(),
            keys: PanKeyBindings::default(),
        }
    }
}

impl OrbitOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(OrbitOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GimbalError> {
        let content = std::fs::read_to_string(path).map_err(GimbalError::Io)?;
        let mut opts: Self = toml::from_str(&content).map_err(|e| {
            log::error!(
                "Failed to parse control preset '{}': {e}",
                path.display()
            );
            GimbalError::OptionsParse(e.to_string())
        })?;
        opts.keys.rebuild_reverse_map();
        log::info!("Loaded control preset '{}'", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GimbalError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GimbalError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GimbalError::Io)?;
        }
        std::fs::write(path, content).map_err(GimbalError::Io)?;
        log::info!("Saved control preset '{}'", path.display());
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PanDirection;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = OrbitOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: OrbitOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
enable_damping = false
rotate_speed = 2.0
";
        let opts: OrbitOptions = toml::from_str(toml_str).unwrap();
        assert!(!opts.enable_damping);
        assert_eq!(opts.rotate_speed, 2.0);
        // Everything else should be default
        assert_eq!(opts.damping_factor, 0.1);
        assert_eq!(opts.min_distance, 0.1);
        assert_eq!(opts.max_distance, f32::INFINITY);
        assert_eq!(opts.touch, TouchBindings::default());
    }

    #[test]
    fn infinite_bounds_survive_toml() {
        let opts = OrbitOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: OrbitOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.max_distance, f32::INFINITY);
        assert_eq!(parsed.min_azimuth_angle, f32::NEG_INFINITY);
    }

    #[test]
    fn key_binding_lookup() {
        let opts = OrbitOptions::default();
        assert_eq!(opts.keys.lookup("ArrowUp"), Some(PanDirection::Up));
        assert_eq!(opts.keys.lookup("Space"), None);
    }

    #[test]
    fn schema_exposes_ui_fields_only() {
        let schema = OrbitOptions::json_schema();
        let json = serde_json::to_value(&schema).unwrap();
        let props = json
            .get("properties")
            .and_then(|p| p.as_object())
            .unwrap();
        assert!(props.contains_key("rotate_speed"));
        assert!(props.contains_key("enable_damping"));
        // Unbounded limits and binding tables are not UI-exposed.
        assert!(!props.contains_key("max_distance"));
        assert!(!props.contains_key("mouse"));
    }
}
