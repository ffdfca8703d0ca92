use serde::{Deserialize, Serialize};

/// Fixed pan directions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keys.bindings]
/// left = "ArrowLeft"
/// up = "ArrowUp"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanDirection {
    /// Pan the view left.
    Left,
    /// Pan the view right.
    Right,
    /// Pan the view up.
    Up,
    /// Pan the view down.
    Down,
}
