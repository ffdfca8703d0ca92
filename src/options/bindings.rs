use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::PanDirection;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping pan directions to key codes.
pub struct PanKeyBindings {
    /// Maps direction → key string (e.g. `Left` → `"ArrowLeft"`).
    pub bindings: HashMap<PanDirection, String>,
    /// Reverse lookup cache (key string → direction). Rebuilt on load.
    #[serde(skip)]
    key_to_direction: HashMap<String, PanDirection>,
}

impl Default for PanKeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            (PanDirection::Left, "ArrowLeft".into()),
            (PanDirection::Right, "ArrowRight".into()),
            (PanDirection::Up, "ArrowUp".into()),
            (PanDirection::Down, "ArrowDown".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_direction: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl PanKeyBindings {
    /// Rebuild the reverse lookup map (key string → direction).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_direction.clear();
        for (direction, key) in &self.bindings {
            let _ = self.key_to_direction.insert(key.clone(), *direction);
        }
    }

    /// Look up the pan direction for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<PanDirection> {
        self.key_to_direction.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_arrow_keys_resolve() {
        let bindings = PanKeyBindings::default();
        assert_eq!(bindings.lookup("ArrowLeft"), Some(PanDirection::Left));
        assert_eq!(bindings.lookup("ArrowDown"), Some(PanDirection::Down));
        assert_eq!(bindings.lookup("KeyW"), None);
    }

    #[test]
    fn reverse_map_rebuilds_after_remap() {
        let mut bindings = PanKeyBindings::default();
        let _ = bindings
            .bindings
            .insert(PanDirection::Up, "KeyW".into());
        bindings.rebuild_reverse_map();
        assert_eq!(bindings.lookup("KeyW"), Some(PanDirection::Up));
    }
}
