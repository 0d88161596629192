//! Engine switches
//!
//! All switches default to on, which is the full changelog behaviour. Hosts
//! usually load these from the `[engine]` section of the engine config.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Report a question add/remove as a module add/remove when it is the
    /// only question carrying that module on its side
    pub module_roll_up: bool,
    /// Drop child add/remove rows implied by a question add/remove
    pub suppress_implied_children: bool,
    /// Emit `OrderChanged` rows from the sequence diff
    pub track_order: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            module_roll_up: true,
            suppress_implied_children: true,
            track_order: true,
        }
    }
}
