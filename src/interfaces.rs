// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

// Enumeration to track the coordinate space a query point is expressed in.
// Callers always tag points explicitly, the engine never guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    /// Absolute length units of the lattice definition (Å for the presets).
    Physical,
    /// Rendering space: physical coordinates multiplied by the scale factor.
    Scene,
}

impl Space {
    pub fn from_scene_flag(is_scene: bool) -> Self {
        if is_scene { Space::Scene } else { Space::Physical }
    }
}
