//! Player input state

use serde::{Deserialize, Serialize};

/// Directional controls currently held.
///
/// Sampled, not queued: the physics step reads whatever was set last before
/// the tick started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn new(left: bool, right: bool, jump: bool) -> Self {
        Self { left, right, jump }
    }

    /// Horizontal intent: -1 left, +1 right, 0 for none or both
    pub fn horizontal(&self) -> i32 {
        self.right as i32 - self.left as i32
    }

    pub fn is_idle(&self) -> bool {
        !self.left && !self.right && !self.jump
    }
}
