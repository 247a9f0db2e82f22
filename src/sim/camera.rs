//! Horizontal follow camera

use crate::consts::VIEW_WIDTH;

/// Horizontal scroll offset, clamped to level bounds
#[derive(Debug, Clone, Default)]
pub struct Camera {
    pub offset: f32,
}

impl Camera {
    /// Center on the player, clamped to `[0, level_width - VIEW_WIDTH]`
    pub fn update(&mut self, player_center_x: f32, level_width: f32) {
        let max_offset = (level_width - VIEW_WIDTH).max(0.0);
        self.offset = (player_center_x - VIEW_WIDTH / 2.0).clamp(0.0, max_offset);
    }
}
