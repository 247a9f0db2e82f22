//! Per-frame input snapshot
//!
//! The host debounces raw input and hands the core one snapshot per frame.
//! Held flags persist as long as the key is down; pressed flags are
//! edge-triggered and cleared at end of frame so a held key can never be
//! counted as two discrete presses.

/// Input commands for a single frame
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub jump_held: bool,
    /// Edge-triggered; consumed at most once
    pub jump_pressed: bool,
    /// Edge-triggered; consumed at most once
    pub dig_pressed: bool,
}

impl FrameInput {
    /// Signed move direction: -1 left, +1 right, 0 neutral or both
    pub fn direction(&self) -> f32 {
        f32::from(i8::from(self.right) - i8::from(self.left))
    }

    /// Clear edge-triggered flags; called by `step()` at end of frame
    pub fn end_frame(&mut self) {
        self.jump_pressed = false;
        self.dig_pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction() {
        let mut input = FrameInput::default();
        assert_eq!(input.direction(), 0.0);
        input.right = true;
        assert_eq!(input.direction(), 1.0);
        input.left = true;
        assert_eq!(input.direction(), 0.0);
        input.right = false;
        assert_eq!(input.direction(), -1.0);
    }

    #[test]
    fn test_end_frame_clears_edges_only() {
        let mut input = FrameInput {
            left: true,
            right: false,
            jump_held: true,
            jump_pressed: true,
            dig_pressed: true,
        };
        input.end_frame();
        assert!(!input.jump_pressed);
        assert!(!input.dig_pressed);
        assert!(input.left);
        assert!(input.jump_held);
    }
}
