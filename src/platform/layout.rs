//! Display scaling
//!
//! The simulation always runs in logical world units. The display scales the
//! whole canvas to fit the viewport; nothing here feeds back into the sim.

/// Fraction of the viewport width the canvas may take
const VIEWPORT_FILL: f32 = 0.92;
/// Widest the canvas is ever shown
const MAX_DISPLAY_WIDTH: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayScale {
    /// On-screen width of the canvas (and HUD)
    pub target_width: f32,
    /// Multiplier from world units to screen units
    pub scale: f32,
}

/// Compute the display scale for a viewport of the given width
pub fn display_scale(viewport_width: f32, world_width: f32) -> DisplayScale {
    let target_width = (viewport_width.max(0.0) * VIEWPORT_FILL).min(MAX_DISPLAY_WIDTH);
    DisplayScale {
        target_width,
        scale: target_width / world_width.max(1.0),
    }
}

impl DisplayScale {
    /// Map a world-space length to screen space
    pub fn to_screen(&self, world: f32) -> f32 {
        world * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_viewport_caps_width() {
        let d = display_scale(1920.0, 400.0);
        assert_eq!(d.target_width, 360.0);
        assert!((d.scale - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_narrow_viewport_fills_fraction() {
        let d = display_scale(300.0, 400.0);
        assert!((d.target_width - 276.0).abs() < 1e-3);
        assert!((d.scale - 0.69).abs() < 1e-5);
        assert!((d.to_screen(400.0) - 276.0).abs() < 1e-3);
    }
}
