//! View transform between geometric and screen coordinates.
//!
//! Handles conversion between world coordinates (geometric space, origin at
//! the viewport center, Y up) and screen coordinates (pixels, origin at the
//! top-left, Y down). Manages zoom and pan with proper coordinate mapping;
//! pointer handling itself lives with the embedding application.

use crate::constants::{INITIAL_SCALE, MAX_ZOOM, MIN_ZOOM, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};
use crate::math::Point;

/// Represents the viewport transformation state (zoom and pan) on top of a
/// fixed base scale in pixels per geometric unit.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    width: f64,
    height: f64,
    scale: f64,
}

impl ViewTransform {
    /// Creates an identity transform for the given viewport size.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            width,
            height,
            scale: INITIAL_SCALE,
        }
    }

    /// Gets the current zoom factor (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Gets the pan offset in screen pixels.
    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x, self.pan_y)
    }

    /// Sets the viewport dimensions (typically on window resize).
    pub fn set_viewport_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Pans by a delta amount in screen pixels.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Multiplies the zoom by `factor`, clamped to [`MIN_ZOOM`, `MAX_ZOOM`],
    /// keeping the viewport center fixed on the same world point.
    pub fn zoom_by_factor(&mut self, factor: f64) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let center_x = self.width / 2.0;
        let center_y = self.height / 2.0;
        // Screen point under the center before the zoom change.
        let fixed_x = (center_x - self.pan_x) / self.zoom;
        let fixed_y = (center_y - self.pan_y) / self.zoom;
        self.pan_x = center_x - fixed_x * new_zoom;
        self.pan_y = center_y - fixed_y * new_zoom;
        self.zoom = new_zoom;
    }

    /// Resets zoom and pan to identity.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Converts world coordinates to screen coordinates.
    ///
    /// The transformation accounts for:
    /// - Base scale (pixels per geometric unit)
    /// - Y-axis flip (world Y up vs screen Y down)
    /// - Zoom and pan applied in screen space
    ///
    /// Formula:
    /// ```text
    /// base_x = width / 2 + world.x * scale
    /// base_y = height / 2 - world.y * scale
    /// screen = base * zoom + pan
    /// ```
    pub fn world_to_screen(&self, p: &Point) -> Point {
        let base_x = self.width / 2.0 + p.x * self.scale;
        let base_y = self.height / 2.0 - p.y * self.scale;
        Point::new(base_x * self.zoom + self.pan_x, base_y * self.zoom + self.pan_y)
    }

    /// Converts screen coordinates back to world coordinates.
    pub fn screen_to_world(&self, p: &Point) -> Point {
        let base_x = (p.x - self.pan_x) / self.zoom;
        let base_y = (p.y - self.pan_y) / self.zoom;
        Point::new(
            (base_x - self.width / 2.0) / self.scale,
            (self.height / 2.0 - base_y) / self.scale,
        )
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(VIEWBOX_WIDTH, VIEWBOX_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::approx_eq;

    #[test]
    fn test_round_trip() {
        let mut view = ViewTransform::default();
        view.zoom_by_factor(1.2);
        view.pan_by(13.0, -7.0);
        let world = Point::new(1.25, -0.5);
        let back = view.screen_to_world(&view.world_to_screen(&world));
        assert!(approx_eq(back.x, world.x));
        assert!(approx_eq(back.y, world.y));
    }

    #[test]
    fn test_origin_maps_to_viewport_center() {
        let view = ViewTransform::new(800.0, 600.0);
        let screen = view.world_to_screen(&Point::origin());
        assert!(approx_eq(screen.x, 400.0));
        assert!(approx_eq(screen.y, 300.0));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut view = ViewTransform::default();
        for _ in 0..100 {
            view.zoom_by_factor(1.5);
        }
        assert!(approx_eq(view.zoom(), MAX_ZOOM));
        for _ in 0..100 {
            view.zoom_by_factor(0.5);
        }
        assert!(approx_eq(view.zoom(), MIN_ZOOM));
    }

    #[test]
    fn test_zoom_keeps_center_fixed() {
        let mut view = ViewTransform::new(800.0, 600.0);
        view.pan_by(40.0, 25.0);
        let center = Point::new(400.0, 300.0);
        let before = view.screen_to_world(&center);
        view.zoom_by_factor(1.7);
        let after = view.screen_to_world(&center);
        assert!(approx_eq(before.x, after.x));
        assert!(approx_eq(before.y, after.y));
    }
}
