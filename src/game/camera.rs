//! Follow camera mapping the unbounded world onto the viewport.

use serde::Serialize;

use crate::config::*;
use crate::game::player::{mass_centroid, PlayerCell};

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Viewport { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(1280.0, 720.0)
    }
}

/// Camera values exposed to collaborators each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    pub viewport: Viewport,
}

/// Axis-aligned world rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True when a circle at (x, y) with radius `r` touches this rectangle.
    pub fn touches_circle(&self, x: f64, y: f64, r: f64) -> bool {
        x + r > self.left && x - r < self.right && y + r > self.top && y - r < self.bottom
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    viewport: Viewport,
}

impl Camera {
    pub fn new(x: f64, y: f64, viewport: Viewport) -> Self {
        Camera {
            x,
            y,
            zoom: 1.0,
            viewport,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn state(&self) -> CameraState {
        CameraState {
            x: self.x,
            y: self.y,
            zoom: self.zoom,
            viewport: self.viewport,
        }
    }

    /// Snap to the cells' mass-weighted centre and ease the zoom toward
    /// a value that keeps every cell on screen. No-op without cells.
    pub fn update(&mut self, cells: &[PlayerCell]) {
        let Some((cx, cy)) = mass_centroid(cells) else {
            return;
        };
        self.x = cx;
        self.y = cy;

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for cell in cells {
            let r = cell.radius();
            min_x = min_x.min(cell.body.x - r);
            min_y = min_y.min(cell.body.y - r);
            max_x = max_x.max(cell.body.x + r);
            max_y = max_y.max(cell.body.y + r);
        }

        let spread = (max_x - min_x).max(max_y - min_y).max(MIN_VIEW_SPAN);
        let zoom_factor = self.viewport.width.min(self.viewport.height) / spread;
        let target_zoom = zoom_factor.powf(ZOOM_EXPONENT);

        self.zoom += (target_zoom - self.zoom) * ZOOM_SMOOTHING;
        self.zoom = self.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
        let (vx, vy) = self.viewport.center();
        (vx + (wx - self.x) * self.zoom, vy + (wy - self.y) * self.zoom)
    }

    pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
        let (vx, vy) = self.viewport.center();
        ((sx - vx) / self.zoom + self.x, (sy - vy) / self.zoom + self.y)
    }

    /// World rectangle currently covered by the viewport.
    pub fn visible_bounds(&self) -> Rect {
        let (left, top) = self.screen_to_world(0.0, 0.0);
        let (right, bottom) = self.screen_to_world(self.viewport.width, self.viewport.height);
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// World x and y coordinates of the background grid lines in view.
    pub fn grid_lines(&self, spacing: f64) -> (Vec<f64>, Vec<f64>) {
        if !(spacing > 0.0) {
            return (Vec::new(), Vec::new());
        }
        let view = self.visible_bounds();
        let lines = |start: f64, end: f64| {
            let mut out = Vec::new();
            let mut v = (start / spacing).floor() * spacing;
            while v < end {
                out.push(v);
                v += spacing;
            }
            out
        };
        (lines(view.left, view.right), lines(view.top, view.bottom))
    }
}
