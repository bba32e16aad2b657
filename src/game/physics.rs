use rand::Rng;

/// The fixed world rectangle, anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Bounds { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Clamp a circle's centre so its whole extent stays inside.
    pub fn clamp(&self, x: f64, y: f64, radius: f64) -> (f64, f64) {
        let x = x.min(self.width - radius).max(radius);
        let y = y.min(self.height - radius).max(radius);
        (x, y)
    }

    pub fn random_position<R: Rng + ?Sized>(&self, rng: &mut R, margin: f64) -> (f64, f64) {
        let x = rng.gen::<f64>() * (self.width - margin * 2.0) + margin;
        let y = rng.gen::<f64>() * (self.height - margin * 2.0) + margin;
        (x, y)
    }
}

pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Unit vector pointing along (dx, dy). A zero vector is treated as angle 0.
pub fn direction(dx: f64, dy: f64) -> (f64, f64) {
    let len = dx.hypot(dy);
    if len == 0.0 || !len.is_finite() {
        (1.0, 0.0)
    } else {
        (dx / len, dy / len)
    }
}

/// Unit vector for an angle in radians.
pub fn heading(angle: f64) -> (f64, f64) {
    (angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_resolves_to_angle_zero() {
        assert_eq!(direction(0.0, 0.0), (1.0, 0.0));
        assert_eq!(direction(f64::NAN, 1.0), (1.0, 0.0));
        let (x, y) = direction(3.0, 4.0);
        assert!((x - 0.6).abs() < 1e-12 && (y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn clamp_keeps_extent_inside() {
        let bounds = Bounds::new(100.0, 50.0);
        assert_eq!(bounds.clamp(-20.0, 80.0, 10.0), (10.0, 40.0));
        assert_eq!(bounds.clamp(200.0, -1.0, 10.0), (90.0, 10.0));
        assert_eq!(bounds.clamp(50.0, 25.0, 10.0), (50.0, 25.0));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(distance(1.0, 1.0, 4.0, 5.0), 5.0);
    }
}
