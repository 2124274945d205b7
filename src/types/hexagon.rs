//! Regular hexagon geometry.

/// Number of vertices in a hexagon.
pub const VERTEX_COUNT: usize = 6;

/// Angular offset of the first vertex, in radians (-30°).
const ANGLE_OFFSET: f64 = -std::f64::consts::FRAC_PI_6;

/// Tolerance for edge-inclusive containment tests.
const EPSILON: f64 = 1e-9;

/// A regular hexagon described by its centre and circumradius.
///
/// Vertex `i` sits at angle `60°·i − 30°`, which puts a vertex directly
/// above and below the centre (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hexagon {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

impl Hexagon {
    /// Create a hexagon.
    pub fn new(cx: f64, cy: f64, radius: f64) -> Self {
        Self { cx, cy, radius }
    }

    /// A hexagon sharing this centre with half the circumradius.
    pub fn inner(&self) -> Self {
        Self::new(self.cx, self.cy, self.radius / 2.0)
    }

    /// Compute the six vertices in drawing order.
    pub fn vertices(&self) -> [(f64, f64); VERTEX_COUNT] {
        let mut points = [(0.0, 0.0); VERTEX_COUNT];
        for (i, point) in points.iter_mut().enumerate() {
            let angle = std::f64::consts::FRAC_PI_3 * i as f64 + ANGLE_OFFSET;
            *point = (
                self.cx + self.radius * angle.cos(),
                self.cy + self.radius * angle.sin(),
            );
        }
        points
    }

    /// Axis-aligned bounds as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        self.vertices().iter().fold(
            (f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            |(min_x, min_y, max_x, max_y), &(x, y)| {
                (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y))
            },
        )
    }

    /// Whether the point lies inside the hexagon or on its edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if self.radius <= 0.0 {
            return x == self.cx && y == self.cy;
        }

        let vertices = self.vertices();
        let mut sign = 0.0_f64;

        for i in 0..VERTEX_COUNT {
            let (ax, ay) = vertices[i];
            let (bx, by) = vertices[(i + 1) % VERTEX_COUNT];
            let cross = (bx - ax) * (y - ay) - (by - ay) * (x - ax);

            if cross.abs() <= EPSILON {
                continue;
            }
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross.signum() != sign {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_vertex_count() {
        let hex = Hexagon::new(100.0, 100.0, 66.0);
        assert_eq!(hex.vertices().len(), 6);
    }

    #[test]
    fn test_vertices_at_circumradius() {
        let hex = Hexagon::new(10.0, 20.0, 5.0);
        for (x, y) in hex.vertices() {
            let d = ((x - 10.0).powi(2) + (y - 20.0).powi(2)).sqrt();
            assert!(approx(d, 5.0));
        }
    }

    #[test]
    fn test_first_vertex_angle() {
        let hex = Hexagon::new(0.0, 0.0, 2.0);
        let (x, y) = hex.vertices()[0];
        assert!(approx(x, 3f64.sqrt()));
        assert!(approx(y, -1.0));
    }

    #[test]
    fn test_vertical_vertices() {
        let hex = Hexagon::new(0.0, 0.0, 4.0);
        let v = hex.vertices();
        // i = 2 is 90° (below), i = 5 is 270° (above)
        assert!(approx(v[2].0, 0.0) && approx(v[2].1, 4.0));
        assert!(approx(v[5].0, 0.0) && approx(v[5].1, -4.0));
    }

    #[test]
    fn test_inner_is_half() {
        let outer = Hexagon::new(200.0, 200.0, 133.0);
        let inner = outer.inner();
        assert_eq!(inner.radius * 2.0, outer.radius);
        assert_eq!((inner.cx, inner.cy), (outer.cx, outer.cy));
    }

    #[test]
    fn test_bounds() {
        let hex = Hexagon::new(0.0, 0.0, 2.0);
        let (min_x, min_y, max_x, max_y) = hex.bounds();
        assert!(approx(min_x, -(3f64.sqrt())));
        assert!(approx(max_x, 3f64.sqrt()));
        assert!(approx(min_y, -2.0));
        assert!(approx(max_y, 2.0));
    }

    #[test]
    fn test_contains() {
        let hex = Hexagon::new(50.0, 50.0, 20.0);
        assert!(hex.contains(50.0, 50.0));
        assert!(hex.contains(50.0, 69.0));
        assert!(!hex.contains(0.0, 0.0));
        assert!(!hex.contains(50.0, 71.0));
        // Corner of bounding box lies outside the hexagon
        assert!(!hex.contains(50.0 + 17.0, 50.0 + 19.0));
    }

    #[test]
    fn test_contains_degenerate() {
        let hex = Hexagon::new(3.0, 3.0, 0.0);
        assert!(hex.contains(3.0, 3.0));
        assert!(!hex.contains(3.0, 4.0));
    }

    #[test]
    fn test_contains_vertex() {
        let hex = Hexagon::new(0.0, 0.0, 10.0);
        let (x, y) = hex.vertices()[3];
        assert!(hex.contains(x, y));
    }
}
