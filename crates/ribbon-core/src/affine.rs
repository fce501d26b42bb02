use crate::geometry::Point;

/// 2x3 affine matrix in canvas `transform(a, b, c, d, e, f)` order:
/// `x' = m11*x + m21*y + dx`, `y' = m12*x + m22*y + dy`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineTransform {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub dx: f64,
    pub dy: f64,
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m21: 0.0,
        m22: 1.0,
        dx: 0.0,
        dy: 0.0,
    };

    /// Transform taking the source triangle `src` onto `dst` vertex by vertex.
    ///
    /// Returns `None` when the source triangle is degenerate (collinear or
    /// coincident points); callers skip drawing that triangle.
    pub fn from_triangles(src: [Point; 3], dst: [Point; 3]) -> Option<Self> {
        let [s0, s1, s2] = src;
        let [p0, p1, p2] = dst;
        let (sx0, sy0, sx1, sy1, sx2, sy2) = (s0.x, s0.y, s1.x, s1.y, s2.x, s2.y);
        let (x0, y0, x1, y1, x2, y2) = (p0.x, p0.y, p1.x, p1.y, p2.x, p2.y);

        let denom = sx0 * (sy2 - sy1) - sx1 * sy2 + sx2 * sy1 + (sx1 - sx2) * sy0;
        if denom == 0.0 {
            return None;
        }
        let m11 = -(sy0 * (x2 - x1) - sy1 * x2 + sy2 * x1 + (sy1 - sy2) * x0) / denom;
        let m12 = (sy1 * y2 + sy0 * (y1 - y2) - sy2 * y1 + (sy2 - sy1) * y0) / denom;
        let m21 = (sx0 * (x2 - x1) - sx1 * x2 + sx2 * x1 + (sx1 - sx2) * x0) / denom;
        let m22 = -(sx1 * y2 + sx0 * (y1 - y2) - sx2 * y1 + (sx2 - sx1) * y0) / denom;
        let dx = (sx0 * (sy2 * x1 - sy1 * x2)
            + sy0 * (sx1 * x2 - sx2 * x1)
            + (sx2 * sy1 - sx1 * sy2) * x0)
            / denom;
        let dy = (sx0 * (sy2 * y1 - sy1 * y2)
            + sy0 * (sx1 * y2 - sx2 * y1)
            + (sx2 * sy1 - sx1 * sy2) * y0)
            / denom;
        Some(Self {
            m11,
            m12,
            m21,
            m22,
            dx,
            dy,
        })
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.m11 * p.x + self.m21 * p.y + self.dx,
            self.m12 * p.x + self.m22 * p.y + self.dy,
        )
    }

    /// Coefficients in the argument order of `CanvasRenderingContext2D.transform`.
    #[inline]
    pub fn to_canvas_args(&self) -> [f64; 6] {
        [self.m11, self.m12, self.m21, self.m22, self.dx, self.dy]
    }
}
