//! Ribbon geometry derived from a chain.
//!
//! Boundary points live in one flat buffer indexed `link * rows + row`; the
//! triangle topology is fixed at construction and only refers to buffer
//! indices, so moving a link moves every triangle that touches it.

use crate::affine::AffineTransform;
use crate::chain::Chain;
use crate::config::{PaintStyle, RibbonConfig};
use crate::constants::RADIAL_MAX_REACH;
use crate::geometry::{
    delta_angle, direction, line_intersection, perpendicular_foot, point_in_polygon, Point,
    Surface,
};
use bytemuck::{Pod, Zeroable};
use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [usize; 3],
    /// Texture coordinates in `[0, 1]`.
    pub uv: [Point; 3],
    /// Span index: the triangle lies between link `segment` and `segment + 1`.
    pub segment: usize,
    /// Set by the transparency scan; hidden triangles are never drawn.
    pub hidden: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid,
    Linear {
        start: Point,
        end: Point,
    },
    Radial {
        center: Point,
        start_radius: f64,
        end_radius: f64,
    },
    Texture(AffineTransform),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub triangle: usize,
    pub paint: Paint,
}

/// Half disc closing one end of the ribbon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cap {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
}

/// Read access to the alpha channel of a texture.
pub trait AlphaMask {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn alpha(&self, x: u32, y: u32) -> u8;
}

/// Row-major RGBA pixels, as returned by `getImageData`.
#[derive(Clone, Debug)]
pub struct AlphaBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl AlphaBuffer {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        (rgba.len() == width as usize * height as usize * 4).then_some(Self {
            width,
            height,
            rgba,
        })
    }
}

impl AlphaMask for AlphaBuffer {
    fn width(&self) -> u32 {
        self.width
    }
    fn height(&self) -> u32 {
        self.height
    }
    fn alpha(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.rgba[(y as usize * self.width as usize + x as usize) * 4 + 3]
    }
}

#[derive(Clone, Debug)]
pub struct RibbonMesh {
    link_count: usize,
    rows: usize,
    half_width: f64,
    paint: PaintStyle,
    caps_enabled: bool,
    positions: Vec<Point>,
    triangles: Vec<Triangle>,
    draw_list: Vec<DrawItem>,
    caps: Option<[Cap; 2]>,
    scan_cursor: usize,
}

impl RibbonMesh {
    pub fn new(link_count: usize, config: &RibbonConfig) -> Self {
        let rows = config.rows.max(2);
        let triangles = build_topology(link_count, rows);
        Self {
            link_count,
            rows,
            half_width: config.half_width,
            paint: config.paint,
            caps_enabled: config.caps,
            positions: vec![Point::ZERO; link_count * rows],
            triangles,
            draw_list: Vec::new(),
            caps: None,
            scan_cursor: 0,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.link_count
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[inline]
    pub fn paint_style(&self) -> PaintStyle {
        self.paint
    }

    #[inline]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Triangles to paint this frame, back to front.
    #[inline]
    pub fn draw_list(&self) -> &[DrawItem] {
        &self.draw_list
    }

    /// `(start, end)` caps from the last rebuild, when caps are enabled.
    pub fn caps(&self) -> Option<(&Cap, &Cap)> {
        self.caps.as_ref().map(|[start, end]| (start, end))
    }

    #[inline]
    pub fn point(&self, link: usize, row: usize) -> Point {
        self.positions[link * self.rows + row]
    }

    pub fn triangle_points(&self, index: usize) -> [Point; 3] {
        self.triangles[index].vertices.map(|v| self.positions[v])
    }

    /// Texture-space corners of a triangle; `None` unless the paint is a texture.
    pub fn source_triangle(&self, index: usize) -> Option<[Point; 3]> {
        match self.paint {
            PaintStyle::Texture { width, height } => Some(
                self.triangles[index]
                    .uv
                    .map(|uv| Point::new(uv.x * width, uv.y * height)),
            ),
            _ => None,
        }
    }

    /// Recomputes boundary points, caps and the draw list from `chain`.
    pub fn rebuild(&mut self, chain: &Chain, surface: Surface) -> &[DrawItem] {
        debug_assert_eq!(chain.len(), self.link_count, "chain/mesh size mismatch");
        if chain.len() != self.link_count || self.link_count < 2 {
            self.draw_list.clear();
            return &self.draw_list;
        }
        self.update_points(chain);
        self.update_caps(chain);

        self.draw_list.clear();
        for index in 0..self.triangles.len() {
            if self.triangles[index].hidden {
                continue;
            }
            let pts = self.triangle_points(index);
            if surface.triangle_outside(&pts) {
                continue;
            }
            if let Some(paint) = self.paint_for(index, &pts) {
                self.draw_list.push(DrawItem {
                    triangle: index,
                    paint,
                });
            }
        }
        // Later spans draw underneath earlier ones.
        self.draw_list.reverse();
        &self.draw_list
    }

    fn update_points(&mut self, chain: &Chain) {
        let links = chain.links();
        let last = links.len() - 1;
        let width = self.half_width * 2.0;
        let row_step = width / (self.rows - 1) as f64;
        for (i, link) in links.iter().enumerate() {
            let heading = if i == 0 {
                links[1].heading
            } else if i == last {
                link.heading
            } else {
                let next = links[i + 1].heading;
                next + delta_angle(next, link.heading) / 2.0
            };
            let normal = direction(heading + FRAC_PI_2);
            for j in 0..self.rows {
                let offset = self.half_width - j as f64 * row_step;
                self.positions[i * self.rows + j] = link.position + normal * offset;
            }
        }
    }

    fn update_caps(&mut self, chain: &Chain) {
        if !self.caps_enabled {
            self.caps = None;
            return;
        }
        let links = chain.links();
        let head = links[0];
        let tail = links[links.len() - 1];
        let start_angle = links[1].heading - FRAC_PI_2;
        let end_angle = tail.heading + FRAC_PI_2;
        self.caps = Some([
            Cap {
                center: head.position,
                radius: self.half_width,
                start_angle,
                end_angle: start_angle + PI,
            },
            Cap {
                center: tail.position,
                radius: self.half_width,
                start_angle: end_angle,
                end_angle: end_angle + PI,
            },
        ]);
    }

    fn paint_for(&self, index: usize, pts: &[Point; 3]) -> Option<Paint> {
        match self.paint {
            PaintStyle::Linear => Some(linear_paint(pts)),
            PaintStyle::RadialJoint => Some(
                self.radial_paint(self.triangles[index].segment)
                    .unwrap_or_else(|| linear_paint(pts)),
            ),
            PaintStyle::Texture { .. } => {
                let src = self.source_triangle(index)?;
                AffineTransform::from_triangles(src, *pts).map(Paint::Texture)
            }
        }
    }

    /// Rings centred where the span's two cross sections meet.
    fn radial_paint(&self, segment: usize) -> Option<Paint> {
        let last_row = self.rows - 1;
        let a0 = self.point(segment, 0);
        let a1 = self.point(segment, last_row);
        let b0 = self.point(segment + 1, 0);
        let b1 = self.point(segment + 1, last_row);
        let center = line_intersection(a0, a1, b0, b1)?;
        let mid = (a0 + a1) / 2.0;
        if !center.is_finite() || center.distance(mid) > RADIAL_MAX_REACH * self.half_width {
            return None;
        }
        Some(Paint::Radial {
            center,
            start_radius: center.distance(a0),
            end_radius: center.distance(a1),
        })
    }

    /// Checks up to `budget` more triangles against `mask` and hides those
    /// whose texture region is fully transparent. Returns how many were checked.
    pub fn scan_transparency<M: AlphaMask + ?Sized>(&mut self, mask: &M, budget: usize) -> usize {
        let size = Point::new(mask.width() as f64, mask.height() as f64);
        let mut checked = 0;
        while checked < budget && self.scan_cursor < self.triangles.len() {
            let tri = &mut self.triangles[self.scan_cursor];
            let src = tri.uv.map(|uv| uv * size);
            tri.hidden = !region_has_alpha(mask, &src);
            self.scan_cursor += 1;
            checked += 1;
        }
        if checked > 0 && self.scan_complete() {
            let hidden = self.triangles.iter().filter(|t| t.hidden).count();
            log::debug!(
                "[mesh] transparency scan done: {} of {} triangles hidden",
                hidden,
                self.triangles.len()
            );
        }
        checked
    }

    #[inline]
    pub fn scan_complete(&self) -> bool {
        self.scan_cursor >= self.triangles.len()
    }

    /// Current positions with grid texture coordinates, one per boundary point.
    pub fn vertices(&self) -> Vec<Vertex> {
        let u_den = (self.link_count.max(2) - 1) as f64;
        let v_den = (self.rows - 1) as f64;
        self.positions
            .iter()
            .enumerate()
            .map(|(k, p)| {
                let (i, j) = (k / self.rows, k % self.rows);
                Vertex {
                    position: [p.x as f32, p.y as f32],
                    uv: [(i as f64 / u_den) as f32, (j as f64 / v_den) as f32],
                }
            })
            .collect()
    }

    /// Index buffer over `vertices()` for all triangles not hidden.
    pub fn indices(&self) -> Vec<u32> {
        self.triangles
            .iter()
            .filter(|t| !t.hidden)
            .flat_map(|t| t.vertices.map(|v| v as u32))
            .collect()
    }
}

fn build_topology(link_count: usize, rows: usize) -> Vec<Triangle> {
    if link_count < 2 {
        return Vec::new();
    }
    let idx = |i: usize, j: usize| i * rows + j;
    let u = |i: usize| i as f64 / (link_count - 1) as f64;
    let v = |j: usize| j as f64 / (rows - 1) as f64;
    let mut tris = Vec::with_capacity((link_count - 1) * (rows - 1) * 2);
    for i in 0..link_count - 1 {
        for j in 0..rows - 1 {
            tris.push(Triangle {
                vertices: [idx(i, j), idx(i, j + 1), idx(i + 1, j)],
                uv: [
                    Point::new(u(i), v(j)),
                    Point::new(u(i), v(j + 1)),
                    Point::new(u(i + 1), v(j)),
                ],
                segment: i,
                hidden: false,
            });
            tris.push(Triangle {
                vertices: [idx(i, j + 1), idx(i + 1, j), idx(i + 1, j + 1)],
                uv: [
                    Point::new(u(i), v(j + 1)),
                    Point::new(u(i + 1), v(j)),
                    Point::new(u(i + 1), v(j + 1)),
                ],
                segment: i,
                hidden: false,
            });
        }
    }
    tris
}

/// Gradient across the ribbon: from `p1` to its foot on edge `p0p2`.
fn linear_paint(pts: &[Point; 3]) -> Paint {
    let [p0, p1, p2] = *pts;
    match perpendicular_foot(p1, p0, p2) {
        Some(end) if end != p1 && end.is_finite() => Paint::Linear { start: p1, end },
        _ => Paint::Solid,
    }
}

fn region_has_alpha<M: AlphaMask + ?Sized>(mask: &M, src: &[Point; 3]) -> bool {
    let (w, h) = (mask.width(), mask.height());
    if w == 0 || h == 0 {
        return false;
    }
    let min = src[0].min(src[1]).min(src[2]);
    let max = src[0].max(src[1]).max(src[2]);
    let x0 = min.x.floor().max(0.0) as u32;
    let y0 = min.y.floor().max(0.0) as u32;
    let x1 = (max.x.ceil() as u32).min(w);
    let y1 = (max.y.ceil() as u32).min(h);
    for y in y0..y1 {
        for x in x0..x1 {
            if mask.alpha(x, y) == 0 {
                continue;
            }
            let (fx, fy) = (x as f64, y as f64);
            let samples = [
                Point::new(fx + 0.5, fy + 0.5),
                Point::new(fx, fy),
                Point::new(fx + 1.0, fy),
                Point::new(fx, fy + 1.0),
                Point::new(fx + 1.0, fy + 1.0),
            ];
            if samples.iter().any(|&p| point_in_polygon(p, src)) {
                return true;
            }
        }
    }
    false
}
