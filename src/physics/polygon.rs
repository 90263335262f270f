//! Convex polygon shapes and the support-point kernel shared by GJK and EPA.

use glam::Vec2;

use crate::error::ShapeError;

/// Maximum number of vertices a [`Polygon`] can hold.
pub const MAX_POLYGON_VERTICES: usize = 16;

/// Shapes that GJK/EPA can query through a support mapping.
///
/// Both algorithms only ever touch geometry through [`SupportMap::support_point`],
/// so any convex shape with a support function can participate.
pub trait SupportMap {
    /// Farthest point of the shape in `direction` (world space).
    fn support_point(&self, direction: Vec2) -> Vec2;

    /// A point inside the shape, used to pick the initial search direction.
    fn center(&self) -> Vec2;
}

impl SupportMap for [Vec2] {
    #[inline]
    fn support_point(&self, direction: Vec2) -> Vec2 {
        furthest_vertex(self, direction).1
    }

    #[inline]
    fn center(&self) -> Vec2 {
        centroid(self)
    }
}

/// Convex polygon in local space, relative to the owning entity's position.
///
/// Vertices are stored in a fixed-capacity array; only the first
/// `vertex_count` entries are meaningful and only those are ever exposed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon {
    vertices: [Vec2; MAX_POLYGON_VERTICES],
    vertex_count: u8,
}

impl Polygon {
    /// Create a polygon from its vertices in winding order.
    ///
    /// Convexity is not checked; concave outlines must be split by the caller.
    pub fn new(vertices: &[Vec2]) -> Result<Self, ShapeError> {
        if vertices.is_empty() {
            return Err(ShapeError::Empty);
        }
        if vertices.len() > MAX_POLYGON_VERTICES {
            return Err(ShapeError::TooManyVertices {
                count: vertices.len(),
                max: MAX_POLYGON_VERTICES,
            });
        }
        if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
            return Err(ShapeError::NonFinite { index });
        }
        Ok(Self::from_slice(vertices))
    }

    /// Create a polygon from parallel x/y coordinate arrays.
    pub fn from_xy(xs: &[f32], ys: &[f32]) -> Result<Self, ShapeError> {
        if xs.len() != ys.len() {
            return Err(ShapeError::MismatchedArrays {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() > MAX_POLYGON_VERTICES {
            return Err(ShapeError::TooManyVertices {
                count: xs.len(),
                max: MAX_POLYGON_VERTICES,
            });
        }
        let mut points = [Vec2::ZERO; MAX_POLYGON_VERTICES];
        for (slot, (&x, &y)) in points.iter_mut().zip(xs.iter().zip(ys)) {
            *slot = Vec2::new(x, y);
        }
        Self::new(&points[..xs.len()])
    }

    /// Create a polygon from a fixed-size vertex array.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero or larger than [`MAX_POLYGON_VERTICES`].
    pub fn from_array<const N: usize>(vertices: [Vec2; N]) -> Self {
        assert!(
            N > 0 && N <= MAX_POLYGON_VERTICES,
            "polygon vertex count {} outside 1..={}",
            N,
            MAX_POLYGON_VERTICES
        );
        Self::from_slice(&vertices)
    }

    /// Axis-aligned rectangle centered on the local origin.
    pub fn rectangle(half_extents: Vec2) -> Self {
        let h = half_extents;
        Self::from_array([
            Vec2::new(-h.x, -h.y),
            Vec2::new(h.x, -h.y),
            Vec2::new(h.x, h.y),
            Vec2::new(-h.x, h.y),
        ])
    }

    fn from_slice(vertices: &[Vec2]) -> Self {
        let mut storage = [Vec2::ZERO; MAX_POLYGON_VERTICES];
        storage[..vertices.len()].copy_from_slice(vertices);
        Self {
            vertices: storage,
            vertex_count: vertices.len() as u8,
        }
    }

    /// Local-space vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices[..self.vertex_count as usize]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count as usize
    }

    /// Append the world-space vertices (local + `position`) to `out`.
    #[inline]
    pub fn world_vertices_into(&self, position: Vec2, out: &mut Vec<Vec2>) {
        out.extend(self.vertices().iter().map(|v| *v + position));
    }

    /// World-space vertices as a new vector.
    pub fn world_vertices(&self, position: Vec2) -> Vec<Vec2> {
        let mut out = Vec::with_capacity(self.vertex_count());
        self.world_vertices_into(position, &mut out);
        out
    }
}

/// Index and value of the vertex with the largest projection on `direction`.
///
/// Ties resolve to the first maximal vertex in array order.
///
/// # Panics
///
/// Panics if `vertices` is empty.
#[inline]
pub fn furthest_vertex(vertices: &[Vec2], direction: Vec2) -> (usize, Vec2) {
    assert!(
        !vertices.is_empty(),
        "furthest_vertex called with an empty vertex set"
    );
    let mut best_index = 0;
    let mut best_dot = vertices[0].dot(direction);
    for (i, v) in vertices.iter().enumerate().skip(1) {
        let d = v.dot(direction);
        if d > best_dot {
            best_dot = d;
            best_index = i;
        }
    }
    (best_index, vertices[best_index])
}

/// Support point of the Minkowski difference `A - B` in `direction`.
#[inline]
pub fn support(vertices_a: &[Vec2], vertices_b: &[Vec2], direction: Vec2) -> Vec2 {
    minkowski_support(vertices_a, vertices_b, direction)
}

/// Minkowski difference support function for any pair of support maps.
#[inline]
pub fn minkowski_support<A, B>(shape_a: &A, shape_b: &B, direction: Vec2) -> Vec2
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    shape_a.support_point(direction) - shape_b.support_point(-direction)
}

/// Vector triple product `(a x b) x c = b(a.c) - a(b.c)`, not normalized.
#[inline]
pub fn triple_product(a: Vec2, b: Vec2, c: Vec2) -> Vec2 {
    b * a.dot(c) - a * b.dot(c)
}

/// Arithmetic mean of a vertex set.
///
/// # Panics
///
/// Panics if `vertices` is empty.
pub fn centroid(vertices: &[Vec2]) -> Vec2 {
    assert!(!vertices.is_empty(), "centroid of an empty vertex set");
    vertices.iter().copied().sum::<Vec2>() / vertices.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(center: Vec2, half: f32) -> Vec<Vec2> {
        Polygon::rectangle(Vec2::splat(half)).world_vertices(center)
    }

    #[test]
    fn test_polygon_rejects_empty() {
        assert_eq!(Polygon::new(&[]), Err(ShapeError::Empty));
    }

    #[test]
    fn test_polygon_rejects_too_many_vertices() {
        let points = vec![Vec2::ONE; MAX_POLYGON_VERTICES + 1];
        assert_eq!(
            Polygon::new(&points),
            Err(ShapeError::TooManyVertices { count: 17, max: 16 })
        );
    }

    #[test]
    fn test_polygon_rejects_nan() {
        let points = [Vec2::ZERO, Vec2::new(f32::NAN, 1.0), Vec2::X];
        assert_eq!(
            Polygon::new(&points),
            Err(ShapeError::NonFinite { index: 1 })
        );
    }

    #[test]
    fn test_polygon_from_xy() {
        let poly = Polygon::from_xy(&[-30.0, 30.0, 30.0], &[-30.0, -30.0, 30.0]).unwrap();
        assert_eq!(poly.vertex_count(), 3);
        assert_eq!(poly.vertices()[2], Vec2::new(30.0, 30.0));

        assert_eq!(
            Polygon::from_xy(&[1.0, 2.0], &[1.0]),
            Err(ShapeError::MismatchedArrays { xs: 2, ys: 1 })
        );
    }

    #[test]
    fn test_vertices_only_exposes_count() {
        let poly = Polygon::rectangle(Vec2::splat(1.0));
        assert_eq!(poly.vertices().len(), 4);
    }

    #[test]
    fn test_world_vertices_offset() {
        let poly = Polygon::rectangle(Vec2::new(2.0, 1.0));
        let world = poly.world_vertices(Vec2::new(10.0, 5.0));
        assert_eq!(world[0], Vec2::new(8.0, 4.0));
        assert_eq!(world[2], Vec2::new(12.0, 6.0));
    }

    #[test]
    fn test_furthest_vertex_first_tie_wins() {
        let verts = square(Vec2::ZERO, 30.0);
        // (30, -30) and (30, 30) both project to 30 on +X; the earlier one wins.
        let (index, vertex) = furthest_vertex(&verts, Vec2::X);
        assert_eq!(index, 1);
        assert_eq!(vertex, Vec2::new(30.0, -30.0));
    }

    #[test]
    #[should_panic]
    fn test_furthest_vertex_empty_panics() {
        furthest_vertex(&[], Vec2::X);
    }

    #[test]
    fn test_support_is_minkowski_difference() {
        let a = square(Vec2::ZERO, 30.0);
        let b = square(Vec2::new(100.0, 0.0), 30.0);
        let s = support(&a, &b, Vec2::X);
        assert_eq!(s, Vec2::new(30.0, -30.0) - Vec2::new(70.0, -30.0));
    }

    #[test]
    fn test_triple_product_points_toward_origin() {
        let a = Vec2::new(-1.0, 1.0);
        let b = Vec2::new(1.0, 1.0);
        let ab = b - a;
        let ao = -a;
        let perp = triple_product(ab, ao, ab).normalize();
        let eps = 1e-6;
        assert!((perp - Vec2::new(0.0, -1.0)).length() < eps);
    }

    #[test]
    fn test_centroid() {
        let verts = square(Vec2::new(4.0, -2.0), 3.0);
        assert_eq!(centroid(&verts), Vec2::new(4.0, -2.0));
    }
}
