//! Narrowphase collision detection: GJK overlap test and EPA penetration recovery.

use glam::Vec2;

use super::contact::Penetration;
use super::polygon::{minkowski_support, triple_product, SupportMap};

/// GJK gives up (reports no overlap) after this many support queries.
pub const MAX_GJK_ITERATIONS: usize = 100;
/// EPA returns its best edge so far after this many expansions.
pub const MAX_EPA_ITERATIONS: usize = 64;
/// EPA convergence tolerance, also used as the separation bias.
pub const EPA_TOLERANCE: f32 = 0.001;

const DEGENERATE_EPSILON: f32 = 1e-10;

/// A simplex used by the GJK algorithm (up to 3 points in 2D), oldest point first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Simplex {
    points: [Vec2; 3],
    len: usize,
}

impl Simplex {
    fn new() -> Self {
        Self {
            points: [Vec2::ZERO; 3],
            len: 0,
        }
    }

    fn push(&mut self, point: Vec2) {
        self.points[self.len] = point;
        self.len += 1;
    }

    fn remove(&mut self, index: usize) {
        self.points.copy_within(index + 1..self.len, index);
        self.len -= 1;
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points[..self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Initial GJK search direction: from the center of A toward the center of B.
fn initial_direction<A, B>(shape_a: &A, shape_b: &B) -> Vec2
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    (shape_b.center() - shape_a.center())
        .try_normalize()
        .unwrap_or(Vec2::X)
}

/// GJK intersection test. Returns the enclosing triangle if the shapes overlap.
///
/// Touching shapes (origin on the Minkowski boundary) do not overlap. Running out
/// of iterations is reported as no overlap.
pub fn gjk_intersection<A, B>(shape_a: &A, shape_b: &B) -> Option<Simplex>
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    let mut simplex = Simplex::new();

    let first = minkowski_support(shape_a, shape_b, initial_direction(shape_a, shape_b));
    simplex.push(first);

    // Origin is the extreme point of A - B: the shapes only touch.
    let mut direction = (-first).try_normalize()?;

    for _ in 0..MAX_GJK_ITERATIONS {
        let point = minkowski_support(shape_a, shape_b, direction);
        if point.dot(direction) <= 0.0 {
            return None;
        }
        simplex.push(point);

        if do_simplex(&mut simplex, &mut direction) {
            return Some(simplex);
        }
    }

    None
}

/// Process the simplex and update the search direction.
/// Returns true if the origin is enclosed by the simplex.
fn do_simplex(simplex: &mut Simplex, direction: &mut Vec2) -> bool {
    match simplex.len() {
        2 => do_simplex_line(simplex, direction),
        3 => do_simplex_triangle(simplex, direction),
        _ => false,
    }
}

fn do_simplex_line(simplex: &mut Simplex, direction: &mut Vec2) -> bool {
    let a = simplex.points[1]; // Most recently added
    let b = simplex.points[0];
    let ab = b - a;
    let ao = -a;

    // Origin on the line through a and b: either side will do.
    *direction = triple_product(ab, ao, ab)
        .try_normalize()
        .unwrap_or_else(|| ab.perp().normalize_or_zero());
    false
}

fn do_simplex_triangle(simplex: &mut Simplex, direction: &mut Vec2) -> bool {
    let a = simplex.points[2]; // Most recently added
    let b = simplex.points[1];
    let c = simplex.points[0];
    let ab = b - a;
    let ac = c - a;
    let ao = -a;

    let ab_perp = triple_product(ac, ab, ab).normalize_or_zero();
    let ac_perp = triple_product(ab, ac, ac).normalize_or_zero();

    if ab_perp.dot(ao) >= 0.0 {
        simplex.remove(0);
        *direction = ab_perp;
        return false;
    }
    if ac_perp.dot(ao) >= 0.0 {
        simplex.remove(1);
        *direction = ac_perp;
        return false;
    }

    true
}

/// Closest polytope edge to the origin.
struct ClosestEdge {
    /// Insertion index for a new vertex on this edge.
    index: usize,
    normal: Vec2,
    distance: f32,
}

fn closest_edge(polytope: &[Vec2], clockwise: bool) -> Option<ClosestEdge> {
    let mut best: Option<ClosestEdge> = None;

    for i in 0..polytope.len() {
        let j = (i + 1) % polytope.len();
        let edge = polytope[j] - polytope[i];
        // Outward normal from the winding.
        let outward = if clockwise {
            edge.perp()
        } else {
            -edge.perp()
        };
        let len = outward.length();
        if len < DEGENERATE_EPSILON {
            continue;
        }
        let normal = outward / len;
        let distance = normal.dot(polytope[i]);

        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(ClosestEdge {
                index: j,
                normal,
                distance,
            });
        }
    }

    best
}

/// EPA (Expanding Polytope Algorithm) to compute penetration depth and normal.
///
/// Allocates its polytope; see [`epa_penetration_with`] to reuse a buffer.
pub fn epa_penetration<A, B>(simplex: &Simplex, shape_a: &A, shape_b: &B) -> Option<Penetration>
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    let mut polytope = Vec::with_capacity(3 + MAX_EPA_ITERATIONS);
    epa_penetration_with(simplex, shape_a, shape_b, &mut polytope)
}

/// EPA using `polytope` as scratch storage.
///
/// Returns `None` only when the simplex is not a proper triangle.
pub fn epa_penetration_with<A, B>(
    simplex: &Simplex,
    shape_a: &A,
    shape_b: &B,
    polytope: &mut Vec<Vec2>,
) -> Option<Penetration>
where
    A: SupportMap + ?Sized,
    B: SupportMap + ?Sized,
{
    if simplex.len() != 3 {
        return None;
    }

    polytope.clear();
    polytope.extend_from_slice(simplex.points());

    let [p0, p1, p2] = simplex.points;
    let area = (p1 - p0).perp_dot(p2 - p0);
    if area.abs() < DEGENERATE_EPSILON {
        return None;
    }
    let clockwise = area < 0.0;

    let mut best = None;
    for _ in 0..MAX_EPA_ITERATIONS {
        let edge = closest_edge(polytope, clockwise)?;
        best = Some(Penetration {
            normal: edge.normal,
            depth: edge.distance,
        });

        let point = minkowski_support(shape_a, shape_b, edge.normal);
        let distance = point.dot(edge.normal);

        if distance - edge.distance > EPA_TOLERANCE {
            polytope.insert(edge.index, point);
            continue;
        }

        // The tolerance bias is applied by `Penetration::separation`.
        return best;
    }

    tracing::warn!(
        iterations = MAX_EPA_ITERATIONS,
        vertices = polytope.len(),
        "EPA did not converge, using closest edge found"
    );
    best
}

/// Full narrowphase test between two convex vertex sets (world space).
///
/// Returns `None` if the shapes do not overlap. The normal points from A toward B.
pub fn detect_collision(vertices_a: &[Vec2], vertices_b: &[Vec2]) -> Option<Penetration> {
    let mut polytope = Vec::new();
    detect_collision_with(vertices_a, vertices_b, &mut polytope)
}

/// [`detect_collision`] reusing `polytope` as EPA scratch storage.
pub fn detect_collision_with(
    vertices_a: &[Vec2],
    vertices_b: &[Vec2],
    polytope: &mut Vec<Vec2>,
) -> Option<Penetration> {
    let simplex = gjk_intersection(vertices_a, vertices_b)?;
    let penetration = epa_penetration_with(&simplex, vertices_a, vertices_b, polytope)
        .unwrap_or_else(|| Penetration {
            normal: initial_direction(vertices_a, vertices_b),
            depth: 0.0,
        });
    Some(penetration)
}
