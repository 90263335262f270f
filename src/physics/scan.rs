//! Pairwise collision scan over every collidable entity.
//!
//! Brute force O(n^2): every unordered pair runs GJK, and EPA when GJK
//! reports overlap. Only suitable for small entity counts.

use glam::Vec2;
use tracing::{debug, trace};

use crate::ecs::components::{Collider, Position};

use super::contact::Contact;
use super::narrowphase::detect_collision_with;

/// How an entity's `is_colliding` flag combines across the pairs of one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactFlagPolicy {
    /// Flags start cleared and any colliding pair sets them.
    #[default]
    Accumulate,
    /// Every pair overwrites both flags with its own result, so the last
    /// pair an entity appears in decides.
    LastPairWins,
}

/// Summary of one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub tested_pairs: usize,
    pub colliding_pairs: usize,
}

#[derive(Debug, Clone, Copy)]
struct ScanEntry {
    entity: hecs::Entity,
    first_vertex: usize,
    vertex_end: usize,
}

#[derive(Debug, Clone, Copy, Default)]
struct ContactState {
    colliding: bool,
    normal: Option<Vec2>,
    count: u32,
}

/// Collision scan with scratch buffers reused across ticks.
#[derive(Debug, Default)]
pub struct CollisionScan {
    entries: Vec<ScanEntry>,
    vertices: Vec<Vec2>,
    polytope: Vec<Vec2>,
    states: Vec<ContactState>,
    contacts: Vec<Contact>,
}

impl CollisionScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colliding pairs found by the last [`run`](Self::run).
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Test every pair of entities with a [`Position`] and a [`Collider`] and
    /// write the results back onto their colliders.
    ///
    /// Each entity stores the normal pointing from the other body toward
    /// itself, so `velocity.dot(last_normal) < 0` means it moves into the
    /// other body.
    pub fn run(&mut self, world: &mut hecs::World, policy: ContactFlagPolicy) -> ScanReport {
        self.entries.clear();
        self.vertices.clear();
        self.contacts.clear();

        for (entity, (position, collider)) in world.query_mut::<(&Position, &Collider)>() {
            let first_vertex = self.vertices.len();
            collider
                .shape
                .world_vertices_into(position.0, &mut self.vertices);
            self.entries.push(ScanEntry {
                entity,
                first_vertex,
                vertex_end: self.vertices.len(),
            });
        }

        self.states.clear();
        self.states
            .resize(self.entries.len(), ContactState::default());

        let mut report = ScanReport::default();
        for i in 0..self.entries.len() {
            let a = self.entries[i];
            for j in (i + 1)..self.entries.len() {
                let b = self.entries[j];
                report.tested_pairs += 1;

                let hit = detect_collision_with(
                    &self.vertices[a.first_vertex..a.vertex_end],
                    &self.vertices[b.first_vertex..b.vertex_end],
                    &mut self.polytope,
                );

                match hit {
                    Some(hit) => {
                        report.colliding_pairs += 1;
                        trace!(
                            entity_a = ?a.entity,
                            entity_b = ?b.entity,
                            normal = ?hit.normal,
                            depth = hit.depth,
                            "collision"
                        );
                        record_hit(&mut self.states[i], -hit.normal);
                        record_hit(&mut self.states[j], hit.normal);
                        self.contacts.push(Contact {
                            entity_a: a.entity,
                            entity_b: b.entity,
                            normal: hit.normal,
                            depth: hit.depth,
                        });
                    }
                    None if policy == ContactFlagPolicy::LastPairWins => {
                        self.states[i].colliding = false;
                        self.states[j].colliding = false;
                    }
                    None => {}
                }
            }
        }

        for (entry, state) in self.entries.iter().zip(&self.states) {
            if let Ok(mut collider) = world.get::<&mut Collider>(entry.entity) {
                collider.is_colliding = state.colliding;
                collider.contact_count = state.count;
                if let Some(normal) = state.normal {
                    collider.last_normal = normal;
                }
            }
        }

        debug!(
            entities = self.entries.len(),
            tested = report.tested_pairs,
            colliding = report.colliding_pairs,
            "collision scan"
        );
        report
    }
}

fn record_hit(state: &mut ContactState, normal: Vec2) {
    state.colliding = true;
    state.normal = Some(normal);
    state.count += 1;
}

/// Run a one-off scan with [`ContactFlagPolicy::Accumulate`].
///
/// Allocates fresh scratch buffers; keep a [`CollisionScan`] around to avoid that.
pub fn pairwise_collision_scan(world: &mut hecs::World) -> ScanReport {
    CollisionScan::new().run(world, ContactFlagPolicy::Accumulate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::polygon::Polygon;

    fn spawn_square(world: &mut hecs::World, x: f32) -> hecs::Entity {
        world.spawn((
            Position::new(x, 0.0),
            Collider::new(Polygon::rectangle(Vec2::splat(30.0)), 1.0),
        ))
    }

    #[test]
    fn test_scan_overlapping_squares() {
        let mut world = hecs::World::new();
        let a = spawn_square(&mut world, 0.0);
        let b = spawn_square(&mut world, 10.0);

        let report = pairwise_collision_scan(&mut world);
        assert_eq!(
            report,
            ScanReport {
                tested_pairs: 1,
                colliding_pairs: 1
            }
        );

        let eps = 1e-3;
        let ca = world.get::<&Collider>(a).unwrap();
        let cb = world.get::<&Collider>(b).unwrap();
        assert!(ca.is_colliding);
        assert!(cb.is_colliding);
        assert_eq!(ca.contact_count, 1);
        assert!((ca.last_normal - Vec2::new(-1.0, 0.0)).length() < eps);
        assert!((cb.last_normal - Vec2::new(1.0, 0.0)).length() < eps);
    }

    #[test]
    fn test_scan_separated_clears_flags() {
        let mut world = hecs::World::new();
        let a = spawn_square(&mut world, 0.0);
        let b = spawn_square(&mut world, 100.0);
        world.get::<&mut Collider>(a).unwrap().is_colliding = true;

        let report = pairwise_collision_scan(&mut world);
        assert_eq!(report.colliding_pairs, 0);
        assert!(!world.get::<&Collider>(a).unwrap().is_colliding);
        assert!(!world.get::<&Collider>(b).unwrap().is_colliding);
    }

    #[test]
    fn test_accumulate_keeps_earlier_contacts() {
        let mut world = hecs::World::new();
        let a = spawn_square(&mut world, 0.0);
        let b = spawn_square(&mut world, 10.0);
        let c = spawn_square(&mut world, 500.0);

        let mut scan = CollisionScan::new();
        let report = scan.run(&mut world, ContactFlagPolicy::Accumulate);
        assert_eq!(report.tested_pairs, 3);
        assert_eq!(report.colliding_pairs, 1);
        assert_eq!(scan.contacts().len(), 1);
        assert_eq!(scan.contacts()[0].entity_a, a);
        assert_eq!(scan.contacts()[0].entity_b, b);

        assert!(world.get::<&Collider>(a).unwrap().is_colliding);
        assert!(world.get::<&Collider>(b).unwrap().is_colliding);
        assert!(!world.get::<&Collider>(c).unwrap().is_colliding);
    }

    #[test]
    fn test_last_pair_wins_overwrites() {
        let mut world = hecs::World::new();
        let a = spawn_square(&mut world, 0.0);
        let b = spawn_square(&mut world, 10.0);
        let c = spawn_square(&mut world, 500.0);

        let mut scan = CollisionScan::new();
        let report = scan.run(&mut world, ContactFlagPolicy::LastPairWins);
        assert_eq!(report.colliding_pairs, 1);

        // (a, c) and (b, c) run after (a, b) and clear both flags again.
        assert!(!world.get::<&Collider>(a).unwrap().is_colliding);
        assert!(!world.get::<&Collider>(b).unwrap().is_colliding);
        assert!(!world.get::<&Collider>(c).unwrap().is_colliding);
        // The normal from the colliding pair is still recorded.
        assert!(world.get::<&Collider>(a).unwrap().last_normal.x < 0.0);
    }

    #[test]
    fn test_contact_count_with_two_neighbours() {
        let mut world = hecs::World::new();
        let _left = spawn_square(&mut world, -50.0);
        let middle = spawn_square(&mut world, 0.0);
        let _right = spawn_square(&mut world, 50.0);

        pairwise_collision_scan(&mut world);
        let collider = world.get::<&Collider>(middle).unwrap();
        assert!(collider.is_colliding);
        assert_eq!(collider.contact_count, 2);
    }

    #[test]
    fn test_scan_empty_world() {
        let mut world = hecs::World::new();
        let report = pairwise_collision_scan(&mut world);
        assert_eq!(report, ScanReport::default());
    }

    #[test]
    fn test_entities_without_position_are_ignored() {
        let mut world = hecs::World::new();
        spawn_square(&mut world, 0.0);
        world.spawn((Collider::new(Polygon::rectangle(Vec2::splat(30.0)), 1.0),));

        let report = pairwise_collision_scan(&mut world);
        assert_eq!(report.tested_pairs, 0);
    }
}
