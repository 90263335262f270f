//! Grid movement components.
//!
//! An entity in grid mode carries exactly one [`GridMovement`]. It is either
//! [`GridMovement::Idle`], waiting on a direction, or
//! [`GridMovement::Transiting`] between two cells.

use std::ops::{BitOr, BitOrAssign};

use glam::Vec2;

use crate::physics::easing::Easing;

/// Packed direction bits. Diagonals are the OR of two cardinals.
///
/// Screen coordinates: `UP` is `-y`, `DOWN` is `+y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GridDirection(pub u8);

impl GridDirection {
    pub const NONE: Self = Self(0b0000);
    pub const UP: Self = Self(0b0001);
    pub const DOWN: Self = Self(0b0010);
    pub const LEFT: Self = Self(0b0100);
    pub const RIGHT: Self = Self(0b1000);

    const ALL: u8 = 0b1111;

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Unit vector for one of the eight valid directions.
    ///
    /// Returns `None` for `NONE`, for opposing bits such as `UP | DOWN` and
    /// for bits outside the four defined flags.
    pub fn to_vector(self) -> Option<Vec2> {
        if self.0 & !Self::ALL != 0 {
            return None;
        }
        let x = axis(self.contains(Self::LEFT), self.contains(Self::RIGHT))?;
        let y = axis(self.contains(Self::UP), self.contains(Self::DOWN))?;
        Vec2::new(x, y).try_normalize()
    }
}

fn axis(negative: bool, positive: bool) -> Option<f32> {
    match (negative, positive) {
        (true, false) => Some(-1.0),
        (false, true) => Some(1.0),
        (false, false) => Some(0.0),
        (true, true) => None,
    }
}

impl BitOr for GridDirection {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for GridDirection {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Grid entity standing on a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridIdle {
    /// Cells per second.
    pub speed: f32,
    /// Requested direction, written by input. `NONE` means stay.
    pub direction: GridDirection,
}

impl GridIdle {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction: GridDirection::NONE,
        }
    }
}

/// Interpolated move from `start` to `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTransit {
    pub start: Vec2,
    pub target: Vec2,
    /// Accumulated progress; may exceed 1.0 on the final tick.
    pub progress: f32,
    /// Cells per second.
    pub speed: f32,
    pub direction: GridDirection,
}

impl GridTransit {
    /// Transit of one cell along an already resolved unit `direction`.
    pub fn new(start: Vec2, direction: Vec2, cell_size: f32, speed: f32) -> Self {
        Self {
            start,
            target: start + direction * cell_size,
            progress: 0.0,
            speed,
            direction: GridDirection::NONE,
        }
    }

    /// Transit of one cell along a packed direction, or `None` if it does
    /// not resolve to a vector.
    pub fn from_direction(
        start: Vec2,
        direction: GridDirection,
        cell_size: f32,
        speed: f32,
    ) -> Option<Self> {
        let vector = direction.to_vector()?;
        Some(Self {
            direction,
            ..Self::new(start, vector, cell_size, speed)
        })
    }

    /// Position for the current progress, clamped to `[start, target]`.
    #[inline]
    pub fn interpolate(&self, easing: Easing) -> Vec2 {
        self.start + (self.target - self.start) * easing.apply(self.progress)
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }
}

/// Movement mode of a grid entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridMovement {
    Idle(GridIdle),
    Transiting(GridTransit),
}

impl GridMovement {
    /// Idle with no pending direction.
    pub fn idle(speed: f32) -> Self {
        Self::Idle(GridIdle::new(speed))
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle(_))
    }

    pub fn is_transiting(&self) -> bool {
        matches!(self, Self::Transiting(_))
    }

    pub fn speed(&self) -> f32 {
        match self {
            Self::Idle(idle) => idle.speed,
            Self::Transiting(transit) => transit.speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_vectors() {
        assert_eq!(GridDirection::UP.to_vector(), Some(Vec2::new(0.0, -1.0)));
        assert_eq!(GridDirection::DOWN.to_vector(), Some(Vec2::new(0.0, 1.0)));
        assert_eq!(GridDirection::LEFT.to_vector(), Some(Vec2::new(-1.0, 0.0)));
        assert_eq!(GridDirection::RIGHT.to_vector(), Some(Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let v = (GridDirection::DOWN | GridDirection::RIGHT)
            .to_vector()
            .unwrap();
        let eps = 1e-6;
        assert!((v.length() - 1.0).abs() < eps);
        assert!(v.x > 0.0 && v.y > 0.0);
        assert!((v.x - v.y).abs() < eps);
    }

    #[test]
    fn test_invalid_directions() {
        assert_eq!(GridDirection::NONE.to_vector(), None);
        assert_eq!((GridDirection::UP | GridDirection::DOWN).to_vector(), None);
        assert_eq!(
            (GridDirection::LEFT | GridDirection::RIGHT | GridDirection::UP).to_vector(),
            None
        );
        assert_eq!(GridDirection(0b1_0000).to_vector(), None);
    }

    #[test]
    fn test_bitor_assign() {
        let mut dir = GridDirection::NONE;
        dir |= GridDirection::UP;
        dir |= GridDirection::LEFT;
        assert_eq!(dir.bits(), 0b0101);
        assert!(dir.contains(GridDirection::UP));
        assert!(!dir.contains(GridDirection::DOWN));
    }

    #[test]
    fn test_transit_new() {
        let transit = GridTransit::new(Vec2::new(32.0, 32.0), Vec2::X, 64.0, 4.0);
        assert_eq!(transit.target, Vec2::new(96.0, 32.0));
        assert_eq!(transit.progress, 0.0);
        assert_eq!(transit.speed, 4.0);
        assert!(!transit.is_complete());
    }

    #[test]
    fn test_transit_interpolate_clamps() {
        let mut transit = GridTransit::new(Vec2::ZERO, Vec2::Y, 64.0, 1.0);
        transit.progress = 0.25;
        assert_eq!(transit.interpolate(Easing::LINEAR), Vec2::new(0.0, 16.0));
        transit.progress = 1.8;
        assert_eq!(transit.interpolate(Easing::LINEAR), Vec2::new(0.0, 64.0));
        assert!(transit.is_complete());
    }

    #[test]
    fn test_from_direction_rejects_opposites() {
        let transit = GridTransit::from_direction(
            Vec2::ZERO,
            GridDirection::LEFT | GridDirection::RIGHT,
            64.0,
            1.0,
        );
        assert!(transit.is_none());
    }

    #[test]
    fn test_movement_speed() {
        let idle = GridMovement::idle(3.0);
        assert!(idle.is_idle());
        assert_eq!(idle.speed(), 3.0);

        let moving = GridMovement::Transiting(GridTransit::new(Vec2::ZERO, Vec2::X, 64.0, 5.0));
        assert!(moving.is_transiting());
        assert_eq!(moving.speed(), 5.0);
    }
}
