//! Rigid distance constraints between two points of the same body.

use crate::float::Float;
use crate::vec::Vec2;
use crate::point::Point;
use crate::error::PhysicsError;

/// Distance constraint between points `a` and `b`, stored as indices into
/// the owning body's point list.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pole<F: Float> {
    a: usize,
    b: usize,
    rest_length: F,
}

impl<F: Float> Pole<F> {
    /// Create a pole. The rest length must be positive and finite and the
    /// endpoints distinct; index range is checked when the pole joins a body.
    pub fn new(a: usize, b: usize, rest_length: F) -> Result<Self, PhysicsError> {
        if !rest_length.is_finite() || rest_length <= F::zero() {
            log::warn!("rejecting pole {}-{}: rest length {} is not positive", a, b, rest_length);
            return Err(PhysicsError::InvalidRestLength);
        }
        if a == b {
            log::warn!("rejecting pole {}-{}: both ends on the same point", a, b);
            return Err(PhysicsError::DegeneratePole { index: a });
        }
        Ok(Pole { a, b, rest_length })
    }

    /// Create a pole whose rest length is the current distance between the points.
    pub fn from_points(a: usize, b: usize, points: &[Point<F>]) -> Result<Self, PhysicsError> {
        let count = points.len();
        for index in [a, b] {
            if index >= count {
                log::warn!("rejecting pole {}-{}: body has {} points", a, b, count);
                return Err(PhysicsError::PointOutOfBounds { index, count });
            }
        }
        Self::new(a, b, points[a].pos.distance(points[b].pos))
    }

    pub fn a(&self) -> usize { self.a }
    pub fn b(&self) -> usize { self.b }
    pub fn rest_length(&self) -> F { self.rest_length }

    /// Check that both endpoints index into a body of `count` points.
    pub(crate) fn check_range(&self, count: usize) -> Result<(), PhysicsError> {
        for index in [self.a, self.b] {
            if index >= count {
                log::warn!(
                    "rejecting pole {}-{}: point {} outside body of {} points",
                    self.a, self.b, index, count
                );
                return Err(PhysicsError::PointOutOfBounds { index, count });
            }
        }
        Ok(())
    }

    /// One relaxation pass.
    ///
    /// The correction is half the length error along the pole; each free
    /// endpoint moves by half of that. Pinned endpoints take no share.
    /// Coincident endpoints are separated along +x.
    pub fn satisfy(&self, points: &mut [Point<F>]) {
        let a_pinned = points[self.a].pinned;
        let b_pinned = points[self.b].pinned;
        if a_pinned && b_pinned {
            return;
        }

        let delta = points[self.b].pos - points[self.a].pos;
        let dist = delta.length();
        let dir = delta.normalize_or(Vec2::unit_x());

        let correction = dir.scale((dist - self.rest_length) * F::half());
        let share = correction.scale(F::half());

        if !a_pinned {
            points[self.a].pos = points[self.a].pos + share;
        }
        if !b_pinned {
            points[self.b].pos = points[self.b].pos - share;
        }
    }

    /// Signed deviation from rest length (positive when stretched).
    pub fn strain(&self, points: &[Point<F>]) -> F {
        points[self.a].pos.distance(points[self.b].pos) - self.rest_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: Vec2<f64>, b: Vec2<f64>) -> [Point<f64>; 2] {
        [Point::new(a), Point::new(b)]
    }

    #[test]
    fn rejects_bad_rest_length() {
        assert_eq!(Pole::new(0, 1, 0.0f64), Err(PhysicsError::InvalidRestLength));
        assert_eq!(Pole::new(0, 1, -1.0f64), Err(PhysicsError::InvalidRestLength));
        assert_eq!(Pole::new(0, 1, f64::NAN), Err(PhysicsError::InvalidRestLength));
    }

    #[test]
    fn rejects_self_loop() {
        assert_eq!(Pole::new(2, 2, 1.0f64), Err(PhysicsError::DegeneratePole { index: 2 }));
    }

    #[test]
    fn from_points_checks_range() {
        let pts = pair(Vec2::zero(), Vec2::new(3.0, 4.0));
        let pole = Pole::from_points(0, 1, &pts).unwrap();
        assert!((pole.rest_length() - 5.0).abs() < 1e-12);
        assert_eq!(
            Pole::from_points(0, 5, &pts),
            Err(PhysicsError::PointOutOfBounds { index: 5, count: 2 })
        );
    }

    #[test]
    fn at_rest_length_is_noop() {
        let mut pts = pair(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        let pole = Pole::new(0, 1, 5.0).unwrap();
        pole.satisfy(&mut pts);
        assert!(pts[0].pos.distance(Vec2::new(1.0, 1.0)) < 1e-12);
        assert!(pts[1].pos.distance(Vec2::new(4.0, 5.0)) < 1e-12);
    }

    #[test]
    fn double_stretch_relaxes_to_one_and_a_half() {
        let rest = 2.0;
        let mut pts = pair(Vec2::new(0.0, 0.0), Vec2::new(0.0, 2.0 * rest));
        let pole = Pole::new(0, 1, rest).unwrap();
        pole.satisfy(&mut pts);
        let d = pts[0].pos.distance(pts[1].pos);
        assert!((d - 1.5 * rest).abs() < 1e-12, "distance = {}", d);
    }

    #[test]
    fn compressed_pole_pushes_apart() {
        let mut pts = pair(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        let pole = Pole::new(0, 1, 3.0).unwrap();
        pole.satisfy(&mut pts);
        assert!((pts[0].pos.x + 0.5).abs() < 1e-12);
        assert!((pts[1].pos.x - 1.5).abs() < 1e-12);
    }

    #[test]
    fn pinned_end_absorbs_nothing() {
        let mut pts = [Point::pinned(Vec2::new(0.0f64, 0.0)), Point::new(Vec2::new(10.0, 0.0))];
        let pole = Pole::new(0, 1, 5.0).unwrap();
        pole.satisfy(&mut pts);
        assert_eq!(pts[0].pos, Vec2::new(0.0, 0.0));
        assert!((pts[1].pos.x - 8.75).abs() < 1e-12);
    }

    #[test]
    fn both_pinned_is_noop() {
        let mut pts = [Point::pinned(Vec2::new(0.0f64, 0.0)), Point::pinned(Vec2::new(10.0, 0.0))];
        Pole::new(0, 1, 5.0).unwrap().satisfy(&mut pts);
        assert_eq!(pts[0].pos, Vec2::new(0.0, 0.0));
        assert_eq!(pts[1].pos, Vec2::new(10.0, 0.0));
    }

    #[test]
    fn coincident_points_split_along_x() {
        let mut pts = pair(Vec2::new(2.0, 2.0), Vec2::new(2.0, 2.0));
        Pole::new(0, 1, 4.0).unwrap().satisfy(&mut pts);
        assert_eq!(pts[0].pos, Vec2::new(1.0, 2.0));
        assert_eq!(pts[1].pos, Vec2::new(3.0, 2.0));
    }
}
