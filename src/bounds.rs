//! Axis-aligned bounding boxes for broad-phase rejection and static geometry.

use crate::float::Float;
use crate::vec::Vec2;
use crate::error::PhysicsError;

/// Axis-aligned box described by its `min` (left-bottom) and `max` (right-top) corners.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingBox<F: Float> {
    min: Vec2<F>,
    max: Vec2<F>,
}

impl<F: Float> BoundingBox<F> {
    /// Build a box from ordered corners. Rejects `min > max` on either axis.
    pub fn new(min: Vec2<F>, max: Vec2<F>) -> Result<Self, PhysicsError> {
        if !min.is_finite() || !max.is_finite() || min.x > max.x || min.y > max.y {
            log::warn!("rejecting bounding box {:?}..{:?}: min exceeds max", min, max);
            return Err(PhysicsError::MalformedBounds);
        }
        Ok(BoundingBox { min, max })
    }

    /// Build a box from any two opposite corners, ordering them per axis.
    pub fn from_corners(a: Vec2<F>, b: Vec2<F>) -> Result<Self, PhysicsError> {
        if !a.is_finite() || !b.is_finite() {
            log::warn!("rejecting bounding box {:?}..{:?}: non-finite corner", a, b);
            return Err(PhysicsError::MalformedBounds);
        }
        Ok(BoundingBox { min: a.min(b), max: a.max(b) })
    }

    /// Zero-sized box sitting on a single point.
    pub fn around(point: Vec2<F>) -> Self {
        BoundingBox { min: point, max: point }
    }

    /// Tight box over a sequence of points. `None` if the sequence is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vec2<F>>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::around(iter.next()?);
        for p in iter {
            bounds.expand_to_include(p);
        }
        Some(bounds)
    }

    pub fn min(&self) -> Vec2<F> { self.min }
    pub fn max(&self) -> Vec2<F> { self.max }

    pub fn width(&self) -> F { self.max.x - self.min.x }
    pub fn height(&self) -> F { self.max.y - self.min.y }

    /// True iff the boxes overlap on both axes. Touching edges count as overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.max.x < other.min.x || self.min.x > other.max.x {
            return false;
        }
        if self.max.y < other.min.y || self.min.y > other.max.y {
            return false;
        }
        true
    }

    /// True iff `point` lies inside the box or on its boundary.
    pub fn contains(&self, point: Vec2<F>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Grow the box just enough to include `point`.
    pub fn expand_to_include(&mut self, point: Vec2<F>) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(x0: f64, y0: f64, x1: f64, y1: f64) -> BoundingBox<f64> {
        BoundingBox::new(Vec2::new(x0, y0), Vec2::new(x1, y1)).unwrap()
    }

    #[test]
    fn rejects_inverted_corners() {
        let err = BoundingBox::new(Vec2::new(1.0f64, 0.0), Vec2::new(0.0, 1.0));
        assert_eq!(err, Err(PhysicsError::MalformedBounds));
    }

    #[test]
    fn from_corners_orders_axes() {
        let b = BoundingBox::from_corners(Vec2::new(4.0f64, -1.0), Vec2::new(-2.0, 3.0)).unwrap();
        assert_eq!(b.min(), Vec2::new(-2.0, -1.0));
        assert_eq!(b.max(), Vec2::new(4.0, 3.0));
    }

    #[test]
    fn from_corners_rejects_nan() {
        let err = BoundingBox::from_corners(Vec2::new(f64::NAN, 0.0), Vec2::new(1.0, 1.0));
        assert_eq!(err, Err(PhysicsError::MalformedBounds));
        let err = BoundingBox::from_corners(Vec2::new(0.0, 0.0), Vec2::new(f64::INFINITY, 1.0));
        assert_eq!(err, Err(PhysicsError::MalformedBounds));
    }

    #[test]
    fn touching_edges_overlap() {
        let a = bbox(0.0, 0.0, 1.0, 1.0);
        let b = bbox(1.0, 0.5, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn overlap_is_symmetric() {
        let boxes = [
            bbox(0.0, 0.0, 1.0, 1.0),
            bbox(0.5, 0.5, 3.0, 0.7),
            bbox(-5.0, -5.0, -4.0, -4.0),
            bbox(0.2, -10.0, 0.3, 10.0),
            bbox(1.0, 1.0, 1.0, 1.0),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(a.overlaps(b), b.overlaps(a));
            }
        }
    }

    #[test]
    fn separated_on_one_axis_do_not_overlap() {
        let a = bbox(0.0, 0.0, 1.0, 1.0);
        let b = bbox(0.0, 1.5, 1.0, 2.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn contains_includes_boundary() {
        let b = bbox(0.0, 0.0, 2.0, 2.0);
        assert!(b.contains(Vec2::new(1.0, 1.0)));
        assert!(b.contains(Vec2::new(2.0, 0.0)));
        assert!(!b.contains(Vec2::new(2.0001, 1.0)));
    }

    #[test]
    fn expand_and_from_points() {
        let mut b = BoundingBox::around(Vec2::new(1.0f64, 1.0));
        b.expand_to_include(Vec2::new(-1.0, 3.0));
        assert_eq!(b.min(), Vec2::new(-1.0, 1.0));
        assert_eq!(b.max(), Vec2::new(1.0, 3.0));

        let pts = [Vec2::new(0.0f64, 0.0), Vec2::new(2.0, -1.0), Vec2::new(1.0, 4.0)];
        let tight = BoundingBox::from_points(pts.iter().copied()).unwrap();
        assert_eq!(tight.min(), Vec2::new(0.0, -1.0));
        assert_eq!(tight.max(), Vec2::new(2.0, 4.0));
        assert!(BoundingBox::<f64>::from_points(core::iter::empty()).is_none());
        assert_eq!(tight.width(), 2.0);
        assert_eq!(tight.height(), 5.0);
    }
}
