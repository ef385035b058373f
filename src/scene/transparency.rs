//! Painter's-algorithm ordering for alpha-blended billboards.
//!
//! Blended geometry is drawn after opaque geometry, farthest first, so each
//! sprite blends over whatever lies behind it. The order depends on the
//! viewer position and is recomputed every frame.

use glam::Vec3;

/// Indices into `positions`, farthest from `viewer` first.
///
/// Equidistant positions may come out in either order.
#[must_use]
pub fn back_to_front_indices(positions: &[Vec3], viewer: Vec3) -> Vec<usize> {
    let mut keyed: Vec<(f32, usize)> = positions
        .iter()
        .enumerate()
        .map(|(i, p)| ((viewer - *p).length(), i))
        .collect();
    keyed.sort_unstable_by(|a, b| b.0.total_cmp(&a.0));
    keyed.into_iter().map(|(_, i)| i).collect()
}

/// A copy of `positions` sorted farthest-first relative to `viewer`.
#[must_use]
pub fn order_back_to_front(positions: &[Vec3], viewer: Vec3) -> Vec<Vec3> {
    back_to_front_indices(positions, viewer)
        .into_iter()
        .map(|i| positions[i])
        .collect()
}

/// The fixed set of transparent billboards placed at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransparentSet {
    positions: Vec<Vec3>,
}

impl TransparentSet {
    /// Wrap a set of billboard world positions.
    #[must_use]
    pub fn new(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// Billboard positions in placement order.
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Number of billboards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the set has no billboards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Draw order for this frame, farthest first.
    #[must_use]
    pub fn ordered(&self, viewer: Vec3) -> Vec<Vec3> {
        order_back_to_front(&self.positions, viewer)
    }

    /// Draw order for this frame as indices into [`positions`](Self::positions).
    #[must_use]
    pub fn ordered_indices(&self, viewer: Vec3) -> Vec<usize> {
        back_to_front_indices(&self.positions, viewer)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn vegetation() -> Vec<Vec3> {
        vec![
            Vec3::new(-1.5, 0.0, -0.48),
            Vec3::new(1.5, 0.0, 0.51),
            Vec3::new(0.0, 0.0, 0.7),
            Vec3::new(-0.3, 0.0, -2.3),
            Vec3::new(0.5, 0.0, -0.6),
        ]
    }

    #[test]
    fn vegetation_sorted_from_default_viewpoint() {
        let ordered = order_back_to_front(&vegetation(), Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(
            ordered,
            vec![
                Vec3::new(-0.3, 0.0, -2.3),
                Vec3::new(-1.5, 0.0, -0.48),
                Vec3::new(0.5, 0.0, -0.6),
                Vec3::new(1.5, 0.0, 0.51),
                Vec3::new(0.0, 0.0, 0.7),
            ]
        );
    }

    #[test]
    fn indices_follow_positions() {
        let set = TransparentSet::new(vegetation());
        let viewer = Vec3::new(0.0, 0.0, 3.0);
        assert_eq!(set.ordered_indices(viewer), vec![3, 0, 4, 1, 2]);
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn order_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let positions: Vec<Vec3> = (0..40)
            .map(|_| {
                Vec3::new(
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                    rng.random_range(-10.0..10.0),
                )
            })
            .collect();

        for _ in 0..50 {
            let viewer = Vec3::new(
                rng.random_range(-15.0..15.0),
                rng.random_range(-15.0..15.0),
                rng.random_range(-15.0..15.0),
            );
            let mut indices = back_to_front_indices(&positions, viewer);
            let ordered = order_back_to_front(&positions, viewer);

            let distances: Vec<f32> =
                ordered.iter().map(|p| viewer.distance(*p)).collect();
            assert!(distances.windows(2).all(|w| w[0] >= w[1]));

            indices.sort_unstable();
            assert_eq!(indices, (0..positions.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn equidistant_points_are_all_kept() {
        let positions = vec![Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::X];
        let ordered = order_back_to_front(&positions, Vec3::ZERO);
        assert_eq!(ordered.len(), 4);
        assert_eq!(ordered.iter().filter(|p| **p == Vec3::X).count(), 2);
    }

    #[test]
    fn order_follows_viewer() {
        let set = TransparentSet::new(vegetation());
        let from_front = set.ordered(Vec3::new(0.0, 0.0, 3.0));
        let from_back = set.ordered(Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(from_front.first(), Some(&Vec3::new(-0.3, 0.0, -2.3)));
        assert_eq!(from_back.last(), Some(&Vec3::new(-0.3, 0.0, -2.3)));
    }

    #[test]
    fn empty_set_orders_to_nothing() {
        let set = TransparentSet::default();
        assert!(set.is_empty());
        assert!(set.ordered(Vec3::ONE).is_empty());
    }
}
