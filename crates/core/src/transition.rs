//! Transition module - per-cell visual transitions
//!
//! A transition describes "the block now at this coordinate should currently be
//! drawn offset from its grid slot". Records are keyed by the block's current
//! board coordinate, at most one per coordinate, and live in a flat slot array
//! sized like the board.
//!
//! Every effect applied to a coordinate is folded into the single record:
//! translations add up, rotations about different pivots are merged into one
//! equivalent rotation. A record's clock starts on its first evaluation, and
//! the record is dropped by the evaluation that finds it finished.

use crate::board::{Board, BOARD_SIZE};
use crate::geometry::{Transform, Vec2, EPSILON};
use crate::types::TRANSITION_SECS;

/// Board coordinate `(x, y)`
pub type Coord = (i8, i8);

/// Accumulated rotation and translation for one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    duration: f32,
    start: Option<f32>,
    angle: f32,
    center: Vec2,
    translation: Vec2,
}

impl Transition {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            start: None,
            angle: 0.0,
            center: Vec2::ZERO,
            translation: Vec2::ZERO,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Clock time of the first evaluation, if any
    pub fn start(&self) -> Option<f32> {
        self.start
    }

    /// Starting rotation offset (radians)
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Starting position offset relative to the grid slot
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn add_translation(&mut self, vector: Vec2) {
        self.translation += vector;
    }

    /// Fold a rotation of `angle` about `center` into this record.
    ///
    /// The incoming rotation is applied first and the accumulated one second.
    /// Two rotations about different points compose to a single rotation by the
    /// summed angle about a third point: rotate the line joining the two
    /// centers by minus half the incoming angle about the incoming center, and
    /// by half the accumulated angle about the accumulated center; the pivot is
    /// where those two lines cross.
    pub fn add_rotation(&mut self, angle: f32, center: Vec2) {
        if angle.abs() <= EPSILON {
            return;
        }
        if self.angle.abs() <= EPSILON {
            self.angle = angle;
            self.center = center;
            return;
        }

        let a = self.center;
        let b = center;
        let alpha = self.angle;
        let total = alpha + angle;
        let ab = a - b;
        let len = ab.length();

        if len <= EPSILON {
            self.angle = total;
            return;
        }

        let dir_b = ab.rotated(-angle / 2.0);
        let dir_a = (-ab).rotated(alpha / 2.0);
        let denom = dir_b.cross(dir_a);

        if denom.abs() <= EPSILON * len * len {
            // Angles cancel (mod a full turn): the composition is a pure
            // translation. Keep the pivot, carry the drift in the translation.
            let drift = a + (b - a).rotated(alpha) - b;
            self.angle = total;
            self.translation += drift;
            return;
        }

        let s = ab.cross(dir_a) / denom;
        self.center = b + dir_b * s;
        self.angle = total;
    }

    /// Transform with `remaining` (1 at start, 0 when settled) of the offset left
    pub fn transform_at(&self, remaining: f32) -> Transform {
        Transform {
            angle: self.angle * remaining,
            pivot: self.center,
            offset: self.translation * remaining,
        }
    }
}

/// Sparse overlay of transitions addressed by board coordinate
#[derive(Debug, Clone)]
pub struct Transitions {
    slots: [Option<Transition>; BOARD_SIZE],
    duration: f32,
}

impl Transitions {
    /// Engine whose new records last `duration` seconds
    pub fn new(duration: f32) -> Self {
        Self {
            slots: [None; BOARD_SIZE],
            duration,
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[inline]
    fn slot(coord: Coord) -> usize {
        Board::index(coord.0, coord.1)
    }

    fn entry(&mut self, coord: Coord) -> &mut Transition {
        let duration = self.duration;
        self.slots[Self::slot(coord)].get_or_insert_with(|| Transition::new(duration))
    }

    pub fn get(&self, coord: Coord) -> Option<&Transition> {
        self.slots[Self::slot(coord)].as_ref()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Add `vector` to the translation at `coord`, creating the record if needed
    pub fn add_translation(&mut self, coord: Coord, vector: Vec2) {
        self.entry(coord).add_translation(vector);
    }

    /// Register that the block now at `target` was drawn at `start` a moment ago
    pub fn add_move(&mut self, target: Coord, start: Coord) {
        let vector = Vec2::new(
            (start.0 - target.0) as f32,
            (start.1 - target.1) as f32,
        );
        self.add_translation(target, vector);
    }

    /// Merge a rotation of `angle` about `center` into the record at `coord`
    pub fn add_rotation(&mut self, coord: Coord, angle: f32, center: Vec2) {
        self.entry(coord).add_rotation(angle, center);
    }

    /// Current transform for the block at `coord`.
    ///
    /// The first evaluation latches the record's start time. Once the elapsed
    /// fraction reaches 1 the record is removed and the identity is returned.
    pub fn evaluate(&mut self, coord: Coord, now: f32) -> Transform {
        let slot = &mut self.slots[Self::slot(coord)];
        let Some(transition) = slot.as_mut() else {
            return Transform::IDENTITY;
        };

        let start = *transition.start.get_or_insert(now);
        let progress = (now - start) / transition.duration;
        if transition.duration <= 0.0 || progress >= 1.0 {
            *slot = None;
            return Transform::IDENTITY;
        }

        transition.transform_at(1.0 - progress.max(0.0))
    }

    /// Move the record at `from` to `to`, replacing whatever `to` held.
    ///
    /// When `from` has no record, `to` ends up without one as well.
    pub fn remap(&mut self, from: Coord, to: Coord) {
        if from == to {
            return;
        }
        let moved = self.slots[Self::slot(from)].take();
        self.slots[Self::slot(to)] = moved;
    }

    /// Drop the record at `coord`, if any
    pub fn discard(&mut self, coord: Coord) {
        self.slots[Self::slot(coord)] = None;
    }

    pub fn clear(&mut self) {
        self.slots = [None; BOARD_SIZE];
    }
}

impl Default for Transitions {
    fn default() -> Self {
        Self::new(TRANSITION_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4
    }

    #[test]
    fn test_translations_merge_into_one_record() {
        let mut t = Transitions::default();
        t.add_translation((4, 5), Vec2::new(1.0, 0.0));
        t.add_translation((4, 5), Vec2::new(1.0, 0.0));

        assert_eq!(t.len(), 1);
        assert_eq!(t.get((4, 5)).unwrap().translation(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_add_move_points_back_to_start() {
        let mut t = Transitions::default();
        t.add_move((4, 6), (4, 5));
        assert_eq!(t.get((4, 6)).unwrap().translation(), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_start_latches_on_first_evaluation() {
        let mut t = Transitions::new(0.1);
        t.add_translation((0, 0), Vec2::new(0.0, -1.0));
        assert_eq!(t.get((0, 0)).unwrap().start(), None);

        let first = t.evaluate((0, 0), 5.0);
        assert_eq!(t.get((0, 0)).unwrap().start(), Some(5.0));
        assert_eq!(first.offset, Vec2::new(0.0, -1.0));

        let half = t.evaluate((0, 0), 5.05);
        assert!(approx(half.offset.y, -0.5));
    }

    #[test]
    fn test_expires_exactly_at_duration() {
        let mut t = Transitions::new(0.5);
        t.add_translation((2, 2), Vec2::new(3.0, 0.0));
        t.evaluate((2, 2), 0.0);

        let settled = t.evaluate((2, 2), 0.5);
        assert_eq!(settled, Transform::IDENTITY);
        assert!(!t.contains((2, 2)));
    }

    #[test]
    fn test_evaluate_without_record_is_identity() {
        let mut t = Transitions::default();
        assert_eq!(t.evaluate((1, 1), 3.0), Transform::IDENTITY);
        assert!(t.is_empty());
    }

    #[test]
    fn test_rotation_with_coincident_centers_sums_angles() {
        let mut tr = Transition::new(0.1);
        let c = Vec2::new(5.0, 2.0);
        tr.add_rotation(-FRAC_PI_2, c);
        tr.add_rotation(-FRAC_PI_2, c);

        assert!(approx(tr.angle(), -PI));
        assert_eq!(tr.center(), c);
    }

    #[test]
    fn test_rotation_merge_matches_composition() {
        let mut tr = Transition::new(0.1);
        let a = Vec2::new(2.0, 0.0);
        let b = Vec2::new(0.0, 0.0);
        tr.add_rotation(-FRAC_PI_2, a);
        tr.add_rotation(-FRAC_PI_2, b);

        assert!(approx(tr.angle(), -PI));
        assert!(approx(tr.center().x, 1.0));
        assert!(approx(tr.center().y, -1.0));

        // Merged record equals "incoming about b, then accumulated about a".
        let p = Vec2::new(3.0, 4.0);
        let step = b + (p - b).rotated(-FRAC_PI_2);
        let expected = a + (step - a).rotated(-FRAC_PI_2);
        let merged = tr.transform_at(1.0).apply(p);
        assert!((merged - expected).length() < 1e-4);
    }

    #[test]
    fn test_opposite_rotations_become_translation() {
        let mut tr = Transition::new(0.1);
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 0.0);
        tr.add_rotation(PI, a);
        tr.add_rotation(PI, b);

        let m = tr.transform_at(1.0);
        let p = Vec2::new(0.25, 0.75);
        let out = m.apply(p);
        assert!(out.x.is_finite() && out.y.is_finite());
        // Half turn about b then half turn about a shifts by 2 * (a - b).
        assert!((out - (p + Vec2::new(2.0, 0.0))).length() < 1e-4);
    }

    #[test]
    fn test_zero_rotation_is_ignored() {
        let mut tr = Transition::new(0.1);
        tr.add_rotation(FRAC_PI_2, Vec2::new(1.0, 1.0));
        tr.add_rotation(0.0, Vec2::new(7.0, 7.0));
        assert_eq!(tr.center(), Vec2::new(1.0, 1.0));
        assert!(approx(tr.angle(), FRAC_PI_2));
    }

    #[test]
    fn test_remap_follows_cell() {
        let mut t = Transitions::default();
        t.add_translation((3, 10), Vec2::new(0.0, -1.0));
        t.remap((3, 10), (3, 12));

        assert!(!t.contains((3, 10)));
        assert_eq!(
            t.get((3, 12)).unwrap().translation(),
            Vec2::new(0.0, -1.0)
        );
    }

    #[test]
    fn test_remap_from_empty_clears_destination() {
        let mut t = Transitions::default();
        t.add_translation((3, 12), Vec2::new(1.0, 0.0));
        t.remap((3, 10), (3, 12));
        assert!(t.is_empty());
    }

    #[test]
    fn test_remap_preserves_latched_start() {
        let mut t = Transitions::new(1.0);
        t.add_translation((0, 5), Vec2::new(0.0, -2.0));
        t.evaluate((0, 5), 1.0);
        t.remap((0, 5), (0, 7));
        assert_eq!(t.get((0, 7)).unwrap().start(), Some(1.0));
    }
}
