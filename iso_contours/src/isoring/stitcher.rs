//! Incremental stitching of directed segments into closed rings.
use std::collections::{HashMap, VecDeque};

use super::HalfPoint;
use crate::{
    core::{
        arena::{Handle, SlotArena},
        math::Vector2,
        traits::Real,
    },
    ring::Ring,
};

/// Open polyline under construction.
#[derive(Debug, Clone)]
struct Fragment<T> {
    /// Endpoint key of the first point.
    start: i64,
    /// Endpoint key of the last point.
    end: i64,
    points: VecDeque<Vector2<T>>,
}

/// Merges directed segments, fed in raster order, into closed rings.
///
/// Open fragments live in a [SlotArena] and are found through two maps keyed by the endpoint key
/// (see [Stitcher::encode_index]) of each fragment's current start and current end. At any time
/// no two open fragments share a start key or an end key.
///
/// Each incoming segment `(p0, p1)` is resolved in this order:
///
/// 1. a fragment ends at `p0` and a different fragment starts at `p1`: the two are concatenated
///    into one fragment,
/// 2. the same fragment ends at `p0` and starts at `p1`: `p1` is appended and the closed ring is
///    emitted,
/// 3. only a fragment ending at `p0`: `p1` is appended to it,
/// 4. only a fragment starting at `p1`: `p0` is prepended to it,
/// 5. otherwise a new two point fragment is created.
///
/// Rings are emitted in the order of their closing segments.
#[derive(Debug, Clone)]
pub struct Stitcher<T = f64> {
    width: usize,
    fragment_by_start: HashMap<i64, Handle>,
    fragment_by_end: HashMap<i64, Handle>,
    fragments: SlotArena<Fragment<T>>,
}

impl<T> Stitcher<T>
where
    T: Real,
{
    /// Create a stitcher for a grid with `width` columns.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            fragment_by_start: HashMap::new(),
            fragment_by_end: HashMap::new(),
            fragments: SlotArena::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Endpoint key of a lattice point, `x + y * (width + 1) * 2` in half units (i.e.
    /// `x * 2 + y * (width + 1) * 4` for the grid space point).
    ///
    /// Injective for every point the case table can produce on a grid of this width, since lattice
    /// x coordinates stay within `0..=2 * width`.
    #[inline]
    pub fn encode_index(&self, point: HalfPoint) -> i64 {
        point.x + point.y * (self.width as i64 + 1) * 2
    }

    /// Number of fragments still open.
    #[inline]
    pub fn open_fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Drop all open fragments and endpoint entries, keeping allocations for reuse.
    pub fn clear(&mut self) {
        self.fragments.clear();
        self.fragment_by_start.clear();
        self.fragment_by_end.clear();
    }

    /// Clear and switch to a grid with `width` columns.
    pub fn reset(&mut self, width: usize) {
        self.clear();
        self.width = width;
    }

    /// Feed the directed segment `start -> end`, pushing any ring it closes onto `rings`.
    pub fn stitch(&mut self, start: HalfPoint, end: HalfPoint, rings: &mut Vec<Ring<T>>) {
        let start_index = self.encode_index(start);
        let end_index = self.encode_index(end);

        match (
            self.fragment_by_end.remove(&start_index),
            self.fragment_by_start.remove(&end_index),
        ) {
            (Some(f), Some(g)) if f == g => {
                let Some(mut fragment) = self.detach(f) else {
                    return;
                };
                fragment.points.push_back(end.to_point());
                rings.push(Ring::from_points(Vec::from(fragment.points)));
            }
            (Some(f), Some(g)) => {
                let (Some(head), Some(tail)) = (self.detach(f), self.detach(g)) else {
                    return;
                };
                let (start, end) = (head.start, tail.end);
                let points = if head.points.len() >= tail.points.len() {
                    let mut points = head.points;
                    points.extend(tail.points);
                    points
                } else {
                    let mut points = tail.points;
                    for p in head.points.into_iter().rev() {
                        points.push_front(p);
                    }
                    points
                };

                let merged = self.fragments.insert(Fragment { start, end, points });
                self.fragment_by_start.insert(start, merged);
                self.fragment_by_end.insert(end, merged);
            }
            (Some(f), None) => {
                let Some(fragment) = self.fragment_mut(f) else {
                    return;
                };
                fragment.points.push_back(end.to_point());
                fragment.end = end_index;
                let replaced = self.fragment_by_end.insert(end_index, f);
                debug_assert!(replaced.is_none(), "two open fragments end at {end:?}");
            }
            (None, Some(g)) => {
                let Some(fragment) = self.fragment_mut(g) else {
                    return;
                };
                fragment.points.push_front(start.to_point());
                fragment.start = start_index;
                let replaced = self.fragment_by_start.insert(start_index, g);
                debug_assert!(replaced.is_none(), "two open fragments start at {start:?}");
            }
            (None, None) => {
                let points = VecDeque::from([start.to_point(), end.to_point()]);
                let handle = self.fragments.insert(Fragment {
                    start: start_index,
                    end: end_index,
                    points,
                });
                self.fragment_by_start.insert(start_index, handle);
                self.fragment_by_end.insert(end_index, handle);
            }
        }
    }

    /// End the current trace, discarding any fragment left open.
    ///
    /// A complete trace over a grid leaves no open fragment, so a non-zero return value signals a
    /// tracing defect. Returns the number of fragments discarded.
    pub fn finish(&mut self) -> usize {
        let leftover = self.fragments.len();
        if leftover > 0 {
            log::warn!("discarding {leftover} open fragment(s) left after trace");
        }
        self.clear();
        leftover
    }

    // endpoint maps only hold live fragment handles, a miss drops the segment
    fn detach(&mut self, handle: Handle) -> Option<Fragment<T>> {
        let fragment = self.fragments.remove(handle);
        debug_assert!(fragment.is_some(), "stale fragment handle {handle:?}");
        if fragment.is_none() {
            log::warn!("stale fragment handle {handle:?}, segment dropped");
        }
        fragment
    }

    fn fragment_mut(&mut self, handle: Handle) -> Option<&mut Fragment<T>> {
        let fragment = self.fragments.get_mut(handle);
        debug_assert!(fragment.is_some(), "stale fragment handle {handle:?}");
        if fragment.is_none() {
            log::warn!("stale fragment handle {handle:?}, segment dropped");
        }
        fragment
    }
}

impl<T> Default for Stitcher<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}
