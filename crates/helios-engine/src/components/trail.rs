use std::collections::VecDeque;

use glam::Vec3;

/// Default number of past positions a trail retains.
pub const DEFAULT_TRAIL_LENGTH: usize = 100;

/// Bounded FIFO history of a body's past positions.
///
/// Oldest entries are evicted first once the cap is reached; iteration is
/// always in insertion (chronological) order.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<Vec3>,
    max_len: usize,
}

impl TrailBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len),
            max_len,
        }
    }

    /// Append a position, evicting the oldest entry if over capacity.
    pub fn push(&mut self, position: Vec3) {
        self.points.push_back(position);
        if self.points.len() > self.max_len {
            self.points.pop_front();
        }
    }

    /// Iterate over retained positions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Vec3> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_TRAIL_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_until_cap() {
        let mut trail = TrailBuffer::new(5);
        for i in 0..3 {
            trail.push(Vec3::splat(i as f32));
        }
        assert_eq!(trail.len(), 3);
    }

    #[test]
    fn length_is_min_of_pushes_and_cap() {
        let mut trail = TrailBuffer::new(100);
        for ticks in [0usize, 1, 50, 99, 100, 101, 500] {
            trail.clear();
            for i in 0..ticks {
                trail.push(Vec3::new(i as f32, 0.0, 0.0));
            }
            assert_eq!(trail.len(), ticks.min(100));
        }
    }

    #[test]
    fn evicts_oldest_first() {
        let mut trail = TrailBuffer::new(3);
        for i in 0..5 {
            trail.push(Vec3::new(i as f32, 0.0, 0.0));
        }
        let xs: Vec<f32> = trail.iter().map(|p| p.x).collect();
        // Most recent 3 positions, in chronological order
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }
}
