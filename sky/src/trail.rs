use std::collections::VecDeque;

/// Most-recent-first history of positions, capped at a fixed length.
#[derive(Clone, Debug)]
pub struct Trail {
    points: VecDeque<(f64, f64)>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Trail {
        Trail {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Records `point` as the newest entry, dropping the oldest beyond capacity.
    pub fn push(&mut self, point: (f64, f64)) {
        self.points.push_front(point);
        self.points.truncate(self.capacity);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &(f64, f64)> {
        self.points.iter()
    }

    /// Recency weight of entry `index`: 1 at the head, approaching 0 at the tail.
    pub fn fade(&self, index: usize) -> f64 {
        1.0 - index as f64 / self.points.len() as f64
    }

    /// Consecutive pairs `(index, newer, older)` for drawing connected
    /// segments, `index` counting from 1 at the head.
    pub fn segments(&self) -> impl Iterator<Item = (usize, (f64, f64), (f64, f64))> + '_ {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .enumerate()
            .map(|(i, (newer, older))| (i + 1, *newer, *older))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capped_and_oldest_dropped_first() {
        let mut trail = Trail::new(3);

        for i in 0..10 {
            trail.push((i as f64, 0.0));
            assert!(trail.len() <= 3);
        }

        let xs: Vec<f64> = trail.iter().map(|point| point.0).collect();
        assert_eq!(xs, vec![9.0, 8.0, 7.0]);
    }

    #[test]
    fn segments_run_head_to_tail() {
        let mut trail = Trail::new(4);

        for i in 0..4 {
            trail.push((i as f64, 0.0));
        }

        let segments: Vec<_> = trail.segments().collect();

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], (1, (3.0, 0.0), (2.0, 0.0)));
        assert_eq!(segments[2], (3, (1.0, 0.0), (0.0, 0.0)));
        assert_eq!(trail.fade(0), 1.0);
        assert_eq!(trail.fade(2), 0.5);
    }
}
