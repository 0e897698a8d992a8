//! Per-tick "already moved" marks, parallel to the grid

/// One flag per grid cell, cleared in place at the start of every tick.
///
/// A marked cell is never used again as a move source this tick. It can still be
/// the target of another cell's swap.
#[derive(Clone, Debug)]
pub struct MovedMask {
    moved: Vec<bool>,
}

impl MovedMask {
    pub fn new(len: usize) -> Self {
        Self {
            moved: vec![false; len],
        }
    }

    /// Reset all marks without reallocating
    pub fn clear(&mut self) {
        self.moved.fill(false);
    }

    #[inline]
    pub fn is_moved(&self, index: usize) -> bool {
        self.moved[index]
    }

    #[inline]
    pub fn mark(&mut self, index: usize) {
        self.moved[index] = true;
    }

    pub fn len(&self) -> usize {
        self.moved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }

    pub fn count_marked(&self) -> usize {
        self.moved.iter().filter(|&&m| m).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_and_clear() {
        let mut mask = MovedMask::new(8);
        assert_eq!(mask.count_marked(), 0);

        mask.mark(3);
        mask.mark(5);
        assert!(mask.is_moved(3));
        assert!(!mask.is_moved(4));
        assert_eq!(mask.count_marked(), 2);

        mask.clear();
        assert_eq!(mask.count_marked(), 0);
        assert_eq!(mask.len(), 8);
    }
}
