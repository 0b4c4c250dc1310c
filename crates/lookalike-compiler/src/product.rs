// Lazy Cartesian product over per-chunk option lists
//
// Combinations are produced one at a time with an odometer over option
// indices: the last list advances fastest, the first slowest. Nothing beyond
// the current index vector is materialized, so callers can stop after any
// prefix of an exponentially large space.

/// Iterator over every combination of one option per list, each joined into
/// a single string.
#[derive(Debug, Clone)]
pub struct CartesianProduct {
    options: Vec<Vec<String>>,
    indices: Vec<usize>,
    exhausted: bool,
}

impl CartesianProduct {
    /// Create a product over `options`.
    ///
    /// An empty outer list yields exactly one empty string; any empty inner
    /// list yields nothing.
    pub fn new(options: Vec<Vec<String>>) -> Self {
        let exhausted = options.iter().any(Vec::is_empty);
        let indices = vec![0; options.len()];
        Self {
            options,
            indices,
            exhausted,
        }
    }

    /// Rewind to the first combination.
    pub fn reset(&mut self) {
        self.indices.iter_mut().for_each(|i| *i = 0);
        self.exhausted = self.options.iter().any(Vec::is_empty);
    }

    /// Total number of combinations, or `None` if it overflows `usize`.
    pub fn total(&self) -> Option<usize> {
        self.options
            .iter()
            .try_fold(1usize, |acc, list| acc.checked_mul(list.len()))
    }

    /// The option lists this product ranges over.
    pub fn options(&self) -> &[Vec<String>] {
        &self.options
    }

    /// Number of combinations not yet yielded, or `None` on overflow.
    fn remaining(&self) -> Option<usize> {
        if self.exhausted {
            return Some(0);
        }
        // Combinations strictly after the current index vector, plus the
        // current one.
        let mut after = 0usize;
        let mut weight = 1usize;
        for (list, &idx) in self.options.iter().zip(&self.indices).rev() {
            let tail = list.len() - 1 - idx;
            after = after.checked_add(weight.checked_mul(tail)?)?;
            weight = weight.checked_mul(list.len())?;
        }
        after.checked_add(1)
    }

    fn current(&self) -> String {
        self.options
            .iter()
            .zip(&self.indices)
            .map(|(list, &idx)| list[idx].as_str())
            .collect()
    }

    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.options[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
        self.exhausted = true;
    }
}

impl Iterator for CartesianProduct {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.exhausted {
            return None;
        }
        let combination = self.current();
        self.advance();
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl std::iter::FusedIterator for CartesianProduct {}
