/// Maps values to their rank among the distinct values seen at
/// construction. Ranks are dense and order-preserving.
#[derive(Clone, Debug)]
pub struct CoordCompress<T> {
    sorted: Vec<T>,
}

impl<T: Clone + Ord> CoordCompress<T> {
    pub fn new(values: &[T]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort();
        sorted.dedup();
        Self { sorted }
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    /// Rank of `value`, `None` if it was not among the construction input.
    pub fn rank(&self, value: &T) -> Option<usize> {
        self.sorted.binary_search(value).ok()
    }

    /// The value holding rank `rank`.
    pub fn value(&self, rank: usize) -> Option<&T> {
        self.sorted.get(rank)
    }
}

/// Collapses consecutive equal elements into `(value, run_length)` pairs.
pub fn run_length_encode<T: Clone + Eq>(values: &[T]) -> Vec<(T, usize)> {
    let mut runs: Vec<(T, usize)> = Vec::new();
    for value in values {
        match runs.last_mut() {
            Some((prev, count)) if prev == value => *count += 1,
            _ => runs.push((value.clone(), 1)),
        }
    }
    runs
}
