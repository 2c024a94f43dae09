use std::ops::Range;

/// Static range-minimum structure over `i64` values.
///
/// Level `k` of the table stores the minimum of every window of length
/// `2^k`, so a query covers its range with two (possibly overlapping)
/// windows. O(n log n) construction, O(1) per query.
#[derive(Clone, Debug)]
pub struct SparseTable {
    len: usize,
    rows: Vec<Vec<i64>>,
}

impl SparseTable {
    pub fn new(values: &[i64]) -> Self {
        let n = values.len();
        let mut rows = Vec::new();
        if n == 0 {
            return Self { len: 0, rows };
        }

        rows.push(values.to_vec());
        let mut half = 1_usize;
        while 2 * half <= n {
            let prev = rows.last().map_or(&[][..], Vec::as_slice);
            let row: Vec<i64> = (0..=n - 2 * half)
                .map(|i| prev[i].min(prev[i + half]))
                .collect();
            rows.push(row);
            half *= 2;
        }
        Self { len: n, rows }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Minimum over the half-open range, `None` when the range is empty
    /// or out of bounds.
    pub fn min(&self, range: Range<usize>) -> Option<i64> {
        if range.start >= range.end || range.end > self.len {
            return None;
        }
        let len = range.end - range.start;
        let k = usize::BITS as usize - 1 - len.leading_zeros() as usize;
        let span = 1_usize << k;
        let row = &self.rows[k];
        Some(row[range.start].min(row[range.end - span]))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::SparseTable;

    #[test]
    fn empty_and_invalid_ranges_return_none() {
        let empty = SparseTable::new(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.min(0..0), None);

        let table = SparseTable::new(&[5, 1, 4]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.min(1..1), None);
        assert_eq!(table.min(2..1), None);
        assert_eq!(table.min(0..4), None);
    }

    #[test]
    fn known_cases() {
        let table = SparseTable::new(&[5, 1, 4, 1, 3]);
        assert_eq!(table.min(0..5), Some(1));
        assert_eq!(table.min(2..3), Some(4));
        assert_eq!(table.min(2..5), Some(1));
        assert_eq!(table.min(4..5), Some(3));

        let single = SparseTable::new(&[42]);
        assert_eq!(single.min(0..1), Some(42));
    }

    #[test]
    fn all_ranges_match_bruteforce() {
        let mut rng = StdRng::seed_from_u64(0x5EED_7AB1);

        for n in 1..=48_usize {
            let values: Vec<i64> = (0..n).map(|_| rng.random_range(-20..=20)).collect();
            let table = SparseTable::new(&values);
            for l in 0..n {
                for r in (l + 1)..=n {
                    let expected = values[l..r].iter().copied().min();
                    assert_eq!(table.min(l..r), expected, "n={n} l={l} r={r}");
                }
            }
        }
    }
}
