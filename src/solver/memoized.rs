use crate::PriceTable;

/// Cache of best values indexed directly by rod length.
///
/// `None` marks a length whose value has not been computed yet.
/// Slot 0 is never read, the base case returns before any lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memo {
    slots: Vec<Option<u64>>,
}

impl Memo {
    /// Creates an empty memo with room for rods up to length `n`.
    pub fn new(n: usize) -> Self {
        Self {
            slots: vec![None; n + 1],
        }
    }

    /// Returns the cached best value for a rod of `length`, if computed.
    pub fn get(&self, length: usize) -> Option<u64> {
        self.slots.get(length).copied().flatten()
    }

    /// Largest rod length the memo has a slot for.
    pub fn max_length(&self) -> usize {
        self.slots.len() - 1
    }

    fn reserve_length(&mut self, n: usize) {
        if n > self.max_length() {
            self.slots.resize(n + 1, None);
        }
    }
}

/// Solves the rod cutting problem with top-down memoized recursion.
///
/// Values already present in `memo` are reused, so passing a fresh memo gives
/// each call a cold cache. After the call `memo.get(n)` holds the result for
/// `n >= 1`.
pub fn solve_memoized(n: usize, prices: &PriceTable, memo: &mut Memo) -> u64 {
    if n == 0 {
        return 0;
    }
    memo.reserve_length(n);
    cut_rod(n, prices.as_slice(), memo)
}

fn cut_rod(n: usize, prices: &[u64], memo: &mut Memo) -> u64 {
    if n == 0 {
        return 0;
    }
    if let Some(value) = memo.slots[n] {
        return value;
    }
    let q = (0..n.min(prices.len()))
        .map(|i| prices[i].saturating_add(cut_rod(n - i - 1, prices, memo)))
        .max()
        .unwrap_or(0);
    memo.slots[n] = Some(q);
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let prices = PriceTable::default();
        for (n, expected) in [(0, 0), (1, 1), (4, 10), (8, 22)] {
            let mut memo = Memo::new(n);
            assert_eq!(solve_memoized(n, &prices, &mut memo), expected);
        }
    }

    #[test]
    fn test_memo_holds_result() {
        let prices = PriceTable::default();
        let mut memo = Memo::new(10);
        let value = solve_memoized(10, &prices, &mut memo);
        assert_eq!(memo.get(10), Some(value));
        // Every shorter length was filled on the way down.
        assert!((1..=10).all(|length| memo.get(length).is_some()));
    }

    #[test]
    fn test_zero_length_leaves_memo_untouched() {
        let prices = PriceTable::default();
        let mut memo = Memo::new(3);
        assert_eq!(solve_memoized(0, &prices, &mut memo), 0);
        assert_eq!(memo, Memo::new(3));
    }

    #[test]
    fn test_memo_grows_for_longer_rods() {
        let prices = PriceTable::default();
        let mut memo = Memo::new(2);
        let value = solve_memoized(9, &prices, &mut memo);
        assert_eq!(memo.max_length(), 9);
        assert_eq!(memo.get(9), Some(value));
        assert_eq!(value, 25);
    }

    #[test]
    fn test_warm_memo_gives_same_value() {
        let prices = PriceTable::default();
        let mut memo = Memo::new(15);
        let cold = solve_memoized(15, &prices, &mut memo);
        let warm = solve_memoized(15, &prices, &mut memo);
        assert_eq!(cold, warm);
    }
}
