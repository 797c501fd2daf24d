use crate::PriceTable;

/// Solves the rod cutting problem with plain recursion.
///
/// Every call tries each first piece that has a price and recursively
/// optimizes the remainder, so the running time is exponential in `n`.
/// The recursion depth equals `n`.
pub fn solve_naive(n: usize, prices: &PriceTable) -> u64 {
    cut_rod(n, prices.as_slice())
}

fn cut_rod(n: usize, prices: &[u64]) -> u64 {
    if n == 0 {
        return 0;
    }
    (0..n.min(prices.len()))
        .map(|i| prices[i].saturating_add(cut_rod(n - i - 1, prices)))
        .max()
        .unwrap_or(0)
}
