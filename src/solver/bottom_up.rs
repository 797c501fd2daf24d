use crate::PriceTable;

/// An optimal way to cut a rod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cutting {
    /// Total sale value of the pieces.
    pub value: u64,
    /// Lengths of the pieces, in the order they are cut off.
    pub pieces: Vec<usize>,
}

/// Solves the rod cutting problem bottom-up.
///
/// `dp[i]` holds the best value for a rod of length `i + 1` and is computed
/// from the entries before it, left to right.
pub fn solve_bottom_up(n: usize, prices: &PriceTable) -> u64 {
    if n == 0 {
        return 0;
    }
    let prices = prices.as_slice();
    let mut dp = vec![0u64; n];
    for i in 0..n {
        let q = (0..(i + 1).min(prices.len()))
            .map(|j| prices[j].saturating_add(if j < i { dp[i - j - 1] } else { 0 }))
            .max()
            .unwrap_or(0);
        dp[i] = q;
    }
    dp[n - 1]
}

/// Solves the rod cutting problem bottom-up and reconstructs the pieces.
///
/// Remembers the first piece chosen for every length and follows those
/// choices back from `n`.
pub fn solve_with_cuts(n: usize, prices: &PriceTable) -> Cutting {
    let prices = prices.as_slice();
    let mut best = vec![0u64; n + 1];
    let mut first_piece = vec![0usize; n + 1];
    for length in 1..=n {
        for piece in 1..=length.min(prices.len()) {
            let candidate = prices[piece - 1].saturating_add(best[length - piece]);
            if first_piece[length] == 0 || candidate > best[length] {
                best[length] = candidate;
                first_piece[length] = piece;
            }
        }
    }

    let mut pieces = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        let piece = first_piece[remaining];
        pieces.push(piece);
        remaining -= piece;
    }

    Cutting {
        value: best[n],
        pieces,
    }
}
