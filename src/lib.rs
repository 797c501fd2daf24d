mod benchmark;
mod chart;
mod error;
mod price_table;
mod solver;

pub use benchmark::{
    run_benchmark, run_time_tests, run_time_tests_with_progress, BenchmarkOptions, TimingReport,
    TimingSeries,
};
pub use chart::{chart_file_name, chart_path, save_as_svg, SvgFormat};
pub use error::RodCuttingError;
pub use price_table::PriceTable;
pub use solver::{
    checked_length, parse_length, solve_bottom_up, solve_memoized, solve_naive, solve_with_cuts,
    Cutting, Memo, SolverKind,
};

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_all_solvers_agree() {
        let prices = PriceTable::default();

        // The naive solver is exponential, keep it to shorter rods.
        for n in 0..=20 {
            let mut memo = Memo::new(n);
            let naive = solve_naive(n, &prices);
            assert_eq!(naive, solve_memoized(n, &prices, &mut memo), "n={}", n);
            assert_eq!(naive, solve_bottom_up(n, &prices), "n={}", n);
        }
        for n in 21..=30 {
            let mut memo = Memo::new(n);
            assert_eq!(
                solve_memoized(n, &prices, &mut memo),
                solve_bottom_up(n, &prices),
                "n={}",
                n
            );
        }
    }

    #[test]
    #[ignore = "the naive solver needs minutes for rods this long"]
    fn test_all_solvers_agree_on_long_rods() {
        let prices = PriceTable::default();
        for n in 21..=30 {
            let mut memo = Memo::new(n);
            let naive = solve_naive(n, &prices);
            assert_eq!(naive, solve_memoized(n, &prices, &mut memo), "n={}", n);
            assert_eq!(naive, solve_bottom_up(n, &prices), "n={}", n);
        }
    }

    #[test]
    fn test_huge_prices_saturate() -> Result<(), Box<dyn std::error::Error>> {
        let prices = PriceTable::new(vec![u64::MAX / 2 + 1, 1])?;
        for n in 0..=6 {
            let values = SolverKind::ALL
                .iter()
                .map(|kind| kind.solve(n, &prices))
                .collect_vec();
            assert!(values.iter().all_equal(), "n={} values={:?}", n, values);
            assert_eq!(solve_with_cuts(n, &prices).value, values[0]);
        }
        assert_eq!(solve_bottom_up(1, &prices), u64::MAX / 2 + 1);
        assert_eq!(solve_bottom_up(2, &prices), u64::MAX);
        assert_eq!(solve_naive(2, &prices), u64::MAX);
        Ok(())
    }

    #[test]
    fn test_all_solvers_agree_on_irregular_prices() -> Result<(), Box<dyn std::error::Error>> {
        let prices = PriceTable::parse("3 0 11 2 0 19 4")?;
        for n in 0..=16 {
            let values = SolverKind::ALL
                .iter()
                .map(|kind| kind.solve(n, &prices))
                .collect_vec();
            assert!(values.iter().all_equal(), "n={} values={:?}", n, values);
        }
        Ok(())
    }

    #[test]
    fn test_base_case() {
        let prices = PriceTable::default();
        for kind in SolverKind::ALL.iter() {
            assert_eq!(kind.solve(0, &prices), 0);
        }
    }

    #[test]
    fn test_value_is_monotonic_in_length() {
        let prices = PriceTable::default();
        let values = (0..=60).map(|n| solve_bottom_up(n, &prices)).collect_vec();
        assert!(values.iter().tuple_windows().all(|(a, b)| a <= b));
    }

    #[test]
    fn test_matches_exhaustive_search() {
        // Enumerate every composition of n into priced pieces.
        fn exhaustive(n: usize, prices: &[u64]) -> u64 {
            let mut best = 0;
            let mut stack = vec![(n, 0u64)];
            while let Some((remaining, value)) = stack.pop() {
                if remaining == 0 {
                    best = best.max(value);
                    continue;
                }
                for piece in 1..=remaining.min(prices.len()) {
                    stack.push((remaining - piece, value + prices[piece - 1]));
                }
            }
            best
        }

        let prices = PriceTable::default();
        for n in 0..=14 {
            assert_eq!(solve_bottom_up(n, &prices), exhaustive(n, prices.as_slice()));
        }
        assert_eq!(solve_bottom_up(8, &prices), 22);
    }

    #[test]
    fn test_solvers_are_idempotent() {
        let prices = PriceTable::default();
        assert_eq!(solve_naive(15, &prices), solve_naive(15, &prices));
        assert_eq!(solve_bottom_up(200, &prices), solve_bottom_up(200, &prices));
    }
}
