use log::{debug, info};
use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use crate::{solve_bottom_up, solve_memoized, solve_naive, Memo, PriceTable, RodCuttingError, SolverKind};

/// Average running times of one solver over the tested rod lengths.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingSeries {
    pub kind: SolverKind,
    /// Average elapsed time per length, aligned with [`TimingReport::lengths`].
    pub averages: Vec<Duration>,
    /// Marks lengths the solver was not run for, aligned like `averages`.
    pub skipped: Vec<bool>,
}

impl TimingSeries {
    fn new(kind: SolverKind, capacity: usize) -> Self {
        Self {
            kind,
            averages: Vec::with_capacity(capacity),
            skipped: Vec::with_capacity(capacity),
        }
    }

    /// Averages in seconds.
    pub fn as_secs_f64(&self) -> Vec<f64> {
        self.averages.iter().map(|d| d.as_secs_f64()).collect()
    }

    /// Pairs of `(index, average)` for the lengths that were actually measured.
    pub fn measured(&self) -> impl Iterator<Item = (usize, Duration)> + '_ {
        self.averages
            .iter()
            .zip(self.skipped.iter())
            .enumerate()
            .filter(|(_, (_, &skipped))| !skipped)
            .map(|(i, (&average, _))| (i, average))
    }
}

/// Timing series of all solvers together with the lengths they were measured on.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingReport {
    pub lengths: Vec<usize>,
    pub samples: usize,
    /// One series per solver, in [`SolverKind::ALL`] order.
    pub series: Vec<TimingSeries>,
}

impl TimingReport {
    pub fn series_of(&self, kind: SolverKind) -> Option<&TimingSeries> {
        self.series.iter().find(|s| s.kind == kind)
    }

    /// Longest average over all series, used for scaling charts.
    pub fn max_average(&self) -> Duration {
        self.series
            .iter()
            .flat_map(|s| s.averages.iter().copied())
            .max()
            .unwrap_or_default()
    }
}

/// Options for [`run_benchmark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkOptions {
    /// How many times each solver is run per length.
    pub samples: usize,
    /// Lengths above this are not run with the naive solver.
    pub naive_limit: Option<usize>,
}

impl BenchmarkOptions {
    pub fn new(samples: usize) -> Self {
        Self {
            samples,
            naive_limit: None,
        }
    }
}

/// Measures the average running time of every solver for every length in `lengths`.
///
/// Each solver is timed `samples` times per length and the elapsed times are averaged.
/// Lengths are processed in the given order.
pub fn run_time_tests(
    lengths: &[usize],
    samples: usize,
    prices: &PriceTable,
) -> Result<TimingReport, RodCuttingError> {
    run_benchmark(lengths, prices, &BenchmarkOptions::new(samples), |_| {})
}

/// Same as [`run_time_tests`] but calls `on_length_done` after each length.
pub fn run_time_tests_with_progress<F>(
    lengths: &[usize],
    samples: usize,
    prices: &PriceTable,
    on_length_done: F,
) -> Result<TimingReport, RodCuttingError>
where
    F: FnMut(usize),
{
    run_benchmark(lengths, prices, &BenchmarkOptions::new(samples), on_length_done)
}

/// Runs the benchmark with the given options.
///
/// The memoized solver gets a freshly allocated memo before every sample so
/// no run profits from values cached by a previous one.
pub fn run_benchmark<F>(
    lengths: &[usize],
    prices: &PriceTable,
    options: &BenchmarkOptions,
    mut on_length_done: F,
) -> Result<TimingReport, RodCuttingError>
where
    F: FnMut(usize),
{
    let samples = options.samples;
    if samples == 0 {
        return Err(RodCuttingError::InvalidSampleCount(samples));
    }

    info!(
        "Running time tests for {} lengths with {} samples each",
        lengths.len(),
        samples
    );
    let now = Instant::now();

    let mut naive = TimingSeries::new(SolverKind::Naive, lengths.len());
    let mut memoized = TimingSeries::new(SolverKind::Memoized, lengths.len());
    let mut bottom_up = TimingSeries::new(SolverKind::BottomUp, lengths.len());

    for &n in lengths {
        let run_naive = options.naive_limit.map_or(true, |limit| n <= limit);

        let mut naive_total = Duration::ZERO;
        let mut memoized_total = Duration::ZERO;
        let mut bottom_up_total = Duration::ZERO;

        for _ in 0..samples {
            if run_naive {
                naive_total += time(|| solve_naive(black_box(n), prices));
            }

            let mut memo = Memo::new(n);
            memoized_total += time(|| solve_memoized(black_box(n), prices, &mut memo));

            bottom_up_total += time(|| solve_bottom_up(black_box(n), prices));
        }

        naive.averages.push(average(naive_total, samples));
        naive.skipped.push(!run_naive);
        memoized.averages.push(average(memoized_total, samples));
        memoized.skipped.push(false);
        bottom_up.averages.push(average(bottom_up_total, samples));
        bottom_up.skipped.push(false);

        debug!(
            "n={}: naive {:?}, memoized {:?}, bottom-up {:?}",
            n,
            naive.averages.last(),
            memoized.averages.last(),
            bottom_up.averages.last()
        );
        on_length_done(n);
    }

    info!("Time tests finished in {} s", now.elapsed().as_secs_f32());

    Ok(TimingReport {
        lengths: lengths.to_vec(),
        samples,
        series: vec![naive, memoized, bottom_up],
    })
}

fn average(total: Duration, samples: usize) -> Duration {
    Duration::from_nanos((total.as_nanos() / samples as u128) as u64)
}

fn time<F>(solve: F) -> Duration
where
    F: FnOnce() -> u64,
{
    let start = Instant::now();
    black_box(solve());
    start.elapsed()
}
