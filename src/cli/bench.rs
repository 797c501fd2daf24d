use chrono::Local;
use clap::{value_t_or_exit, ArgMatches};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rod_cutting_lib::{
    chart_path, parse_length, run_benchmark, save_as_svg, BenchmarkOptions, PriceTable,
    SvgFormat, TimingReport,
};
use std::path::PathBuf;

use crate::utils::{indent, prices_from_matches};

/// Options of the `bench` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkConfig {
    pub lengths: Vec<usize>,
    pub prices: PriceTable,
    pub options: BenchmarkOptions,
    pub svg_dir: Option<PathBuf>,
    pub chart_prefix: String,
    pub show_progress: bool,
    pub verbosity: u64,
}

impl BenchmarkConfig {
    pub fn from_matches(matches: &ArgMatches) -> Result<Self, Box<dyn std::error::Error>> {
        let lengths = match matches.values_of("lengths") {
            Some(values) => values.map(parse_length).collect::<Result<Vec<_>, _>>()?,
            None => {
                let max = parse_length(matches.value_of("range").unwrap_or("0"))?;
                (1..=max).collect()
            }
        };
        let naive_limit = match matches.value_of("naive_limit") {
            Some(value) => Some(parse_length(value)?),
            None => None,
        };

        Ok(Self {
            lengths,
            prices: prices_from_matches(matches)?,
            options: BenchmarkOptions {
                samples: value_t_or_exit!(matches, "samples", usize),
                naive_limit,
            },
            svg_dir: matches.value_of("output_svg").map(PathBuf::from),
            chart_prefix: value_t_or_exit!(matches, "chart_prefix", String),
            show_progress: matches.is_present("progress"),
            verbosity: matches.occurrences_of("verbosity"),
        })
    }
}

pub fn bench(matches_bench: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = BenchmarkConfig::from_matches(matches_bench)?;
    info!("{:?}", config);

    let pb = if config.show_progress {
        ProgressBar::new(config.lengths.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:20.cyan/blue} {pos:>7}/{len:7} {msg}")
            .progress_chars("##-"),
    );
    pb.set_message("Timing solvers");

    if config.verbosity >= 1 {
        eprintln!(
            "{} Timing {} lengths with {} samples each...",
            style("[1/2]").bold().dim(),
            config.lengths.len(),
            config.options.samples,
        );
    }

    let verbosity = config.verbosity;
    let report = run_benchmark(&config.lengths, &config.prices, &config.options, |n| {
        pb.inc(1);
        if verbosity >= 2 {
            eprintln!("{}{}", indent(2), style(format!("n={} done", n)).cyan());
        }
    })?;
    pb.finish_with_message("Timing solvers done!");

    print!("{}", format_table(&report));

    if let Some(dir) = &config.svg_dir {
        if config.verbosity >= 1 {
            eprintln!("{} Drawing the chart...", style("[2/2]").bold().dim());
        }
        let path = chart_path(dir, &config.chart_prefix, Local::now().date_naive());
        save_as_svg(&path, &report.get_svg())?;
        println!(
            "{} '{}'",
            style("Saved the chart to path").green(),
            path.display()
        );
    }

    Ok(())
}

/// Formats the averages in milliseconds as a table with one row per length.
pub fn format_table(report: &TimingReport) -> String {
    let mut table = format!("{:>8}", "length");
    for series in report.series.iter() {
        table.push_str(&format!(" {:>14}", format!("{} (ms)", series.kind)));
    }
    table.push('\n');

    for (i, length) in report.lengths.iter().enumerate() {
        table.push_str(&format!("{:>8}", length));
        for series in report.series.iter() {
            if series.skipped[i] {
                table.push_str(&format!(" {:>14}", "-"));
            } else {
                table.push_str(&format!(" {:>14.6}", series.averages[i].as_secs_f64() * 1e3));
            }
        }
        table.push('\n');
    }
    table
}
