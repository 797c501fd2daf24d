use clap::{value_t_or_exit, ArgMatches};
use console::style;
use itertools::Itertools;
use log::info;
use rod_cutting_lib::{parse_length, solve_with_cuts, SolverKind};
use std::time::Instant;

use crate::utils::{indent, prices_from_matches};

pub fn solve(matches_solve: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let n = parse_length(matches_solve.value_of("length").unwrap_or_default())?;
    let prices = prices_from_matches(matches_solve)?;
    let variant = value_t_or_exit!(matches_solve, "variant", String);

    let kinds = if variant == "all" {
        SolverKind::ALL.to_vec()
    } else {
        vec![variant.parse::<SolverKind>()?]
    };

    println!(
        "{} Cutting a rod of length {} with prices {}",
        style("[solve]").bold().dim(),
        style(format!("n={}", n)).cyan(),
        prices,
    );

    for kind in kinds {
        let now = Instant::now();
        let value = kind.solve(n, &prices);
        let elapsed = now.elapsed();
        info!("Solved n={} with {} in {} s", n, kind, elapsed.as_secs_f32());
        println!(
            "{}{:<10} {} ({:?})",
            indent(2),
            kind.name(),
            style(value).green(),
            elapsed
        );
    }

    let cutting = solve_with_cuts(n, &prices);
    println!(
        "{}{:<10} {}",
        indent(2),
        "pieces",
        if cutting.pieces.is_empty() {
            "-".to_string()
        } else {
            cutting.pieces.iter().join(" + ")
        }
    );

    Ok(())
}
