use clap::ArgMatches;
use itertools::Itertools;
use rod_cutting_lib::{PriceTable, RodCuttingError};

/// Reads the price table given with `-P`, or the default table.
pub fn prices_from_matches(matches: &ArgMatches) -> Result<PriceTable, RodCuttingError> {
    match matches.values_of("prices") {
        Some(mut values) => PriceTable::parse(&values.join(" ")),
        None => Ok(PriceTable::default()),
    }
}

pub fn indent(level: usize) -> String {
    format!("{:<1$}", "", level)
}
