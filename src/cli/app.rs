use clap::{
    App,
    AppSettings::{self, ArgRequiredElseHelp},
    Arg, ArgGroup, SubCommand,
};
use indoc::indoc;
use rod_cutting_lib::{parse_length, PriceTable};

pub fn build_cli() -> App<'static, 'static> {
    let subcommand_solve = get_subcommand_solve();
    let subcommand_bench = get_subcommand_bench();

    App::new("Rod cutting tool")
        .version("0.1.0")
        .setting(ArgRequiredElseHelp)
        .setting(AppSettings::SubcommandRequired)
        .subcommands([subcommand_solve, subcommand_bench])
        .about("This tool solves the rod cutting problem and compares the running times of its solvers")
        .long_about(indoc! {"
        This tool solves the rod cutting problem and compares the running times of its solvers.

        A rod of integer length is cut into pieces so that the total sale value of the pieces is maximal.
        The problem is solved with plain recursion, memoized recursion and bottom-up dynamic programming.
        "})
}

fn validate_length(value: String) -> Result<(), String> {
    parse_length(&value).map(|_| ()).map_err(|e| e.to_string())
}

fn validate_prices(value: String) -> Result<(), String> {
    PriceTable::parse(&value).map(|_| ()).map_err(|e| e.to_string())
}

fn validate_samples(value: String) -> Result<(), String> {
    match value.trim().parse::<usize>() {
        Ok(0) => Err("sample count must be positive, got 0".to_string()),
        Ok(_) => Ok(()),
        Err(_) => Err(format!("could not parse sample count '{}'", value)),
    }
}

fn get_prices_arg() -> Arg<'static, 'static> {
    Arg::with_name("prices")
        .help("Sets the price table, the first price is for a piece of length 1")
        .long_help(indoc! {"
            Sets the price table, the first price is for a piece of length 1.

            Prices can be separated by whitespace or commas.
            Defaults to 1 5 8 9 10 17 17 20.
            "})
        .short("P")
        .long("prices")
        .takes_value(true)
        .min_values(1)
        .validator(validate_prices)
}

fn get_subcommand_solve() -> App<'static, 'static> {
    let length = Arg::with_name("length")
        .index(1)
        .help("Sets the length of the rod")
        .allow_hyphen_values(true)
        .validator(validate_length)
        .required(true);

    let variant = Arg::with_name("variant")
        .help("Selects the solver")
        .long("variant")
        .takes_value(true)
        .possible_values(&["naive", "memoized", "bottom-up", "all"])
        .default_value("all");

    SubCommand::with_name("solve")
        .about("Solves the rod cutting problem for a single rod")
        .args(&[length, variant, get_prices_arg()])
}

fn get_subcommand_bench() -> App<'static, 'static> {
    let lengths = Arg::with_name("lengths")
        .help("Sets an explicit list of rod lengths")
        .short("l")
        .long("lengths")
        .takes_value(true)
        .min_values(1)
        .validator(validate_length);

    let range = Arg::with_name("range")
        .help("Tests every rod length from 1 to the given maximum")
        .short("r")
        .long("range")
        .takes_value(true)
        .value_name("max_length")
        .validator(validate_length);

    let samples = Arg::with_name("samples")
        .help("Sets how many times each solver is run per length")
        .short("s")
        .long("samples")
        .takes_value(true)
        .default_value("10")
        .validator(validate_samples);

    let naive_limit = Arg::with_name("naive_limit")
        .help("Skips the naive solver for rods longer than this")
        .long_help(indoc! {"
            Skips the naive solver for rods longer than this.

            The naive solver takes exponential time, lengths above 30 can take minutes.
            "})
        .long("naive-limit")
        .takes_value(true)
        .value_name("max_length")
        .validator(validate_length);

    let output_svg = Arg::with_name("output_svg")
        .help("Outputs the timing chart as svg to the given directory")
        .long("svg-dir")
        .takes_value(true)
        .value_name("dir");

    let chart_prefix = Arg::with_name("chart_prefix")
        .help("Sets the file name prefix of the chart, the date is appended to it")
        .long("chart-prefix")
        .takes_value(true)
        .default_value("rod_cutting");

    let progress = Arg::with_name("progress")
        .help("Shows progress")
        .short("p")
        .long("show-progress");

    let verbosity = Arg::with_name("verbosity")
        .short("v")
        .help("Sets the level of verbosity")
        .multiple(true);

    SubCommand::with_name("bench")
        .about("Compares the running times of the solvers")
        .long_about(indoc! {"
            Compares the running times of the solvers.

            Every solver is run the given number of times for each rod length and the
            elapsed times are averaged. The averages are printed as a table and
            optionally drawn as a chart.
            "})
        .args(&[
            lengths,
            range,
            samples,
            naive_limit,
            output_svg,
            chart_prefix,
            progress,
            verbosity,
            get_prices_arg(),
        ])
        .group(
            ArgGroup::with_name("length_source")
                .args(&["lengths", "range"])
                .required(true),
        )
}
