mod aggregation;
mod charts;
mod match_data;
mod report;
mod roster;

use crate::aggregation::stat_aggregator::StatAggregator;
use crate::charts::round_duration::round_duration_chart;
use crate::match_data::match_summary::MatchSummaryData;
use crate::match_data::payload_loader::{load_match_stats, load_match_summary, load_round_timings};
use crate::match_data::round_timings::RoundTimings;
use crate::report::json_format::build_match_report;
use crate::report::report_writer::create_json_file;
use crate::roster::registry::RosterRegistry;

use std::env;
use std::path::PathBuf;

/// Parsed command-line arguments.
struct CliArgs {
    kill_stats_path: PathBuf,
    round_cursor: u32,
    output_file_name: String,
    round_timings_path: Option<PathBuf>,
    match_summary_path: Option<PathBuf>,
}

/// Parses command-line arguments for the payload paths, the round cursor,
/// and the output file name.
///
/// # Returns
///
/// * `Ok(CliArgs)` - The parsed arguments.
/// * `Err(String)` - An error message if the arguments are invalid or missing.
fn parse_args() -> Result<CliArgs, String> {
    let args: Vec<String> = env::args().collect();
    if !(4..=6).contains(&args.len()) {
        return Err(
            "Usage: cargo run <kill-stats-json> <round-cursor> <output-file-name> \
             [round-timings-json] [match-summary-json]"
                .into(),
        );
    }

    let kill_stats_path = PathBuf::from(&args[1]);
    let round_cursor: u32 = args[2]
        .parse()
        .map_err(|_| "Round cursor must be a valid integer.")?;
    if round_cursor == 0 {
        return Err("Round cursor must be at least 1.".into());
    }
    let output_file_name = args[3].clone();
    let round_timings_path = args.get(4).map(PathBuf::from);
    let match_summary_path = args.get(5).map(PathBuf::from);

    Ok(CliArgs {
        kill_stats_path,
        round_cursor,
        output_file_name,
        round_timings_path,
        match_summary_path,
    })
}

/// Loads the optional round-timings payload, degrading to `None` with a
/// warning when the file is missing or malformed.
fn load_optional_timings(args: &CliArgs) -> Option<RoundTimings> {
    let path = args.round_timings_path.as_deref()?;
    match load_round_timings(path) {
        Ok(timings) => Some(timings),
        Err(err) => {
            log::warn!("round timings unavailable, omitting the duration chart: {err}");
            None
        }
    }
}

/// Loads the optional match-summary payload, degrading to `None` with a
/// warning when the file is missing or malformed.
fn load_optional_summary(args: &CliArgs) -> Option<MatchSummaryData> {
    let path = args.match_summary_path.as_deref()?;
    match load_match_summary(path) {
        Ok(summary) => Some(summary),
        Err(err) => {
            log::warn!("match summary unavailable, omitting round winner colors: {err}");
            None
        }
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = parse_args()?;

    let match_stats = load_match_stats(&args.kill_stats_path).map_err(|err| err.to_string())?;
    if match_stats.total_rounds > 0 && args.round_cursor > match_stats.total_rounds {
        log::warn!(
            "round cursor {} exceeds the {} recorded rounds; aggregating the whole match",
            args.round_cursor,
            match_stats.total_rounds
        );
    }

    let round_timings = load_optional_timings(&args);
    let match_summary = load_optional_summary(&args);

    let roster = RosterRegistry::default();
    let aggregator = StatAggregator::new(&roster, &match_stats.kills);
    let all_stats = aggregator.aggregate(args.round_cursor);

    let chart = round_duration_chart(
        round_timings.as_ref().map(|timings| timings.rounds.as_slice()),
        match_summary.as_ref(),
    );
    let report = build_match_report(
        &roster,
        &match_stats,
        args.round_cursor,
        &all_stats,
        round_timings.as_ref(),
        chart,
    );

    match create_json_file(&args.output_file_name, &report) {
        Ok(()) => println!("File created successfully."),
        Err(err) => {
            eprintln!("Failed to create file: {:?}", err);
        }
    }

    Ok(())
}
