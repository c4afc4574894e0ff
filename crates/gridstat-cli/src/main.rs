mod cli;
mod field_positions_cmd;
mod lines_cmd;
mod shared;
mod stats_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        cli::Commands::Lines {
            ref file,
            margin,
            ref unicode_norm,
        } => lines_cmd::run(file, margin, unicode_norm.as_ref()),
        cli::Commands::Stats {
            ref file,
            ref teams,
            run_threshold,
            pass_threshold,
            ref format,
            margin,
            rates,
            strict,
            ref unicode_norm,
        } => stats_cmd::run(
            file,
            &stats_cmd::StatsArgs {
                teams,
                run_threshold,
                pass_threshold,
                format,
                margin,
                rates,
                strict,
                unicode_norm: unicode_norm.as_ref(),
            },
        ),
        cli::Commands::FieldPositions {
            ref file,
            ref teams,
            margin,
            ref unicode_norm,
        } => field_positions_cmd::run(file, teams, margin, unicode_norm.as_ref()),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
