use clap::error::ErrorKind;
use clap::Parser;

use commands::GlobalArgs;

mod commands;
mod output;

use commands::migrate;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "opacity-fix")]
#[command(version = VERSION)]
#[command(about = "Replace deprecated .withOpacity(X) calls with .withValues(alpha: X)")]
struct Cli {
    #[command(flatten)]
    migrate: migrate::MigrateArgs,

    /// Print a JSON response instead of the console report
    #[arg(long)]
    json: bool,
}

/// Parse the command line, falling back to the defaults when it does not parse.
///
/// Bad arguments never change the exit status; only `--help` and `--version`
/// stop before a run.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let message = err.to_string();
            let reason = message.lines().next().unwrap_or_default();
            eprintln!(
                "[opacity-fix] Ignoring arguments ({}); running with defaults",
                reason.trim_start_matches("error: ")
            );
            Cli::parse_from(["opacity-fix"])
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = parse_cli();
    let global = GlobalArgs { json: cli.json };

    let result = migrate::run(cli.migrate, &global);

    let exit_code = if global.json {
        output::print_envelope(&result)
    } else {
        match result {
            Ok((_, exit_code)) => exit_code,
            Err(err) => {
                output::report::print_error(&err);
                output::EXIT_FAILURE
            }
        }
    };

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
