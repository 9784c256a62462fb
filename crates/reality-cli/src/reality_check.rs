//! Reality check CLI
//!
//! Usage: reality_check [criteria flags] [--json] [--interactive]
//!
//! Example:
//!   reality_check --min-age 28 --max-age 35 --religion orthodox --min-salary 2500
//!   reality_check --interactive
//!   > set education master
//!   > calc
//!
//! Without --interactive, prints one estimate for the given criteria and exits.

mod args;
mod logging;

use std::io::{self, BufRead, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use reality_estimator::{
    CriteriaField, ReferenceDataset, ResultReport, Session, View, estimate,
};

use crate::args::{CriteriaArgs, warn_invalid};

/// Estimate how many men in Cyprus match your criteria.
#[derive(Parser)]
#[command(name = "reality_check", version, about)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(flatten)]
    criteria: CriteriaArgs,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Edit criteria and recalculate from stdin.
    #[arg(short, long, conflicts_with = "json")]
    interactive: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let criteria = cli.criteria.to_criteria();
    warn_invalid(&criteria);

    if cli.interactive {
        return interactive(Session::new().with_criteria(criteria));
    }

    let result = estimate(&criteria, ReferenceDataset::cyprus());
    if cli.json {
        let json = serde_json::to_string_pretty(&result).context("serializing result")?;
        println!("{json}");
    } else {
        print!("{}", ResultReport::new(&result));
    }
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  set <field> <value>  Change one criterion (e.g. set minAge 30)");
    println!("  show                 Show the current criteria");
    println!("  calc                 Calculate your chances");
    println!("  reset                Restore the default criteria");
    println!("  help                 Show this message");
    println!("  q, quit              Exit");
}

fn print_criteria(session: &Session) {
    println!("Current criteria:");
    for field in CriteriaField::ALL {
        println!(
            "  {:<14} {}",
            field.name(),
            session.criteria().field_value(field)
        );
    }
}

fn interactive(mut session: Session) -> Result<()> {
    println!("Reality Feedback - find your chances of meeting the perfect man in Cyprus");
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let prompt = match session.view() {
            View::Criteria => "criteria",
            View::Results => "results",
        };
        print!("\n[{prompt}] > ");
        io::stdout().flush().context("flushing stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading stdin")?;
        let mut words = line.split_whitespace();

        match words.next() {
            None => continue,
            Some(cmd) if cmd.eq_ignore_ascii_case("q") || cmd.eq_ignore_ascii_case("quit") => {
                println!("Goodbye!");
                break;
            }
            Some("set") => {
                let (Some(field), Some(value)) = (words.next(), words.next()) else {
                    eprintln!("Usage: set <field> <value>");
                    continue;
                };
                match session.set(field, value) {
                    Ok(()) => warn_invalid(session.criteria()),
                    Err(e) => eprintln!("Error: {e}"),
                }
            }
            Some("show") => print_criteria(&session),
            Some("calc") => {
                let result = session.calculate();
                print!("{}", ResultReport::new(result));
            }
            Some("reset") => {
                session.reset();
                println!("Criteria reset to defaults.");
                print_criteria(&session);
            }
            Some("help") => print_help(),
            Some(other) => eprintln!("Unknown command: {other} (type 'help')"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_conflicts_with_json() {
        assert!(Cli::try_parse_from(["reality_check", "--interactive", "--json"]).is_err());
    }

    #[test]
    fn test_one_shot_with_extreme_inputs() {
        let cli = Cli::parse_from([
            "reality_check",
            "--min-age",
            "-2147483648",
            "--max-height",
            "2147483647",
            "--min-salary",
            "-2147483648",
            "--json",
        ]);
        assert!(run(cli).is_ok());
    }
}
