use anyhow::{Context, Result};
use chrono::Local;
use log::{error, info};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use showtime::config::{get_config_path, Config};
use showtime::listing::{normalize_listing, sort_listing};
use showtime::setlist::{format_set_length, format_target_delta, parse_set_length};
use showtime::time::{normalize_display, parse_clock_time, to_12_hour_string, ClockTime};
use std::fs::File;
use std::io::{BufReader, BufWriter};

/// Command line arguments structure
#[derive(Debug)]
struct CommandArgs {
    command: String,
    args: Vec<String>,
}

impl CommandArgs {
    fn parse(input: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut current = String::new();
        let mut in_quotes = false;

        for c in input.chars() {
            match c {
                '"' => {
                    in_quotes = !in_quotes;
                    if !in_quotes && !current.is_empty() {
                        parts.push(current.clone());
                        current.clear();
                    }
                }
                ' ' if !in_quotes => {
                    if !current.is_empty() {
                        parts.push(current.clone());
                        current.clear();
                    }
                }
                _ => current.push(c),
            }
        }
        if !current.is_empty() {
            parts.push(current);
        }

        Self::from_parts(parts)
    }

    fn from_parts(mut parts: Vec<String>) -> Result<Self> {
        if parts.is_empty() {
            return Err(anyhow::anyhow!("No command provided"));
        }
        let command = parts.remove(0);
        Ok(CommandArgs { command, args: parts })
    }

    /// Remaining arguments joined back into one string
    fn rest(&self) -> String {
        self.args.join(" ")
    }
}

enum Flow {
    Continue,
    Exit,
}

fn main() -> Result<()> {
    showtime::init_logger();

    let config = Config::load()?;

    // One-shot mode when arguments are given
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if !argv.is_empty() {
        let args = CommandArgs::from_parts(argv)?;
        process_command(&args, &config)?;
        return Ok(());
    }

    info!("Starting showtime terminal");

    let mut rl = DefaultEditor::new()?;
    println!("Welcome to showtime! Type 'help' for commands.");

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                match CommandArgs::parse(&line).and_then(|args| process_command(&args, &config)) {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(err) => error!("Failed to process command: {:?}", err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}

fn process_command(args: &CommandArgs, config: &Config) -> Result<Flow> {
    match args.command.as_str() {
        "display" => {
            println!("{}", config.formatter().format(&args.rest())?);
        }
        "normalize" => {
            println!("{}", normalize_display(&args.rest()));
        }
        "pad" => {
            println!("{}", to_12_hour_string(&args.rest())?);
        }
        "length" => {
            let seconds = parse_set_length(&args.rest(), config.setlist.max_length_seconds);
            println!("{}", format_set_length(seconds));
        }
        "delta" => {
            if args.args.len() < 2 {
                println!("Usage: delta <total> <target>");
                return Ok(Flow::Continue);
            }
            let max = config.setlist.max_length_seconds;
            let total = parse_set_length(&args.args[0], max);
            let target = parse_set_length(&args.args[1], max);
            println!("{} vs target", format_target_delta(total, target));
        }
        "listing" => {
            if args.args.len() < 2 {
                println!("Usage: listing <input.csv> <output.csv>");
                return Ok(Flow::Continue);
            }
            run_listing(&args.args[0], &args.args[1], config)?;
        }
        "sort" => {
            if args.args.len() < 2 {
                println!("Usage: sort <input.csv> <output.csv> [from-time|now]");
                return Ok(Flow::Continue);
            }
            let from = match args.args.get(2).map(String::as_str) {
                None => None,
                Some("now") => Some(ClockTime::from(Local::now().time())),
                Some(time) => Some(parse_clock_time(time)?),
            };
            run_sort(&args.args[0], &args.args[1], from, config)?;
        }
        "config" => {
            println!("# {}", get_config_path()?.display());
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        "help" => {
            println!("Available commands:");
            println!("  display <time>            - Show a 24-hour time as 4:30 PM");
            println!("  normalize <text>          - Clean up a 12-hour time (4:30pm -> 4:30 PM)");
            println!("  pad <H:M>                 - Convert with minute padding (16:5 -> 4:05 PM)");
            println!("  length <M:SS|seconds>     - Normalize a set length");
            println!("  delta <total> <target>    - Set length over/under target");
            println!("  listing <in.csv> <out.csv> - Normalize show times in a venue listing");
            println!("  sort <in.csv> <out.csv> [from|now] - Order a listing by show time");
            println!("  config                    - Print the active configuration");
            println!("  help                      - Show this help");
            println!("  exit                      - Exit the application");
        }
        "exit" | "quit" => return Ok(Flow::Exit),
        _ => {
            println!("Unknown command. Type 'help' for available commands.");
        }
    }
    Ok(Flow::Continue)
}

fn run_listing(input: &str, output: &str, config: &Config) -> Result<()> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("Failed to open listing {}", input))?,
    );
    let writer = BufWriter::new(
        File::create(output).with_context(|| format!("Failed to create {}", output))?,
    );
    let report = normalize_listing(reader, writer, &config.listing.time_columns)?;
    println!(
        "{} rows: {} converted, {} unchanged, {} empty",
        report.rows, report.converted, report.unchanged, report.empty
    );
    if !report.missing_columns.is_empty() {
        println!("Missing columns: {}", report.missing_columns.join(", "));
    }
    Ok(())
}

fn run_sort(input: &str, output: &str, from: Option<ClockTime>, config: &Config) -> Result<()> {
    let reader = BufReader::new(
        File::open(input).with_context(|| format!("Failed to open listing {}", input))?,
    );
    let writer = BufWriter::new(
        File::create(output).with_context(|| format!("Failed to create {}", output))?,
    );
    let column = &config.listing.sort_column;
    let rows = sort_listing(reader, writer, column, from.map(|t| t.minutes_since_midnight()))?;
    match from {
        Some(time) => println!("{} rows sorted by {}, from {}", rows, column, time),
        None => println!("{} rows sorted by {}", rows, column),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_args_quoted_argument() {
        let args = CommandArgs::parse("normalize \"doors 7:30pm\"").unwrap();
        assert_eq!(args.command, "normalize");
        assert_eq!(args.args, vec!["doors 7:30pm"]);
    }

    #[test]
    fn test_command_args_splits_on_spaces() {
        let args = CommandArgs::parse("delta  4:30   5:00").unwrap();
        assert_eq!(args.command, "delta");
        assert_eq!(args.args, vec!["4:30", "5:00"]);
        assert_eq!(args.rest(), "4:30 5:00");
    }

    #[test]
    fn test_command_args_empty() {
        assert!(CommandArgs::parse("   ").is_err());
    }
}
