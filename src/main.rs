//! Terminal blackjack table.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use bjtable::{
    Card, ConfigError, EndGameChoice, FileResultSink, Hand, Intent, Phase, Presenter, ResultSink,
    Session, Suit, TableOptions, TieLogging,
};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bjtable", version, about = "Play blackjack against the dealer")]
struct Cli {
    /// TOML file with table options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Rounds per game.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    rounds: Option<u32>,
    /// Results log file.
    #[arg(long)]
    results: Option<PathBuf>,
    /// Shuffle seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Log tied rounds as "Tie" instead of "Dealer Wins".
    #[arg(long)]
    log_ties: bool,
    /// Empty the results log and exit.
    #[arg(long)]
    clear_results: bool,
    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = match resolve_options(&cli) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut sink = FileResultSink::new(&options.results_path);

    if cli.clear_results {
        return match sink.clear() {
            Ok(()) => {
                println!("Cleared {}", sink.path().display());
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("error: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let mut session = Session::new(options, sink, TerminalPresenter);
    run(&mut session, &mut io::stdin().lock());
    ExitCode::SUCCESS
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Config file first, then command-line overrides.
fn resolve_options(cli: &Cli) -> Result<TableOptions, ConfigError> {
    let mut options = match &cli.config {
        Some(path) => TableOptions::load(path)?,
        None => TableOptions::default(),
    };

    if let Some(rounds) = cli.rounds {
        options = options.with_rounds(rounds);
    }
    if let Some(path) = &cli.results {
        options = options.with_results_path(path);
    }
    if cli.seed.is_some() {
        options = options.with_seed(cli.seed);
    }
    if cli.log_ties {
        options = options.with_tie_logging(TieLogging::Tie);
    }

    options.validate()?;
    Ok(options)
}

fn run<S: ResultSink>(session: &mut Session<S, TerminalPresenter>, input: &mut dyn BufRead) {
    loop {
        let intent = match session.phase() {
            Phase::Menu => {
                println!("\nWelcome to Blackjack!");
                match prompt_line(input, "[s]tart new game, [e]xit: ").as_deref() {
                    Some("s" | "start") => Intent::StartGame,
                    Some("e" | "exit" | "q" | "quit") | None => Intent::Exit,
                    Some(_) => {
                        println!("Unknown choice.");
                        continue;
                    }
                }
            }
            Phase::Playing => {
                let prompt = format!(
                    "Round {}/{} - [h]it, [s]tay, [n]ew game, [e]xit: ",
                    session.current_round(),
                    session.total_rounds()
                );
                match prompt_line(input, &prompt).as_deref() {
                    Some("h" | "hit") => Intent::Hit,
                    Some("s" | "stay") => Intent::Stay,
                    Some("n" | "new") => Intent::NewRound,
                    Some("e" | "exit" | "q" | "quit") | None => Intent::Exit,
                    Some(_) => {
                        println!("Unknown action.");
                        continue;
                    }
                }
            }
            Phase::AwaitingContinue => {
                match prompt_line(input, "Continue to the next round? (y/n): ").as_deref() {
                    Some("y" | "yes") => Intent::Continue(true),
                    Some("n" | "no") => Intent::Continue(false),
                    None => Intent::Exit,
                    Some(_) => continue,
                }
            }
            Phase::GameOver => {
                println!("All rounds completed.");
                match prompt_line(input, "[s]tart new game, [e]xit: ").as_deref() {
                    Some("s" | "start") => Intent::EndGame(EndGameChoice::StartNewGame),
                    Some("e" | "exit" | "q" | "quit") | None => {
                        Intent::EndGame(EndGameChoice::Exit)
                    }
                    Some(_) => {
                        println!("Unknown choice.");
                        continue;
                    }
                }
            }
            Phase::Exited => return,
        };

        if let Err(err) = session.dispatch(intent) {
            println!("Action error: {err}");
        }
    }
}

/// Reads one trimmed, lowercased line. `None` on end of input.
fn prompt_line(input: &mut dyn BufRead, prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_lowercase()),
    }
}

struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn render_hands(&mut self, player: &[Card], dealer: &[Card], hide_dealer_second: bool) {
        let dealer_view = dealer
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if index == 1 && hide_dealer_second {
                    "??".to_string()
                } else {
                    format_card(card)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let dealer_value = if hide_dealer_second {
            dealer.first().map_or(0, Card::value)
        } else {
            dealer.iter().copied().collect::<Hand>().total()
        };
        println!("\nDealer: {dealer_view} (value {dealer_value})");

        let player_view = player.iter().map(format_card).collect::<Vec<_>>().join(" ");
        let player_value = player.iter().copied().collect::<Hand>().total();
        println!("Player: {player_view} (value {player_value})\n");
    }

    fn render_status(&mut self, text: &str) {
        println!("{}", colorize(text, "1"));
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    format!(
        "{}{}",
        card.rank.label(),
        colorize(card.suit.code(), color_code)
    )
}
