//! EQ Quiz - Terminal Front End
//!
//! Shows the four slider panels of each round as text and reads guesses
//! from stdin. Audio playback belongs to a separate front end; here the
//! gains it would apply are printed instead.

mod render;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use eqquiz_core::{
    Command, Event, QuizConfig, QuizSession, QuizSettings, SliderGeometry, OPTION_COUNT,
};
use tracing::{info, warn};

/// Guess which equalizer panel matches the equalized track
#[derive(Parser, Debug)]
#[command(name = "eqquiz", version, about)]
struct Args {
    /// Seed for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Require all four panels to differ
    #[arg(long)]
    strict: bool,

    /// Give up generating after this many rejected candidates
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Mark the correct panel (practice mode)
    #[arg(long)]
    reveal: bool,

    /// Do not write settings or history to disk
    #[arg(long)]
    no_save: bool,
}

impl Args {
    fn quiz_config(&self, settings: &QuizSettings) -> QuizConfig {
        let mut config = if self.strict {
            QuizConfig::strict()
        } else {
            settings.quiz_config()
        };
        if self.max_attempts.is_some() {
            config.generator.max_attempts = self.max_attempts;
        }
        config.seed = self.seed;
        config.reveal_target |= self.reveal;
        config
    }
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eqquiz=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = QuizSettings::load();
    let config = args.quiz_config(&settings);

    info!(strict = config.is_strict(), seed = ?config.seed, "Starting EQ Quiz");

    let mut session = QuizSession::from_config(&config).context("failed to start quiz session")?;
    let geometry = SliderGeometry::default();

    print_round(&session, &geometry, config.reveal_target);
    print_help();

    let stdin = io::stdin();
    let mut out = io::stdout();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(line.trim()) {
            Some(Input::Quit) => break,
            Some(Input::Help) => {
                print_help();
                continue;
            }
            Some(Input::Game(command)) => command,
            None => {
                println!("Unknown command - type 'h' for help");
                continue;
            }
        };

        for event in session.handle(command) {
            match event {
                Event::RoundStarted { .. } => print_round(&session, &geometry, config.reveal_target),
                Event::ApplyGains { gains } => {
                    let label = if gains.is_baseline() { "original" } else { "equalized" };
                    println!("Now playing the {label} track (gains {gains})");
                }
                Event::WrongGuess { .. } => println!("Oops! That's not it! Try again"),
                Event::RoundSolved { guesses, .. } => {
                    println!("Congrats! You did it in {guesses} guess(es). Type 'n' for a new round");
                    settings.record_round(guesses, config.generator.distinctness);
                    if !args.no_save {
                        if let Err(e) = settings.save() {
                            warn!("Could not save settings: {}", e);
                        }
                    }
                }
                Event::StateUpdate { state, stats, .. } => {
                    println!(
                        "Round {:?} | rounds {} | solved {} | guesses {}",
                        state, stats.rounds_started, stats.rounds_solved, stats.guesses
                    );
                    if let Some(avg) = settings.average_guesses() {
                        println!("All-time average: {avg:.2} guesses per round");
                    }
                }
                Event::Error { message } => println!("{message}"),
            }
        }
    }

    info!("Goodbye");
    Ok(())
}

enum Input {
    Game(Command),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Input> {
    let input = match line {
        "q" | "quit" => Input::Quit,
        "h" | "help" | "?" => Input::Help,
        "n" | "new" => Input::Game(Command::NewRound),
        "e" | "eq" => Input::Game(Command::ListenEqualized),
        "o" | "original" => Input::Game(Command::ListenOriginal),
        "s" | "stats" => Input::Game(Command::RequestState),
        other => {
            // Panels are numbered from 1 on screen
            let number: usize = other.parse().ok()?;
            Input::Game(Command::SelectOption(number.checked_sub(1)?))
        }
    };
    Some(input)
}

fn print_round<R: eqquiz_core::RandomSource>(
    session: &QuizSession<R>,
    geometry: &SliderGeometry,
    reveal: bool,
) {
    let round = session.round();
    println!();
    println!("{}", render::band_header());
    for (i, option) in round.options().iter().enumerate() {
        let marker = if reveal && option == round.target() { " *" } else { "" };
        println!("Panel {}{}", i + 1, marker);
        for line in render::render_panel(geometry, option) {
            println!("{line}");
        }
    }
}

fn print_help() {
    println!();
    println!("1-{OPTION_COUNT}  pick a panel");
    println!("e    listen to the equalized track");
    println!("o    listen to the original track");
    println!("n    new round");
    println!("s    statistics");
    println!("q    quit");
}
