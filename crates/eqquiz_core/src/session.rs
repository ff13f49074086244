//! Quiz Session - Round Lifecycle
//!
//! Owns the current round and walks it through its states:
//!
//! ```text
//!   new_round ──▶ Active ──correct guess──▶ Resolved
//!                   │  ▲                        │
//!                   └──┘ wrong guess            └──new_round──▶ Active
//! ```
//!
//! A round is never edited in place; starting a round replaces it wholesale.

use eqquiz_puzzle::{Equalization, QuizRound, RandomSource, RoundFactory, OPTION_COUNT};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::QuizConfig;
use crate::error::{GameError, GameResult};
use crate::message::{Command, Event};

/// Where the current round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for the player's guess
    Active,
    /// Solved; further guesses are refused
    Resolved,
}

/// Which version of the track the player is hearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Monitor {
    #[default]
    Original,
    Equalized,
}

/// Result of judging one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct,
    Incorrect,
}

/// Running totals for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds_started: u32,
    pub rounds_solved: u32,
    pub guesses: u32,
}

/// A player's game: current round plus its state
pub struct QuizSession<R> {
    factory: RoundFactory<R>,
    round: QuizRound,
    state: RoundState,
    monitor: Monitor,
    round_guesses: u32,
    stats: SessionStats,
}

impl QuizSession<ChaCha8Rng> {
    /// Create a session seeded from `config.seed`, or from the OS if unset
    pub fn from_config(config: &QuizConfig) -> GameResult<Self> {
        config.validate().map_err(GameError::ConfigError)?;

        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(RoundFactory::with_config(rng, config.generator))
    }
}

impl<R: RandomSource> QuizSession<R> {
    /// Create a session and generate its first round
    pub fn new(mut factory: RoundFactory<R>) -> GameResult<Self> {
        let round = factory.new_round()?;
        info!(distinctness = ?factory.config().distinctness, "quiz session started");

        Ok(Self {
            factory,
            round,
            state: RoundState::Active,
            monitor: Monitor::Original,
            round_guesses: 0,
            stats: SessionStats {
                rounds_started: 1,
                ..SessionStats::default()
            },
        })
    }

    pub fn round(&self) -> &QuizRound {
        &self.round
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn monitor(&self) -> Monitor {
        self.monitor
    }

    /// Guesses made in the current round
    pub fn round_guesses(&self) -> u32 {
        self.round_guesses
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Replace the current round, solved or not
    ///
    /// On failure the previous round stays in place.
    pub fn start_round(&mut self) -> GameResult<&QuizRound> {
        self.round = self.factory.new_round()?;
        self.state = RoundState::Active;
        self.monitor = Monitor::Original;
        self.round_guesses = 0;
        self.stats.rounds_started += 1;

        info!(round = self.stats.rounds_started, "new round");
        Ok(&self.round)
    }

    /// Judge the panel at `index`
    pub fn guess_option(&mut self, index: usize) -> GameResult<GuessOutcome> {
        let option = *self.round.option(index).ok_or(GameError::InvalidOption {
            index,
            count: OPTION_COUNT,
        })?;
        self.guess_levels(&option)
    }

    /// Judge raw levels, e.g. read back from a clicked panel
    ///
    /// Malformed levels are rejected without counting as a guess.
    pub fn guess_levels<G: AsRef<[i32]> + ?Sized>(&mut self, guess: &G) -> GameResult<GuessOutcome> {
        if self.state == RoundState::Resolved {
            return Err(GameError::RoundResolved);
        }

        let correct = self.round.is_correct(guess)?;
        self.round_guesses += 1;
        self.stats.guesses += 1;

        if correct {
            self.state = RoundState::Resolved;
            self.stats.rounds_solved += 1;
            info!(guesses = self.round_guesses, "round solved");
            Ok(GuessOutcome::Correct)
        } else {
            debug!(guesses = self.round_guesses, "wrong guess");
            Ok(GuessOutcome::Incorrect)
        }
    }

    /// Switch to the equalized track; returns the gains to apply
    pub fn listen_equalized(&mut self) -> Equalization {
        self.monitor = Monitor::Equalized;
        self.applied_gains()
    }

    /// Switch to the flat track; returns the gains to apply
    pub fn listen_original(&mut self) -> Equalization {
        self.monitor = Monitor::Original;
        self.applied_gains()
    }

    /// Gains the audio chain should currently apply
    pub fn applied_gains(&self) -> Equalization {
        match self.monitor {
            Monitor::Original => Equalization::BASELINE,
            Monitor::Equalized => *self.round.target(),
        }
    }

    /// Process one command from a front end
    pub fn handle(&mut self, command: Command) -> Vec<Event> {
        match command {
            Command::NewRound => match self.start_round() {
                Ok(round) => {
                    let options = *round.options();
                    vec![
                        Event::RoundStarted { options },
                        Event::ApplyGains {
                            gains: self.applied_gains(),
                        },
                    ]
                }
                Err(e) => vec![Event::error(e)],
            },

            Command::SelectOption(index) => {
                let outcome = self.guess_option(index);
                vec![self.guess_event(Some(index), outcome)]
            }

            Command::SubmitLevels(levels) => {
                let outcome = self.guess_levels(&levels);
                vec![self.guess_event(None, outcome)]
            }

            Command::ListenEqualized => vec![Event::ApplyGains {
                gains: self.listen_equalized(),
            }],

            Command::ListenOriginal => vec![Event::ApplyGains {
                gains: self.listen_original(),
            }],

            Command::RequestState => vec![Event::StateUpdate {
                state: self.state,
                monitor: self.monitor,
                round_guesses: self.round_guesses,
                stats: self.stats,
            }],
        }
    }

    fn guess_event(&self, option: Option<usize>, outcome: GameResult<GuessOutcome>) -> Event {
        let guesses = self.round_guesses;
        match outcome {
            Ok(GuessOutcome::Correct) => Event::RoundSolved { option, guesses },
            Ok(GuessOutcome::Incorrect) => Event::WrongGuess { option, guesses },
            Err(e) => Event::error(e),
        }
    }
}
