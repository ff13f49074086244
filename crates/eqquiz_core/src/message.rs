//! Message Types for Front Ends
//!
//! Commands flow from the front end -> session
//! Events flow from the session -> front end (and the audio chain)

use eqquiz_puzzle::{Equalization, OPTION_COUNT};
use serde::{Deserialize, Serialize};

use crate::session::{Monitor, RoundState, SessionStats};

/// Commands sent from a front end to the quiz session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Throw away the current round and generate a new one
    NewRound,

    /// Player clicked the panel at this position
    SelectOption(usize),

    /// Player submitted levels read back from a rendered panel
    SubmitLevels(Vec<i32>),

    /// Play the track through the round's equalization
    ListenEqualized,

    /// Play the track flat
    ListenOriginal,

    /// Request current state (triggers StateUpdate event)
    RequestState,
}

/// Events sent from the quiz session to the front end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Event {
    /// A new round is ready; panels in presentation order
    RoundStarted {
        options: [Equalization; OPTION_COUNT],
    },

    /// Gains the audio chain should apply now
    ApplyGains { gains: Equalization },

    /// Guess did not match; the round stays open
    WrongGuess {
        option: Option<usize>,
        guesses: u32,
    },

    /// Guess matched the target; the round is over
    RoundSolved {
        option: Option<usize>,
        guesses: u32,
    },

    /// Current state snapshot
    StateUpdate {
        state: RoundState,
        monitor: Monitor,
        round_guesses: u32,
        stats: SessionStats,
    },

    /// Error occurred
    Error { message: String },
}

impl Event {
    /// Create an error event from any error type
    pub fn error<E: std::fmt::Display>(err: E) -> Self {
        Event::Error {
            message: err.to_string(),
        }
    }
}
