//! EQ Quiz Core - Game Session
//!
//! This crate runs the quiz on top of `eqquiz_puzzle`, including:
//! - Round lifecycle (active, resolved, replaced)
//! - Guess judging by panel position or by read-back levels
//! - Original/equalized listening toggle for the audio chain
//! - Command/event messages for front ends
//! - Persistent settings and solved-round history
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐  Command   ┌─────────────┐  new_round  ┌──────────────┐
//! │ Front end  │──────────▶│ QuizSession │────────────▶│ RoundFactory │
//! │ (CLI/Web)  │◀──────────│             │◀────────────│  (puzzle)    │
//! └────────────┘   Event    └─────────────┘  QuizRound  └──────────────┘
//!        │ ApplyGains
//!        ▼
//!   audio filter chain (external)
//! ```

mod config;
mod error;
mod message;
mod session;
mod settings;

pub use config::QuizConfig;
pub use error::{GameError, GameResult};
pub use message::{Command, Event};
pub use session::{GuessOutcome, Monitor, QuizSession, RoundState, SessionStats};
pub use settings::{QuizSettings, RoundRecord, MAX_HISTORY};

// Re-export puzzle types for convenience
pub use eqquiz_puzzle::{
    equal, Distinctness, Equalization, GeneratorConfig, QuizRound, RandomSource, SliderGeometry,
    SliderPanel, BAND_COUNT, EQ_BANDS, OPTION_COUNT,
};
