//! Random Edits of a Gain Configuration
//!
//! Produces configurations a few band edits away from a given one, by
//! rejection sampling: mutate a copy, throw it away if it came back unchanged.

use tracing::{trace, warn};

use crate::equalization::{equal, Equalization, BAND_COUNT};
use crate::error::{PuzzleError, PuzzleResult, Stage};
use crate::random::RandomSource;

/// Odds (1 in n) of each extra edit after the first, tried in order
pub const EXTRA_EDIT_ODDS: [usize; 3] = [5, 6, 16];

/// Return a configuration that differs from `base` in at least one band
///
/// One random band is always set to a random gain level; up to three more
/// edits follow with the odds in [`EXTRA_EDIT_ODDS`]. Edits may hit the same
/// band or undo each other, so a candidate equal to `base` is discarded and
/// the whole edit sequence is redrawn.
///
/// With `max_attempts` set, fails with [`PuzzleError::GenerationExhausted`]
/// once that many candidates have been rejected.
pub fn generate_alternative<R: RandomSource>(
    base: &Equalization,
    rng: &mut R,
    max_attempts: Option<u32>,
) -> PuzzleResult<Equalization> {
    let mut attempts: u32 = 0;

    loop {
        if let Some(limit) = max_attempts {
            if attempts >= limit {
                warn!(%base, attempts, "no alternative found within attempt limit");
                return Err(PuzzleError::GenerationExhausted {
                    stage: Stage::Alternative,
                    attempts,
                });
            }
        }
        attempts += 1;

        let candidate = mutate(base, rng);
        if !equal(base, &candidate)? {
            return Ok(candidate);
        }
        trace!(%base, attempts, "edits cancelled out, redrawing");
    }
}

fn mutate<R: RandomSource>(base: &Equalization, rng: &mut R) -> Equalization {
    let mut levels = *base.levels();

    edit_random_band(&mut levels, rng);
    for odds in EXTRA_EDIT_ODDS {
        if rng.one_in(odds) {
            edit_random_band(&mut levels, rng);
        }
    }

    Equalization::from_levels(levels)
}

// Band is drawn before level
fn edit_random_band<R: RandomSource>(levels: &mut [i32; BAND_COUNT], rng: &mut R) {
    let band = rng.below(BAND_COUNT);
    levels[band] = rng.gain_level();
}
