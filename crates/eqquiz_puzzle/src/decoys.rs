//! Decoy Configurations
//!
//! Builds the three wrong answers shown next to the target. Two decoys are
//! edits of the flat baseline, one is an edit of the target itself, so at
//! least one wrong panel always sits close to the right one.

use tracing::{trace, warn};

use crate::config::{Distinctness, GeneratorConfig};
use crate::equalization::{equal, Equalization};
use crate::error::{PuzzleError, PuzzleResult, Stage};
use crate::perturb::generate_alternative;
use crate::random::RandomSource;

/// Generate three decoys for `target`
///
/// The triple is redrawn as a whole until it passes the distinctness check
/// selected by `config.distinctness`.
pub fn generate_decoys<R: RandomSource>(
    target: &Equalization,
    rng: &mut R,
    config: &GeneratorConfig,
) -> PuzzleResult<[Equalization; 3]> {
    let mut attempts: u32 = 0;

    loop {
        if let Some(limit) = config.max_attempts {
            if attempts >= limit {
                warn!(%target, attempts, "no distinct decoys found within attempt limit");
                return Err(PuzzleError::GenerationExhausted {
                    stage: Stage::Decoys,
                    attempts,
                });
            }
        }
        attempts += 1;

        let candidates = [
            generate_alternative(&Equalization::BASELINE, rng, config.max_attempts)?,
            generate_alternative(&Equalization::BASELINE, rng, config.max_attempts)?,
            generate_alternative(target, rng, config.max_attempts)?,
        ];

        if are_distinct(&candidates, target, config.distinctness)? {
            return Ok(candidates);
        }
        trace!(%target, attempts, "decoys collided, redrawing triple");
    }
}

fn are_distinct(
    candidates: &[Equalization; 3],
    target: &Equalization,
    distinctness: Distinctness,
) -> PuzzleResult<bool> {
    let [c0, c1, c2] = candidates;

    let first = [(c0, c1), (c0, c2), (c0, target)];
    let rest = [(c1, c2), (c1, target), (c2, target)];
    let checked: &[_] = match distinctness {
        Distinctness::Asymmetric => &[],
        Distinctness::Strict => &rest,
    };

    for (a, b) in first.iter().chain(checked) {
        if equal(*a, *b)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::ScriptedSource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn single_edit(band: usize, level: i32) -> Equalization {
        let mut eq = Equalization::BASELINE;
        eq.set_band(band, level).unwrap();
        eq
    }

    // c0: band 0 -> +12, c1: band 3 -> +12 (same as target), c2: target with band 7 -> -12
    fn script_with_second_decoy_on_target() -> ScriptedSource {
        ScriptedSource::new(&[0, 2, 1, 1, 1, 3, 2, 1, 1, 1, 7, 0, 1, 1, 1])
    }

    #[test]
    fn test_asymmetric_allows_second_decoy_equal_to_target() {
        let target = single_edit(3, 12);
        let mut source = script_with_second_decoy_on_target();

        let [c0, c1, c2] =
            generate_decoys(&target, &mut source, &GeneratorConfig::default()).unwrap();

        assert_eq!(c0, single_edit(0, 12));
        assert_eq!(c1, target);
        assert_eq!(c2.levels(), &[0, 0, 0, 12, 0, 0, 0, -12, 0, 0]);
    }

    #[test]
    fn test_strict_rejects_second_decoy_equal_to_target() {
        let target = single_edit(3, 12);
        let mut source = script_with_second_decoy_on_target();
        let config = GeneratorConfig {
            distinctness: Distinctness::Strict,
            max_attempts: Some(4),
        };

        let err = generate_decoys(&target, &mut source, &config).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::GenerationExhausted {
                stage: Stage::Decoys,
                attempts: 4
            }
        );
    }

    #[test]
    fn test_first_decoy_collision_exhausts_limit() {
        // Every baseline edit is band 3 -> +12, so c0 == c1 on every draw
        let target = single_edit(5, -12);
        let mut source = ScriptedSource::new(&[3, 2, 1, 1, 1]);
        let config = GeneratorConfig {
            max_attempts: Some(3),
            ..Default::default()
        };

        let err = generate_decoys(&target, &mut source, &config).unwrap_err();
        assert!(matches!(
            err,
            PuzzleError::GenerationExhausted {
                stage: Stage::Decoys,
                ..
            }
        ));
    }

    #[test]
    fn test_inner_limit_propagates() {
        // Baseline edits never change anything, so the first alternative gives up
        let mut source = ScriptedSource::new(&[0, 1, 1, 1, 1]);
        let config = GeneratorConfig {
            max_attempts: Some(2),
            ..Default::default()
        };

        let err = generate_decoys(&single_edit(0, 12), &mut source, &config).unwrap_err();
        assert_eq!(
            err,
            PuzzleError::GenerationExhausted {
                stage: Stage::Alternative,
                attempts: 2
            }
        );
    }

    #[test]
    fn test_checked_pairs_always_hold() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let config = GeneratorConfig::default();

        for _ in 0..500 {
            let target = generate_alternative(&Equalization::BASELINE, &mut rng, None).unwrap();
            let [c0, c1, c2] = generate_decoys(&target, &mut rng, &config).unwrap();

            assert_ne!(c0, c1);
            assert_ne!(c0, c2);
            assert_ne!(c0, target);
            assert_ne!(c2, target);
        }
    }

    #[test]
    fn test_strict_mode_is_fully_pairwise() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let config = GeneratorConfig::strict();

        for _ in 0..500 {
            let target = generate_alternative(&Equalization::BASELINE, &mut rng, None).unwrap();
            let decoys = generate_decoys(&target, &mut rng, &config).unwrap();

            let all = [decoys[0], decoys[1], decoys[2], target];
            for i in 0..all.len() {
                for j in (i + 1)..all.len() {
                    assert_ne!(all[i], all[j], "options {i} and {j} collide");
                }
            }
        }
    }
}
