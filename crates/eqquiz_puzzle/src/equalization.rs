//! 10-Band Equalization Settings
//!
//! The value type shown on every slider panel and applied to the audio,
//! plus the checked equality used to judge guesses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Operand, PuzzleError, PuzzleResult};

/// Number of bands on every equalizer panel
pub const BAND_COUNT: usize = 10;

/// Band center frequencies (Hz), in panel order
pub const EQ_BANDS: [f32; BAND_COUNT] = [
    32.0,    // Sub-bass
    63.0,    // Bass
    125.0,   // Low-mid
    250.0,   // Mid
    500.0,   // Mid
    1000.0,  // Upper-mid
    2000.0,  // Presence
    4000.0,  // Brilliance
    8000.0,  // High
    16000.0, // Air
];

/// Gain levels (dB) the generator draws from
pub const GAIN_LEVELS: [i32; 3] = [-12, 0, 12];

/// Gain level per band, in dB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Equalization([i32; BAND_COUNT]);

impl Equalization {
    /// Flat response, no band adjusted
    pub const BASELINE: Equalization = Equalization([0; BAND_COUNT]);

    pub const fn from_levels(levels: [i32; BAND_COUNT]) -> Self {
        Self(levels)
    }

    pub fn levels(&self) -> &[i32; BAND_COUNT] {
        &self.0
    }

    /// Gain of a single band (0-9)
    pub fn band(&self, band_index: usize) -> PuzzleResult<i32> {
        self.0
            .get(band_index)
            .copied()
            .ok_or(PuzzleError::InvalidBandIndex(band_index))
    }

    /// Set gain for a specific band (0-9)
    pub fn set_band(&mut self, band_index: usize, level: i32) -> PuzzleResult<()> {
        let slot = self
            .0
            .get_mut(band_index)
            .ok_or(PuzzleError::InvalidBandIndex(band_index))?;
        *slot = level;
        Ok(())
    }

    pub fn is_baseline(&self) -> bool {
        *self == Self::BASELINE
    }

    /// Number of bands whose levels differ
    pub fn distance(&self, other: &Equalization) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl Default for Equalization {
    fn default() -> Self {
        Self::BASELINE
    }
}

impl AsRef<[i32]> for Equalization {
    fn as_ref(&self) -> &[i32] {
        &self.0
    }
}

impl From<[i32; BAND_COUNT]> for Equalization {
    fn from(levels: [i32; BAND_COUNT]) -> Self {
        Self(levels)
    }
}

impl TryFrom<&[i32]> for Equalization {
    type Error = PuzzleError;

    fn try_from(raw: &[i32]) -> PuzzleResult<Self> {
        let levels: [i32; BAND_COUNT] = raw.try_into().map_err(|_| PuzzleError::LengthMismatch {
            operand: Operand::First,
            len: raw.len(),
        })?;
        Ok(Self(levels))
    }
}

impl fmt::Display for Equalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, level) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{level:+}")?;
        }
        f.write_str("]")
    }
}

/// Exact band-by-band comparison of two gain configurations
///
/// Each operand must hold exactly [`BAND_COUNT`] levels. The first operand is
/// checked before the second so the error names the malformed one.
pub fn equal<A, B>(a: &A, b: &B) -> PuzzleResult<bool>
where
    A: AsRef<[i32]> + ?Sized,
    B: AsRef<[i32]> + ?Sized,
{
    let (a, b) = (a.as_ref(), b.as_ref());
    if a.len() != BAND_COUNT {
        return Err(PuzzleError::LengthMismatch {
            operand: Operand::First,
            len: a.len(),
        });
    }
    if b.len() != BAND_COUNT {
        return Err(PuzzleError::LengthMismatch {
            operand: Operand::Second,
            len: b.len(),
        });
    }
    Ok(a == b)
}
