//! Slider Panel Layout
//!
//! Maps a gain configuration onto the knob positions of an equalizer panel
//! graphic and reads it back. Each knob also carries its exact level, so a
//! clicked panel can be judged without going through pixel math.

use serde::{Deserialize, Serialize};

use crate::equalization::{Equalization, EQ_BANDS};

/// Vertical geometry of the panel graphic
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderGeometry {
    /// Y of the slider track center (0 dB)
    pub origin_y: f32,
    /// Full track height, top (+full scale) to bottom (-full scale)
    pub track_height: f32,
    /// Half the knob height, so the knob centers on its level
    pub knob_offset: f32,
    /// Gain (dB) at either end of the track
    pub full_scale_db: f32,
}

impl Default for SliderGeometry {
    fn default() -> Self {
        Self {
            origin_y: 67.0,
            track_height: 90.0,
            knob_offset: 5.0,
            full_scale_db: 12.0,
        }
    }
}

impl SliderGeometry {
    fn pixels_per_db(&self) -> f32 {
        self.track_height / 2.0 / self.full_scale_db
    }

    /// Knob y position for a gain level (screen y grows downward)
    pub fn knob_y(&self, level: i32) -> f32 {
        self.origin_y - level as f32 * self.pixels_per_db() - self.knob_offset
    }

    /// Nearest whole-dB level for a knob y position
    pub fn level_at(&self, y: f32) -> i32 {
        ((self.origin_y - self.knob_offset - y) / self.pixels_per_db()).round() as i32
    }

    /// Lay out one panel
    pub fn render(&self, equalization: &Equalization) -> SliderPanel {
        let knobs = equalization
            .levels()
            .iter()
            .zip(EQ_BANDS.iter())
            .enumerate()
            .map(|(band, (&level, &frequency))| SliderKnob {
                band,
                frequency,
                y: self.knob_y(level),
                level,
            })
            .collect();

        SliderPanel { knobs }
    }
}

/// One slider knob as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderKnob {
    pub band: usize,
    pub frequency: f32,
    pub y: f32,
    /// Exact level, stored alongside the drawn position
    pub level: i32,
}

/// Knobs of one rendered panel, in band order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SliderPanel {
    knobs: Vec<SliderKnob>,
}

impl SliderPanel {
    /// Panel as reported by a front end; may be malformed
    pub fn from_knobs(knobs: Vec<SliderKnob>) -> Self {
        Self { knobs }
    }

    pub fn knobs(&self) -> &[SliderKnob] {
        &self.knobs
    }

    /// Levels carried by the knobs
    ///
    /// Not length-checked: pass the result to [`crate::equal`], which
    /// rejects panels without exactly ten bands.
    pub fn recover(&self) -> Vec<i32> {
        self.knobs.iter().map(|knob| knob.level).collect()
    }

    /// Levels reconstructed from knob positions alone
    pub fn recover_from_positions(&self, geometry: &SliderGeometry) -> Vec<i32> {
        self.knobs.iter().map(|knob| geometry.level_at(knob.y)).collect()
    }
}
