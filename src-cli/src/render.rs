//! Text rendering of slider panels

use eqquiz_core::{Equalization, SliderGeometry, EQ_BANDS};

/// Rows drawn per panel, top to bottom (dB)
const ROWS: [i32; 3] = [12, 0, -12];

const COLUMN_WIDTH: usize = 4;

fn band_label(frequency: f32) -> String {
    if frequency >= 1000.0 {
        format!("{}k", (frequency / 1000.0) as u32)
    } else {
        format!("{}", frequency as u32)
    }
}

/// Header line with the band frequencies
pub fn band_header() -> String {
    let mut line = String::from("      ");
    for frequency in EQ_BANDS {
        line.push_str(&format!("{:>width$}", band_label(frequency), width = COLUMN_WIDTH));
    }
    line
}

/// Draw one panel as text, knob rows from +12 dB down to -12 dB
pub fn render_panel(geometry: &SliderGeometry, equalization: &Equalization) -> Vec<String> {
    let panel = geometry.render(equalization);

    ROWS.iter()
        .map(|&row| {
            let mut line = format!("{:>+4}  ", row);
            for knob in panel.knobs() {
                let cell = if geometry.level_at(knob.y) == row { "o" } else { "|" };
                line.push_str(&format!("{:>width$}", cell, width = COLUMN_WIDTH));
            }
            line
        })
        .collect()
}
