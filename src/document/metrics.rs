//! Glyph advance widths for the standard Helvetica faces.
//!
//! The exported PDF uses the base-14 Helvetica fonts, which every reader ships,
//! so nothing is embedded. Alignment still needs real widths: centred and
//! right-aligned spans are positioned from these Adobe metrics (1000 units per
//! em) rather than from a per-character estimate.

use super::{FontWeight, MM_PER_PT};

// advance widths for ' '..='~'
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// advance widths for '\u{a0}'..='\u{ff}'
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Measures the glyph the PDF writer actually draws for `c`: WinAnsi
/// punctuation outside Latin-1 has its own widths, anything else becomes `?`.
fn glyph_width(c: char, weight: FontWeight) -> u16 {
    let bold = weight == FontWeight::Bold;
    let (ascii, latin1) = if bold {
        (&HELVETICA_BOLD, &HELVETICA_BOLD_LATIN1)
    } else {
        (&HELVETICA, &HELVETICA_LATIN1)
    };
    match c {
        ' '..='~' => ascii[c as usize - ' ' as usize],
        '\u{a0}'..='\u{ff}' => latin1[c as usize - 0xa0],
        '€' | '–' => 556,
        '…' | '—' | '™' => 1000,
        '•' => 350,
        '‚' | '‘' | '’' => if bold { 278 } else { 222 },
        '„' | '“' | '”' => if bold { 500 } else { 333 },
        _ => ascii['?' as usize - ' ' as usize],
    }
}

/// Width of `text` in millimetres when set at `size` points.
pub fn width_of_text(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c, weight) as u32).sum();
    units as f32 / 1000.0 * size * MM_PER_PT
}

/// Shorten `text` with a trailing ellipsis until it fits in `max_width` millimetres.
pub fn fit_text(text: &str, weight: FontWeight, size: f32, max_width: f32) -> String {
    if width_of_text(text, weight, size) <= max_width {
        return text.to_string();
    }
    let mut chars: Vec<char> = text.chars().collect();
    while !chars.is_empty() {
        chars.pop();
        let candidate = format!("{}...", chars.iter().collect::<String>().trim_end());
        if width_of_text(&candidate, weight, size) <= max_width {
            return candidate;
        }
    }
    "...".to_string()
}
