//! Vision fixtures: 64x64 grayscale frames

use crate::types::{Fixture, HexRecord, Scenario};
use rand::Rng;

pub const FRAME_WIDTH: usize = 64;
pub const FRAME_HEIGHT: usize = 64;

/// Normal scenes stay in a narrow mid-gray band
pub const NORMAL_PIXEL_RANGE: std::ops::Range<u8> = 50..100;
/// Threat scene background, upper bound exclusive
pub const THREAT_PIXEL_RANGE: std::ops::Range<u8> = 0..255;

/// Saturated square (rows and cols) in the threat scene
pub const HIGHLIGHT_BLOCK: std::ops::Range<usize> = 20..40;
/// Dark square nested inside the highlight block
pub const SHADOW_BLOCK: std::ops::Range<usize> = 25..35;

/// Row-major 8-bit grayscale frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Frame {
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.pixels[row * self.width + col]
    }

    /// Fill the square `rows x cols` region with `value`
    pub fn fill_block(
        &mut self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
        value: u8,
    ) {
        for row in rows {
            let start = row * self.width;
            self.pixels[start + cols.start..start + cols.end].fill(value);
        }
    }

    /// One record per pixel, indexed by flattened row-major position
    pub fn to_fixture(&self, scenario: Scenario) -> Fixture {
        let records = self
            .pixels
            .iter()
            .enumerate()
            .map(|(i, &p)| HexRecord::from_u8(i as u32, p))
            .collect();
        Fixture::new(scenario, records)
    }
}

fn random_frame<R: Rng>(rng: &mut R, range: std::ops::Range<u8>) -> Frame {
    let pixels = (0..FRAME_WIDTH * FRAME_HEIGHT)
        .map(|_| rng.gen_range(range.clone()))
        .collect();
    Frame {
        width: FRAME_WIDTH,
        height: FRAME_HEIGHT,
        pixels,
    }
}

/// Low-feature scene: uniform noise in [50, 100)
pub fn normal_scene<R: Rng>(rng: &mut R) -> Frame {
    random_frame(rng, NORMAL_PIXEL_RANGE)
}

/// High-contrast scene: full-range noise with a white square framing a
/// black square
pub fn threat_scene<R: Rng>(rng: &mut R) -> Frame {
    let mut frame = random_frame(rng, THREAT_PIXEL_RANGE);
    frame.fill_block(HIGHLIGHT_BLOCK, HIGHLIGHT_BLOCK, 255);
    frame.fill_block(SHADOW_BLOCK, SHADOW_BLOCK, 0);
    frame
}
