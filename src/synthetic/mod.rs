//! Synthetic sample generators
//!
//! Shapes and value ranges are fixed; only the random content varies
//! between runs (and not even that when the generator is seeded).

pub mod audio;
pub mod motion;
pub mod vision;

pub use audio::{alarm_audio, normal_audio, Waveform};
pub use motion::{fall_motion, normal_motion, MotionTrace};
pub use vision::{normal_scene, threat_scene, Frame};

/// Full-scale magnitude of a signed 16-bit sample
pub const FULL_SCALE: f64 = 32767.0;

/// `n` evenly spaced points over `[start, end]`, both endpoints included
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Convert a scaled float to `i16` by truncating toward zero and keeping
/// the low 16 bits.
///
/// Values outside the `i16` range wrap instead of saturating, so a sample of
/// `40000.7` becomes `-25536`.
pub fn truncate_to_i16(value: f64) -> i16 {
    (value.trunc() as i64) as i16
}
