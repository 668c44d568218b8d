//! Audio fixtures: 512-sample signed 16-bit waveforms

use super::{linspace, truncate_to_i16, FULL_SCALE};
use crate::types::{Fixture, HexRecord, Scenario};
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

pub const WAVEFORM_SAMPLES: usize = 512;

/// Standard deviation of background noise, as a fraction of full scale
pub const NOISE_STD_DEV: f64 = 0.1;

pub const ALARM_FREQUENCY_HZ: f64 = 1000.0;
pub const ALARM_AMPLITUDE: f64 = 0.8;
/// Length of the alarm window in seconds
pub const ALARM_DURATION_S: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waveform {
    pub samples: Vec<i16>,
}

impl Waveform {
    /// Samples normalized to [-1, 1]
    pub fn normalized(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|&s| s as f64 / FULL_SCALE)
            .collect()
    }

    pub fn to_fixture(&self, scenario: Scenario) -> Fixture {
        let records = self
            .samples
            .iter()
            .enumerate()
            .map(|(i, &s)| HexRecord::from_i16(i as u32, s))
            .collect();
        Fixture::new(scenario, records)
    }
}

/// Gaussian background noise, mean 0, std 0.1 of full scale
pub fn normal_audio<R: Rng>(rng: &mut R) -> Waveform {
    let samples = (0..WAVEFORM_SAMPLES)
        .map(|_| {
            let n: f64 = rng.sample(StandardNormal);
            truncate_to_i16(n * NOISE_STD_DEV * FULL_SCALE)
        })
        .collect();
    Waveform { samples }
}

/// 1 kHz tone at 0.8 of full scale
///
/// The 512 sample instants span [0, 1] s with both endpoints included, so
/// the effective rate is 511 Hz and the tone lands on its alias, 22 cycles
/// per window.
pub fn alarm_audio() -> Waveform {
    let samples = linspace(0.0, ALARM_DURATION_S, WAVEFORM_SAMPLES)
        .into_iter()
        .map(|t| {
            let tone = (2.0 * PI * ALARM_FREQUENCY_HZ * t).sin();
            truncate_to_i16(ALARM_AMPLITUDE * tone * FULL_SCALE)
        })
        .collect();
    Waveform { samples }
}
