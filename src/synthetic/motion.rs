//! Motion fixtures: 100 tri-axis accelerometer samples
//!
//! Records interleave the axes, so sample `i` occupies indices `3i` (x),
//! `3i + 1` (y) and `3i + 2` (z).

use super::{linspace, truncate_to_i16, FULL_SCALE};
use crate::types::{Fixture, HexRecord, Scenario};
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

pub const MOTION_SAMPLES: usize = 100;
pub const AXES: usize = 3;

/// Walking trace covers two seconds at a 2 Hz gait
pub const WALK_DURATION_S: f64 = 2.0;
pub const WALK_FREQUENCY_HZ: f64 = 2.0;
pub const WALK_X_AMPLITUDE: f64 = 0.2;
pub const WALK_Y_AMPLITUDE: f64 = 0.1;
/// Resting z axis, gravity at 0.98 of full scale
pub const GRAVITY_FRACTION: f64 = 0.98;

/// Fall noise std, as a multiple of full scale
pub const FALL_STD_DEV: f64 = 2.0;

/// One accelerometer reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionTrace {
    pub samples: Vec<Triple>,
}

impl MotionTrace {
    pub fn to_fixture(&self, scenario: Scenario) -> Fixture {
        let mut records = Vec::with_capacity(self.samples.len() * AXES);
        for (i, s) in self.samples.iter().enumerate() {
            let base = (i * AXES) as u32;
            records.push(HexRecord::from_i16(base, s.x));
            records.push(HexRecord::from_i16(base + 1, s.y));
            records.push(HexRecord::from_i16(base + 2, s.z));
        }
        Fixture::new(scenario, records)
    }
}

/// Gentle walking: sinusoidal sway on x and y, gravity on z
pub fn normal_motion() -> MotionTrace {
    let z = truncate_to_i16(FULL_SCALE * GRAVITY_FRACTION);
    let samples = linspace(0.0, WALK_DURATION_S, MOTION_SAMPLES)
        .into_iter()
        .map(|t| {
            let phase = 2.0 * PI * WALK_FREQUENCY_HZ * t;
            Triple {
                x: truncate_to_i16(WALK_X_AMPLITUDE * phase.sin() * FULL_SCALE),
                y: truncate_to_i16(WALK_Y_AMPLITUDE * phase.cos() * FULL_SCALE),
                z,
            }
        })
        .collect();
    MotionTrace { samples }
}

/// Violent tumble: independent Gaussian noise on every axis
///
/// The std is twice full scale, so most readings overflow `i16` and wrap.
/// Downstream fixtures rely on this, so it is not clamped.
pub fn fall_motion<R: Rng>(rng: &mut R) -> MotionTrace {
    let mut axis = || {
        let n: f64 = rng.sample(StandardNormal);
        truncate_to_i16(n * FALL_STD_DEV * FULL_SCALE)
    };
    let samples = (0..MOTION_SAMPLES)
        .map(|_| Triple {
            x: axis(),
            y: axis(),
            z: axis(),
        })
        .collect();
    MotionTrace { samples }
}
