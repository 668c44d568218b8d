//! simfixture: synthetic sensor fixtures for AI test harnesses
//!
//! Generates hex-encoded vision, audio and motion sample files that drive
//! downstream threat-detection, alarm and fall-detection test benches.
//!
//! # Output
//! Six files under the output root (default `testdata/`):
//! - `vision/normal_scene.hex`, `vision/threat_scene.hex` (64x64, 8-bit)
//! - `audio/normal_audio.hex`, `audio/alarm_audio.hex` (512 samples, 16-bit)
//! - `motion/normal_motion.hex`, `motion/fall_motion.hex` (100 x/y/z triples, 16-bit)
//!
//! Each file starts with a `//` comment line followed by `@<index> <value>`
//! records in lower-case hex.
//!
//! # Usage
//! ```rust,no_run
//! use simfixture::{FixtureConfig, FixtureGenerator};
//!
//! let config = FixtureConfig { seed: Some(42), ..FixtureConfig::default() };
//! let report = FixtureGenerator::new(config).generate_all()?;
//! assert_eq!(report.fixtures.len(), 6);
//! # Ok::<(), simfixture::FixtureError>(())
//! ```
pub mod config;
pub mod errors;
pub mod format;
pub mod generator;
pub mod storage;
pub mod synthetic;
pub mod types;

pub use config::FixtureConfig;
pub use errors::FixtureError;
pub use format::{parse_fixture, write_fixture, ParsedFixture};
pub use generator::{FixtureGenerator, GenerationReport, WrittenFixture};
pub use storage::{fixture_path, load_fixture, load_scenario, prepare_directories, save_fixture};
pub use types::{Domain, Fixture, HexRecord, SampleWidth, Scenario};

/// Initialize logging for the generator
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "simfixture=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
