//! Output tree management and fixture file I/O

use crate::errors::FixtureError;
use crate::format::{parse_fixture, write_fixture, ParsedFixture};
use crate::types::{Domain, Fixture, Scenario};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Create the output root and one subdirectory per domain
///
/// Existing directories are left untouched.
pub fn prepare_directories<P: AsRef<Path>>(root: P) -> Result<(), FixtureError> {
    let root = root.as_ref();
    fs::create_dir_all(root).map_err(|e| FixtureError::io(root, e))?;

    for domain in Domain::ALL {
        let dir = root.join(domain.dir_name());
        fs::create_dir_all(&dir).map_err(|e| FixtureError::io(&dir, e))?;
        log::debug!("Prepared {:?}", dir);
    }

    Ok(())
}

/// Where a scenario's file lives under `root`
pub fn fixture_path<P: AsRef<Path>>(root: P, scenario: Scenario) -> PathBuf {
    root.as_ref()
        .join(scenario.domain().dir_name())
        .join(scenario.file_name())
}

/// Write `fixture` to its file under `root`, replacing any previous contents
pub fn save_fixture<P: AsRef<Path>>(root: P, fixture: &Fixture) -> Result<PathBuf, FixtureError> {
    let path = fixture_path(root, fixture.scenario);

    let file = File::create(&path).map_err(|e| FixtureError::io(&path, e))?;
    let mut writer = BufWriter::new(file);
    write_fixture(&mut writer, fixture).map_err(|e| FixtureError::io(&path, e))?;
    writer.flush().map_err(|e| FixtureError::io(&path, e))?;

    log::info!("Wrote {} records to {:?}", fixture.records.len(), path);
    Ok(path)
}

/// Read and parse a fixture file
pub fn load_fixture<P: AsRef<Path>>(path: P) -> Result<ParsedFixture, FixtureError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
    parse_fixture(&text)
}

/// Load a scenario's file from `root` and check it carries that scenario's
/// header and sample width
pub fn load_scenario<P: AsRef<Path>>(
    root: P,
    scenario: Scenario,
) -> Result<ParsedFixture, FixtureError> {
    let parsed = load_fixture(fixture_path(root, scenario))?;

    if parsed.comment != scenario.comment() {
        return Err(FixtureError::parse(
            1,
            format!(
                "expected header {:?}, found {:?}",
                scenario.comment(),
                parsed.comment
            ),
        ));
    }

    let expected = scenario.sample_width();
    if let Some(width) = parsed.width.filter(|w| *w != expected) {
        return Err(FixtureError::parse(
            2,
            format!(
                "expected {}-digit values, found {}-digit values",
                expected.hex_digits(),
                width.hex_digits()
            ),
        ));
    }

    Ok(parsed)
}
