//! Text serialization of fixtures
//!
//! A fixture file is one `//` comment line followed by one hex record per
//! line, every line terminated by `\n`:
//!
//! ```text
//! // Normal audio test data
//! @0000 0cd2
//! @0001 f3a1
//! ```

use crate::errors::FixtureError;
use crate::types::{Fixture, HexRecord, SampleWidth};
use std::io::Write;

/// Write the comment header and every record of `fixture`
pub fn write_fixture<W: Write>(writer: &mut W, fixture: &Fixture) -> std::io::Result<()> {
    writeln!(writer, "{}", fixture.scenario.comment())?;
    for record in &fixture.records {
        writeln!(writer, "{}", record)?;
    }
    Ok(())
}

impl Fixture {
    /// Render the fixture exactly as it is written to disk
    pub fn render(&self) -> String {
        let mut buf = Vec::with_capacity(self.records.len() * 11 + 32);
        // Writing into a Vec cannot fail
        let _ = write_fixture(&mut buf, self);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// A fixture read back from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFixture {
    /// Header line including the leading `//`
    pub comment: String,
    pub records: Vec<HexRecord>,
    /// `None` when the file holds no records
    pub width: Option<SampleWidth>,
}

impl ParsedFixture {
    pub fn values(&self) -> Vec<u16> {
        self.records.iter().map(|r| r.value).collect()
    }

    /// Values reinterpreted as signed 16-bit samples
    pub fn signed_values(&self) -> Vec<i16> {
        self.records.iter().map(HexRecord::as_i16).collect()
    }

    /// True when every index is exactly one more than the previous, starting at 0
    pub fn indices_are_sequential(&self) -> bool {
        self.records
            .iter()
            .enumerate()
            .all(|(i, r)| r.index as usize == i)
    }
}

/// Parse fixture text produced by [`write_fixture`]
///
/// Line numbers in errors are 1-based. Blank lines after the header are
/// ignored; mixed 8-bit and 16-bit values in one file are rejected.
pub fn parse_fixture(text: &str) -> Result<ParsedFixture, FixtureError> {
    let mut lines = text.lines().enumerate();

    let comment = match lines.next() {
        Some((_, line)) if line.starts_with("//") => line.to_string(),
        Some((_, line)) => {
            return Err(FixtureError::parse(
                1,
                format!("expected '//' comment header, found {:?}", line),
            ))
        }
        None => return Err(FixtureError::parse(1, "empty fixture")),
    };

    let mut records = Vec::new();
    let mut width: Option<SampleWidth> = None;

    for (i, line) in lines {
        let line_no = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let record = HexRecord::parse(line).map_err(|msg| FixtureError::parse(line_no, msg))?;

        match width {
            None => width = Some(record.width),
            Some(w) if w != record.width => {
                return Err(FixtureError::parse(
                    line_no,
                    format!(
                        "value width changed from {} to {} digits",
                        w.hex_digits(),
                        record.width.hex_digits()
                    ),
                ))
            }
            Some(_) => {}
        }

        records.push(record);
    }

    Ok(ParsedFixture {
        comment,
        records,
        width,
    })
}
