//! End-to-end checks on the six generated fixture files

use simfixture::{
    fixture_path, load_scenario, FixtureConfig, FixtureGenerator, GenerationReport, ParsedFixture,
    SampleWidth, Scenario,
};
use std::f64::consts::PI;
use std::path::Path;

fn generate(root: &Path, seed: Option<u64>) -> GenerationReport {
    let config = FixtureConfig {
        output_directory: root.to_string_lossy().to_string(),
        seed,
    };
    FixtureGenerator::new(config)
        .generate_all()
        .expect("generation should succeed")
}

fn load(root: &Path, scenario: Scenario) -> ParsedFixture {
    let parsed = load_scenario(root, scenario).expect("fixture should parse");
    assert_eq!(parsed.width, Some(scenario.sample_width()));
    parsed
}

#[test]
fn writes_all_six_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = generate(dir.path(), Some(1));

    assert_eq!(report.fixtures.len(), 6);
    assert_eq!(report.total_records(), 2 * 4096 + 2 * 512 + 2 * 300);
    for scenario in Scenario::ALL {
        let path = fixture_path(dir.path(), scenario);
        assert!(path.is_file(), "missing {:?}", path);
    }
}

#[test]
fn vision_files_have_4096_two_digit_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate(dir.path(), None);

    for scenario in [Scenario::NormalScene, Scenario::ThreatScene] {
        let parsed = load(dir.path(), scenario);
        assert_eq!(parsed.comment, scenario.comment());
        assert_eq!(parsed.records.len(), 4096);
        assert_eq!(parsed.width, Some(SampleWidth::Bits8));
        assert!(parsed.indices_are_sequential());
        assert_eq!(parsed.records.last().map(|r| r.index), Some(0x0fff));
    }

    let normal = load(dir.path(), Scenario::NormalScene);
    assert!(normal.values().iter().all(|&v| (50..100).contains(&v)));
}

#[test]
fn vision_lines_are_exactly_formatted() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate(dir.path(), Some(5));

    let text = std::fs::read_to_string(fixture_path(dir.path(), Scenario::NormalScene))
        .expect("read fixture");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("// Normal scene test data"));
    for (i, line) in lines.enumerate() {
        assert_eq!(line.len(), 8, "bad line {:?}", line);
        assert!(line.starts_with(&format!("@{:04x} ", i)));
    }
    assert!(text.ends_with('\n'));
}

#[test]
fn threat_scene_has_nested_blocks() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate(dir.path(), None);

    let values = load(dir.path(), Scenario::ThreatScene).values();
    let at = |row: usize, col: usize| values[row * 64 + col];

    for row in 20..40 {
        for col in 20..40 {
            let inner = (25..35).contains(&row) && (25..35).contains(&col);
            let expected = if inner { 0x00 } else { 0xff };
            assert_eq!(at(row, col), expected, "pixel ({}, {})", row, col);
        }
    }
}

#[test]
fn audio_files_have_512_four_digit_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate(dir.path(), Some(8));

    for scenario in [Scenario::NormalAudio, Scenario::AlarmAudio] {
        let parsed = load(dir.path(), scenario);
        assert_eq!(parsed.records.len(), 512);
        assert_eq!(parsed.width, Some(SampleWidth::Bits16));
        assert!(parsed.indices_are_sequential());
    }
}

#[test]
fn alarm_audio_has_single_spectral_peak() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate(dir.path(), None);

    let samples: Vec<f64> = load(dir.path(), Scenario::AlarmAudio)
        .signed_values()
        .into_iter()
        .map(|s| s as f64 / 32767.0)
        .collect();

    let peak_amplitude = samples.iter().fold(0.0f64, |m, s| m.max(s.abs()));
    assert!(
        (0.79..=0.8).contains(&peak_amplitude),
        "amplitude should be ~0.8, got {}",
        peak_amplitude
    );

    // 1000 Hz sampled at 511 Hz folds onto 22 cycles per window
    let n = samples.len();
    let magnitude = |k: usize| {
        let (mut re, mut im) = (0.0, 0.0);
        for (i, s) in samples.iter().enumerate() {
            let angle = 2.0 * PI * (k * i) as f64 / n as f64;
            re += s * angle.cos();
            im -= s * angle.sin();
        }
        (re * re + im * im).sqrt()
    };

    let spectrum: Vec<f64> = (0..=n / 2).map(magnitude).collect();
    let (peak_bin, peak) = spectrum
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0), |best, (k, m)| if m > best.1 { (k, m) } else { best });

    assert_eq!(peak_bin, 22);
    assert!(peak > 0.7 * 0.8 * n as f64 / 2.0, "peak too weak: {}", peak);
    for (k, m) in spectrum.iter().enumerate() {
        if k != peak_bin {
            assert!(*m < 0.25 * peak, "bin {} too strong: {} vs {}", k, m, peak);
        }
    }
}

#[test]
fn motion_files_interleave_300_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    generate(dir.path(), Some(2));

    for scenario in [Scenario::NormalMotion, Scenario::FallMotion] {
        let parsed = load(dir.path(), scenario);
        assert_eq!(parsed.records.len(), 300);
        assert_eq!(parsed.width, Some(SampleWidth::Bits16));
        assert!(parsed.indices_are_sequential());
    }

    let normal = load(dir.path(), Scenario::NormalMotion).signed_values();
    // Every third record is the gravity axis
    assert!(normal.chunks(3).all(|xyz| xyz[2] == 32111));
    assert_eq!(normal[..3].to_vec(), vec![0i16, 3276, 32111]);
}

#[test]
fn fixed_seed_reruns_are_byte_identical() {
    let dir = tempfile::tempdir().expect("tempdir");

    generate(dir.path(), Some(2024));
    let first: Vec<Vec<u8>> = Scenario::ALL
        .iter()
        .map(|&s| std::fs::read(fixture_path(dir.path(), s)).expect("read"))
        .collect();

    generate(dir.path(), Some(2024));
    let second: Vec<Vec<u8>> = Scenario::ALL
        .iter()
        .map(|&s| std::fs::read(fixture_path(dir.path(), s)).expect("read"))
        .collect();

    assert_eq!(first, second);
}

#[test]
fn unseeded_reruns_keep_shape() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = generate(dir.path(), None);
    let b = generate(dir.path(), None);

    let counts = |r: &GenerationReport| r.fixtures.iter().map(|f| f.records).collect::<Vec<_>>();
    assert_eq!(counts(&a), counts(&b));
}

#[test]
fn report_serializes_to_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report = generate(dir.path(), Some(3));

    let json = serde_json::to_string(&report).expect("serialize");
    assert!(json.contains("\"seed\":3"));
    assert!(json.contains("ThreatScene"));

    let back: GenerationReport = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, report);
}
