use simfixture::{FixtureConfig, FixtureError, FixtureGenerator};
use std::env;
use std::path::Path;

const USAGE: &str =
    "Usage: simfixture [--output <dir>] [--seed <u64>] [--config <path>] [--json] [--help]";

#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    output: Option<String>,
    seed: Option<u64>,
    config: Option<String>,
    json: bool,
    help: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simfixture::init_logging();

    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(1);
        }
    };

    if options.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = apply_overrides(load_config(&options)?, &options);
    let report = FixtureGenerator::new(config).generate_all()?;

    if options.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("Test data generated successfully!");
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--output" => {
                i += 1;
                options.output = Some(flag_value(args, i, "--output")?.to_string());
            }
            "--seed" => {
                i += 1;
                let value = flag_value(args, i, "--seed")?;
                let seed: u64 = value
                    .parse()
                    .map_err(|e| format!("Invalid --seed {:?}: {}", value, e))?;
                options.seed = Some(seed);
            }
            "--config" => {
                i += 1;
                options.config = Some(flag_value(args, i, "--config")?.to_string());
            }
            "--json" => options.json = true,
            "--help" | "-h" => options.help = true,
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", flag))
}

/// An explicitly named config file must exist; the default one is optional
fn load_config(options: &CliOptions) -> Result<FixtureConfig, Box<dyn std::error::Error>> {
    match &options.config {
        Some(path) => {
            if !Path::new(path).exists() {
                let msg = format!("Config file not found: {}", path);
                return Err(FixtureError::ConfigError(msg).into());
            }
            Ok(FixtureConfig::load_from_file(path)?)
        }
        None => Ok(FixtureConfig::load_or_default()),
    }
}

/// CLI flags win over values from the config file
fn apply_overrides(mut config: FixtureConfig, options: &CliOptions) -> FixtureConfig {
    if let Some(output) = &options.output {
        config.output_directory = output.clone();
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    config
}
