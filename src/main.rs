use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use object_printer::{render, ConfigState, Profile};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("objprint")
        .about("Print a JSON document as an indented field tree")
        .arg(
            Arg::new("input")
                .help("Input JSON file, or - for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("exclude-path")
                .long("exclude-path")
                .value_name("PATH")
                .help("Leave out the field at this dotted path (repeatable)")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("truncate")
                .long("truncate")
                .value_name("N")
                .help("Cut strings down to N characters")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .value_name("N")
                .help("Fail when nesting goes deeper than N levels")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("culture")
                .long("culture")
                .value_name("NAME")
                .help("Number formatting culture, e.g. de-DE"),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .value_name("FILE")
                .help("JSON print profile; command-line options are applied on top"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log debug output to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn profile_from_args(matches: &ArgMatches) -> Result<Profile> {
    let base = match matches.get_one::<String>("profile") {
        Some(path) => Profile::load(Path::new(path))?,
        None => Profile::default(),
    };

    let overrides = Profile {
        exclude_paths: matches
            .get_many::<String>("exclude-path")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default(),
        string_max_length: matches.get_one::<usize>("truncate").copied(),
        max_depth: matches.get_one::<usize>("max-depth").copied(),
        culture: matches.get_one::<String>("culture").cloned(),
    };

    Ok(base.merged_with(overrides))
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))
    }
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| anyhow!("No input given"))?;

    let profile = profile_from_args(&matches)?;
    let state = profile.apply(&ConfigState::new())?;
    debug!(?state, "configuration ready");

    let content = read_input(input)?;
    let document: serde_json::Value =
        serde_json::from_str(&content).with_context(|| format!("{} is not valid JSON", input))?;

    let output = render(&document, &state)?;
    print!("{}", output);

    Ok(())
}
