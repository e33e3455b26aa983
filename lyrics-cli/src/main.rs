//! Command-line interface for lyrics
//! Cleans, structures and slices pasted lyrics, printing JSON, YAML or text to stdout.
//!
//! Usage:
//!   lyrics `<path|->` --transform `<name>` [--title `<title>`] [--artist `<artist>`]
//!   lyrics --list-transforms

mod transforms;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lyrics_config::{Loader, LyricsConfig};
use std::io::{self, Read};
use std::path::Path;
use tracing_subscriber::EnvFilter;
use transforms::{execute_transform, SongMeta, AVAILABLE_TRANSFORMS};

fn main() {
    let matches = Command::new("lyrics")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize pasted song lyrics into sections and presentation slides")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Lyrics file, or '-' to read stdin")
                .required_unless_present("list-transforms")
                .index(1),
        )
        .arg(
            Arg::new("transform")
                .long("transform")
                .short('t')
                .help("Transform to run (see --list-transforms)")
                .default_value("editor"),
        )
        .arg(Arg::new("title").long("title").help("Song title (default: file name)"))
        .arg(Arg::new("artist").long("artist").help("Song artist"))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("lines-per-slide")
                .long("lines-per-slide")
                .short('n')
                .help("Lyric lines per slide")
                .value_parser(value_parser!(i64).range(2..=4)),
        )
        .arg(
            Arg::new("labels")
                .long("labels")
                .help("Show section labels on lyric slides")
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new("date").long("date").help("Date printed on the cover slide"))
        .arg(
            Arg::new("titles")
                .long("titles")
                .help("Set list (comma or newline separated) used to split and match bulk pastes"),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log inference decisions to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    if let Err(err) = handle_execute_command(&matches) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn handle_execute_command(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let transform = matches
        .get_one::<String>("transform")
        .map(String::as_str)
        .unwrap_or("editor");

    let source = read_source(path)?;
    let config = load_config(matches)?;
    let meta = SongMeta {
        title: matches
            .get_one::<String>("title")
            .cloned()
            .unwrap_or_else(|| default_title(path)),
        artist: matches.get_one::<String>("artist").cloned(),
        titles: matches.get_one::<String>("titles").cloned(),
    };

    let output = execute_transform(&source, transform, &meta, &config)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn read_source(path: &str) -> anyhow::Result<String> {
    use anyhow::Context;

    if path == "-" {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        return Ok(source);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<LyricsConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(lines) = matches.get_one::<i64>("lines-per-slide") {
        loader = loader.set_override("slides.lines_per_slide", *lines)?;
    }
    if matches.get_flag("labels") {
        loader = loader.set_override("slides.show_section_labels", true)?;
    }
    if let Some(date) = matches.get_one::<String>("date") {
        loader = loader.set_override("slides.cover_date", date.as_str())?;
    }
    Ok(loader.build()?)
}

fn default_title(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| *stem != "-")
        .unwrap_or("Untitled")
        .to_string()
}

fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    for (name, description) in AVAILABLE_TRANSFORMS {
        println!("  {name}");
        println!("    {description}");
        println!();
    }
}
