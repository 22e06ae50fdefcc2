use std::{
    fs,
    io::{stdin, stdout, Read, Write},
    process,
};

use clap::{builder::PossibleValue, value_parser, Arg, ArgAction, ArgMatches, Command, ValueEnum};

use chroma::{convert, ColorRegistry, Logger, NullLogger, Options, OutputMode, StdLogger};

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct Format(OutputMode);

impl ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Format(OutputMode::Text),
            Format(OutputMode::Debug),
            Format(OutputMode::Rgb),
            Format(OutputMode::Rgba),
            Format(OutputMode::Hex),
            Format(OutputMode::Name),
            Format(OutputMode::Web),
            Format(OutputMode::WebShort),
        ]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(PossibleValue::new(self.0.name()))
    }
}

fn cli() -> Command {
    Command::new("chroma")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse colors and write them out in a normalized notation")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .action(ArgAction::Version)
                .long("version")
                .short('v')
                .global(true)
        )
        .arg(
            Arg::new("STDIN")
                .action(ArgAction::SetTrue)
                .long("stdin")
                .help("Read newline separated colors from stdin"),
        )
        .arg(
            Arg::new("FORMAT")
                .short('f')
                .long("format")
                .help("Notation to write colors in")
                .default_value("text")
                .ignore_case(true)
                .num_args(1)
                .value_parser(value_parser!(Format)),
        )
        .arg(
            Arg::new("DEFINE")
                .short('D')
                .long("define")
                .help("Register an extra named color, as NAME=COLOR. May be passed multiple times.")
                .action(ArgAction::Append)
                .value_parser(value_parser!(String))
                .num_args(1)
        )
        .arg(
            Arg::new("PALETTE")
                .short('p')
                .long("palette")
                .help("A file of NAME = COLOR lines to register before converting")
                .value_parser(value_parser!(String))
                .num_args(1)
        )
        .arg(
            Arg::new("CLASSIFY")
                .action(ArgAction::SetTrue)
                .long("classify")
                .help("Follow each color with `light` or `dark`")
                .conflicts_with("IS"),
        )
        .arg(
            Arg::new("IS")
                .long("is")
                .help("Print whether each color has the same channels as this one")
                .value_parser(value_parser!(String))
                .num_args(1)
        )
        .arg(
            Arg::new("QUIET")
                .action(ArgAction::SetTrue)
                .short('q')
                .long("quiet")
                .help("Don't print warnings."),
        )
        .arg(
            Arg::new("COLOR")
                .value_parser(value_parser!(String))
                .action(ArgAction::Append)
                .required_unless_present("STDIN")
                .help("Colors to convert"),
        )
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1)
}

fn build_registry(matches: &ArgMatches, logger: &dyn Logger) -> std::io::Result<ColorRegistry> {
    let mut registry = ColorRegistry::standard();

    if let Some(path) = matches.get_one::<String>("PALETTE") {
        let text = fs::read_to_string(path)?;
        if let Err(e) = registry.load_palette(&text, logger) {
            fail(format_args!("{}: {}", path, e));
        }
    }

    for definition in matches.get_many::<String>("DEFINE").into_iter().flatten() {
        if let Err(e) = registry.load_palette(definition, logger) {
            fail(format_args!("--define {}: {}", definition, e));
        }
    }

    Ok(registry)
}

fn read_input(matches: &ArgMatches) -> std::io::Result<String> {
    let mut lines: Vec<String> = matches
        .get_many::<String>("COLOR")
        .map_or_else(Vec::new, |vals| vals.cloned().collect());

    if matches.get_flag("STDIN") {
        let mut buffer = String::new();
        stdin().read_to_string(&mut buffer)?;
        lines.push(buffer);
    }

    Ok(lines.join("\n"))
}

fn main() -> std::io::Result<()> {
    let matches = cli().get_matches();

    let logger: &dyn Logger = if matches.get_flag("QUIET") {
        &NullLogger
    } else {
        &StdLogger
    };

    let registry = build_registry(&matches, logger)?;
    let input = read_input(&matches)?;

    let mode = match matches.get_one::<Format>("FORMAT") {
        Some(Format(mode)) => *mode,
        None => OutputMode::Text,
    };

    let mut out = stdout().lock();

    if let Some(other) = matches.get_one::<String>("IS") {
        let other = registry
            .parse(other)
            .unwrap_or_else(|e| fail(format_args!("--is {}: {}", other, e)));

        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let color = registry
                .parse(line)
                .unwrap_or_else(|e| fail(format_args!("{}: {}", line.trim(), e)));
            writeln!(out, "{}", color.is(&other))?;
        }

        return Ok(());
    }

    if matches.get_flag("CLASSIFY") {
        for line in input.lines().filter(|line| !line.trim().is_empty()) {
            let color = registry
                .parse(line)
                .unwrap_or_else(|e| fail(format_args!("{}: {}", line.trim(), e)));
            let class = if color.light() { "light" } else { "dark" };
            writeln!(out, "{} {}", color.format(mode), class)?;
        }

        return Ok(());
    }

    let options = Options::default()
        .registry(&registry)
        .logger(logger)
        .mode(mode)
        .quiet(matches.get_flag("QUIET"));

    let converted = convert(&input, &options).unwrap_or_else(|e| fail(e));

    if !converted.is_empty() {
        writeln!(out, "{}", converted)?;
    }

    Ok(())
}
