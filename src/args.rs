use clap::{arg, command, value_parser, ArgAction, ArgMatches, Command};

use crate::render::Format;

/// What a single invocation computes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Factorial,
    Biggest,
    Choose,
    Triangle,
}

#[derive(Debug)]
pub struct Args {
    pub depth: u64,
    pub k: Option<u64>,
    pub mode: Mode,
    pub format: Format,
    pub headers: bool,
    pub only: bool,
    pub width: usize,
}

pub fn command() -> Command<'static> {
    command!()
        .arg(
            arg!(depth: <DEPTH> "Depth of the triangle, or the argument of -y, -b and -c")
                .value_parser(value_parser!(u64)),
        )
        .arg(arg!(k: [K] "Second argument of -c").value_parser(value_parser!(u64)))
        .arg(arg!(-n --headers "Print row headers in triangle").action(ArgAction::SetTrue))
        .arg(
            arg!(-w --width <WIDTH> "Min width for each cell in text format, 0 sizes to the biggest number plus one")
                .required(false)
                .value_parser(value_parser!(usize))
                .default_value("0"),
        )
        .arg(
            arg!(-f --format <FORMAT> "Format to output")
                .required(false)
                .value_parser(Format::NAMES)
                .default_value("text"),
        )
        .arg(arg!(-o --only "Only output the row at 'depth'").action(ArgAction::SetTrue))
        .arg(arg!(-y --factorial "Calculate the factorial of 'depth'").action(ArgAction::SetTrue))
        .arg(
            arg!(-b --biggest "Return the maximum value in the triangle: nchoosek(depth, depth/2)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            arg!(-c --choosek "Accept a second argument k and calculate nchoosek(depth, k)")
                .action(ArgAction::SetTrue),
        )
}

fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}

impl Args {
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    pub fn from_matches(matches: &ArgMatches) -> Self {
        let mode = if flag(matches, "factorial") {
            Mode::Factorial
        } else if flag(matches, "biggest") {
            Mode::Biggest
        } else if flag(matches, "choosek") {
            Mode::Choose
        } else {
            Mode::Triangle
        };

        let format = matches
            .get_one::<String>("format")
            .and_then(|name| Format::from_name(name))
            .unwrap_or(Format::Text);

        Self {
            depth: *matches.get_one::<u64>("depth").expect("required by clap"),
            k: matches.get_one::<u64>("k").copied(),
            mode,
            format,
            headers: flag(matches, "headers"),
            only: flag(matches, "only"),
            width: *matches.get_one::<usize>("width").expect("defaulted by clap"),
        }
    }
}
