//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::check::{CheckArgs, ReportFormat};
use crate::commands::defs::DefsArgs;
use crate::commands::library::LibArgs;

/// Global logging flags, read from the top-level matches.
pub struct LogParams {
    pub verbose: u8,
    pub color: ColorChoice,
}

impl LogParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

pub struct DefsParams {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
    pub class: Option<String>,
    pub strict: bool,
    pub no_header: bool,
}

impl DefsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            namespace: m.get_one::<String>("namespace").cloned(),
            class: m.get_one::<String>("class").cloned(),
            strict: m.get_flag("strict"),
            no_header: m.get_flag("no_header"),
        }
    }
}

impl From<DefsParams> for DefsArgs {
    fn from(p: DefsParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            namespace: p.namespace,
            class: p.class,
            strict: p.strict,
            header: !p.no_header,
        }
    }
}

pub struct LibParams {
    pub kotor: PathBuf,
    pub tsl: PathBuf,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
    pub class: Option<String>,
    pub no_header: bool,
}

impl LibParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            kotor: m.get_one::<PathBuf>("kotor").cloned().unwrap_or_default(),
            tsl: m.get_one::<PathBuf>("tsl").cloned().unwrap_or_default(),
            output: m.get_one::<PathBuf>("output").cloned(),
            namespace: m.get_one::<String>("namespace").cloned(),
            class: m.get_one::<String>("class").cloned(),
            no_header: m.get_flag("no_header"),
        }
    }
}

impl From<LibParams> for LibArgs {
    fn from(p: LibParams) -> Self {
        Self {
            kotor: p.kotor,
            tsl: p.tsl,
            output: p.output,
            namespace: p.namespace,
            class: p.class,
            header: !p.no_header,
        }
    }
}

pub struct CheckParams {
    pub input: PathBuf,
    pub strict: bool,
    pub format: ReportFormat,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(|s| s.as_str()) {
            Some("json") => ReportFormat::Json,
            _ => ReportFormat::Text,
        };
        Self {
            input: m.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
            strict: m.get_flag("strict"),
            format,
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: p.input,
            strict: p.strict,
            format: p.format,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
