//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Definitions JSON file (positional, `-` for stdin).
pub fn input_path_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Definitions JSON file (use - for stdin)")
}

/// Directory of KOTOR include scripts (--kotor).
pub fn kotor_dir_arg() -> Arg {
    Arg::new("kotor")
        .long("kotor")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Directory of KOTOR .nss include files")
}

/// Directory of TSL include scripts (--tsl).
pub fn tsl_dir_arg() -> Arg {
    Arg::new("tsl")
        .long("tsl")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Directory of TSL .nss include files")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file (default: stdout)")
}

/// Target C# namespace (--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .long("namespace")
        .value_name("NS")
        .help("C# namespace of the generated class")
}

/// Generated class name (--class).
pub fn class_arg() -> Arg {
    Arg::new("class")
        .long("class")
        .value_name("NAME")
        .help("Name of the generated static class")
}

/// Treat fallback literals as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail when a value has no typed literal form")
}

/// Omit the auto-generated banner (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Omit the auto-generated banner comment")
}

/// Report format for check (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Report format")
}

/// Log verbosity (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .global(true)
        .help("Colorize log output")
}
