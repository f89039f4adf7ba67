//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("scriptdefs")
        .about("Emit NWScript reference tables as C# static data")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .arg(color_arg())
        .subcommand(defs_command())
        .subcommand(lib_command())
        .subcommand(check_command())
}

/// Emit the constants and functions document.
pub fn defs_command() -> Command {
    Command::new("defs")
        .about("Emit constant and function definitions")
        .override_usage(
            "\
  scriptdefs defs <INPUT> [-o <FILE>]
  scriptdefs defs - < defs.json",
        )
        .after_help(
            r#"EXAMPLES:
  scriptdefs defs defs.json                        # print to stdout
  scriptdefs defs defs.json -o ScriptDefs.cs       # write file
  scriptdefs defs defs.json --strict -o out.cs     # fail on untyped values
  scriptdefs defs defs.json --namespace Foo.Script # custom namespace"#,
        )
        .arg(input_path_arg())
        .arg(output_file_arg())
        .arg(namespace_arg())
        .arg(class_arg())
        .arg(strict_arg())
        .arg(no_header_arg())
}

/// Emit the include library document.
pub fn lib_command() -> Command {
    Command::new("lib")
        .about("Emit include script libraries")
        .override_usage("  scriptdefs lib --kotor <DIR> --tsl <DIR> [-o <FILE>]")
        .after_help(
            r#"EXAMPLES:
  scriptdefs lib --kotor k1/ --tsl k2/                 # print to stdout
  scriptdefs lib --kotor k1/ --tsl k2/ -o ScriptLib.cs # write file"#,
        )
        .arg(kotor_dir_arg())
        .arg(tsl_dir_arg())
        .arg(output_file_arg())
        .arg(namespace_arg())
        .arg(class_arg())
        .arg(no_header_arg())
}

/// Validate a definitions file without writing anything.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate definitions and report fallback literals")
        .override_usage("  scriptdefs check <INPUT> [--strict] [--format <FORMAT>]")
        .after_help(
            r#"EXAMPLES:
  scriptdefs check defs.json                 # counts and fallback hits
  scriptdefs check defs.json --strict        # exit 1 on fallback hits
  scriptdefs check defs.json --format json   # machine-readable report"#,
        )
        .arg(input_path_arg())
        .arg(strict_arg())
        .arg(format_arg())
}
