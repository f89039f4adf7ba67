use std::path::PathBuf;

use scriptdefs_codegen::{Config, EmitReport, emit_defs};

use super::input::load_defs;
use super::output::write_document;
use crate::error::Result;

pub struct DefsArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
    pub class: Option<String>,
    pub strict: bool,
    pub header: bool,
}

impl DefsArgs {
    fn config(&self) -> Config {
        let mut config = Config::new().strict(self.strict).header(self.header);
        if let Some(namespace) = &self.namespace {
            config = config.namespace(namespace);
        }
        if let Some(class) = &self.class {
            config = config.defs_class(class);
        }
        config
    }
}

pub fn run(args: DefsArgs) {
    match execute(&args) {
        Ok(report) => {
            eprintln!("generated {} definitions ({report})", report.total());
            if report.has_fallbacks() {
                eprintln!(
                    "warning: {} value(s) emitted without a typed literal; run `scriptdefs check` for details",
                    report.fallbacks.len()
                );
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Load, emit and write the definitions document.
pub fn execute(args: &DefsArgs) -> Result<EmitReport> {
    let defs = load_defs(&args.input)?;
    let doc = emit_defs(&defs, args.config())?;
    write_document(&doc.text, args.output.as_deref())?;
    Ok(doc.report)
}
