use std::path::PathBuf;

use scriptdefs_codegen::{Config, EmitReport, emit_library};

use super::input::load_library;
use super::output::write_document;
use crate::error::Result;

pub struct LibArgs {
    pub kotor: PathBuf,
    pub tsl: PathBuf,
    pub output: Option<PathBuf>,
    pub namespace: Option<String>,
    pub class: Option<String>,
    pub header: bool,
}

impl LibArgs {
    fn config(&self) -> Config {
        let mut config = Config::new().header(self.header);
        if let Some(namespace) = &self.namespace {
            config = config.namespace(namespace);
        }
        if let Some(class) = &self.class {
            config = config.library_class(class);
        }
        config
    }
}

pub fn run(args: LibArgs) {
    match execute(&args) {
        Ok(report) => eprintln!("generated {} include files ({report})", report.total()),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Load both include directories, emit and write the library document.
pub fn execute(args: &LibArgs) -> Result<EmitReport> {
    let kotor = load_library(&args.kotor)?;
    let tsl = load_library(&args.tsl)?;
    let doc = emit_library(&kotor, &tsl, args.config())?;
    write_document(&doc.text, args.output.as_deref())?;
    Ok(doc.report)
}
