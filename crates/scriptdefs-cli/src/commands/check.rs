use std::fmt::Write;
use std::path::PathBuf;

use scriptdefs_codegen::{Config, EmitReport, emit_defs};

use super::input::load_defs;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub struct CheckArgs {
    pub input: PathBuf,
    pub strict: bool,
    pub format: ReportFormat,
}

pub fn run(args: CheckArgs) {
    let report = match execute(&args) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    print!("{}", render_report(&report, args.format));

    if args.strict && report.has_fallbacks() {
        eprintln!(
            "error: {} value(s) have no typed literal form",
            report.fallbacks.len()
        );
        std::process::exit(1);
    }
}

/// Dry-run the definitions pass.
///
/// Always runs leniently so every fallback is collected; `--strict` is
/// applied to the finished report.
pub fn execute(args: &CheckArgs) -> Result<EmitReport> {
    let defs = load_defs(&args.input)?;
    let doc = emit_defs(&defs, Config::new())?;
    Ok(doc.report)
}

pub fn render_report(report: &EmitReport, format: ReportFormat) -> String {
    match format {
        ReportFormat::Text => render_text(report),
        ReportFormat::Json => render_json(report),
    }
}

fn render_text(report: &EmitReport) -> String {
    let width = report
        .groups
        .iter()
        .map(|g| g.container.len())
        .max()
        .unwrap_or(0)
        .max("fallbacks".len());

    let mut out = String::new();
    for group in &report.groups {
        let _ = writeln!(out, "{:<width$}  {}", group.container, group.entries);
    }
    let _ = writeln!(out, "{:<width$}  {}", "total", report.total());
    let _ = writeln!(out, "{:<width$}  {}", "fallbacks", report.fallbacks.len());
    for fallback in &report.fallbacks {
        let _ = writeln!(out, "  {fallback}");
    }
    out
}

fn render_json(report: &EmitReport) -> String {
    let groups: Vec<_> = report
        .groups
        .iter()
        .map(|g| serde_json::json!({ "container": g.container, "entries": g.entries }))
        .collect();
    let fallbacks: Vec<_> = report
        .fallbacks
        .iter()
        .map(|f| {
            serde_json::json!({
                "container": f.container,
                "record": f.record,
                "type": f.datatype.as_str(),
                "value": f.value,
            })
        })
        .collect();

    let value = serde_json::json!({
        "groups": groups,
        "total": report.total(),
        "fallbacks": fallbacks,
    });
    let mut text = serde_json::to_string_pretty(&value).unwrap_or_default();
    text.push('\n');
    text
}
