//! Core emitter struct and document assembly.

use scriptdefs_core::{Game, LibraryTable, ScriptConstant, ScriptDefs, ScriptFunction};

use crate::record::{self, FallbackSite};
use crate::report::{Document, EmitReport, Fallback, GroupCount};
use crate::{Config, EmitError, Result, library};

/// Indentation of container entries.
pub(crate) const ENTRY_INDENT: &str = "        ";

/// C# document builder.
///
/// One emitter produces one document; nothing is written anywhere until the
/// caller takes the finished text.
pub struct Emitter {
    pub(crate) config: Config,
    /// Containers opened so far (blank line separation)
    pub(crate) containers: usize,
    pub(crate) report: EmitReport,
    /// Output buffer
    pub(crate) output: String,
}

impl Emitter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            containers: 0,
            report: EmitReport::default(),
            output: String::new(),
        }
    }

    /// Emit the definitions document: constants for both games, then
    /// functions for both games.
    pub fn emit_defs(mut self, defs: &ScriptDefs) -> Result<Document> {
        let mut usings = vec!["System.Collections.Generic"];
        let common = self.config.common_namespace().map(str::to_string);
        usings.extend(common.as_deref());
        self.emit_prelude(&usings);

        let class = self.config.defs_class.clone();
        self.open_class(&class, "NWScript constant and function definitions for KOTOR and TSL.");
        for game in Game::ALL {
            self.emit_constants(game, &defs.game(game).constants)?;
        }
        for game in Game::ALL {
            self.emit_functions(game, &defs.game(game).functions)?;
        }
        self.close_class();

        Ok(self.finish())
    }

    /// Emit the include library document for both games.
    pub fn emit_library(mut self, kotor: &LibraryTable, tsl: &LibraryTable) -> Result<Document> {
        self.emit_prelude(&["System.Collections.Generic", "System.Text"]);

        let class = self.config.library_class.clone();
        self.open_class(&class, "NWScript include files for KOTOR and TSL.");
        self.emit_library_table(Game::Kotor, kotor)?;
        self.emit_library_table(Game::Tsl, tsl)?;
        self.close_class();

        Ok(self.finish())
    }

    fn emit_constants(&mut self, game: Game, constants: &[ScriptConstant]) -> Result<()> {
        let container = format!("{}_CONSTANTS", game.prefix());
        let summary = format!("{} script constants.", game.title());
        self.open_container(&container, &summary, "List<ScriptConstant>");

        for (index, constant) in constants.iter().enumerate() {
            require_name(&container, "constant", index, &constant.name)?;
            let rendered = record::constant(constant);
            self.note_fallbacks(&container, rendered.fallbacks)?;
            self.emit_entry(&format!("{ENTRY_INDENT}{}", rendered.text));
        }

        self.close_container(container, constants.len());
        Ok(())
    }

    fn emit_functions(&mut self, game: Game, functions: &[ScriptFunction]) -> Result<()> {
        let container = format!("{}_FUNCTIONS", game.prefix());
        let summary = format!("{} script functions.", game.title());
        self.open_container(&container, &summary, "List<ScriptFunction>");

        for (index, function) in functions.iter().enumerate() {
            require_name(&container, "function", index, &function.name)?;
            let scope = format!("{container}.{}", function.name);
            for (index, param) in function.params.iter().enumerate() {
                require_name(&scope, "parameter", index, &param.name)?;
            }

            let rendered = record::function(function, ENTRY_INDENT);
            self.note_fallbacks(&container, rendered.fallbacks)?;
            self.emit_entry(&rendered.text);
        }

        self.close_container(container, functions.len());
        Ok(())
    }

    fn emit_library_table(&mut self, game: Game, table: &LibraryTable) -> Result<()> {
        let container = format!("{}_LIBRARY", game.prefix());
        let summary = format!("{} include scripts, keyed by file name.", game.title());
        self.open_container(&container, &summary, "Dictionary<string, byte[]>");

        for (index, (name, content)) in table.sorted().into_iter().enumerate() {
            require_name(&container, "include file", index, name)?;
            self.emit_entry(&format!("{ENTRY_INDENT}{}", library::entry(name, content)));
        }

        self.close_container(container, table.len());
        Ok(())
    }

    fn note_fallbacks(&mut self, container: &str, sites: Vec<FallbackSite>) -> Result<()> {
        for site in sites {
            tracing::warn!(
                container,
                record = %site.record,
                datatype = %site.datatype,
                value = %site.value,
                "no literal rule for value, emitting it as-is"
            );

            if self.config.strict {
                return Err(EmitError::Fallback {
                    container: container.to_string(),
                    record: site.record,
                    datatype: site.datatype,
                    value: site.value,
                });
            }

            self.report.fallbacks.push(Fallback {
                container: container.to_string(),
                record: site.record,
                datatype: site.datatype,
                value: site.value,
            });
        }
        Ok(())
    }

    fn close_container(&mut self, container: String, entries: usize) {
        tracing::debug!(container = %container, entries, "emitted container");
        self.emit_container_end();
        self.report.groups.push(GroupCount { container, entries });
    }

    fn finish(self) -> Document {
        tracing::info!(
            entries = self.report.total(),
            fallbacks = self.report.fallbacks.len(),
            bytes = self.output.len(),
            "document ready"
        );
        Document {
            text: self.output,
            report: self.report,
        }
    }
}

fn require_name(container: &str, what: &'static str, index: usize, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(EmitError::MissingName {
            container: container.to_string(),
            what,
            index,
        });
    }
    Ok(())
}

/// Emit the constants/functions document.
pub fn emit_defs(defs: &ScriptDefs, config: Config) -> Result<Document> {
    Emitter::new(config).emit_defs(defs)
}

/// Emit the include library document.
pub fn emit_library(
    kotor: &LibraryTable,
    tsl: &LibraryTable,
    config: Config,
) -> Result<Document> {
    Emitter::new(config).emit_library(kotor, tsl)
}
