//! Fixed C# boilerplate around the emitted tables.

use super::emitter::Emitter;

impl Emitter {
    /// Banner, using directives and the file-scoped namespace.
    pub(crate) fn emit_prelude(&mut self, usings: &[&str]) {
        if self.config.header {
            self.output.push_str(
                "// <auto-generated>\n\
                 //     This file was generated by scriptdefs. Do not edit it by hand.\n\
                 // </auto-generated>\n\n",
            );
        }

        for using in usings {
            self.output.push_str(&format!("using {using};\n"));
        }
        self.output
            .push_str(&format!("\nnamespace {};\n\n", self.config.namespace));
    }

    pub(crate) fn open_class(&mut self, name: &str, summary: &str) {
        self.output.push_str(&format!(
            "/// <summary>\n/// {summary}\n/// </summary>\npublic static class {name}\n{{\n"
        ));
    }

    pub(crate) fn close_class(&mut self) {
        self.output.push_str("}\n");
    }

    /// Doc comment plus `public static readonly <ty> NAME = new()` and `{`.
    pub(crate) fn open_container(&mut self, name: &str, summary: &str, ty: &str) {
        if self.containers > 0 {
            self.output.push('\n');
        }
        self.containers += 1;

        self.output.push_str(&format!(
            "    /// <summary>\n\
             \x20   /// {summary}\n\
             \x20   /// </summary>\n\
             \x20   public static readonly {ty} {name} = new()\n\
             \x20   {{\n"
        ));
    }

    /// One container entry; `text` carries its own indentation.
    pub(crate) fn emit_entry(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push_str(",\n");
    }

    pub(crate) fn emit_container_end(&mut self) {
        self.output.push_str("    };\n");
    }
}
