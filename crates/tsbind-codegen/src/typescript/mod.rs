use tsbind_core::DeclarationRegistry;

/// Renders a declaration registry into an ambient TypeScript declaration
/// block.
pub struct DeclarationGenerator;

impl DeclarationGenerator {
    /// Create a new declaration generator.
    pub fn new() -> Self {
        Self
    }

    /// Render the registry as the contents of a `.d.ts` file.
    ///
    /// Members are emitted name-sorted, constants before functions, so the
    /// output is stable across runs.
    pub fn render(&self, registry: &DeclarationRegistry) -> String {
        let mut out = String::from("// Auto-generated by TSBIND - DO NOT EDIT\n");

        let mut constants = registry.all_constants();
        constants.sort_by(|a, b| a.name.cmp(&b.name));

        let mut functions = registry.all_functions();
        functions.sort_by(|a, b| a.name.cmp(&b.name));

        for constant in &constants {
            out.push('\n');
            if let Some(doc) = &constant.doc {
                push_doc_comment(&mut out, doc);
            }
            out.push_str(&constant.to_declaration());
            out.push('\n');
        }

        for function in &functions {
            out.push('\n');
            if let Some(doc) = &function.doc {
                push_doc_comment(&mut out, doc);
            }
            out.push_str(&function.to_declaration());
            out.push('\n');
        }

        out
    }
}

impl Default for DeclarationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Emit a `/** ... */` block for a member's documentation.
fn push_doc_comment(out: &mut String, doc: &str) {
    out.push_str("/**\n");
    for line in doc.lines() {
        out.push_str(" * ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(" */\n");
}

/// Code generation error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}
