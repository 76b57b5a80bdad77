//! Emitter library — turns a data-model document into a tree of Zod DTO
//! source files.
//!
//! Pipeline: [`Generator`] populates a virtual [`vfs::Project`] (enums,
//! then per-model entity/specialized/index files, then the global index);
//! [`format_project`] reformats each file independently; [`writer::persist`]
//! writes the tree under the output root.

pub mod entity;
pub mod enums;
pub mod error;
pub mod expr;
pub mod format;
pub mod index;
pub mod naming;
pub mod plugin;
pub mod specialized;
pub mod typemap;
pub mod vfs;
pub mod writer;

pub use error::EmitError;
pub use format::{FormatConfig, FormatPolicy, Formatter, LineFormatter};
pub use vfs::{OverwritePolicy, Project, SourceFile};

use zodgen_model::Document;

/// Orchestrates the emitters over a document.
pub struct Generator<'a> {
    document: &'a Document,
}

impl<'a> Generator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Produce the full virtual file set for the document.
    ///
    /// Order: enums first, then one pass per model (entity schema,
    /// specialized schemas, per-model index), then the global index.
    pub fn generate(&self) -> Result<Project, EmitError> {
        let mut project = Project::new();

        enums::emit(&mut project, &self.document.enums)?;

        for model in &self.document.models {
            entity::emit(&mut project, model)?;
            specialized::emit_all(&mut project, model)?;
            index::emit_model_index(&mut project, model)?;
        }

        index::emit_global_index(&mut project, &self.document.models)?;

        Ok(project)
    }
}

/// Reformat every file in the project, each one independently.
///
/// Under [`FormatPolicy::Lenient`] a file the formatter rejects keeps its
/// unformatted text; under [`FormatPolicy::Strict`] the first failure
/// aborts the run. Files do not share state, so per-file ordering has no
/// observable effect.
pub fn format_project(
    project: &mut Project,
    formatter: &dyn Formatter,
    config: &FormatConfig,
    policy: FormatPolicy,
) -> Result<(), EmitError> {
    for file in project.files_mut() {
        file.organize_imports();
        let text = file.text();
        match formatter.format(&text, config) {
            Ok(formatted) => file.set_text(formatted),
            Err(err) => match policy {
                FormatPolicy::Lenient => {
                    tracing::warn!(
                        "formatting failed for {}, keeping unformatted text: {}",
                        file.path().display(),
                        err
                    );
                }
                FormatPolicy::Strict => {
                    return Err(EmitError::Format {
                        path: file.path().to_path_buf(),
                        source: err,
                    });
                }
            },
        }
    }
    Ok(())
}
