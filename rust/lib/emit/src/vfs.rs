//! Virtual file set.
//!
//! Generated files are built in memory as structured declarations and
//! rendered to text on demand. Each `create_file` call carries an explicit
//! overwrite policy; creating a `CreateNew` file at an existing path is a
//! configuration error, never a silent overwrite.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::EmitError;

/// What to do when a path was already created during this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Replace any file previously created at the same path.
    Overwrite,
    /// The path must not have been created yet.
    CreateNew,
}

/// Ordered collection of virtual source files, keyed by relative path.
#[derive(Debug, Default)]
pub struct Project {
    files: Vec<SourceFile>,
    by_path: HashMap<PathBuf, usize>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a file handle at `path` (relative to the output root).
    pub fn create_file(
        &mut self,
        path: impl Into<PathBuf>,
        policy: OverwritePolicy,
    ) -> Result<&mut SourceFile, EmitError> {
        let path = path.into();
        if let Some(&idx) = self.by_path.get(&path) {
            return match policy {
                OverwritePolicy::Overwrite => {
                    self.files[idx] = SourceFile::new(path);
                    Ok(&mut self.files[idx])
                }
                OverwritePolicy::CreateNew => Err(EmitError::DuplicateFile { path }),
            };
        }
        let idx = self.files.len();
        self.by_path.insert(path.clone(), idx);
        self.files.push(SourceFile::new(path));
        Ok(&mut self.files[idx])
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&SourceFile> {
        let idx = *self.by_path.get(path.as_ref())?;
        Some(&self.files[idx])
    }

    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut SourceFile> {
        let idx = *self.by_path.get(path.as_ref())?;
        Some(&mut self.files[idx])
    }

    /// All handles, in creation order.
    pub fn files(&self) -> impl Iterator<Item = &SourceFile> {
        self.files.iter()
    }

    pub fn files_mut(&mut self) -> impl Iterator<Item = &mut SourceFile> {
        self.files.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub specifier: String,
    pub named: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDecl {
    pub specifier: String,
    /// `None` renders a star re-export.
    pub named: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
enum Item {
    Raw(String),
    Const {
        doc: Option<String>,
        name: String,
        init: String,
    },
    TypeAlias {
        name: String,
        ty: String,
    },
}

/// One in-memory generated source file.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    imports: Vec<ImportDecl>,
    exports: Vec<ExportDecl>,
    items: Vec<Item>,
    /// Set by `set_text` (the formatting pass); cleared by any edit.
    text_override: Option<String>,
}

impl SourceFile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            imports: Vec::new(),
            exports: Vec::new(),
            items: Vec::new(),
            text_override: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn add_import(&mut self, specifier: impl Into<String>, named: Vec<String>) {
        self.text_override = None;
        self.imports.push(ImportDecl {
            specifier: specifier.into(),
            named,
        });
    }

    pub fn add_export(&mut self, specifier: impl Into<String>, named: Option<Vec<String>>) {
        self.text_override = None;
        self.exports.push(ExportDecl {
            specifier: specifier.into(),
            named,
        });
    }

    /// Exported const declaration, with optional leading doc-comment trivia.
    pub fn add_exported_const(
        &mut self,
        name: impl Into<String>,
        init: impl Into<String>,
        doc: Option<String>,
    ) {
        self.text_override = None;
        self.items.push(Item::Const {
            doc,
            name: name.into(),
            init: init.into(),
        });
    }

    /// Exported type alias bound to an expression string.
    pub fn add_type_alias(&mut self, name: impl Into<String>, ty: impl Into<String>) {
        self.text_override = None;
        self.items.push(Item::TypeAlias {
            name: name.into(),
            ty: ty.into(),
        });
    }

    /// Append raw statement text verbatim.
    pub fn add_statement(&mut self, raw: impl Into<String>) {
        self.text_override = None;
        self.items.push(Item::Raw(raw.into()));
    }

    /// Merge duplicate import specifiers and drop repeated symbols,
    /// keeping first-seen order.
    pub fn organize_imports(&mut self) {
        let mut merged: Vec<ImportDecl> = Vec::new();
        for import in self.imports.drain(..) {
            match merged.iter_mut().find(|m| m.specifier == import.specifier) {
                Some(existing) => {
                    for symbol in import.named {
                        if !existing.named.contains(&symbol) {
                            existing.named.push(symbol);
                        }
                    }
                }
                None => merged.push(import),
            }
        }
        self.imports = merged;
    }

    /// Full text: the replaced text if the formatting pass set one,
    /// otherwise a fresh rendering of the declarations.
    pub fn text(&self) -> String {
        match &self.text_override {
            Some(text) => text.clone(),
            None => self.render(),
        }
    }

    /// Replace the full text (used by the formatting pass).
    pub fn set_text(&mut self, text: String) {
        self.text_override = Some(text);
    }

    fn render(&self) -> String {
        let mut blocks: Vec<String> = Vec::new();

        if !self.imports.is_empty() {
            let mut block = String::new();
            for import in &self.imports {
                if import.named.is_empty() {
                    block.push_str(&format!("import '{}';\n", import.specifier));
                } else {
                    block.push_str(&format!(
                        "import {{ {} }} from '{}';\n",
                        import.named.join(", "),
                        import.specifier
                    ));
                }
            }
            blocks.push(block);
        }

        for item in &self.items {
            blocks.push(render_item(item));
        }

        if !self.exports.is_empty() {
            let mut block = String::new();
            for export in &self.exports {
                match &export.named {
                    Some(named) => block.push_str(&format!(
                        "export {{ {} }} from '{}';\n",
                        named.join(", "),
                        export.specifier
                    )),
                    None => block.push_str(&format!("export * from '{}';\n", export.specifier)),
                }
            }
            blocks.push(block);
        }

        let mut out = blocks.join("\n");
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out
    }
}

fn render_item(item: &Item) -> String {
    match item {
        Item::Raw(raw) => {
            let mut out = raw.clone();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out
        }
        Item::Const { doc, name, init } => {
            let mut out = String::new();
            if let Some(doc) = doc {
                out.push_str("/**\n");
                for line in doc.lines() {
                    out.push_str(&format!(" * {}\n", line));
                }
                out.push_str(" */\n");
            }
            out.push_str(&format!("export const {} = {};\n", name, init));
            out
        }
        Item::TypeAlias { name, ty } => format!("export type {} = {};\n", name, ty),
    }
}
