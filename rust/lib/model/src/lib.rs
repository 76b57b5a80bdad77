//! Data-model document IR.
//!
//! A [`Document`] is the parsed form of a model-definition file: ordered
//! models (entities with fields) and enums. zodgen does not parse the
//! definition language itself — documents arrive already parsed, as JSON,
//! through the [`DocumentSource`] seam in [`source`].

pub mod source;

use serde::{Deserialize, Serialize};

pub use source::{DocumentSource, JsonSource, ModelError};

/// A parsed data-model document. Read once, immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub enums: Vec<EnumDef>,
    /// Host-provided generator block, if the document carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorConfig>,
}

impl Document {
    /// Look up a model by name.
    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }
}

/// Generator settings some hosts embed in the document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Output directory for generated files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// One entity definition. Maps to one generated schema family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    pub fields: Vec<Field>,
}

impl Model {
    /// Fields holding scalar or enum values (everything except relations).
    pub fn scalar_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_relation())
    }

    /// Fields referencing other models.
    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_relation())
    }
}

/// One attribute of a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,

    /// Scalar type tag, enum name, or related model name.
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub kind: FieldKind,

    pub is_required: bool,

    #[serde(default)]
    pub is_list: bool,

    /// Non-empty iff the field references another model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<String>,

    /// May carry an inline marker tag such as `@create`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Field {
    pub fn is_relation(&self) -> bool {
        self.relation_name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Whether the field's documentation contains the given marker tag.
    pub fn has_doc_tag(&self, tag: &str) -> bool {
        self.documentation.as_deref().is_some_and(|d| d.contains(tag))
    }
}

/// What a field's type tag names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Scalar,
    Enum,
    Object,
}

/// A named set of string-valued members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<String>,
}
