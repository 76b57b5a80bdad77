//! File, folder, and symbol naming conventions.
//!
//! Every generated artifact name comes from one of these functions, and the
//! index emitters derive module specifiers from the same table, so path and
//! symbol derivation cannot drift apart.

use convert_case::{Case, Casing};

pub fn kebab(name: &str) -> String {
    name.to_case(Case::Kebab)
}

/// Per-model folder: `<kebab(model)>/dto`.
pub fn dto_dir(model: &str) -> String {
    format!("{}/dto", kebab(model))
}

/// Base schema file stem: `<kebab(model)>.dto`.
pub fn entity_stem(model: &str) -> String {
    format!("{}.dto", kebab(model))
}

/// Specialized file stem: `<prefix>-<kebab(model)>-<suffix>.dto`, or the
/// plain entity stem when there is no prefix.
pub fn specialized_stem(model: &str, prefix: Option<&str>, suffix: Option<&str>) -> String {
    let Some(prefix) = prefix else {
        return entity_stem(model);
    };
    let mut stem = format!("{}-{}", prefix, kebab(model));
    if let Some(suffix) = suffix {
        stem.push('-');
        stem.push_str(suffix);
    }
    format!("{}.dto", stem)
}

/// Enum module file stem.
pub fn enum_stem(name: &str) -> String {
    kebab(name)
}

/// Base schema symbol: `<Model>Dto`.
pub fn dto_symbol(model: &str) -> String {
    format!("{}Dto", model)
}

/// Complete schema symbol: `<Model>CompleteDto`.
pub fn complete_symbol(model: &str) -> String {
    format!("{}CompleteDto", model)
}

/// Specialized schema symbol, e.g. `CreateUserRequestDto`.
pub fn specialized_symbol(model: &str, prefix: Option<&str>, suffix: Option<&str>) -> String {
    let mut name = String::new();
    if let Some(prefix) = prefix {
        name.push_str(&capitalize(prefix));
    }
    name.push_str(model);
    if let Some(suffix) = suffix {
        name.push_str(&capitalize(suffix));
    }
    name.push_str("Dto");
    name
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
