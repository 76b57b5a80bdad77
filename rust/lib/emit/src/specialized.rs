//! Specialized schema builder.
//!
//! Derives create/update/list variants from a model's base schema. The
//! derivation table is fixed: create and update pick the fields carrying
//! the matching documentation tag, list wraps the whole entity in an array.

use zodgen_model::Model;

use crate::error::EmitError;
use crate::naming;
use crate::vfs::{OverwritePolicy, Project};

#[derive(Debug, Clone, Copy)]
enum Transform {
    Pick,
    Array,
}

#[derive(Debug, Clone, Copy)]
struct Specialization {
    prefix: Option<&'static str>,
    suffix: Option<&'static str>,
    filter_tag: Option<&'static str>,
    transform: Transform,
}

const SPECIALIZATIONS: [Specialization; 3] = [
    Specialization {
        prefix: Some("create"),
        suffix: Some("request"),
        filter_tag: Some("@create"),
        transform: Transform::Pick,
    },
    Specialization {
        prefix: Some("update"),
        suffix: Some("request"),
        filter_tag: Some("@update"),
        transform: Transform::Pick,
    },
    Specialization {
        prefix: Some("list"),
        suffix: Some("response"),
        filter_tag: None,
        transform: Transform::Array,
    },
];

/// Emit every specialization for one model.
pub fn emit_all(project: &mut Project, model: &Model) -> Result<(), EmitError> {
    for spec in &SPECIALIZATIONS {
        emit_one(project, model, spec)?;
    }
    Ok(())
}

fn emit_one(project: &mut Project, model: &Model, spec: &Specialization) -> Result<(), EmitError> {
    let path = format!(
        "{}/{}.ts",
        naming::dto_dir(&model.name),
        naming::specialized_stem(&model.name, spec.prefix, spec.suffix)
    );

    // Specialized files are created exactly once per run; a second creation
    // at the same path is a configuration error.
    let file = project.create_file(path, OverwritePolicy::CreateNew)?;

    let base_symbol = naming::dto_symbol(&model.name);
    file.add_import("zod", vec!["z".to_string()]);
    file.add_import(
        format!("./{}", naming::entity_stem(&model.name)),
        vec![base_symbol.clone()],
    );

    let symbol = naming::specialized_symbol(&model.name, spec.prefix, spec.suffix);
    let init = match spec.transform {
        Transform::Array => format!("{}.array()", base_symbol),
        Transform::Pick => {
            let mut keys = String::new();
            if let Some(tag) = spec.filter_tag {
                for field in model.fields.iter().filter(|f| f.has_doc_tag(tag)) {
                    keys.push_str(&format!("  {}: true,\n", field.name));
                }
            }
            // An empty selection is accepted: pick of nothing.
            if keys.is_empty() {
                format!("{}.pick({{}})", base_symbol)
            } else {
                format!("{}.pick({{\n{}}})", base_symbol, keys)
            }
        }
    };

    file.add_exported_const(&symbol, init, None);
    file.add_type_alias(&symbol, format!("z.infer<typeof {}>", symbol));

    Ok(())
}
