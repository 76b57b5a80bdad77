//! Entity schema builder.
//!
//! One file per model: the base object schema over non-relation fields and
//! the complete schema extending it with relation fields, each with an
//! inferred-type alias.

use zodgen_model::{Field, FieldKind, Model};

use crate::error::EmitError;
use crate::expr::{Printer, ZodPrinter};
use crate::naming;
use crate::typemap;
use crate::vfs::{OverwritePolicy, Project, SourceFile};

pub fn emit(project: &mut Project, model: &Model) -> Result<(), EmitError> {
    let path = format!(
        "{}/{}.ts",
        naming::dto_dir(&model.name),
        naming::entity_stem(&model.name)
    );
    let file = project.create_file(path, OverwritePolicy::Overwrite)?;

    file.add_import("zod", vec!["z".to_string()]);
    add_reference_imports(file, model);

    let printer = ZodPrinter;
    let scalars: Vec<&Field> = model.scalar_fields().collect();
    let relations: Vec<&Field> = model.relation_fields().collect();

    let base_symbol = naming::dto_symbol(&model.name);
    file.add_exported_const(
        &base_symbol,
        wrap("z.object", &field_entries(&scalars, &printer)),
        model.documentation.clone(),
    );
    file.add_type_alias(&base_symbol, format!("z.infer<typeof {}>", base_symbol));

    let complete_symbol = naming::complete_symbol(&model.name);
    file.add_exported_const(
        &complete_symbol,
        wrap(
            &format!("{}.extend", base_symbol),
            &field_entries(&relations, &printer),
        ),
        None,
    );
    file.add_type_alias(
        &complete_symbol,
        format!("z.infer<typeof {}>", complete_symbol),
    );

    Ok(())
}

/// Imports for schemas and enums referenced from this model's fields.
///
/// A related model's base schema lives two levels up in its own dto folder;
/// enums live in the shared enums index. Self-references resolve in-file
/// and import nothing. Duplicates are merged by the organize pass.
fn add_reference_imports(file: &mut SourceFile, model: &Model) {
    for field in model.relation_fields() {
        if field.ty == model.name {
            continue;
        }
        file.add_import(
            format!(
                "../../{}/{}",
                naming::dto_dir(&field.ty),
                naming::entity_stem(&field.ty)
            ),
            vec![naming::dto_symbol(&field.ty)],
        );
    }
    for field in model.scalar_fields() {
        if field.kind == FieldKind::Enum {
            file.add_import("../../enums", vec![field.ty.clone()]);
        }
    }
}

/// One `name: expression,` entry per field, field documentation rendered as
/// a comment immediately above the entry.
fn field_entries(fields: &[&Field], printer: &dyn Printer) -> String {
    let mut out = String::new();
    for field in fields {
        if let Some(doc) = &field.documentation {
            out.push_str(&format!("  /** {} */\n", doc));
        }
        out.push_str(&format!(
            "  {}: {},\n",
            field.name,
            printer.print(&typemap::map_field(field, true))
        ));
    }
    out
}

fn wrap(callee: &str, entries: &str) -> String {
    if entries.is_empty() {
        format!("{}({{}})", callee)
    } else {
        format!("{}({{\n{}}})", callee, entries)
    }
}
