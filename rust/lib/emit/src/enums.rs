//! Enum emitter.
//!
//! One constant-object module per enum plus a shared `enums/index.ts`
//! collecting named re-exports in document order. Member values equal
//! member names (string enums).

use zodgen_model::EnumDef;

use crate::error::EmitError;
use crate::naming;
use crate::vfs::{OverwritePolicy, Project};

pub const ENUMS_DIR: &str = "enums";

pub fn emit(project: &mut Project, enums: &[EnumDef]) -> Result<(), EmitError> {
    // The index exists even for documents without enums.
    let index_path = format!("{}/index.ts", ENUMS_DIR);
    project.create_file(&index_path, OverwritePolicy::Overwrite)?;

    for enum_def in enums {
        let file = project.create_file(
            format!("{}/{}.ts", ENUMS_DIR, naming::enum_stem(&enum_def.name)),
            OverwritePolicy::Overwrite,
        )?;
        file.add_statement(enum_module(enum_def));
    }

    let index = project
        .get_mut(&index_path)
        .ok_or_else(|| EmitError::Config("enums index file missing".to_string()))?;
    for enum_def in enums {
        index.add_export(
            format!("./{}", naming::enum_stem(&enum_def.name)),
            Some(vec![enum_def.name.clone()]),
        );
    }

    Ok(())
}

/// Runtime constant object plus the union type of its values.
fn enum_module(def: &EnumDef) -> String {
    let mut out = format!("export const {} = {{\n", def.name);
    for member in &def.values {
        out.push_str(&format!("  {}: \"{}\",\n", member, member));
    }
    out.push_str("} as const;\n\n");
    out.push_str(&format!(
        "export type {} = (typeof {})[keyof typeof {}];\n",
        def.name, def.name, def.name
    ));
    out
}
