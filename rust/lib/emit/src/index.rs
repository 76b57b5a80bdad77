//! Barrel file emitter.
//!
//! Module specifiers come from the same naming table the emitters used to
//! create the files, so the re-exports cannot drift from the tree layout.

use zodgen_model::Model;

use crate::error::EmitError;
use crate::naming;
use crate::vfs::{OverwritePolicy, Project};

/// Per-model `dto/index.ts`, re-exporting the four generated schema files.
pub fn emit_model_index(project: &mut Project, model: &Model) -> Result<(), EmitError> {
    let path = format!("{}/index.ts", naming::dto_dir(&model.name));
    let file = project.create_file(path, OverwritePolicy::Overwrite)?;

    let stems = [
        naming::entity_stem(&model.name),
        naming::specialized_stem(&model.name, Some("create"), Some("request")),
        naming::specialized_stem(&model.name, Some("update"), Some("request")),
        naming::specialized_stem(&model.name, Some("list"), Some("response")),
    ];
    for stem in stems {
        file.add_export(format!("./{}", stem), None);
    }

    Ok(())
}

/// Global `index.ts`: enums first, then each distinct model's dto folder in
/// first-seen order.
pub fn emit_global_index(project: &mut Project, models: &[Model]) -> Result<(), EmitError> {
    let file = project.create_file("index.ts", OverwritePolicy::Overwrite)?;
    file.add_export("./enums", None);

    let mut seen: Vec<&str> = Vec::new();
    for model in models {
        if seen.contains(&model.name.as_str()) {
            continue;
        }
        seen.push(&model.name);
        file.add_export(format!("./{}", naming::dto_dir(&model.name)), None);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(name: &str) -> Model {
        Model {
            name: name.to_string(),
            documentation: None,
            fields: vec![],
        }
    }

    #[test]
    fn model_index_reexports_all_four_files() {
        let mut project = Project::new();
        emit_model_index(&mut project, &model("BlogPost")).unwrap();

        let text = project.get("blog-post/dto/index.ts").unwrap().text();
        assert_eq!(
            text,
            "export * from './blog-post.dto';\n\
             export * from './create-blog-post-request.dto';\n\
             export * from './update-blog-post-request.dto';\n\
             export * from './list-blog-post-response.dto';\n"
        );
    }

    #[test]
    fn global_index_lists_enums_then_models() {
        let mut project = Project::new();
        emit_global_index(&mut project, &[model("User"), model("Post")]).unwrap();

        let text = project.get("index.ts").unwrap().text();
        assert_eq!(
            text,
            "export * from './enums';\n\
             export * from './user/dto';\n\
             export * from './post/dto';\n"
        );
    }

    #[test]
    fn global_index_deduplicates_repeated_models() {
        let mut project = Project::new();
        emit_global_index(
            &mut project,
            &[model("User"), model("Post"), model("User")],
        )
        .unwrap();

        let text = project.get("index.ts").unwrap().text();
        assert_eq!(text.matches("./user/dto").count(), 1);
    }
}
