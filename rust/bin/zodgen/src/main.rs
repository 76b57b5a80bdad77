//! `zodgen` — generate Zod DTO schema files from a data-model document.
//!
//! Reads a JSON model document, emits one schema family per model plus
//! enum modules and barrel indexes under the output directory.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use zodgen_emit::format::{FormatConfig, FormatPolicy};
use zodgen_emit::plugin::{self, GenerateRequest};
use zodgen_model::{Document, DocumentSource, JsonSource};

#[derive(Parser, Debug)]
#[command(name = "zodgen", about = "Generate Zod DTO schemas from a model document", version)]
struct Args {
    /// Input model document (JSON).
    #[arg(short, long, required_unless_present = "manifest")]
    input: Option<PathBuf>,

    /// Output directory. Falls back to the document's generator block.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Abort on formatting errors instead of keeping unformatted output.
    #[arg(long)]
    strict_format: bool,

    /// Print the generator manifest as JSON and exit.
    #[arg(long)]
    manifest: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();

    if args.manifest {
        println!("{}", serde_json::to_string_pretty(&plugin::manifest())?);
        return Ok(());
    }

    let Some(input) = args.input else {
        anyhow::bail!("--input is required");
    };

    let text = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    info!("parsing model document {}", input.display());
    let document = JsonSource.load(&text, &[])?;

    let output = resolve_output(args.output, &document);
    let policy = if args.strict_format {
        FormatPolicy::Strict
    } else {
        FormatPolicy::Lenient
    };

    let request = GenerateRequest { document, output };
    let count = plugin::generate(&request, &FormatConfig::default(), policy)?;

    info!("generated {} files", count);
    Ok(())
}

/// CLI flag first, then the document's generator block.
fn resolve_output(flag: Option<PathBuf>, document: &Document) -> Option<PathBuf> {
    flag.or_else(|| {
        document
            .generator
            .as_ref()
            .and_then(|g| g.output.clone())
            .map(PathBuf::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use zodgen_model::GeneratorConfig;

    fn document(output: Option<&str>) -> Document {
        Document {
            models: vec![],
            enums: vec![],
            generator: output.map(|o| GeneratorConfig {
                output: Some(o.to_string()),
            }),
        }
    }

    #[test]
    fn flag_wins_over_document() {
        let resolved = resolve_output(Some(PathBuf::from("cli-out")), &document(Some("doc-out")));
        assert_eq!(resolved, Some(PathBuf::from("cli-out")));
    }

    #[test]
    fn document_output_is_the_fallback() {
        let resolved = resolve_output(None, &document(Some("doc-out")));
        assert_eq!(resolved, Some(PathBuf::from("doc-out")));
    }

    #[test]
    fn no_output_resolves_to_none() {
        assert_eq!(resolve_output(None, &document(None)), None);
    }
}
