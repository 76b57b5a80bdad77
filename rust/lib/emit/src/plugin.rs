//! Plugin-host entry points.
//!
//! A host invokes two callbacks: a manifest request (generator name,
//! version, default output path) and a generate request (document + output
//! specifier). The CLI binary is one such host; a process-protocol shim
//! would be another.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{error, info};

use zodgen_model::Document;

use crate::error::EmitError;
use crate::format::{FormatConfig, FormatPolicy, LineFormatter};
use crate::{format_project, writer, Generator};

pub const GENERATOR_NAME: &str = "zodgen";

/// Generator identity reported to the host.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub pretty_name: &'static str,
    pub version: &'static str,
    pub default_output: &'static str,
}

pub fn manifest() -> Manifest {
    Manifest {
        pretty_name: GENERATOR_NAME,
        version: env!("CARGO_PKG_VERSION"),
        default_output: "generated",
    }
}

/// One generation request from the host.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub document: Document,
    /// Output directory; `None` means the host supplied no resolvable path.
    pub output: Option<PathBuf>,
}

/// Run the full pipeline for one request. Returns the written-file count.
///
/// The output path is resolved before any file is produced; fatal errors
/// propagate to the host, and files already written stay on disk.
pub fn generate(
    request: &GenerateRequest,
    config: &FormatConfig,
    policy: FormatPolicy,
) -> Result<usize, EmitError> {
    let output = request.output.clone().ok_or_else(|| {
        EmitError::Config(format!("no output path was specified for {}", GENERATOR_NAME))
    })?;

    info!(
        "generating schemas for {} models, {} enums",
        request.document.models.len(),
        request.document.enums.len()
    );

    let mut project = Generator::new(&request.document).generate()?;
    format_project(&mut project, &LineFormatter, config, policy)?;

    match writer::persist(&project, &output) {
        Ok(count) => Ok(count),
        Err(e) => {
            error!("unable to write generated files: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_reports_identity() {
        let manifest = manifest();
        assert_eq!(manifest.pretty_name, "zodgen");
        assert_eq!(manifest.default_output, "generated");
        assert!(!manifest.version.is_empty());
    }

    #[test]
    fn missing_output_fails_before_any_generation() {
        let request = GenerateRequest {
            document: Document {
                models: vec![],
                enums: vec![],
                generator: None,
            },
            output: None,
        };
        let err = generate(&request, &FormatConfig::default(), FormatPolicy::Lenient).unwrap_err();
        assert!(matches!(err, EmitError::Config(_)));
    }
}
