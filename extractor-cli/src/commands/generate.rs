//! `prisma-extractor [SCHEMA_PATH] [OUTPUT_PATH]` - Generate TypeScript
//! declarations from a schema.

use extractor_codegen::{GenerationConfig, emit, write_outputs};
use extractor_schema::{SchemaError, parse_schema, resolve_schema_path};
use tracing::info;

use crate::cli::GenerateArgs;
use crate::error::CliResult;
use crate::output::{self, success};

/// Run the generate command
pub async fn run(args: GenerateArgs) -> CliResult<()> {
    output::header("Generate TypeScript Declarations");

    // Configuration is resolved once and passed down from here.
    let config = GenerationConfig::resolve(args.config_path())?;

    let schema_path = args.schema.unwrap_or_else(|| config.schema_path.clone());
    let output_path = args.output.unwrap_or_else(|| config.output_file.clone());
    let write_metadata = args.metadata || config.generate_metadata;

    output::kv("Schema", &schema_path.display().to_string());
    output::kv("Output", &output_path.display().to_string());
    output::newline();

    output::step(1, 3, "Reading schema...");

    let schema_path = resolve_schema_path(&schema_path)?;
    let content = tokio::fs::read_to_string(&schema_path)
        .await
        .map_err(|source| SchemaError::IoError {
            path: schema_path.display().to_string(),
            source,
        })?;
    let schema = parse_schema(&content)?;
    info!(path = %schema_path.display(), %schema, "schema loaded");

    output::step(2, 3, "Generating declarations...");

    let emission = emit(&schema, &config);

    output::step(3, 3, "Writing files...");

    let written = write_outputs(&emission, &output_path, write_metadata)?;

    output::newline();
    if let Some(metadata) = &written.metadata {
        success(&format!(
            "Metadata successfully extracted to {}",
            metadata.display()
        ));
    }
    success(&format!(
        "TypeScript declarations successfully generated at {}",
        written.source.display()
    ));

    Ok(())
}
