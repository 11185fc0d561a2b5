//! `prisma-extractor --init` - Write the default configuration file.

use std::path::Path;

use extractor_codegen::write_default_config;

use crate::error::CliResult;
use crate::output::{self, success};

/// Run the init command
pub async fn run(config_path: &Path) -> CliResult<()> {
    output::header("Initialize prisma-extractor");

    if config_path.exists() {
        output::warn(&format!(
            "{} exists and will be replaced with the defaults.",
            config_path.display()
        ));
    }

    write_default_config(config_path)?;

    success(&format!(
        "Configuration file created at: {}",
        config_path.display()
    ));
    output::dim("You can now edit this file to customize type mappings.");

    Ok(())
}
