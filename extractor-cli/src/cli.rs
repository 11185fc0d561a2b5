//! CLI argument definitions using clap.

use clap::Parser;
use std::path::{Path, PathBuf};

use extractor_codegen::CONFIG_FILE_NAME;

/// prisma-extractor - TypeScript declarations from Prisma schemas
#[derive(Parser, Debug)]
#[command(name = "prisma-extractor")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(
    about = "Generate TypeScript declarations and metadata from a Prisma schema",
    long_about = None
)]
pub struct Cli {
    /// Path to the Prisma schema (defaults to `prismaSchema` from the config)
    #[arg(value_name = "SCHEMA_PATH")]
    pub schema: Option<PathBuf>,

    /// Path of the generated TypeScript file (defaults to `outputFile` from the config)
    #[arg(value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Write the default configuration file and exit
    #[arg(long)]
    pub init: bool,

    /// Path to the configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write metadata.json next to the output file
    #[arg(short, long)]
    pub metadata: bool,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write the default configuration document.
    Init { config_path: PathBuf },
    /// Run the generation pipeline.
    Generate(GenerateArgs),
}

/// Arguments of a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Schema path given on the command line.
    pub schema: Option<PathBuf>,
    /// Output path given on the command line.
    pub output: Option<PathBuf>,
    /// Configuration document path given on the command line.
    pub config: Option<PathBuf>,
    /// Force the metadata document on.
    pub metadata: bool,
}

impl GenerateArgs {
    /// Get the configuration path override, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

impl Cli {
    /// Turn the parsed flags into a command.
    pub fn into_command(self) -> Command {
        if self.init {
            return Command::Init {
                config_path: self
                    .config
                    .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
            };
        }

        Command::Generate(GenerateArgs {
            schema: self.schema,
            output: self.output,
            config: self.config,
            metadata: self.metadata,
        })
    }
}
