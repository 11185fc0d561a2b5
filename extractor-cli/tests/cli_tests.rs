//! Integration tests for the prisma-extractor CLI

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCHEMA: &str = r#"
datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

enum Role {
  ADMIN
  USER
}

model User {
  id    Int    @id @default(autoincrement())
  email String @unique
  role  Role
  posts Post[]
}

model Post {
  id       Int    @id @default(autoincrement())
  title    String
  author   User   @relation(fields: [authorId], references: [id])
  authorId Int
}
"#;

/// Get the prisma-extractor binary, running in `dir`
#[allow(deprecated)]
fn extractor_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("prisma-extractor").unwrap();
    cmd.current_dir(dir)
        .env_remove("EXTRACTOR_DEBUG")
        .env_remove("EXTRACTOR_LOG_LEVEL");
    cmd
}

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("prisma")).unwrap();
    fs::write(dir.path().join("prisma/schema.prisma"), SCHEMA).unwrap();
    dir
}

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    extractor_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: prisma-extractor"))
        .stdout(predicate::str::contains("--init"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--metadata"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    extractor_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_generate_with_positionals() {
    let dir = project();

    extractor_cmd(dir.path())
        .args(["prisma/schema.prisma", "out/types/database.ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("successfully generated"));

    let source = fs::read_to_string(dir.path().join("out/types/database.ts")).unwrap();
    assert!(source.starts_with("// This file is auto-generated by prisma-extractor.\n"));
    assert!(source.contains("export enum Role {\n  ADMIN = \"ADMIN\",\n  USER = \"USER\",\n}\n"));
    assert!(source.contains(
        "export interface User {\n  id: number;\n  email: string;\n  role: Role;\n  posts?: Post[];\n}\n"
    ));
    assert!(source.contains("  author?: User;\n  authorId: number;\n"));

    // No metadata unless asked for.
    assert!(!dir.path().join("out/types/metadata.json").exists());
}

#[test]
fn test_generate_uses_config_defaults() {
    let dir = project();

    extractor_cmd(dir.path()).assert().success();

    assert!(dir.path().join("src/interfaces/database.ts").exists());
}

#[test]
fn test_metadata_flag() {
    let dir = project();

    extractor_cmd(dir.path())
        .args(["prisma/schema.prisma", "out/database.ts", "--metadata"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metadata successfully extracted"));

    let metadata = fs::read_to_string(dir.path().join("out/metadata.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&metadata).unwrap();
    assert_eq!(json["models"][0]["name"], "User");
    assert_eq!(json["models"][1]["fields"][2]["relationName"], "PostToUser");
    assert_eq!(json["enums"][0]["values"][1]["name"], "USER");
}

#[test]
fn test_config_file_is_applied() {
    let dir = project();
    fs::write(
        dir.path().join("prisma-extractor.json"),
        r#"{
            "outputType": "type",
            "enumOutputType": "type",
            "relationFieldsOptional": false,
            "generateMetadata": true,
            "outputFile": "./generated/db.ts"
        }"#,
    )
    .unwrap();

    extractor_cmd(dir.path()).assert().success();

    let source = fs::read_to_string(dir.path().join("generated/db.ts")).unwrap();
    assert!(source.contains("export type Role = \"ADMIN\" | \"USER\";\n"));
    assert!(source.contains("export type User = {\n"));
    assert!(source.contains("  author: User;\n"));
    assert!(dir.path().join("generated/metadata.json").exists());
}

#[test]
fn test_config_flag_points_elsewhere() {
    let dir = project();
    fs::write(
        dir.path().join("custom.json"),
        r#"{ "mapTypes": { "Int": "bigint" } }"#,
    )
    .unwrap();

    extractor_cmd(dir.path())
        .args(["prisma/schema.prisma", "db.ts", "--config", "custom.json"])
        .assert()
        .success();

    let source = fs::read_to_string(dir.path().join("db.ts")).unwrap();
    assert!(source.contains("  id: bigint;\n"));
    assert!(source.contains("  email: string;\n"));
}

#[test]
fn test_invalid_config_fails() {
    let dir = project();
    fs::write(
        dir.path().join("prisma-extractor.json"),
        r#"{ "outputType": "class", "colour": "blue" }"#,
    )
    .unwrap();

    extractor_cmd(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid configuration"))
        .stderr(predicate::str::contains("outputType must be one of"))
        .stderr(predicate::str::contains("unexpected property `colour`"));

    assert!(!dir.path().join("src/interfaces/database.ts").exists());
}

#[test]
fn test_missing_schema_fails() {
    let dir = TempDir::new().unwrap();

    extractor_cmd(dir.path())
        .args(["nope.prisma", "out.ts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("schema file not found at:"))
        .stderr(predicate::str::contains("nope.prisma"));
}

#[test]
fn test_syntax_error_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.prisma"), "model {\n  id Int\n}\n").unwrap();

    extractor_cmd(dir.path())
        .args(["broken.prisma", "out.ts"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("syntax error in schema"));

    assert!(!dir.path().join("out.ts").exists());
}

#[test]
fn test_usage_errors_exit_with_one() {
    let dir = project();

    extractor_cmd(dir.path())
        .args(["prisma/schema.prisma", "out.ts", "extra"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage: prisma-extractor"));

    extractor_cmd(dir.path())
        .arg("--bogus")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--bogus"));

    assert!(!dir.path().join("out.ts").exists());
}

#[test]
fn test_init_writes_default_config() {
    let dir = TempDir::new().unwrap();

    extractor_cmd(dir.path())
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration file created"));

    let written = fs::read_to_string(dir.path().join("prisma-extractor.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(json["outputType"], "interface");
    assert_eq!(json["enumOutputType"], "enum");
    assert_eq!(json["relationFieldsOptional"], true);
    assert_eq!(json["mapTypes"]["DateTime"], "Date");
}

#[test]
fn test_init_overwrites_existing_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("prisma-extractor.json");
    fs::write(&path, r#"{ "outputType": "type" }"#).unwrap();

    extractor_cmd(dir.path()).arg("--init").assert().success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["outputType"], "interface");
}

#[test]
fn test_init_with_config_path() {
    let dir = TempDir::new().unwrap();

    extractor_cmd(dir.path())
        .args(["--init", "--config", "extractor.json"])
        .assert()
        .success();

    assert!(dir.path().join("extractor.json").exists());
    assert!(!dir.path().join("prisma-extractor.json").exists());
}

#[test]
fn test_init_does_not_generate() {
    let dir = project();

    extractor_cmd(dir.path()).arg("--init").assert().success();

    assert!(!dir.path().join("src/interfaces/database.ts").exists());
}
