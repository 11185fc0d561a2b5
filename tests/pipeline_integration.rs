//! Integration tests for the full parse, configure and emit pipeline.
//!
//! These tests run real schema text through the parser and emitter and
//! check the generated TypeScript and metadata document.

use pretty_assertions::assert_eq;
use prisma_extractor::codegen::{ConfigViolation, write_outputs};
use prisma_extractor::prelude::*;
use prisma_extractor::{ConfigError, generate_source};

const ROLE_USER: &str = r#"
enum Role {
  ADMIN
  USER
}

model User {
  id    Int    @id
  email String
  role  Role
}
"#;

/// One enum and one model, default configuration
#[test]
fn test_role_user_default_config() {
    let source = generate_source(ROLE_USER, &GenerationConfig::default()).unwrap();

    assert_eq!(
        source,
        "// This file is auto-generated by prisma-extractor.\n\
         // Do not edit this file directly.\n\
         \n\
         export enum Role {\n\
         \x20 ADMIN = \"ADMIN\",\n\
         \x20 USER = \"USER\",\n\
         }\n\
         \n\
         export interface User {\n\
         \x20 id: number;\n\
         \x20 email: string;\n\
         \x20 role: Role;\n\
         }\n"
    );
}

/// A required relation is still optional under the relation policy
#[test]
fn test_required_relation_forced_optional() {
    let schema = parse_schema(&format!(
        "{ROLE_USER}\nmodel Post {{\n  id       Int  @id\n  author   User @relation(fields: [authorId], references: [id])\n  authorId Int\n}}\n"
    ))
    .unwrap();

    let post = schema.get_record("Post").unwrap();
    assert!(post.get_field("author").unwrap().is_required);

    let config = GenerationConfig {
        output_kind: OutputKind::Type,
        relation_fields_optional: true,
        ..GenerationConfig::default()
    };
    let source = emit(&schema, &config).source;

    assert!(source.contains(
        "export type Post = {\n  id: number;\n  author?: User;\n  authorId: number;\n}\n"
    ));
}

/// Emitting twice gives byte-identical output
#[test]
fn test_emission_is_idempotent() {
    let schema = parse_schema(ROLE_USER).unwrap();
    let config = GenerationConfig::default();

    let first = emit(&schema, &config).source;
    let second = emit(&schema, &config).source;
    assert_eq!(first, second);
}

/// Blocks follow declaration order, enums before models
#[test]
fn test_block_order_follows_declarations() {
    let schema = parse_schema(
        r#"
        model Zeta {
          id Int @id
        }
        enum Omega {
          B
          A
        }
        model Alpha {
          second String
          first  String
        }
        enum Beta {
          X
        }
    "#,
    )
    .unwrap();

    let source = emit(&schema, &GenerationConfig::default()).source;
    let positions: Vec<_> = [
        "export enum Omega",
        "export enum Beta",
        "export interface Zeta",
        "export interface Alpha",
    ]
    .iter()
    .map(|needle| source.find(needle).unwrap())
    .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);

    assert!(source.contains("  B = \"B\",\n  A = \"A\",\n"));
    assert!(source.contains("  second: string;\n  first: string;\n"));
}

/// Mapped scalars are replaced, unmapped names pass through
#[test]
fn test_type_mapping_and_passthrough() {
    let schema = parse_schema(
        r#"
        model Sample {
          when     DateTime
          blob     Bytes
          big      BigInt
          location Geometry
          shape    Unsupported("circle")?
        }
    "#,
    )
    .unwrap();

    let config =
        GenerationConfig::from_json_str(r#"{ "mapTypes": { "DateTime": "string" } }"#).unwrap();
    let source = emit(&schema, &config).source;

    assert!(source.contains("  when: string;\n"));
    assert!(source.contains("  blob: Buffer;\n"));
    assert!(source.contains("  big: bigint;\n"));
    assert!(source.contains("  location: Geometry;\n"));
    assert!(source.contains("  shape?: unknown;\n"));
}

/// Required non-relation fields are never optional
#[test]
fn test_optionality_law_end_to_end() {
    let schema = parse_schema(
        r#"
        model User {
          id      Int      @id
          nick    String?
          tags    String[]
          profile Profile?
          friends User[]
          role    Role
        }

        model Profile {
          id Int @id
        }

        enum Role {
          USER
        }
    "#,
    )
    .unwrap();

    for relation_fields_optional in [true, false] {
        let config = GenerationConfig {
            relation_fields_optional,
            ..GenerationConfig::default()
        };
        let source = emit(&schema, &config).source;

        assert!(source.contains("  id: number;\n"));
        assert!(source.contains("  nick?: string;\n"));
        assert!(source.contains("  tags: string[];\n"));
        assert!(source.contains("  profile?: Profile;\n"));
        assert!(source.contains("  role: Role;\n"));

        let friends = if relation_fields_optional {
            "  friends?: User[];\n"
        } else {
            "  friends: User[];\n"
        };
        assert!(source.contains(friends));
    }
}

/// An unknown top-level key always fails validation, naming the key
#[test]
fn test_config_closure() {
    for key in ["outputDir", "relationsOptional", "$schemas"] {
        let doc = format!(r#"{{ "{key}": true }}"#);
        match GenerationConfig::from_json_str(&doc).unwrap_err() {
            ConfigError::Validation { violations } => {
                assert!(violations.contains(&ConfigViolation::UnknownKey { key: key.into() }))
            }
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }
}

/// The metadata document parses back to the same model
#[test]
fn test_metadata_round_trip_through_disk() {
    let schema = parse_schema(
        r#"
        /// Accounts.
        model User {
          id    Int    @id @default(autoincrement())
          email String @unique @map("email_address") @db.VarChar(320)
          role  Role   @default(USER)
          posts Post[]

          @@map("users")
        }

        model Post {
          id       Int  @id
          authorId Int
          author   User @relation(fields: [authorId], references: [id], onDelete: Cascade, onUpdate: NoAction)

          @@unique([id, authorId])
        }

        enum Role {
          ADMIN @map("admin")
          USER
        }
    "#,
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("types").join("database.ts");
    let emission = emit(&schema, &GenerationConfig::default());
    let written = write_outputs(&emission, &output, true).unwrap();

    let metadata_path = written.metadata.unwrap();
    let json = std::fs::read_to_string(&metadata_path).unwrap();
    let parsed: SchemaModel = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, schema);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["models"][0]["dbName"], "users");
    assert_eq!(value["models"][0]["fields"][0]["hasDefaultValue"], true);
    assert_eq!(
        value["models"][0]["fields"][0]["default"],
        serde_json::json!({ "name": "autoincrement", "args": [] })
    );
    assert_eq!(value["models"][0]["fields"][1]["dbName"], "email_address");
    assert_eq!(
        value["models"][0]["fields"][1]["nativeType"],
        serde_json::json!(["VarChar", ["320"]])
    );
    assert_eq!(value["models"][0]["fields"][2]["default"], "USER");
    assert_eq!(value["models"][1]["fields"][2]["relationOnDelete"], "Cascade");
    assert_eq!(value["models"][1]["fields"][2]["relationOnUpdate"], "NoAction");
    assert_eq!(value["models"][1]["fields"][1]["isReadOnly"], true);
    assert_eq!(value["enums"][0]["values"][0]["dbName"], "admin");
    assert_eq!(value["enums"][0]["values"][1]["dbName"], serde_json::Value::Null);
}

/// A `///` comment at the end of a field line documents that field
#[test]
fn test_trailing_documentation_emitted_on_its_field() {
    let source = generate_source(
        "model User {\n  id    Int    @id /// the key\n  email String\n}\n",
        &GenerationConfig::default(),
    )
    .unwrap();

    assert!(source.ends_with(
        "export interface User {\n  /** the key */\n  id: number;\n  email: string;\n}\n"
    ));
}

/// Composite types and views do not stop generation
#[test]
fn test_composite_types_and_views_are_skipped() {
    let source = generate_source(
        "type Address {\n  street String\n}\n\nview Summary {\n  id Int @unique\n}\n\nmodel User {\n  id      Int     @id\n  address Address\n}\n",
        &GenerationConfig::default(),
    )
    .unwrap();

    assert!(!source.contains("Summary"));
    assert!(source.ends_with("export interface User {\n  id: number;\n  address: Address;\n}\n"));
}

/// Reading a schema from a file
#[test]
fn test_parse_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schema.prisma");
    std::fs::write(&path, ROLE_USER).unwrap();

    let schema = parse_schema_file(&path).unwrap();
    assert_eq!(schema.records.len(), 1);
    assert_eq!(schema.enums.len(), 1);
}

/// An empty schema yields just the header
#[test]
fn test_empty_schema() {
    let source = generate_source("", &GenerationConfig::default()).unwrap();
    assert_eq!(source, prisma_extractor::codegen::HEADER);
}
