//! End-to-end runs of the `wrapgen` binary.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

const METADATA: &str = r#"{
  "classes": [
    {
      "name": "example.Customer",
      "fields": [
        { "name": "firstName", "type": "String", "modifiers": ["private", "final"] },
        { "name": "lastName", "type": "String", "modifiers": ["private", "final"] }
      ],
      "constructors": [
        {
          "parameters": [
            { "name": "firstName", "type": "String" },
            { "name": "lastName", "type": "String" }
          ]
        }
      ],
      "methods": [
        { "name": "getFirstName", "returns": "String", "annotations": ["javax.annotation.Nonnull"] },
        { "name": "getLastName", "returns": "String" }
      ]
    },
    { "name": "example.CustomerType", "kind": "enum", "constants": ["RETAIL", "WHOLESALE"] }
  ]
}
"#;

const BROKEN: &str = r#"{
  "classes": [
    {
      "name": "example.Invoice",
      "fields": [{ "name": "currency", "type": "java.util.Currency" }],
      "methods": [{ "name": "getCurrency", "returns": "java.util.Currency" }]
    }
  ]
}
"#;

fn wrapgen(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wrapgen"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn project(extra: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    let init = wrapgen(temp.path(), &["init", "--input", "meta"]);
    assert!(init.status.success(), "{:?}", init);
    fs::create_dir(temp.path().join("meta")).unwrap();
    fs::write(temp.path().join("meta/classes.json"), METADATA).unwrap();
    if let Some(extra) = extra {
        fs::write(temp.path().join("meta/extra.json"), extra).unwrap();
    }
    temp
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_init_then_generate() {
    let temp = project(None);
    let output = wrapgen(temp.path(), &["generate"]);
    assert!(output.status.success(), "{:?}", output);

    let customer = temp
        .path()
        .join("src/main/scala/example/wrappers/Customer.scala");
    let code = fs::read_to_string(customer).unwrap();
    assert!(code.starts_with("// Code generated by wrapgen. DO NOT EDIT."));
    assert!(code.contains("def firstName: String = underlying.getFirstName()"));
    assert!(code.contains("def lastName: Option[String] = Option(underlying.getLastName())"));
    assert!(!code.contains("def set"));

    let text = stdout(&output);
    assert!(text.contains("Generated (2):"));
    assert!(text.contains("2 of 2 classes generated (scala)"));
}

#[test]
fn test_init_keeps_existing_config() {
    let temp = project(None);
    let output = wrapgen(temp.path(), &["init"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("already exists"));
    let config = fs::read_to_string(temp.path().join("wrapgen.toml")).unwrap();
    assert!(config.contains("inputs = [\"meta\"]"));
}

#[test]
fn test_failed_class_sets_exit_status() {
    let temp = project(Some(BROKEN));
    let output = wrapgen(temp.path(), &["generate", "-o", "out"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("example.Invoice [unresolved type]"));
    assert!(temp.path().join("out/example/wrappers/Customer.scala").exists());

    let output = wrapgen(temp.path(), &["generate", "-o", "out", "--allow-partial"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Unchanged: 2"));
}

#[test]
fn test_check_and_dry_run_write_nothing() {
    let temp = project(None);
    let output = wrapgen(temp.path(), &["check"]);
    assert!(output.status.success(), "{:?}", output);
    assert!(
        stdout(&output)
            .contains("example.CustomerType -> example/wrappers/CustomerType.scala")
    );

    let output = wrapgen(temp.path(), &["generate", "--dry-run"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("── example/wrappers/Customer.scala ──"));
    assert!(!temp.path().join("src").exists());
}

#[test]
fn test_missing_config() {
    let temp = TempDir::new().unwrap();
    let output = wrapgen(temp.path(), &["check"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("wrapgen.toml"));
}
