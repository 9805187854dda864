//! End-to-end tests for the entangle binary.

use assert_cmd::Command;
use std::path::Path;

fn entangle() -> Command {
    Command::cargo_bin("entangle").unwrap()
}

fn generate_into(out: &Path) {
    entangle()
        .arg("generate")
        .arg("tests/fixtures/demo.json")
        .arg("--output")
        .arg(out)
        .assert()
        .success();
}

#[test]
fn generate_writes_model_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("angular");
    generate_into(&out);

    let demo = std::fs::read_to_string(out.join("model/Demo.ts")).unwrap();
    assert_eq!(
        demo,
        "export interface Demo {\n\tid?: number;\n\tname?: string;\n\tprice?: any;\n\tdescription?: string;\n}"
    );

    let order = std::fs::read_to_string(out.join("model/ShopOrder.ts")).unwrap();
    assert_eq!(
        order,
        "import {Demo} from './Demo';\n\nexport interface ShopOrder {\n\tid: number;\n\tplacedAt?: Date;\n\titem?: Demo;\n}"
    );
}

#[test]
fn generate_writes_endpoint_constants() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("angular");
    generate_into(&out);

    let endpoints = std::fs::read_to_string(out.join("endpoints.ts")).unwrap();
    assert_eq!(
        endpoints,
        "export class Endpoints {\n\tpublic static DEMOS = '/demos';\n\tpublic static ORDERS = '/orders';\n}"
    );
}

#[test]
fn generate_skips_foreign_entities() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("angular");
    generate_into(&out);

    assert!(!out.join("model/VendorSecurityUser.ts").exists());
}

#[test]
fn keep_foreign_renders_everything() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("angular");
    entangle()
        .arg("generate")
        .arg("tests/fixtures/demo.json")
        .arg("--output")
        .arg(&out)
        .arg("--keep-foreign")
        .assert()
        .success();

    assert!(out.join("model/VendorSecurityUser.ts").exists());
}

#[test]
fn generate_clears_stale_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("angular");
    std::fs::create_dir_all(out.join("model")).unwrap();
    std::fs::write(out.join("model/Stale.ts"), "old").unwrap();

    generate_into(&out);

    assert!(!out.join("model/Stale.ts").exists());
    assert!(out.join("model/Demo.ts").exists());
}

#[test]
fn generate_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("angular");

    generate_into(&out);
    let first = std::fs::read_to_string(out.join("model/ShopOrder.ts")).unwrap();

    generate_into(&out);
    let second = std::fs::read_to_string(out.join("model/ShopOrder.ts")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn generate_fails_on_missing_schema() {
    entangle()
        .arg("generate")
        .arg("does-not-exist.json")
        .assert()
        .failure();
}

#[test]
fn endpoints_subcommand_writes_constants() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("angular");
    entangle()
        .arg("endpoints")
        .arg("/users")
        .arg("/orders")
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let endpoints = std::fs::read_to_string(out.join("endpoints.ts")).unwrap();
    assert_eq!(
        endpoints,
        "export class Endpoints {\n\tpublic static USERS = '/users';\n\tpublic static ORDERS = '/orders';\n}"
    );
}
