use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const HEADER: &str = "id,name,aisle,department,price\n";
const DEFAULTS: &str = "id,name,aisle,department,price\n\
                        1,Factory Apple,1,1,0.50\n\
                        2,Factory Pear,2,2,1.10\n";

fn seed(dir: &Path, live: &str) {
    fs::write(dir.join("products.csv"), live).unwrap();
    fs::write(dir.join("products_default.csv"), DEFAULTS).unwrap();
}

fn stockpile(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir);
    cmd
}

#[test]
fn create_rewrites_the_products_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "id,name,aisle,department,price\n1,Apple,1,1,0.50\n");

    stockpile(temp_dir.path())
        .write_stdin("sam\ncreate\nBanana\n2\n2\n0.75\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome sam!"))
        .stdout(predicate::str::contains("CREATING A PRODUCT"))
        .stdout(predicate::str::contains(
            "#2 Banana | aisle 2 | department 2 | price 0.75",
        ));

    let saved = fs::read_to_string(temp_dir.path().join("products.csv")).unwrap();
    assert_eq!(
        saved,
        format!("{HEADER}1,Apple,1,1,0.50\n2,Banana,2,2,0.75\n")
    );
}

#[test]
fn list_prints_count_and_names() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), DEFAULTS);

    stockpile(temp_dir.path())
        .write_stdin("sam\nLIST\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LISTING 2 PRODUCTS"))
        .stdout(predicate::str::contains("#1: Factory Apple"))
        .stdout(predicate::str::contains("#2: Factory Pear"));
}

#[test]
fn destroy_is_saved_on_done() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), DEFAULTS);

    stockpile(temp_dir.path())
        .write_stdin("sam\ndestroy\n1\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DESTROYING A PRODUCT"));

    let saved = fs::read_to_string(temp_dir.path().join("products.csv")).unwrap();
    assert_eq!(saved, format!("{HEADER}2,Factory Pear,2,2,1.10\n"));
}

#[test]
fn reset_copies_defaults_exactly() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(
        temp_dir.path(),
        "id,name,aisle,department,price\n7,Local Only,3,3,9.99\n",
    );

    stockpile(temp_dir.path())
        .write_stdin("sam\nreset\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("RESETTING DEFAULTS"));

    let live = fs::read_to_string(temp_dir.path().join("products.csv")).unwrap();
    assert_eq!(live, DEFAULTS);
}

#[test]
fn unknown_product_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), DEFAULTS);

    stockpile(temp_dir.path())
        .write_stdin("sam\nshow\n99\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: no product with id '99'"));
}

#[test]
fn missing_products_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    stockpile(temp_dir.path())
        .write_stdin("sam\ndone\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Products file not found"));
}

#[test]
fn malformed_products_file_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    seed(temp_dir.path(), "id,name,aisle,department,price\n1,Apple\n");

    stockpile(temp_dir.path())
        .write_stdin("sam\ndone\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed record on line 2"));
}

#[test]
fn config_can_rename_the_products_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "products_file": "stock.csv" }"#,
    )
    .unwrap();
    fs::write(temp_dir.path().join("stock.csv"), DEFAULTS).unwrap();

    stockpile(temp_dir.path())
        .write_stdin("sam\nlist\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LISTING 2 PRODUCTS"));
}

#[test]
fn project_scope_reads_db_under_working_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let db = temp_dir.path().join("db");
    fs::create_dir_all(&db).unwrap();
    seed(&db, DEFAULTS);

    let mut cmd = Command::cargo_bin("stockpile").unwrap();
    cmd.current_dir(temp_dir.path())
        .env("NO_COLOR", "1")
        .write_stdin("sam\nlist\ndone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 2 products in the database."));
}
