//! Integration tests for the songjang binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const ORDER: &str = "25108 강원도 홍천군 서석면 해뜨는집\n최용남 010-4752-1001\n종균제 5통\n";

/// Command with an isolated home so no user config is picked up.
fn songjang(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("songjang").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

#[test]
fn parse_from_stdin_as_json() {
    let home = TempDir::new().unwrap();
    songjang(&home)
        .arg("parse")
        .write_stdin(ORDER)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"recipient\": \"최용남\""))
        .stdout(predicate::str::contains("\"phone_primary\": \"010-4752-1001\""))
        .stdout(predicate::str::contains("\"quantity\": 5"))
        .stdout(predicate::str::contains("\"shipping_term\": \"PREPAID\""));
}

#[test]
fn parse_file_as_courier_block() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("order.txt");
    fs::write(&input, ORDER).unwrap();

    songjang(&home)
        .args(["parse", "-f", "courier"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("종균제 5통 (송장번호필요)"))
        .stdout(predicate::str::contains("택배선불로 보내주세요^^"));
}

#[test]
fn parse_reports_warnings_on_request() {
    let home = TempDir::new().unwrap();
    songjang(&home)
        .args(["parse", "--show-warnings"])
        .write_stdin("주소만 있는 메모")
        .assert()
        .success()
        .stderr(predicate::str::contains("No phone number found"));
}

#[test]
fn parse_missing_file_fails() {
    let home = TempDir::new().unwrap();
    songjang(&home)
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_lines_to_csv() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("orders.txt");
    fs::write(
        &input,
        "서울시 마포구 박민수 010-1234-5678 구연산 2통\n\n부산시 해운대구 김영희 010-9876-5432 PAC 3can 착불\n",
    )
    .unwrap();

    let output = songjang(&home)
        .args(["batch", "-f", "csv"])
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let csv = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("postal_code,address,recipient"));
    assert!(lines[1].contains("박민수,010-1234-5678,,2,PREPAID,구연산,"));
    assert!(lines[2].contains("김영희,010-9876-5432,,3,COLLECT,PAC,collect-delivery"));
}

#[test]
fn batch_paragraphs_to_sheet_file() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("chat.txt");
    let output = home.path().join("sheet.txt");
    fs::write(&input, format!("{}\n{}", ORDER, ORDER)).unwrap();

    songjang(&home)
        .args(["batch", "--mode", "paragraph", "-f", "sheet", "--separator", "====", "-o"])
        .arg(&output)
        .arg(input.to_str().unwrap())
        .assert()
        .success();

    let sheet = fs::read_to_string(&output).unwrap();
    assert_eq!(sheet.matches("====").count(), 2);
    assert!(sheet.starts_with("25108\n25108 강원도 홍천군 서석면 해뜨는집\n최용남\t010-4752-1001\n5\t선불\t종균제"));
}

#[test]
fn batch_without_matches_fails() {
    let home = TempDir::new().unwrap();
    let pattern = home.path().join("*.nothing");

    songjang(&home)
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

#[test]
fn config_file_extends_denylist() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.json");
    fs::write(&config, r#"{"extraction": {"extra_product_denylist": ["사은품"]}}"#).unwrap();

    songjang(&home)
        .args(["--config", config.to_str().unwrap(), "parse", "-f", "csv"])
        .write_stdin("서울시 박민수 010-1234-5678 사은품 3개")
        .assert()
        .success()
        .stdout(predicate::str::contains(",3,PREPAID,,"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("songjang.json");

    songjang(&home)
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    songjang(&home)
        .args(["config", "init", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn batch_reports_warnings_per_order() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("orders.txt");
    fs::write(
        &input,
        "서울시 마포구 박민수 010-1234-5678 구연산 2통\n서울시 마포구 홍길순 010-2222-3333 종균제 5통\n",
    )
    .unwrap();

    songjang(&home)
        .args(["batch", "--show-warnings"])
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("#2: Could not extract recipient name"))
        .stderr(predicate::str::contains("warnings"));
}

#[test]
fn batch_accepts_mode_aliases_and_rejects_unknown_modes() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("chat.txt");
    fs::write(&input, format!("{}\n{}", ORDER, ORDER)).unwrap();

    let output = songjang(&home)
        .args(["batch", "--mode", "para", "-f", "csv"])
        .arg(input.to_str().unwrap())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 3);

    songjang(&home)
        .args(["batch", "--mode", "tabs"])
        .arg(input.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown block mode"));
}

#[test]
fn config_deny_edits_the_selected_file() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("songjang.json");
    let config = config.to_str().unwrap();

    songjang(&home)
        .args(["--config", config, "config", "deny", "사은품"])
        .assert()
        .success();

    songjang(&home)
        .args(["--config", config, "config", "get", "extraction.extra_product_denylist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("사은품"));

    songjang(&home)
        .args(["--config", config, "parse", "-f", "csv"])
        .write_stdin("서울시 박민수 010-1234-5678 사은품 3개")
        .assert()
        .success()
        .stdout(predicate::str::contains(",3,PREPAID,,"));
}

#[test]
fn config_set_reaches_into_alias_list() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("songjang.json");
    let config = config.to_str().unwrap();

    songjang(&home)
        .args(["--config", config, "config", "set", "render.product_aliases.2.canonical", "PAC10%"])
        .assert()
        .success();

    songjang(&home)
        .args(["--config", config, "parse", "-f", "courier"])
        .write_stdin("서울시 박민수 010-1234-5678 PAC 3can")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("PAC10% 3통 (송장번호필요)"));

    songjang(&home)
        .args(["--config", config, "config", "set", "render.no_such_key", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration key not found"));
}
