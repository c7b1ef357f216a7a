use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn converts_html_file_to_stdout() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("message.html");
    fs::write(&input_path, "<div><b>Hello </b>team</div>").unwrap();

    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg(input_path.as_os_str());

    cmd.assert()
        .success()
        .stdout("<div>*Hello* team</div>");
}

#[test]
fn explicit_convert_writes_output_file() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("message.html");
    let output_path = dir.path().join("message.wa");
    fs::write(&input_path, "<i>hi </i>there").unwrap();

    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("convert")
        .arg(input_path.as_os_str())
        .arg("--to")
        .arg("whatsapp")
        .arg("-o")
        .arg(output_path.as_os_str());

    cmd.assert().success().stdout(predicate::str::is_empty());
    assert_eq!(fs::read_to_string(&output_path).unwrap(), "_hi_ there");
}

#[test]
fn reads_snapshot_from_stdin() {
    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-").write_stdin("<strike>a</strike><b>b</b>");

    cmd.assert().success().stdout("~a~*b*");
}

#[test]
fn extra_params_reach_the_converter() {
    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-")
        .arg("--extra-decode-nbsp")
        .write_stdin("<b>&nbsp;hello</b>");

    cmd.assert().success().stdout(" *hello*");
}

#[test]
fn legacy_passes_from_extra_params() {
    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-")
        .arg("--extra-passes")
        .arg("1")
        .write_stdin("<b>x  </b>y");

    cmd.assert().success().stdout("*x * y");
}

#[test]
fn relocation_with_explicit_pass_count() {
    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-")
        .arg("--extra-relocation")
        .arg("passes:4")
        .write_stdin("<b>x     </b>y");
    cmd.assert().success().stdout("*x *    y");

    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-")
        .arg("--extra-relocation")
        .arg("legacy")
        .write_stdin("<b>x     </b>y");
    cmd.assert().success().stdout("*x *    y");

    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-").write_stdin("<b>x     </b>y");
    cmd.assert().success().stdout("*x*     y");
}

#[test]
fn bad_relocation_mode_is_rejected() {
    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-")
        .arg("--extra-relocation")
        .arg("passes:many")
        .write_stdin("x");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid relocation mode 'passes:many'"));
}

#[test]
fn unknown_extension_needs_from() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("message.rtf");
    fs::write(&input_path, "<b>x</b>").unwrap();

    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg(input_path.as_os_str());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not detect format"));

    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg(input_path.as_os_str()).arg("--from").arg("html");
    cmd.assert().success().stdout("*x*");
}

#[test]
fn unknown_extra_param_is_rejected() {
    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-").arg("--extra-theme").arg("dark").write_stdin("x");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no parameter 'theme'"));
}

#[test]
fn unknown_target_format_fails() {
    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("-").arg("--to").arg("slack").write_stdin("x");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format 'slack' not found"));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("wamark");
    cmd.arg("--list-formats");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("whatsapp"))
        .stdout(predicate::str::contains("relocated"));
}
