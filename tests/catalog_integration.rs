use assert_cmd::Command;
use mockito::{Matcher, Server, ServerGuard};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn package(id: &str, java_version: &str, os: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "archive_type": "tar.gz",
            "distribution": "temurin",
            "java_version": "{java_version}",
            "release_status": "ga",
            "operating_system": "{os}",
            "lib_c_type": "glibc",
            "architecture": "x64",
            "package_type": "jdk",
            "javafx_bundled": false,
            "directly_downloadable": true,
            "filename": "temurin-{id}.tar.gz",
            "size": 11
        }}"#
    )
}

fn result(records: &[String]) -> String {
    format!(r#"{{"result":[{}],"message":""}}"#, records.join(","))
}

fn discocli(server: &ServerGuard) -> Command {
    let mut cmd = Command::cargo_bin("discocli").unwrap();
    cmd.env("DISCOCLI_API__BASE_URL", server.url())
        .env("NO_COLOR", "1");
    cmd
}

fn mock_download(server: &mut ServerGuard) {
    server
        .mock("GET", "/v3.0/packages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("distro".into(), "temurin".into()),
            Matcher::UrlEncoded("version".into(), "21".into()),
            Matcher::UrlEncoded("operating_system".into(), "linux".into()),
            Matcher::UrlEncoded("directlyDownloadable".into(), "true".into()),
        ]))
        .with_status(200)
        .with_body(result(&[
            package("p1", "21.0.1+12", "linux"),
            package("p2", "21.0.2+13", "linux"),
        ]))
        .create();

    let archive_uri = format!("{}/files/temurin-21.0.2.tar.gz", server.url());
    server
        .mock("GET", "/v3.0/ids/p2")
        .with_status(200)
        .with_body(format!(
            r#"{{"result":[{{"filename":"temurin-21.0.2.tar.gz","direct_download_uri":"{archive_uri}"}}],"message":""}}"#
        ))
        .create();

    server
        .mock("GET", "/files/temurin-21.0.2.tar.gz")
        .with_status(200)
        .with_header("Content-Length", "11")
        .with_body("jdk-archive")
        .create();
}

#[test]
fn test_download_end_to_end() {
    let mut server = Server::new();
    mock_download(&mut server);
    let output = TempDir::new().unwrap();

    discocli(&server)
        .args(["-d", "temurin", "-v", "21", "--os", "linux", "--arc", "x64"])
        .arg("--no-progress")
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(contains("Downloading temurin-21.0.2.tar.gz:"));

    let downloaded = output.path().join("temurin-21.0.2.tar.gz");
    assert_eq!(fs::read_to_string(downloaded).unwrap(), "jdk-archive");
}

#[test]
fn test_existing_download_exits_with_success() {
    let mut server = Server::new();
    mock_download(&mut server);
    let output = TempDir::new().unwrap();
    let target = output.path().join("temurin-21.0.2.tar.gz");
    fs::write(&target, "already-here").unwrap();

    discocli(&server)
        .args(["-d", "temurin", "-v", "21", "--os", "linux", "--no-progress"])
        .arg("-o")
        .arg(output.path())
        .assert()
        .success()
        .stdout(contains("already exists"));

    assert_eq!(fs::read_to_string(target).unwrap(), "already-here");
}

#[test]
fn test_find_prints_command_lines() {
    let mut server = Server::new();
    server
        .mock("GET", "/v3.0/packages")
        .match_query(Matcher::UrlEncoded("latest".into(), "all_of_version".into()))
        .with_status(200)
        .with_body(result(&[
            package("w", "21.0.2+13", "windows"),
            package("l", "21.0.2+13", "linux"),
        ]))
        .create();

    discocli(&server)
        .args(["-f", "-d", "temurin", "-v", "21"])
        .assert()
        .success()
        .stdout(contains("discocli -d temurin -v 21.0.2 --os linux"))
        .stdout(contains("discocli -d temurin -v 21.0.2 --os windows"));
}

#[test]
fn test_update_check_lists_newer_builds() {
    let mut server = Server::new();
    server
        .mock("GET", "/v3.0/packages")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("version".into(), "21".into()),
            Matcher::UrlEncoded("latest".into(), "all_of_version".into()),
        ]))
        .with_status(200)
        .with_body(result(&[
            package("old", "21.0.1+12", "linux"),
            package("new", "21.0.2+13", "linux"),
        ]))
        .create();

    discocli(&server)
        .args(["-u", "temurin,21.0.1,linux,x64,jdk"])
        .assert()
        .success()
        .stdout(contains("21.0.2"))
        .stdout(contains("-v 21.0.1 ").not());
}

#[test]
fn test_server_error_exits_with_failure() {
    let mut server = Server::new();
    server
        .mock("GET", "/v3.0/packages")
        .match_query(Matcher::Any)
        .with_status(503)
        .create();
    let output = TempDir::new().unwrap();

    discocli(&server)
        .args(["-d", "temurin", "-v", "21", "--os", "linux", "--no-progress"])
        .arg("-o")
        .arg(output.path())
        .assert()
        .code(1)
        .stderr(contains("503"));

    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 0);
}
