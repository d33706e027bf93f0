#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const NEW_PROTOTYPE_OUT: &str = r#"{"novelty":"high","feasibility":"high","genuineness_confidence":0.85,"suggested_budget":10000,"passed_initial_screening":true}"#;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    /// Binary with an isolated `HOME` and no logging/config from the caller's env.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("screener");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .env_remove("SCREENER_CONFIG");
        cmd
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work.join(name);
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn write_home_config(&self, contents: &str) {
        let dir = self.home.join(".config/screener");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("screening.toml"), contents).expect("write home config");
    }

    pub fn run_ok(&self, stdin: &str, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(args)
            .write_stdin(stdin)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json on stdout")
    }

    pub fn run_err(&self, stdin: &str, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .args(args)
            .write_stdin(stdin)
            .assert()
            .code(1)
            .stdout("")
            .get_output()
            .stderr
            .clone();
        serde_json::from_slice(&out).expect("valid json on stderr")
    }
}
