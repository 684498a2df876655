use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    decls: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let decls = tmp.path().join("decls");
        fs::create_dir_all(&decls).expect("create declarations dir");

        Self {
            _tmp: tmp,
            home,
            decls,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ghirbal");
        cmd.env("HOME", &self.home);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_declaration(&self, name: &str, value: Value) -> PathBuf {
        let path = self.decls.join(name);
        fs::write(
            &path,
            serde_json::to_string_pretty(&value).expect("serialize declaration"),
        )
        .expect("write declaration");
        path
    }

    /// Tier 1 well under the default 5% benchmark, both Tier 2 ratios under 33%.
    pub fn passing_declaration(&self) -> PathBuf {
        self.write_declaration(
            "passing.json",
            serde_json::json!({
                "items": {"Gambling": 400.0},
                "pbt": 10000.0,
                "cash_conventional": 3000.0,
                "interest_bearing_debt": 2000.0,
                "total_assets": 10000.0
            }),
        )
    }

    /// 1500 / 20000 = 7.5% contribution, above the default benchmark.
    pub fn tier1_failing_declaration(&self) -> PathBuf {
        self.write_declaration(
            "tier1_failing.json",
            serde_json::json!({
                "items": {"Conventional insurance": 500.0, "Gambling": 1000.0},
                "pbt": 20000.0,
                "cash_conventional": 3000.0,
                "interest_bearing_debt": 4000.0,
                "total_assets": 10000.0
            }),
        )
    }
}
