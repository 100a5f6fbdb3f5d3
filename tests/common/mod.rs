use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("devcareer").expect("binary under test");
        cmd.env("HOME", &self.home)
            .env_remove("DEVCAREER_API_BASE")
            .env_remove("DEVCAREER_SUBMIT_URL");
        cmd
    }

    /// Run a local-only command (never touches the network).
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

    /// Run a command against a stub API base.
    pub fn run_json_api(&self, base: &str, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .arg("--api-base")
            .arg(base)
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn clear_cooldown(&self) {
        let _ = fs::remove_file(self.home.join(".config/devcareer/last_submit"));
    }

    pub fn queue_path(&self) -> PathBuf {
        self.home.join(".config/devcareer/queue.json")
    }

    /// Seed the durable queue directly, bypassing the submit path.
    pub fn write_queue(&self, entries: &[Value]) {
        let path = self.queue_path();
        fs::create_dir_all(path.parent().expect("queue parent")).expect("create config dir");
        fs::write(path, serde_json::to_string_pretty(entries).expect("encode queue"))
            .expect("write queue file");
    }
}

pub fn queued_entry(salary: f64, token: &str) -> Value {
    serde_json::json!({
        "role": "Backend",
        "level": "Senior",
        "experienceYears": 6.0,
        "salaryAmount": salary,
        "currency": "AMD",
        "period": "Monthly",
        "netOrGross": "Net",
        "location": "Yerevan",
        "companyName": "Example LLC",
        "claimToken": token,
        "queuedAt": 1_700_000_000_000u64
    })
}

pub fn valid_submit_args(salary: &str) -> Vec<String> {
    [
        "submit",
        "--company",
        "Example LLC",
        "--role",
        "Backend",
        "--level",
        "Senior",
        "--experience",
        "6",
        "--salary",
        salary,
        "--location",
        "Yerevan",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
