use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

pub struct StubGuard {
    pub base_url: String,
    pub data_dir: tempfile::TempDir,
    child: Child,
}

impl Drop for StubGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl StubGuard {
    #[allow(dead_code)]
    pub fn stats(&self) -> Result<serde_json::Value> {
        let v = reqwest::blocking::get(format!("{}/stats", self.base_url))
            .context("GET /stats")?
            .json()
            .context("parse stats")?;
        Ok(v)
    }

    #[allow(dead_code)]
    pub fn write_script(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.data_dir.path().join(name);
        std::fs::write(&path, content).with_context(|| format!("write {}", name))?;
        Ok(path)
    }
}

#[derive(Default)]
pub struct StubOptions {
    pub disks: Option<serde_json::Value>,
    pub users: Vec<&'static str>,
    pub execute_delay_ms: u64,
    pub fail_execute: bool,
}

#[allow(dead_code)]
pub fn spawn_stub() -> Result<StubGuard> {
    spawn_stub_with(StubOptions::default())
}

pub fn spawn_stub_with(opts: StubOptions) -> Result<StubGuard> {
    let data_dir = tempfile::tempdir().context("create stub tempdir")?;
    let addr_file = data_dir.path().join("addr.txt");

    let mut args: Vec<String> = vec![
        "--addr".to_string(),
        "127.0.0.1:0".to_string(),
        "--addr-file".to_string(),
        addr_file.display().to_string(),
        "--execute-delay-ms".to_string(),
        opts.execute_delay_ms.to_string(),
    ];
    if let Some(disks) = &opts.disks {
        let disks_file = data_dir.path().join("disks.json");
        std::fs::write(&disks_file, serde_json::to_vec(disks)?).context("write disks.json")?;
        args.push("--disks-file".to_string());
        args.push(disks_file.display().to_string());
    }
    for u in &opts.users {
        args.push("--user".to_string());
        args.push(u.to_string());
    }
    if opts.fail_execute {
        args.push("--fail-execute".to_string());
    }

    let child = Command::new(env!("CARGO_BIN_EXE_smia-engine-stub"))
        .args(&args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn smia-engine-stub")?;

    let mut guard = StubGuard {
        base_url: String::new(),
        data_dir,
        child,
    };
    guard.base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&guard.base_url)?;
    Ok(guard)
}

fn read_addr_file(addr_file: &std::path::Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("stub did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

#[allow(dead_code)]
pub fn disk1_catalog() -> serde_json::Value {
    serde_json::json!([
        {"name": "disk1", "size": 5000000, "fit": "FF", "mounted_partitions": ["Part1"]}
    ])
}

/// An address nothing listens on.
#[allow(dead_code)]
pub fn dead_url() -> Result<String> {
    let l = std::net::TcpListener::bind("127.0.0.1:0").context("bind probe")?;
    let addr = l.local_addr().context("probe addr")?;
    drop(l);
    Ok(format!("http://{}", addr))
}
