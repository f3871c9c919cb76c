//! Shared testing utilities for escala-admin CLI tests.

use assert_cmd::Command;
use mockito::{Server, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_TOKEN: &str = "test-token";

/// Isolated working directory plus a mock API server.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    server: ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new environment with `escala.toml` pointing at the mock server.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let server = Server::new();

        let ctx = Self { root, work_dir, server };
        ctx.write_config("");
        ctx
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    pub fn server_url(&self) -> String {
        self.server.url()
    }

    /// Path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write `escala.toml` in the work directory. `extra` is appended after
    /// the `[api]` table.
    pub fn write_config(&self, extra: &str) {
        let content = format!(
            "[api]\nbase_url = \"{}\"\ntimeout_secs = 5\n{}",
            self.server.url(),
            extra
        );
        fs::write(self.work_dir.join("escala.toml"), content)
            .expect("Failed to write escala.toml");
    }

    /// Build a command for the compiled binary, authenticated with [`TEST_TOKEN`].
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_without_token();
        cmd.env("ESCALA_API_TOKEN", TEST_TOKEN);
        cmd
    }

    pub fn cli_without_token(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("escala-admin").expect("Failed to locate escala-admin binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env_remove("ESCALA_API_TOKEN")
            .env_remove("ESCALA_CONFIG")
            .env_remove("ESCALA_API_URL")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Paginated envelope in the nested `meta` shape.
#[allow(dead_code)]
pub fn page_body(data: serde_json::Value, total: u64) -> String {
    let count = data.as_array().map(|items| items.len()).unwrap_or(0) as u64;
    let total = total.max(count);
    serde_json::json!({
        "data": data,
        "meta": {"page": 1, "limit": 10, "total": total, "totalPages": total.div_ceil(10)}
    })
    .to_string()
}
