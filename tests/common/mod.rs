#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde_json::Value;

pub const TEST_SECRET: &str = "integration-test-secret";

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_task-tracker-api"));
        cmd.env("APP_ENV", "development")
            .env("API_HOST", "127.0.0.1")
            .env("API_PORT", port.to_string())
            .env("JWT_SECRET", TEST_SECRET)
            .env("SECURITY_BCRYPT_COST", "4")
            .env("RUST_LOG", "warn")
            // No database: the server falls back to its in-memory store
            .env_remove("DATABASE_URL")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    let server = TestServer::spawn()?;
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Username that will not collide with other tests.
pub fn unique_username(prefix: &str) -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{}_{}_{}", prefix, nanos, COUNTER.fetch_add(1, Ordering::Relaxed))
}

pub async fn register(client: &Client, server: &TestServer, username: &str, password: &str) -> Result<StatusCode> {
    let res = client
        .post(server.url("/register"))
        .form(&[("username", username), ("password", password)])
        .send()
        .await?;
    Ok(res.status())
}

pub async fn login(client: &Client, server: &TestServer, username: &str, password: &str) -> Result<reqwest::Response> {
    let res = client
        .post(server.url("/login"))
        .form(&[("username", username), ("password", password)])
        .send()
        .await?;
    Ok(res)
}

/// Register a fresh user and return its bearer token.
pub async fn signed_up_token(client: &Client, server: &TestServer, prefix: &str) -> Result<String> {
    let username = unique_username(prefix);
    let status = register(client, server, &username, "correct-horse").await?;
    anyhow::ensure!(status == StatusCode::CREATED, "register returned {}", status);

    let res = login(client, server, &username, "correct-horse").await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "login returned {}", res.status());
    let body = res.json::<Value>().await?;
    body["token"]
        .as_str()
        .map(str::to_string)
        .context("login response missing token")
}

pub async fn list_tasks(client: &Client, server: &TestServer, token: &str) -> Result<Vec<Value>> {
    let res = client.get(server.url("/tasks")).bearer_auth(token).send().await?;
    anyhow::ensure!(res.status() == StatusCode::OK, "GET /tasks returned {}", res.status());
    let body = res.json::<Value>().await?;
    Ok(body.as_array().cloned().unwrap_or_default())
}

pub async fn create_task(client: &Client, server: &TestServer, token: &str, title: &str) -> Result<Value> {
    let res = client
        .post(server.url("/create"))
        .query(&[("title", title)])
        .bearer_auth(token)
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "POST /create returned {}", res.status());
    Ok(res.json::<Value>().await?)
}
