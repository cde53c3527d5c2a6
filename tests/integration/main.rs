//! Integration tests against a mock GitHub served by WireMock.
//!
//! Each test stands up its own server, points a client at it and checks the
//! verb, path, query, headers and body the client sends, and how responses
//! come back as values or typed errors.

mod actions;
mod apps;
mod codespaces;
mod git_data;
mod issues;
mod miscellaneous;
mod organizations;
mod pagination;
mod pull_requests;
mod repositories;
mod users;

use octorest::GitHubClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "ghp_integration";

/// Starts a mock server and a client authenticated with [`TOKEN`].
pub async fn setup() -> (MockServer, GitHubClient) {
    let server = MockServer::start().await;
    let client = client_for(&server);
    (server, client)
}

pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::builder()
        .base_url(server.uri())
        .pat(TOKEN)
        .user_agent("octorest-tests")
        .build()
        .expect("client builds")
}

pub fn bearer() -> String {
    format!("Bearer {}", TOKEN)
}

pub fn user_json(id: u64, login: &str) -> Value {
    json!({
        "id": id,
        "login": login,
        "node_id": format!("U_{}", id),
        "type": "User",
        "site_admin": false
    })
}

pub fn repo_json(id: u64, owner: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "full_name": format!("{}/{}", owner, name),
        "owner": user_json(1, owner),
        "private": false,
        "default_branch": "main"
    })
}

pub fn issue_json(number: u64, title: &str) -> Value {
    json!({
        "id": 1000 + number,
        "number": number,
        "title": title,
        "state": "open",
        "user": user_json(1, "octocat"),
        "labels": [],
        "created_at": "2026-01-02T03:04:05Z",
        "updated_at": "2026-01-02T03:04:05Z"
    })
}

pub fn pull_json(number: u64) -> Value {
    json!({
        "id": 2000 + number,
        "number": number,
        "title": "Add feature",
        "state": "open",
        "head": {"ref": "feature", "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e"},
        "base": {"ref": "main", "sha": "9a3c1e4f0b7d2a5c8e6f1b3d5a7c9e0f2b4d6a8c"},
        "created_at": "2026-01-02T03:04:05Z",
        "updated_at": "2026-01-02T03:04:05Z"
    })
}
