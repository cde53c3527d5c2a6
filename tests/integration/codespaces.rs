//! Codespaces service.

use super::*;
use octorest::services::{CreateCodespaceRequest, ListMachinesParams};
use octorest::{ApiOptions, CodespaceState, GitHubErrorKind};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn codespace_json(name: &str, state: &str) -> Value {
    json!({
        "id": 1,
        "name": name,
        "display_name": "hello world",
        "owner": user_json(1, "octocat"),
        "repository": repo_json(1296269, "octocat", "hello-world"),
        "machine": {
            "name": "standardLinux32gb",
            "display_name": "4 cores, 16 GB RAM, 32 GB storage",
            "operating_system": "linux",
            "storage_in_bytes": 34359738368u64,
            "memory_in_bytes": 17179869184u64,
            "cpus": 4
        },
        "state": state,
        "git_status": {"ahead": 0, "behind": 2, "ref": "main"},
        "location": "WestUs2",
        "created_at": "2026-01-02T03:04:05Z",
        "updated_at": "2026-01-02T03:04:05Z"
    })
}

#[tokio::test]
async fn test_list_unwraps_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/user/codespaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "codespaces": [
                codespace_json("octo-space-1", "Available"),
                codespace_json("octo-space-2", "Hibernating")
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let codespaces = client.codespaces().list(ApiOptions::new()).await.unwrap();
    assert_eq!(codespaces.len(), 2);
    assert_eq!(codespaces[0].state, CodespaceState::Available);
    assert_eq!(codespaces[1].state, CodespaceState::Unrecognized);
    assert_eq!(
        codespaces[0].git_status.as_ref().map(|s| s.behind),
        Some(2)
    );
}

#[tokio::test]
async fn test_create_accepted_while_provisioning() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/codespaces"))
        .and(body_json(json!({"ref": "main", "machine": "standardLinux32gb"})))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(codespace_json("octo-space-3", "Provisioning")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateCodespaceRequest {
        git_ref: Some("main".to_string()),
        machine: Some("standardLinux32gb".to_string()),
        ..Default::default()
    };
    let codespace = client
        .codespaces()
        .create_for_repo("octocat", "hello-world", &request)
        .await
        .unwrap();
    assert_eq!(codespace.state, CodespaceState::Provisioning);
    assert_eq!(codespace.repository.full_name, "octocat/hello-world");
}

#[tokio::test]
async fn test_start_and_stop() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/user/codespaces/octo-space-1/start"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(codespace_json("octo-space-1", "Starting")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/user/codespaces/octo-space-1/stop"))
        .respond_with(
            ResponseTemplate::new(202)
                .set_body_json(codespace_json("octo-space-1", "ShuttingDown")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let codespaces = client.codespaces();
    let started = codespaces.start("octo-space-1").await.unwrap();
    assert_eq!(started.state, CodespaceState::Starting);
    let stopped = codespaces.stop("octo-space-1").await.unwrap();
    assert_eq!(stopped.state, CodespaceState::ShuttingDown);
}

#[tokio::test]
async fn test_list_machines_for_repo() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/codespaces/machines"))
        .and(query_param("location", "WestUs2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 1,
            "machines": [{
                "name": "standardLinux32gb",
                "display_name": "4 cores, 16 GB RAM, 32 GB storage",
                "operating_system": "linux",
                "storage_in_bytes": 34359738368u64,
                "memory_in_bytes": 17179869184u64,
                "cpus": 4,
                "prebuild_availability": "ready"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListMachinesParams {
        location: Some("WestUs2".to_string()),
        ..Default::default()
    };
    let machines = client
        .codespaces()
        .list_machines_for_repo("octocat", "hello-world", &params)
        .await
        .unwrap();
    assert_eq!(machines.len(), 1);
    assert_eq!(machines[0].cpus, 4);
}

#[tokio::test]
async fn test_empty_name_is_rejected() {
    let (_server, client) = setup().await;

    let error = client.codespaces().delete("").await.unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::InvalidParameter);
}
