//! Actions service.

use super::*;
use octorest::services::{CreateSecretRequest, ListWorkflowRunsParams, WorkflowDispatchRequest};
use octorest::{
    ApiOptions, GitHubErrorKind, WorkflowRunConclusion, WorkflowRunStatus, WorkflowState,
};
use std::collections::HashMap;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn run_json(id: u64, status: &str, conclusion: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": "CI",
        "workflow_id": 161335,
        "run_number": id,
        "event": "push",
        "status": status,
        "conclusion": conclusion,
        "head_branch": "main",
        "head_sha": "acb5820ced9479c074f688cc328bf03f341a511d",
        "created_at": "2026-01-02T03:04:05Z",
        "updated_at": "2026-01-02T03:14:05Z"
    })
}

#[tokio::test]
async fn test_list_workflows_unwraps_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/actions/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "workflows": [
                {"id": 161335, "name": "CI", "path": ".github/workflows/ci.yml", "state": "active"},
                {"id": 161336, "name": "Nightly", "path": ".github/workflows/nightly.yml", "state": "disabled_manually"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workflows = client
        .actions()
        .list_workflows("octocat", "hello-world", ApiOptions::new())
        .await
        .unwrap();
    assert_eq!(workflows.len(), 2);
    assert_eq!(workflows[1].state, WorkflowState::DisabledManually);
}

#[tokio::test]
async fn test_dispatch_by_file_name() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/actions/workflows/deploy.yml/dispatches"))
        .and(body_json(json!({"ref": "main", "inputs": {"environment": "staging"}})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let request = WorkflowDispatchRequest {
        git_ref: "main".to_string(),
        inputs: Some(HashMap::from([("environment".to_string(), "staging".to_string())])),
    };
    client
        .actions()
        .create_workflow_dispatch("octocat", "hello-world", "deploy.yml", &request)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_dispatch_requires_ref() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    let request = WorkflowDispatchRequest {
        git_ref: String::new(),
        inputs: None,
    };
    let error = client
        .actions()
        .create_workflow_dispatch("octocat", "hello-world", 161335u64, &request)
        .await
        .unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_list_runs_for_workflow_with_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/actions/workflows/161335/runs"))
        .and(query_param("branch", "main"))
        .and(query_param("status", "completed"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 2,
            "workflow_runs": [
                run_json(30433642, "completed", Some("success")),
                run_json(30433643, "completed", Some("brand_new_conclusion"))
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListWorkflowRunsParams {
        branch: Some("main".to_string()),
        status: Some("completed".to_string()),
        ..Default::default()
    };
    let runs = client
        .actions()
        .list_runs_for_workflow("octocat", "hello-world", 161335u64, &params, ApiOptions::new())
        .await
        .unwrap();

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].status, Some(WorkflowRunStatus::Completed));
    assert_eq!(runs[0].conclusion, Some(WorkflowRunConclusion::Success));
    assert_eq!(runs[1].conclusion, Some(WorkflowRunConclusion::Unknown));
}

#[tokio::test]
async fn test_cancel_and_rerun() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/actions/runs/30433642/cancel"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/actions/runs/30433642/rerun-failed-jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let actions = client.actions();
    actions
        .cancel_workflow_run("octocat", "hello-world", 30433642)
        .await
        .unwrap();
    actions
        .rerun_failed_jobs("octocat", "hello-world", 30433642)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_cancel_finished_run_conflicts() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/actions/runs/1/cancel"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Cannot cancel a workflow run that is completed."
        })))
        .mount(&server)
        .await;

    let error = client
        .actions()
        .cancel_workflow_run("octocat", "hello-world", 1)
        .await
        .unwrap_err();
    assert_eq!(error.status_code(), Some(409));
    assert_eq!(error.message(), "Cannot cancel a workflow run that is completed.");
}

#[tokio::test]
async fn test_download_run_logs_returns_bytes() {
    let (server, client) = setup().await;

    let archive: &[u8] = &[0x50, 0x4b, 0x03, 0x04, 0x14, 0x00];
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/actions/runs/30433642/logs"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/zip")
                .set_body_bytes(archive),
        )
        .expect(1)
        .mount(&server)
        .await;

    let bytes = client
        .actions()
        .download_workflow_run_logs("octocat", "hello-world", 30433642)
        .await
        .unwrap();
    assert_eq!(bytes.as_ref(), archive);
}

#[tokio::test]
async fn test_secret_public_key_and_upload() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/actions/secrets/public-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key_id": "012345678912345678",
            "key": "2Sg8iYjAxxmI2LvUXpJjkYrMxURPc8r+dB7TJyvv1234"
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/actions/secrets/DEPLOY_TOKEN"))
        .and(body_json(json!({
            "encrypted_value": "c2VjcmV0",
            "key_id": "012345678912345678"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let actions = client.actions();
    let key = actions.get_public_key("octocat", "hello-world").await.unwrap();
    let request = CreateSecretRequest {
        encrypted_value: "c2VjcmV0".to_string(),
        key_id: key.key_id,
    };
    actions
        .create_or_update_secret("octocat", "hello-world", "DEPLOY_TOKEN", &request)
        .await
        .unwrap();
}
