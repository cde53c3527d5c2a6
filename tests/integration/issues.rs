//! Issues service.

use super::*;
use octorest::services::{
    CreateIssueRequest, IssueFilter, ListIssuesParams, LockReason, StateReason, UpdateIssueRequest,
};
use octorest::{ApiOptions, GitHubErrorKind, IssueState, StateFilter};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_list_for_repo_sends_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues"))
        .and(query_param("state", "closed"))
        .and(query_param("labels", "bug,ui"))
        .and(query_param("creator", "hubot"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([issue_json(7, "Crash on save")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let params = ListIssuesParams {
        state: Some(StateFilter::Closed),
        labels: Some("bug,ui".to_string()),
        creator: Some("hubot".to_string()),
        ..Default::default()
    };
    let issues = client
        .issues()
        .list_for_repo("octocat", "hello-world", &params, ApiOptions::new())
        .await
        .unwrap();

    assert_eq!(issues[0].title, "Crash on save");
}

#[tokio::test]
async fn test_list_for_current_user() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/user/issues"))
        .and(query_param("filter", "mentioned"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListIssuesParams {
        filter: Some(IssueFilter::Mentioned),
        ..Default::default()
    };
    let issues = client
        .issues()
        .list_for_current(&params, ApiOptions::new())
        .await
        .unwrap();
    assert!(issues.is_empty());
}

#[tokio::test]
async fn test_create_posts_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/issues"))
        .and(body_json(json!({
            "title": "Found a bug",
            "body": "Steps to reproduce",
            "labels": ["bug"]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(issue_json(42, "Found a bug")))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateIssueRequest {
        body: Some("Steps to reproduce".to_string()),
        labels: Some(vec!["bug".to_string()]),
        ..CreateIssueRequest::new("Found a bug")
    };
    let issue = client
        .issues()
        .create("octocat", "hello-world", &request)
        .await
        .unwrap();
    assert_eq!(issue.number, 42);
    assert_eq!(issue.state, IssueState::Open);
}

#[tokio::test]
async fn test_close_with_reason() {
    let (server, client) = setup().await;

    let mut closed = issue_json(42, "Found a bug");
    closed["state"] = json!("closed");
    Mock::given(method("PATCH"))
        .and(path("/repos/octocat/hello-world/issues/42"))
        .and(body_json(json!({"state": "closed", "state_reason": "not_planned"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(closed))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateIssueRequest {
        state: Some(IssueState::Closed),
        state_reason: Some(StateReason::NotPlanned),
        ..Default::default()
    };
    let issue = client
        .issues()
        .update("octocat", "hello-world", 42, &request)
        .await
        .unwrap();
    assert_eq!(issue.state, IssueState::Closed);
}

#[tokio::test]
async fn test_state_reason_without_state_is_rejected() {
    let (_server, client) = setup().await;

    let request = UpdateIssueRequest {
        state_reason: Some(StateReason::Completed),
        ..Default::default()
    };
    let error = client
        .issues()
        .update("octocat", "hello-world", 42, &request)
        .await
        .unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_lock_sends_wire_reason() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/issues/42/lock"))
        .and(body_json(json!({"lock_reason": "too heated"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .issues()
        .lock("octocat", "hello-world", 42, Some(LockReason::TooHeated))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_label_encodes_name() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/repos/octocat/hello-world/issues/42/labels/good%20first%20issue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "bug", "color": "d73a4a"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let remaining = client
        .issues()
        .remove_label("octocat", "hello-world", 42, "good first issue")
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].name, "bug");
}

#[tokio::test]
async fn test_comment_roundtrip() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/issues/42/comments"))
        .and(body_json(json!({"body": "Me too"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 9,
            "body": "Me too",
            "user": user_json(2, "hubot"),
            "created_at": "2026-01-02T03:04:05Z",
            "updated_at": "2026-01-02T03:04:05Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/repos/octocat/hello-world/issues/comments/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let issues = client.issues();
    let comment = issues
        .create_comment("octocat", "hello-world", 42, "Me too")
        .await
        .unwrap();
    assert_eq!(comment.id, 9);
    issues
        .delete_comment("octocat", "hello-world", comment.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_check_assignee() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/assignees/hubot"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    assert!(client
        .issues()
        .check_assignee("octocat", "hello-world", "hubot")
        .await
        .unwrap());
}
