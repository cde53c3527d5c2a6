//! Pull requests service.

use super::*;
use octorest::client::accept;
use octorest::services::{CreatePullRequestRequest, MergeMethod, MergePullRequestRequest};
use octorest::GitHubErrorKind;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_create() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/pulls"))
        .and(body_json(json!({"title": "Add feature", "head": "feature", "base": "main"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(pull_json(12)))
        .expect(1)
        .mount(&server)
        .await;

    let pull = client
        .pull_requests()
        .create(
            "octocat",
            "hello-world",
            &CreatePullRequestRequest::new("Add feature", "feature", "main"),
        )
        .await
        .unwrap();
    assert_eq!(pull.number, 12);
    assert_eq!(pull.head.sha, "6dcb09b5b57875f334f61aebed695e2e4193db5e");
}

#[tokio::test]
async fn test_create_requires_title_or_issue() {
    let (_server, client) = setup().await;

    let mut request = CreatePullRequestRequest::new("Add feature", "feature", "main");
    request.issue = Some(3);
    let error = client
        .pull_requests()
        .create("octocat", "hello-world", &request)
        .await
        .unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_diff_uses_diff_media_type() {
    let (server, client) = setup().await;

    let diff = "diff --git a/README b/README\n+hello\n";
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/pulls/12"))
        .and(header("accept", accept::DIFF))
        .respond_with(ResponseTemplate::new(200).set_body_string(diff))
        .expect(1)
        .mount(&server)
        .await;

    let body = client
        .pull_requests()
        .get_diff("octocat", "hello-world", 12)
        .await
        .unwrap();
    assert_eq!(body, diff);
}

#[tokio::test]
async fn test_is_merged() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/pulls/12/merge"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/pulls/13/merge"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let pulls = client.pull_requests();
    assert!(pulls.is_merged("octocat", "hello-world", 12).await.unwrap());
    assert!(!pulls.is_merged("octocat", "hello-world", 13).await.unwrap());
}

#[tokio::test]
async fn test_merge_success() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/pulls/12/merge"))
        .and(body_json(json!({"sha": "6dcb09b", "merge_method": "squash"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "merged": true,
            "message": "Pull Request successfully merged"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = MergePullRequestRequest {
        sha: Some("6dcb09b".to_string()),
        merge_method: Some(MergeMethod::Squash),
        ..Default::default()
    };
    let result = client
        .pull_requests()
        .merge("octocat", "hello-world", 12, &request)
        .await
        .unwrap();
    assert!(result.merged);
}

#[tokio::test]
async fn test_merge_not_mergeable() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/pulls/12/merge"))
        .respond_with(ResponseTemplate::new(405).set_body_json(json!({
            "message": "Pull Request is not mergeable"
        })))
        .mount(&server)
        .await;

    let error = client
        .pull_requests()
        .merge("octocat", "hello-world", 12, &MergePullRequestRequest::default())
        .await
        .unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::PullRequestNotMergeable);
    assert_eq!(error.status_code(), Some(405));
}

#[tokio::test]
async fn test_merge_sha_mismatch() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/pulls/12/merge"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "message": "Head branch was modified. Review and try the merge again."
        })))
        .mount(&server)
        .await;

    let request = MergePullRequestRequest {
        sha: Some("stale".to_string()),
        ..Default::default()
    };
    let error = client
        .pull_requests()
        .merge("octocat", "hello-world", 12, &request)
        .await
        .unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::PullRequestShaMismatch);
}

#[tokio::test]
async fn test_list_commits_decodes_git_data() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/pulls/12/commits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
            "commit": {
                "message": "Fix all the bugs",
                "author": {"name": "Monalisa Octocat", "email": "mona@github.com", "date": "2026-01-02T03:04:05Z"}
            },
            "author": user_json(1, "octocat")
        }])))
        .mount(&server)
        .await;

    let commits = client
        .pull_requests()
        .list_commits("octocat", "hello-world", 12, octorest::ApiOptions::new())
        .await
        .unwrap();
    assert_eq!(commits[0].commit.message, "Fix all the bugs");
    assert_eq!(
        commits[0].commit.author.as_ref().map(|a| a.email.as_str()),
        Some("mona@github.com")
    );
}
