//! Repositories service.

use super::*;
use octorest::client::accept;
use octorest::services::{CreateOrUpdateFileRequest, CreateRepoRequest, ListReposParams, RepoSort};
use octorest::{ApiOptions, ContentType, GitHubErrorKind, SortDirection};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_sends_standard_headers() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world"))
        .and(header("authorization", bearer().as_str()))
        .and(header("accept", accept::JSON))
        .and(header("user-agent", "octorest-tests"))
        .and(header("x-github-api-version", "2022-11-28"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(repo_json(1296269, "octocat", "hello-world")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo = client.repositories().get("octocat", "hello-world").await.unwrap();
    assert_eq!(repo.full_name, "octocat/hello-world");
    assert_eq!(repo.owner.login, "octocat");
}

#[tokio::test]
async fn test_list_for_user_sends_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("sort", "updated"))
        .and(query_param("direction", "desc"))
        .and(query_param("per_page", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json(1, "octocat", "hello-world"),
            repo_json(2, "octocat", "spoon-knife")
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListReposParams {
        sort: Some(RepoSort::Updated),
        direction: Some(SortDirection::Desc),
        ..Default::default()
    };
    let repos = client
        .repositories()
        .list_for_user("octocat", &params, ApiOptions::new().page_size(50))
        .await
        .unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[1].name, "spoon-knife");
}

#[tokio::test]
async fn test_create_maps_existing_name() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(body_json(json!({"name": "hello-world"})))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Repository creation failed.",
            "errors": [{
                "resource": "Repository",
                "code": "custom",
                "field": "name",
                "message": "name already exists on this account"
            }]
        })))
        .mount(&server)
        .await;

    let request = CreateRepoRequest {
        name: "hello-world".to_string(),
        ..Default::default()
    };
    let error = client.repositories().create(&request).await.unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::RepositoryExists);
    assert_eq!(error.status_code(), Some(422));
}

#[tokio::test]
async fn test_create_maps_private_quota() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/orgs/github/repos"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Validation Failed",
            "errors": [{
                "resource": "Repository",
                "code": "custom",
                "message": "You need to upgrade your plan to create private repositories."
            }]
        })))
        .mount(&server)
        .await;

    let request = CreateRepoRequest {
        name: "secret".to_string(),
        private: Some(true),
        ..Default::default()
    };
    let error = client
        .repositories()
        .create_for_org("github", &request)
        .await
        .unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::PrivateRepositoryQuotaExceeded);
}

#[tokio::test]
async fn test_collaborator_check() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/collaborators/hubot"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/collaborators/stranger"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let repos = client.repositories();
    assert!(repos.is_collaborator("octocat", "hello-world", "hubot").await.unwrap());
    assert!(!repos.is_collaborator("octocat", "hello-world", "stranger").await.unwrap());
}

#[tokio::test]
async fn test_add_collaborator_with_permission() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/collaborators/hubot"))
        .and(body_json(json!({"permission": "maintain"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    client
        .repositories()
        .add_collaborator("octocat", "hello-world", "hubot", Some("maintain"))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_contents_file_and_directory() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/src"))
        .and(query_param("ref", "dev"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"type": "file", "name": "lib.rs", "path": "src/lib.rs", "sha": "a1", "size": 10},
            {"type": "dir", "name": "bin", "path": "src/bin", "sha": "b2", "size": 0}
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/README.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "type": "file",
            "encoding": "base64",
            "name": "README.md",
            "path": "README.md",
            "sha": "c3",
            "size": 5,
            "content": "aGVsbG8=\n"
        })))
        .mount(&server)
        .await;

    let repos = client.repositories();
    let listing = repos
        .get_contents("octocat", "hello-world", "src", Some("dev"))
        .await
        .unwrap();
    assert_eq!(listing.len(), 2);
    assert_eq!(listing[1].content_type, ContentType::Dir);

    let file = repos
        .get_contents("octocat", "hello-world", "README.md", None)
        .await
        .unwrap();
    assert_eq!(file.len(), 1);
    assert_eq!(file[0].decoded().unwrap().unwrap(), b"hello");
}

#[tokio::test]
async fn test_raw_content_uses_raw_media_type() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/contents/docs/guide.md"))
        .and(header("accept", accept::RAW))
        .and(query_param("ref", "v1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Guide\n"))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client
        .repositories()
        .get_raw_content("octocat", "hello-world", "docs/guide.md", Some("v1.0"))
        .await
        .unwrap();
    assert_eq!(raw, "# Guide\n");
}

#[tokio::test]
async fn test_create_file_encodes_content() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/contents/notes/today.txt"))
        .and(body_json(json!({"message": "Add notes", "content": "aGVsbG8="})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "content": {"type": "file", "name": "today.txt", "path": "notes/today.txt", "sha": "d4"},
            "commit": {"sha": "e5", "message": "Add notes"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .repositories()
        .create_or_update_file(
            "octocat",
            "hello-world",
            "notes/today.txt",
            &CreateOrUpdateFileRequest::new("Add notes", "hello"),
        )
        .await
        .unwrap();
    assert_eq!(response.commit.sha, "e5");
}

#[tokio::test]
async fn test_replace_topics() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/repos/octocat/hello-world/topics"))
        .and(body_json(json!({"names": ["rust", "github"]})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"names": ["rust", "github"]})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let topics = client
        .repositories()
        .replace_topics("octocat", "hello-world", &["rust".to_string(), "github".to_string()])
        .await
        .unwrap();
    assert_eq!(topics, vec!["rust".to_string(), "github".to_string()]);
}

#[tokio::test]
async fn test_dot_segments_never_reach_the_server() {
    let (server, client) = setup().await;

    for verb in ["GET", "DELETE"] {
        Mock::given(method(verb))
            .respond_with(ResponseTemplate::new(204))
            .expect(0)
            .mount(&server)
            .await;
    }

    let repos = client.repositories();
    let deleted = repos.delete("..", "user").await.unwrap_err();
    assert_eq!(*deleted.kind(), GitHubErrorKind::InvalidParameter);

    let contents = repos
        .get_contents("octocat", "hello-world", "../../../user", None)
        .await
        .unwrap_err();
    assert_eq!(*contents.kind(), GitHubErrorKind::InvalidParameter);

    let branch = repos
        .get_branch("octocat", "hello-world", "main/../../..")
        .await
        .unwrap_err();
    assert_eq!(*branch.kind(), GitHubErrorKind::InvalidParameter);

    let raw = client
        .get::<Value>("repos/octocat/hello-world/%2e%2e/%2E%2E/user")
        .await
        .unwrap_err();
    assert_eq!(*raw.kind(), GitHubErrorKind::InvalidParameter);
}
