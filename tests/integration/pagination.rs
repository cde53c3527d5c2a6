//! Link-header pagination.

use super::*;
use octorest::services::ListIssuesParams;
use octorest::{ApiOptions, GitHubErrorKind, Repository, SearchResults};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn next_link(server: &MockServer, page: u32) -> String {
    format!(
        "<{}/repositories/1/issues?page={}>; rel=\"next\", <{}/repositories/1/issues?page=3>; rel=\"last\"",
        server.uri(),
        page,
        server.uri()
    )
}

#[tokio::test]
async fn test_follows_next_links_until_exhausted() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repositories/1/issues"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([issue_json(5, "five")])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repositories/1/issues"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&server, 3).as_str())
                .set_body_json(json!([issue_json(3, "three"), issue_json(4, "four")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues"))
        .and(header("authorization", bearer().as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&server, 2).as_str())
                .set_body_json(json!([issue_json(1, "one"), issue_json(2, "two")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let issues = client
        .issues()
        .list_for_repo("octocat", "hello-world", &ListIssuesParams::default(), ApiOptions::new())
        .await
        .unwrap();

    let numbers: Vec<u64> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_page_count_stops_early() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues"))
        .and(query_param("per_page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next_link(&server, 2).as_str())
                .set_body_json(json!([issue_json(1, "one"), issue_json(2, "two")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/repositories/1/issues"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([issue_json(3, "three")])))
        .expect(0)
        .mount(&server)
        .await;

    let issues = client
        .issues()
        .list_for_repo(
            "octocat",
            "hello-world",
            &ListIssuesParams::default(),
            ApiOptions::new().page_size(2).page_count(1),
        )
        .await
        .unwrap();

    assert_eq!(issues.len(), 2);
}

#[tokio::test]
async fn test_rejects_next_link_to_other_host() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/issues"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", "<https://evil.example.com/steal?page=2>; rel=\"next\"")
                .set_body_json(json!([issue_json(1, "one")])),
        )
        .mount(&server)
        .await;

    let error = client
        .issues()
        .list_for_repo("octocat", "hello-world", &ListIssuesParams::default(), ApiOptions::new())
        .await
        .unwrap_err();

    assert_eq!(*error.kind(), GitHubErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_page_iterator_over_search_envelope() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_count": 3,
            "incomplete_results": false,
            "items": [repo_json(3, "c", "three")]
        })))
        .mount(&server)
        .await;

    let link = format!("<{}/search/repositories?q=rust&page=2>; rel=\"next\"", server.uri());
    Mock::given(method("GET"))
        .and(path("/search/repositories"))
        .and(query_param("q", "rust"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", link.as_str())
                .set_body_json(json!({
                    "total_count": 3,
                    "incomplete_results": false,
                    "items": [repo_json(1, "a", "one"), repo_json(2, "b", "two")]
                })),
        )
        .mount(&server)
        .await;

    let mut pages = client.pages::<SearchResults<Repository>>(
        "search/repositories",
        vec![("q".to_string(), "rust".to_string())],
        ApiOptions::new(),
    );

    let first = pages.next_page().await.unwrap().unwrap();
    assert_eq!(first.total_count, Some(3));
    assert_eq!(first.len(), 2);
    assert!(pages.has_more());

    let second = pages.next_page().await.unwrap().unwrap();
    assert_eq!(second.items[0].name, "three");
    assert!(!pages.has_more());
    assert!(pages.next_page().await.unwrap().is_none());
}
