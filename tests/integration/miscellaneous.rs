//! Rate limits, metadata, markdown, gitignore templates and licenses.

use super::*;
use octorest::client::accept;
use octorest::services::MarkdownRequest;
use octorest::GitHubErrorKind;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_rate_limit_categories() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rate_limit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": {
                "core": {"limit": 5000, "remaining": 4321, "reset": 4102444800u64, "used": 679},
                "search": {"limit": 30, "remaining": 30, "reset": 4102444800u64, "used": 0}
            },
            "rate": {"limit": 5000, "remaining": 4321, "reset": 4102444800u64, "used": 679}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let limits = client.miscellaneous().rate_limit().await.unwrap();
    assert_eq!(limits.core().remaining, 4321);
    assert_eq!(limits.core().used, 679);
    assert_eq!(limits.search().map(|s| s.limit), Some(30));
}

#[tokio::test]
async fn test_meta() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/meta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "verifiable_password_authentication": true,
            "ssh_key_fingerprints": {"SHA256_ED25519": "+DiY3wvvV6TuJJhbpZisF/zLDA0zPMSvHdkr4UvCOqU"},
            "hooks": ["192.30.252.0/22"],
            "git": ["192.30.252.0/22", "185.199.108.0/22"]
        })))
        .mount(&server)
        .await;

    let meta = client.miscellaneous().meta().await.unwrap();
    assert!(meta.verifiable_password_authentication);
    assert_eq!(meta.git.len(), 2);
    assert!(meta.actions.is_empty());
    assert!(meta.ssh_key_fingerprints.contains_key("SHA256_ED25519"));
}

#[tokio::test]
async fn test_render_gfm_returns_html() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/markdown"))
        .and(header("accept", accept::HTML))
        .and(body_json(json!({
            "text": "Hello **world** #1",
            "mode": "gfm",
            "context": "octocat/hello-world"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html;charset=utf-8")
                .set_body_string("<p>Hello <strong>world</strong> <a href=\"#\">#1</a></p>"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let html = client
        .miscellaneous()
        .render_markdown(&MarkdownRequest::gfm("Hello **world** #1", "octocat/hello-world"))
        .await
        .unwrap();
    assert!(html.starts_with("<p>Hello <strong>world</strong>"));
}

#[tokio::test]
async fn test_render_empty_markdown_is_rejected() {
    let (_server, client) = setup().await;

    let error = client
        .miscellaneous()
        .render_markdown(&MarkdownRequest::markdown(""))
        .await
        .unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_gitignore_template() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/gitignore/templates/Rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Rust",
            "source": "/target\nCargo.lock\n"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let template = client
        .miscellaneous()
        .gitignore_template("Rust")
        .await
        .unwrap();
    assert_eq!(template.source.lines().next(), Some("/target"));
}

#[tokio::test]
async fn test_license_detail_and_repository_license() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/licenses/mit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": "mit",
            "name": "MIT License",
            "spdx_id": "MIT",
            "html_url": "http://choosealicense.com/licenses/mit/",
            "permissions": ["commercial-use", "modifications"],
            "conditions": ["include-copyright"],
            "limitations": ["no-liability"],
            "body": "MIT License\n\nCopyright (c) [year] [fullname]"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/license"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "LICENSE",
            "path": "LICENSE",
            "sha": "401c59dcc4570b954dd6d345e76199e1f4e76266",
            "content": "TUlUIExpY2Vuc2U=",
            "license": {"key": "mit", "name": "MIT License", "spdx_id": "MIT"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let misc = client.miscellaneous();
    let mit = misc.license("mit").await.unwrap();
    assert_eq!(mit.license.spdx_id.as_deref(), Some("MIT"));
    assert_eq!(mit.permissions.len(), 2);

    let detected = misc.repository_license("octocat", "hello-world").await.unwrap();
    assert_eq!(detected.license.map(|l| l.key).as_deref(), Some("mit"));
}
