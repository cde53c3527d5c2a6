//! Users service.

use super::*;
use octorest::services::UpdateUserRequest;
use octorest::{ApiOptions, GitHubErrorKind};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_get_current_includes_private_fields() {
    let (server, client) = setup().await;

    let mut body = user_json(1, "octocat");
    body["name"] = json!("The Octocat");
    body["public_repos"] = json!(8);
    body["total_private_repos"] = json!(100);
    body["two_factor_authentication"] = json!(true);
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let me = client.users().get_current().await.unwrap();
    assert_eq!(me.profile.user.login, "octocat");
    assert_eq!(me.profile.name.as_deref(), Some("The Octocat"));
    assert_eq!(me.profile.public_repos, 8);
    assert_eq!(me.total_private_repos, Some(100));
    assert_eq!(me.two_factor_authentication, Some(true));
}

#[tokio::test]
async fn test_get_encodes_username() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/..%2Fadmin"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .expect(1)
        .mount(&server)
        .await;

    let error = client.users().get("../admin").await.unwrap_err();
    assert!(error.is_not_found());
}

#[tokio::test]
async fn test_update_sends_only_set_fields() {
    let (server, client) = setup().await;

    let mut body = user_json(1, "octocat");
    body["location"] = json!("San Francisco");
    Mock::given(method("PATCH"))
        .and(path("/user"))
        .and(body_json(json!({"location": "San Francisco", "hireable": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let request = UpdateUserRequest {
        location: Some("San Francisco".to_string()),
        hireable: Some(true),
        ..Default::default()
    };
    let me = client.users().update(&request).await.unwrap();
    assert_eq!(me.profile.location.as_deref(), Some("San Francisco"));
}

#[tokio::test]
async fn test_list_all_since() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("since", "41"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(42, "hubot")])))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.users().list_all(Some(41), ApiOptions::new()).await.unwrap();
    assert_eq!(users[0].id, 42);
}

#[tokio::test]
async fn test_follow_status_and_toggle() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/user/following/hubot"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/user/following/hubot"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/hubot/following/octocat"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let users = client.users();
    assert!(!users.is_following("hubot").await.unwrap());
    users.follow("hubot").await.unwrap();
    assert!(users.is_user_following("hubot", "octocat").await.unwrap());
}

#[tokio::test]
async fn test_emails_add_and_delete() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/user/emails"))
        .and(body_json(json!({"emails": ["octocat@example.com"]})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([{
            "email": "octocat@example.com",
            "primary": false,
            "verified": false,
            "visibility": null
        }])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/user/emails"))
        .and(body_json(json!({"emails": ["octocat@example.com"]})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let users = client.users();
    let emails = vec!["octocat@example.com".to_string()];
    let added = users.add_emails(&emails).await.unwrap();
    assert!(!added[0].verified);
    users.delete_emails(&emails).await.unwrap();
}

#[tokio::test]
async fn test_empty_email_list_is_rejected() {
    let (_server, client) = setup().await;

    let error = client.users().add_emails(&[]).await.unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::InvalidParameter);
}

#[tokio::test]
async fn test_create_gpg_key() {
    let (server, client) = setup().await;

    let armored = "-----BEGIN PGP PUBLIC KEY BLOCK-----\nmQINBFnZ2ZIBEADQ2Z7Z7\n-----END PGP PUBLIC KEY BLOCK-----";
    Mock::given(method("POST"))
        .and(path("/user/gpg_keys"))
        .and(body_json(json!({"armored_public_key": armored})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 3,
            "key_id": "3262EFF25BA0D270",
            "emails": [{"email": "octocat@users.noreply.github.com", "verified": true}],
            "can_sign": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let key = client.users().create_gpg_key(armored).await.unwrap();
    assert_eq!(key.key_id, "3262EFF25BA0D270");
    assert!(key.can_sign);
    assert!(key.emails[0].verified);
}
