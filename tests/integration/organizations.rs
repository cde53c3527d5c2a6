//! Organizations and teams.

use super::*;
use octorest::services::{
    CreateTeamRequest, ListMembersParams, MemberRoleFilter, MembershipRole, MembershipState,
    TeamMemberRole, TeamRepoPermission,
};
use octorest::{ApiOptions, TeamPrivacy};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn team_json(slug: &str, name: &str) -> Value {
    json!({
        "id": 42,
        "slug": slug,
        "name": name,
        "description": null,
        "privacy": "closed",
        "permission": "pull"
    })
}

#[tokio::test]
async fn test_get_organization() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/orgs/github"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 9919,
            "login": "github",
            "name": "GitHub",
            "public_repos": 480,
            "created_at": "2008-05-11T04:37:31Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let org = client.organizations().get("github").await.unwrap();
    assert_eq!(org.login, "github");
    assert_eq!(org.public_repos, Some(480));
}

#[tokio::test]
async fn test_list_all_sends_since() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(query_param("since", "135"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 136, "login": "acme"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let orgs = client
        .organizations()
        .list_all(Some(135), ApiOptions::new())
        .await
        .unwrap();
    assert_eq!(orgs[0].login, "acme");
}

#[tokio::test]
async fn test_list_members_with_role() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/orgs/github/members"))
        .and(query_param("role", "admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(1, "octocat")])))
        .expect(1)
        .mount(&server)
        .await;

    let params = ListMembersParams {
        role: Some(MemberRoleFilter::Admin),
        ..Default::default()
    };
    let members = client
        .organizations()
        .list_members("github", &params, ApiOptions::new())
        .await
        .unwrap();
    assert_eq!(members[0].login, "octocat");
}

#[tokio::test]
async fn test_check_member() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/orgs/github/members/octocat"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orgs/github/members/hubot"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let orgs = client.organizations();
    assert!(orgs.check_member("github", "octocat").await.unwrap());
    assert!(!orgs.check_member("github", "hubot").await.unwrap());
}

#[tokio::test]
async fn test_set_membership_invites() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/orgs/github/memberships/hubot"))
        .and(body_json(json!({"role": "billing_manager"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "pending",
            "role": "billing_manager",
            "organization_url": "https://api.github.com/orgs/github",
            "user": user_json(2, "hubot")
        })))
        .expect(1)
        .mount(&server)
        .await;

    let membership = client
        .organizations()
        .set_membership("github", "hubot", MembershipRole::BillingManager)
        .await
        .unwrap();
    assert_eq!(membership.state, MembershipState::Pending);
    assert_eq!(membership.role, MembershipRole::BillingManager);
}

#[tokio::test]
async fn test_create_team() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/orgs/github/teams"))
        .and(body_json(json!({
            "name": "Justice League",
            "maintainers": ["octocat"],
            "privacy": "closed"
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(team_json("justice-league", "Justice League")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateTeamRequest {
        name: "Justice League".to_string(),
        maintainers: Some(vec!["octocat".to_string()]),
        privacy: Some(TeamPrivacy::Closed),
        ..Default::default()
    };
    let team = client
        .organizations()
        .create_team("github", &request)
        .await
        .unwrap();
    assert_eq!(team.slug, "justice-league");
    assert_eq!(team.privacy, Some(TeamPrivacy::Closed));
}

#[tokio::test]
async fn test_add_team_member_as_maintainer() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/orgs/github/teams/justice-league/memberships/hubot"))
        .and(body_json(json!({"role": "maintainer"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "state": "active",
            "role": "maintainer",
            "url": "https://api.github.com/teams/42/memberships/hubot"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let membership = client
        .organizations()
        .add_team_member("github", "justice-league", "hubot", TeamMemberRole::Maintainer)
        .await
        .unwrap();
    assert_eq!(membership.role, TeamMemberRole::Maintainer);
}

#[tokio::test]
async fn test_add_team_repo_with_permission() {
    let (server, client) = setup().await;

    Mock::given(method("PUT"))
        .and(path("/orgs/github/teams/justice-league/repos/octocat/hello-world"))
        .and(body_json(json!({"permission": "push"})))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .organizations()
        .add_team_repo(
            "github",
            "justice-league",
            "octocat",
            "hello-world",
            Some(TeamRepoPermission::Push),
        )
        .await
        .unwrap();
}
