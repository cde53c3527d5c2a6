//! URL templates for the REST endpoints.
//!
//! Every function returns a path relative to the configured base URL.
//! Caller-supplied values are percent-encoded as single path segments, so an
//! owner of `a/b` cannot escape into another route. Content paths, branch
//! names and git refs keep their `/` separators.
//!
//! `.` and `..` are unreserved and survive encoding, and URL parsers resolve
//! them even as `%2e`. Services reject them with
//! [`ensure_segment`](crate::errors::ensure_segment) and the client refuses
//! any request path that still contains one.

#![allow(missing_docs)]

use percent_encoding::{utf8_percent_encode, AsciiSet, PercentEncode, NON_ALPHANUMERIC};

/// Characters left as-is in a path segment (RFC 3986 unreserved).
const SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Same as [`SEGMENT_SET`] but keeps `/`.
const PATH_SET: &AsciiSet = &SEGMENT_SET.remove(b'/');

fn seg(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value, SEGMENT_SET)
}

fn path(value: &str) -> PercentEncode<'_> {
    utf8_percent_encode(value.trim_matches('/'), PATH_SET)
}

fn repo(owner: &str, name: &str) -> String {
    format!("repos/{}/{}", seg(owner), seg(name))
}

// Repositories

pub fn current_user_repositories() -> String {
    "user/repos".to_string()
}

pub fn user_repositories(username: &str) -> String {
    format!("users/{}/repos", seg(username))
}

pub fn org_repositories(org: &str) -> String {
    format!("orgs/{}/repos", seg(org))
}

pub fn all_public_repositories() -> String {
    "repositories".to_string()
}

pub fn repository(owner: &str, name: &str) -> String {
    repo(owner, name)
}

pub fn repository_by_id(id: u64) -> String {
    format!("repositories/{}", id)
}

pub fn repository_transfer(owner: &str, name: &str) -> String {
    format!("{}/transfer", repo(owner, name))
}

pub fn branches(owner: &str, name: &str) -> String {
    format!("{}/branches", repo(owner, name))
}

pub fn branch(owner: &str, name: &str, branch: &str) -> String {
    format!("{}/branches/{}", repo(owner, name), path(branch))
}

pub fn collaborators(owner: &str, name: &str) -> String {
    format!("{}/collaborators", repo(owner, name))
}

pub fn collaborator(owner: &str, name: &str, username: &str) -> String {
    format!("{}/collaborators/{}", repo(owner, name), seg(username))
}

pub fn commits(owner: &str, name: &str) -> String {
    format!("{}/commits", repo(owner, name))
}

pub fn commit(owner: &str, name: &str, reference: &str) -> String {
    format!("{}/commits/{}", repo(owner, name), path(reference))
}

pub fn compare(owner: &str, name: &str, base: &str, head: &str) -> String {
    format!("{}/compare/{}...{}", repo(owner, name), path(base), path(head))
}

pub fn tags(owner: &str, name: &str) -> String {
    format!("{}/tags", repo(owner, name))
}

pub fn languages(owner: &str, name: &str) -> String {
    format!("{}/languages", repo(owner, name))
}

pub fn contributors(owner: &str, name: &str) -> String {
    format!("{}/contributors", repo(owner, name))
}

pub fn topics(owner: &str, name: &str) -> String {
    format!("{}/topics", repo(owner, name))
}

pub fn contents(owner: &str, name: &str, file_path: &str) -> String {
    let file_path = file_path.trim_matches('/');
    if file_path.is_empty() {
        format!("{}/contents", repo(owner, name))
    } else {
        format!("{}/contents/{}", repo(owner, name), path(file_path))
    }
}

pub fn readme(owner: &str, name: &str) -> String {
    format!("{}/readme", repo(owner, name))
}

pub fn releases(owner: &str, name: &str) -> String {
    format!("{}/releases", repo(owner, name))
}

pub fn release(owner: &str, name: &str, release_id: u64) -> String {
    format!("{}/releases/{}", repo(owner, name), release_id)
}

pub fn latest_release(owner: &str, name: &str) -> String {
    format!("{}/releases/latest", repo(owner, name))
}

pub fn release_by_tag(owner: &str, name: &str, tag: &str) -> String {
    format!("{}/releases/tags/{}", repo(owner, name), seg(tag))
}

pub fn release_assets(owner: &str, name: &str, release_id: u64) -> String {
    format!("{}/releases/{}/assets", repo(owner, name), release_id)
}

pub fn release_asset(owner: &str, name: &str, asset_id: u64) -> String {
    format!("{}/releases/assets/{}", repo(owner, name), asset_id)
}

// Issues

pub fn current_user_issues() -> String {
    "user/issues".to_string()
}

pub fn org_issues(org: &str) -> String {
    format!("orgs/{}/issues", seg(org))
}

pub fn issues(owner: &str, name: &str) -> String {
    format!("{}/issues", repo(owner, name))
}

pub fn issue(owner: &str, name: &str, number: u64) -> String {
    format!("{}/issues/{}", repo(owner, name), number)
}

pub fn issue_lock(owner: &str, name: &str, number: u64) -> String {
    format!("{}/lock", issue(owner, name, number))
}

pub fn issue_comments(owner: &str, name: &str, number: u64) -> String {
    format!("{}/comments", issue(owner, name, number))
}

pub fn repo_issue_comments(owner: &str, name: &str) -> String {
    format!("{}/issues/comments", repo(owner, name))
}

pub fn issue_comment(owner: &str, name: &str, comment_id: u64) -> String {
    format!("{}/issues/comments/{}", repo(owner, name), comment_id)
}

pub fn labels(owner: &str, name: &str) -> String {
    format!("{}/labels", repo(owner, name))
}

pub fn label(owner: &str, name: &str, label: &str) -> String {
    format!("{}/labels/{}", repo(owner, name), seg(label))
}

pub fn issue_labels(owner: &str, name: &str, number: u64) -> String {
    format!("{}/labels", issue(owner, name, number))
}

pub fn issue_label(owner: &str, name: &str, number: u64, label: &str) -> String {
    format!("{}/labels/{}", issue(owner, name, number), seg(label))
}

pub fn milestones(owner: &str, name: &str) -> String {
    format!("{}/milestones", repo(owner, name))
}

pub fn milestone(owner: &str, name: &str, number: u64) -> String {
    format!("{}/milestones/{}", repo(owner, name), number)
}

pub fn assignees(owner: &str, name: &str) -> String {
    format!("{}/assignees", repo(owner, name))
}

pub fn assignee(owner: &str, name: &str, username: &str) -> String {
    format!("{}/assignees/{}", repo(owner, name), seg(username))
}

pub fn issue_assignees(owner: &str, name: &str, number: u64) -> String {
    format!("{}/assignees", issue(owner, name, number))
}

pub fn issue_events(owner: &str, name: &str, number: u64) -> String {
    format!("{}/events", issue(owner, name, number))
}

pub fn repo_issue_events(owner: &str, name: &str) -> String {
    format!("{}/issues/events", repo(owner, name))
}

// Pull requests

pub fn pulls(owner: &str, name: &str) -> String {
    format!("{}/pulls", repo(owner, name))
}

pub fn pull(owner: &str, name: &str, number: u64) -> String {
    format!("{}/pulls/{}", repo(owner, name), number)
}

pub fn pull_merge(owner: &str, name: &str, number: u64) -> String {
    format!("{}/merge", pull(owner, name, number))
}

pub fn pull_update_branch(owner: &str, name: &str, number: u64) -> String {
    format!("{}/update-branch", pull(owner, name, number))
}

pub fn pull_commits(owner: &str, name: &str, number: u64) -> String {
    format!("{}/commits", pull(owner, name, number))
}

pub fn pull_files(owner: &str, name: &str, number: u64) -> String {
    format!("{}/files", pull(owner, name, number))
}

pub fn pull_reviews(owner: &str, name: &str, number: u64) -> String {
    format!("{}/reviews", pull(owner, name, number))
}

pub fn pull_review(owner: &str, name: &str, number: u64, review_id: u64) -> String {
    format!("{}/reviews/{}", pull(owner, name, number), review_id)
}

pub fn pull_review_events(owner: &str, name: &str, number: u64, review_id: u64) -> String {
    format!("{}/events", pull_review(owner, name, number, review_id))
}

pub fn pull_review_dismissals(owner: &str, name: &str, number: u64, review_id: u64) -> String {
    format!("{}/dismissals", pull_review(owner, name, number, review_id))
}

pub fn pull_review_comments(owner: &str, name: &str, number: u64) -> String {
    format!("{}/comments", pull(owner, name, number))
}

pub fn repo_pull_review_comments(owner: &str, name: &str) -> String {
    format!("{}/pulls/comments", repo(owner, name))
}

pub fn pull_review_comment(owner: &str, name: &str, comment_id: u64) -> String {
    format!("{}/pulls/comments/{}", repo(owner, name), comment_id)
}

pub fn pull_requested_reviewers(owner: &str, name: &str, number: u64) -> String {
    format!("{}/requested_reviewers", pull(owner, name, number))
}

// Actions

pub fn workflows(owner: &str, name: &str) -> String {
    format!("{}/actions/workflows", repo(owner, name))
}

/// `workflow` is a numeric ID or a workflow file name such as `ci.yml`.
pub fn workflow(owner: &str, name: &str, workflow: &str) -> String {
    format!("{}/actions/workflows/{}", repo(owner, name), seg(workflow))
}

pub fn workflow_enable(owner: &str, name: &str, workflow_id: &str) -> String {
    format!("{}/enable", workflow(owner, name, workflow_id))
}

pub fn workflow_disable(owner: &str, name: &str, workflow_id: &str) -> String {
    format!("{}/disable", workflow(owner, name, workflow_id))
}

pub fn workflow_dispatches(owner: &str, name: &str, workflow_id: &str) -> String {
    format!("{}/dispatches", workflow(owner, name, workflow_id))
}

pub fn workflow_runs_for_workflow(owner: &str, name: &str, workflow_id: &str) -> String {
    format!("{}/runs", workflow(owner, name, workflow_id))
}

pub fn workflow_runs(owner: &str, name: &str) -> String {
    format!("{}/actions/runs", repo(owner, name))
}

pub fn workflow_run(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/actions/runs/{}", repo(owner, name), run_id)
}

pub fn workflow_run_rerun(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/rerun", workflow_run(owner, name, run_id))
}

pub fn workflow_run_rerun_failed(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/rerun-failed-jobs", workflow_run(owner, name, run_id))
}

pub fn workflow_run_cancel(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/cancel", workflow_run(owner, name, run_id))
}

pub fn workflow_run_approve(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/approve", workflow_run(owner, name, run_id))
}

pub fn workflow_run_timing(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/timing", workflow_run(owner, name, run_id))
}

pub fn workflow_run_logs(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/logs", workflow_run(owner, name, run_id))
}

pub fn workflow_run_jobs(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/jobs", workflow_run(owner, name, run_id))
}

pub fn workflow_run_artifacts(owner: &str, name: &str, run_id: u64) -> String {
    format!("{}/artifacts", workflow_run(owner, name, run_id))
}

pub fn workflow_job(owner: &str, name: &str, job_id: u64) -> String {
    format!("{}/actions/jobs/{}", repo(owner, name), job_id)
}

pub fn workflow_job_logs(owner: &str, name: &str, job_id: u64) -> String {
    format!("{}/logs", workflow_job(owner, name, job_id))
}

pub fn artifacts(owner: &str, name: &str) -> String {
    format!("{}/actions/artifacts", repo(owner, name))
}

pub fn artifact(owner: &str, name: &str, artifact_id: u64) -> String {
    format!("{}/actions/artifacts/{}", repo(owner, name), artifact_id)
}

pub fn artifact_download(
    owner: &str,
    name: &str,
    artifact_id: u64,
    archive_format: &str,
) -> String {
    format!("{}/{}", artifact(owner, name, artifact_id), seg(archive_format))
}

pub fn repo_secrets(owner: &str, name: &str) -> String {
    format!("{}/actions/secrets", repo(owner, name))
}

pub fn repo_secret(owner: &str, name: &str, secret: &str) -> String {
    format!("{}/actions/secrets/{}", repo(owner, name), seg(secret))
}

pub fn repo_secrets_public_key(owner: &str, name: &str) -> String {
    format!("{}/actions/secrets/public-key", repo(owner, name))
}

pub fn org_secrets(org: &str) -> String {
    format!("orgs/{}/actions/secrets", seg(org))
}

pub fn org_secret(org: &str, secret: &str) -> String {
    format!("orgs/{}/actions/secrets/{}", seg(org), seg(secret))
}

pub fn org_secrets_public_key(org: &str) -> String {
    format!("orgs/{}/actions/secrets/public-key", seg(org))
}

pub fn repo_variables(owner: &str, name: &str) -> String {
    format!("{}/actions/variables", repo(owner, name))
}

pub fn repo_variable(owner: &str, name: &str, variable: &str) -> String {
    format!("{}/actions/variables/{}", repo(owner, name), seg(variable))
}

pub fn runners(owner: &str, name: &str) -> String {
    format!("{}/actions/runners", repo(owner, name))
}

pub fn runner(owner: &str, name: &str, runner_id: u64) -> String {
    format!("{}/actions/runners/{}", repo(owner, name), runner_id)
}

pub fn runner_registration_token(owner: &str, name: &str) -> String {
    format!("{}/actions/runners/registration-token", repo(owner, name))
}

pub fn runner_removal_token(owner: &str, name: &str) -> String {
    format!("{}/actions/runners/remove-token", repo(owner, name))
}

// Organizations

pub fn current_user_organizations() -> String {
    "user/orgs".to_string()
}

pub fn user_organizations(username: &str) -> String {
    format!("users/{}/orgs", seg(username))
}

pub fn all_organizations() -> String {
    "organizations".to_string()
}

pub fn organization(org: &str) -> String {
    format!("orgs/{}", seg(org))
}

pub fn org_members(org: &str) -> String {
    format!("orgs/{}/members", seg(org))
}

pub fn org_member(org: &str, username: &str) -> String {
    format!("orgs/{}/members/{}", seg(org), seg(username))
}

pub fn org_public_members(org: &str) -> String {
    format!("orgs/{}/public_members", seg(org))
}

pub fn org_public_member(org: &str, username: &str) -> String {
    format!("orgs/{}/public_members/{}", seg(org), seg(username))
}

pub fn org_membership(org: &str, username: &str) -> String {
    format!("orgs/{}/memberships/{}", seg(org), seg(username))
}

pub fn outside_collaborators(org: &str) -> String {
    format!("orgs/{}/outside_collaborators", seg(org))
}

pub fn teams(org: &str) -> String {
    format!("orgs/{}/teams", seg(org))
}

pub fn team(org: &str, team_slug: &str) -> String {
    format!("orgs/{}/teams/{}", seg(org), seg(team_slug))
}

pub fn team_members(org: &str, team_slug: &str) -> String {
    format!("{}/members", team(org, team_slug))
}

pub fn team_membership(org: &str, team_slug: &str, username: &str) -> String {
    format!("{}/memberships/{}", team(org, team_slug), seg(username))
}

pub fn team_repositories(org: &str, team_slug: &str) -> String {
    format!("{}/repos", team(org, team_slug))
}

pub fn team_repository(org: &str, team_slug: &str, owner: &str, name: &str) -> String {
    format!("{}/repos/{}/{}", team(org, team_slug), seg(owner), seg(name))
}

// Codespaces

pub fn current_user_codespaces() -> String {
    "user/codespaces".to_string()
}

pub fn repo_codespaces(owner: &str, name: &str) -> String {
    format!("{}/codespaces", repo(owner, name))
}

pub fn codespace(codespace_name: &str) -> String {
    format!("user/codespaces/{}", seg(codespace_name))
}

pub fn codespace_start(codespace_name: &str) -> String {
    format!("{}/start", codespace(codespace_name))
}

pub fn codespace_stop(codespace_name: &str) -> String {
    format!("{}/stop", codespace(codespace_name))
}

pub fn codespace_machines(codespace_name: &str) -> String {
    format!("{}/machines", codespace(codespace_name))
}

pub fn repo_codespace_machines(owner: &str, name: &str) -> String {
    format!("{}/codespaces/machines", repo(owner, name))
}

// Users

pub fn current_user() -> String {
    "user".to_string()
}

pub fn user(username: &str) -> String {
    format!("users/{}", seg(username))
}

pub fn all_users() -> String {
    "users".to_string()
}

pub fn current_user_followers() -> String {
    "user/followers".to_string()
}

pub fn user_followers(username: &str) -> String {
    format!("{}/followers", user(username))
}

pub fn current_user_following() -> String {
    "user/following".to_string()
}

pub fn user_following(username: &str) -> String {
    format!("{}/following", user(username))
}

pub fn following(username: &str) -> String {
    format!("user/following/{}", seg(username))
}

pub fn user_follows(username: &str, target: &str) -> String {
    format!("{}/following/{}", user(username), seg(target))
}

pub fn emails() -> String {
    "user/emails".to_string()
}

pub fn ssh_keys() -> String {
    "user/keys".to_string()
}

pub fn ssh_key(key_id: u64) -> String {
    format!("user/keys/{}", key_id)
}

pub fn user_ssh_keys(username: &str) -> String {
    format!("{}/keys", user(username))
}

pub fn gpg_keys() -> String {
    "user/gpg_keys".to_string()
}

pub fn gpg_key(key_id: u64) -> String {
    format!("user/gpg_keys/{}", key_id)
}

pub fn user_gpg_keys(username: &str) -> String {
    format!("{}/gpg_keys", user(username))
}

// Gists

pub fn gists() -> String {
    "gists".to_string()
}

pub fn user_gists(username: &str) -> String {
    format!("{}/gists", user(username))
}

pub fn public_gists() -> String {
    "gists/public".to_string()
}

pub fn starred_gists() -> String {
    "gists/starred".to_string()
}

pub fn gist(gist_id: &str) -> String {
    format!("gists/{}", seg(gist_id))
}

pub fn gist_star(gist_id: &str) -> String {
    format!("{}/star", gist(gist_id))
}

pub fn gist_forks(gist_id: &str) -> String {
    format!("{}/forks", gist(gist_id))
}

pub fn gist_comments(gist_id: &str) -> String {
    format!("{}/comments", gist(gist_id))
}

pub fn gist_comment(gist_id: &str, comment_id: u64) -> String {
    format!("{}/comments/{}", gist(gist_id), comment_id)
}

// Search

pub fn search_repositories() -> String {
    "search/repositories".to_string()
}

pub fn search_code() -> String {
    "search/code".to_string()
}

pub fn search_issues() -> String {
    "search/issues".to_string()
}

pub fn search_users() -> String {
    "search/users".to_string()
}

pub fn search_commits() -> String {
    "search/commits".to_string()
}

// Git database

pub fn git_blobs(owner: &str, name: &str) -> String {
    format!("{}/git/blobs", repo(owner, name))
}

pub fn git_blob(owner: &str, name: &str, sha: &str) -> String {
    format!("{}/git/blobs/{}", repo(owner, name), seg(sha))
}

pub fn git_trees(owner: &str, name: &str) -> String {
    format!("{}/git/trees", repo(owner, name))
}

pub fn git_tree(owner: &str, name: &str, tree_sha: &str) -> String {
    format!("{}/git/trees/{}", repo(owner, name), path(tree_sha))
}

pub fn git_commits(owner: &str, name: &str) -> String {
    format!("{}/git/commits", repo(owner, name))
}

pub fn git_commit(owner: &str, name: &str, sha: &str) -> String {
    format!("{}/git/commits/{}", repo(owner, name), seg(sha))
}

pub fn git_refs(owner: &str, name: &str) -> String {
    format!("{}/git/refs", repo(owner, name))
}

/// Single-reference lookup. `reference` is given without the `refs/`
/// prefix, e.g. `heads/main`.
pub fn git_ref(owner: &str, name: &str, reference: &str) -> String {
    format!(
        "{}/git/ref/{}",
        repo(owner, name),
        path(reference.trim_start_matches("refs/"))
    )
}

/// Update and delete address references under `git/refs/`.
pub fn git_ref_update(owner: &str, name: &str, reference: &str) -> String {
    format!(
        "{}/git/refs/{}",
        repo(owner, name),
        path(reference.trim_start_matches("refs/"))
    )
}

pub fn git_matching_refs(owner: &str, name: &str, prefix: &str) -> String {
    format!(
        "{}/git/matching-refs/{}",
        repo(owner, name),
        path(prefix.trim_start_matches("refs/"))
    )
}

pub fn git_tags(owner: &str, name: &str) -> String {
    format!("{}/git/tags", repo(owner, name))
}

pub fn git_tag(owner: &str, name: &str, sha: &str) -> String {
    format!("{}/git/tags/{}", repo(owner, name), seg(sha))
}

// Apps

pub fn current_app() -> String {
    "app".to_string()
}

pub fn app(app_slug: &str) -> String {
    format!("apps/{}", seg(app_slug))
}

pub fn app_installations() -> String {
    "app/installations".to_string()
}

pub fn app_installation(installation_id: u64) -> String {
    format!("app/installations/{}", installation_id)
}

pub fn installation_access_tokens(installation_id: u64) -> String {
    format!("{}/access_tokens", app_installation(installation_id))
}

pub fn repo_installation(owner: &str, name: &str) -> String {
    format!("{}/installation", repo(owner, name))
}

pub fn org_installation(org: &str) -> String {
    format!("orgs/{}/installation", seg(org))
}

pub fn current_user_installations() -> String {
    "user/installations".to_string()
}

// Miscellaneous

pub fn rate_limit() -> String {
    "rate_limit".to_string()
}

pub fn meta() -> String {
    "meta".to_string()
}

pub fn emojis() -> String {
    "emojis".to_string()
}

pub fn markdown() -> String {
    "markdown".to_string()
}

pub fn gitignore_templates() -> String {
    "gitignore/templates".to_string()
}

pub fn gitignore_template(template: &str) -> String {
    format!("gitignore/templates/{}", seg(template))
}

pub fn licenses() -> String {
    "licenses".to_string()
}

pub fn license(key: &str) -> String {
    format!("licenses/{}", seg(key))
}

pub fn repo_license(owner: &str, name: &str) -> String {
    format!("{}/license", repo(owner, name))
}
