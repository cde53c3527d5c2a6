//! Prints a short health report for a repository.
//!
//! Run with:
//! ```
//! GITHUB_TOKEN=ghp_xxxxxxxxxxxx cargo run --example repo_report -- rust-lang/rust
//! ```
//!
//! Set `RUST_LOG=octorest=debug` to see each request.

use anyhow::{bail, Context};
use octorest::services::{ListPullRequestsParams, ListWorkflowRunsParams};
use octorest::{ApiOptions, GitHubClient, GitHubConfig, StateFilter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let target = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "octocat/hello-world".to_string());
    let Some((owner, name)) = target.split_once('/') else {
        bail!("expected owner/repo, got '{}'", target);
    };

    let config = GitHubConfig::from_env().context("invalid GitHub configuration")?;
    let client = GitHubClient::new(config)?;

    let repo = match client.repositories().get(owner, name).await {
        Ok(repo) => repo,
        Err(e) if e.is_not_found() => bail!("{} does not exist or is not visible", target),
        Err(e) => return Err(e.into()),
    };

    println!("=== {} ===", repo.full_name);
    if let Some(description) = &repo.description {
        println!("{}", description);
    }
    println!(
        "stars: {}  open issues: {}  language: {}",
        repo.stargazers_count,
        repo.open_issues_count,
        repo.language.as_deref().unwrap_or("-")
    );

    println!("\nOpen pull requests (first page):");
    let params = ListPullRequestsParams {
        state: Some(StateFilter::Open),
        ..Default::default()
    };
    let pulls = client
        .pull_requests()
        .list(owner, name, &params, ApiOptions::new().page_size(10).page_count(1))
        .await?;
    if pulls.is_empty() {
        println!("  none");
    }
    for pull in &pulls {
        println!(
            "  #{} {} ({} -> {})",
            pull.number, pull.title, pull.head.ref_name, pull.base.ref_name
        );
    }

    println!("\nRecent workflow runs:");
    match client
        .actions()
        .list_workflow_runs(
            owner,
            name,
            &ListWorkflowRunsParams::default(),
            ApiOptions::new().page_size(5).page_count(1),
        )
        .await
    {
        Ok(runs) => {
            for run in runs {
                println!(
                    "  {} #{} {:?} {:?}",
                    run.name.as_deref().unwrap_or("workflow"),
                    run.run_number,
                    run.status,
                    run.conclusion
                );
            }
        }
        Err(e) if e.is_not_found() => println!("  actions disabled"),
        Err(e) => return Err(e.into()),
    }

    let limits = client.miscellaneous().rate_limit().await?;
    let core = limits.core();
    println!(
        "\nrate limit: {}/{} remaining, resets at {}",
        core.remaining, core.limit, core.reset
    );

    if let Some(info) = client.last_api_info().await {
        if let Some(id) = info.request_id {
            println!("last request id: {}", id);
        }
    }

    Ok(())
}
