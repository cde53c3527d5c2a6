//! Resource clients, one per area of the GitHub REST API.
//!
//! Each service borrows the [`GitHubClient`](crate::GitHubClient), checks its
//! arguments before any request is sent and builds paths through
//! [`urls`](crate::urls).

mod actions;
mod apps;
mod codespaces;
mod gists;
mod git_data;
mod issues;
mod miscellaneous;
mod organizations;
mod pull_requests;
mod repositories;
mod search;
mod users;

pub use actions::*;
pub use apps::*;
pub use codespaces::*;
pub use gists::*;
pub use git_data::*;
pub use issues::*;
pub use miscellaneous::*;
pub use organizations::*;
pub use pull_requests::*;
pub use repositories::*;
pub use search::*;
pub use users::*;
