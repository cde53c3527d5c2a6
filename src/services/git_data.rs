//! Git database operations: blobs, trees, commits, references and
//! annotated tags.

use crate::client::GitHubClient;
use crate::errors::{ensure_not_empty, ensure_repo, ensure_segment, GitHubError, GitHubResult};
use crate::pagination::ApiOptions;
use crate::types::decode_base64;
use crate::urls;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service for Git database operations.
pub struct GitDataService<'a> {
    client: &'a GitHubClient,
}

impl<'a> GitDataService<'a> {
    /// Creates a new Git data service.
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    // Blobs

    /// Gets a blob.
    pub async fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> GitHubResult<Blob> {
        ensure_repo(owner, repo)?;
        ensure_segment("sha", sha)?;
        self.client.get(&urls::git_blob(owner, repo, sha)).await
    }

    /// Creates a blob.
    pub async fn create_blob(
        &self,
        owner: &str,
        repo: &str,
        request: &NewBlob,
    ) -> GitHubResult<GitObjectRef> {
        ensure_repo(owner, repo)?;
        self.client.post(&urls::git_blobs(owner, repo), request).await
    }

    // Trees

    /// Gets a tree. With `recursive`, nested trees are expanded; check
    /// [`Tree::truncated`] for very large repositories.
    pub async fn get_tree(
        &self,
        owner: &str,
        repo: &str,
        tree_sha: &str,
        recursive: bool,
    ) -> GitHubResult<Tree> {
        ensure_repo(owner, repo)?;
        ensure_segment("tree_sha", tree_sha)?;
        let path = urls::git_tree(owner, repo, tree_sha);
        if recursive {
            self.client
                .get_with_params(&path, &RecursiveParams { recursive: 1 })
                .await
        } else {
            self.client.get(&path).await
        }
    }

    /// Creates a tree.
    pub async fn create_tree(
        &self,
        owner: &str,
        repo: &str,
        request: &NewTree,
    ) -> GitHubResult<Tree> {
        ensure_repo(owner, repo)?;
        request.validate()?;
        self.client.post(&urls::git_trees(owner, repo), request).await
    }

    // Commits

    /// Gets a commit object.
    pub async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> GitHubResult<GitCommit> {
        ensure_repo(owner, repo)?;
        ensure_segment("sha", sha)?;
        self.client.get(&urls::git_commit(owner, repo, sha)).await
    }

    /// Creates a commit object. References are not moved; follow with
    /// [`update_ref`](Self::update_ref).
    pub async fn create_commit(
        &self,
        owner: &str,
        repo: &str,
        request: &NewCommit,
    ) -> GitHubResult<GitCommit> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("message", &request.message)?;
        ensure_not_empty("tree", &request.tree)?;
        self.client.post(&urls::git_commits(owner, repo), request).await
    }

    // References

    /// Lists all references.
    pub async fn list_refs(
        &self,
        owner: &str,
        repo: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Reference>> {
        ensure_repo(owner, repo)?;
        self.client.get_all(&urls::git_refs(owner, repo), options).await
    }

    /// Lists references whose name starts with `prefix`, e.g. `heads/` or
    /// `tags/v1`.
    pub async fn list_matching_refs(
        &self,
        owner: &str,
        repo: &str,
        prefix: &str,
        options: ApiOptions,
    ) -> GitHubResult<Vec<Reference>> {
        ensure_repo(owner, repo)?;
        ensure_segment("prefix", prefix)?;
        self.client
            .get_all(&urls::git_matching_refs(owner, repo, prefix), options)
            .await
    }

    /// Gets a reference, e.g. `heads/main`. A leading `refs/` is accepted.
    pub async fn get_ref(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
    ) -> GitHubResult<Reference> {
        ensure_repo(owner, repo)?;
        ensure_segment("reference", reference)?;
        self.client.get(&urls::git_ref(owner, repo, reference)).await
    }

    /// Creates a fully-qualified reference such as `refs/heads/feature`.
    pub async fn create_ref(
        &self,
        owner: &str,
        repo: &str,
        request: &NewReference,
    ) -> GitHubResult<Reference> {
        ensure_repo(owner, repo)?;
        request.validate()?;
        self.client.post(&urls::git_refs(owner, repo), request).await
    }

    /// Points a reference at a new SHA.
    pub async fn update_ref(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        request: &ReferenceUpdate,
    ) -> GitHubResult<Reference> {
        ensure_repo(owner, repo)?;
        ensure_segment("reference", reference)?;
        ensure_not_empty("sha", &request.sha)?;
        self.client
            .patch(&urls::git_ref_update(owner, repo, reference), request)
            .await
    }

    /// Deletes a reference.
    pub async fn delete_ref(&self, owner: &str, repo: &str, reference: &str) -> GitHubResult<()> {
        ensure_repo(owner, repo)?;
        ensure_segment("reference", reference)?;
        self.client
            .delete(&urls::git_ref_update(owner, repo, reference))
            .await
    }

    // Tags

    /// Gets an annotated tag object.
    pub async fn get_tag(&self, owner: &str, repo: &str, sha: &str) -> GitHubResult<GitTag> {
        ensure_repo(owner, repo)?;
        ensure_segment("sha", sha)?;
        self.client.get(&urls::git_tag(owner, repo, sha)).await
    }

    /// Creates an annotated tag object. The `refs/tags/*` reference must be
    /// created separately.
    pub async fn create_tag(
        &self,
        owner: &str,
        repo: &str,
        request: &NewTag,
    ) -> GitHubResult<GitTag> {
        ensure_repo(owner, repo)?;
        ensure_not_empty("tag", &request.tag)?;
        ensure_not_empty("object", &request.object)?;
        self.client.post(&urls::git_tags(owner, repo), request).await
    }
}

#[derive(Serialize)]
struct RecursiveParams {
    recursive: u8,
}

/// A Git blob.
#[derive(Debug, Clone, Deserialize)]
pub struct Blob {
    /// SHA.
    pub sha: String,
    /// Size in bytes.
    pub size: u64,
    /// API URL.
    #[serde(default)]
    pub url: String,
    /// Content in `encoding`.
    pub content: String,
    /// `base64` or `utf-8`.
    pub encoding: BlobEncoding,
}

impl Blob {
    /// Returns the raw blob bytes.
    pub fn decoded(&self) -> GitHubResult<Vec<u8>> {
        match self.encoding {
            BlobEncoding::Base64 => decode_base64(&self.content),
            BlobEncoding::Utf8 => Ok(self.content.as_bytes().to_vec()),
        }
    }
}

/// Blob content encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlobEncoding {
    /// Plain UTF-8 text.
    #[serde(rename = "utf-8")]
    Utf8,
    /// Base64.
    #[serde(rename = "base64")]
    Base64,
}

/// A new blob.
#[derive(Debug, Clone, Serialize)]
pub struct NewBlob {
    /// Content in `encoding`.
    pub content: String,
    /// Content encoding.
    pub encoding: BlobEncoding,
}

impl NewBlob {
    /// A UTF-8 text blob.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            encoding: BlobEncoding::Utf8,
        }
    }

    /// A binary blob, base64-encoded for transport.
    pub fn binary(content: &[u8]) -> Self {
        use base64::Engine;
        Self {
            content: base64::engine::general_purpose::STANDARD.encode(content),
            encoding: BlobEncoding::Base64,
        }
    }
}

/// SHA and URL of a created object.
#[derive(Debug, Clone, Deserialize)]
pub struct GitObjectRef {
    /// SHA.
    pub sha: String,
    /// API URL.
    #[serde(default)]
    pub url: String,
}

/// A Git tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Tree {
    /// SHA.
    pub sha: String,
    /// API URL.
    #[serde(default)]
    pub url: String,
    /// Entries.
    pub tree: Vec<TreeItem>,
    /// Whether GitHub cut the listing short.
    #[serde(default)]
    pub truncated: bool,
}

/// An entry in a tree.
#[derive(Debug, Clone, Deserialize)]
pub struct TreeItem {
    /// Path relative to the tree.
    pub path: String,
    /// File mode.
    pub mode: TreeMode,
    /// Object type.
    #[serde(rename = "type")]
    pub kind: TreeItemKind,
    /// Object SHA.
    pub sha: String,
    /// Size (blobs only).
    pub size: Option<u64>,
}

/// Tree entry mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeMode {
    /// Regular file.
    #[serde(rename = "100644")]
    File,
    /// Executable file.
    #[serde(rename = "100755")]
    Executable,
    /// Subdirectory.
    #[serde(rename = "040000")]
    Subdirectory,
    /// Submodule.
    #[serde(rename = "160000")]
    Submodule,
    /// Symbolic link.
    #[serde(rename = "120000")]
    Symlink,
}

/// Tree entry object type.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeItemKind {
    Blob,
    Tree,
    Commit,
}

/// A new tree, optionally layered over `base_tree`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTree {
    /// Existing tree to modify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_tree: Option<String>,
    /// Entries to write.
    pub tree: Vec<NewTreeItem>,
}

impl NewTree {
    fn validate(&self) -> GitHubResult<()> {
        if self.tree.is_empty() {
            return Err(GitHubError::invalid_parameter("'tree' must not be empty"));
        }
        for item in &self.tree {
            ensure_not_empty("path", &item.path)?;
            if item.sha.is_some() && item.content.is_some() {
                return Err(GitHubError::invalid_parameter(format!(
                    "tree entry '{}' sets both 'sha' and 'content'",
                    item.path
                )));
            }
        }
        Ok(())
    }
}

/// An entry of a new tree. Set either `sha` or `content`; leaving both
/// unset with a `base_tree` deletes the path.
#[derive(Debug, Clone, Serialize)]
pub struct NewTreeItem {
    /// Path.
    pub path: String,
    /// Mode.
    pub mode: TreeMode,
    /// Object type.
    #[serde(rename = "type")]
    pub kind: TreeItemKind,
    /// Existing object SHA. Serialized as `null` when unset.
    pub sha: Option<String>,
    /// Inline file content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl NewTreeItem {
    /// A regular file with inline content.
    pub fn file(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: TreeMode::File,
            kind: TreeItemKind::Blob,
            sha: None,
            content: Some(content.into()),
        }
    }

    /// An existing blob.
    pub fn blob(path: impl Into<String>, sha: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: TreeMode::File,
            kind: TreeItemKind::Blob,
            sha: Some(sha.into()),
            content: None,
        }
    }
}

/// A Git commit object.
#[derive(Debug, Clone, Deserialize)]
pub struct GitCommit {
    /// SHA.
    pub sha: String,
    /// API URL.
    #[serde(default)]
    pub url: String,
    /// Author.
    pub author: Signature,
    /// Committer.
    pub committer: Signature,
    /// Message.
    pub message: String,
    /// Tree.
    pub tree: GitObjectRef,
    /// Parents.
    #[serde(default)]
    pub parents: Vec<GitObjectRef>,
    /// Signature verification.
    pub verification: Option<Verification>,
}

/// Name, email and time of an author, committer or tagger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Time. GitHub uses the current time when omitted on create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Signature verification status.
#[derive(Debug, Clone, Deserialize)]
pub struct Verification {
    /// Whether verified.
    pub verified: bool,
    /// Reason, e.g. `valid` or `unsigned`.
    pub reason: String,
    /// Signature.
    pub signature: Option<String>,
    /// Signed payload.
    pub payload: Option<String>,
}

/// A new commit object.
#[derive(Debug, Clone, Serialize)]
pub struct NewCommit {
    /// Message.
    pub message: String,
    /// Tree SHA.
    pub tree: String,
    /// Parent SHAs; empty for a root commit.
    pub parents: Vec<String>,
    /// Author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<Signature>,
    /// Committer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub committer: Option<Signature>,
    /// ASCII-armored detached signature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

/// A Git reference.
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    /// Full name, e.g. `refs/heads/main`.
    #[serde(rename = "ref")]
    pub name: String,
    /// API URL.
    #[serde(default)]
    pub url: String,
    /// Target object.
    pub object: TargetObject,
}

/// Object a reference or tag points at.
#[derive(Debug, Clone, Deserialize)]
pub struct TargetObject {
    /// SHA.
    pub sha: String,
    /// Object type (`commit`, `tag`, `tree`, `blob`).
    #[serde(rename = "type")]
    pub kind: String,
    /// API URL.
    #[serde(default)]
    pub url: String,
}

/// A new reference.
#[derive(Debug, Clone, Serialize)]
pub struct NewReference {
    /// Fully-qualified name, e.g. `refs/heads/feature`.
    #[serde(rename = "ref")]
    pub name: String,
    /// Target SHA.
    pub sha: String,
}

impl NewReference {
    /// A branch reference under `refs/heads/`.
    pub fn branch(name: &str, sha: impl Into<String>) -> Self {
        Self {
            name: format!("refs/heads/{}", name),
            sha: sha.into(),
        }
    }

    /// A tag reference under `refs/tags/`.
    pub fn tag(name: &str, sha: impl Into<String>) -> Self {
        Self {
            name: format!("refs/tags/{}", name),
            sha: sha.into(),
        }
    }

    fn validate(&self) -> GitHubResult<()> {
        ensure_not_empty("sha", &self.sha)?;
        // GitHub rejects names with fewer than two slashes.
        if !self.name.starts_with("refs/") || self.name.matches('/').count() < 2 {
            return Err(GitHubError::invalid_parameter(format!(
                "'{}' is not a fully-qualified reference name",
                self.name
            )));
        }
        Ok(())
    }
}

/// Change to an existing reference.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceUpdate {
    /// New target SHA.
    pub sha: String,
    /// Allow non-fast-forward updates.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub force: bool,
}

/// An annotated tag object.
#[derive(Debug, Clone, Deserialize)]
pub struct GitTag {
    /// Tag object SHA.
    pub sha: String,
    /// API URL.
    #[serde(default)]
    pub url: String,
    /// Tag name.
    pub tag: String,
    /// Message.
    pub message: String,
    /// Tagger.
    pub tagger: Option<Signature>,
    /// Tagged object.
    pub object: TargetObject,
    /// Signature verification.
    pub verification: Option<Verification>,
}

/// A new annotated tag.
#[derive(Debug, Clone, Serialize)]
pub struct NewTag {
    /// Tag name.
    pub tag: String,
    /// Message.
    pub message: String,
    /// SHA of the tagged object.
    pub object: String,
    /// Tagged object type.
    #[serde(rename = "type")]
    pub kind: TreeItemKind,
    /// Tagger.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagger: Option<Signature>,
}
