//! Git database service.

use super::*;
use octorest::services::{
    BlobEncoding, NewBlob, NewCommit, NewReference, NewTree, NewTreeItem, ReferenceUpdate,
    Signature, TreeItemKind, TreeMode,
};
use octorest::GitHubErrorKind;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

const TREE_SHA: &str = "9fb037999f264ba9a7fc6274d15fa3ae2ab98312";
const COMMIT_SHA: &str = "7638417db6d59f3c431d3e1f261cc637155684cd";

fn ref_json(name: &str, sha: &str) -> Value {
    json!({
        "ref": name,
        "url": format!("https://api.github.com/repos/octocat/hello-world/git/{}", name),
        "object": {"sha": sha, "type": "commit"}
    })
}

#[tokio::test]
async fn test_binary_blob_roundtrip() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/git/blobs"))
        .and(body_json(json!({"content": "AAEC/w==", "encoding": "base64"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sha": "3a0f86fb8db8eea7ccbb9a95f325ddbedfb25e15",
            "url": "https://api.github.com/repos/octocat/hello-world/git/blobs/3a0f86fb8db8eea7ccbb9a95f325ddbedfb25e15"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/git/blobs/3a0f86fb8db8eea7ccbb9a95f325ddbedfb25e15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": "3a0f86fb8db8eea7ccbb9a95f325ddbedfb25e15",
            "size": 4,
            "content": "AAEC\n/w==\n",
            "encoding": "base64"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let git = client.git_data();
    let created = git
        .create_blob("octocat", "hello-world", &NewBlob::binary(&[0x00, 0x01, 0x02, 0xff]))
        .await
        .unwrap();
    let blob = git
        .get_blob("octocat", "hello-world", &created.sha)
        .await
        .unwrap();
    assert_eq!(blob.encoding, BlobEncoding::Base64);
    assert_eq!(blob.decoded().unwrap(), vec![0x00, 0x01, 0x02, 0xff]);
}

#[tokio::test]
async fn test_recursive_tree() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(format!("/repos/octocat/hello-world/git/trees/{}", TREE_SHA)))
        .and(query_param("recursive", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sha": TREE_SHA,
            "tree": [
                {"path": "src", "mode": "040000", "type": "tree", "sha": "a1"},
                {"path": "src/main.rs", "mode": "100644", "type": "blob", "sha": "b2", "size": 30},
                {"path": "run.sh", "mode": "100755", "type": "blob", "sha": "c3", "size": 12}
            ],
            "truncated": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tree = client
        .git_data()
        .get_tree("octocat", "hello-world", TREE_SHA, true)
        .await
        .unwrap();
    assert!(tree.truncated);
    assert_eq!(tree.tree.len(), 3);
    assert_eq!(tree.tree[0].kind, TreeItemKind::Tree);
    assert_eq!(tree.tree[0].mode, TreeMode::Subdirectory);
    assert_eq!(tree.tree[2].mode, TreeMode::Executable);
    assert_eq!(tree.tree[1].size, Some(30));
}

#[tokio::test]
async fn test_create_tree_and_commit() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/git/trees"))
        .and(body_json(json!({
            "base_tree": TREE_SHA,
            "tree": [
                {"path": "README.md", "mode": "100644", "type": "blob", "sha": null, "content": "# Hello"}
            ]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sha": "cd8274d15fa3ae2ab983129fb037999f264ba9a7",
            "tree": [{"path": "README.md", "mode": "100644", "type": "blob", "sha": "7c25", "size": 7}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/git/commits"))
        .and(body_json(json!({
            "message": "Update README",
            "tree": "cd8274d15fa3ae2ab983129fb037999f264ba9a7",
            "parents": [COMMIT_SHA],
            "author": {"name": "Mona Octocat", "email": "octocat@github.com"}
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "sha": "7a8c2f14e5f1c2d2f1e0d0b7c3a4e5f6a7b8c9d0",
            "author": {"name": "Mona Octocat", "email": "octocat@github.com", "date": "2026-01-02T03:04:05Z"},
            "committer": {"name": "Mona Octocat", "email": "octocat@github.com", "date": "2026-01-02T03:04:05Z"},
            "message": "Update README",
            "tree": {"sha": "cd8274d15fa3ae2ab983129fb037999f264ba9a7"},
            "parents": [{"sha": COMMIT_SHA}],
            "verification": {"verified": false, "reason": "unsigned", "signature": null, "payload": null}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let git = client.git_data();
    let tree = git
        .create_tree(
            "octocat",
            "hello-world",
            &NewTree {
                base_tree: Some(TREE_SHA.to_string()),
                tree: vec![NewTreeItem::file("README.md", "# Hello")],
            },
        )
        .await
        .unwrap();

    let commit = git
        .create_commit(
            "octocat",
            "hello-world",
            &NewCommit {
                message: "Update README".to_string(),
                tree: tree.sha,
                parents: vec![COMMIT_SHA.to_string()],
                author: Some(Signature {
                    name: "Mona Octocat".to_string(),
                    email: "octocat@github.com".to_string(),
                    date: None,
                }),
                committer: None,
                signature: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(commit.parents[0].sha, COMMIT_SHA);
    assert_eq!(commit.verification.map(|v| v.reason).as_deref(), Some("unsigned"));
}

#[tokio::test]
async fn test_get_ref_accepts_qualified_name() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/repos/octocat/hello-world/git/ref/heads/feature/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(ref_json("refs/heads/feature/login", COMMIT_SHA)),
        )
        .expect(2)
        .mount(&server)
        .await;

    let git = client.git_data();
    let short = git
        .get_ref("octocat", "hello-world", "heads/feature/login")
        .await
        .unwrap();
    let qualified = git
        .get_ref("octocat", "hello-world", "refs/heads/feature/login")
        .await
        .unwrap();
    assert_eq!(short.name, qualified.name);
    assert_eq!(short.object.kind, "commit");
}

#[tokio::test]
async fn test_branch_create_update_delete() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/repos/octocat/hello-world/git/refs"))
        .and(body_json(json!({"ref": "refs/heads/topic", "sha": COMMIT_SHA})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(ref_json("refs/heads/topic", COMMIT_SHA)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/repos/octocat/hello-world/git/refs/heads/topic"))
        .and(body_json(json!({"sha": "aa218f56b14c9653891f9e74264a383fa43fefbd", "force": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(ref_json(
            "refs/heads/topic",
            "aa218f56b14c9653891f9e74264a383fa43fefbd",
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/repos/octocat/hello-world/git/refs/heads/topic"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let git = client.git_data();
    git.create_ref("octocat", "hello-world", &NewReference::branch("topic", COMMIT_SHA))
        .await
        .unwrap();
    let moved = git
        .update_ref(
            "octocat",
            "hello-world",
            "heads/topic",
            &ReferenceUpdate {
                sha: "aa218f56b14c9653891f9e74264a383fa43fefbd".to_string(),
                force: true,
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.object.sha, "aa218f56b14c9653891f9e74264a383fa43fefbd");
    git.delete_ref("octocat", "hello-world", "refs/heads/topic")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_unqualified_ref_is_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let request = NewReference {
        name: "heads/topic".to_string(),
        sha: COMMIT_SHA.to_string(),
    };
    let error = client
        .git_data()
        .create_ref("octocat", "hello-world", &request)
        .await
        .unwrap_err();
    assert_eq!(*error.kind(), GitHubErrorKind::InvalidParameter);
}
