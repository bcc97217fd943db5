// tests/git_repository_test.rs
use git2::{Repository as Git2Repo, Signature};
use sdk_release::git::{Git2Repository, Repository};
use tempfile::TempDir;

fn commit(repo: &Git2Repo, author: &str, message: &str) -> git2::Oid {
    let signature = Signature::now(author, "dev@example.com").unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents: Vec<git2::Commit> = repo
        .head()
        .ok()
        .and_then(|head| head.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parent_refs)
        .unwrap()
}

fn tag(repo: &Git2Repo, name: &str, oid: git2::Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false).unwrap();
}

#[test]
fn test_tags_and_commits_since_tag() {
    let dir = TempDir::new().unwrap();
    let git = Git2Repo::init(dir.path()).unwrap();

    let first = commit(&git, "Ann", "Initial commit");
    tag(&git, "1.0.0", first);
    commit(&git, "Bob", "Add feature (#2)");
    let last = commit(&git, "Cat", "Fix bug (#3)\n\nDetails");

    let repo = Git2Repository::open(dir.path()).unwrap();

    assert_eq!(repo.list_tags().unwrap(), vec!["1.0.0"]);

    let commits = repo.commits_between("1.0.0", "HEAD").unwrap();
    assert_eq!(commits.len(), 2);
    assert_eq!(commits[0].sha, last.to_string());
    assert_eq!(commits[0].author_name, "Cat");
    assert!(commits[0].message.starts_with("Fix bug (#3)"));
    assert_eq!(commits[1].author_name, "Bob");
}

#[test]
fn test_unknown_tag_is_an_error() {
    let dir = TempDir::new().unwrap();
    let git = Git2Repo::init(dir.path()).unwrap();
    commit(&git, "Ann", "Initial commit");

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert!(repo.commits_between("9.9.9", "HEAD").is_err());
}

#[test]
fn test_current_branch_and_detached_head() {
    let dir = TempDir::new().unwrap();
    let git = Git2Repo::init(dir.path()).unwrap();
    let oid = commit(&git, "Ann", "Initial commit");

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert!(!repo.current_branch().unwrap().is_empty());

    git.set_head_detached(oid).unwrap();
    assert!(repo.current_branch().is_err());
}
