use crate::models::repo::RepoId;

const GITHUB_HOST: &str = "github.com/";

/// Turn free-form user input into an owner/repo pair.
///
/// Accepts full GitHub URLs ("https://github.com/rust-lang/rust"), bare host
/// paths with trailing segments ("github.com/rust-lang/rust/tree/master"),
/// and plain "owner/repo" shorthand. Returns None when no pair can be
/// extracted; callers treat that as invalid input and skip the fetch.
///
/// Owner and repo names are not validated beyond shape; a bad name comes
/// back from GitHub as a 404.
pub fn parse_repo_input(input: &str) -> Option<RepoId> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // A GitHub URL anywhere in the text wins. The repo segment ends at the
    // next '/', '?' or '#', so deep links and query strings fall away.
    for (start, _) in input.match_indices(GITHUB_HOST) {
        if let Some(id) = capture_after_host(&input[start + GITHUB_HOST.len()..]) {
            return Some(id);
        }
    }

    // Otherwise take the first two non-empty slash-separated segments.
    let mut segments = input.split('/').filter(|s| !s.is_empty());
    match (segments.next(), segments.next()) {
        (Some(owner), Some(repo)) => Some(RepoId::new(owner, repo)),
        _ => None,
    }
}

fn capture_after_host(rest: &str) -> Option<RepoId> {
    let (owner, rest) = rest.split_once('/')?;
    if owner.is_empty() {
        return None;
    }
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let repo = &rest[..end];
    if repo.is_empty() {
        return None;
    }
    Some(RepoId::new(owner, repo))
}
