//! Student identity resolution.
//!
//! Classroom repositories are named `<assignment>-<username>`. The
//! repository name is found by trying, in order:
//!   1. the `GITHUB_REPOSITORY` environment variable (`owner/name`)
//!   2. `git remote get-url origin`
//!   3. the current working directory's name
//!
//! A set `GITHUB_REPOSITORY` is never skipped, even when it names no
//! repository. Resolution never fails; the last resort is `"unknown"`.

use crate::{
    process::run_captured,
    types::StudentId,
    variant::{variant_for_student, Variant},
};
use std::path::PathBuf;
use std::time::Duration;

pub const REPOSITORY_ENV: &str = "GITHUB_REPOSITORY";
pub const UNKNOWN_STUDENT: &str = "unknown";

const GIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Last `/` segment of an `owner/name` slug.
pub fn repo_name_from_slug(slug: &str) -> Option<String> {
    let name = slug.trim().rsplit('/').next()?;
    (!name.is_empty()).then(|| name.to_string())
}

/// Repository name from a remote URL, HTTPS or scp-style:
/// `https://github.com/org/lab01-alice.git` and
/// `git@github.com:org/lab01-alice.git` both give `lab01-alice`.
pub fn repo_name_from_remote_url(url: &str) -> Option<String> {
    let url = url.trim().trim_end_matches('/');
    let url = url.strip_suffix(".git").unwrap_or(url);
    let name = url.rsplit(['/', ':']).next()?;
    (!name.is_empty()).then(|| name.to_string())
}

/// Username part of a repository name: the text after the final `-`,
/// or the whole name when there is no hyphen.
pub fn extract_username(repo_name: &str) -> StudentId {
    let suffix = repo_name.rsplit('-').next().unwrap_or_default();
    if suffix.is_empty() {
        UNKNOWN_STUDENT.to_string()
    } else {
        suffix.to_string()
    }
}

/// Walk the fallback chain. Each source is only consulted if the
/// previous one produced nothing.
pub fn resolve_repo_name(
    slug: Option<String>,
    remote_url: impl FnOnce() -> Option<String>,
    cwd: impl FnOnce() -> Option<PathBuf>,
) -> Option<String> {
    // A non-empty slug is authoritative even when its last segment is
    // empty (`org/`); the username then resolves to "unknown".
    if let Some(slug) = slug.filter(|s| !s.trim().is_empty()) {
        let name = repo_name_from_slug(&slug).unwrap_or_default();
        log::debug!("identity: repo name '{name}' from {REPOSITORY_ENV}");
        return Some(name);
    }
    if let Some(name) = remote_url().as_deref().and_then(repo_name_from_remote_url) {
        log::debug!("identity: repo name '{name}' from git remote");
        return Some(name);
    }
    let name = cwd()?.file_name()?.to_string_lossy().into_owned();
    log::debug!("identity: repo name '{name}' from working directory");
    (!name.is_empty()).then_some(name)
}

fn git_remote_url() -> Option<String> {
    match run_captured("git", &["remote", "get-url", "origin"], None, GIT_TIMEOUT) {
        Ok(out) if out.success() => Some(out.stdout),
        Ok(out) => {
            log::debug!("identity: git remote exited with {:?}", out.status_code);
            None
        }
        Err(e) => {
            log::debug!("identity: git unavailable: {e}");
            None
        }
    }
}

/// Repository name of the current checkout, if any source yields one.
pub fn repo_name() -> Option<String> {
    resolve_repo_name(
        std::env::var(REPOSITORY_ENV).ok(),
        git_remote_url,
        || std::env::current_dir().ok(),
    )
}

pub fn my_username() -> StudentId {
    match repo_name() {
        Some(name) => extract_username(&name),
        None => {
            log::warn!("identity: could not resolve repository name, using '{UNKNOWN_STUDENT}'");
            UNKNOWN_STUDENT.to_string()
        }
    }
}

pub fn my_variant() -> Variant {
    variant_for_student(&my_username())
}
