//! GitHub API helpers for posting the coverage comment on pull requests.

use anyhow::{bail, Context as _, Result};
use serde::Deserialize;

/// Hidden marker used to find our own comment on subsequent runs.
const COMMENT_MARKER: &str = "<!-- covtrack-comment -->";

const API_VERSION: &str = "2022-11-28";

/// Resolved GitHub Actions context, read from environment variables.
pub struct Context {
    token: String,
    repo: String,
    pr_number: u64,
}

impl Context {
    /// Build a context from standard GitHub Actions environment
    /// variables (`GITHUB_TOKEN`, `GITHUB_REPOSITORY`, `GITHUB_REF`).
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .context("GITHUB_TOKEN environment variable is required")?;
        let repo = std::env::var("GITHUB_REPOSITORY")
            .context("GITHUB_REPOSITORY environment variable is required")?;
        let github_ref =
            std::env::var("GITHUB_REF").context("GITHUB_REF environment variable is required")?;
        let pr_number = pr_number_from_ref(&github_ref)
            .context("could not determine PR number from GITHUB_REF")?;
        Ok(Self {
            token,
            repo,
            pr_number,
        })
    }

    /// Create or update the marked coverage comment on the pull request.
    pub fn post_comment(&self, body: &str) -> Result<()> {
        let body_with_marker = format!("{COMMENT_MARKER}\n{body}");
        let payload = serde_json::json!({ "body": body_with_marker });

        let (action, request) = match self.find_existing_comment()? {
            Some(comment_id) => (
                "update",
                ureq::patch(&self.api_url(&format!("issues/comments/{comment_id}"))),
            ),
            None => (
                "create",
                ureq::post(&self.api_url(&format!("issues/{}/comments", self.pr_number))),
            ),
        };

        match self.with_headers(request).send_json(payload) {
            Ok(_) => {
                eprintln!("Comment posted to {}/pull/{}", self.repo, self.pr_number);
                Ok(())
            }
            Err(ureq::Error::Status(code, resp)) => {
                let text = resp.into_string().unwrap_or_default();
                bail!("GitHub API error ({action} comment, HTTP {code}): {text}")
            }
            Err(e) => bail!("Failed to {action} comment: {e}"),
        }
    }

    /// Find an existing covtrack comment on the PR (by the hidden marker).
    fn find_existing_comment(&self) -> Result<Option<u64>> {
        let mut page = 1u32;
        loop {
            let url = self.api_url(&format!(
                "issues/{}/comments?per_page=100&page={}",
                self.pr_number, page
            ));
            let resp = self
                .with_headers(ureq::get(&url))
                .call()
                .context("Failed to list PR comments")?;

            let comments: Vec<Comment> =
                resp.into_json().context("Failed to parse comments JSON")?;
            if comments.is_empty() {
                return Ok(None);
            }
            for comment in &comments {
                if let Some(ref body) = comment.body {
                    if body.contains(COMMENT_MARKER) {
                        return Ok(Some(comment.id));
                    }
                }
            }
            page += 1;
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("https://api.github.com/repos/{}/{}", self.repo, path)
    }

    fn with_headers(&self, request: ureq::Request) -> ureq::Request {
        request
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("Accept", "application/vnd.github+json")
            .set("User-Agent", "covtrack")
            .set("X-GitHub-Api-Version", API_VERSION)
    }
}

#[derive(Deserialize)]
struct Comment {
    id: u64,
    body: Option<String>,
}

/// Extract the PR number from a ref like "refs/pull/42/merge".
fn pr_number_from_ref(github_ref: &str) -> Option<u64> {
    let parts: Vec<&str> = github_ref.split('/').collect();
    if parts.len() >= 3 && parts[0] == "refs" && parts[1] == "pull" {
        parts[2].parse().ok()
    } else {
        None
    }
}
