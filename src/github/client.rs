use anyhow::Result;
use async_trait::async_trait;
use log::debug;

use super::types::Release;
use crate::http::HttpClient;
use crate::release::GitHubRepo;

/// Release metadata lookup. Queried at most once per run, and only when the
/// requested version is "latest".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetLatestRelease: Send + Sync {
    async fn get_latest_release(&self, repo: &GitHubRepo) -> Result<Release>;
}

/// Default base URL for release metadata lookups.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub struct GitHub {
    client: HttpClient,
    api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(client, api_url))]
    pub fn new(client: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { client, api_url }
    }
}

#[async_trait]
impl GetLatestRelease for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn get_latest_release(&self, repo: &GitHubRepo) -> Result<Release> {
        let url = format!(
            "{}/repos/{}/{}/releases/latest",
            self.api_url, repo.owner, repo.repo
        );

        debug!("Fetching latest release from {}...", url);

        self.client.get_json::<Release>(&url).await
    }
}
