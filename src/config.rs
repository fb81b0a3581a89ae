use anyhow::{Context, Result};
use log::debug;
use reqwest::{
    Client,
    header::{AUTHORIZATION, HeaderMap, HeaderValue},
};
use std::path::PathBuf;

use crate::github::{GetLatestRelease, GitHub};
use crate::http::HttpClient;
use crate::resolver::DEFAULT_DOWNLOAD_HOST;
use crate::runtime::Runtime;
use crate::settings;

/// Everything a command needs, built once per run from CLI flags, the
/// environment, and stored settings (in that order of precedence). Holds no
/// mutable state.
pub struct Config<G: GetLatestRelease> {
    pub github: G,
    pub http_client: HttpClient,
    pub download_host: String,
    pub dest_dir: PathBuf,
}

impl Config<GitHub> {
    pub fn new<R: Runtime>(
        runtime: &R,
        dest_dir: Option<PathBuf>,
        api_url: Option<String>,
        download_host: Option<String>,
    ) -> Result<Self> {
        let stored = settings::load(runtime)?;

        let mut headers = HeaderMap::new();
        if let Ok(token) = runtime.env_var("GITHUB_TOKEN") {
            let mut auth_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            auth_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth_value);
            debug!("Using GITHUB_TOKEN for authentication");
        }

        let client = Client::builder()
            .user_agent("tlget")
            .default_headers(headers)
            .build()?;
        let http_client = HttpClient::new(client);

        let github = GitHub::new(http_client.clone(), api_url.or(stored.api_url));

        let dest_dir = match dest_dir.or(stored.dest_dir) {
            Some(dir) => dir,
            None => runtime
                .home_dir()
                .context("Could not determine home directory; pass --dest")?
                .join(".tlget")
                .join("bin"),
        };

        Ok(Self {
            github,
            http_client,
            download_host: download_host
                .or(stored.download_host)
                .unwrap_or_else(|| DEFAULT_DOWNLOAD_HOST.to_string()),
            dest_dir,
        })
    }
}
