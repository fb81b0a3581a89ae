//! Artifact resolution: maps (platform, version, repository) to the
//! canonical download URL, binary filename, and local destination.

use log::debug;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::github::GetLatestRelease;
use crate::platform::{Os, PlatformKey};
use crate::release::{GitHubRepo, ReleaseSpec, VersionReq};

/// Default host the release artifacts are served from.
pub const DEFAULT_DOWNLOAD_HOST: &str = "https://github.com";

/// Resolved filename, URL, and destination for one platform/version pair.
/// Derived deterministically; recomputed on every run, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub filename: String,
    pub url: String,
    pub dest: PathBuf,
}

/// The name the published binaries carry. Repositories named `cli` publish
/// under the owner's name, so `textlands/cli` releases `textlands-*`.
pub fn tool_name(repo: &GitHubRepo) -> String {
    if repo.repo.eq_ignore_ascii_case("cli") {
        repo.owner.clone()
    } else {
        repo.repo.clone()
    }
}

/// Resolves a requested version to a concrete one. A concrete version is
/// returned unchanged; "latest" is resolved via the release metadata
/// endpoint, stripping any leading "v" from the published tag. Never
/// substitutes a default version on failure.
#[tracing::instrument(skip(github))]
pub async fn resolve_version<G: GetLatestRelease>(
    spec: &ReleaseSpec,
    github: &G,
) -> Result<String, ResolveError> {
    match &spec.version {
        VersionReq::Exact(version) => Ok(version.clone()),
        VersionReq::Latest => {
            debug!("Resolving latest version of {}...", spec.repo);

            let release = github.get_latest_release(&spec.repo).await.map_err(|e| {
                ResolveError::VersionResolution(format!(
                    "could not query latest release of {}: {:#}",
                    spec.repo, e
                ))
            })?;

            let tag = release.tag_name.trim();
            let version = tag.strip_prefix(['v', 'V']).unwrap_or(tag);
            if version.is_empty() {
                return Err(ResolveError::VersionResolution(format!(
                    "latest release of {} has no usable tag",
                    spec.repo
                )));
            }

            debug!("Latest version of {} is {}", spec.repo, version);
            Ok(version.to_string())
        }
    }
}

/// Composes the artifact descriptor for a platform and concrete version.
/// Pure: no I/O, no failure path; identical inputs yield identical output.
pub fn build_descriptor(
    platform: PlatformKey,
    version: &str,
    repo: &GitHubRepo,
    tool: &str,
    download_host: &str,
    dest_dir: &Path,
) -> ArtifactDescriptor {
    let exe = if platform.os == Os::Windows { ".exe" } else { "" };
    let filename = format!("{}-{}-{}{}", tool, platform.os, platform.arch, exe);
    let url = format!(
        "{}/{}/{}/releases/download/v{}/{}",
        download_host, repo.owner, repo.repo, version, filename
    );
    let dest = dest_dir.join(format!("{}{}", tool, exe));

    ArtifactDescriptor {
        filename,
        url,
        dest,
    }
}
