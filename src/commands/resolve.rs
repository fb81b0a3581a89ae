use anyhow::Result;
use log::debug;

use super::platform_for_run;
use crate::config::Config;
use crate::github::GetLatestRelease;
use crate::release::ReleaseSpec;
use crate::resolver::{ArtifactDescriptor, build_descriptor, resolve_version, tool_name};

/// Resolves a release spec against the platform for this run and returns
/// the artifact descriptor. Platform detection happens first, so an
/// unsupported host never triggers a network lookup.
#[tracing::instrument(skip(config, spec))]
pub async fn resolve_descriptor<G: GetLatestRelease>(
    config: &Config<G>,
    spec: &ReleaseSpec,
    os_override: Option<&str>,
    arch_override: Option<&str>,
    tool_override: Option<&str>,
) -> Result<ArtifactDescriptor> {
    let platform = platform_for_run(os_override, arch_override)?;
    debug!("Resolving {} for {}", spec, platform);

    let version = resolve_version(spec, &config.github).await?;
    let tool = match tool_override {
        Some(t) => t.to_string(),
        None => tool_name(&spec.repo),
    };

    Ok(build_descriptor(
        platform,
        &version,
        &spec.repo,
        &tool,
        &config.download_host,
        &config.dest_dir,
    ))
}

/// `tlget resolve`: print the descriptor without touching the filesystem.
pub async fn run<G: GetLatestRelease>(
    config: &Config<G>,
    spec: &ReleaseSpec,
    os_override: Option<&str>,
    arch_override: Option<&str>,
    tool_override: Option<&str>,
) -> Result<()> {
    let descriptor =
        resolve_descriptor(config, spec, os_override, arch_override, tool_override).await?;

    println!("filename: {}", descriptor.filename);
    println!("url:      {}", descriptor.url);
    println!("dest:     {}", descriptor.dest.display());
    Ok(())
}
