use anyhow::Result;

use super::resolve::resolve_descriptor;
use crate::config::Config;
use crate::download::fetch_artifact;
use crate::github::GetLatestRelease;
use crate::release::ReleaseSpec;
use crate::runtime::Runtime;

/// `tlget fetch`: resolve the artifact, then download it to its
/// destination, verifying a fixed SHA-256 digest when one is given.
#[tracing::instrument(skip(runtime, config, spec))]
pub async fn run<R: Runtime, G: GetLatestRelease>(
    runtime: &R,
    config: &Config<G>,
    spec: &ReleaseSpec,
    os_override: Option<&str>,
    arch_override: Option<&str>,
    tool_override: Option<&str>,
    sha256: Option<&str>,
) -> Result<()> {
    let descriptor =
        resolve_descriptor(config, spec, os_override, arch_override, tool_override).await?;

    println!(" downloading {} -> {}", descriptor.url, descriptor.dest.display());
    fetch_artifact(runtime, &descriptor, &config.http_client, sha256).await?;
    println!("   installed {}", descriptor.dest.display());

    Ok(())
}
