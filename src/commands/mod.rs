pub mod config;
pub mod fetch;
pub mod resolve;

use crate::error::ResolveError;
use crate::platform::PlatformKey;

/// Builds the platform key for this run: host detection, with optional raw
/// overrides that go through the same normalization as detected values.
pub fn platform_for_run(
    os_override: Option<&str>,
    arch_override: Option<&str>,
) -> Result<PlatformKey, ResolveError> {
    let os = os_override.unwrap_or(std::env::consts::OS);
    let arch = arch_override.unwrap_or(std::env::consts::ARCH);
    PlatformKey::from_raw(os, arch)
}
