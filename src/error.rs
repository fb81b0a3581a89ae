//! Resolver errors. Both kinds are fatal: the resolver never retries and
//! never falls back to a default platform or version.

/// Errors produced while resolving an artifact.
#[derive(Debug)]
pub enum ResolveError {
    /// The host OS or CPU architecture is not in the supported set.
    UnsupportedPlatform(String),
    /// The release metadata lookup failed or returned no usable tag.
    VersionResolution(String),
}

impl std::fmt::Display for ResolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnsupportedPlatform(msg) => {
                write!(f, "Unsupported platform: {}", msg)
            }
            ResolveError::VersionResolution(msg) => {
                write!(f, "Failed to resolve version: {}", msg)
            }
        }
    }
}

impl std::error::Error for ResolveError {}
