//! Host platform detection and normalization.
//!
//! Operating systems and architectures are closed enums: adding a platform
//! is a compile-time-checked change, and anything outside the supported set
//! fails fast instead of silently fetching the wrong binary.

use crate::error::ResolveError;

/// Supported operating systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Os {
    Linux,
    Macos,
    Windows,
}

impl Os {
    /// Normalizes a raw OS name (case-insensitive). "darwin" is the vendor
    /// spelling for macOS.
    pub fn from_raw(raw: &str) -> Result<Self, ResolveError> {
        match raw.to_lowercase().as_str() {
            "linux" => Ok(Os::Linux),
            "macos" | "darwin" => Ok(Os::Macos),
            "windows" => Ok(Os::Windows),
            other => Err(ResolveError::UnsupportedPlatform(format!(
                "unknown operating system {:?}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Os::Linux => "linux",
            Os::Macos => "macos",
            Os::Windows => "windows",
        };
        write!(f, "{}", name)
    }
}

/// Supported CPU architectures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X64,
    Arm64,
}

impl Arch {
    /// Normalizes a raw architecture name (case-insensitive). Accepts the
    /// common vendor spellings for each family.
    pub fn from_raw(raw: &str) -> Result<Self, ResolveError> {
        match raw.to_lowercase().as_str() {
            "x64" | "x86_64" | "amd64" => Ok(Arch::X64),
            "arm64" | "aarch64" => Ok(Arch::Arm64),
            other => Err(ResolveError::UnsupportedPlatform(format!(
                "unknown architecture {:?}",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Arch::X64 => "x64",
            Arch::Arm64 => "arm64",
        };
        write!(f, "{}", name)
    }
}

/// Normalized (OS, architecture) pair identifying the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformKey {
    pub os: Os,
    pub arch: Arch,
}

impl PlatformKey {
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Detects the platform of the running host. Purely local: no network
    /// access, even on failure.
    pub fn detect() -> Result<Self, ResolveError> {
        Self::from_raw(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Builds a platform key from raw OS and architecture names.
    pub fn from_raw(os: &str, arch: &str) -> Result<Self, ResolveError> {
        Ok(Self {
            os: Os::from_raw(os)?,
            arch: Arch::from_raw(arch)?,
        })
    }
}

impl std::fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_normalization_variants() {
        assert_eq!(Os::from_raw("linux").unwrap(), Os::Linux);
        assert_eq!(Os::from_raw("darwin").unwrap(), Os::Macos);
        assert_eq!(Os::from_raw("macos").unwrap(), Os::Macos);
        assert_eq!(Os::from_raw("windows").unwrap(), Os::Windows);
    }

    #[test]
    fn test_os_normalization_case_insensitive() {
        assert_eq!(Os::from_raw("Linux").unwrap(), Os::Linux);
        assert_eq!(Os::from_raw("Darwin").unwrap(), Os::Macos);
        assert_eq!(Os::from_raw("WINDOWS").unwrap(), Os::Windows);
    }

    #[test]
    fn test_os_unknown_fails() {
        let err = Os::from_raw("plan9").unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedPlatform(_)));
        assert!(err.to_string().contains("plan9"));
    }

    #[test]
    fn test_arch_normalization_variants() {
        // Every supported raw spelling maps to exactly one family
        assert_eq!(Arch::from_raw("x86_64").unwrap(), Arch::X64);
        assert_eq!(Arch::from_raw("amd64").unwrap(), Arch::X64);
        assert_eq!(Arch::from_raw("x64").unwrap(), Arch::X64);
        assert_eq!(Arch::from_raw("aarch64").unwrap(), Arch::Arm64);
        assert_eq!(Arch::from_raw("arm64").unwrap(), Arch::Arm64);
    }

    #[test]
    fn test_arch_normalization_case_insensitive() {
        assert_eq!(Arch::from_raw("X86_64").unwrap(), Arch::X64);
        assert_eq!(Arch::from_raw("AArch64").unwrap(), Arch::Arm64);
        assert_eq!(Arch::from_raw("AMD64").unwrap(), Arch::X64);
    }

    #[test]
    fn test_arch_unknown_fails() {
        let err = Arch::from_raw("mips").unwrap_err();
        assert!(matches!(err, ResolveError::UnsupportedPlatform(_)));
    }

    #[test]
    fn test_arch_no_default_fallback() {
        // i686 is a real architecture but not a supported target; it must
        // fail rather than fall back to x64
        assert!(Arch::from_raw("i686").is_err());
        assert!(Arch::from_raw("x86").is_err());
    }

    #[test]
    fn test_display_canonical_names() {
        assert_eq!(Os::Linux.to_string(), "linux");
        assert_eq!(Os::Macos.to_string(), "macos");
        assert_eq!(Os::Windows.to_string(), "windows");
        assert_eq!(Arch::X64.to_string(), "x64");
        assert_eq!(Arch::Arm64.to_string(), "arm64");
    }

    #[test]
    fn test_platform_key_from_raw() {
        let key = PlatformKey::from_raw("Darwin", "aarch64").unwrap();
        assert_eq!(key, PlatformKey::new(Os::Macos, Arch::Arm64));
        assert_eq!(key.to_string(), "macos-arm64");
    }

    #[test]
    fn test_platform_key_detect_matches_host() {
        let key = PlatformKey::detect();

        // The test host itself must be a supported platform
        #[cfg(target_os = "linux")]
        assert_eq!(key.unwrap().os, Os::Linux);

        #[cfg(target_os = "macos")]
        assert_eq!(key.unwrap().os, Os::Macos);

        #[cfg(target_os = "windows")]
        assert_eq!(key.unwrap().os, Os::Windows);
    }

    #[test]
    fn test_platform_key_unsupported_os_fails() {
        let result = PlatformKey::from_raw("plan9", "x86_64");
        assert!(matches!(result, Err(ResolveError::UnsupportedPlatform(_))));
    }
}
