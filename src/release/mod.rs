use anyhow::{Result, anyhow};
use std::str::FromStr;

#[derive(Debug, PartialEq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!("Invalid repository format. Expected 'owner/repo'."))
        } else {
            Ok(GitHubRepo {
                owner: parts[0].to_string(),
                repo: parts[1].to_string(),
            })
        }
    }
}

/// A requested version: either a concrete value or the "latest" sentinel.
#[derive(Debug, PartialEq, Clone)]
pub enum VersionReq {
    Latest,
    Exact(String),
}

impl std::fmt::Display for VersionReq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionReq::Latest => write!(f, "latest"),
            VersionReq::Exact(v) => write!(f, "{}", v),
        }
    }
}

/// A repository plus a requested version.
/// Format: "owner/repo" or "owner/repo@version"; a missing version or the
/// literal "latest" both mean the newest published release.
#[derive(Debug, PartialEq, Clone)]
pub struct ReleaseSpec {
    pub repo: GitHubRepo,
    pub version: VersionReq,
}

impl std::fmt::Display for ReleaseSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            VersionReq::Latest => write!(f, "{}", self.repo),
            VersionReq::Exact(v) => write!(f, "{}@{}", self.repo, v),
        }
    }
}

impl FromStr for ReleaseSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (repo_part, version) = if let Some(at_pos) = s.rfind('@') {
            let (repo, ver) = s.split_at(at_pos);
            let ver = &ver[1..];
            if ver.is_empty() {
                return Err(anyhow!(
                    "Invalid format: version after @ cannot be empty. Expected 'owner/repo@version'."
                ));
            }
            let version = if ver.eq_ignore_ascii_case("latest") {
                VersionReq::Latest
            } else {
                VersionReq::Exact(ver.to_string())
            };
            (repo, version)
        } else {
            (s, VersionReq::Latest)
        };

        let repo = repo_part.parse::<GitHubRepo>()?;
        Ok(ReleaseSpec { repo, version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_github_repo_valid() {
        let repo = GitHubRepo::from_str("textlands/cli").unwrap();
        assert_eq!(
            repo,
            GitHubRepo {
                owner: "textlands".to_string(),
                repo: "cli".to_string()
            }
        );
    }

    #[test]
    fn test_parse_github_repo_invalid() {
        assert!(GitHubRepo::from_str("textlands").is_err());
        assert!(GitHubRepo::from_str("textlands/").is_err());
        assert!(GitHubRepo::from_str("/cli").is_err());
        assert!(GitHubRepo::from_str("a/b/c").is_err());
    }

    #[test]
    fn test_parse_release_spec_without_version() {
        let spec = ReleaseSpec::from_str("textlands/cli").unwrap();
        assert_eq!(spec.repo.owner, "textlands");
        assert_eq!(spec.repo.repo, "cli");
        assert_eq!(spec.version, VersionReq::Latest);
    }

    #[test]
    fn test_parse_release_spec_with_version() {
        let spec = ReleaseSpec::from_str("textlands/cli@1.2.3").unwrap();
        assert_eq!(spec.version, VersionReq::Exact("1.2.3".to_string()));
    }

    #[test]
    fn test_parse_release_spec_latest_sentinel() {
        let spec = ReleaseSpec::from_str("textlands/cli@latest").unwrap();
        assert_eq!(spec.version, VersionReq::Latest);

        let spec = ReleaseSpec::from_str("textlands/cli@LATEST").unwrap();
        assert_eq!(spec.version, VersionReq::Latest);
    }

    #[test]
    fn test_parse_release_spec_empty_version_fails() {
        let result = ReleaseSpec::from_str("textlands/cli@");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_parse_release_spec_invalid_repo_fails() {
        assert!(ReleaseSpec::from_str("invalid@1.0.0").is_err());
    }

    #[test]
    fn test_release_spec_display() {
        let spec = ReleaseSpec::from_str("textlands/cli@1.2.3").unwrap();
        assert_eq!(format!("{}", spec), "textlands/cli@1.2.3");

        let spec = ReleaseSpec::from_str("textlands/cli").unwrap();
        assert_eq!(format!("{}", spec), "textlands/cli");
    }
}
