//! Fetches a resolved artifact to its destination path.

use anyhow::{Context, Result, bail};
use log::{debug, info};
use sha2::{Digest, Sha256};

use crate::http::HttpClient;
use crate::resolver::ArtifactDescriptor;
use crate::runtime::Runtime;

/// Downloads the artifact to `descriptor.dest`, optionally verifying a
/// caller-supplied SHA-256 digest, and marks the file executable on unix.
/// On digest mismatch the file is removed before returning the error.
#[tracing::instrument(skip(runtime, descriptor, http_client))]
pub async fn fetch_artifact<R: Runtime>(
    runtime: &R,
    descriptor: &ArtifactDescriptor,
    http_client: &HttpClient,
    expected_sha256: Option<&str>,
) -> Result<()> {
    if let Some(parent) = descriptor.dest.parent() {
        runtime
            .create_dir_all(parent)
            .with_context(|| format!("Failed to create destination directory {:?}", parent))?;
    }

    info!("Downloading {} -> {:?}", descriptor.url, descriptor.dest);

    let dest = descriptor.dest.clone();
    http_client
        .download_file(&descriptor.url, || {
            runtime
                .create_file(&dest)
                .with_context(|| format!("Failed to create file at {:?}", dest))
        })
        .await?;

    if let Some(expected) = expected_sha256 {
        verify_digest(runtime, descriptor, expected)?;
    }

    runtime
        .set_permissions(&descriptor.dest, 0o755)
        .with_context(|| format!("Failed to mark {:?} executable", descriptor.dest))?;

    info!("Download complete: {:?}", descriptor.dest);
    Ok(())
}

fn verify_digest<R: Runtime>(
    runtime: &R,
    descriptor: &ArtifactDescriptor,
    expected: &str,
) -> Result<()> {
    debug!("Verifying SHA-256 digest of {:?}...", descriptor.dest);

    let mut reader = runtime
        .open(&descriptor.dest)
        .with_context(|| format!("Failed to open {:?} for verification", descriptor.dest))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut reader, &mut hasher).context("Failed to hash downloaded file")?;
    let actual = format!("{:x}", hasher.finalize());

    if !actual.eq_ignore_ascii_case(expected) {
        let _ = runtime.remove_file(&descriptor.dest);
        bail!(
            "SHA-256 mismatch for {}: expected {}, got {}",
            descriptor.filename,
            expected,
            actual
        );
    }

    debug!("Digest verified: {}", actual);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{MockRuntime, RealRuntime};
    use mockall::predicate::eq;
    use reqwest::Client;
    use std::path::{Path, PathBuf};
    use tempfile::tempdir;

    fn descriptor_at(dest: &Path) -> ArtifactDescriptor {
        ArtifactDescriptor {
            filename: "textlands-linux-x64".to_string(),
            url: String::new(),
            dest: dest.to_path_buf(),
        }
    }

    // SHA-256 of "binary payload"
    const PAYLOAD_SHA256: &str =
        "ba8f38fbdbe5b4a3d0416ca960b3ce5f4e96947fd722ba978124ad0f02aa974a";

    #[tokio::test]
    async fn test_fetch_artifact_writes_dest_and_sets_exec_bit() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dl")
            .with_status(200)
            .with_body("binary payload")
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let mut descriptor = descriptor_at(&dir.path().join("bin/textlands"));
        descriptor.url = format!("{}/dl", server.url());

        let runtime = RealRuntime;
        let http_client = HttpClient::new(Client::new());
        fetch_artifact(&runtime, &descriptor, &http_client, None)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            std::fs::read_to_string(&descriptor.dest).unwrap(),
            "binary payload"
        );

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&descriptor.dest)
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }

    #[tokio::test]
    async fn test_fetch_artifact_digest_match() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/dl")
            .with_status(200)
            .with_body("binary payload")
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let mut descriptor = descriptor_at(&dir.path().join("textlands"));
        descriptor.url = format!("{}/dl", server.url());

        let http_client = HttpClient::new(Client::new());
        let result =
            fetch_artifact(&RealRuntime, &descriptor, &http_client, Some(PAYLOAD_SHA256)).await;

        assert!(result.is_ok());
        assert!(descriptor.dest.exists());
    }

    #[tokio::test]
    async fn test_fetch_artifact_digest_is_case_insensitive() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/dl")
            .with_status(200)
            .with_body("binary payload")
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let mut descriptor = descriptor_at(&dir.path().join("textlands"));
        descriptor.url = format!("{}/dl", server.url());

        let http_client = HttpClient::new(Client::new());
        let expected = PAYLOAD_SHA256.to_uppercase();
        let result =
            fetch_artifact(&RealRuntime, &descriptor, &http_client, Some(&expected)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_artifact_digest_mismatch_removes_file() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/dl")
            .with_status(200)
            .with_body("tampered payload")
            .create_async()
            .await;

        let dir = tempdir().unwrap();
        let mut descriptor = descriptor_at(&dir.path().join("textlands"));
        descriptor.url = format!("{}/dl", server.url());

        let http_client = HttpClient::new(Client::new());
        let result =
            fetch_artifact(&RealRuntime, &descriptor, &http_client, Some(PAYLOAD_SHA256)).await;

        let err = result.unwrap_err();
        assert!(err.to_string().contains("SHA-256 mismatch"));
        assert!(!descriptor.dest.exists());
    }

    #[tokio::test]
    async fn test_fetch_artifact_download_failure() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dl")
            .with_status(404)
            .create_async()
            .await;

        let mut runtime = MockRuntime::new();
        let dest_parent = PathBuf::from("/tmp/tlget-test");
        runtime
            .expect_create_dir_all()
            .with(eq(dest_parent.clone()))
            .returning(|_| Ok(()));
        // 404 fails before a file is created; no other runtime calls allowed

        let mut descriptor = descriptor_at(&dest_parent.join("textlands"));
        descriptor.url = format!("{}/dl", server.url());

        let http_client = HttpClient::new(Client::new());
        let result = fetch_artifact(&runtime, &descriptor, &http_client, None).await;

        mock.assert_async().await;
        assert!(result.is_err());
    }
}
