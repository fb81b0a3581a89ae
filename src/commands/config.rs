use anyhow::Result;
use std::path::PathBuf;

use crate::github::DEFAULT_API_URL;
use crate::resolver::DEFAULT_DOWNLOAD_HOST;
use crate::runtime::Runtime;
use crate::settings::{self, Settings};

/// `tlget config`: persist CLI settings under `~/.tlget/config.json`.
/// Flags given here are stored for later runs; without setters (or with
/// `--show`) the effective settings are printed instead.
#[tracing::instrument(skip(runtime))]
pub fn run<R: Runtime>(
    runtime: &R,
    api_url: Option<String>,
    download_host: Option<String>,
    dest_dir: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let mut stored = settings::load(runtime)?;
    let mut changed = false;

    if let Some(url) = api_url {
        println!("API URL set to {}", url);
        stored.api_url = Some(url);
        changed = true;
    }
    if let Some(host) = download_host {
        println!("Download host set to {}", host);
        stored.download_host = Some(host);
        changed = true;
    }
    if let Some(dir) = dest_dir {
        println!("Destination set to {}", dir.display());
        stored.dest_dir = Some(dir);
        changed = true;
    }

    if changed {
        settings::save(runtime, &stored)?;
    }

    if show || !changed {
        print_settings(runtime, &stored);
    }

    Ok(())
}

fn print_settings<R: Runtime>(runtime: &R, stored: &Settings) {
    println!(
        "API URL: {}",
        stored.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    );
    println!(
        "Download host: {}",
        stored.download_host.as_deref().unwrap_or(DEFAULT_DOWNLOAD_HOST)
    );

    let dest = stored.dest_dir.clone().or_else(|| {
        runtime
            .home_dir()
            .map(|home| home.join(".tlget").join("bin"))
    });
    match dest {
        Some(dir) => println!("Destination: {}", dir.display()),
        None => println!("Destination: (none; pass --dest)"),
    }
}
