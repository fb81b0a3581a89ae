use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tlget::config::Config;
use tlget::release::ReleaseSpec;
use tlget::runtime::RealRuntime;

/// tlget - TextLands CLI fetcher
///
/// Resolve and download prebuilt textlands binaries from GitHub releases.
///
/// If the GITHUB_TOKEN environment variable is set, it will be used for
/// authentication when looking up release metadata.
///
/// Examples:
///   tlget resolve                  # Show the download URL for the host platform
///   tlget fetch textlands/cli@1.2.3
///   tlget config --dest ~/bin      # Persist a setting for later runs
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Destination directory for downloaded binaries (default ~/.tlget/bin)
    #[arg(
        long = "dest",
        short = 'd',
        env = "TLGET_DEST",
        value_name = "PATH",
        global = true
    )]
    dest_dir: Option<PathBuf>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    api_url: Option<String>,

    /// Host serving the release artifacts (defaults to https://github.com)
    #[arg(long = "download-host", value_name = "URL", global = true)]
    download_host: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the artifact filename, URL, and destination without downloading
    Resolve(ResolveArgs),

    /// Download the resolved binary to the destination directory
    Fetch(FetchArgs),

    /// Show or persist CLI settings (stored in ~/.tlget/config.json)
    Config(ConfigArgs),

    /// Show version information
    Version,
}

#[derive(clap::Args, Debug)]
struct ConfigArgs {
    /// Show the effective settings without changing anything
    #[arg(long = "show")]
    show: bool,
}

#[derive(clap::Args, Debug)]
struct ResolveArgs {
    /// Release spec in the form "owner/repo[@version]"
    #[arg(value_name = "OWNER/REPO[@VERSION]", default_value = "textlands/cli")]
    spec: ReleaseSpec,

    #[command(flatten)]
    target: TargetArgs,
}

#[derive(clap::Args, Debug)]
struct FetchArgs {
    /// Release spec in the form "owner/repo[@version]"
    #[arg(value_name = "OWNER/REPO[@VERSION]", default_value = "textlands/cli")]
    spec: ReleaseSpec,

    #[command(flatten)]
    target: TargetArgs,

    /// Expected SHA-256 digest of the artifact (hex)
    #[arg(long = "sha256", value_name = "DIGEST")]
    sha256: Option<String>,
}

#[derive(clap::Args, Debug)]
struct TargetArgs {
    /// Resolve for this OS instead of the host (linux, macos/darwin, windows)
    #[arg(long = "os", value_name = "OS")]
    os: Option<String>,

    /// Resolve for this architecture instead of the host (x64/amd64/x86_64, arm64/aarch64)
    #[arg(long = "arch", value_name = "ARCH")]
    arch: Option<String>,

    /// Binary name override (default derived from the repository)
    #[arg(long = "tool", value_name = "NAME")]
    tool: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    match cli.command {
        Commands::Resolve(args) => {
            let config = Config::new(&runtime, cli.dest_dir, cli.api_url, cli.download_host)?;
            tlget::commands::resolve::run(
                &config,
                &args.spec,
                args.target.os.as_deref(),
                args.target.arch.as_deref(),
                args.target.tool.as_deref(),
            )
            .await?
        }
        Commands::Fetch(args) => {
            let config = Config::new(&runtime, cli.dest_dir, cli.api_url, cli.download_host)?;
            tlget::commands::fetch::run(
                &runtime,
                &config,
                &args.spec,
                args.target.os.as_deref(),
                args.target.arch.as_deref(),
                args.target.tool.as_deref(),
                args.sha256.as_deref(),
            )
            .await?
        }
        Commands::Config(args) => {
            tlget::commands::config::run(
                &runtime,
                cli.api_url,
                cli.download_host,
                cli.dest_dir,
                args.show,
            )?
        }
        Commands::Version => println!("tlget v{}", env!("CARGO_PKG_VERSION")),
    }
    Ok(())
}
