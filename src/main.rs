use clap::{Args, Parser, Subcommand};
use stac::{ArtifactoryClient, ClientConfig, DEFAULT_VERSION_LIMIT, new_maven_client};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stac")]
#[command(version, about = "Find artifact versions and download URLs in Artifactory")]
struct Cli {
    #[command(flatten)]
    repo: RepoArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct RepoArgs {
    /// Root of the Artifactory installation
    #[arg(long, env = "STAC_BASE_URL", global = true, default_value = "")]
    base_url: String,

    /// Repository to search, e.g. libs-release-local
    #[arg(long, env = "STAC_REPO", global = true, default_value = "")]
    repo: String,

    /// The repository holds SNAPSHOT (integration) versions
    #[arg(long, global = true)]
    snapshot: bool,

    #[arg(long, env = "STAC_USERNAME", global = true)]
    username: Option<String>,

    #[arg(long, env = "STAC_PASSWORD", global = true, hide_env_values = true)]
    password: Option<String>,
}

#[derive(Args)]
struct ArtifactArgs {
    /// Group and artifact, e.g. com.example.users.service
    full_name: String,

    #[arg(long, default_value = "jar")]
    packaging: String,

    /// Variant of the artifact, e.g. sources or javadoc
    #[arg(long)]
    descriptor: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the URL of a specific version
    Url {
        #[command(flatten)]
        artifact: ArtifactArgs,
        version: String,
    },
    /// Print the URL of the most recent version
    Latest {
        #[command(flatten)]
        artifact: ArtifactArgs,
        /// Print the version number instead of the URL
        #[arg(long)]
        version_only: bool,
    },
    /// Print the URLs of the most recent versions, newest first
    Versions {
        #[command(flatten)]
        artifact: ArtifactArgs,
        #[arg(long, default_value_t = DEFAULT_VERSION_LIMIT)]
        limit: usize,
        /// Print version numbers instead of URLs
        #[arg(long)]
        version_only: bool,
    },
}

impl RepoArgs {
    fn into_config(self) -> anyhow::Result<ClientConfig> {
        if self.base_url.is_empty() || self.repo.is_empty() {
            anyhow::bail!("--base-url and --repo (or STAC_BASE_URL and STAC_REPO) are required");
        }
        Ok(ClientConfig {
            username: self.username,
            password: self.password,
            ..ClientConfig::new(&self.base_url, &self.repo, self.snapshot)
        })
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("STAC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.repo.into_config()?;
    let client = new_maven_client(&config)?;

    match cli.command {
        Command::Url { artifact, version } => {
            let url = client.get_version_url(
                &artifact.full_name,
                &artifact.packaging,
                &version,
                artifact.descriptor.as_deref(),
            )?;
            println!("{url}");
        }
        Command::Latest {
            artifact,
            version_only,
        } => {
            let line = if version_only {
                client.get_latest_version_number(&artifact.full_name).await?
            } else {
                client
                    .get_latest_version(
                        &artifact.full_name,
                        &artifact.packaging,
                        artifact.descriptor.as_deref(),
                    )
                    .await?
            };
            println!("{line}");
        }
        Command::Versions {
            artifact,
            limit,
            version_only,
        } => {
            let lines = if version_only {
                client
                    .get_latest_version_numbers(&artifact.full_name, limit)
                    .await?
            } else {
                client
                    .get_latest_versions(
                        &artifact.full_name,
                        &artifact.packaging,
                        artifact.descriptor.as_deref(),
                        limit,
                    )
                    .await?
            };
            for line in lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}
