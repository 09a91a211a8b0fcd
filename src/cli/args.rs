//! Command-line argument parsing

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "docker-tag-deleter")]
#[command(about = "A tool to delete tags from Docker/OCI registries")]
#[command(version, author)]
pub struct Args {
    /// Registry base URL
    #[arg(
        long = "registry",
        short = 'r',
        help = "Registry base URL; https:// is assumed when no scheme is given"
    )]
    pub registry: String,

    /// Repository path within the registry
    #[arg(
        long = "repository",
        short = 'R',
        help = "Slash-delimited repository path, e.g. myproject/app"
    )]
    pub repository: String,

    /// Tag to delete
    #[arg(long = "tag", short = 't', help = "Tag name to delete")]
    pub tag: String,

    /// Registry username
    #[arg(
        long = "username",
        short = 'u',
        help = "Username for registry authentication"
    )]
    pub username: Option<String>,

    /// Registry password
    #[arg(
        long = "password",
        short = 'p',
        help = "Password for registry authentication"
    )]
    pub password: Option<String>,

    /// Treat a missing tag as success
    #[arg(
        long = "ignore-not-found",
        help = "Exit successfully when the tag does not exist"
    )]
    pub ignore_not_found: bool,

    /// Skip TLS verification
    #[arg(
        long = "skip-tls",
        short = 'k',
        help = "Skip TLS certificate verification"
    )]
    pub skip_tls: bool,

    /// Timeout in seconds for network operations
    #[arg(
        long = "timeout",
        help = "Timeout for each network operation in seconds (transport default when unset)"
    )]
    pub timeout: Option<u64>,

    /// Verbose output
    #[arg(long = "verbose", short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    /// Quiet output
    #[arg(
        long = "quiet",
        short = 'q',
        conflicts_with = "verbose",
        help = "Suppress informational output"
    )]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Load credentials from environment variables when not given on the
    /// command line, so secrets can stay out of shell history and CI logs.
    pub fn from_env(mut self) -> Self {
        if self.username.is_none() {
            self.username = std::env::var("TAG_DELETER_USERNAME").ok();
        }

        if self.password.is_none() {
            self.password = std::env::var("TAG_DELETER_PASSWORD").ok();
        }

        self
    }
}
