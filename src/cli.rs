use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Check whether the GitHub-hosted dependencies of a Go project are up to date
#[derive(Parser, Debug)]
#[command(name = "depfresh")]
#[command(version)]
#[command(
    about = "Check whether the GitHub-hosted dependencies of a Go project are up to date",
    long_about = None
)]
pub struct Args {
    /// GitHub access token (defaults to `git config --global github.token`)
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,

    /// Path to the project directory (defaults to current directory)
    #[arg(short, long)]
    pub path: Option<String>,

    /// Skip dependencies whose import path contains PATTERN
    /// Can be specified multiple times: -e "github.com/myorg/" -e "internal"
    #[arg(
        short,
        long = "exclude",
        value_name = "PATTERN",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub exclude: Vec<String>,

    /// Config file path (defaults to depfresh.config.yml in the project directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    /// Log every module walked and every resolution failure
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
