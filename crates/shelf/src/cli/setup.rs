use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Version string: `v0.3.0` for releases, `v0.3.0 (dev abc1234)` otherwise.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} (dev {})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version = get_version())]
#[command(about = "Filter a product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Datastore JSON file (overrides the `datastore` setting)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputMode::Text, help_heading = "Options")]
    pub output: OutputMode,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products, optionally filtered by one clause
    #[command(alias = "ls")]
    List {
        /// Property id or name
        property: Option<String>,

        /// Operator id (equals, greater_than, less_than, any, none, in, contains)
        operator: Option<String>,

        /// Comparison value; words are joined with spaces
        #[arg(allow_negative_numbers = true)]
        value: Vec<String>,
    },

    /// Show the properties products can be filtered on
    #[command(alias = "props")]
    Properties,

    /// Show the operators available for a property
    #[command(alias = "ops")]
    Operators {
        /// Property id or name
        property: String,
    },

    /// Show the resolved configuration
    Config,
}
