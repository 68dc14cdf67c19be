use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueHint;
use clap::builder::{FalseyValueParser, RangedU64ValueParser};
pub use clap_complete::Shell;

pub use crate::adapters::OutputFormat;
use crate::domain::ListeningWindow;
use crate::infra::{DEFAULT_GITHUB_API_URL, DEFAULT_LASTFM_API_URL};

const AFTER_HELP: &str =
    "Use --help for full details and examples. Use --format json for machine-readable output.";

const LONG_ABOUT: &str = "\
Publish your top Last.fm artists as a fixed-width chart in a GitHub gist.\n\
\n\
Names are fitted to a fixed column by display width, so CJK, Hangul and emoji\n\
keep the play-count bars aligned.";

const AFTER_LONG_HELP: &str = r#"ENVIRONMENT:
    LASTFM_USERNAME    Last.fm user whose listening is charted
    LASTFM_KEY         Last.fm API key
    GIST_ID            Gist to update (update only)
    GH_TOKEN           GitHub token with the gist scope (update only)

EXAMPLES:
    # Check what would be published
    soundtrack preview --lastfm-user rj

    # Publish this week's chart
    soundtrack update

    # Chart the last month, top 10
    soundtrack update --window 1month --limit 10"#;

pub const DEFAULT_LIMIT: usize = 5;
const MAX_LIMIT: u64 = 50;

#[derive(Parser)]
#[command(name = "soundtrack")]
#[command(author, version, propagate_version = true)]
#[command(about = "Publish your weekly top Last.fm artists to a GitHub gist")]
#[command(long_about = LONG_ABOUT)]
#[command(after_help = AFTER_HELP)]
#[command(after_long_help = AFTER_LONG_HELP)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (text or json)
    #[arg(
        short,
        long,
        global = true,
        value_enum,
        value_name = "FORMAT",
        default_value_t = OutputFormat::Text,
        help_heading = "Output Options"
    )]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, global = true, help_heading = "Output Options")]
    pub json: bool,

    /// Disable colored output (also respects NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help_heading = "Output Options"
    )]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, help_heading = "Debug Options")]
    pub verbose: bool,
}

impl Cli {
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the chart and publish it to the gist
    #[command(long_about = "\
Build the chart and publish it to the gist.

The gist's first file (by name) is renamed to the chart title and its content
replaced with the chart.")]
    Update {
        #[command(flatten)]
        lastfm: LastfmArgs,

        #[command(flatten)]
        gist: GistArgs,
    },

    /// Build the chart and print it without touching the gist
    Preview {
        #[command(flatten)]
        lastfm: LastfmArgs,
    },

    /// Print shell completions
    #[command(after_long_help = "\
EXAMPLES:
    soundtrack completions bash > ~/.local/share/bash-completion/completions/soundtrack
    soundtrack completions zsh > ~/.zfunc/_soundtrack")]
    Completions {
        #[arg(value_enum, value_name = "SHELL")]
        shell: Shell,
    },
}

#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Last.fm Options")]
pub struct LastfmArgs {
    /// Last.fm username
    #[arg(long, env = "LASTFM_USERNAME", value_name = "USER")]
    pub lastfm_user: Option<String>,

    /// Last.fm API key
    #[arg(long, env = "LASTFM_KEY", value_name = "KEY", hide_env_values = true)]
    pub lastfm_key: Option<String>,

    /// Number of artists to chart (1-50)
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_LIMIT,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_LIMIT)
    )]
    pub limit: usize,

    /// Listening window: 7day, 1month, 3month, 6month, 12month or overall
    #[arg(long, value_name = "PERIOD", default_value_t = ListeningWindow::Week)]
    pub window: ListeningWindow,

    #[arg(
        long,
        env = "SOUNDTRACK_LASTFM_API_URL",
        value_name = "URL",
        value_hint = ValueHint::Url,
        default_value = DEFAULT_LASTFM_API_URL,
        hide = true
    )]
    pub lastfm_api_url: String,
}

#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Gist Options")]
pub struct GistArgs {
    /// Id of the gist to update
    #[arg(long, env = "GIST_ID", value_name = "ID")]
    pub gist_id: Option<String>,

    /// GitHub token with the gist scope
    #[arg(long, env = "GH_TOKEN", value_name = "TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    #[arg(
        long,
        env = "SOUNDTRACK_GITHUB_API_URL",
        value_name = "URL",
        value_hint = ValueHint::Url,
        default_value = DEFAULT_GITHUB_API_URL,
        hide = true
    )]
    pub github_api_url: String,
}
