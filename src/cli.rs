use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "fivecalls")]
#[command(about = "A CLI for browsing 5calls.org civic advocacy issues", version)]
#[command(after_help = "EXAMPLES:
    fivecalls issues --address 94110     List issues near a zip code
    fivecalls issues --all               List every issue, inactive included
    fivecalls issue show support-nea     Show an issue with its call script")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage issues
    #[command(after_help = "EXAMPLES:
    fivecalls issue list --address \"350 Fifth Ave, New York\"
    fivecalls issue show 32
    fivecalls issue show support-nea")]
    Issue {
        #[command(subcommand)]
        action: IssueCommands,
    },
    /// List issues (alias for 'issue list')
    #[command(after_help = "EXAMPLES:
    fivecalls issues
    fivecalls issues --address 94110
    fivecalls issues --coords 37.7489,-122.4186
    fivecalls issues --all --json")]
    Issues(IssueListArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    fivecalls completions bash > ~/.bash_completion.d/fivecalls
    fivecalls completions zsh > ~/.zfunc/_fivecalls")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Create the config file interactively
    Init,
}

#[derive(Subcommand)]
pub enum IssueCommands {
    /// List issues
    List(IssueListArgs),
    /// Show one issue with its call script and contacts
    Show(IssueShowArgs),
}

#[derive(Args)]
pub struct IssueListArgs {
    /// Address or zip code to find issues near (falls back to config)
    #[arg(long)]
    pub address: Option<String>,

    /// Latitude,longitude pair instead of an address
    #[arg(long, value_name = "LAT,LON", conflicts_with = "address")]
    pub coords: Option<String>,

    /// Include inactive issues
    #[arg(long, conflicts_with_all = ["address", "coords"])]
    pub all: bool,
}

#[derive(Args)]
pub struct IssueShowArgs {
    /// Issue id or slug
    pub id: String,

    /// Address or zip code used to localize the issue's contacts
    #[arg(long)]
    pub address: Option<String>,
}
