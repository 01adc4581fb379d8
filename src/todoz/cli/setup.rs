use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use todoz::config::ColorChoice;
use todoz::model::FilterMode;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "todoz", bin_name = "todoz", version = get_version())]
#[command(
    about = "A session-scoped to-do list",
    long_about = "A session-scoped to-do list.\n\n\
        Reads session commands from stdin (or from --command) and keeps tasks in \
        memory until the session ends. Type `help` inside a session for the commands."
)]
pub struct Cli {
    /// Verbose output (debug logging to stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Start without the example tasks
    #[arg(long)]
    pub empty: bool,

    /// Filter active when the session starts
    #[arg(long, value_enum, value_name = "MODE")]
    pub filter: Option<FilterArg>,

    /// When to use colors
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorArg>,

    /// Run a session command and exit (repeatable, runs in order)
    #[arg(short = 'c', long = "command", value_name = "LINE")]
    pub commands: Vec<String>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    All,
    Complete,
    Incomplete,
}

impl From<FilterArg> for FilterMode {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => FilterMode::All,
            FilterArg::Complete => FilterMode::Complete,
            FilterArg::Incomplete => FilterMode::Incomplete,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

/// One line typed into a running session.
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: LineCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum LineCommand {
    /// List the tasks visible under the current filter
    #[command(alias = "ls")]
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a task (all remaining words form the description)
    #[command(alias = "a")]
    Add {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        description: Vec<String>,
    },

    /// Mark tasks complete
    #[command(alias = "do")]
    Done {
        /// Indexes of the tasks (e.g. 1 3 5, or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Mark tasks incomplete
    Undo {
        /// Indexes of the tasks (e.g. 1 3 5, or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Flip tasks between complete and incomplete
    #[command(alias = "t")]
    Toggle {
        /// Indexes of the tasks (e.g. 1 3 5, or 2-4)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Choose which tasks are shown
    #[command(alias = "filter")]
    Show {
        #[arg(value_enum)]
        mode: FilterArg,
    },

    /// Count complete and incomplete tasks
    Status,

    /// Show this help
    #[command(alias = "?")]
    Help,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
