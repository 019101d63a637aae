use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dirsubmit_cli::OutputFormat;
use dirsubmit_cli::commands;
use dirsubmit_cli::commands::submit::{SubmitOptions, Target};
use dirsubmit_core::Catalog;
use dirsubmit_directories::Registry;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "dirsubmit")]
#[command(author, version, long_about = None)]
#[command(
    about = "Pre-fill \"submit your project\" forms on software directories",
    long_about = "dirsubmit opens a browser, visits each software directory's submission page, \
                  detects login walls and fills in the project's name, description, URLs and tags. \
                  It never presses submit: every filled form is left for you to review."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Submit one project from the catalog
    #[arg(long, value_name = "KEY", conflicts_with = "all")]
    project: Option<String>,

    /// Submit every project in the catalog
    #[arg(long)]
    all: bool,

    /// Only visit this directory
    #[arg(long, value_name = "KEY")]
    directory: Option<String>,

    /// Load projects from a JSON file instead of the built-in catalog
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Load directory sites from a JSON file instead of the built-in ones
    #[arg(long, value_name = "FILE")]
    sites: Option<PathBuf>,

    /// Path to Chrome or Chromium
    #[arg(long, value_name = "PATH", env = "DIRSUBMIT_CHROME_PATH")]
    chrome_path: Option<PathBuf>,

    /// Named persistent profile, keeps directory logins between runs
    #[arg(long, value_name = "NAME", env = "DIRSUBMIT_PROFILE")]
    profile: Option<String>,

    /// Run Chrome without a window
    #[arg(long)]
    headless: bool,

    /// Pause after each directory, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 2000)]
    directory_delay_ms: u64,

    /// Pause after each project with --all, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 5000)]
    project_delay_ms: u64,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Summary format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS:\n  bash, zsh, fish, powershell, elvish\n\n\
                            INSTALLATION:\n  \
                            bash: dirsubmit completion --shell bash >> ~/.bashrc\n  \
                            zsh:  dirsubmit completion --shell zsh > \"${fpath[1]}/_dirsubmit\"\n  \
                            fish: dirsubmit completion --shell fish > ~/.config/fish/completions/dirsubmit.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: Shell,
    },

    /// Manage persistent Chrome profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// List all available profiles
    List,

    /// Delete a profile and its saved logins
    Delete {
        /// Profile name
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Completion { shell }) => {
            return commands::completion::execute(shell, &mut Cli::command());
        }
        Some(Commands::Profile { action }) => {
            return match action {
                ProfileAction::List => commands::profile::list(),
                ProfileAction::Delete { name } => commands::profile::delete(&name),
            };
        }
        None => {}
    }

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    let registry = match &cli.sites {
        Some(path) => Registry::from_sites_file(path)?,
        None => Registry::builtin(),
    };

    let target = match (cli.all, cli.project) {
        (true, _) => Target::All,
        (false, Some(key)) => Target::Project(key),
        (false, None) => {
            commands::usage::execute(&catalog, &registry);
            return Ok(());
        }
    };

    commands::submit::execute(
        &catalog,
        &registry,
        SubmitOptions {
            target,
            directory: cli.directory,
            chrome_path: cli.chrome_path,
            profile: cli.profile,
            headless: cli.headless,
            directory_delay: Duration::from_millis(cli.directory_delay_ms),
            project_delay: Duration::from_millis(cli.project_delay_ms),
            format: cli.format,
        },
    )
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new(
            "dirsubmit=debug,dirsubmit_cli=debug,dirsubmit_core=debug,\
             dirsubmit_browser=debug,dirsubmit_directories=debug",
        )
    } else {
        EnvFilter::new("dirsubmit=info,dirsubmit_cli=info,dirsubmit_browser=info,dirsubmit_directories=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
