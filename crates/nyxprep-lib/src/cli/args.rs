use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;
use tracing_subscriber;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch {
        config_path: Option<String>,
        version_tag: Option<String>,
        output_dir: Option<String>,
        require_patch: bool,
        timeout_secs: Option<u64>,
    },
    Patch {
        config_path: Option<String>,
        input_path: String,
        output_path: Option<String>,
        require_patch: bool,
    },
    ShowConfig {
        config_path: Option<String>,
    },
}

pub struct Args {
    pub command: Command,
    pub log_level: Level,
}

#[derive(Debug, Parser)]
#[command(
    name = "nyxprep",
    version,
    about = "Fetch the Mongoose sources vendored by the INDI-Nyx driver and patch in its logging shim"
)]
struct Cli {
    #[arg(
        short = 'v',
        long = "verbose",
        help = "Sets the level of verbosity",
        action = ArgAction::Count,
        global = true
    )]
    verbose: u8,

    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Optional config file (YAML, TOML or JSON); built-in defaults are used otherwise",
        global = true
    )]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Download the upstream files, patch the logging block and write them out (default)
    Fetch {
        #[arg(
            long = "version-tag",
            value_name = "TAG",
            help = "Overrides the upstream release tag"
        )]
        version_tag: Option<String>,

        #[arg(
            short = 'o',
            long = "output-dir",
            value_name = "DIR",
            help = "Overrides the directory the patched files are written to"
        )]
        output_dir: Option<String>,

        #[arg(
            long = "require-patch",
            help = "Fail when a file has no logging block to replace"
        )]
        require_patch: bool,

        #[arg(
            long = "timeout",
            value_name = "SECONDS",
            help = "Per-request timeout; requests wait indefinitely when unset"
        )]
        timeout_secs: Option<u64>,
    },

    /// Apply the logging patch to a local file without downloading anything
    Patch {
        #[arg(
            short = 'i',
            long = "input",
            value_name = "FILE",
            help = "File to patch"
        )]
        input: String,

        #[arg(
            short = 'o',
            long = "output",
            value_name = "FILE",
            help = "Where to write the patched file (default: overwrite the input)"
        )]
        output: Option<String>,

        #[arg(
            long = "require-patch",
            help = "Fail when the file has no logging block to replace"
        )]
        require_patch: bool,
    },

    /// Print the effective configuration and resolved download URLs as JSON
    #[command(name = "show-config", visible_alias = "show_config")]
    ShowConfig,
}

impl Cli {
    fn into_command(self) -> Command {
        let config_path = self.config;

        match self.command {
            None => Command::Fetch {
                config_path,
                version_tag: None,
                output_dir: None,
                require_patch: false,
                timeout_secs: None,
            },
            Some(CliCommand::Fetch {
                version_tag,
                output_dir,
                require_patch,
                timeout_secs,
            }) => Command::Fetch {
                config_path,
                version_tag,
                output_dir,
                require_patch,
                timeout_secs,
            },
            Some(CliCommand::Patch {
                input,
                output,
                require_patch,
            }) => Command::Patch {
                config_path,
                input_path: input,
                output_path: output,
                require_patch,
            },
            Some(CliCommand::ShowConfig) => Command::ShowConfig { config_path },
        }
    }
}

fn log_level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn parse_args() -> Args {
    let cli = Cli::parse();

    let log_level = log_level_for(cli.verbose);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(log_level.into())
                .from_env_lossy(),
        )
        .init();

    Args {
        command: cli.into_command(),
        log_level,
    }
}
