use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitwrap::git::{self, Logger, Operation};
use gitwrap::{Config, GitError, constants, utils};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "gitwrap")]
#[command(about = "Run git operations and decode their status output")]
#[command(version)]
struct Cli {
    /// Repository directory to operate on
    #[arg(short = 'C', long = "dir", default_value = ".", global = true)]
    dir: PathBuf,

    /// Configuration file path
    #[arg(short, long, default_value_t = constants::config::DEFAULT_CONFIG_FILE.to_string(), global = true)]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show changed paths as decoded records
    Status {
        /// Only report changes under this path
        path: Option<PathBuf>,

        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Initialize a repository unless one already exists
    Init,

    /// Check whether a healthy repository exists (exit code 0 if so)
    Exists,

    /// Print the path of git's storage directory
    Storage,

    /// Write the effective configuration to the config file
    WriteConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Run a named operation and relay its output and exit code
    Run {
        /// Operation identifier (status, commit, add, init, branch, tag, rm,
        /// hash_object, checkout, reset, clean, config)
        operation: Operation,

        /// Arguments passed through to git
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn describe(err: &GitError) -> String {
    match err.exit_code() {
        Some(code) => format!("{err} ({})", utils::get_exit_code_description(code)),
        None => err.to_string(),
    }
}

fn execute(cli: Cli) -> Result<ExitCode> {
    let config = Config::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config))?;
    let repo = config.repository(&cli.dir);
    let logger = Logger;

    match cli.command {
        Commands::Status { path, json } => {
            let records =
                git::status(&repo, path.as_deref()).map_err(|e| anyhow::anyhow!(describe(&e)))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    println!("{record}");
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init => {
            utils::ensure_directory(repo.path())?;
            let created = repo
                .init_if_new()
                .map_err(|e| anyhow::anyhow!(describe(&e)))?;
            if created {
                repo.config_set(&config.settings)
                    .context("Failed to apply configured settings")?;
                logger.success(repo.path(), "Repository created");
            } else {
                logger.warn(repo.path(), "Repository already exists, skipping");
            }
            println!("{created}");
            Ok(ExitCode::SUCCESS)
        }
        Commands::Exists => {
            let exists = repo.exists();
            println!("{exists}");
            Ok(if exists {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Storage => {
            println!("{}", repo.storage().display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::WriteConfig { force } => {
            if std::path::Path::new(&cli.config).exists() && !force {
                anyhow::bail!(
                    "Config file {} already exists (use --force to overwrite)",
                    cli.config
                );
            }
            config
                .save(&cli.config)
                .with_context(|| format!("Failed to write config to {}", cli.config))?;
            println!("{}", cli.config);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { operation, args } => {
            let output = repo.run(operation, &args)?;
            std::io::stdout().write_all(&output.stdout)?;
            std::io::stderr().write_all(&output.stderr)?;
            if !output.success() {
                logger.error(
                    repo.path(),
                    &format!(
                        "{operation} exited with code {} ({})",
                        output.code,
                        utils::get_exit_code_description(output.code)
                    ),
                );
            }
            Ok(exit_code(output.code))
        }
    }
}

fn main() -> ExitCode {
    match execute(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
