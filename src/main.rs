use clap::{Parser, Subcommand};
use git_safety_guard::config::Config;
use git_safety_guard::{AppError, AppResult, Guard, ToolInvocation, Verdict, analyze_command};
use std::io::{self, Read};
use std::process;

/// Blocks destructive `rm -rf` and git commands before they run.
#[derive(Parser, Debug)]
#[command(name = "git-safety-guard")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read a tool invocation as JSON from stdin and check it
    Hook,

    /// Check a shell command line
    Check {
        /// Command words, joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Write the default config file
    #[command(name = "init-config")]
    InitConfig,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Exit status 2 is reserved for blocked commands
            process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let result = match cli.command {
        Command::Hook => run_hook(),
        Command::Check { command } => run_check(&command.join(" ")),
        Command::InitConfig => run_init_config(),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(e.exit_code());
    }
}

fn run_hook() -> AppResult<()> {
    let config = Config::load_or_default()?;
    let guard = Guard::from_config(&config);

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let invocation = ToolInvocation::from_json(&input)?;

    guard.check(&invocation)?;
    Ok(())
}

fn run_check(command: &str) -> AppResult<()> {
    match analyze_command(command) {
        Verdict::Allowed => {
            println!("allowed");
            Ok(())
        }
        Verdict::Blocked(reason) => Err(AppError::Rejected(reason)),
    }
}

fn run_init_config() -> AppResult<()> {
    let path = Config::default_config().save()?;
    eprintln!("Wrote default config to {}", path.display());
    Ok(())
}
