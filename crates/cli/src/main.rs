use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use relayhub_core::{
    Clipboard, Controller, LoggingConfig, MemoryClipboard, Settings, SystemClipboard, SystemClock, init_logging,
    sanitize_path,
};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

const DEFAULT_SETTINGS_PATH: &str = "settings.toml";

/// LLM Relay Hub - relay prompts and replies between chat assistants through the clipboard
#[derive(Parser, Debug)]
#[command(name = "relayhub")]
#[command(about = "A clipboard relay between chat assistants, with a turn-by-turn session log", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the settings file (default: ./settings.toml, `.json` files are read as JSON)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Debug-level logging (written to the log file while the TUI runs)
    #[arg(short, long)]
    verbose: bool,

    /// Keep copies in-process instead of using the OS clipboard
    #[arg(long)]
    no_clipboard: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// Start the interactive relay session (default)
    Start,
    /// Show the configured models and settings
    Status,
    /// Write an example settings file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", error_report(&e).red());
        wait_for_enter();
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings_path = cli.config.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let command = cli.command.unwrap_or(Commands::Start);

    if let Commands::Init { force } = command {
        return cmd_init(&settings_path, force);
    }

    let (settings, load_error) = Settings::load_or_default(&settings_path);

    // Held until exit so the file writer flushes.
    let _log_guard = match init_logging(logging_config(&settings, &command, cli.verbose)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{} {}", "Warning:".yellow().bold(), e);
            None
        }
    };

    if let Some(e) = &load_error {
        tracing::warn!(path = %sanitize_path(&settings_path), error = %e, "could not load settings, using defaults");
    }

    match command {
        Commands::Status => cmd_status(&settings, &settings_path, load_error.is_some(), cli.verbose),
        _ => cmd_start(&settings, cli.no_clipboard),
    }
}

/// Logging for `command`: stderr is off while the TUI owns the screen
fn logging_config(settings: &Settings, command: &Commands, verbose: bool) -> LoggingConfig {
    let mut config = LoggingConfig::from(&settings.logging);
    if *command == Commands::Start {
        config = config.with_stderr(false);
    }
    if verbose { config.verbose() } else { config }
}

/// Run the TUI against the OS clipboard or an in-process one
fn cmd_start(settings: &Settings, no_clipboard: bool) -> Result<()> {
    tracing::info!(models = settings.models().len(), no_clipboard, "starting relay session");

    if no_clipboard {
        start_with(settings, MemoryClipboard::new())
    } else {
        start_with(settings, SystemClipboard::new())
    }
}

fn start_with<C: Clipboard>(settings: &Settings, clipboard: C) -> Result<()> {
    let controller = Controller::new(settings, clipboard, SystemClock);
    relayhub_ui::run(settings, controller).context("terminal session failed")
}

/// Print the configured models and flags
fn cmd_status(settings: &Settings, path: &Path, fell_back: bool, verbose: bool) -> Result<()> {
    println!("{}", "LLM Relay Hub".bold());

    let source = if fell_back {
        format!("{} (invalid, using defaults)", path.display())
    } else if path.exists() {
        path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", path.display())
    };
    println!("{} {}", "Settings:".blue().bold(), source);

    println!("{}", "Models:".blue().bold());
    for (index, model) in settings.models().iter().enumerate() {
        println!("  F{}  {:<10} {:<12} {}", index + 1, model.id.cyan(), model.name, model.button_color.dimmed());
    }

    let vault = settings
        .vault_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(current directory)".to_string());
    println!("{} {}", "Export directory:".blue().bold(), vault);
    println!("{} {}", "Auto save:".blue().bold(), on_off(settings.auto_save));
    println!("{} {}", "Dark mode:".blue().bold(), on_off(settings.dark_mode));

    if verbose {
        let logging = &settings.logging;
        println!("{} {} ({})", "Log level:".blue().bold(), logging.level, logging.format);
        if logging.file.enabled {
            println!("{} {} ({})", "Log files:".blue().bold(), logging.file.dir.display(), logging.file.level);
        }
        println!("{} {}", "Content logging:".blue().bold(), logging.privacy.log_content);
    }

    Ok(())
}

/// Write [`Settings::example`] to `path`
fn cmd_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists; pass --force to overwrite it", path.display());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, Settings::example()).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Wrote settings to {}", "Success:".green().bold(), path.display());
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// The banner and cause chain printed for an unhandled error
fn error_report(error: &anyhow::Error) -> String {
    let mut report = String::from("--- AN UNEXPECTED ERROR OCCURRED ---\n");
    report.push_str(&format!("Error: {}", error));
    for cause in error.chain().skip(1) {
        report.push_str(&format!("\n  caused by: {}", cause));
    }
    report
}

/// Keep a console window open until the user has read the report
fn wait_for_enter() {
    if !atty::is(atty::Stream::Stdin) {
        return;
    }

    eprintln!("Press Enter to exit...");
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
