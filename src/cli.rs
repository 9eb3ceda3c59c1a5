// CLI module - command-line argument parsing and handlers
//
// Provides subcommands for configuration management:
// - config --show: Display effective configuration
// - config --reset: Regenerate config file with defaults
// - config --edit: Open config file in $EDITOR
// - config --path: Show config file path

use crate::config::{Config, VERSION};
use clap::{Parser, Subcommand};
use std::process::Command;

/// EcoLearn - terminal client for the EcoLearn learning platform
#[derive(Parser)]
#[command(name = "ecolearn")]
#[command(version = VERSION)]
#[command(about = "Terminal client for the EcoLearn learning platform", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Open config file in $EDITOR
        #[arg(long)]
        edit: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Handle CLI commands. Returns true if a command was handled (exit after).
pub fn handle_cli() -> bool {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config {
            show,
            reset,
            edit,
            path,
        }) => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show();
            } else if reset {
                handle_config_reset();
            } else if edit {
                handle_config_edit();
            } else {
                println!("Usage: ecolearn config [--show|--reset|--edit|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --edit    Open config file in $EDITOR");
                println!("  --path    Show config file path");
            }
            true
        }
        None => false, // No subcommand, run the client
    }
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show() {
    let config = Config::from_env();
    println!("{}", config.to_toml());
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };
    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error: Could not create config directory: {}", e);
            std::process::exit(1);
        }
    }
    match std::fs::write(&path, Config::default().to_toml()) {
        Ok(()) => println!("Config reset: {}", path.display()),
        Err(e) => {
            eprintln!("Error: Could not write config file: {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_config_edit() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };
    Config::ensure_config_exists();

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    match Command::new(&editor).arg(&path).status() {
        Ok(status) if status.success() => {}
        Ok(status) => eprintln!("Editor exited with status {}", status),
        Err(e) => eprintln!("Failed to launch {}: {}", editor, e),
    }
}
