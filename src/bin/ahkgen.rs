// Ahkgen CLI
// Compiles a TOML macro file into AutoHotkey script(s)

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use ahkgen_core::compile::compile;
use ahkgen_core::config::Config;
use ahkgen_core::hotkey::Macro;

/// AutoHotkey macro script generator
#[derive(Parser, Debug)]
#[command(name = "ahkgen")]
#[command(version)]
#[command(about = "Compile macro definitions into an AutoHotkey script", long_about = None)]
struct Args {
    /// TOML macro file (default: ~/.config/ahkgen/macros.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output path (default: the suggested file name in the current dir)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Write one script per macro instead of a single combined script
    #[arg(long)]
    split: bool,

    /// Print the script to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Validate the macro file and exit
    #[arg(long)]
    check_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ahkgen").join("macros.toml"))
}

fn write_combined(macros: &[Macro], args: &Args) -> Result<()> {
    let script = compile(macros);
    if args.stdout {
        print!("{}", script.body);
        return Ok(());
    }
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&script.file_name));
    fs::write(&path, &script.body)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!(
        "compiled {} macro(s) -> {}",
        script.macro_count,
        path.display()
    );
    Ok(())
}

fn write_split(macros: &[Macro], args: &Args) -> Result<()> {
    let out_dir = args.output.clone().unwrap_or_else(|| PathBuf::from("."));
    for m in macros {
        let script = compile(std::slice::from_ref(m));
        let path = out_dir.join(&script.file_name);
        fs::write(&path, &script.body)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("compiled '{}' -> {}", m.name(), path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config_path = args
        .config
        .clone()
        .or_else(default_config_path)
        .context("no config path given and no user config directory found")?;

    let config = Config::from_toml_path(&config_path)
        .with_context(|| format!("failed to load {}", config_path.display()))?;

    if args.check_config {
        println!(
            "{}: {} macro(s), configuration is valid",
            config_path.display(),
            config.len()
        );
        return Ok(());
    }

    log::debug!("loaded {} macro(s) from {}", config.len(), config_path.display());

    if args.split {
        write_split(config.macros(), &args)
    } else {
        write_combined(config.macros(), &args)
    }
}
