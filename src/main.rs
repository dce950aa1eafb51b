use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use geoscriber::config::Config;
use geoscriber::draw::{LayerStack, render_features};
use geoscriber::export;
use geoscriber::input::InputState;
use geoscriber::notification::LogNotifier;
use geoscriber::script;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "geoscriber")]
#[command(
    version,
    about = "Map shape drawing with overlap trimming and GeoJSON export"
)]
struct Cli {
    /// Interaction script to replay (one command per line)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Configuration file (default: ~/.config/geoscriber/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Export directory, overriding the configured one
    #[arg(long, short = 'o', value_name = "DIR")]
    output: Option<PathBuf>,

    /// Print the FeatureCollection to stdout instead of writing a file
    #[arg(long, action = ArgAction::SetTrue)]
    stdout: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_config_path()?,
        };
        Config::create_default_file(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        print_usage();
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(directory) = &cli.output {
        config.export.directory = directory.to_string_lossy().into_owned();
    }

    let source = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let commands = script::parse_script(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let mut state = InputState::new(&config, LayerStack::new(), LogNotifier);
    let outcomes = script::run_script(&mut state, &commands);
    log::info!(
        "Replayed {} commands, {} shapes finished",
        commands.len(),
        outcomes.len()
    );
    for status in state.toolbar().statuses(state.store()) {
        log::info!("  {}", status);
    }

    let features = state.store().features();
    let mut final_layers = LayerStack::new();
    let layer_ids = render_features(&mut final_layers, features, &config.style);
    log::info!("Rendered {} feature layers", layer_ids.len());

    if cli.stdout {
        println!("{}", export::to_geojson_string(features)?);
    } else if state.toolbar().can_export(state.store()) {
        let path = export::export_features(features, &config.export)?;
        println!("{}", path.display());
    } else {
        log::warn!("No features drawn; nothing exported");
    }

    Ok(())
}

fn print_usage() {
    println!("geoscriber: Map shape drawing with overlap trimming and GeoJSON export");
    println!();
    println!("Usage:");
    println!("  geoscriber --script FILE             Replay a drawing script and export GeoJSON");
    println!("  geoscriber --script FILE --stdout    Print the GeoJSON instead of writing a file");
    println!("  geoscriber --init-config             Write a default config file");
    println!("  geoscriber --help                    Show help");
    println!();
    println!("Script commands (one per line, # starts a comment):");
    println!("  mode polygon|circle|rectangle|line|none");
    println!("  tool polygon|circle|rectangle|line    (toolbar press, toggles)");
    println!("  click <lat> <lng>");
    println!("  move <lat> <lng>");
    println!("  dblclick");
    println!("  cancel");
    println!("  remove <id>|last");
    println!("  clear");
}
