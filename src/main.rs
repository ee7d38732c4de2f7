use clap::Parser;
use parley::core::config::{CliOverrides, ParleyConfig, load_config, resolve};
use parley::core::tone::InteractionType;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "parley", about = "Chat mockup with a tone analysis panel")]
struct Args {
    /// Interaction type to start with
    #[arg(short, long, value_enum)]
    interaction: Option<InteractionType>,

    /// Start with the analysis panel closed
    #[arg(long)]
    hide_panel: bool,

    /// Config file to use instead of ~/.parley/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where to write the debug log
    #[arg(long, default_value = "parley.log")]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // The terminal belongs to the UI, so logs go to a file
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config(args.config.as_deref()).unwrap_or_else(|e| {
        log::warn!("{}; using defaults", e);
        ParleyConfig::default()
    });

    let config = resolve(
        &file_config,
        CliOverrides {
            interaction: args.interaction,
            hide_panel: args.hide_panel,
        },
    );

    log::info!(
        "Parley starting up (interaction: {}, panel open: {})",
        config.interaction,
        config.panel_open
    );

    parley::tui::run(config)
}
