// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "anatomy-engine")]
#[command(about = "Procedural anatomy models with a headless animation loop", long_about = None)]
pub struct Cli {
    /// Structure or category to build; repeat to load several in sequence
    #[arg(short, long = "structure", default_value = "DNA Helix")]
    pub structures: Vec<String>,

    /// Frames to animate after each load
    #[arg(short, long, default_value_t = 120)]
    pub frames: u32,

    /// Frame rate used to derive elapsed time
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// Seed for reproducible randomized structures
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file overriding engine constants
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write a JSON snapshot of the final scene here
    #[arg(short, long)]
    pub export: Option<PathBuf>,

    /// List structure names and category aliases, then exit
    #[arg(long)]
    pub list: bool,

    /// Disable the per-structure summary
    #[arg(short, long)]
    pub quiet: bool,
}
