// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "trackball-replay")]
#[command(about = "Replay recorded pointer events through an arcball controller", long_about = None)]
pub struct Cli {
    /// JSON array of pointer events
    pub script: PathBuf,

    /// JSON controller config (gaze direction, default translation)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Viewer gazes along +Z (overrides the config file)
    #[arg(long = "gaze-positive-z", default_value = "false")]
    pub gaze_positive_z: bool,

    /// Print the final view state as JSON
    #[arg(long, default_value = "false")]
    pub json: bool,

    /// Print controller state after every event
    #[arg(long, default_value = "false")]
    pub trace: bool,
}
