use anyhow::{Context, Result};
use clap::Parser;
use glam::Mat4;
use std::path::Path;

use trackball::cli::Cli;
use trackball::{PointerEvent, TrackballConfig, TrackballController};

fn load_script(path: &Path) -> Result<Vec<PointerEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script: {:?}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid event script: {:?}", path))
}

fn print_matrix(label: &str, m: &Mat4) {
    println!("{}:", label);
    // Rows of the column-major matrix
    for row in 0..4 {
        let r = m.row(row);
        println!("  [{:>9.5} {:>9.5} {:>9.5} {:>9.5}]", r.x, r.y, r.z, r.w);
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => TrackballConfig::load(path)?,
        None => TrackballConfig::default(),
    };
    if cli.gaze_positive_z {
        config.gaze_positive_z = true;
    }

    let events = load_script(&cli.script)?;
    log::info!("loaded {} events from {:?}", events.len(), cli.script);

    let mut controller = TrackballController::from_config(&config);
    if cli.trace {
        for (i, event) in events.iter().enumerate() {
            controller.handle(event);
            let state = controller.snapshot();
            println!(
                "{:>4} {:<40} mode={:?} dolly={} q={:?} t={:?}",
                i,
                format!("{:?}", event),
                controller.mode(),
                controller.is_dollying(),
                state.rotation,
                state.translation
            );
        }
    } else {
        trackball::replay(&mut controller, &events);
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&controller.snapshot())
            .context("Failed to serialize view state")?;
        println!("{}", json);
    } else {
        let state = controller.snapshot();
        println!("rotation (w, x, y, z): {:?}", state.rotation);
        println!("translation: {:?}", state.translation);
        print_matrix("transformation", &controller.transformation_matrix());
    }

    Ok(())
}
