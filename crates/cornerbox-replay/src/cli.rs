use std::path::PathBuf;

use clap::Parser;
use cornerbox_core::{HoleConfig, HoleWidget};

use crate::error::{ReplayError, Result};
use crate::script::{GestureScript, format_step, replay, summarize};

#[derive(Debug, Parser)]
#[command(
    name = "cornerbox-replay",
    about = "Replay a recorded gesture script against the hole widget",
    version
)]
pub struct Cli {
    /// Gesture script (JSON).
    pub script: PathBuf,

    /// Widget config (JSON). Defaults apply when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print only the summary, as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => HoleConfig::from_path(path)?,
        None => HoleConfig::default(),
    };
    let script = GestureScript::from_path(&cli.script)?;
    log::info!(
        "Replaying {} events from {}",
        script.events.len(),
        cli.script.display()
    );

    let mut widget = HoleWidget::new(config);
    let steps = replay(&mut widget, &script);
    let summary = summarize(&widget, &steps);

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).map_err(ReplayError::Output)?;
        println!("{}", json);
        return Ok(());
    }

    for step in &steps {
        println!("{}", format_step(step));
    }
    let hole = summary.final_hole;
    println!(
        "{} events, {} commits, {} rejected, {} ignored; final offset=({}, {}) size={}x{}",
        summary.events,
        summary.commits,
        summary.rejections,
        summary.ignored,
        hole.offset.x,
        hole.offset.y,
        hole.size.width,
        hole.size.height
    );
    Ok(())
}
