//! Runs the view demonstrations and prints their output

use std::io::Write;

use anyhow::Context;
use tracing::info;
use views_demo::config::command;
use views_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    let matches = command().get_matches();
    let config = DemoConfig::resolve(&matches).context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_max_level(config.level()?)
        .with_writer(std::io::stderr)
        .init();

    let demos = config.selected()?;
    info!(count = demos.len(), limit = ?config.run.limit, "running demos");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for demo in demos {
        writeln!(out, "=== {} ===", demo.name())?;
        let stats = demo
            .run(&mut out, &config.run)
            .with_context(|| format!("demo {} failed", demo.name()))?;
        info!(
            demo = demo.name(),
            items = stats.items_emitted,
            elapsed = ?stats.elapsed,
            "demo finished"
        );
    }

    Ok(())
}
