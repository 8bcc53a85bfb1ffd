// File: crates/demo/src/main.rs
// Summary: Demo loads JSON chart descriptors and renders each one to a PNG.
// Notes:
// - Usage: houdini-demo [--theme light|dark] [descriptor.json ...]
// - Without descriptors the bundled samples under crates/demo/data are rendered.
// - Set RUST_LOG=debug to see layer and scale details.

use anyhow::{Context, Result};
use houdini_core::{theme, Chart, ChartConfig, RenderOptions};
use std::path::{Path, PathBuf};

const SAMPLES: [&str; 3] = ["line.json", "dated.json", "radar.json"];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut theme_name = String::from("light");
    let mut inputs = Vec::new();
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--theme" => theme_name = args.next().context("--theme needs a value")?,
            _ => inputs.push(PathBuf::from(arg)),
        }
    }
    if inputs.is_empty() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        inputs = SAMPLES.iter().map(|s| data_dir.join(s)).collect();
    }

    let opts = RenderOptions { theme: theme::find(&theme_name), ..RenderOptions::default() };
    log::info!("theme `{}`, {}x{}", opts.theme.name, opts.width, opts.height);

    let mut failures = 0usize;
    for path in &inputs {
        match render_one(path, &opts) {
            Ok(out) => println!("Wrote {}", out.display()),
            Err(e) => {
                failures += 1;
                log::error!("{}: {e:#}", path.display());
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} charts failed", inputs.len());
    }
    Ok(())
}

fn render_one(path: &Path, opts: &RenderOptions) -> Result<PathBuf> {
    let config = ChartConfig::from_path(path)
        .with_context(|| format!("failed to load descriptor '{}'", path.display()))?;
    log::info!(
        "{}: {:?} chart, {} series",
        path.display(),
        config.chart_type,
        config.data.datasets.len()
    );

    let chart = Chart::new(config);
    let model = chart.scale_model().context("scale model")?;
    log::debug!(
        "nice scale [{}, {}] step {}",
        model.nice.nice_minimum,
        model.nice.nice_maximum,
        model.nice.tick_spacing
    );

    let out = out_name(path);
    chart.render_to_png(opts, &out).with_context(|| format!("rendering {}", out.display()))?;
    Ok(out)
}

/// Produce output file name like target/out/chart_<stem>.png
fn out_name(input: &Path) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    PathBuf::from("target/out").join(format!("chart_{stem}.png"))
}
