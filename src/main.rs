use anyhow::Context;
use point_plot::PlotConfig;

fn main() {
    env_logger::init();

    if let Err(e) = plot() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn plot() -> anyhow::Result<()> {
    let config = PlotConfig::default();
    point_plot::run(&config).with_context(|| {
        format!(
            "plotting {} to {}",
            config.input.display(),
            config.output.display()
        )
    })?;
    Ok(())
}
