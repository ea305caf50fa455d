use glam::DVec2;
use gplot::prelude::*;
use gplot_examples::{init_tracing, output_file};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut rng = StdRng::seed_from_u64(7);
    let mut position = DVec2::ZERO;
    let mut walk = Vec::with_capacity(500);
    for _ in 0..500 {
        position += DVec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0));
        walk.push(position);
    }

    // Unique names keep concurrent runs of this example from clobbering each other's data.
    let config = PlotConfig::new().with_file_naming(FileNaming::unique());
    let mut plotter = Plotter::try_new(config)?;

    let graphs = vec![
        Graph2D::data(walk.iter().copied())
            .with_option(Style::Lines)
            .with_option(Color::Grey)
            .with_option(PlotOption::title("walk")),
        Graph2D::data([walk[0], walk[walk.len() - 1]])
            .with_option(Style::Points)
            .with_option(Color::Red)
            .with_option(PlotOption::title("endpoints")),
    ];

    let mut sink = FnSink::new(|event| {
        if let PlotEvent::DataFileWritten { path, bytes } = event {
            info!("Wrote {bytes} bytes to {}.", path.display());
        }
    });
    let target = output_file("data-random-walk.svg")?;
    let ok = plotter.plot_with_events(&Terminal::Svg(target.clone()), graphs, &mut sink)?;
    info!("Rendered {target}: {ok}.");
    Ok(())
}
