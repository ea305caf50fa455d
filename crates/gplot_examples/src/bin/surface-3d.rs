use gplot::prelude::*;
use gplot_examples::{init_tracing, output_dir, output_file};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let ripple = Graph3D::function(|x, y| (x * x + y * y).sqrt().sin())
        .with_option(Style::Dots)
        .with_option(Color::DarkMagenta)
        .with_option(PlotOption::title("ripple"))
        .with_axis(AxisOption3D::X(AxisOption::Step(0.25)))
        .with_axis(AxisOption3D::Y(AxisOption::Step(0.25)));

    let config = PlotConfig::new().with_file_naming(FileNaming::Positional {
        dir: Some(output_dir()?),
    });
    let mut plotter = Plotter::try_new(config)?;

    let target = output_file("surface-3d.png")?;
    let ok = plotter.plot(&Terminal::Png(target.clone()), ripple)?;
    info!("Rendered {target}: {ok}.");
    Ok(())
}
