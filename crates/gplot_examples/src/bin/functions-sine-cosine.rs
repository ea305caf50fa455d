use gplot::prelude::*;
use gplot_examples::{init_tracing, output_dir, output_file};
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Two sampled functions share one plot; both are drawn as lines whatever style is asked for.
    let graphs = vec![
        Graph2D::function(f64::sin)
            .with_option(PlotOption::title("sin(x)"))
            .with_option(Color::DarkBlue),
        Graph2D::function(f64::cos)
            .with_option(PlotOption::title("cos(x)"))
            .with_option(Style::Points)
            .with_option(Color::rgb(220, 60, 20))
            .with_axis(AxisOption::Range(-std::f64::consts::PI, std::f64::consts::PI)),
    ];

    let config = PlotConfig::new()
        .with_number_format(NumberFormat::Fixed(4))
        .with_file_naming(FileNaming::Positional {
            dir: Some(output_dir()?),
        })
        .with_echo_command(true);
    let mut plotter = Plotter::try_new(config)?;

    let target = output_file("functions-sine-cosine.png")?;
    let ok = plotter.plot(&Terminal::Png(target.clone()), graphs)?;
    info!("Rendered {target}: {ok}.");
    Ok(())
}
