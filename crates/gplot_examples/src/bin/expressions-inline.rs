use gplot::prelude::*;
use gplot_examples::init_tracing;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Raw expressions go straight into the command; nothing is written to disk.
    let request = PlotRequest::expressions(["x**2 - y**2", "x*y"]);
    let script = Plotter::new().script(&Terminal::X11, request)?;
    info!("Command: {}", script.command);

    let ok = gplot::plot(&Terminal::X11, vec!["sin(x)*cos(y)"])?;
    info!("gnuplot succeeded: {ok}.");
    Ok(())
}
