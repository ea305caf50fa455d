#![forbid(unsafe_code)]

use std::io;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber, honouring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Directory the examples write their images and data files into.
pub fn output_dir() -> io::Result<PathBuf> {
    let dir = PathBuf::from("target").join("gplot-examples");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Path of an output image inside [`output_dir`], as the string a terminal carries.
pub fn output_file(name: &str) -> io::Result<String> {
    Ok(output_dir()?.join(name).to_string_lossy().into_owned())
}
