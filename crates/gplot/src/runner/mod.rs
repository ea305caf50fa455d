//! High-level runner that prepares graphs, writes data files, and invokes the engine.
use std::fs;

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::format::NumberFormat;
use crate::graph::PreparedGraph;
use crate::request::PlotRequest;
use crate::script::{synthesize, FileNaming, PlotVerb, Script};
use crate::terminal::Terminal;

pub mod engine;
pub mod events;

use engine::{Engine, GnuplotEngine};
use events::{EventSink, PlotEvent, PlotEventKind};

/// Configuration for plot calls.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Engine executable.
    pub program: String,
    /// Pass `-persist` so interactive windows outlive the engine process.
    pub persist: bool,
    /// Formatting of coordinates written to data files.
    pub number_format: NumberFormat,
    /// Naming and placement of data files.
    pub file_naming: FileNaming,
    /// Log every generated command at `info` level instead of `debug`.
    pub echo_command: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            program: "gnuplot".into(),
            persist: false,
            number_format: NumberFormat::Shortest,
            file_naming: FileNaming::default(),
            echo_command: false,
        }
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the engine executable.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Sets whether interactive windows persist.
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    /// Sets the coordinate format.
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Sets the data file naming policy.
    pub fn with_file_naming(mut self, file_naming: FileNaming) -> Self {
        self.file_naming = file_naming;
        self
    }

    /// Sets whether commands are logged at `info` level.
    pub fn with_echo_command(mut self, echo_command: bool) -> Self {
        self.echo_command = echo_command;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.program.trim().is_empty() {
            return Err(Error::InvalidConfig("program must not be empty".into()));
        }
        if let Some(dir) = self.file_naming.dir() {
            let dir = dir.to_string_lossy();
            if dir.contains(['"', '\\']) {
                return Err(Error::InvalidConfig(format!(
                    "data directory {dir:?} contains a double quote or backslash"
                )));
            }
        }
        Ok(())
    }

    fn engine(&self) -> GnuplotEngine {
        GnuplotEngine::new(self.program.clone()).with_persist(self.persist)
    }
}

/// Builds scripts from requests and runs them on an [`Engine`].
///
/// The configuration is fixed at construction; build a new plotter to change it.
pub struct Plotter<E = GnuplotEngine> {
    config: PlotConfig,
    engine: E,
}

impl Plotter<GnuplotEngine> {
    /// Creates a plotter that runs gnuplot with the default configuration.
    pub fn new() -> Self {
        let config = PlotConfig::default();
        let engine = config.engine();
        Self { config, engine }
    }

    /// Creates a plotter that runs gnuplot as configured.
    pub fn try_new(config: PlotConfig) -> Result<Self> {
        config.validate()?;
        let engine = config.engine();
        Ok(Self { config, engine })
    }
}

impl Default for Plotter<GnuplotEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Engine> Plotter<E> {
    /// Creates a plotter around a custom engine.
    pub fn with_engine(config: PlotConfig, engine: E) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, engine })
    }

    /// Configuration applied to every call.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Builds the command and data files for a request without running anything.
    pub fn script(&self, terminal: &Terminal, request: impl Into<PlotRequest>) -> Result<Script> {
        build_script(&self.config, terminal, request.into())
    }

    /// Plots the request; `Ok(false)` means the engine ran but reported failure.
    pub fn plot(&mut self, terminal: &Terminal, request: impl Into<PlotRequest>) -> Result<bool> {
        self.plot_with_events(terminal, request, &mut ())
    }

    pub fn plot_with_events(
        &mut self,
        terminal: &Terminal,
        request: impl Into<PlotRequest>,
        sink: &mut dyn EventSink,
    ) -> Result<bool> {
        let script = build_script(&self.config, terminal, request.into())?;
        if self.config.echo_command {
            info!("Plot command: {}", script.command);
        } else {
            debug!("Plot command: {}", script.command);
        }
        run_script(&script, &mut self.engine, sink)
    }
}

/// Resolves, validates and prepares a request, then synthesizes its script.
pub fn build_script(
    config: &PlotConfig,
    terminal: &Terminal,
    request: PlotRequest,
) -> Result<Script> {
    let preamble = terminal.directives()?;
    let (dimension, graphs) = request.into_graphs()?;
    let prepared = graphs
        .iter()
        .map(|g| g.prepare(&config.number_format))
        .collect::<Result<Vec<PreparedGraph>>>()?;
    let namer = config.file_naming.namer();
    Ok(synthesize(
        &preamble,
        PlotVerb::from(dimension),
        &prepared,
        &namer,
    ))
}

/// Writes every data file, then renders the command once.
///
/// A write failure aborts before the engine is started.
pub fn run_script<E: Engine + ?Sized>(
    script: &Script,
    engine: &mut E,
    sink: &mut dyn EventSink,
) -> Result<bool> {
    if sink.wants(PlotEventKind::ScriptBuilt) {
        sink.send(PlotEvent::ScriptBuilt {
            command: script.command.clone(),
            files: script.files.iter().map(|f| f.path.clone()).collect(),
        });
    }

    for file in &script.files {
        fs::write(&file.path, &file.content)?;
        debug!(
            "Wrote {} bytes to '{}'.",
            file.content.len(),
            file.path.display()
        );
        if sink.wants(PlotEventKind::DataFileWritten) {
            sink.send(PlotEvent::DataFileWritten {
                path: file.path.clone(),
                bytes: file.content.len(),
            });
        }
    }

    if sink.wants(PlotEventKind::EngineStarted) {
        sink.send(PlotEvent::EngineStarted {
            program: engine.program().to_string(),
        });
    }
    let status = engine.render(&script.command)?;

    if !status.success {
        warn!(
            "Engine '{}' exited unsuccessfully (code {:?}).",
            engine.program(),
            status.code
        );
        if sink.wants(PlotEventKind::Warning) {
            sink.send(PlotEvent::Warning {
                context: format!("engine:{}", engine.program()),
                message: format!("exited unsuccessfully with code {:?}", status.code),
            });
        }
    }
    if sink.wants(PlotEventKind::EngineFinished) {
        sink.send(PlotEvent::EngineFinished {
            success: status.success,
            code: status.code,
        });
    }

    Ok(status.success)
}

/// Plots `request` to `terminal` with gnuplot and the default configuration.
pub fn plot(terminal: &Terminal, request: impl Into<PlotRequest>) -> Result<bool> {
    Plotter::new().plot(terminal, request)
}
