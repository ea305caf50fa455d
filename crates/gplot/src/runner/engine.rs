//! The external plotting engine boundary.
use std::process::Command;

use tracing::debug;

use crate::error::{Error, Result};

/// Outcome of one engine invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineStatus {
    pub success: bool,
    pub code: Option<i32>,
}

impl EngineStatus {
    pub fn success() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }

    pub fn failure(code: Option<i32>) -> Self {
        Self {
            success: false,
            code,
        }
    }
}

/// Something that can render a command script.
///
/// Implementations block until rendering has finished. An engine that runs but
/// rejects the script reports `success: false`; only failing to run at all is an
/// error.
pub trait Engine {
    /// Human-readable program name used in events and logs.
    fn program(&self) -> &str;

    fn render(&mut self, command: &str) -> Result<EngineStatus>;
}

/// Runs gnuplot as a subprocess with the command passed through `-e`.
#[derive(Debug, Clone)]
pub struct GnuplotEngine {
    program: String,
    persist: bool,
}

impl Default for GnuplotEngine {
    fn default() -> Self {
        Self::new("gnuplot")
    }
}

impl GnuplotEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            persist: false,
        }
    }

    /// Keep interactive plot windows open after gnuplot exits.
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn persist(&self) -> bool {
        self.persist
    }

    fn args<'a>(&self, command: &'a str) -> Vec<&'a str> {
        let mut args = Vec::with_capacity(3);
        if self.persist {
            args.push("-persist");
        }
        args.push("-e");
        args.push(command);
        args
    }
}

impl Engine for GnuplotEngine {
    fn program(&self) -> &str {
        &self.program
    }

    fn render(&mut self, command: &str) -> Result<EngineStatus> {
        debug!("Launching '{}'.", self.program);
        let status = Command::new(&self.program)
            .args(self.args(command))
            .status()
            .map_err(|source| Error::EngineLaunch {
                program: self.program.clone(),
                source,
            })?;
        Ok(EngineStatus {
            success: status.success(),
            code: status.code(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_pass_command_inline() {
        let engine = GnuplotEngine::default();
        assert_eq!(engine.program(), "gnuplot");
        assert_eq!(engine.args("plot x"), vec!["-e", "plot x"]);

        let engine = GnuplotEngine::new("gp").with_persist(true);
        assert_eq!(engine.args("plot x"), vec!["-persist", "-e", "plot x"]);
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let mut engine = GnuplotEngine::new("gplot-engine-that-does-not-exist");
        let err = engine.render("plot x").unwrap_err();
        assert!(matches!(err, Error::EngineLaunch { ref program, .. } if program == "gplot-engine-that-does-not-exist"));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_maps_to_success_flag() {
        let mut ok = GnuplotEngine::new("true");
        assert_eq!(ok.render("plot x").unwrap(), EngineStatus::success());

        let mut failing = GnuplotEngine::new("false");
        let status = failing.render("plot x").unwrap();
        assert!(!status.success);
        assert_eq!(status.code, Some(1));
    }
}
