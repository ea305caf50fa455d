//! Event types and sinks for observing plot calls.
//!
//! This module defines [`PlotEvent`] and a set of sinks to collect or forward
//! events while a [`crate::runner::Plotter`] builds a script, writes its data
//! files, and runs the engine.
use std::path::PathBuf;

/// Describes events emitted while plotting.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum PlotEvent {
    /// Emitted once the command text and data files are known.
    ScriptBuilt {
        /// The full command passed to the engine.
        command: String,
        /// Data files the command references, in clause order.
        files: Vec<PathBuf>,
    },

    /// Emitted after a data file was written.
    DataFileWritten {
        /// Path of the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },

    /// Emitted right before the engine is invoked.
    EngineStarted {
        /// Program being launched.
        program: String,
    },

    /// Emitted when the engine process has exited.
    EngineFinished {
        /// Whether the exit status signalled success.
        success: bool,
        /// Raw exit code, if the platform reported one.
        code: Option<i32>,
    },

    /// Non-fatal warning generated while plotting.
    Warning {
        /// Context string (e.g. engine program).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of a [`PlotEvent`], used by sinks to opt out of event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlotEventKind {
    ScriptBuilt,
    DataFileWritten,
    EngineStarted,
    EngineFinished,
    Warning,
}

impl PlotEvent {
    pub fn kind(&self) -> PlotEventKind {
        match self {
            PlotEvent::ScriptBuilt { .. } => PlotEventKind::ScriptBuilt,
            PlotEvent::DataFileWritten { .. } => PlotEventKind::DataFileWritten,
            PlotEvent::EngineStarted { .. } => PlotEventKind::EngineStarted,
            PlotEvent::EngineFinished { .. } => PlotEventKind::EngineFinished,
            PlotEvent::Warning { .. } => PlotEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`PlotEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: PlotEvent);

    /// Whether events of `kind` should be built and sent at all.
    fn wants(&self, _kind: PlotEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: PlotEvent) {}

    #[inline]
    fn wants(&self, _kind: PlotEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(PlotEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(PlotEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(PlotEvent),
{
    #[inline]
    fn send(&mut self, event: PlotEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<PlotEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn as_slice(&self) -> &[PlotEvent] {
        &self.events
    }

    pub fn kinds(&self) -> Vec<PlotEventKind> {
        self.events.iter().map(PlotEvent::kind).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: PlotEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn into_inner(self) -> Vec<S> {
        self.sinks
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: PlotEvent) {
        let Some((last, rest)) = self.sinks.split_last_mut() else {
            return;
        };
        for sink in rest {
            if sink.wants(event.kind()) {
                sink.send(event.clone());
            }
        }
        if last.wants(event.kind()) {
            last.send(event);
        }
    }

    fn wants(&self, kind: PlotEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
