//! Data file naming policies.
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static CALL_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// How data files are named.
///
/// Both policies number files by the graph's 1-based position in the request, so
/// inline expression graphs still consume a number.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileNaming {
    /// `plot<N>.dat`. Two calls sharing a directory overwrite each other's files.
    Positional { dir: Option<PathBuf> },
    /// `plot-<pid>-<seq>-<token>-<N>.dat`, distinct for every call in every process.
    Unique { dir: Option<PathBuf> },
}

impl Default for FileNaming {
    fn default() -> Self {
        FileNaming::Positional { dir: None }
    }
}

impl FileNaming {
    pub fn positional() -> Self {
        FileNaming::Positional { dir: None }
    }

    pub fn unique() -> Self {
        FileNaming::Unique { dir: None }
    }

    pub fn dir(&self) -> Option<&PathBuf> {
        match self {
            FileNaming::Positional { dir } | FileNaming::Unique { dir } => dir.as_ref(),
        }
    }

    /// Fix the names for a single plot call.
    pub fn namer(&self) -> FileNamer {
        let stem = match self {
            FileNaming::Positional { .. } => "plot".to_string(),
            FileNaming::Unique { .. } => {
                let seq = CALL_SEQUENCE.fetch_add(1, Ordering::Relaxed);
                let token: u32 = rand::random();
                format!("plot-{}-{seq}-{token:08x}-", std::process::id())
            }
        };
        FileNamer {
            dir: self.dir().cloned(),
            stem,
        }
    }
}

/// Names the data files of one plot call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNamer {
    dir: Option<PathBuf>,
    stem: String,
}

impl FileNamer {
    /// Path for the graph at 1-based `position`.
    pub fn path(&self, position: usize) -> PathBuf {
        let file = format!("{}{position}.dat", self.stem);
        match &self.dir {
            Some(dir) => dir.join(file),
            None => PathBuf::from(file),
        }
    }
}
