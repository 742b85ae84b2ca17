//! Spawns the user's autostart script once the host has started.
use crate::errors::Result;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::atomic::{AtomicBool, Ordering};

pub type ChildID = u32;

/// Launches external programs without waiting for them.
pub trait Spawner {
    /// Start `program` and return its pid.
    ///
    /// # Errors
    ///
    /// Will error if the program cannot be started, e.g. it does not exist
    /// or is not executable.
    fn spawn(&self, program: &Path) -> Result<ChildID>;
}

/// Spawns real processes. STDIN/STDOUT/STDERR are not wanted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessSpawner;

impl Spawner for ProcessSpawner {
    fn spawn(&self, program: &Path) -> Result<ChildID> {
        let child = Command::new(program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        // Dropping the handle neither waits for nor kills the child.
        Ok(child.id())
    }
}

/// Runs a script the first time the host reports its startup as complete,
/// and never again in the same process.
#[derive(Debug)]
pub struct StartupHook {
    script: PathBuf,
    fired: AtomicBool,
}

impl StartupHook {
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            fired: AtomicBool::new(false),
        }
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Spawn the script unless the hook already fired. Failures are logged
    /// and otherwise ignored.
    pub fn fire(&self, spawner: &impl Spawner) -> Option<ChildID> {
        if self.fired.swap(true, Ordering::SeqCst) {
            tracing::debug!("Startup hook already fired, skipping.");
            return None;
        }
        match spawner.spawn(&self.script) {
            Ok(pid) => {
                tracing::info!("Started {} (pid {pid}).", self.script.display());
                Some(pid)
            }
            Err(err) => {
                tracing::error!("Unable to run script {:?}, error: {err}", self.script);
                None
            }
        }
    }
}
