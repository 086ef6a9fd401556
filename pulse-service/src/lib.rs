//! Host service-manager integration
//!
//! The lifecycle surface is a pluggable four-operation contract. The
//! rest of the system only ever talks to the [`ServiceManager`] trait
//! and never needs to know which host platform it runs on.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

/// Service lifecycle errors
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Service manager unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;

/// Four-operation contract against the host's service manager
///
/// Lifecycle commands report their own success or failure and never
/// touch the publish loop of an already-running process.
pub trait ServiceManager {
    /// Register the managed service with the host
    fn install(&self) -> Result<()>;

    /// Unregister the managed service
    fn remove(&self) -> Result<()>;

    /// Start the managed service
    fn start(&self) -> Result<()>;

    /// Stop the managed service
    fn stop(&self) -> Result<()>;
}

/// systemd-backed manager: installs a unit file and drives systemctl
pub struct SystemdManager {
    name: String,
    description: String,
    exec_path: PathBuf,
    unit_dir: PathBuf,
}

impl SystemdManager {
    /// Create a manager for the service `name`, running the current
    /// executable with no arguments as the service entry point
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Result<Self> {
        let exec_path = std::env::current_exe()?;
        Ok(Self {
            name: name.into(),
            description: description.into(),
            exec_path,
            unit_dir: PathBuf::from("/etc/systemd/system"),
        })
    }

    /// Unit-directory override (test hook)
    pub fn with_unit_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.unit_dir = dir.into();
        self
    }

    fn unit_name(&self) -> String {
        format!("{}.service", self.name)
    }

    fn unit_path(&self) -> PathBuf {
        self.unit_dir.join(self.unit_name())
    }

    /// Render the unit file
    ///
    /// `Restart=always` delegates crash recovery to the supervisor; the
    /// process itself never retries.
    fn unit_file(&self) -> String {
        format!(
            "[Unit]\n\
             Description={}\n\
             After=network-online.target\n\
             \n\
             [Service]\n\
             Type=simple\n\
             ExecStart={}\n\
             Restart=always\n\
             RestartSec=5\n\
             \n\
             [Install]\n\
             WantedBy=multi-user.target\n",
            self.description,
            self.exec_path.display(),
        )
    }

    fn systemctl(&self, args: &[&str]) -> Result<()> {
        run_process("systemctl", args)
    }
}

impl ServiceManager for SystemdManager {
    fn install(&self) -> Result<()> {
        std::fs::write(self.unit_path(), self.unit_file())?;
        self.systemctl(&["daemon-reload"])?;
        self.systemctl(&["enable", &self.unit_name()])?;
        debug!("Installed unit {}", self.unit_path().display());
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        self.systemctl(&["disable", &self.unit_name()])?;
        std::fs::remove_file(self.unit_path())?;
        self.systemctl(&["daemon-reload"])?;
        debug!("Removed unit {}", self.unit_path().display());
        Ok(())
    }

    fn start(&self) -> Result<()> {
        self.systemctl(&["start", &self.unit_name()])
    }

    fn stop(&self) -> Result<()> {
        self.systemctl(&["stop", &self.unit_name()])
    }
}

/// Run an external command and fail on a non-zero exit
fn run_process(command: &str, args: &[&str]) -> Result<()> {
    let status = Command::new(command)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| ServiceError::Unavailable(format!("{}: {}", command, e)))?;

    if !status.success() {
        return Err(ServiceError::Command(format!(
            "'{} {}' (exit: {})",
            command,
            args.join(" "),
            status
        )));
    }
    Ok(())
}
