use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::*;
use sysinfo::{ProcessesToUpdate, System};

use crate::{CamError, CamResult, config::CamConfig, consts};

/// Checks if a process with the given executable name (such as `CameraControl.exe`) is running.
/// The comparison ignores ASCII case.
pub fn is_running(process_name: &str) -> bool {
    let mut sys = System::new();
    sys.refresh_processes(ProcessesToUpdate::All, true);

    sys.processes()
        .values()
        .any(|process| process.name().eq_ignore_ascii_case(process_name))
}

/// Handle to the digiCamControl desktop application.
#[derive(Debug, Clone)]
pub struct ControlApp {
    app_path: PathBuf,
    startup_wait: Duration,
}

impl ControlApp {
    /// Fails with `CamError::AppNotFound` if the executable does not exist.
    ///
    /// * `app_path` - Path to `CameraControl.exe`.
    /// * `startup_wait` - How long to wait after launching before the application accepts commands.
    pub fn new(app_path: impl Into<PathBuf>, startup_wait: Duration) -> CamResult<Self> {
        let app_path = app_path.into();

        if !app_path.exists() {
            error!("Invalid CameraControl application path: {}", app_path.display());
            return Err(CamError::AppNotFound { path: app_path });
        }

        Ok(Self {
            app_path,
            startup_wait,
        })
    }

    pub fn from_config(config: &CamConfig) -> CamResult<Self> {
        Self::new(config.app_path(), config.startup_wait)
    }

    pub fn path(&self) -> &Path {
        &self.app_path
    }

    /// Checks the process list for the application's executable.
    pub fn is_running(&self) -> bool {
        let name = self
            .app_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(consts::APP_EXE);

        is_running(name)
    }

    /// Starts the application and waits for it to come up.
    /// The process is left running on its own.
    pub async fn launch(&self) -> CamResult<()> {
        info!("Starting {}...", self.app_path.display());

        tokio::process::Command::new(&self.app_path)
            .spawn()
            .inspect_err(|e| error!("Error starting CameraControl application: {e}"))?;

        tokio::time::sleep(self.startup_wait).await;

        Ok(())
    }

    /// Launches the application unless it is already running.
    ///
    /// Returns true if the application had to be launched.
    pub async fn ensure_running(&self) -> CamResult<bool> {
        if self.is_running() {
            debug!("{} is already running", self.app_path.display());
            return Ok(false);
        }

        self.launch().await?;

        Ok(true)
    }
}
