use std::{path::PathBuf, time::Duration};

use crate::{CamError, CamResult, consts};

/// Configuration of a connection to digiCamControl.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamConfig {
    /// Directory containing `CameraControl.exe` and `CameraControlRemoteCmd.exe`.
    pub install_dir: PathBuf,
    /// Time given to the application to start up after it has been launched.
    pub startup_wait: Duration,
    /// If false, captures outside of live view skip autofocus.
    pub autofocus: bool,
    /// Timeout for a single remote command, `None` waits indefinitely.
    pub command_timeout: Option<Duration>,
    /// Delay between a capture and the query for the captured file.
    pub capture_settle: Duration,
}

impl Default for CamConfig {
    fn default() -> Self {
        Self {
            install_dir: PathBuf::from(consts::DEFAULT_INSTALL_DIR),
            startup_wait: consts::DEFAULT_STARTUP_WAIT,
            autofocus: true,
            command_timeout: Some(consts::DEFAULT_COMMAND_TIMEOUT),
            capture_settle: consts::DEFAULT_CAPTURE_SETTLE,
        }
    }
}

impl CamConfig {
    /// Default configuration with overrides read from the `DIGICAMCONTROL_*` environment variables.
    pub fn from_env() -> CamResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Default configuration with overrides taken from `lookup`.
    ///
    /// * `lookup` - Returns the value for an environment variable name (see `consts::env`).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> CamResult<Self> {
        let mut config = Self::default();

        if let Some(dir) = lookup(consts::env::INSTALL_DIR) {
            config.install_dir = PathBuf::from(dir);
        }

        if let Some(secs) = lookup(consts::env::STARTUP_SECS) {
            config.startup_wait = Duration::from_secs(parse_secs(consts::env::STARTUP_SECS, &secs)?);
        }

        if let Some(autofocus) = lookup(consts::env::AUTOFOCUS) {
            config.autofocus = match autofocus.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(CamError::Config {
                        key: consts::env::AUTOFOCUS,
                        value: autofocus,
                    });
                }
            };
        }

        if let Some(secs) = lookup(consts::env::TIMEOUT_SECS) {
            config.command_timeout = match parse_secs(consts::env::TIMEOUT_SECS, &secs)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            };
        }

        Ok(config)
    }

    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = dir.into();
        self
    }

    pub fn with_startup_wait(mut self, wait: Duration) -> Self {
        self.startup_wait = wait;
        self
    }

    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }

    pub fn with_command_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.command_timeout = timeout;
        self
    }

    pub fn with_capture_settle(mut self, settle: Duration) -> Self {
        self.capture_settle = settle;
        self
    }

    /// Full path of `CameraControl.exe`.
    pub fn app_path(&self) -> PathBuf {
        self.install_dir.join(consts::APP_EXE)
    }

    /// Full path of `CameraControlRemoteCmd.exe`.
    pub fn remote_cmd_path(&self) -> PathBuf {
        self.install_dir.join(consts::REMOTE_CMD_EXE)
    }
}

fn parse_secs(key: &'static str, value: &str) -> CamResult<u64> {
    value.trim().parse().map_err(|_| CamError::Config {
        key,
        value: value.to_owned(),
    })
}
