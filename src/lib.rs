//! An async Rust library for controlling cameras through [digiCamControl].
//!
//! digiCamControl does all of the talking to the camera. This library drives it from the outside
//! using its `CameraControlRemoteCmd.exe` utility, so the application has to be installed,
//! and is launched automatically when it is not running yet.
//!
//! [digiCamControl]: https://digicamcontrol.com
//!
//! ## Example
//!
//! More examples are provided in the `demos/` folder.
//!
//! ```no_run
//! use digicam_remote::{cam::Camera, config::CamConfig, settings::TransferMode};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cam = Camera::connect(CamConfig::from_env()?).await?;
//!
//!     cam.set_iso("400").await?;
//!     cam.set_transfer(TransferMode::Pc).await?;
//!
//!     println!("Saved to {}", cam.capture(None).await?);
//!
//!     Ok(())
//! }
//! ```

/// Contains default values and the names used in remote commands.
pub mod consts;

/// Contains enums for the camera settings and command types.
pub mod settings;

/// Contains the connection configuration.
pub mod config;

/// Contains the command runner and the reply parser.
pub mod remote;

/// Contains the process check and launcher for the control application.
pub mod app;

/// Contains the main camera struct.
pub mod cam;

/// Contains various convenience methods for interacting with the camera.
pub mod util;

/// Crate-specific error enum.
/// Every function interacting with the camera returns a Result enum with this error type.
#[derive(thiserror::Error, Debug)]
pub enum CamError {
    #[error("Internal I/O error occured")]
    Io(#[from] std::io::Error),

    #[error("Timeout occured while waiting for the remote command")]
    Timeout(#[from] tokio::time::error::Elapsed),

    #[error("Invalid response format")]
    InvalidFormat,

    #[error("Remote command `{command}` exited with {status}: {output}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        output: String,
    },

    #[error("digiCamControl rejected `{command}`: {message}")]
    Remote { command: String, message: String },

    #[error("digiCamControl application not found at {}", path.display())]
    AppNotFound { path: std::path::PathBuf },

    #[error("Camera is not in live view mode")]
    NotInLiveView,

    #[error("Invalid value for {property}: {value:?}")]
    InvalidValue {
        property: &'static str,
        value: String,
    },

    #[error("Invalid configuration value for {key}: {value:?}")]
    Config { key: &'static str, value: String },
}

pub type CamResult<T> = Result<T, CamError>;
