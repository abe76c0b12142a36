use std::time::Duration;

/// Default digiCamControl installation directory.
pub const DEFAULT_INSTALL_DIR: &str = r"C:\Program Files (x86)\digiCamControl";

/// Executable name of the main digiCamControl application.
pub const APP_EXE: &str = "CameraControl.exe";

/// Executable name of the remote command utility.
pub const REMOTE_CMD_EXE: &str = "CameraControlRemoteCmd.exe";

/// Time given to the application to come up after launching it.
pub const DEFAULT_STARTUP_WAIT: Duration = Duration::from_secs(5);

/// Default timeout for a single remote command.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(30);

/// Delay between a successful capture and querying the last captured file.
pub const DEFAULT_CAPTURE_SETTLE: Duration = Duration::from_secs(1);

/// Environment variables read by `CamConfig::from_env`.
pub mod env {
    pub const INSTALL_DIR: &str = "DIGICAMCONTROL_DIR";
    pub const STARTUP_SECS: &str = "DIGICAMCONTROL_STARTUP_SECS";
    pub const AUTOFOCUS: &str = "DIGICAMCONTROL_AUTOFOCUS";
    pub const TIMEOUT_SECS: &str = "DIGICAMCONTROL_TIMEOUT_SECS";
}

/// Markers in the text printed by the remote utility.
pub mod reply {
    pub const RESPONSE: &str = "response:";
    pub const MESSAGE: &str = "message:";
    pub const ERROR: &str = "error";
}

/// Actions run with the `do` verb.
pub mod action {
    pub const LIVE_VIEW_SHOW: &str = "LiveViewWnd_Show";
    pub const LIVE_VIEW_HIDE: &str = "LiveViewWnd_Hide";
    pub const LIVE_VIEW_FOCUS: &str = "LiveView_Focus";
    pub const LIVE_VIEW_CAPTURE: &str = "LiveView_Capture";
    pub const LIVE_VIEW_START_RECORD: &str = "LiveViewWnd_StartRecord";
    pub const LIVE_VIEW_STOP_RECORD: &str = "LiveViewWnd_StopRecord";
    pub const START_RECORD: &str = "StartRecord";
    pub const STOP_RECORD: &str = "StopRecord";
    pub const MINIMIZE_ALL: &str = "All_Minimize";
    pub const CLOSE_ALL: &str = "All_Close";
}

/// Top-level capture commands (no verb).
pub mod capture {
    pub const AUTOFOCUS: &str = "Capture";
    pub const NO_AUTOFOCUS: &str = "CaptureNoAf";
}
