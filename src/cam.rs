use std::{fmt::Display, time::Duration};

use log::*;

use crate::{
    CamError, CamResult,
    app::ControlApp,
    config::CamConfig,
    consts::{self, action},
    remote::{self, CommandRunner, RemoteCmd},
    settings::{self, Property, TransferMode, Verb},
};

/// Struct for controlling the camera through digiCamControl.
///
/// Every method maps onto a single remote command, except `capture`, which
/// also queries the captured file, and `start_live_view`, which also minimizes the windows.
pub struct Camera<R = RemoteCmd> {
    runner: R,
    autofocus: bool,
    capture_settle: Duration,
    in_live_view: bool,
}

impl Camera<RemoteCmd> {
    /// Connects to digiCamControl using `config`.
    ///
    /// Fails if the application is not installed in `config.install_dir`.
    /// Starts the application if it is not running and waits `config.startup_wait` for it.
    pub async fn connect(config: CamConfig) -> CamResult<Self> {
        let app = ControlApp::from_config(&config)?;

        if app.ensure_running().await? {
            info!("digiCamControl started");
        }

        let runner = RemoteCmd::new(config.remote_cmd_path(), config.command_timeout);

        Ok(Self::with_runner(runner, config.autofocus).with_capture_settle(config.capture_settle))
    }
}

impl<R: CommandRunner> Camera<R> {
    /// Creates the camera on top of any command runner.
    ///
    /// * `autofocus` - If false, `capture` outside of live view skips autofocus.
    pub fn with_runner(runner: R, autofocus: bool) -> Self {
        Self {
            runner,
            autofocus,
            capture_settle: consts::DEFAULT_CAPTURE_SETTLE,
            in_live_view: false,
        }
    }

    /// Sets the delay between a capture and the query for the captured file.
    pub fn with_capture_settle(mut self, settle: Duration) -> Self {
        self.capture_settle = settle;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn into_runner(self) -> R {
        self.runner
    }

    pub fn autofocus(&self) -> bool {
        self.autofocus
    }

    pub fn set_autofocus(&mut self, autofocus: bool) {
        self.autofocus = autofocus;
    }

    /// Whether live view was started through this camera and not stopped yet.
    pub fn is_live_view(&self) -> bool {
        self.in_live_view
    }

    /// Sends a raw single-line command and returns the text printed in reply, unparsed.
    ///
    /// * `verb` - The command type.
    /// * `args` - Everything after the verb, e.g. `iso 200` for `Verb::Set`. May be empty.
    pub async fn send(&mut self, verb: Verb, args: &str) -> CamResult<String> {
        let command = if args.is_empty() {
            verb.to_string()
        } else {
            format!("{verb} {args}")
        };

        self.runner.execute(&command).await
    }

    /// Reads the current value of a property.
    pub async fn get(&mut self, property: Property) -> CamResult<String> {
        let command = format!("{} {property}", Verb::Get);
        let raw = self.runner.execute(&command).await?;

        remote::parse_value(&command, &raw)
    }

    /// Writes a property. The value is passed through as is.
    ///
    /// Returns whatever the application replied with, usually an empty string.
    pub async fn set(&mut self, property: Property, value: impl Display) -> CamResult<String> {
        let command = format!("{} {property} {value}", Verb::Set);
        let raw = self.runner.execute(&command).await?;

        remote::parse_value(&command, &raw)
    }

    /// Lists the values the attached camera accepts for a property.
    pub async fn list(&mut self, property: Property) -> CamResult<Vec<String>> {
        if !property.is_listable() {
            warn!("Property {property} is not listable, the application will probably reject it");
        }

        let command = format!("{} {property}", Verb::List);
        let raw = self.runner.execute(&command).await?;

        remote::parse_list(&command, &raw)
    }

    /// Runs a `do` action and checks the reply for errors.
    async fn run_action(&mut self, name: &str) -> CamResult<String> {
        let command = format!("{} {name}", Verb::Do);
        let raw = self.runner.execute(&command).await?;

        remote::parse_value(&command, &raw)
    }

    pub async fn shutter_speed(&mut self) -> CamResult<String> {
        self.get(Property::ShutterSpeed).await
    }

    pub async fn set_shutter_speed(&mut self, value: &str) -> CamResult<()> {
        self.set(Property::ShutterSpeed, value).await.map(drop)
    }

    pub async fn shutter_speeds(&mut self) -> CamResult<Vec<String>> {
        self.list(Property::ShutterSpeed).await
    }

    pub async fn iso(&mut self) -> CamResult<String> {
        self.get(Property::Iso).await
    }

    pub async fn set_iso(&mut self, value: &str) -> CamResult<()> {
        self.set(Property::Iso, value).await.map(drop)
    }

    pub async fn isos(&mut self) -> CamResult<Vec<String>> {
        self.list(Property::Iso).await
    }

    pub async fn exposure_comp(&mut self) -> CamResult<String> {
        self.get(Property::ExposureCompensation).await
    }

    pub async fn set_exposure_comp(&mut self, value: &str) -> CamResult<()> {
        self.set(Property::ExposureCompensation, value).await.map(drop)
    }

    pub async fn exposure_comps(&mut self) -> CamResult<Vec<String>> {
        self.list(Property::ExposureCompensation).await
    }

    pub async fn aperture(&mut self) -> CamResult<String> {
        self.get(Property::Aperture).await
    }

    pub async fn set_aperture(&mut self, value: &str) -> CamResult<()> {
        self.set(Property::Aperture, value).await.map(drop)
    }

    pub async fn apertures(&mut self) -> CamResult<Vec<String>> {
        self.list(Property::Aperture).await
    }

    pub async fn focus_mode(&mut self) -> CamResult<String> {
        self.get(Property::FocusMode).await
    }

    pub async fn set_focus_mode(&mut self, value: &str) -> CamResult<()> {
        self.set(Property::FocusMode, value).await.map(drop)
    }

    pub async fn focus_modes(&mut self) -> CamResult<Vec<String>> {
        self.list(Property::FocusMode).await
    }

    pub async fn white_balance(&mut self) -> CamResult<String> {
        self.get(Property::WhiteBalance).await
    }

    pub async fn set_white_balance(&mut self, value: &str) -> CamResult<()> {
        self.set(Property::WhiteBalance, value).await.map(drop)
    }

    pub async fn white_balances(&mut self) -> CamResult<Vec<String>> {
        self.list(Property::WhiteBalance).await
    }

    /// Gets the exposure mode (such as `M` or `A`).
    pub async fn mode(&mut self) -> CamResult<String> {
        self.get(Property::Mode).await
    }

    pub async fn set_mode(&mut self, value: &str) -> CamResult<()> {
        self.set(Property::Mode, value).await.map(drop)
    }

    pub async fn modes(&mut self) -> CamResult<Vec<String>> {
        self.list(Property::Mode).await
    }

    /// Gets the compression setting (such as `JPEG Fine` or `RAW`).
    pub async fn compression(&mut self) -> CamResult<String> {
        self.get(Property::Compression).await
    }

    pub async fn set_compression(&mut self, value: &str) -> CamResult<()> {
        self.set(Property::Compression, value).await.map(drop)
    }

    pub async fn compressions(&mut self) -> CamResult<Vec<String>> {
        self.list(Property::Compression).await
    }

    /// Gets the name of the current session.
    pub async fn session(&mut self) -> CamResult<String> {
        self.get(Property::SessionName).await
    }

    pub async fn set_session(&mut self, name: &str) -> CamResult<()> {
        self.set(Property::SessionName, name).await.map(drop)
    }

    /// Gets the folder the session saves transferred pictures to.
    pub async fn folder(&mut self) -> CamResult<String> {
        self.get(Property::SessionFolder).await
    }

    pub async fn set_folder(&mut self, folder: &str) -> CamResult<()> {
        self.set(Property::SessionFolder, folder).await.map(drop)
    }

    /// Gets the session counter.
    pub async fn counter(&mut self) -> CamResult<u32> {
        let value = self.get(Property::SessionCounter).await?;

        value.trim().parse().map_err(|_| CamError::InvalidValue {
            property: Property::SessionCounter.name(),
            value,
        })
    }

    pub async fn set_counter(&mut self, counter: u32) -> CamResult<()> {
        self.set(Property::SessionCounter, counter).await.map(drop)
    }

    pub async fn file_name_template(&mut self) -> CamResult<String> {
        self.get(Property::FileNameTemplate).await
    }

    /// Sets the template used to name transferred files.
    ///
    /// Placeholders recognized by digiCamControl include:
    /// * `[Counter 4 digit]` - session counter, zero-padded to the given width
    /// * `[Camera Counter 4 digit]` - the camera's own counter, zero-padded
    /// * `[Session Name]`, `[Capture Name]`, `[Camera Name]`, `[Barcode]`
    /// * `[Series 4 digit]` - incremented after every focus stack
    /// * `[File format]` - `jpg` or the raw extension
    /// * `[Date yyyy-MM-dd]` and other date formats
    ///
    /// Subfolders are separated with a backslash, e.g. `[Date yyyy-MM-dd]\[Counter 4 digit]`.
    pub async fn set_file_name_template(&mut self, template: &str) -> CamResult<()> {
        self.set(Property::FileNameTemplate, template).await.map(drop)
    }

    pub async fn delete_file_after_transfer(&mut self) -> CamResult<bool> {
        let value = self.get(Property::DeleteFileAfterTransfer).await?;

        settings::parse_bool(Property::DeleteFileAfterTransfer, &value)
    }

    pub async fn set_delete_file_after_transfer(&mut self, delete: bool) -> CamResult<()> {
        self.set(Property::DeleteFileAfterTransfer, settings::bool_value(delete))
            .await
            .map(drop)
    }

    pub async fn transfer(&mut self) -> CamResult<TransferMode> {
        self.get(Property::Transfer).await?.parse()
    }

    pub async fn set_transfer(&mut self, mode: TransferMode) -> CamResult<()> {
        self.set(Property::Transfer, mode).await.map(drop)
    }

    /// Gets the path of the most recently captured file.
    pub async fn last_captured(&mut self) -> CamResult<String> {
        self.get(Property::LastCaptured).await
    }

    /// Shows the live view window and minimizes the other windows.
    pub async fn start_live_view(&mut self) -> CamResult<()> {
        self.in_live_view = true;
        self.run_action(action::LIVE_VIEW_SHOW).await?;

        self.minimize_all().await
    }

    /// Hides the live view window.
    pub async fn stop_live_view(&mut self) -> CamResult<()> {
        self.in_live_view = false;
        self.run_action(action::LIVE_VIEW_HIDE).await.map(drop)
    }

    /// Focuses the camera. Only works in live view.
    pub async fn focus(&mut self) -> CamResult<()> {
        if !self.in_live_view {
            error!("Camera is not in live view mode, cannot focus.");
            return Err(CamError::NotInLiveView);
        }

        self.run_action(action::LIVE_VIEW_FOCUS).await.map(drop)
    }

    /// Captures a picture and returns the path of the captured file.
    ///
    /// In live view the live view capture is used, otherwise a regular capture
    /// (without autofocus if autofocus was disabled).
    ///
    /// * `location` - Optional location appended to the capture command.
    pub async fn capture(&mut self, location: Option<&str>) -> CamResult<String> {
        let mut command = if self.in_live_view {
            format!("{} {}", Verb::Do, action::LIVE_VIEW_CAPTURE)
        } else if self.autofocus {
            consts::capture::AUTOFOCUS.to_owned()
        } else {
            consts::capture::NO_AUTOFOCUS.to_owned()
        };

        if let Some(location) = location.filter(|l| !l.is_empty()) {
            command.push(' ');
            command.push_str(location);
        }

        let raw = self.runner.execute(&command).await?;
        remote::parse_value(&command, &raw)?;

        tokio::time::sleep(self.capture_settle).await;

        self.last_captured().await
    }

    /// Starts recording video.
    /// Some cameras only record in live view, in which case the live view recording is used.
    pub async fn start_recording(&mut self) -> CamResult<()> {
        let name = if self.in_live_view {
            action::LIVE_VIEW_START_RECORD
        } else {
            action::START_RECORD
        };

        let reply = self.run_action(name).await?;

        if !reply.is_empty() {
            error!("Error starting video recording: {reply}");

            return Err(CamError::Remote {
                command: format!("{} {name}", Verb::Do),
                message: reply,
            });
        }

        Ok(())
    }

    pub async fn stop_recording(&mut self) -> CamResult<()> {
        let name = if self.in_live_view {
            action::LIVE_VIEW_STOP_RECORD
        } else {
            action::STOP_RECORD
        };

        self.run_action(name).await.map(drop)
    }

    /// Minimizes all digiCamControl windows.
    pub async fn minimize_all(&mut self) -> CamResult<()> {
        self.run_action(action::MINIMIZE_ALL).await.map(drop)
    }

    /// Closes all windows and quits digiCamControl.
    pub async fn close_all(&mut self) -> CamResult<()> {
        self.run_action(action::CLOSE_ALL).await.map(drop)
    }
}
