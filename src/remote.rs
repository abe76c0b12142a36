use std::{
    future::Future,
    path::PathBuf,
    process::{Output, Stdio},
    time::Duration,
};

use log::*;

use crate::{CamError, CamResult, consts::reply};

/// Sends single-line commands to digiCamControl.
///
/// `RemoteCmd` is the real implementation. Implement this trait to drive a `Camera`
/// against something else, e.g. a scripted fake in tests.
pub trait CommandRunner: Send {
    /// Runs `command` (such as `get iso` or `do LiveViewWnd_Show`) and returns the raw text printed in reply.
    fn execute(&mut self, command: &str) -> impl Future<Output = CamResult<String>> + Send;
}

/// Runs commands through `CameraControlRemoteCmd.exe`.
#[derive(Debug, Clone)]
pub struct RemoteCmd {
    program: PathBuf,
    timeout: Option<Duration>,
}

impl RemoteCmd {
    /// * `program` - Path to the remote command utility.
    /// * `timeout` - Time after which a command is killed, `None` waits indefinitely.
    pub fn new(program: impl Into<PathBuf>, timeout: Option<Duration>) -> Self {
        Self {
            program: program.into(),
            timeout,
        }
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }
}

impl CommandRunner for RemoteCmd {
    async fn execute(&mut self, command: &str) -> CamResult<String> {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.arg("/c")
            .arg(command)
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, cmd.output())
                .await
                .inspect_err(|_| error!("Command `{command}` timed out after {timeout:?}"))??,
            None => cmd.output().await?,
        };

        if !output.status.success() {
            return Err(command_failed(command, &output));
        }

        let result = String::from_utf8_lossy(&output.stdout).into_owned();

        info!(
            "Executed `{} /c {command}`, result: {}",
            self.program.display(),
            result.trim_end()
        );

        Ok(result)
    }
}

/// Builds the error for a non-zero exit, keeping stderr, or stdout when stderr is empty.
fn command_failed(command: &str, output: &Output) -> CamError {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout).trim().to_owned()
    } else {
        stderr.trim().to_owned()
    };

    error!("Error executing command `{command}` ({}): {text}", output.status);

    CamError::CommandFailed {
        command: command.to_owned(),
        status: output.status,
        output: text,
    }
}

/// Extracts the value from a reply, such as `:;response:"1/125";`.
///
/// * `command` - The command the reply belongs to, used for error reporting.
pub fn parse_value(command: &str, raw: &str) -> CamResult<String> {
    let payload = payload(command, raw)?;

    Ok(payload
        .trim_matches(|c| matches!(c, '"' | ';' | '\r' | '\n'))
        .to_owned())
}

/// Extracts the values from a list reply, such as `:;response:["100","200"];`.
pub fn parse_list(command: &str, raw: &str) -> CamResult<Vec<String>> {
    let payload = payload(command, raw)?;

    Ok(payload
        .trim_matches(|c| matches!(c, '[' | ']' | ';' | '\r' | '\n'))
        .replace('"', "")
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Returns the text after `response:`, or the error the application reported.
fn payload<'a>(command: &str, raw: &'a str) -> CamResult<&'a str> {
    if let Some((_, message)) = raw.split_once(reply::MESSAGE) {
        return Err(remote_error(command, message));
    }

    let (_, payload) = raw.split_once(reply::RESPONSE).ok_or_else(|| {
        warn!("Reply to `{command}` has no response field: {raw:?}");
        CamError::InvalidFormat
    })?;

    // Error replies are unquoted: `response:error;`. A quoted value may start with "error".
    let is_error = payload
        .strip_prefix(reply::ERROR)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([';', '\r', '\n']));

    if is_error {
        return Err(remote_error(command, payload));
    }

    Ok(payload)
}

fn remote_error(command: &str, message: &str) -> CamError {
    let message = message
        .trim_matches(|c: char| matches!(c, '"' | ';') || c.is_whitespace())
        .to_owned();

    error!("Error executing `{command}`: {message}");

    CamError::Remote {
        command: command.to_owned(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_unquoted() {
        let value = parse_value("get shutterspeed", ":;response:\"1/125\";\r\n").unwrap();
        assert_eq!(value, "1/125");
    }

    #[test]
    fn empty_value_is_allowed() {
        let value = parse_value("do StartRecord", ":;response:;\r\n").unwrap();
        assert_eq!(value, "");
    }

    #[test]
    fn value_keeps_inner_spaces() {
        let value = parse_value("get transfer", "response:\"Save to PC only\";").unwrap();
        assert_eq!(value, "Save to PC only");
    }

    #[test]
    fn list_is_split_and_unquoted() {
        let list = parse_list(
            "list iso",
            ":;response:[\"Auto\",\"100\",\"200\",\"400\"];\r\n",
        )
        .unwrap();

        assert_eq!(list, ["Auto", "100", "200", "400"]);
    }

    #[test]
    fn empty_list() {
        let list = parse_list("list mode", ":;response:[];\r\n").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn error_message_is_extracted() {
        let err = parse_value(
            "set iso 12",
            ":;response:error;message:Wrong value 12 for property iso;\r\n",
        )
        .unwrap_err();

        match err {
            CamError::Remote { command, message } => {
                assert_eq!(command, "set iso 12");
                assert_eq!(message, "Wrong value 12 for property iso");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_without_message_uses_payload() {
        let err = parse_list("list aperture", "response:error;\r\n").unwrap_err();
        assert!(matches!(err, CamError::Remote { message, .. } if message == "error"));
    }

    #[test]
    fn quoted_value_starting_with_error_is_a_value() {
        let value = parse_value(
            "get session.name",
            ":;response:\"errors_and_omissions\";\r\n",
        )
        .unwrap();
        assert_eq!(value, "errors_and_omissions");

        let list = parse_list("list mode", ":;response:[\"error_priority\",\"M\"];\r\n").unwrap();
        assert_eq!(list, ["error_priority", "M"]);
    }

    #[test]
    fn bare_error_at_end_of_reply() {
        let err = parse_value("get iso", "response:error").unwrap_err();
        assert!(matches!(err, CamError::Remote { message, .. } if message == "error"));
    }

    #[test]
    fn missing_response_is_invalid() {
        let err = parse_value("get iso", "No camera connected\r\n").unwrap_err();
        assert!(matches!(err, CamError::InvalidFormat));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn remote_cmd_passes_command_as_single_argument() {
        let mut runner = RemoteCmd::new("echo", None);

        let out = runner.execute("set session.folder C:\\My Photos").await.unwrap();

        assert_eq!(out, "/c set session.folder C:\\My Photos\n");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn remote_cmd_reports_exit_status() {
        let mut runner = RemoteCmd::new("false", Some(Duration::from_secs(5)));

        let err = runner.execute("get iso").await.unwrap_err();

        assert!(matches!(err, CamError::CommandFailed { command, .. } if command == "get iso"));
    }

    #[cfg(unix)]
    #[test]
    fn failed_command_keeps_stdout_when_stderr_is_empty() {
        use std::os::unix::process::ExitStatusExt as _;

        let output = Output {
            status: std::process::ExitStatus::from_raw(1 << 8),
            stdout: b":;response:error;message:No camera connected;\r\n".to_vec(),
            stderr: Vec::new(),
        };

        let err = command_failed("get iso", &output);

        assert!(matches!(
            err,
            CamError::CommandFailed { output, .. }
                if output == ":;response:error;message:No camera connected;"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn failed_command_prefers_stderr() {
        use std::os::unix::process::ExitStatusExt as _;

        let output = Output {
            status: std::process::ExitStatus::from_raw(2 << 8),
            stdout: b"partial".to_vec(),
            stderr: b"access denied\n".to_vec(),
        };

        let err = command_failed("get iso", &output);

        assert!(matches!(err, CamError::CommandFailed { output, .. } if output == "access denied"));
    }

    #[tokio::test]
    async fn remote_cmd_missing_program_is_io_error() {
        let mut runner = RemoteCmd::new("/nonexistent/CameraControlRemoteCmd.exe", None);

        let err = runner.execute("get iso").await.unwrap_err();

        assert!(matches!(err, CamError::Io(_)));
    }
}
