#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use digicam_remote::{CamResult, cam::Camera, remote::CommandRunner};

/// Reply printed by the remote utility for a successful command without a value.
pub const OK: &str = ":;response:;\r\n";

/// Stands in for `CameraControlRemoteCmd.exe`: records commands and answers from a script.
#[derive(Debug, Default)]
pub struct FakeRemote {
    replies: HashMap<String, VecDeque<String>>,
    /// Every command received, in order.
    pub sent: Vec<String>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `reply` for the next time `command` is received.
    /// Commands without a queued reply get `OK`.
    pub fn reply(mut self, command: &str, reply: &str) -> Self {
        self.replies
            .entry(command.to_owned())
            .or_default()
            .push_back(reply.to_owned());
        self
    }

    /// Queues a quoted value reply, e.g. `:;response:"400";`.
    pub fn value(self, command: &str, value: &str) -> Self {
        let reply = format!(":;response:\"{value}\";\r\n");
        self.reply(command, &reply)
    }

    pub fn camera(self) -> Camera<FakeRemote> {
        Camera::with_runner(self, true).with_capture_settle(std::time::Duration::ZERO)
    }
}

impl CommandRunner for FakeRemote {
    async fn execute(&mut self, command: &str) -> CamResult<String> {
        self.sent.push(command.to_owned());

        Ok(self
            .replies
            .get_mut(command)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| OK.to_owned()))
    }
}
