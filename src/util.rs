use std::{future::Future, panic::AssertUnwindSafe};

use futures::{FutureExt as _, future::BoxFuture};
use log::*;

use crate::{CamResult, cam::Camera, remote::CommandRunner};

/// This trait provides convenience functions for the `Camera` struct.
pub trait CamUtil {
    /// Runs `body` with live view shown, and hides live view afterwards.
    ///
    /// Live view is stopped even if starting it or `body` fails, or `body` panics;
    /// a panic is resumed once live view is stopped.
    /// If `body` fails, its error is returned and a failure to stop live view is only logged.
    ///
    /// ```no_run
    /// # use digicam_remote::{cam::Camera, util::CamUtil, CamResult};
    /// # use futures::FutureExt as _;
    /// # async fn run(cam: &mut Camera) -> CamResult<()> {
    /// let path = cam
    ///     .with_live_view(|cam| async move {
    ///         cam.focus().await?;
    ///         cam.capture(None).await
    ///     }.boxed())
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    fn with_live_view<T, F>(&mut self, body: F) -> impl Future<Output = CamResult<T>> + Send
    where
        T: Send,
        F: for<'a> FnOnce(&'a mut Self) -> BoxFuture<'a, CamResult<T>> + Send;

    /// Convenience method for focusing in live view and capturing a picture.
    ///
    /// * `location` - Optional location appended to the capture command.
    ///
    /// Returns the path of the captured file.
    fn capture_with_live_view(
        &mut self,
        location: Option<&str>,
    ) -> impl Future<Output = CamResult<String>> + Send;
}

impl<R: CommandRunner> CamUtil for Camera<R> {
    async fn with_live_view<T, F>(&mut self, body: F) -> CamResult<T>
    where
        T: Send,
        F: for<'a> FnOnce(&'a mut Self) -> BoxFuture<'a, CamResult<T>> + Send,
    {
        if let Err(e) = self.start_live_view().await {
            if let Err(stop_err) = self.stop_live_view().await {
                warn!("Unable to stop live view after a failed start ({stop_err})");
            }
            return Err(e);
        }

        let outcome = AssertUnwindSafe(body(&mut *self)).catch_unwind().await;

        let stopped = self.stop_live_view().await;

        match outcome {
            Err(panic) => {
                if let Err(e) = stopped {
                    warn!("Unable to stop live view after a panic ({e})");
                }
                std::panic::resume_unwind(panic)
            }
            Ok(Err(e)) => {
                if let Err(stop_err) = stopped {
                    warn!("Unable to stop live view after an error ({stop_err})");
                }
                Err(e)
            }
            Ok(Ok(value)) => stopped.map(|_| value),
        }
    }

    async fn capture_with_live_view(&mut self, location: Option<&str>) -> CamResult<String> {
        let location = location.map(str::to_owned);

        self.with_live_view(|cam| {
            async move {
                cam.focus().await?;
                cam.capture(location.as_deref()).await
            }
            .boxed()
        })
        .await
    }
}
