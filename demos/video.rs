use std::time::Duration;

use digicam_remote::{CamError, cam::Camera, config::CamConfig, util::CamUtil};
use futures::FutureExt as _;

#[tokio::main]
/// This example records a 5-second video in live view.
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cam = Camera::connect(CamConfig::from_env()?).await?;

    cam.with_live_view(|cam| {
        async move {
            cam.start_recording().await?;
            println!("Recording started!");

            tokio::time::sleep(Duration::from_secs(5)).await;

            cam.stop_recording().await?;
            println!("Recording ended!");

            Ok::<(), CamError>(())
        }
        .boxed()
    })
    .await?;

    Ok(())
}
