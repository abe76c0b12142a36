use digicam_remote::{cam::Camera, config::CamConfig, util::CamUtil};

#[tokio::main]
/// This example focuses in live view, captures a picture into the given folder and quits digiCamControl.
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let location = std::env::args().nth(1);

    let mut cam = Camera::connect(CamConfig::from_env()?.with_autofocus(false)).await?;

    println!("Session: {}, folder: {}", cam.session().await?, cam.folder().await?);

    let path = cam.capture_with_live_view(location.as_deref()).await?;

    println!("Captured {path}");

    cam.close_all().await?;

    Ok(())
}
