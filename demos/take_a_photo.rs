use digicam_remote::{cam::Camera, config::CamConfig, settings::TransferMode};

#[tokio::main]
/// This example sets up the exposure, takes a photo and prints where it was saved.
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cam = Camera::connect(CamConfig::from_env()?).await?;

    println!("Available ISO values: {:?}", cam.isos().await?);

    cam.set_iso("200").await?;
    cam.set_shutter_speed("1/125").await?;
    cam.set_transfer(TransferMode::Pc).await?;
    cam.set_file_name_template(r"[Date yyyy-MM-dd]\[Counter 4 digit]").await?;

    let path = cam.capture(None).await?;

    println!("Picture saved to {path} (session counter: {})", cam.counter().await?);

    Ok(())
}
