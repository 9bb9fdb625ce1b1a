#[tokio::main]
async fn main() -> yoigan_bot::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("yoigan_bot=info,serenity=warn"),
    )
    .init();
    log::info!("Starting YoiGan Discord bot");

    match yoigan_bot::run().await {
        Ok(()) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {e}");
            Err(e)
        }
    }
}
