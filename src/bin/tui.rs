use anyhow::Result;
use carecal::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    let log_path = carecal::logging::init(&config.log_level)?;

    // Panic Hook
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(%info, "panic");
        default_hook(info);
    }));

    tracing::info!(?log_path, view = %config.view, "starting carecal");
    carecal::tui::run(config).await
}
