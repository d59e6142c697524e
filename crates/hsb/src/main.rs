use std::sync::Arc;

use hsb_core::{config::Config, poller::Poller};
use hsb_practicum::PracticumClient;
use hsb_telegram::TelegramMessenger;

#[tokio::main]
async fn main() -> Result<(), hsb_core::Error> {
    hsb_core::logging::init("hsb")?;

    let cfg = Config::load()?;

    let api = Arc::new(PracticumClient::new(&cfg));
    let messenger = Arc::new(TelegramMessenger::new(&cfg.telegram_bot_token));

    Poller::new(&cfg, api, messenger).run().await
}
