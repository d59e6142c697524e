//! The polling loop: fetch, validate, parse, notify, sleep, repeat.
//!
//! This is the sole recovery boundary of the program. Every failure from the
//! API or the parsing stages is converted into a best-effort chat message and
//! a log line; nothing here terminates the process.

use std::{sync::Arc, time::Duration};

use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info};

use crate::{
    config::Config,
    domain::ChatId,
    ports::{MessagingPort, StatusApi},
    response, Result,
};

pub struct Poller {
    api: Arc<dyn StatusApi>,
    messenger: Arc<dyn MessagingPort>,
    chat_id: ChatId,
    interval: Duration,
    /// `from_date` sent on each poll. Advanced to "now" only after a fully
    /// successful iteration, so a failed poll re-reads the same window.
    cursor: i64,
}

impl Poller {
    pub fn new(cfg: &Config, api: Arc<dyn StatusApi>, messenger: Arc<dyn MessagingPort>) -> Self {
        Self {
            api,
            messenger,
            chat_id: cfg.telegram_chat_id,
            interval: cfg.poll_interval,
            cursor: Utc::now().timestamp(),
        }
    }

    /// Run forever. The only suspension point between iterations is the
    /// fixed sleep; there is no shutdown path short of killing the process.
    pub async fn run(mut self) -> Result<()> {
        info!(
            "polling homework statuses every {}s",
            self.interval.as_secs()
        );
        loop {
            self.poll_once().await;
            sleep(self.interval).await;
        }
    }

    /// One iteration without the sleep, so tests can step the loop.
    pub async fn poll_once(&mut self) {
        match self.run_iteration().await {
            Ok(notified) => {
                if notified > 0 {
                    info!("iteration complete, {notified} status change(s) reported");
                }
                self.cursor = Utc::now().timestamp();
            }
            Err(e) => {
                error!("poll iteration failed: {e}");
                self.notify(&format!("Сбой в работе программы: {e}")).await;
            }
        }
    }

    async fn run_iteration(&self) -> Result<usize> {
        let response = self.api.get_api_answer(self.cursor).await?;
        let homeworks = response::check_response(&response)?;

        let mut notified = 0usize;
        for record in homeworks {
            let message = response::parse_status(record)?;
            self.notify(&message).await;
            notified += 1;
        }
        Ok(notified)
    }

    /// Best-effort delivery: a lost notification is preferable to a dead
    /// monitor, so failures are logged and dropped.
    async fn notify(&self, text: &str) {
        match self.messenger.send_text(self.chat_id, text).await {
            Ok(()) => info!("notification delivered: {text}"),
            Err(e) => error!("failed to deliver notification: {e}"),
        }
    }
}
