use actix_web::web;
use tokio::time::{interval, Duration};

use crate::{
    constants::{FLASH_EVICTION_INTERVAL_SECS, FLASH_TTL_SECS},
    AppState,
};

/// Periodically drops flash messages that were never read.
pub async fn start_flash_eviction_task(state: web::Data<AppState>) {
    let mut interval = interval(Duration::from_secs(FLASH_EVICTION_INTERVAL_SECS));
    let ttl = Duration::from_secs(FLASH_TTL_SECS);

    loop {
        interval.tick().await;

        let evicted = state.flash.evict_older_than(ttl);
        if evicted > 0 {
            tracing::info!("Evicted {} unread flash messages", evicted);
        }
    }
}
