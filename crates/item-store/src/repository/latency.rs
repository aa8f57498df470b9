//! Simulated Network Latency

use std::time::Duration;

/// Wait `delay` before a store operation resolves
///
/// Zero resolves immediately without touching the browser timer API.
pub async fn simulate(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    gloo_timers::future::sleep(delay).await;
}
