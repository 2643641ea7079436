//! Ctrl+C handling for interactive runs

use anyhow::{Context, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{info, warn};

/// Raise `stop` when the process receives Ctrl+C.
///
/// The listener runs on its own thread with a single-threaded runtime, so
/// the run loop itself stays synchronous.
pub fn stop_on_ctrl_c(stop: Arc<AtomicBool>) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build signal runtime")?;

    std::thread::Builder::new()
        .name("ctrl-c".into())
        .spawn(move || {
            runtime.block_on(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => {
                        info!("received Ctrl+C, stopping");
                        stop.store(true, Ordering::Relaxed);
                    }
                    Err(err) => warn!(error = %err, "failed to listen for Ctrl+C"),
                }
            });
        })
        .context("Failed to spawn Ctrl+C listener")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_leaves_flag_clear() {
        let stop = Arc::new(AtomicBool::new(false));
        stop_on_ctrl_c(Arc::clone(&stop)).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(20));
        assert!(!stop.load(Ordering::Relaxed));
    }
}
