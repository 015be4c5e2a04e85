use std::fmt::Display;

use tracing::{debug, warn};

/// Resolves when the process is asked to stop: Ctrl-C everywhere, SIGTERM
/// on Unix.
///
/// A signal whose handler cannot be installed is logged and then never
/// fires; it must not stop the clock.
pub async fn shutdown_signal() {
    let interrupt = async {
        stop_on("interrupt", tokio::signal::ctrl_c().await).await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        let received = match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => sigterm
                .recv()
                .await
                .ok_or_else(|| "signal stream closed".to_string()),
            Err(err) => Err(err.to_string()),
        };
        stop_on("terminate", received).await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}

/// Completes when `received` reports a delivered signal; pends forever when
/// listening for it failed.
async fn stop_on<E: Display>(signal: &'static str, received: Result<(), E>) {
    match received {
        Ok(()) => debug!(signal, "received shutdown signal"),
        Err(err) => {
            warn!(signal, error = %err, "cannot listen for signal; ignoring it");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn delivered_signal_stops() {
        let outcome = timeout(
            Duration::from_millis(100),
            stop_on::<String>("interrupt", Ok(())),
        )
        .await;
        assert!(outcome.is_ok());
    }

    #[tokio::test]
    async fn failed_registration_never_stops() {
        let outcome = timeout(
            Duration::from_millis(50),
            stop_on("interrupt", Err("handler unavailable")),
        )
        .await;
        assert!(outcome.is_err(), "a failed listener must not count as a signal");
    }
}
