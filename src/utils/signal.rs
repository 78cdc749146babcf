use tokio::signal;

/// Resolves once the process is asked to stop.
pub async fn shutdown_signal() {
    trace!("registering signal listeners");

    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {}", error);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{self, SignalKind};

        let (Ok(mut terminate), Ok(mut quit)) = (
            unix::signal(SignalKind::terminate()),
            unix::signal(SignalKind::quit()),
        ) else {
            error!("failed to initialize signal listeners");
            return std::future::pending::<()>().await;
        };

        tokio::select! {
            _ = terminate.recv() => {},
            _ = quit.recv() => {},
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };

    info!("shutting down");
}
