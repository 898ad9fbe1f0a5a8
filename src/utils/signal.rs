use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(unix)]
use tokio::signal::unix::{Signal, SignalKind};

/// Resolves once the process is asked to stop, used for graceful shutdown.
pub struct ShutdownSignal {
    #[cfg(unix)]
    signals: smallvec::SmallVec<[(SignalKind, Signal); 3]>,
    #[cfg(not(unix))]
    ctrl_c: Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        trace!("registering shutdown signal listeners");

        #[cfg(unix)]
        {
            let kinds = [
                SignalKind::interrupt(),
                SignalKind::terminate(),
                SignalKind::quit(),
            ];

            let signals = kinds
                .into_iter()
                .filter_map(|kind| match tokio::signal::unix::signal(kind) {
                    Ok(signal) => Some((kind, signal)),
                    Err(error) => {
                        error!("failed to listen for signal {:?}: {}", kind, error);
                        None
                    }
                })
                .collect();

            ShutdownSignal { signals }
        }

        #[cfg(not(unix))]
        {
            ShutdownSignal {
                ctrl_c: Box::pin(tokio::signal::ctrl_c()),
            }
        }
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl Future for ShutdownSignal {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        #[cfg(unix)]
        for (kind, signal) in &mut self.signals {
            if signal.poll_recv(cx).is_ready() {
                info!("received signal {:?}, shutting down", kind);
                return Poll::Ready(());
            }
        }

        #[cfg(not(unix))]
        if self.ctrl_c.as_mut().poll(cx).is_ready() {
            info!("received ctrl-c, shutting down");
            return Poll::Ready(());
        }

        Poll::Pending
    }
}
