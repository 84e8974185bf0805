//! Recording callback sink for tests.

use crate::dispatch::error::DispatchError;
use crate::dispatch::ports::CallbackSink;
use crate::transport::Headers;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// One recorded callback delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    url: String,
    body: Vec<u8>,
    headers: Headers,
}

impl Delivery {
    /// Returns the callback address the delivery targeted.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the delivered body.
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns the delivered headers.
    #[must_use]
    pub const fn headers(&self) -> &Headers {
        &self.headers
    }
}

/// In-memory [`CallbackSink`] that records every delivery.
///
/// Deliveries happen on a detached task, so tests synchronise with
/// [`RecordingCallbackSink::wait_for_delivery`] instead of sleeping.
#[derive(Debug, Clone, Default)]
pub struct RecordingCallbackSink {
    deliveries: Arc<Mutex<Vec<Delivery>>>,
    notify: Arc<Notify>,
    fail: bool,
}

impl RecordingCallbackSink {
    /// Creates a sink whose deliveries all succeed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that records deliveries but reports each as failed.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns a snapshot of the recorded deliveries.
    ///
    /// Returns an empty vector if the internal lock is poisoned.
    #[must_use]
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Waits until at least one delivery has been recorded.
    pub async fn wait_for_delivery(&self) {
        loop {
            let notified = self.notify.notified();
            if !self.deliveries().is_empty() {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl CallbackSink for RecordingCallbackSink {
    async fn deliver(
        &self,
        url: &str,
        body: &[u8],
        headers: &Headers,
    ) -> Result<(), DispatchError> {
        if let Ok(mut guard) = self.deliveries.lock() {
            guard.push(Delivery {
                url: url.to_owned(),
                body: body.to_vec(),
                headers: headers.clone(),
            });
        }
        self.notify.notify_waiters();

        if self.fail {
            return Err(DispatchError::transport(url, "sink configured to fail"));
        }
        Ok(())
    }
}
