//! Maps a produced event to the invocation's response.

use crate::dispatch::ports::CallbackSink;
use crate::event::codec::{self, EncodedEvent};
use crate::event::domain::{CloudEvent, WireMode};
use crate::event::error::EncodeError;
use crate::transport::{Response, StatusCode};
use std::sync::Arc;

/// Chooses between synchronous response and fire-and-forget callback
/// delivery, mapping the outcome to a transport status code.
#[derive(Clone)]
pub struct Dispatcher<C> {
    callbacks: Arc<C>,
}

impl<C> Dispatcher<C>
where
    C: CallbackSink + 'static,
{
    /// Creates a dispatcher over a callback sink.
    #[must_use]
    pub const fn new(callbacks: Arc<C>) -> Self {
        Self { callbacks }
    }

    /// Produces the invocation's response for an optional produced event.
    ///
    /// - No event (nothing was picked): empty body, status 200.
    /// - Event, no callback address: the encoded body and headers inline,
    ///   status 200.
    /// - Event and a callback address: a detached task POSTs the encoded
    ///   event to the address and the response is an unconditional empty
    ///   202. The delivery outcome is never awaited and a failure is only
    ///   logged.
    ///
    /// Must be called within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when the event cannot be encoded; nothing
    /// is dispatched in that case.
    pub fn dispatch(
        &self,
        event: Option<&CloudEvent>,
        mode: WireMode,
        callback: Option<&str>,
    ) -> Result<Response, EncodeError> {
        let Some(produced) = event else {
            return Ok(Response::empty(StatusCode::OK));
        };

        let encoded = codec::encode(produced, mode)?;
        match callback {
            None => {
                let (body, headers) = encoded.into_parts();
                Ok(Response::new(StatusCode::OK, headers, body))
            }
            Some(url) => {
                self.spawn_delivery(url, encoded);
                Ok(Response::empty(StatusCode::ACCEPTED))
            }
        }
    }

    /// Hands the encoded event to a detached delivery task.
    fn spawn_delivery(&self, url: &str, encoded: EncodedEvent) {
        let sink = Arc::clone(&self.callbacks);
        let target = url.to_owned();
        tokio::spawn(async move {
            let (body, headers) = encoded.into_parts();
            if let Err(err) = sink.deliver(&target, &body, &headers).await {
                log::warn!("callback delivery to {target} failed: {err}");
            }
        });
    }
}
