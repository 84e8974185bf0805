//! Callback delivery port.

use crate::dispatch::error::DispatchError;
use crate::transport::Headers;
use async_trait::async_trait;

/// Port for delivering an encoded event to a callback address.
///
/// Implementations should carry their own bounded timeout so a slow
/// callback endpoint cannot tie up invocation-handling capacity; the
/// outcome is never observed by the original caller.
#[async_trait]
pub trait CallbackSink: Send + Sync {
    /// POSTs the encoded body and headers to the callback address.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError`] when the POST cannot be completed; the
    /// dispatcher logs and absorbs it.
    async fn deliver(&self, url: &str, body: &[u8], headers: &Headers)
    -> Result<(), DispatchError>;
}
