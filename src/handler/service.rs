//! The composed invocation service.

use crate::dispatch::ports::CallbackSink;
use crate::dispatch::services::Dispatcher;
use crate::event::codec;
use crate::event::domain::{CloudEvent, WireMode};
use crate::handler::HandlerError;
use crate::transport::{CALLBACK_URL, CONTENT_TYPE, Request, Response};
use crate::words::domain::PickedWord;
use crate::words::ports::{Randomness, WordSource};
use crate::words::services::WordPicker;
use mockable::Clock;
use std::sync::Arc;

/// Action segment of the produced event type.
const PICKED_ACTION: &str = "picked";

/// Handles one word-picking invocation end to end.
///
/// All collaborators are injected at construction: the word source, the
/// randomness source, the callback sink and the clock. The handler itself
/// holds no invocation-spanning mutable state.
#[derive(Clone)]
pub struct WordPickHandler<S, R, C, K> {
    picker: WordPicker<S, R>,
    dispatcher: Dispatcher<C>,
    clock: K,
}

impl<S, R, C, K> WordPickHandler<S, R, C, K>
where
    S: WordSource,
    R: Randomness,
    C: CallbackSink + 'static,
    K: Clock + Send + Sync,
{
    /// Creates a handler over its collaborators.
    #[must_use]
    pub const fn new(source: Arc<S>, randomness: Arc<R>, callbacks: Arc<C>, clock: K) -> Self {
        Self {
            picker: WordPicker::new(source, randomness),
            dispatcher: Dispatcher::new(callbacks),
            clock,
        }
    }

    /// Handles one invocation.
    ///
    /// Detects the wire mode once, decodes the inbound event, looks up the
    /// category named by the third type segment, picks a word, and
    /// dispatches the produced event per the threaded mode: inline when
    /// no callback address is present, as a detached POST otherwise. When
    /// nothing is picked the response is an empty-bodied 200 and no event
    /// is produced.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] when decoding, the category lookup or
    /// encoding fails; use [`HandlerError::to_response`] to map it to the
    /// invocation's response.
    pub async fn handle(&self, request: &Request) -> Result<Response, HandlerError> {
        let mode = WireMode::detect(
            request
                .headers()
                .get_all(CONTENT_TYPE)
                .iter()
                .map(String::as_str),
        );
        let inbound = codec::decode(request, mode)?;

        let category = inbound.event_type().category()?;
        let picked = self.picker.pick(category).await?;
        let outbound = picked.map(|word| self.produce_picked_event(&inbound, word));

        let callback = request.headers().get(CALLBACK_URL);
        Ok(self.dispatcher.dispatch(outbound.as_ref(), mode, callback)?)
    }

    /// Produces the `...picked` event answering an inbound `...found` one.
    fn produce_picked_event(&self, inbound: &CloudEvent, word: String) -> CloudEvent {
        let event_type = inbound.event_type().with_action(PICKED_ACTION);
        CloudEvent::produce(
            event_type,
            &PickedWord::new(word),
            Some(inbound.id().clone()),
            &self.clock,
        )
    }
}
