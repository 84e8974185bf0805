//! HTTP callback sink with bounded timeouts.

use crate::dispatch::error::DispatchError;
use crate::dispatch::ports::CallbackSink;
use crate::transport::Headers;
use async_trait::async_trait;
use std::time::Duration;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const READ_TIMEOUT: Duration = Duration::from_secs(10);
const WRITE_TIMEOUT: Duration = Duration::from_secs(10);

/// Delivers encoded events by POSTing them to the callback address.
///
/// The blocking HTTP call runs on the blocking thread pool so the async
/// dispatcher is never stalled by a slow endpoint.
#[derive(Debug, Clone)]
pub struct HttpCallbackSink {
    agent: ureq::Agent,
}

impl HttpCallbackSink {
    /// Creates a sink with the default bounded timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(CONNECT_TIMEOUT)
                .timeout_read(READ_TIMEOUT)
                .timeout_write(WRITE_TIMEOUT)
                .build(),
        }
    }
}

impl Default for HttpCallbackSink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CallbackSink for HttpCallbackSink {
    async fn deliver(
        &self,
        url: &str,
        body: &[u8],
        headers: &Headers,
    ) -> Result<(), DispatchError> {
        let agent = self.agent.clone();
        let target = url.to_owned();
        let payload = body.to_vec();
        let header_set = headers.clone();

        tokio::task::spawn_blocking(move || post_encoded(&agent, &target, &payload, &header_set))
            .await
            .map_err(|err| DispatchError::background(err.to_string()))?
    }
}

fn post_encoded(
    agent: &ureq::Agent,
    url: &str,
    body: &[u8],
    headers: &Headers,
) -> Result<(), DispatchError> {
    let mut request = agent.post(url);
    for (name, values) in headers.iter() {
        for value in values {
            request = request.set(name, value);
        }
    }

    match request.send_bytes(body) {
        Ok(_) => Ok(()),
        Err(ureq::Error::Status(status, _)) => Err(DispatchError::Status {
            url: url.to_owned(),
            status,
        }),
        Err(ureq::Error::Transport(transport)) => {
            Err(DispatchError::transport(url, transport.to_string()))
        }
    }
}
