//! HTTP-backed word source with a lazily filled cache.

use crate::words::domain::WordList;
use crate::words::error::WordSourceError;
use crate::words::ports::{WordSource, WordSourceResult};
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::RwLock;

/// Environment variable naming the word-list document URL.
pub const WORDS_URL_ENV: &str = "WORDS_URL";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);
const READ_TIMEOUT: Duration = Duration::from_secs(3);
const WRITE_TIMEOUT: Duration = Duration::from_secs(3);

/// Fetches the word-list document over HTTP and caches it.
///
/// The document is loaded lazily on first use and kept for the lifetime of
/// the source; a failed fetch leaves the cache empty so the next
/// invocation retries. All requests carry bounded timeouts so a slow
/// collaborator cannot tie up invocation-handling capacity.
pub struct HttpWordSource {
    agent: ureq::Agent,
    url: String,
    cache: RwLock<Option<WordList>>,
}

impl HttpWordSource {
    /// Creates a source fetching from the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(CONNECT_TIMEOUT)
                .timeout_read(READ_TIMEOUT)
                .timeout_write(WRITE_TIMEOUT)
                .build(),
            url: url.into(),
            cache: RwLock::new(None),
        }
    }

    /// Creates a source from the `WORDS_URL` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError::MissingConfiguration`] when the variable
    /// is unset or empty.
    pub fn from_env() -> WordSourceResult<Self> {
        let url = std::env::var(WORDS_URL_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(WordSourceError::MissingConfiguration)?;
        Ok(Self::new(url))
    }

    /// Returns the cached word list, fetching it on first use.
    async fn word_list(&self) -> WordSourceResult<WordList> {
        {
            let cached = self.cache.read().await;
            if let Some(list) = cached.as_ref() {
                return Ok(list.clone());
            }
        }

        let fetched = self.fetch().await?;
        log::info!("word list loaded: {} categories", fetched.len());
        let mut cached = self.cache.write().await;
        *cached = Some(fetched.clone());
        Ok(fetched)
    }

    async fn fetch(&self) -> WordSourceResult<WordList> {
        let agent = self.agent.clone();
        let url = self.url.clone();
        tokio::task::spawn_blocking(move || fetch_document(&agent, &url))
            .await
            .map_err(|err| WordSourceError::transport(self.url.clone(), err.to_string()))?
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    async fn words_for(&self, category: &str) -> WordSourceResult<Vec<String>> {
        let list = self.word_list().await?;
        Ok(list.words_for(category).to_vec())
    }
}

fn fetch_document(agent: &ureq::Agent, url: &str) -> WordSourceResult<WordList> {
    let response = agent.get(url).call().map_err(|err| match err {
        ureq::Error::Status(status, _) => WordSourceError::Status {
            url: url.to_owned(),
            status,
        },
        ureq::Error::Transport(transport) => {
            WordSourceError::transport(url, transport.to_string())
        }
    })?;

    response
        .into_json::<WordList>()
        .map_err(|err| WordSourceError::malformed(err.to_string()))
}
