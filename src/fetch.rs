use log::{debug, warn};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

const TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("server responded with {0}")]
    Status(StatusCode),
}

type Result<T> = std::result::Result<T, Error>;

/// Retrieves the raw markup behind a URL.
///
/// Failures of any kind are reported as `None`; callers never branch on the
/// reason.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Option<String>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("webclip/", env!("CARGO_PKG_VERSION")))
            .timeout(TIMEOUT)
            .build()?;

        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Like [`Fetch::fetch`] but keeps the failure reason. An empty body is
    /// `Ok(None)`.
    pub fn try_fetch(&self, url: &str) -> Result<Option<String>> {
        let url = Url::parse(url)?;
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.text()?;
        debug!("fetched {} bytes", body.len());
        Ok(Some(body).filter(|body| !body.is_empty()))
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Option<String> {
        match self.try_fetch(url) {
            Ok(body) => body,
            Err(err) => {
                warn!("failed to fetch {url}: {err}");
                None
            }
        }
    }
}

/// A fetcher that could not be set up fetches nothing.
impl<T: Fetch> Fetch for Option<T> {
    fn fetch(&self, url: &str) -> Option<String> {
        self.as_ref()?.fetch(url)
    }
}
