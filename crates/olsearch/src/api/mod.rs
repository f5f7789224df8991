use log::trace;
use serde::de::DeserializeOwned;

pub(crate) mod open_library;

pub trait Client
where
    Self: Default,
{
    fn get_text(&self, url: &str) -> Result<String, Error>;
    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned;
}

impl Client for reqwest::blocking::Client {
    fn get_text(&self, url: &str) -> Result<String, Error> {
        let text = send(self, url)?
            .text()
            .map_err(|e| Error::wrap(ErrorKind::Deserialize, e))?;

        if text.is_empty() {
            Err(Error::new(ErrorKind::NoValue, "Response text is empty"))
        } else {
            Ok(text)
        }
    }

    fn get_json<T>(&self, url: &str) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        send(self, url)
            .and_then(|r| r.json().map_err(|e| Error::wrap(ErrorKind::Deserialize, e)))
    }
}

fn send(
    client: &reqwest::blocking::Client,
    url: &str,
) -> Result<reqwest::blocking::Response, Error> {
    trace!("GET {url}");
    let resp = client
        .get(url)
        .send()
        .map_err(|e| Error::wrap(ErrorKind::IO, e))?;

    trace!("Response status: {}", resp.status());
    resp.error_for_status()
        .map_err(|e| Error::wrap(ErrorKind::Status, e))
}

#[cfg(test)]
pub(crate) use test::{
    assert_url, impl_text_producer, request_count, MockClient, NetworkErrorProducer, Producer,
    URL_SINK,
};

use crate::{Error, ErrorKind};
