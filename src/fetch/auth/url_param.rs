use async_trait::async_trait;
use reqwest::Url;

use crate::error::FeedError;
use crate::fetch::client::HttpClient;

/// An [`HttpClient`] wrapper that appends an API key as a URL query parameter
/// before delegating.
///
/// `param_name` is the query parameter name (`"api_key"` for the NeoWs feed)
/// and `key` is its value. Holding the key here keeps it out of the service
/// that builds the rest of the URL.
#[derive(Debug)]
pub struct UrlParam<C> {
    pub inner: C,
    pub param_name: String,
    pub key: String,
}

#[async_trait]
impl<C: HttpClient> HttpClient for UrlParam<C> {
    async fn get_bytes(&self, url: &Url) -> Result<Vec<u8>, FeedError> {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair(&self.param_name, &self.key);
        self.inner.get_bytes(&url).await
    }
}
