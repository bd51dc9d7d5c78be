use crate::error::{IngestError, Result};
use crate::fetch::client::HttpClient;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};

/// An [`HttpClient`] wrapper that sends an API key in a request header.
///
/// Used for dataset URLs behind token auth; the header value is validated
/// once at construction so sending never fails on it.
pub struct ApiKey<C> {
    inner: C,
    header_name: HeaderName,
    value: HeaderValue,
}

impl<C> ApiKey<C> {
    /// Sends `Authorization: Bearer <key>`.
    pub fn bearer(inner: C, key: &str) -> Result<Self> {
        let mut value = HeaderValue::from_str(&format!("Bearer {key}"))
            .map_err(|e| IngestError::InvalidApiKey(e.to_string()))?;
        value.set_sensitive(true);
        Ok(Self {
            inner,
            header_name: AUTHORIZATION,
            value,
        })
    }

    pub fn header_name(&self) -> &HeaderName {
        &self.header_name
    }
}

#[async_trait]
impl<C: HttpClient> HttpClient for ApiKey<C> {
    async fn execute(&self, mut req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        req.headers_mut()
            .insert(self.header_name.clone(), self.value.clone());
        self.inner.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::BasicClient;

    #[test]
    fn test_bearer_uses_authorization_header() {
        let client = ApiKey::bearer(BasicClient::default(), "secret").unwrap();
        assert_eq!(client.header_name(), &AUTHORIZATION);
        assert!(client.value.is_sensitive());
        assert_eq!(client.value.to_str().unwrap(), "Bearer secret");
    }

    #[test]
    fn test_bearer_rejects_control_characters() {
        let result = ApiKey::bearer(BasicClient::default(), "bad\nkey");
        assert!(matches!(result, Err(IngestError::InvalidApiKey(_))));
    }
}
