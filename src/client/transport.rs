//! HTTP transport — authenticated GETs returning decoded JSON.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, AUTHORIZATION};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

use super::credential::Credential;
use crate::error::{DevOpsError, Result};

/// Longest slice of an error body kept in [`DevOpsError::Status`].
const MAX_ERROR_BODY: usize = 512;

/// Something that can GET a path relative to the organization URL.
///
/// `segments` are single path segments; implementations encode each one so
/// that `/`, `?` or `#` inside an id stays part of that segment. `query` carries endpoint-specific parameters; implementations add the
/// `api-version` parameter themselves.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Value>;
}

/// Default headers carrying `credential`.
pub fn auth_headers(credential: &Credential) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, credential.header_value().clone());
    headers
}

/// [`Transport`] backed by `reqwest`, with the credential baked into the
/// client's default headers.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_version: String,
}

impl HttpTransport {
    pub fn new(
        organization_url: &str,
        api_version: impl Into<String>,
        credential: &Credential,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("devops-graph/", env!("CARGO_PKG_VERSION")))
            .default_headers(auth_headers(credential));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Self::from_client(builder.build()?, organization_url, api_version)
    }

    /// Use a preconfigured client. The client must already carry the
    /// `Authorization` header (see [`auth_headers`]).
    pub fn from_client(
        client: reqwest::Client,
        organization_url: &str,
        api_version: impl Into<String>,
    ) -> Result<Self> {
        let base_url = Url::parse(organization_url)?;
        if base_url.cannot_be_a_base() {
            return Err(DevOpsError::NotABaseUrl(organization_url.to_string()));
        }

        Ok(Self {
            client,
            base_url,
            api_version: api_version.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for `segments`, without query parameters.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DevOpsError::NotABaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Value> {
        let url = self.url_for(segments)?;
        debug!(%url, ?query, "GET");

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .query(&[("api-version", self.api_version.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(%url, error = %e, "upstream request failed");
                DevOpsError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().await.unwrap_or_default();
            if body.len() > MAX_ERROR_BODY {
                let mut cut = MAX_ERROR_BODY;
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                body.truncate(cut);
            }
            warn!(%url, status = status.as_u16(), "upstream returned error status");
            return Err(DevOpsError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let body = response.text().await?;
        trace!(%url, %body, "upstream response");
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(org: &str) -> HttpTransport {
        let credential = Credential::from_token("token").unwrap();
        HttpTransport::new(org, "5.1", &credential, None).unwrap()
    }

    #[test]
    fn test_url_keeps_organization_segment() {
        let transport = transport("https://dev.azure.com/contoso");
        let url = transport.url_for(&["_apis", "projects"]).unwrap();
        assert_eq!(url.as_str(), "https://dev.azure.com/contoso/_apis/projects");
    }

    #[test]
    fn test_url_on_host_root() {
        let transport = transport("https://contoso.visualstudio.com");
        let url = transport
            .url_for(&["p1", "_apis", "git", "repositories", "r1", "refs"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://contoso.visualstudio.com/p1/_apis/git/repositories/r1/refs"
        );
    }

    #[test]
    fn test_trailing_slash_on_organization() {
        let transport = transport("https://dev.azure.com/contoso/");
        let url = transport.url_for(&["_apis", "projects"]).unwrap();
        assert_eq!(url.as_str(), "https://dev.azure.com/contoso/_apis/projects");
    }

    #[test]
    fn test_reserved_characters_stay_in_segment() {
        let transport = transport("https://dev.azure.com/contoso");
        let url = transport
            .url_for(&["_apis", "projects", "team/a#b?c=1%"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://dev.azure.com/contoso/_apis/projects/team%2Fa%23b%3Fc=1%25"
        );
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_opaque_organization_url_rejected() {
        let credential = Credential::from_token("token").unwrap();
        let result = HttpTransport::new("mailto:ops@example.com", "5.1", &credential, None);
        assert!(matches!(result, Err(DevOpsError::NotABaseUrl(_))));
    }

    #[test]
    fn test_invalid_organization_url() {
        let credential = Credential::from_token("token").unwrap();
        let result = HttpTransport::new("not a url", "5.1", &credential, None);
        assert!(matches!(result, Err(DevOpsError::InvalidUrl(_))));
    }
}
