//! `reqwest`-backed implementation of [`ListingsBackend`].

use crate::api::backend::ListingsBackend;
use crate::domain::error::{
    ListingsError, Result, DELETE_SUBSCRIPTION_FAILED, FETCH_LISTINGS_FAILED, FETCH_LISTING_FAILED,
    FETCH_SUBSCRIPTIONS_FAILED, SUBSCRIBE_FAILED,
};
use crate::domain::{Listing, QueryParams, Subscription, SubscriptionPayload};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// HTTP client for the listings service.
///
/// All endpoint paths are resolved against `base_url`, which is normalized to
/// end with `/` so that a base such as `https://host/api` keeps its last
/// path segment.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: Url,
    client: Client,
}

impl HttpBackend {
    /// Builds a backend for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Url`] if `base_url` does not parse, or
    /// [`ListingsError::Config`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ListingsError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { base_url, client })
    }

    /// Resolves an endpoint path such as `listings/` against the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ListingsError::Url`] if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Fails with [`ListingsError::Status`] unless the response is 2xx.
    fn check_status(response: Response, context: &'static str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            tracing::debug!(status = status.as_u16(), context, "non-success response");
            Err(ListingsError::Status {
                context,
                status: status.as_u16(),
            })
        }
    }

    /// Reads the body and decodes it as JSON.
    async fn decode<T: DeserializeOwned>(response: Response, context: &'static str) -> Result<T> {
        let bytes = response
            .bytes()
            .await
            .map_err(|source| ListingsError::Transport { context, source })?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &'static str) -> Result<T> {
        tracing::debug!(url = %url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ListingsError::Transport { context, source })?;
        let response = Self::check_status(response, context)?;
        Self::decode(response, context).await
    }
}

#[async_trait]
impl ListingsBackend for HttpBackend {
    async fn fetch_listings(&self, query: &QueryParams) -> Result<Vec<Listing>> {
        let mut url = self.endpoint("listings/")?;
        url.set_query(Some(&query.to_query_string()));
        self.get_json(url, FETCH_LISTINGS_FAILED).await
    }

    async fn fetch_listing(&self, id: i64) -> Result<Listing> {
        let url = self.endpoint(&format!("listings/{id}"))?;
        self.get_json(url, FETCH_LISTING_FAILED).await
    }

    async fn fetch_subscriptions(&self) -> Result<Vec<Subscription>> {
        let url = self.endpoint("subscriptions/")?;
        self.get_json(url, FETCH_SUBSCRIPTIONS_FAILED).await
    }

    async fn create_subscription(&self, payload: &SubscriptionPayload) -> Result<Subscription> {
        let url = self.endpoint("subscriptions/")?;
        tracing::debug!(url = %url, email = %payload.email, "POST");

        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|source| ListingsError::Transport {
                context: SUBSCRIBE_FAILED,
                source,
            })?;
        let response = Self::check_status(response, SUBSCRIBE_FAILED)?;
        Self::decode(response, SUBSCRIBE_FAILED).await
    }

    async fn delete_subscription(&self, id: i64) -> Result<()> {
        let url = self.endpoint(&format!("subscriptions/{id}"))?;
        tracing::debug!(url = %url, "DELETE");

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(|source| ListingsError::Transport {
                context: DELETE_SUBSCRIPTION_FAILED,
                source,
            })?;
        Self::check_status(response, DELETE_SUBSCRIPTION_FAILED)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FilterCriteria;

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn endpoints_resolve_against_root_base() {
        let api = backend("http://localhost:8000");
        assert_eq!(
            api.endpoint("listings/").unwrap().as_str(),
            "http://localhost:8000/listings/"
        );
        assert_eq!(
            api.endpoint("subscriptions/3").unwrap().as_str(),
            "http://localhost:8000/subscriptions/3"
        );
    }

    #[test]
    fn base_path_without_trailing_slash_is_kept() {
        let api = backend("https://example.ro/api");
        assert_eq!(
            api.endpoint("listings/").unwrap().as_str(),
            "https://example.ro/api/listings/"
        );
    }

    #[test]
    fn listing_query_is_appended_verbatim() {
        let api = backend("http://localhost:8000/");
        let mut url = api.endpoint("listings/").unwrap();
        let filters = FilterCriteria {
            status_active: true,
            ..Default::default()
        };
        url.set_query(Some(&filters.build_query_params().to_query_string()));

        assert_eq!(
            url.as_str(),
            "http://localhost:8000/listings/?auction_status=Licitatie+in+desfasurare&page=1&page_size=12"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            HttpBackend::new("not a url", Duration::from_secs(1)),
            Err(ListingsError::Url(_))
        ));
    }
}
