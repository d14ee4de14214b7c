//! Request construction and execution against the resolved base URI.
//!
//! The factory owns the normalized base URI and the base query-parameter set
//! derived from the configured user. Every operation URI has the shape
//! `{base}{path}?{query}`; the query always carries the merged parameter set
//! in a deterministic order so a given input produces the same URI within one
//! process.

use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use http::Method;
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::Error;
use crate::options::{ClientOptions, OptionOverrides};

/// Redirect handling for a single request.
///
/// Reads let the transport follow the datanode redirect; the two-phase write
/// protocol surfaces the redirect response to the caller instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    Follow,
    Manual,
}

/// Builds and executes requests against one WebHDFS endpoint.
///
/// Immutable after construction; concurrent calls share it freely.
pub struct RequestFactory {
    follow: reqwest::Client,
    manual: reqwest::Client,
    base_uri: String,
    base_params: Vec<(String, String)>,
    options: ClientOptions,
}

impl RequestFactory {
    /// Resolve `overrides` against the defaults and derive the base URI.
    pub fn new(overrides: OptionOverrides) -> Result<Self, Error> {
        Self::from_options(ClientOptions::resolve(overrides))
    }

    /// Build from an already-resolved configuration.
    ///
    /// Normalizes the stored path once: exactly one trailing `/`, no leading
    /// `/`. The normalized value is used for all subsequent URIs.
    pub fn from_options(mut options: ClientOptions) -> Result<Self, Error> {
        if let Some(path) = options.path.as_mut() {
            let trimmed = path.trim_matches('/');
            *path = if trimmed.is_empty() {
                String::new()
            } else {
                format!("{trimmed}/")
            };
        }

        let base_uri = format!(
            "{}://{}:{}/{}",
            options.protocol.as_deref().unwrap_or_default(),
            options.host.as_deref().unwrap_or_default(),
            options.port.map(|p| p.to_string()).unwrap_or_default(),
            options.path.as_deref().unwrap_or_default(),
        );
        url::Url::parse(&base_uri)?;

        let base_params = options
            .user
            .iter()
            .map(|user| ("user.name".to_string(), user.clone()))
            .collect();

        let manual = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            follow: reqwest::Client::new(),
            manual,
            base_uri,
            base_params,
            options,
        })
    }

    /// `"{protocol}://{host}:{port}/{path}"`, trailing slash guaranteed.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The resolved configuration, path-normalized.
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Full request URI for `path` and `params`.
    ///
    /// Strips exactly one leading `/` from `path`; merges `params` over the
    /// base parameter set, the extras winning on key collision. Base
    /// parameters serialize first, then extras in input order, a collision
    /// replacing the base pair in place.
    pub fn build_request_uri(&self, path: Option<&str>, params: &[(&str, String)]) -> String {
        let path = path.unwrap_or("");
        let path = path.strip_prefix('/').unwrap_or(path);

        let mut merged = self.base_params.clone();
        for (key, value) in params {
            match merged.iter_mut().find(|(name, _)| name.as_str() == *key) {
                Some(pair) => pair.1 = value.clone(),
                None => merged.push((key.to_string(), value.clone())),
            }
        }

        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(merged.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish();

        format!("{}{}?{}", self.base_uri, path, query)
    }

    /// GET the built URI and decode the JSON body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
        path: Option<&str>,
    ) -> Result<T, Error> {
        self.execute_json(Method::GET, params, path).await
    }

    /// GET with `{op}` as the sole extra parameter.
    pub async fn get_op<T: DeserializeOwned>(
        &self,
        op: &str,
        path: Option<&str>,
    ) -> Result<T, Error> {
        self.get(&[("op", op.to_string())], path).await
    }

    /// PUT the built URI and decode the JSON body.
    pub async fn put<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
        path: Option<&str>,
    ) -> Result<T, Error> {
        self.execute_json(Method::PUT, params, path).await
    }

    /// DELETE the built URI and decode the JSON body.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        params: &[(&str, String)],
        path: Option<&str>,
    ) -> Result<T, Error> {
        self.execute_json(Method::DELETE, params, path).await
    }

    async fn execute_json<T: DeserializeOwned>(
        &self,
        method: Method,
        params: &[(&str, String)],
        path: Option<&str>,
    ) -> Result<T, Error> {
        let uri = self.build_request_uri(path, params);
        tracing::debug!(%method, %uri, "dispatching request");
        let response = self.follow.request(method, uri.as_str()).send().await?;
        Ok(response.json::<T>().await?)
    }

    /// Issue `method` with no body, returning the raw response so headers
    /// can be inspected. `Redirect::Manual` surfaces the redirect itself.
    pub async fn request_raw(
        &self,
        method: Method,
        params: &[(&str, String)],
        redirect: Redirect,
        path: Option<&str>,
    ) -> Result<reqwest::Response, Error> {
        let uri = self.build_request_uri(path, params);
        tracing::debug!(%method, %uri, "dispatching raw request");
        Ok(self
            .client(redirect)
            .request(method, uri.as_str())
            .send()
            .await?)
    }

    /// Issue `method` against an absolute URI, piping `body` as the payload.
    ///
    /// Used by the data-transfer phase of the write protocol; the target URI
    /// comes from redirect discovery, not from the base URI.
    pub async fn send_body(
        &self,
        method: Method,
        uri: &str,
        body: reqwest::Body,
    ) -> Result<reqwest::Response, Error> {
        tracing::debug!(%method, %uri, "transferring body");
        Ok(self.follow.request(method, uri).body(body).send().await?)
    }

    /// Lazily-consumed byte stream from a GET against the built URI.
    ///
    /// The request is not issued until the stream is first polled. The
    /// stream is bounded by the remote resource's length and is not
    /// restartable; a second read requires a new call.
    pub fn get_stream(
        &self,
        params: &[(&str, String)],
        redirect: Redirect,
        path: Option<&str>,
    ) -> impl Stream<Item = Result<Bytes, Error>> + Send + 'static {
        let uri = self.build_request_uri(path, params);
        let client = self.client(redirect).clone();

        futures::stream::once(async move {
            tracing::debug!(%uri, "opening byte stream");
            let response = client.get(uri.as_str()).send().await?;
            Ok::<_, Error>(response.bytes_stream().map_err(Error::from))
        })
        .try_flatten()
    }

    fn client(&self, redirect: Redirect) -> &reqwest::Client {
        match redirect {
            Redirect::Follow => &self.follow,
            Redirect::Manual => &self.manual,
        }
    }
}
