//! Authenticated session context for the banking API.

use anyhow::{bail, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One authenticated connection to the service: base URL, bearer token, and
/// the underlying HTTP client. Created by [`Session::login`] and passed
/// explicitly to every endpoint wrapper.
#[derive(Debug, Clone)]
pub struct Session {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

impl Session {
    /// Exchange credentials for a token via `POST /auth/login`.
    pub async fn login(base_url: &str, email: &str, password: &str) -> Result<Self> {
        #[derive(Serialize)]
        struct Req<'a> {
            email: &'a str,
            #[serde(rename = "motDePasse")]
            mot_de_passe: &'a str,
        }

        #[derive(Deserialize)]
        struct Resp {
            token: String,
        }

        let http = reqwest::Client::new();
        let url = format!("{}/auth/login", base_url.trim_end_matches('/'));
        debug!(%url, "logging in");

        let resp = http
            .post(&url)
            .json(&Req {
                email,
                mot_de_passe: password,
            })
            .send()
            .await
            .context("login request")?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("login failed: {status} {txt}");
        }

        let out: Resp = resp.json().await.context("parse login response")?;
        Ok(Self::with_token(base_url, out.token))
    }

    /// Rebuild a session from a previously stored token.
    pub fn with_token(base_url: &str, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.token))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// `GET path` and deserialize the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .with_context(|| format!("GET {path}"))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("GET {path} failed: {status} {txt}");
        }
        resp.json()
            .await
            .with_context(|| format!("parse response of GET {path}"))
    }

    /// `PUT path` with a JSON body, discarding the response body.
    pub(crate) async fn put_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.url(path);
        debug!(%url, "PUT");
        let resp = self
            .http
            .put(&url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("PUT {path}"))?;

        let status = resp.status();
        if !status.is_success() {
            let txt = resp.text().await.unwrap_or_default();
            bail!("PUT {path} failed: {status} {txt}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let s = Session::with_token("http://localhost:8080/", "tok");
        assert_eq!(s.url("/api/comptes/me"), "http://localhost:8080/api/comptes/me");

        let s = Session::with_token("http://localhost:8080", "tok");
        assert_eq!(s.url("/api/comptes/me"), "http://localhost:8080/api/comptes/me");
    }

    #[test]
    fn test_auth_headers_carry_bearer_token() {
        let s = Session::with_token("http://localhost:8080", "abc123");
        let headers = s.auth_headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc123");
    }
}
