//! Single-request URL probing for official UK legal websites.
//!
//! A probe is one HTTP request against a constructed URL, used to check
//! whether a judgment or legislation page actually exists before handing
//! the link to the user. Every probe resolves to a [`ProbeOutcome`]; network
//! failure and timeout are outcomes like any other, never errors, so callers
//! can always render a text answer.
//!
//! # Probe profiles
//!
//! Two profiles are in use, matching the sites they target:
//!
//! * [`Prober::head`]: a `HEAD` request with a 10 second timeout. BAILII
//!   serves large HTML pages, so we only ask whether the page is there.
//! * [`Prober::get`]: a `GET` request with a 30 second timeout, used for
//!   legislation.gov.uk and caselaw.nationalarchives.gov.uk, both of which
//!   answer `HEAD` unreliably behind their caches.
//!
//! The `GET` profile follows redirects and classifies the final response;
//! the `HEAD` profile does not follow, so a redirect from BAILII shows up
//! as its own status.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{StatusCode, redirect};
use thiserror::Error;
use tracing::info;

const HEAD_TIMEOUT: Duration = Duration::from_secs(10);
const GET_TIMEOUT: Duration = Duration::from_secs(30);

/// Sent on every probe so site operators can identify the traffic.
pub const USER_AGENT: &str = concat!(
    "lexlink/",
    env!("CARGO_PKG_VERSION"),
    " (legal research tool)"
);

/// BAILII serves a bare error page to clients that do not accept HTML.
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("HTTP client construction failed: {0}")]
    Client(#[from] reqwest::Error),
}

/// What a single probe established about a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered 200; the page exists.
    Confirmed,
    /// The server answered 404; the page does not exist at this path.
    NotFound,
    /// The server answered with some other status code.
    OtherStatus(u16),
    /// The request did not complete within the profile's deadline.
    TimedOut,
    /// The request failed before a response arrived (DNS, TLS, refused...).
    Failed(String),
}

impl ProbeOutcome {
    /// Classify the final status of a completed request.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::OK => ProbeOutcome::Confirmed,
            StatusCode::NOT_FOUND => ProbeOutcome::NotFound,
            other => ProbeOutcome::OtherStatus(other.as_u16()),
        }
    }

    /// Classify a request that never produced a response.
    pub fn from_error(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeOutcome::TimedOut
        } else {
            ProbeOutcome::Failed(err.to_string())
        }
    }
}

/// HTTP client wrapper that issues at most one request per lookup.
///
/// Two clients because redirect policy is per-client in reqwest: the `GET`
/// profile follows up to 10 redirects, the `HEAD` profile none.
#[derive(Clone)]
pub struct Prober {
    head_client: reqwest::Client,
    get_client: reqwest::Client,
}

impl Prober {
    /// Build a prober with the shared configuration: lexlink user agent
    /// and HTML accept header on both clients.
    pub fn new() -> Result<Self, ProbeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
        let head_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers.clone())
            .redirect(redirect::Policy::none())
            .build()?;
        let get_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .redirect(redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            head_client,
            get_client,
        })
    }

    /// `HEAD` probe, 10 second deadline, no redirects.
    pub async fn head(&self, url: &str) -> ProbeOutcome {
        info!(url = %url, "probing with HEAD");
        match self
            .head_client
            .head(url)
            .timeout(HEAD_TIMEOUT)
            .send()
            .await
        {
            Ok(resp) => ProbeOutcome::from_status(resp.status()),
            Err(err) => ProbeOutcome::from_error(&err),
        }
    }

    /// `GET` probe, 30 second deadline, redirects followed.
    pub async fn get(&self, url: &str) -> ProbeOutcome {
        info!(url = %url, "probing with GET");
        match self.get_client.get(url).timeout(GET_TIMEOUT).send().await {
            Ok(resp) => ProbeOutcome::from_status(resp.status()),
            Err(err) => ProbeOutcome::from_error(&err),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_status(status: u16) -> reqwest::Response {
        let inner = http::Response::builder()
            .status(status)
            .body("")
            .unwrap();
        reqwest::Response::from(inner)
    }

    #[test]
    fn ok_is_confirmed() {
        let resp = response_with_status(200);
        assert_eq!(
            ProbeOutcome::from_status(resp.status()),
            ProbeOutcome::Confirmed
        );
    }

    #[test]
    fn not_found_is_its_own_outcome() {
        let resp = response_with_status(404);
        assert_eq!(
            ProbeOutcome::from_status(resp.status()),
            ProbeOutcome::NotFound
        );
    }

    #[test]
    fn other_statuses_keep_their_code() {
        for code in [301u16, 403, 429, 500, 503] {
            let resp = response_with_status(code);
            assert_eq!(
                ProbeOutcome::from_status(resp.status()),
                ProbeOutcome::OtherStatus(code)
            );
        }
    }

    #[test]
    fn only_exact_200_confirms() {
        // 204 and friends exist on these sites behind misconfigured caches;
        // a link is only handed out as verified on a plain 200.
        let resp = response_with_status(204);
        assert_eq!(
            ProbeOutcome::from_status(resp.status()),
            ProbeOutcome::OtherStatus(204)
        );
    }

    #[test]
    fn prober_builds() {
        assert!(Prober::new().is_ok());
    }

    #[test]
    fn user_agent_names_the_tool() {
        assert!(USER_AGENT.starts_with("lexlink/"));
        assert!(USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
