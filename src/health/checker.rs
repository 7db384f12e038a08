// src/health/checker.rs
use crate::config::{CheckRequest, Config};
use crate::health::{classify, CheckError, CheckResult, CheckState};
use crate::report::{self, Reporter};
use reqwest::{redirect, Client, Method};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::time::Duration;
use tracing::{debug, info, info_span, warn, Instrument};
use url::Url;
use uuid::Uuid;

pub struct LivenessChecker {
    client: Client,
    reporter: Arc<dyn Reporter>,
}

/// A response whose body has been read to end-of-data.
struct FetchedResponse {
    status_code: u16,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl LivenessChecker {
    pub fn new(timeout: Option<Duration>, reporter: Arc<dyn Reporter>) -> Result<Self, CheckError> {
        let mut builder = Client::builder().redirect(redirect::Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(CheckError::Client)?;

        Ok(Self { client, reporter })
    }

    pub fn from_config(config: &Config, reporter: Arc<dyn Reporter>) -> Result<Self, CheckError> {
        Self::new(config.timeout(), reporter)
    }

    /// Run one check against `request` and report it.
    ///
    /// Never fails: transport problems come back as `CheckResult::Failure`.
    pub async fn check(&self, request: &CheckRequest) -> CheckResult {
        let check_id = Uuid::new_v4();
        let span = info_span!("liveness_check", %check_id, target = %request);

        let (result, _state) = self.run(request).instrument(span).await;
        result
    }

    /// Drive one check to a terminal state and return both.
    pub(crate) async fn run(&self, request: &CheckRequest) -> (CheckResult, CheckState) {
        self.reporter.emit(&report::startup_line(request)).await;

        let mut state = CheckState::Idle;
        let start = std::time::Instant::now();

        let result = match self.fetch(request, &mut state).await {
            Ok(response) => {
                state.advance(CheckState::Complete);
                self.complete(response, start.elapsed().as_millis() as u64)
                    .await
            }
            Err(e) => {
                state.advance(CheckState::Errored);
                let reason = e.to_string();
                warn!("Liveness check failed: {}", reason);
                self.reporter.emit(&report::error_line(&reason)).await;
                CheckResult::Failure { reason }
            }
        };

        (result, state)
    }

    async fn fetch(
        &self,
        request: &CheckRequest,
        state: &mut CheckState,
    ) -> Result<FetchedResponse, CheckError> {
        // Building the request counts as connecting
        state.advance(CheckState::Connecting);

        let raw_url = request.url();
        let url = Url::parse(&raw_url).map_err(|source| CheckError::InvalidTarget {
            url: raw_url.clone(),
            source,
        })?;
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| CheckError::InvalidMethod(request.method.clone()))?;

        let mut response = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(CheckError::from_send)?;

        state.advance(CheckState::Receiving);
        let status_code = response.status().as_u16();
        let headers = collect_headers(response.headers());

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(CheckError::from_body)? {
            debug!("Received {} byte chunk", chunk.len());
            body.extend_from_slice(&chunk);
        }

        Ok(FetchedResponse {
            status_code,
            headers,
            body,
        })
    }

    async fn complete(&self, response: FetchedResponse, response_time_ms: u64) -> CheckResult {
        let body_length = response.body.len();
        let classification = classify(&String::from_utf8_lossy(&response.body));

        info!(
            "Liveness check complete: HTTP {}, {} bytes, {} in {}ms",
            response.status_code, body_length, classification, response_time_ms
        );

        self.reporter
            .emit(&report::status_line(response.status_code))
            .await;
        self.reporter
            .emit(&report::headers_block(&response.headers))
            .await;
        self.reporter
            .emit(&report::body_length_line(body_length))
            .await;
        self.reporter
            .emit(report::verdict_line(classification))
            .await;

        CheckResult::Success {
            status_code: response.status_code,
            headers: response.headers,
            body_length,
            classification,
        }
    }
}

/// Flatten a header map; repeated names are joined with ", ".
fn collect_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, String> {
    let mut collected: HashMap<String, String> = HashMap::new();

    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }

    collected
}
