//! The single-retry revalidation protocol.

use std::sync::Arc;

use thiserror::Error;

use crate::config::GatewayConfig;
use crate::navigate::LoginNavigator;
use crate::request::ApiRequest;
use crate::response::GatewayResponse;
use crate::session::SessionHandle;
use crate::transport::{Transport, TransportError};

#[derive(Debug, Error)]
pub enum GatewayError {
    /// The session could not be revalidated; the client is being
    /// redirected to login and the in-flight call is abandoned.
    #[error("session expired")]
    SessionExpired,

    /// Non-auth transport failure, passed through to the caller.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Session-aware request gateway.
///
/// Protocol, per call:
/// 1. Issue the request (credentials ride on the transport).
/// 2. On 401/403, probe the session endpoint exactly once.
///    - Probe 2xx: replay the **original** descriptor once and return
///      whatever the replay yields.
///    - Anything else (non-2xx or the probe itself failing to complete):
///      redirect to login and fail with [`GatewayError::SessionExpired`].
/// 3. Any other status is returned unchanged.
///
/// Concurrent calls each run this protocol independently; coalescing
/// simultaneous probes is deliberately not attempted.
pub struct SessionGateway<T: Transport> {
    transport: T,
    navigator: Arc<dyn LoginNavigator>,
    session: SessionHandle,
    config: GatewayConfig,
}

impl<T: Transport> SessionGateway<T> {
    pub fn new(transport: T, navigator: Arc<dyn LoginNavigator>, config: GatewayConfig) -> Self {
        Self {
            transport,
            navigator,
            session: SessionHandle::new(),
            config,
        }
    }

    /// The client's current belief about session validity.
    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Execute a call under the revalidation protocol.
    pub async fn execute(&self, request: &ApiRequest) -> Result<GatewayResponse, GatewayError> {
        let first = self.transport.send(request).await?;

        if !first.is_auth_failure() {
            if first.is_success() {
                self.session.confirm();
            }
            return Ok(first);
        }

        self.session.invalidate();
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = first.status,
            "auth failure observed, revalidating session"
        );

        // Exactly one probe, completed before any replay is issued.
        if self.revalidate().await {
            self.session.confirm();
            let retry = self.transport.send(request).await?;
            return Ok(retry);
        }

        tracing::warn!(
            path = %request.path,
            "session could not be revalidated, redirecting to login"
        );
        self.navigator.redirect_to_login(&self.config.login_path);
        Err(GatewayError::SessionExpired)
    }

    /// Probe the session endpoint. A probe that cannot complete counts as
    /// a failed validation: the session cannot be confirmed.
    async fn revalidate(&self) -> bool {
        let probe = ApiRequest::get(self.config.session_probe_path.clone());
        match self.transport.send(&probe).await {
            Ok(response) => response.is_success(),
            Err(err) => {
                tracing::warn!(error = %err, "session probe failed to complete");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::request::Method;

    /// Transport that pops scripted outcomes and records every request.
    struct FakeTransport {
        script: Mutex<VecDeque<Result<GatewayResponse, TransportError>>>,
        calls: Mutex<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        fn scripted(
            outcomes: impl IntoIterator<Item = Result<GatewayResponse, TransportError>>,
        ) -> Self {
            Self {
                script: Mutex::new(outcomes.into_iter().collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<ApiRequest> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: &ApiRequest) -> Result<GatewayResponse, TransportError> {
            self.calls.lock().unwrap().push(request.clone());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("transport called more times than scripted")
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        redirects: AtomicUsize,
        target: Mutex<Option<String>>,
    }

    impl LoginNavigator for RecordingNavigator {
        fn redirect_to_login(&self, target: &str) {
            self.redirects.fetch_add(1, Ordering::SeqCst);
            *self.target.lock().unwrap() = Some(target.to_string());
        }
    }

    fn gateway(
        transport: FakeTransport,
    ) -> (SessionGateway<FakeTransport>, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let gateway = SessionGateway::new(
            transport,
            navigator.clone(),
            GatewayConfig::new("https://admin.example.com"),
        );
        (gateway, navigator)
    }

    #[tokio::test]
    async fn success_passes_through_without_a_probe() {
        let transport = FakeTransport::scripted([Ok(GatewayResponse::new(200)
            .with_body(br#"{"items": []}"#.to_vec()))]);
        let (gateway, navigator) = gateway(transport);

        let response = gateway.execute(&ApiRequest::get("/users")).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(gateway.transport.calls().len(), 1);
        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 0);
        assert!(gateway.session().is_valid());
    }

    #[tokio::test]
    async fn non_auth_failures_pass_through_unchanged() {
        let transport = FakeTransport::scripted([Ok(GatewayResponse::new(500))]);
        let (gateway, navigator) = gateway(transport);

        let response = gateway.execute(&ApiRequest::get("/users")).await.unwrap();

        assert_eq!(response.status, 500);
        assert_eq!(gateway.transport.calls().len(), 1);
        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn retries_the_original_request_after_successful_revalidation() {
        let original = ApiRequest::post("/users", json!({ "email": "a@example.com" }))
            .with_header("x-request-id", "abc");

        let transport = FakeTransport::scripted([
            Ok(GatewayResponse::new(401)),
            Ok(GatewayResponse::new(204)), // probe
            Ok(GatewayResponse::new(201).with_body(br#"{"id": 1}"#.to_vec())),
        ]);
        let (gateway, navigator) = gateway(transport);

        let response = gateway.execute(&original).await.unwrap();
        assert_eq!(response.status, 201);

        let calls = gateway.transport.calls();
        assert_eq!(calls.len(), 3);

        // Exactly one probe, and it completed before the replay.
        assert_eq!(calls[1].method, Method::Get);
        assert_eq!(calls[1].path, "/auth/session");

        // The replay is the original descriptor, byte for byte.
        assert_eq!(calls[2], original);

        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 0);
        assert!(gateway.session().is_valid());
    }

    #[tokio::test]
    async fn retry_outcome_is_final_even_when_it_fails() {
        let transport = FakeTransport::scripted([
            Ok(GatewayResponse::new(401)),
            Ok(GatewayResponse::new(200)), // probe
            Ok(GatewayResponse::new(401)), // replay still rejected
        ]);
        let (gateway, _) = gateway(transport);

        // No second revalidation round; the replay's outcome is returned.
        let response = gateway.execute(&ApiRequest::get("/users")).await.unwrap();
        assert_eq!(response.status, 401);
        assert_eq!(gateway.transport.calls().len(), 3);
    }

    #[tokio::test]
    async fn failed_revalidation_redirects_and_never_retries() {
        let transport = FakeTransport::scripted([
            Ok(GatewayResponse::new(403)),
            Ok(GatewayResponse::new(401)), // probe rejected
        ]);
        let (gateway, navigator) = gateway(transport);

        let err = gateway
            .execute(&ApiRequest::delete("/users/1"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::SessionExpired));

        // Original was never replayed.
        let calls = gateway.transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[1].path, "/auth/session");

        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 1);
        assert_eq!(
            navigator.target.lock().unwrap().as_deref(),
            Some("/login")
        );
        assert!(!gateway.session().is_valid());
    }

    #[tokio::test]
    async fn probe_transport_failure_counts_as_failed_validation() {
        let transport = FakeTransport::scripted([
            Ok(GatewayResponse::new(401)),
            Err(TransportError::Network("connection reset".to_string())),
        ]);
        let (gateway, navigator) = gateway(transport);

        let err = gateway.execute(&ApiRequest::get("/users")).await.unwrap_err();
        assert!(matches!(err, GatewayError::SessionExpired));
        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_failure_of_the_original_call_passes_through() {
        let transport = FakeTransport::scripted([Err(TransportError::Network(
            "connection refused".to_string(),
        ))]);
        let (gateway, navigator) = gateway(transport);

        let err = gateway.execute(&ApiRequest::get("/users")).await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(_)));
        assert_eq!(navigator.redirects.load(Ordering::SeqCst), 0);
    }
}
