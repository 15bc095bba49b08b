//! Transport client: executes an endpoint and classifies the reply.
//!
//! # Design
//! `NetworkClient` owns a `Transport` and nothing else, so calls share no
//! state beyond whatever pooling the transport does internally. Both fetch
//! shapes run the same prefix: build the request, send it, require a status
//! code, classify it. `fetch` then decodes the body; `fetch_empty` stops after
//! classification.

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::request::build_request;
use crate::transport::Transport;

/// Map an HTTP status code to success or a failure kind.
pub fn classify_status(status: u16) -> Result<(), ApiError> {
    match status {
        200..=299 => Ok(()),
        400..=499 => Err(ApiError::ClientError(status)),
        500..=599 => Err(ApiError::ServerError(status)),
        _ => Err(ApiError::UnknownError(status)),
    }
}

/// Executes endpoints over a `Transport`.
#[derive(Debug, Clone)]
pub struct NetworkClient<T> {
    transport: T,
}

impl<T: Transport> NetworkClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute `endpoint` and decode its JSON body into `R`.
    ///
    /// Any decode failure is reported as `DecodingFailed`; the underlying
    /// serde error is only logged.
    #[instrument(name = "fetch", skip_all, fields(method = %endpoint.method(), path = %endpoint.path()))]
    pub async fn fetch<R, E>(&self, endpoint: &E) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        E: Endpoint + ?Sized,
    {
        let response = self.execute(endpoint).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            debug!(error = %e, body_len = response.body.len(), "response body did not decode");
            ApiError::DecodingFailed
        })
    }

    /// Execute `endpoint` and only validate its status.
    #[instrument(name = "fetch_empty", skip_all, fields(method = %endpoint.method(), path = %endpoint.path()))]
    pub async fn fetch_empty<E>(&self, endpoint: &E) -> Result<(), ApiError>
    where
        E: Endpoint + ?Sized,
    {
        self.execute(endpoint).await.map(|_| ())
    }

    async fn execute<E>(&self, endpoint: &E) -> Result<HttpResponse, ApiError>
    where
        E: Endpoint + ?Sized,
    {
        let request = build_request(endpoint)?;
        debug!(url = %request.url, "sending request");

        let response = self.transport.execute(request).await?;
        let Some(status) = response.status else {
            warn!("response carried no status code");
            return Err(ApiError::InvalidResponse);
        };
        if let Err(err) = classify_status(status) {
            warn!(status, "request failed");
            return Err(err);
        }
        debug!(status, "request succeeded");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::endpoint::{CreateTodoEndpoint, DeleteTodoEndpoint, SingleTodoEndpoint, TodoListEndpoint};
    use crate::http::HttpMethod;
    use crate::testing::ScriptedTransport;
    use crate::types::TodoItem;

    const BASE: &str = "http://localhost:3000";

    fn client(transport: ScriptedTransport) -> NetworkClient<Arc<ScriptedTransport>> {
        NetworkClient::new(Arc::new(transport))
    }

    #[test]
    fn status_classes() {
        for code in [200, 201, 204, 299] {
            assert_eq!(classify_status(code), Ok(()), "{code}");
        }
        for code in [400, 404, 422, 499] {
            assert_eq!(classify_status(code), Err(ApiError::ClientError(code)), "{code}");
        }
        for code in [500, 503, 599] {
            assert_eq!(classify_status(code), Err(ApiError::ServerError(code)), "{code}");
        }
        for code in [0, 100, 199, 300, 304, 399, 600, 999] {
            assert_eq!(classify_status(code), Err(ApiError::UnknownError(code)), "{code}");
        }
    }

    #[tokio::test]
    async fn fetch_decodes_body() {
        let c = client(ScriptedTransport::new().respond(
            200,
            r#"[{"userId":1,"id":1,"title":"a","completed":false}]"#,
        ));
        let todos: Vec<TodoItem> = c.fetch(&TodoListEndpoint::new(BASE)).await.unwrap();
        assert_eq!(
            todos,
            vec![TodoItem {
                owner_id: Some(1),
                id: Some(1),
                title: Some("a".to_string()),
                completed: Some(false),
            }]
        );

        let sent = c.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].url, "http://localhost:3000/todos");
    }

    #[tokio::test]
    async fn non_json_body_is_decoding_failure() {
        let c = client(ScriptedTransport::new().respond(200, "<html>oops</html>"));
        let err = c
            .fetch::<TodoItem, _>(&SingleTodoEndpoint::new(BASE, 1))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::DecodingFailed);
    }

    #[tokio::test]
    async fn wrong_shape_is_decoding_failure() {
        let c = client(ScriptedTransport::new().respond(200, r#"{"id":"not a number"}"#));
        let err = c
            .fetch::<TodoItem, _>(&SingleTodoEndpoint::new(BASE, 1))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::DecodingFailed);
    }

    #[tokio::test]
    async fn status_is_checked_before_decoding() {
        let c = client(ScriptedTransport::new().respond(500, "not json either"));
        let err = c.fetch::<Vec<TodoItem>, _>(&TodoListEndpoint::new(BASE)).await.unwrap_err();
        assert_eq!(err, ApiError::ServerError(500));
    }

    #[tokio::test]
    async fn missing_status_is_invalid_response() {
        let reply = HttpResponse {
            status: None,
            headers: Vec::new(),
            body: b"{}".to_vec(),
        };
        let c = client(ScriptedTransport::new().reply(Ok(reply.clone())).reply(Ok(reply)));
        let err = c.fetch::<TodoItem, _>(&SingleTodoEndpoint::new(BASE, 1)).await.unwrap_err();
        assert_eq!(err, ApiError::InvalidResponse);
        let err = c.fetch_empty(&DeleteTodoEndpoint::new(BASE, 1)).await.unwrap_err();
        assert_eq!(err, ApiError::InvalidResponse);
    }

    #[tokio::test]
    async fn fetch_empty_ignores_body() {
        let c = client(ScriptedTransport::new().respond(200, "definitely not json"));
        c.fetch_empty(&DeleteTodoEndpoint::new(BASE, 5)).await.unwrap();
    }

    #[tokio::test]
    async fn fetch_empty_classifies_status() {
        let c = client(
            ScriptedTransport::new()
                .respond(404, "")
                .respond(302, "")
                .respond(502, ""),
        );
        let endpoint = DeleteTodoEndpoint::new(BASE, 5);
        assert_eq!(c.fetch_empty(&endpoint).await, Err(ApiError::ClientError(404)));
        assert_eq!(c.fetch_empty(&endpoint).await, Err(ApiError::UnknownError(302)));
        assert_eq!(c.fetch_empty(&endpoint).await, Err(ApiError::ServerError(502)));
    }

    #[tokio::test]
    async fn builder_failure_never_reaches_transport() {
        let c = client(ScriptedTransport::new().respond(200, "{}"));
        let err = c
            .fetch::<TodoItem, _>(&CreateTodoEndpoint::new("::", TodoItem::draft("x")))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
        assert!(c.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let c = client(ScriptedTransport::new().reply(Err(ApiError::Transport("refused".to_string()))));
        let err = c.fetch_empty(&DeleteTodoEndpoint::new(BASE, 1)).await.unwrap_err();
        assert_eq!(err, ApiError::Transport("refused".to_string()));
    }
}
