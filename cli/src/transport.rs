//! reqwest-backed `Transport`.

use std::future::Future;

use todo_sync_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};

/// Build the [`reqwest::Client`] shared by every request of a session.
///
/// No timeout is configured: a request that never answers stays pending.
pub fn build_http_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .user_agent(concat!("todo-sync/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))
}

/// Executes core requests over HTTP with reqwest.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ApiError> {
        Ok(Self::with_client(build_http_client()?))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        send(self.client.clone(), request)
    }
}

async fn send(client: reqwest::Client, request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let mut builder = client.request(method(request.method), &request.path);
    for (name, value) in request.headers {
        builder = builder.header(name, value);
    }
    if let Some(body) = request.body {
        builder = builder.body(body);
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_http_client_succeeds() {
        assert!(build_http_client().is_ok());
    }

    #[test]
    fn methods_map_one_to_one() {
        assert_eq!(method(HttpMethod::Get), reqwest::Method::GET);
        assert_eq!(method(HttpMethod::Post), reqwest::Method::POST);
        assert_eq!(method(HttpMethod::Put), reqwest::Method::PUT);
        assert_eq!(method(HttpMethod::Delete), reqwest::Method::DELETE);
    }
}
