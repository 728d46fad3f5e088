//! JSON over HTTP, shared by the list and toggle clients. Everything that
//! leaves this module is a [`RemoteError`].

use anyhow::Context;
use engine::RemoteError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

#[derive(Deserialize)]
struct ServerErrorBody {
    #[serde(default)]
    message: Option<String>,
}

async fn send<B: Serialize + ?Sized>(url: &str, token: Option<&str>, body: &B) -> anyhow::Result<reqwest::Response> {
    let mut request = reqwest::Client::new().post(url).json(body);
    if let Some(token) = token {
        request = request.bearer_auth(token);
    }
    request.send().await.with_context(|| format!("POST {url} failed"))
}

/// Sends `body` and checks the status. Non-2xx responses are classified
/// with whatever message the server put in the body.
pub async fn post<B: Serialize + ?Sized>(url: &str, token: Option<&str>, body: &B) -> Result<reqwest::Response, RemoteError> {
    let response = send(url, token, body)
        .await
        .map_err(|err| RemoteError::transport(format!("{err:#}")))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify_failure(status.as_u16(), &body))
}

pub async fn read_json<R: DeserializeOwned>(response: reqwest::Response) -> Result<R, RemoteError> {
    let status = response.status().as_u16();
    response
        .json::<R>()
        .await
        .map_err(|err| RemoteError::transport(format!("unreadable response: {err}")).with_status(status))
}

pub fn classify_failure(status: u16, body: &str) -> RemoteError {
    let server_message = serde_json::from_str::<ServerErrorBody>(body)
        .ok()
        .and_then(|b| b.message);
    RemoteError {
        server_message,
        transport_message: Some(format!("HTTP {status}")),
        status: Some(status),
    }
}
