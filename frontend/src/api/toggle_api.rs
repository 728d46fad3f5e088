//! Like / follow mutations. The response body is ignored; the listing
//! refetches to learn the new flags.

use common::member::Actor;
use engine::{RemoteError, ToggleKind};

use crate::{api::http, config::ApiConfig};

pub async fn send_toggle(config: ApiConfig, kind: ToggleKind, actor: Actor, target_id: String) -> Result<(), RemoteError> {
    let (resource, action) = kind.endpoint();
    let url = config.toggle_url(resource, &target_id, action);
    dioxus::logger::tracing::debug!("toggle {kind:?}: POST {url} as {}", actor.id);
    http::post(&url, actor.access_token.as_deref(), &serde_json::json!({})).await?;
    Ok(())
}
