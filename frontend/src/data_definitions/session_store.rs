//! Viewer persisted in browser storage between visits.

use common::member::Actor;
use dioxus::logger::tracing;
use engine::SessionCell;

const STORAGE_KEY: &str = "marketMember";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn stored_actor() -> Option<Actor> {
    let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str::<Actor>(&raw) {
        Ok(actor) if actor.has_identity() => Some(actor),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!("ignoring stored member: {err}");
            None
        }
    }
}

/// Session for the whole app, signed in when storage holds a member.
pub fn hydrate_session() -> SessionCell {
    match stored_actor() {
        Some(actor) => SessionCell::signed_in(actor),
        None => SessionCell::new(),
    }
}

pub fn sign_out(session: &SessionCell) {
    session.sign_out();
    if let Some(storage) = local_storage() {
        if let Err(err) = storage.remove_item(STORAGE_KEY) {
            tracing::warn!("could not clear stored member: {err:?}");
        }
    }
}
