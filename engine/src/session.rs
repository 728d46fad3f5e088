//! The signed-in viewer, shared read-only with the listing core.

use std::{cell::RefCell, rc::Rc};

use common::member::Actor;

/// Owner side of the session: set on sign-in or hydration, cleared on sign-out.
#[derive(Debug, Clone, Default)]
pub struct SessionCell {
    actor: Rc<RefCell<Option<Actor>>>,
}

impl SessionCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(actor: Actor) -> Self {
        let cell = Self::new();
        cell.sign_in(actor);
        cell
    }

    pub fn sign_in(&self, actor: Actor) {
        tracing::info!("session: signed in as {}", actor.member_nick);
        *self.actor.borrow_mut() = Some(actor);
    }

    pub fn sign_out(&self) {
        *self.actor.borrow_mut() = None;
    }

    pub fn view(&self) -> SessionView {
        SessionView { actor: self.actor.clone() }
    }
}

impl PartialEq for SessionCell {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.actor, &other.actor)
    }
}

/// Read-only handle injected into engines, coordinators and services.
#[derive(Debug, Clone, Default)]
pub struct SessionView {
    actor: Rc<RefCell<Option<Actor>>>,
}

impl SessionView {
    /// A view that never has a viewer.
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Actor> {
        self.actor.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.actor.borrow().as_ref().is_some_and(Actor::has_identity)
    }

    pub fn access_token(&self) -> Option<String> {
        self.actor.borrow().as_ref().and_then(|a| a.access_token.clone())
    }
}
