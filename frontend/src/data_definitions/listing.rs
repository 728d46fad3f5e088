//! Binds one [`QueryEngine`] to a listing page.
//!
//! The engine owns the inquiry; the page only renders [`Listing::state`] and
//! forwards user actions. Route changes the engine did not make itself
//! (back/forward, pasted links) are handed to `adopt_location`.

use std::{rc::Rc, time::Duration};

use common::{facets::FacetSet, inquiry::Inquiry};
use dioxus::{logger::tracing, prelude::*};
use dioxus_primitives::toast::consume_toast;
use engine::{
    EngineConfig, EnginePorts, HistoryMode, ListingLocation, ListingState, QueryEngine, SessionCell, Spawner, Timer,
    ToggleCoordinator, ToggleKind,
};
use futures_util::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::{
    api::{list_service::RestListService, toggle_api::send_toggle},
    config::ApiConfig,
    data_definitions::toast_sink::ToastSink,
    routes::Route,
};

/// Runs engine tasks on the Dioxus runtime; they end with the page.
struct DioxusSpawner;

impl Spawner for DioxusSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        spawn(task);
    }
}

struct GlooTimer;

impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(gloo_timers::future::TimeoutFuture::new(millis))
    }
}

/// Writes engine locations into the router.
struct RouteNavigator {
    navigator: Navigator,
    to_route: fn(ListingLocation) -> Route,
}

impl engine::Navigator for RouteNavigator {
    fn navigate(&self, location: &ListingLocation, history: HistoryMode) {
        let route = (self.to_route)(location.clone());
        let failure = match history {
            HistoryMode::Push => self.navigator.push(route),
            HistoryMode::Replace => self.navigator.replace(route),
        };
        if let Some(failure) = failure {
            tracing::warn!("listing navigation failed: {failure:?}");
        }
    }
}

pub struct ListingSetup<F: FacetSet> {
    pub default: Inquiry<F>,
    pub resource: &'static str,
    pub config: EngineConfig,
    pub to_route: fn(ListingLocation) -> Route,
}

/// Copyable handle to the page's engine.
pub struct Listing<F: FacetSet, E: 'static> {
    engine: CopyValue<QueryEngine<F, E>>,
    revision: Signal<u64>,
}

impl<F: FacetSet, E: 'static> Clone for Listing<F, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: FacetSet, E: 'static> Copy for Listing<F, E> {}

impl<F: FacetSet, E: 'static> PartialEq for Listing<F, E> {
    fn eq(&self, other: &Self) -> bool {
        self.engine == other.engine
    }
}

impl<F: FacetSet, E: Clone + 'static> Listing<F, E> {
    /// Current snapshot; reading it subscribes the calling component.
    pub fn state(&self) -> ListingState<F, E> {
        let _ = self.revision.read();
        self.engine.read().state()
    }

    pub fn engine(&self) -> QueryEngine<F, E> {
        self.engine.read().clone()
    }
}

pub fn use_listing<F, E>(setup: impl FnOnce() -> ListingSetup<F>, location: ReadSignal<ListingLocation>) -> Listing<F, E>
where
    F: FacetSet,
    E: Clone + DeserializeOwned + 'static,
{
    let session = use_context::<SessionCell>();
    let navigator = use_navigator();
    let revision = use_signal(|| 0_u64);

    let engine = use_hook(|| {
        let setup = setup();
        let ports = EnginePorts {
            service: Rc::new(RestListService::<E>::new(ApiConfig::default(), setup.resource, session.view())),
            navigator: Rc::new(RouteNavigator { navigator, to_route: setup.to_route }),
            spawner: Rc::new(DioxusSpawner),
            timer: Rc::new(GlooTimer),
            session: session.view(),
        };
        let engine = QueryEngine::new(setup.default, &location.peek(), setup.config, ports);
        engine.start();
        engine.subscribe(move || {
            let mut revision = revision;
            *revision.write() += 1;
        });
        CopyValue::new(engine)
    });

    use_effect(move || {
        let location = location();
        engine.read().adopt_location(&location);
    });
    use_drop(move || {
        if let Ok(engine) = engine.try_read() {
            engine.dispose();
        }
    });

    Listing { engine, revision }
}

/// Like/follow handler for cards on a listing page. The listing refetches
/// once the server has applied the toggle.
pub fn use_toggle<F, E>(listing: Listing<F, E>) -> Callback<(ToggleKind, String)>
where
    F: FacetSet,
    E: Clone + 'static,
{
    let session = use_context::<SessionCell>();
    let coordinator = use_hook(|| ToggleCoordinator::new(session.view(), Rc::new(ToastSink::new(consume_toast()))));

    use_callback(move |(kind, target_id): (ToggleKind, String)| {
        let coordinator = coordinator.clone();
        spawn(async move {
            let config = ApiConfig::default();
            coordinator
                .toggle(
                    kind,
                    &target_id,
                    |actor, id| send_toggle(config, kind, actor, id),
                    || listing.engine().refetch(),
                )
                .await;
        });
    })
}
