//! Query engine: owns one listing page's inquiry and results.
//!
//! Every operation goes through the same pipeline: merge the change into the
//! inquiry, write the inquiry into the URL, fetch the list for it, and commit
//! the response only if it belongs to the latest request. The URL is a
//! serialization target; it is read back only at mount and on external
//! navigation ([`QueryEngine::adopt_location`]).

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use common::{
    facets::{FacetSet, ListingMode, Range, toggle_value},
    inquiry::{Direction, Inquiry, ListPage, page_count},
    inquiry_codec::{self, InquiryPatch},
};

use crate::{
    config::EngineConfig,
    debounce::Debouncer,
    error::{ListingError, RemoteError},
    location::{HistoryMode, ListingLocation, Navigator},
    runtime::{Spawner, Timer},
    service::ListService,
    session::SessionView,
};

/// Collaborators a page hands to its engine.
pub struct EnginePorts<F, E> {
    pub service: Rc<dyn ListService<F, E>>,
    pub navigator: Rc<dyn Navigator>,
    pub spawner: Rc<dyn Spawner>,
    pub timer: Rc<dyn Timer>,
    pub session: SessionView,
}

/// What a listing page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState<F: FacetSet, E> {
    pub inquiry: Inquiry<F>,
    pub mode: Option<F::Mode>,
    pub list: Vec<E>,
    pub total_count: u64,
    pub loading: bool,
    pub error: Option<ListingError>,
    /// Whether any fetch has succeeded yet.
    pub has_loaded: bool,
}

impl<F: FacetSet, E> ListingState<F, E> {
    fn new(inquiry: Inquiry<F>, mode: Option<F::Mode>) -> Self {
        Self {
            inquiry,
            mode,
            list: Vec::new(),
            total_count: 0,
            loading: false,
            error: None,
            has_loaded: false,
        }
    }

    pub fn page_count(&self) -> u64 {
        page_count(self.total_count, self.inquiry.limit)
    }

    /// Nothing to show and nothing coming.
    pub fn is_empty_state(&self) -> bool {
        !self.loading && self.list.is_empty()
    }
}

struct EngineState<F: FacetSet, E> {
    view: ListingState<F, E>,
    request_seq: u64,
    disposed: bool,
}

struct EngineInner<F: FacetSet, E> {
    default: Inquiry<F>,
    config: EngineConfig,
    ports: EnginePorts<F, E>,
    text: Debouncer<String>,
    state: RefCell<EngineState<F, E>>,
    observers: RefCell<Vec<Rc<dyn Fn()>>>,
}

pub struct QueryEngine<F: FacetSet, E> {
    inner: Rc<EngineInner<F, E>>,
}

impl<F: FacetSet, E> Clone for QueryEngine<F, E> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<F: FacetSet, E> PartialEq for QueryEngine<F, E> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Inquiry and mode a URL describes. The mode parameter wins over whatever
/// the JSON says about the mode facets.
fn resolve_location<F: FacetSet>(
    default: &Inquiry<F>,
    location: &ListingLocation,
) -> (Inquiry<F>, Option<F::Mode>) {
    let mut inquiry = inquiry_codec::decode(location.input.as_deref(), default).normalized();
    let url_mode = location.mode.as_deref().and_then(F::Mode::from_param);
    if let Some(mode) = url_mode {
        inquiry.search.apply_mode(mode);
    }
    let mode = url_mode.or_else(|| inquiry.search.mode());
    (inquiry, mode)
}

impl<F: FacetSet, E: Clone + 'static> QueryEngine<F, E> {
    /// Builds the engine for a page mounted at `location`. Nothing is fetched
    /// until [`QueryEngine::start`].
    pub fn new(
        default: Inquiry<F>,
        location: &ListingLocation,
        config: EngineConfig,
        ports: EnginePorts<F, E>,
    ) -> Self {
        let (inquiry, mode) = resolve_location(&default, location);
        Self {
            inner: Rc::new(EngineInner {
                default,
                text: Debouncer::new(config.debounce),
                config,
                ports,
                state: RefCell::new(EngineState {
                    view: ListingState::new(inquiry, mode),
                    request_seq: 0,
                    disposed: false,
                }),
                observers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Initial fetch for the mounted inquiry.
    pub fn start(&self) {
        self.dispatch_fetch();
    }

    pub fn state(&self) -> ListingState<F, E> {
        self.inner.state.borrow().view.clone()
    }

    pub fn inquiry(&self) -> Inquiry<F> {
        self.inner.state.borrow().view.inquiry.clone()
    }

    pub fn mode(&self) -> Option<F::Mode> {
        self.inner.state.borrow().view.mode
    }

    pub fn default_inquiry(&self) -> &Inquiry<F> {
        &self.inner.default
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.state.borrow().disposed
    }

    /// Whether typed text is still waiting out its quiet period.
    pub fn text_pending(&self) -> bool {
        self.inner.text.is_pending()
    }

    /// The URL the current state serializes to.
    pub fn location(&self) -> ListingLocation {
        let state = self.inner.state.borrow();
        Self::location_for(&state.view)
    }

    /// `observer` runs after every state change until the engine is disposed.
    pub fn subscribe(&self, observer: impl Fn() + 'static) {
        self.inner.observers.borrow_mut().push(Rc::new(observer));
    }

    /// Adds `value` to the multi-select facet, or removes it if present.
    pub fn toggle_list_facet(&self, facet: F::List, value: &str) -> Inquiry<F> {
        let selected = toggle_value(self.inquiry().search.list(facet), value);
        let mut patch = F::default();
        *patch.list_mut(facet) = Some(selected);
        self.apply(InquiryPatch::Search(patch), HistoryMode::Push)
    }

    /// Call on commit (pointer-up, blur), not on every drag step.
    pub fn commit_range_facet(&self, facet: F::Range, range: Range) -> Inquiry<F> {
        let mut patch = F::default();
        *patch.range_mut(facet) = Some(range);
        self.apply(InquiryPatch::Search(patch), HistoryMode::Push)
    }

    /// Switches the mode and every facet it controls in one step.
    pub fn set_mode(&self, mode: F::Mode) -> Inquiry<F> {
        let mut patch = F::default();
        patch.apply_mode(mode);
        {
            let mut state = self.inner.state.borrow_mut();
            if state.disposed {
                return state.view.inquiry.clone();
            }
            state.view.mode = Some(mode);
        }
        self.apply(InquiryPatch::Search(patch), HistoryMode::Push)
    }

    /// Feeds typed text through the debouncer. The inquiry changes (and the
    /// page resets) only once the text has been quiet for the configured period.
    pub fn set_text(&self, value: impl Into<String>) {
        if self.is_disposed() {
            return;
        }
        let settled = self.inner.text.settle(value.into(), self.inner.ports.timer.as_ref());
        let inner = Rc::downgrade(&self.inner);
        self.inner.ports.spawner.spawn(Box::pin(async move {
            let Some(text) = settled.await else { return };
            if let Some(engine) = Self::upgrade(&inner) {
                engine.land_text(text);
            }
        }));
    }

    pub fn paginate(&self, page: u32) -> Inquiry<F> {
        self.apply(InquiryPatch::Page(page), HistoryMode::Push)
    }

    pub fn set_sort(&self, sort: impl Into<String>, direction: Direction) -> Inquiry<F> {
        self.apply(InquiryPatch::Sort { sort: sort.into(), direction }, HistoryMode::Push)
    }

    /// Back to the page default, keeping only the mode. Always navigates to
    /// the canonical URL, even if nothing changed.
    pub fn reset(&self) -> Inquiry<F> {
        self.inner.text.discard();
        let (inquiry, location) = {
            let mut state = self.inner.state.borrow_mut();
            if state.disposed {
                return state.view.inquiry.clone();
            }
            let mode = state.view.mode;
            let mut inquiry = self.inner.default.clone().normalized();
            if let Some(mode) = mode {
                inquiry.search.apply_mode(mode);
            }
            state.view.inquiry = inquiry.clone();
            (inquiry, ListingLocation::canonical(mode.map(|m| m.as_param().to_string())))
        };
        self.inner.ports.navigator.navigate(&location, HistoryMode::Push);
        self.dispatch_fetch();
        inquiry
    }

    /// Re-runs the current inquiry, e.g. after a like/follow toggle.
    pub fn refetch(&self) {
        self.dispatch_fetch();
    }

    /// Follows an external navigation (back/forward, pasted URL). Returns
    /// whether the state changed; the engine's own navigations come back here
    /// as no-ops.
    pub fn adopt_location(&self, location: &ListingLocation) -> bool {
        let (inquiry, mode) = resolve_location(&self.inner.default, location);
        {
            let mut state = self.inner.state.borrow_mut();
            if state.disposed || (state.view.inquiry == inquiry && state.view.mode == mode) {
                return false;
            }
            tracing::debug!("adopt_location: following external navigation");
            self.inner.text.discard();
            state.view.inquiry = inquiry;
            state.view.mode = mode;
        }
        self.dispatch_fetch();
        true
    }

    /// Page teardown: cancels pending text and turns every in-flight
    /// response into a no-op.
    pub fn dispose(&self) {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.disposed {
                return;
            }
            state.disposed = true;
        }
        self.inner.text.cancel();
        self.inner.observers.borrow_mut().clear();
        tracing::debug!("query engine disposed");
    }

    fn upgrade(inner: &Weak<EngineInner<F, E>>) -> Option<Self> {
        inner.upgrade().map(|inner| Self { inner })
    }

    fn location_for(view: &ListingState<F, E>) -> ListingLocation {
        ListingLocation::new(
            Some(inquiry_codec::encode(&view.inquiry)),
            view.mode.map(|m| m.as_param().to_string()),
        )
    }

    fn land_text(&self, text: String) -> Option<Inquiry<F>> {
        let mut patch = F::default();
        let Some(slot) = patch.text_mut() else {
            tracing::warn!("set_text: listing has no free-text facet, ignoring {text:?}");
            return None;
        };
        *slot = Some(text);
        Some(self.apply(InquiryPatch::Search(patch), HistoryMode::Replace))
    }

    fn apply(&self, patch: InquiryPatch<F>, history: HistoryMode) -> Inquiry<F> {
        let (next, location) = {
            let mut state = self.inner.state.borrow_mut();
            if state.disposed {
                return state.view.inquiry.clone();
            }
            let next = inquiry_codec::merge(&state.view.inquiry, patch);
            if next == state.view.inquiry {
                return next;
            }
            state.view.inquiry = next.clone();
            (next, Self::location_for(&state.view))
        };
        self.inner.ports.navigator.navigate(&location, history);
        self.dispatch_fetch();
        next
    }

    fn dispatch_fetch(&self) {
        let request = {
            let mut state = self.inner.state.borrow_mut();
            if state.disposed {
                return;
            }
            state.request_seq += 1;
            if self.inner.config.requires_session && !self.inner.ports.session.is_authenticated() {
                tracing::info!("fetch #{}: no signed-in viewer, not sending", state.request_seq);
                state.view.loading = false;
                state.view.list.clear();
                state.view.total_count = 0;
                state.view.error = Some(ListingError::NotAuthenticated);
                None
            } else {
                state.view.loading = true;
                Some((state.request_seq, state.view.inquiry.clone()))
            }
        };
        self.notify_observers();

        let Some((seq, inquiry)) = request else { return };
        tracing::debug!("fetch #{seq}: page {} sort {} {:?}", inquiry.page, inquiry.sort, inquiry.direction);
        let response = self.inner.ports.service.fetch_list(inquiry.clone());
        let inner = Rc::downgrade(&self.inner);
        self.inner.ports.spawner.spawn(Box::pin(async move {
            let result = response.await;
            if let Some(engine) = Self::upgrade(&inner) {
                engine.commit(seq, &inquiry, result);
            }
        }));
    }

    /// Applies a response if it answers the latest request. Returns whether it did.
    fn commit(&self, seq: u64, inquiry: &Inquiry<F>, result: Result<ListPage<E>, RemoteError>) -> bool {
        {
            let mut state = self.inner.state.borrow_mut();
            if state.disposed {
                return false;
            }
            if seq != state.request_seq || *inquiry != state.view.inquiry {
                tracing::debug!("fetch #{seq}: superseded by #{}, discarding", state.request_seq);
                return false;
            }
            let view = &mut state.view;
            view.loading = false;
            match result {
                Ok(page) => {
                    view.list = page.list;
                    view.total_count = page.total_count;
                    view.error = None;
                    view.has_loaded = true;
                }
                Err(err) => {
                    tracing::warn!("fetch #{seq}: list query failed: {err}");
                    if !view.has_loaded {
                        view.list.clear();
                        view.total_count = 0;
                    }
                    view.error = Some(ListingError::ListFetchFailed(err));
                }
            }
        }
        self.notify_observers();
        true
    }

    fn notify_observers(&self) {
        let observers = self.inner.observers.borrow().clone();
        for observer in observers {
            observer();
        }
    }
}
