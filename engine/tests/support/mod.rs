#![allow(dead_code)]

use std::{cell::RefCell, rc::Rc, time::Duration};

use common::{
    facets::{FacetSet, PropertyFacets},
    inquiry::{Direction, Inquiry, ListPage},
    listing_const::{DEFAULT_SORT, PROPERTY_PAGE_SIZE},
    listing_items::{PropertyItem, ViewerFlag},
    member::Actor,
};
use engine::{
    EngineConfig, EnginePorts, HistoryMode, ListFuture, ListService, ListingLocation, Navigator,
    Notification, QueryEngine, RemoteError, SessionCell, Spawner, Timer,
};
use futures::{
    channel::oneshot,
    executor::{LocalPool, LocalSpawner},
    future::LocalBoxFuture,
    task::LocalSpawnExt,
};

pub struct PoolSpawner(pub LocalSpawner);

impl Spawner for PoolSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.0.spawn_local(task).expect("local pool accepts tasks");
    }
}

/// Sleeps that only end when the test says so.
#[derive(Default)]
pub struct ManualTimer {
    pending: RefCell<Vec<(Duration, oneshot::Sender<()>)>>,
}

impl ManualTimer {
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Ends every sleep started so far.
    pub fn elapse(&self) {
        for (_, tx) in self.pending.borrow_mut().drain(..) {
            let _ = tx.send(());
        }
    }
}

impl Timer for ManualTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push((duration, tx));
        Box::pin(async move {
            let _ = rx.await;
        })
    }
}

type Reply<E> = oneshot::Sender<Result<ListPage<E>, RemoteError>>;

/// List service whose responses are released one by one, in any order.
pub struct DeferredService<F, E> {
    requests: RefCell<Vec<(Inquiry<F>, Option<Reply<E>>)>>,
}

impl<F, E> Default for DeferredService<F, E> {
    fn default() -> Self {
        Self { requests: RefCell::new(Vec::new()) }
    }
}

impl<F: Clone, E> DeferredService<F, E> {
    pub fn calls(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn request(&self, index: usize) -> Inquiry<F> {
        self.requests.borrow()[index].0.clone()
    }

    pub fn last_request(&self) -> Inquiry<F> {
        self.request(self.calls() - 1)
    }

    pub fn respond(&self, index: usize, result: Result<ListPage<E>, RemoteError>) {
        let reply = self.requests.borrow_mut()[index].1.take().expect("request answered twice");
        let _ = reply.send(result);
    }
}

impl<F: 'static, E: 'static> ListService<F, E> for DeferredService<F, E> {
    fn fetch_list(&self, inquiry: Inquiry<F>) -> ListFuture<E> {
        let (tx, rx) = oneshot::channel();
        self.requests.borrow_mut().push((inquiry, Some(tx)));
        Box::pin(async move { rx.await.unwrap_or_else(|_| Err(RemoteError::transport("request dropped"))) })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visits: RefCell<Vec<(ListingLocation, HistoryMode)>>,
}

impl RecordingNavigator {
    pub fn count(&self) -> usize {
        self.visits.borrow().len()
    }

    pub fn last(&self) -> (ListingLocation, HistoryMode) {
        self.visits.borrow().last().cloned().expect("no navigation recorded")
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, location: &ListingLocation, history: HistoryMode) {
        self.visits.borrow_mut().push((location.clone(), history));
    }
}

pub fn recording_sink() -> (Rc<RefCell<Vec<Notification>>>, impl Fn(Notification) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = {
        let seen = seen.clone();
        move |n: Notification| seen.borrow_mut().push(n)
    };
    (seen, sink)
}

pub fn actor(id: &str) -> Actor {
    Actor { id: id.into(), member_nick: format!("nick-{id}"), access_token: Some(format!("token-{id}")) }
}

pub fn vehicle(id: &str, liked_by: Option<&str>) -> PropertyItem {
    PropertyItem {
        id: id.into(),
        property_title: format!("Vehicle {id}"),
        property_brand: "BMW".into(),
        property_type: "SEDAN".into(),
        property_location: "SEOUL".into(),
        property_price: 50_000,
        property_year: 2021,
        property_barter: false,
        property_rent: false,
        property_images: Vec::new(),
        property_views: 0,
        property_likes: u64::from(liked_by.is_some()),
        me_liked: liked_by
            .map(|actor| vec![ViewerFlag { actor_id: actor.into(), target_id: id.into(), flag: true }])
            .unwrap_or_default(),
    }
}

pub fn page_of(items: Vec<PropertyItem>, total_count: u64) -> Result<ListPage<PropertyItem>, RemoteError> {
    Ok(ListPage { list: items, total_count })
}

pub fn vehicle_default() -> Inquiry<PropertyFacets> {
    Inquiry::new(PROPERTY_PAGE_SIZE, DEFAULT_SORT, Direction::Desc)
}

/// One page's worth of collaborators, driven by hand.
pub struct Harness<F, E> {
    pub pool: LocalPool,
    pub service: Rc<DeferredService<F, E>>,
    pub navigator: Rc<RecordingNavigator>,
    pub timer: Rc<ManualTimer>,
    pub session: SessionCell,
}

impl<F: FacetSet, E: Clone + 'static> Harness<F, E> {
    pub fn new() -> Self {
        Self {
            pool: LocalPool::new(),
            service: Rc::new(DeferredService::default()),
            navigator: Rc::new(RecordingNavigator::default()),
            timer: Rc::new(ManualTimer::default()),
            session: SessionCell::new(),
        }
    }

    pub fn engine(&self, default: Inquiry<F>, location: ListingLocation, config: EngineConfig) -> QueryEngine<F, E> {
        let ports = EnginePorts {
            service: self.service.clone(),
            navigator: self.navigator.clone(),
            spawner: Rc::new(PoolSpawner(self.pool.spawner())),
            timer: self.timer.clone(),
            session: self.session.view(),
        };
        QueryEngine::new(default, &location, config, ports)
    }

    /// Runs every task that can make progress.
    pub fn settle(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn respond(&mut self, index: usize, result: Result<ListPage<E>, RemoteError>) {
        self.service.respond(index, result);
        self.settle();
    }

    /// Lets pending debounce sleeps finish.
    pub fn elapse(&mut self) {
        self.timer.elapse();
        self.settle();
    }
}

pub type VehicleHarness = Harness<PropertyFacets, PropertyItem>;

pub fn vehicle_engine(harness: &VehicleHarness, location: ListingLocation) -> QueryEngine<PropertyFacets, PropertyItem> {
    harness.engine(vehicle_default(), location, EngineConfig::default())
}
