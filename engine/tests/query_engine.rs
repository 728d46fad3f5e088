mod support;

use std::{cell::Cell, rc::Rc};

use common::{
    error::ErrorKind,
    facets::{FacetSet, PropertyFacets, PropertyList, PropertyRange, Range, SaleMode},
    inquiry::Direction,
    inquiry_codec,
};
use engine::{EngineConfig, HistoryMode, ListingError, ListingLocation, RemoteError};
use pretty_assertions::assert_eq;

use support::*;

fn location_of(inquiry: &common::inquiry::Inquiry<PropertyFacets>) -> ListingLocation {
    ListingLocation::new(Some(inquiry_codec::encode(inquiry)), None)
}

fn decoded(location: &ListingLocation) -> common::inquiry::Inquiry<PropertyFacets> {
    inquiry_codec::decode(location.input.as_deref(), &vehicle_default())
}

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}

#[test]
fn start_fetches_the_mounted_inquiry() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();
    h.settle();

    assert_eq!(h.service.calls(), 1);
    assert_eq!(h.service.request(0), vehicle_default());
    assert!(engine.state().loading);
    assert_eq!(h.navigator.count(), 0);

    h.respond(0, page_of(vec![vehicle("A", None), vehicle("B", None)], 11));
    let state = engine.state();
    assert!(!state.loading);
    assert!(state.has_loaded);
    assert_eq!(state.list.len(), 2);
    assert_eq!(state.total_count, 11);
    assert_eq!(state.page_count(), 2);
    assert_eq!(state.error, None);
}

#[test]
fn mounts_from_url_state() {
    let mut wanted = vehicle_default();
    wanted.page = 2;
    wanted.search.brand_list = strings(&["BMW"]);
    wanted.search.prices_range = Some(Range::new(0, 50_000));

    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, location_of(&wanted));
    assert_eq!(engine.inquiry(), wanted);
    engine.start();
    h.settle();
    assert_eq!(h.service.request(0), wanted);
}

#[test]
fn malformed_url_state_falls_back_to_default() {
    let h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::new(Some("{\"page\":".into()), None));
    assert_eq!(engine.inquiry(), vehicle_default());
    assert_eq!(engine.mode(), None);
}

#[test]
fn mode_param_wins_over_json() {
    let mut json = vehicle_default();
    json.search.apply_mode(SaleMode::Sale);
    let location = ListingLocation::new(Some(inquiry_codec::encode(&json)), Some("rent".into()));

    let h = VehicleHarness::new();
    let engine = vehicle_engine(&h, location);
    assert_eq!(engine.mode(), Some(SaleMode::Rent));
    assert_eq!(engine.inquiry().search.for_rent, Some(true));
    assert_eq!(engine.inquiry().search.for_sale, Some(false));

    let garbage = vehicle_engine(&h, ListingLocation::new(Some("nope".into()), Some("rent".into())));
    assert_eq!(garbage.mode(), Some(SaleMode::Rent));
    assert_eq!(garbage.inquiry().search.for_rent, Some(true));
}

#[test]
fn brand_toggles_and_pagination() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();

    let bmw = engine.toggle_list_facet(PropertyList::Brand, "BMW");
    assert_eq!(bmw.page, 1);
    assert_eq!(bmw.search.brand_list, strings(&["BMW"]));

    let both = engine.toggle_list_facet(PropertyList::Brand, "AUDI");
    assert_eq!(both.search.brand_list, strings(&["BMW", "AUDI"]));

    let second = engine.paginate(2);
    assert_eq!(second.page, 2);
    assert_eq!(second.search, both.search);

    let audi = engine.toggle_list_facet(PropertyList::Brand, "BMW");
    assert_eq!(audi.page, 1);
    assert_eq!(audi.search.brand_list, strings(&["AUDI"]));
    h.settle();

    assert_eq!(h.service.calls(), 5);
    assert_eq!(h.service.last_request(), audi);

    let (location, history) = h.navigator.last();
    assert_eq!(history, HistoryMode::Push);
    assert_eq!(decoded(&location), audi);
    assert_eq!(h.navigator.count(), 4);
}

#[test]
fn removing_last_value_drops_the_facet_from_url() {
    let h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.toggle_list_facet(PropertyList::Type, "SUV");
    let cleared = engine.toggle_list_facet(PropertyList::Type, "SUV");
    assert_eq!(cleared.search.type_list, None);
    let (location, _) = h.navigator.last();
    assert!(!location.input.unwrap_or_default().contains("typeList"));
}

#[test]
fn range_commit_resets_page() {
    let h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.paginate(3);
    let next = engine.commit_range_facet(PropertyRange::Years, Range::new(2015, 2020));
    assert_eq!(next.page, 1);
    assert_eq!(next.search.years_range, Some(Range::new(2015, 2020)));
}

#[test]
fn out_of_order_responses_keep_the_latest() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();
    engine.toggle_list_facet(PropertyList::Brand, "BMW");
    h.settle();

    h.respond(1, page_of(vec![vehicle("BMW-1", None)], 1));
    h.respond(0, page_of(vec![vehicle("ANY-1", None), vehicle("ANY-2", None)], 2));

    let state = engine.state();
    assert_eq!(state.list, vec![vehicle("BMW-1", None)]);
    assert_eq!(state.total_count, 1);
    assert!(!state.loading);
}

#[test]
fn stale_response_arriving_first_is_ignored() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();
    engine.toggle_list_facet(PropertyList::Brand, "BMW");
    h.settle();

    h.respond(0, page_of(vec![vehicle("ANY-1", None)], 1));
    let state = engine.state();
    assert!(state.loading);
    assert!(state.list.is_empty());
    assert!(!state.has_loaded);

    h.respond(1, page_of(vec![vehicle("BMW-1", None)], 1));
    assert_eq!(engine.state().list, vec![vehicle("BMW-1", None)]);
}

#[test]
fn failure_keeps_previous_results() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();
    h.settle();
    h.respond(0, page_of(vec![vehicle("A", None)], 1));

    engine.paginate(2);
    h.settle();
    h.respond(1, Err(RemoteError::server("Database is down").with_status(500)));

    let state = engine.state();
    assert_eq!(state.list, vec![vehicle("A", None)]);
    assert_eq!(state.total_count, 1);
    assert!(!state.loading);
    let error = state.error.expect("failure recorded");
    assert_eq!(error.kind(), ErrorKind::ListFetchFailed);
    assert_eq!(error.user_message(), "Database is down");
    assert_eq!(engine.inquiry().page, 2);
}

#[test]
fn first_failure_shows_empty_list() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();
    h.settle();
    h.respond(0, Err(RemoteError::transport("connection refused")));

    let state = engine.state();
    assert!(state.list.is_empty());
    assert_eq!(state.total_count, 0);
    assert!(!state.has_loaded);
    assert!(state.is_empty_state());
    assert_eq!(state.error.map(|e| e.user_message()).as_deref(), Some("connection refused"));
}

#[test]
fn success_after_failure_clears_error() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();
    h.settle();
    h.respond(0, Err(RemoteError::transport("offline")));
    engine.refetch();
    h.settle();
    h.respond(1, page_of(vec![vehicle("A", None)], 1));
    assert_eq!(engine.state().error, None);
    assert!(engine.state().has_loaded);
}

#[test]
fn typing_bursts_collapse_into_one_fetch() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();
    engine.paginate(3);
    h.settle();
    let before = h.service.calls();

    engine.set_text("b");
    engine.set_text("bm");
    engine.set_text("bmw ");
    h.settle();
    assert_eq!(h.service.calls(), before);
    assert!(engine.text_pending());
    assert_eq!(engine.inquiry().page, 3);
    assert_eq!(h.timer.pending(), 3);

    h.elapse();
    assert_eq!(h.service.calls(), before + 1);
    let request = h.service.last_request();
    assert_eq!(request.search.text.as_deref(), Some("bmw"));
    assert_eq!(request.page, 1);
    assert_eq!(h.navigator.last().1, HistoryMode::Replace);
    assert!(!engine.text_pending());
}

#[test]
fn text_separated_by_quiet_period_fetches_each() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());

    engine.set_text("audi");
    h.elapse();
    engine.set_text("bmw");
    h.elapse();

    assert_eq!(h.service.calls(), 2);
    assert_eq!(h.service.request(0).search.text.as_deref(), Some("audi"));
    assert_eq!(h.service.request(1).search.text.as_deref(), Some("bmw"));
}

#[test]
fn clearing_text_removes_it() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.set_text("bmw");
    h.elapse();
    engine.set_text("   ");
    h.elapse();
    assert_eq!(engine.inquiry().search.text, None);
    assert_eq!(h.service.calls(), 2);
}

#[test]
fn dispose_silences_late_responses_and_pending_text() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    let notified = Rc::new(Cell::new(0));
    {
        let notified = notified.clone();
        engine.subscribe(move || notified.set(notified.get() + 1));
    }
    engine.start();
    engine.set_text("bmw");
    h.settle();
    let seen = notified.get();

    engine.dispose();
    assert!(engine.is_disposed());
    h.respond(0, page_of(vec![vehicle("A", None)], 1));
    h.elapse();

    assert!(engine.state().list.is_empty());
    assert_eq!(h.service.calls(), 1);
    assert_eq!(notified.get(), seen);

    engine.toggle_list_facet(PropertyList::Brand, "BMW");
    engine.refetch();
    h.settle();
    assert_eq!(h.service.calls(), 1);
    assert_eq!(h.navigator.count(), 0);
}

#[test]
fn reset_keeps_mode_and_always_navigates() {
    let mut mounted = vehicle_default();
    mounted.page = 3;
    mounted.search.brand_list = strings(&["BMW"]);
    let location = ListingLocation::new(Some(inquiry_codec::encode(&mounted)), Some("rent".into()));

    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, location);
    let reset = engine.reset();

    let mut expected = vehicle_default();
    expected.search.apply_mode(SaleMode::Rent);
    assert_eq!(reset, expected);
    assert_eq!(engine.mode(), Some(SaleMode::Rent));
    assert_eq!(
        h.navigator.last(),
        (ListingLocation::canonical(Some("rent".into())), HistoryMode::Push)
    );

    engine.reset();
    h.settle();
    assert_eq!(h.navigator.count(), 2);
    assert_eq!(h.service.calls(), 2);
}

#[test]
fn reset_discards_pending_text() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.set_text("bmw");
    engine.reset();
    h.elapse();
    assert_eq!(engine.inquiry().search.text, None);
    assert_eq!(h.service.calls(), 1);
}

#[test]
fn set_mode_writes_both_facets_and_mode_param() {
    let h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.paginate(2);

    let rent = engine.set_mode(SaleMode::Rent);
    assert_eq!(rent.page, 1);
    assert_eq!((rent.search.for_sale, rent.search.for_rent), (Some(false), Some(true)));
    assert_eq!(h.navigator.last().0.mode.as_deref(), Some("rent"));

    let sale = engine.set_mode(SaleMode::Sale);
    assert_eq!((sale.search.for_sale, sale.search.for_rent), (Some(true), Some(false)));
    assert_eq!(h.navigator.last().0.mode.as_deref(), Some("sale"));
    assert_eq!(engine.location().mode.as_deref(), Some("sale"));
}

#[test]
fn inquiry_changes_keep_the_mode_param() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::new(None, Some("rent".into())));
    engine.start();
    assert_eq!(engine.mode(), Some(SaleMode::Rent));

    let assert_rent = |h: &VehicleHarness, history: HistoryMode, steps: usize| {
        let (location, last_history) = h.navigator.last();
        assert_eq!(location.mode.as_deref(), Some("rent"));
        assert_eq!(decoded(&location).search.for_rent, Some(true));
        assert_eq!(last_history, history);
        assert_eq!(h.navigator.count(), steps);
    };

    engine.toggle_list_facet(PropertyList::Brand, "BMW");
    assert_rent(&h, HistoryMode::Push, 1);

    engine.paginate(2);
    assert_rent(&h, HistoryMode::Push, 2);

    engine.commit_range_facet(PropertyRange::Prices, Range::new(10_000, 40_000));
    assert_rent(&h, HistoryMode::Push, 3);

    engine.set_sort("propertyPrice", Direction::Asc);
    assert_rent(&h, HistoryMode::Push, 4);

    engine.set_text("m3");
    h.elapse();
    assert_rent(&h, HistoryMode::Replace, 5);
    assert_eq!(engine.inquiry().search.text.as_deref(), Some("m3"));
    assert_eq!(engine.inquiry().search.brand_list, strings(&["BMW"]));
}

#[test]
fn set_mode_pushes_history() {
    let h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.set_mode(SaleMode::Rent);
    assert_eq!(h.navigator.last().1, HistoryMode::Push);
    engine.set_mode(SaleMode::Sale);
    let (location, history) = h.navigator.last();
    assert_eq!(history, HistoryMode::Push);
    assert_eq!(location.mode.as_deref(), Some("sale"));
    assert_eq!(h.navigator.count(), 2);
}

#[test]
fn adopt_location_follows_external_navigation_only() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.start();
    engine.toggle_list_facet(PropertyList::Brand, "BMW");
    h.settle();
    let fetches = h.service.calls();
    let navigations = h.navigator.count();

    assert!(!engine.adopt_location(&engine.location()));
    assert_eq!(h.service.calls(), fetches);

    let mut elsewhere = vehicle_default();
    elsewhere.search.brand_list = strings(&["AUDI"]);
    assert!(engine.adopt_location(&location_of(&elsewhere)));
    h.settle();
    assert_eq!(engine.inquiry(), elsewhere);
    assert_eq!(h.service.calls(), fetches + 1);
    assert_eq!(h.navigator.count(), navigations);

    assert!(engine.adopt_location(&ListingLocation::default()));
    assert_eq!(engine.inquiry(), vehicle_default());
}

#[test]
fn sort_change_resets_page_and_unchanged_page_is_noop() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    engine.paginate(4);
    let sorted = engine.set_sort("propertyPrice", Direction::Asc);
    assert_eq!(sorted.page, 1);
    assert_eq!(sorted.sort, "propertyPrice");
    assert_eq!(sorted.direction, Direction::Asc);
    h.settle();
    let calls = h.service.calls();

    engine.paginate(1);
    engine.set_sort("propertyPrice", Direction::Asc);
    h.settle();
    assert_eq!(h.service.calls(), calls);
}

#[test]
fn personal_listing_needs_a_viewer() {
    let mut h = VehicleHarness::new();
    let engine = h.engine(vehicle_default(), ListingLocation::default(), EngineConfig::personal());
    engine.start();
    h.settle();

    assert_eq!(h.service.calls(), 0);
    let state = engine.state();
    assert_eq!(state.error, Some(ListingError::NotAuthenticated));
    assert!(!state.loading);

    h.session.sign_in(actor("M1"));
    engine.refetch();
    h.settle();
    assert_eq!(h.service.calls(), 1);
    h.respond(0, page_of(vec![vehicle("MINE", None)], 1));
    assert_eq!(engine.state().error, None);
}

#[test]
fn observers_see_loading_and_commit() {
    let mut h = VehicleHarness::new();
    let engine = vehicle_engine(&h, ListingLocation::default());
    let seen = Rc::new(Cell::new(0));
    {
        let seen = seen.clone();
        engine.subscribe(move || seen.set(seen.get() + 1));
    }
    engine.start();
    assert_eq!(seen.get(), 1);
    h.settle();
    h.respond(0, page_of(Vec::new(), 0));
    assert_eq!(seen.get(), 2);
}

#[test]
fn facet_set_without_text_ignores_typing() {
    use common::facets::FavoriteFacets;

    let mut h: Harness<FavoriteFacets, common::listing_items::PropertyItem> = Harness::new();
    let default = common::inquiry::Inquiry::new(6, "createdAt", Direction::Desc);
    let engine = h.engine(default, ListingLocation::default(), EngineConfig::default());
    engine.set_text("bmw");
    h.elapse();
    assert_eq!(h.service.calls(), 0);
    assert!(FavoriteFacets::default().text().is_none());
}
