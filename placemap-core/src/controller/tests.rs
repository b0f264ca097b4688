use placemap_entities::builders::*;

use super::*;
use crate::presenter::{
    detail::tests::MockDetail, list::ListItem, map::tests::MockMap,
};

#[derive(Debug, Default)]
struct MockControls {
    districts: Vec<String>,
    prices: Vec<String>,
    shown: Vec<FilterCriteria>,
}

impl ControlsView for MockControls {
    fn set_district_options(&mut self, districts: &[String]) {
        self.districts = districts.to_vec();
    }
    fn set_price_options(&mut self, prices: &[String]) {
        self.prices = prices.to_vec();
    }
    fn show_criteria(&mut self, criteria: &FilterCriteria) {
        self.shown.push(criteria.clone());
    }
}

#[derive(Debug, Default)]
struct MockList {
    count: String,
    items: Vec<ListItem>,
    renders: usize,
}

impl MockList {
    fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id.as_str()).collect()
    }
}

impl ListView for MockList {
    fn render(&mut self, count_label: &str, items: Vec<ListItem>) {
        self.count = count_label.to_owned();
        self.items = items;
        self.renders += 1;
    }
}

type MockController = Controller<MockControls, MockList, MockMap, MockDetail>;

fn controller() -> MockController {
    let _ = env_logger::builder().is_test(true).try_init();
    let views = Views {
        controls: MockControls::default(),
        list: MockList::default(),
        map: MockMap::with_zoom(12.0),
        detail: MockDetail::default(),
    };
    Controller::new(Config::default(), views)
}

fn places() -> Vec<Place> {
    vec![
        Place::build()
            .id("a")
            .name("Bistro")
            .category("eat")
            .district("5")
            .price("$$")
            .rating(4.5)
            .pos(47.50, 19.04)
            .finish(),
        Place::build()
            .id("b")
            .name("Bar X")
            .category("drink")
            .district("6")
            .rating(3.0)
            .pos(47.51, 19.05)
            .finish(),
    ]
}

fn loaded() -> MockController {
    let mut c = controller();
    c.load(places());
    c
}

#[test]
fn render_loaded_places_with_default_criteria() {
    let c = loaded();
    let Views {
        controls, list, map, ..
    } = c.views();
    assert_eq!(list.ids(), ["a"]);
    assert_eq!(list.count, "1 мест");
    assert_eq!(map.markers.len(), 1);
    assert_eq!(map.markers[0].id.as_str(), "a");
    assert_eq!(c.state().markers.len(), 1);
    assert!(c.state().markers.get("a").is_some());
    assert_eq!(controls.districts, ["5", "6"]);
    assert_eq!(controls.prices, ["$$"]);
    assert_eq!(controls.shown, [FilterCriteria::with_min_rating(4.0)]);
}

#[test]
fn refuse_to_work_before_loading() {
    let mut c = controller();
    assert!(!c.is_loaded());
    assert_eq!(c.apply_filters(), Err(Error::NotLoaded));
    assert_eq!(
        c.change(CriteriaChange::Query("x".into())),
        Err(Error::NotLoaded)
    );
    assert_eq!(c.select("a"), Err(Error::NotLoaded));
    assert_eq!(c.views().list.renders, 0);
    assert!(c.views().map.markers.is_empty());
}

#[test]
fn report_load_failure() {
    let mut c = controller();
    let notice = c.load_failed(&"HTTP 404");
    assert_eq!(notice, LOAD_FAILURE_NOTICE);
    assert!(matches!(c.state().phase, Phase::Failed));
    assert_eq!(c.apply_filters(), Err(Error::NotLoaded));
}

#[test]
fn refilter_on_every_change() {
    let mut c = loaded();
    c.change(CriteriaChange::MinRating(String::new())).unwrap();
    assert_eq!(c.views().list.ids(), ["a", "b"]);
    assert_eq!(c.views().map.markers.len(), 2);

    c.change(CriteriaChange::Category("drink".into())).unwrap();
    assert_eq!(c.views().list.ids(), ["b"]);

    c.change(CriteriaChange::Query("  BISTRO ".into())).unwrap();
    assert!(c.views().list.ids().is_empty());
    assert_eq!(c.views().list.count, "0 мест");
    assert!(c.views().map.markers.is_empty());
    assert!(c.state().markers.is_empty());

    c.change(CriteriaChange::Category(String::new())).unwrap();
    assert_eq!(c.views().list.ids(), ["a"]);
}

#[test]
fn reset_to_defaults() {
    let mut c = loaded();
    c.change(CriteriaChange::MinRating("0".into())).unwrap();
    c.change(CriteriaChange::District("6".into())).unwrap();
    c.change(CriteriaChange::Query("bar".into())).unwrap();
    assert_eq!(c.views().list.ids(), ["b"]);

    c.reset().unwrap();
    assert_eq!(c.state().criteria, FilterCriteria::with_min_rating(4.0));
    assert_eq!(
        c.views().controls.shown.last(),
        Some(&FilterCriteria::with_min_rating(4.0))
    );
    assert_eq!(c.views().list.ids(), ["a"]);
}

#[test]
fn reset_to_configured_min_rating() {
    let mut config = Config::default();
    config.filter.default_min_rating = 3.0;
    let views = Views {
        controls: MockControls::default(),
        list: MockList::default(),
        map: MockMap::default(),
        detail: MockDetail::default(),
    };
    let mut c = Controller::new(config, views);
    c.load(places());
    c.change(CriteriaChange::MinRating("5".into())).unwrap();
    assert!(c.views().list.ids().is_empty());
    c.reset().unwrap();
    assert_eq!(c.views().list.ids(), ["a", "b"]);
}

#[test]
fn select_and_dismiss() {
    let mut c = loaded();
    c.select("a").unwrap();
    assert_eq!(c.state().modal, Modal::Open("a".into()));
    let map = &c.views().map;
    assert_eq!(map.view.map(|(_, zoom)| zoom), Some(14.0));
    assert_eq!(map.tooltips.len(), 1);
    assert_eq!(c.views().detail.shown[0].name, "Bistro");

    // Filtered out places can still be selected, but have no marker
    c.select("b").unwrap();
    assert_eq!(c.state().modal, Modal::Open("b".into()));
    assert_eq!(c.views().map.tooltips.len(), 1);

    c.dismiss();
    c.dismiss();
    assert_eq!(c.state().modal, Modal::Closed);
    assert_eq!(c.views().detail.hide_count, 1);
}

#[test]
fn reject_unknown_place() {
    let mut c = loaded();
    assert_eq!(c.select("z"), Err(Error::UnknownPlace("z".into())));
    assert!(!c.state().modal.is_open());
    assert!(c.views().detail.shown.is_empty());
}
