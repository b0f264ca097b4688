use maud::{html, Markup};
use placemap_entities::{id::Id, place::Place, url::Url};

use super::{map::MarkerIndex, Escaped};
use crate::{
    label::*,
    modal::Modal,
    view::{DetailView, MapView},
};

/// The focused view of a single place.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailContent {
    pub id: Id,
    pub name: String,
    pub category: &'static str,
    pub district: String,
    pub price: String,
    pub rating: String,
    pub notes: Option<String>,
    /// Only web links are offered.
    pub maps_link: Option<Url>,
}

impl From<&Place> for DetailContent {
    fn from(place: &Place) -> Self {
        let maps_link = place
            .links
            .maps
            .as_ref()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .cloned();
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            category: category_label(&place.category),
            district: district_label(place).to_owned(),
            price: price_label(place).to_owned(),
            rating: rating_label(place),
            notes: place.notes.clone(),
            maps_link,
        }
    }
}

impl DetailContent {
    pub fn meta_line(&self) -> String {
        format!(
            "{} · {DISTRICT_PREFIX} {} · {} · ★ {}",
            self.category, self.district, self.price, self.rating
        )
    }

    pub fn markup(&self) -> Markup {
        html! {
            div class="modalContent" {
                h3 class="modalTitle" { (Escaped(&self.name)) }
                p class="modalMeta" { (Escaped(&self.meta_line())) }
                @if let Some(notes) = &self.notes {
                    p class="modalText" { (Escaped(notes)) }
                }
                div class="modalLinks" {
                    @if let Some(url) = &self.maps_link {
                        a href=(Escaped(url.as_str())) target="_blank" rel="noopener" {
                            (MAPS_LINK_TEXT)
                        }
                    }
                }
            }
        }
    }
}

/// Show the details of a place and focus it on the map.
pub fn open<M, D>(
    place: &Place,
    markers: &MarkerIndex<M::Marker>,
    modal: &mut Modal,
    map: &mut M,
    detail: &mut D,
    min_detail_zoom: f64,
) where
    M: MapView,
    D: DetailView,
{
    if let Some(pos) = place.pos {
        let zoom = map.zoom().max(min_detail_zoom);
        map.set_view(pos, zoom);
        if let Some(marker) = markers.get(place.id.as_str()) {
            map.open_tooltip(marker);
        }
    }
    detail.show(&DetailContent::from(place));
    modal.open(place.id.clone());
    log::debug!("Opened place '{}'", place.id);
}

/// Returns `false` if there was nothing to close.
pub fn dismiss<D: DetailView>(modal: &mut Modal, detail: &mut D) -> bool {
    if !modal.close() {
        return false;
    }
    detail.hide();
    true
}

/// The box of the detail dialog in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl DialogBounds {
    /// Clicks on the backdrop of a modal dialog target the dialog
    /// itself, and so do clicks on its border and padding.
    #[must_use]
    pub fn is_backdrop_click(&self, x: f64, y: f64) -> bool {
        x < self.left || x > self.right || y < self.top || y > self.bottom
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::presenter::map::{self, tests::MockMap};
    use placemap_entities::{builders::*, geo::MapPoint};

    #[derive(Debug, Default)]
    pub struct MockDetail {
        pub shown: Vec<DetailContent>,
        pub hide_count: usize,
    }

    impl DetailView for MockDetail {
        fn show(&mut self, content: &DetailContent) {
            self.shown.push(content.clone());
        }
        fn hide(&mut self) {
            self.hide_count += 1;
        }
    }

    fn budapest() -> Place {
        Place::build()
            .id("a")
            .name("Bistro")
            .category("eat")
            .district("5")
            .price("$$")
            .rating(4.5)
            .notes("Cosy")
            .pos(47.50, 19.04)
            .maps_link("https://maps.google.com/?q=bistro")
            .finish()
    }

    #[test]
    fn build_content() {
        let c = DetailContent::from(&budapest());
        assert_eq!(c.name, "Bistro");
        assert_eq!(c.meta_line(), "Поесть · Район 5 · $$ · ★ 4.5");
        assert_eq!(c.notes.as_deref(), Some("Cosy"));
        assert!(c.maps_link.is_some());
    }

    #[test]
    fn use_placeholders() {
        let c = DetailContent::from(&Place::build().id("x").name("X").finish());
        assert_eq!(c.meta_line(), "Посмотреть · Район — · — · ★ —");
        let html = c.markup().into_string();
        assert!(!html.contains("modalText"));
        assert!(!html.contains("<a "));
        assert!(html.contains(r#"<div class="modalLinks"></div>"#));
    }

    #[test]
    fn drop_non_web_links() {
        let p = Place::build().maps_link("javascript:alert(1)").finish();
        assert!(DetailContent::from(&p).maps_link.is_none());
    }

    #[test]
    fn render_link() {
        let html = DetailContent::from(&budapest()).markup().into_string();
        assert!(html.contains(
            r#"<a href="https://maps.google.com/?q=bistro" target="_blank" rel="noopener">Открыть в Google Maps</a>"#
        ));
        assert!(html.contains(r#"<p class="modalText">Cosy</p>"#));
    }

    #[test]
    fn escape_all_text_fields() {
        let evil = r#"<script>"x" & 'y'</script>"#;
        let p = Place::build()
            .name(evil)
            .district(evil)
            .price(evil)
            .notes(evil)
            .maps_link("https://example.com/?q=<b>\"x\"")
            .finish();
        let html = DetailContent::from(&p).markup().into_string();
        assert!(!html.contains("<script"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("'y'"));
        assert!(!html.contains(r#""x""#));
    }

    #[test]
    fn raise_zoom_when_opening() {
        let place = budapest();
        let mut map = MockMap::with_zoom(10.0);
        let mut detail = MockDetail::default();
        let mut modal = Modal::default();
        let mut index = MarkerIndex::default();
        map::render(std::iter::once(&place), &mut index, &mut map);
        open(&place, &index, &mut modal, &mut map, &mut detail, 14.0);
        assert_eq!(map.view, Some((MapPoint::from_lat_lng_deg(47.50, 19.04), 14.0)));
        assert_eq!(map.tooltips, [1]);
        assert_eq!(detail.shown.len(), 1);
        assert_eq!(modal, Modal::Open("a".into()));
    }

    #[test]
    fn keep_higher_zoom_when_opening() {
        let place = budapest();
        let mut map = MockMap::with_zoom(16.0);
        let mut detail = MockDetail::default();
        let mut modal = Modal::default();
        open(&place, &MarkerIndex::default(), &mut modal, &mut map, &mut detail, 14.0);
        assert_eq!(map.view, Some((MapPoint::from_lat_lng_deg(47.50, 19.04), 16.0)));
        // No marker, no tooltip
        assert!(map.tooltips.is_empty());
    }

    #[test]
    fn open_unmappable_place_without_moving_the_map() {
        let place = Place::build().id("b").finish();
        let mut map = MockMap::with_zoom(10.0);
        let mut detail = MockDetail::default();
        let mut modal = Modal::default();
        open(&place, &MarkerIndex::default(), &mut modal, &mut map, &mut detail, 14.0);
        assert!(map.view.is_none());
        assert!(modal.is_open());
        assert_eq!(detail.shown.len(), 1);
    }

    #[test]
    fn dismiss_twice() {
        let mut detail = MockDetail::default();
        let mut modal = Modal::Open("a".into());
        assert!(dismiss(&mut modal, &mut detail));
        assert!(!dismiss(&mut modal, &mut detail));
        assert_eq!(detail.hide_count, 1);
        assert_eq!(modal, Modal::Closed);
    }

    #[test]
    fn only_clicks_beyond_the_dialog_box_hit_the_backdrop() {
        let bounds = DialogBounds {
            left: 100.0,
            top: 50.0,
            right: 620.0,
            bottom: 450.0,
        };
        // border and padding
        assert!(!bounds.is_backdrop_click(100.0, 200.0));
        assert!(!bounds.is_backdrop_click(619.5, 449.0));
        assert!(!bounds.is_backdrop_click(300.0, 50.0));
        // backdrop
        assert!(bounds.is_backdrop_click(99.0, 200.0));
        assert!(bounds.is_backdrop_click(300.0, 451.0));
        assert!(bounds.is_backdrop_click(700.0, 10.0));
    }
}
