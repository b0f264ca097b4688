use maud::{html, Markup};
use placemap_entities::{id::Id, place::Place};

use super::Escaped;
use crate::{label::*, view::ListView};

/// A single entry of the list of places.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub id: Id,
    pub category: &'static str,
    pub district: String,
    pub price: String,
    pub rating: String,
    pub name: String,
    pub short: String,
}

impl From<&Place> for ListItem {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            category: category_label(&place.category),
            district: district_label(place).to_owned(),
            price: price_label(place).to_owned(),
            rating: rating_label(place),
            name: place.name.clone(),
            short: place.short.clone().unwrap_or_default(),
        }
    }
}

impl ListItem {
    /// The content of the card (`article.card`).
    pub fn markup(&self) -> Markup {
        let Self {
            id,
            category,
            district,
            price,
            rating,
            name,
            short,
        } = self;
        html! {
            div class="cardTop" {
                div class="badges" {
                    span class="badge" { (Escaped(category)) }
                    span class="badge" { (DISTRICT_PREFIX) " " (Escaped(district)) }
                    span class="badge" { (Escaped(price)) }
                }
                span class="badge" { "★ " (Escaped(rating)) }
            }
            div class="title" { (Escaped(name)) }
            p class="desc" { (Escaped(short)) }
            div class="small" {
                span { "id: " (Escaped(id.as_str())) }
            }
        }
    }
}

/// Project the filtered places into the list view.
pub fn render<'a, V>(places: impl Iterator<Item = &'a Place>, view: &mut V)
where
    V: ListView,
{
    let items: Vec<_> = places.map(ListItem::from).collect();
    let count = count_label(items.len());
    view.render(&count, items);
}
