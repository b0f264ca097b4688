//! Human-readable texts of the user interface.

use placemap_entities::{category::Category, place::Place};

pub const PLACEHOLDER: &str = "—";
pub const DISTRICT_PREFIX: &str = "Район";
pub const MAPS_LINK_TEXT: &str = "Открыть в Google Maps";
pub const LOAD_FAILURE_NOTICE: &str = "Не удалось загрузить данные. Проверь places.json и консоль.";

pub const fn category_label(category: &Category) -> &'static str {
    match category {
        Category::Eat => "Поесть",
        Category::Drink => "Попить",
        // Unknown categories share the label of the last known one
        Category::See | Category::Other(_) => "Посмотреть",
    }
}

/// Values and labels of the category selector.
pub fn category_options() -> Vec<(&'static str, &'static str)> {
    Category::KNOWN
        .iter()
        .map(|c| match c {
            Category::Eat => ("eat", category_label(c)),
            Category::Drink => ("drink", category_label(c)),
            Category::See | Category::Other(_) => ("see", category_label(c)),
        })
        .collect()
}

pub fn count_label(count: usize) -> String {
    format!("{count} мест")
}

pub fn district_label(place: &Place) -> &str {
    place.district.as_deref().unwrap_or(PLACEHOLDER)
}

pub fn price_label(place: &Place) -> &str {
    place.price.as_deref().unwrap_or(PLACEHOLDER)
}

pub fn rating_label(place: &Place) -> String {
    place
        .rating
        .map_or_else(|| PLACEHOLDER.to_owned(), |r| r.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use placemap_entities::builders::*;

    #[test]
    fn label_categories() {
        assert_eq!(category_label(&Category::Eat), "Поесть");
        assert_eq!(category_label(&Category::Drink), "Попить");
        assert_eq!(category_label(&Category::See), "Посмотреть");
        assert_eq!(category_label(&Category::Other("shop".into())), "Посмотреть");
    }

    #[test]
    fn use_placeholders_for_missing_fields() {
        let p = Place::build().finish();
        assert_eq!(district_label(&p), PLACEHOLDER);
        assert_eq!(price_label(&p), PLACEHOLDER);
        assert_eq!(rating_label(&p), PLACEHOLDER);
        let p = Place::build().district("5").price("$$").rating(4.0).finish();
        assert_eq!(district_label(&p), "5");
        assert_eq!(price_label(&p), "$$");
        assert_eq!(rating_label(&p), "4.0");
    }

    #[test]
    fn offer_known_categories() {
        assert_eq!(
            category_options(),
            [("eat", "Поесть"), ("drink", "Попить"), ("see", "Посмотреть")]
        );
    }

    #[test]
    fn count_places() {
        assert_eq!(count_label(0), "0 мест");
        assert_eq!(count_label(1), "1 мест");
    }
}
