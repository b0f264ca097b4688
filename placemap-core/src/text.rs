use placemap_entities::place::Place;

use crate::label::category_label;

/// Trim and lowercase a text for comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// The searchable text of a place.
///
/// Absent fields contribute an empty string.
pub fn haystack(place: &Place) -> String {
    let Place {
        name,
        short,
        notes,
        district,
        price,
        category,
        ..
    } = place;
    let fields = [
        name.as_str(),
        short.as_deref().unwrap_or_default(),
        notes.as_deref().unwrap_or_default(),
        district.as_deref().unwrap_or_default(),
        price.as_deref().unwrap_or_default(),
        category_label(category),
    ];
    normalize(&fields.join(" "))
}
