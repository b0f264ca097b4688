pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::place_builder::*;

pub mod place_builder {

    use super::*;
    use crate::{category::*, geo::*, id::*, links::*, place::*};

    #[derive(Debug)]
    pub struct PlaceBuild {
        place: Place,
    }

    impl PlaceBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.place.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.place.name = name.into();
            self
        }
        pub fn category(mut self, category: &str) -> Self {
            self.place.category = Category::from_raw(category);
            self
        }
        pub fn district(mut self, district: &str) -> Self {
            self.place.district = Some(district.into());
            self
        }
        pub fn price(mut self, price: &str) -> Self {
            self.place.price = Some(price.into());
            self
        }
        pub fn rating(mut self, rating: f64) -> Self {
            self.place.rating = Some(rating.into());
            self
        }
        pub fn short(mut self, short: &str) -> Self {
            self.place.short = Some(short.into());
            self
        }
        pub fn notes(mut self, notes: &str) -> Self {
            self.place.notes = Some(notes.into());
            self
        }
        pub fn pos(mut self, lat: f64, lng: f64) -> Self {
            self.place.pos = Some(MapPoint::from_lat_lng_deg(lat, lng));
            self
        }
        pub fn maps_link(mut self, url: &str) -> Self {
            self.place.links.maps = Some(url.parse().unwrap());
            self
        }
        pub fn finish(self) -> Place {
            self.place
        }
    }

    impl Builder for Place {
        type Build = PlaceBuild;
        fn build() -> PlaceBuild {
            PlaceBuild {
                place: Place {
                    id: Id::from("place"),
                    name: "".into(),
                    category: Category::See,
                    district: None,
                    price: None,
                    rating: None,
                    short: None,
                    notes: None,
                    pos: None,
                    links: Links::default(),
                },
            }
        }
    }
}
