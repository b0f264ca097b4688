use url::Url;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links {
    /// External map service, e.g. Google Maps.
    pub maps: Option<Url>,
}
