//! The entry points of the application.
//!
//! The [`Controller`] owns the explicit application state and
//! the views. Every user interaction is mapped to one of its
//! methods, which update the state and re-render synchronously.

use std::fmt;

use placemap_entities::place::Place;

use crate::{
    config::Config,
    criteria::{CriteriaChange, FilterCriteria},
    error::Error,
    label::LOAD_FAILURE_NOTICE,
    modal::Modal,
    presenter::{detail, list, map, map::MarkerIndex},
    store::Store,
    view::*,
};

type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;

/// Loading of the places happens exactly once.
#[derive(Debug, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready(Store),
    Failed,
}

#[derive(Debug)]
pub struct AppState<H> {
    pub phase: Phase,
    pub criteria: FilterCriteria,
    pub markers: MarkerIndex<H>,
    pub modal: Modal,
}

impl<H> AppState<H> {
    fn new(criteria: FilterCriteria) -> Self {
        Self {
            phase: Phase::default(),
            criteria,
            markers: MarkerIndex::default(),
            modal: Modal::default(),
        }
    }
}

#[derive(Debug)]
pub struct Views<C, L, M, D> {
    pub controls: C,
    pub list: L,
    pub map: M,
    pub detail: D,
}

pub struct Controller<C, L, M, D>
where
    M: MapView,
{
    config: Config,
    state: AppState<M::Marker>,
    views: Views<C, L, M, D>,
}

impl<C, L, M, D> Controller<C, L, M, D>
where
    C: ControlsView,
    L: ListView,
    M: MapView,
    D: DetailView,
{
    pub fn new(config: Config, views: Views<C, L, M, D>) -> Self {
        let criteria = default_criteria(&config);
        Self {
            config,
            state: AppState::new(criteria),
            views,
        }
    }

    pub const fn state(&self) -> &AppState<M::Marker> {
        &self.state
    }

    pub const fn views(&self) -> &Views<C, L, M, D> {
        &self.views
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn is_loaded(&self) -> bool {
        matches!(self.state.phase, Phase::Ready(_))
    }

    /// Take over the loaded places and render them.
    pub fn load(&mut self, places: Vec<Place>) {
        log::info!("Loaded {} places", places.len());
        let store = Store::new(places);
        let Views { controls, .. } = &mut self.views;
        controls.set_district_options(&store.districts());
        controls.set_price_options(&store.prices());
        controls.show_criteria(&self.state.criteria);
        self.state.phase = Phase::Ready(store);
        if let Err(err) = self.apply_filters() {
            log::error!("Unable to render loaded places: {err}");
        }
    }

    /// Returns the notice that should be shown to the user.
    pub fn load_failed(&mut self, err: &dyn fmt::Display) -> &'static str {
        log::error!("Unable to load places: {err}");
        self.state.phase = Phase::Failed;
        LOAD_FAILURE_NOTICE
    }

    pub fn change(&mut self, change: CriteriaChange) -> Result<()> {
        log::debug!("Criteria changed: {change:?}");
        self.state.criteria.apply(change);
        self.apply_filters()
    }

    /// Restore the default criteria.
    pub fn reset(&mut self) -> Result<()> {
        self.state.criteria = default_criteria(&self.config);
        self.views.controls.show_criteria(&self.state.criteria);
        self.apply_filters()
    }

    /// Recompute the filtered places and re-render list and map.
    pub fn apply_filters(&mut self) -> Result<()> {
        let AppState {
            phase,
            criteria,
            markers,
            ..
        } = &mut self.state;
        let Phase::Ready(store) = phase else {
            return Err(Error::NotLoaded);
        };
        store.refilter(criteria);
        list::render(store.filtered(), &mut self.views.list);
        map::render(store.filtered(), markers, &mut self.views.map);
        Ok(())
    }

    /// Open the details of a place.
    pub fn select(&mut self, id: &str) -> Result<()> {
        let AppState {
            phase,
            markers,
            modal,
            ..
        } = &mut self.state;
        let Phase::Ready(store) = phase else {
            return Err(Error::NotLoaded);
        };
        let place = store
            .get(id)
            .ok_or_else(|| Error::UnknownPlace(id.to_owned()))?;
        let Views { map, detail, .. } = &mut self.views;
        detail::open(
            place,
            markers,
            modal,
            map,
            detail,
            self.config.map.min_detail_zoom,
        );
        Ok(())
    }

    /// Close the details, if open.
    pub fn dismiss(&mut self) {
        if detail::dismiss(&mut self.state.modal, &mut self.views.detail) {
            log::debug!("Closed details");
        }
    }
}

fn default_criteria(config: &Config) -> FilterCriteria {
    FilterCriteria::with_min_rating(config.filter.default_min_rating)
}
