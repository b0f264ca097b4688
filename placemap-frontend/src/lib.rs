use std::{cell::RefCell, rc::Rc};

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use placemap_core::{
    presenter::{detail::DetailContent, list::ListItem},
    Config, Controller, CriteriaChange, FilterCriteria, Views,
};
use placemap_entities::{id::Id, place::Place};
use placemap_frontend_api::PlacesApi;

mod components;
mod views;

use self::{components::*, views::*};

type AppController = Controller<SignalControls, SignalList, LeafletMap, SignalDetail>;

// Event handlers and the loading task share the controller.
// None of them runs while another one is borrowing it.
type SharedController = Rc<RefCell<AppController>>;

const CONFIG: &str = include_str!("../placemap.toml");

fn load_config() -> Config {
    Config::try_from_toml_str(CONFIG).unwrap_or_else(|err| {
        log::warn!("Invalid configuration, using defaults: {err}");
        Config::default()
    })
}

#[allow(clippy::too_many_lines)]
#[component]
#[must_use]
pub fn App() -> impl IntoView {
    let config = load_config();
    let (center, zoom) = (config.map.center, config.map.zoom);

    // -- signals -- //

    let (criteria, set_criteria) = create_signal(FilterCriteria::default());
    let (districts, set_districts) = create_signal(Vec::<String>::new());
    let (prices, set_prices) = create_signal(Vec::<String>::new());
    let (count, set_count) = create_signal(String::new());
    let (items, set_items) = create_signal(Vec::<ListItem>::new());
    let (detail, set_detail) = create_signal(None::<DetailContent>);
    let (selected, set_selected) = create_signal(None::<Id>);
    let notice = RwSignal::new(None::<&'static str>);

    let map = RwSignal::new(None::<leaflet::Map>);
    let dialog_ref = NodeRef::<html::Dialog>::new();
    let controller = store_value(None::<SharedController>);

    // -- init map and load places -- //

    Effect::new(move |_| {
        let Some(leaflet_map) = map.get() else {
            return;
        };
        if controller.with_value(Option::is_some) {
            return;
        }
        log::debug!("Initialize map");
        let views = Views {
            controls: SignalControls {
                districts: set_districts,
                prices: set_prices,
                criteria: set_criteria,
            },
            list: SignalList {
                count: set_count,
                items: set_items,
            },
            map: LeafletMap::new(leaflet_map, &config.map, set_selected),
            detail: SignalDetail {
                content: set_detail,
                dialog: dialog_ref,
            },
        };
        let shared = Rc::new(RefCell::new(Controller::new(config.clone(), views)));
        controller.set_value(Some(Rc::clone(&shared)));
        let api = PlacesApi::new(config.data.url.clone());
        spawn_local(async move {
            load_places(&api, &shared, notice).await;
        });
    });

    // -- effects -- //

    // Selections from the list and from the map end up here
    Effect::new(move |_| {
        let Some(id) = selected.get() else {
            return;
        };
        untrack(|| {
            with_controller(controller, |c| {
                if let Err(err) = c.select(id.as_str()) {
                    log::warn!("Unable to open place: {err}");
                }
            });
        });
    });

    // -- callbacks -- //

    let on_change = move |change: CriteriaChange| {
        with_controller(controller, move |c| {
            if let Err(err) = c.change(change) {
                log::debug!("Unable to apply filters: {err}");
            }
        });
    };

    let on_reset = move |()| {
        with_controller(controller, |c| {
            if let Err(err) = c.reset() {
                log::debug!("Unable to reset filters: {err}");
            }
        });
    };

    let on_select = move |id: Id| set_selected.set(Some(id));

    let on_dismiss = move |()| with_controller(controller, AppController::dismiss);

    view! {
      <header class="top">
        <h1>"placemap"</h1>
      </header>
      <Show when=move || notice.get().is_some()>
        <div class="notice" role="alert">{move || notice.get()}</div>
      </Show>
      <main class="layout">
        <aside class="sidebar">
          <Filters criteria districts prices on_change on_reset />
          <PlaceList count items on_select />
        </aside>
        <PlaceMap center zoom map=map.write_only() />
      </main>
      <DetailDialog content=detail dialog_ref on_dismiss />
    }
}

fn with_controller(
    controller: StoredValue<Option<SharedController>>,
    f: impl FnOnce(&mut AppController),
) {
    let Some(shared) = controller.get_value() else {
        log::debug!("Map is not initialized yet");
        return;
    };
    let Ok(mut controller) = shared.try_borrow_mut() else {
        log::warn!("Controller is busy");
        return;
    };
    f(&mut controller);
}

async fn load_places(
    api: &PlacesApi,
    controller: &SharedController,
    notice: RwSignal<Option<&'static str>>,
) {
    match fetch_places(api).await {
        Ok(places) => {
            controller.borrow_mut().load(places);
        }
        Err(err) => {
            let text = controller.borrow_mut().load_failed(&err);
            notice.set(Some(text));
            if let Err(err) = window().alert_with_message(text) {
                log::warn!("Unable to show notice: {err:?}");
            }
        }
    }
}

async fn fetch_places(api: &PlacesApi) -> anyhow::Result<Vec<Place>> {
    log::info!("Load places from {}", api.url());
    let places = api.places().await?;
    Ok(places.into_iter().map(Place::from).collect())
}
