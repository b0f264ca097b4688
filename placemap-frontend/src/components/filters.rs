use leptos::*;

use placemap_core::{label::category_options, CriteriaChange, FilterCriteria};
use placemap_entities::category::Category;

#[component]
pub fn Filters(
    criteria: ReadSignal<FilterCriteria>,
    districts: ReadSignal<Vec<String>>,
    prices: ReadSignal<Vec<String>>,
    #[prop(into)] on_change: Callback<CriteriaChange>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let category_value = move || {
        criteria.with(|c| {
            c.category
                .as_ref()
                .map(Category::as_str)
                .unwrap_or_default()
                .to_owned()
        })
    };
    let district_value = move || criteria.with(|c| c.district.clone().unwrap_or_default());
    let price_value = move || criteria.with(|c| c.price.clone().unwrap_or_default());

    view! {
      <div class="filters">
        <input
          id="q"
          type="search"
          placeholder="Поиск"
          prop:value=move || criteria.with(|c| c.query.clone())
          on:input=move |ev| on_change.call(CriteriaChange::Query(event_target_value(&ev)))
        />
        <select
          id="category"
          prop:value=category_value
          on:change=move |ev| on_change.call(CriteriaChange::Category(event_target_value(&ev)))
        >
          <option value="">"Все категории"</option>
          {category_options()
            .into_iter()
            .map(|(value, label)| view! { <option value=value>{label}</option> })
            .collect_view()}
        </select>
        <select
          id="district"
          prop:value=district_value
          on:change=move |ev| on_change.call(CriteriaChange::District(event_target_value(&ev)))
        >
          <option value="">"Все районы"</option>
          <Options values=districts />
        </select>
        <select
          id="price"
          prop:value=price_value
          on:change=move |ev| on_change.call(CriteriaChange::Price(event_target_value(&ev)))
        >
          <option value="">"Любой чек"</option>
          <Options values=prices />
        </select>
        <input
          id="minRating"
          type="number"
          min="0"
          max="5"
          step="0.1"
          prop:value=move || criteria.with(FilterCriteria::min_rating_value)
          on:change=move |ev| on_change.call(CriteriaChange::MinRating(event_target_value(&ev)))
        />
        <button id="reset" on:click=move |_| on_reset.call(())>"Сбросить"</button>
      </div>
    }
}

#[component]
fn Options(values: ReadSignal<Vec<String>>) -> impl IntoView {
    view! {
      <For
        each=move || values.get()
        key=String::clone
        children=|value| view! { <option value=value.clone()>{value}</option> }
      />
    }
}
