use leptos::*;

use placemap_core::presenter::list::ListItem;
use placemap_entities::id::Id;

#[component]
pub fn PlaceList(
    count: ReadSignal<String>,
    items: ReadSignal<Vec<ListItem>>,
    #[prop(into)] on_select: Callback<Id>,
) -> impl IntoView {
    view! {
      <div class="listHeader">
        <span id="count">{count}</span>
      </div>
      <div id="list">
        // Ids are not guaranteed to be unique
        <For
          each=move || items.get().into_iter().enumerate()
          key=|(pos, item)| (*pos, item.id.clone())
          children=move |(_, item)| view! { <PlaceCard item on_select /> }
        />
      </div>
    }
}

#[component]
fn PlaceCard(item: ListItem, on_select: Callback<Id>) -> impl IntoView {
    let markup = item.markup().into_string();
    let id = item.id;
    let on_click = {
        let id = id.clone();
        move |_: ev::MouseEvent| on_select.call(id.clone())
    };
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if matches!(ev.key().as_str(), "Enter" | " ") {
            ev.prevent_default();
            on_select.call(id.clone());
        }
    };
    view! {
      <article
        class="card"
        tabindex="0"
        role="button"
        on:click=on_click
        on:keydown=on_keydown
        inner_html=markup
      />
    }
}
