use leptos::*;
use wasm_bindgen::JsCast;

use placemap_core::presenter::detail::{DetailContent, DialogBounds};

#[component]
pub fn DetailDialog(
    content: ReadSignal<Option<DetailContent>>,
    dialog_ref: NodeRef<html::Dialog>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    let markup = move || {
        content.with(|c| {
            c.as_ref()
                .map(|c| c.markup().into_string())
                .unwrap_or_default()
        })
    };
    let on_backdrop_click = move |ev: ev::MouseEvent| {
        let on_dialog = ev
            .target()
            .is_some_and(|t| t.dyn_ref::<web_sys::HtmlDialogElement>().is_some());
        if !on_dialog {
            return;
        }
        let Some(dialog) = dialog_ref.get_untracked() else {
            return;
        };
        let rect = dialog.get_bounding_client_rect();
        let bounds = DialogBounds {
            left: rect.left(),
            top: rect.top(),
            right: rect.right(),
            bottom: rect.bottom(),
        };
        if bounds.is_backdrop_click(f64::from(ev.client_x()), f64::from(ev.client_y())) {
            on_dismiss.call(());
        }
    };
    view! {
      <dialog
        id="modal"
        node_ref=dialog_ref
        on:click=on_backdrop_click
        // Escape closes the dialog, too
        on:close=move |_| on_dismiss.call(())
      >
        <div class="modalInner">
          <button
            id="closeModal"
            class="modalClose"
            aria-label="Закрыть"
            on:click=move |_| on_dismiss.call(())
          >
            "✕"
          </button>
          <div id="modalBody" inner_html=markup />
        </div>
      </dialog>
    }
}
