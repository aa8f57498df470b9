//! Item Form Component
//!
//! Create/edit form. The same fields serve both modes; the app state's
//! `editing_id` decides which store call the submit turns into.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

/// Form for creating or editing an item
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="item-form" on:submit=on_submit>
            <ErrorBanner />

            <div class="field">
                <label class="field-label">"Name *"</label>
                <input
                    type="text"
                    placeholder="Enter item name"
                    required
                    prop:value=move || store.draft().with(|d| d.name.clone())
                    on:input=move |ev| ctx.set_name(event_target_value(&ev))
                />
            </div>

            <div class="field">
                <label class="field-label">"Description"</label>
                <textarea
                    placeholder="Enter item description"
                    rows="3"
                    prop:value=move || store.draft().with(|d| d.description.clone())
                    on:input=move |ev| {
                        let area = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlTextAreaElement>().ok());
                        if let Some(area) = area {
                            ctx.set_description(area.value());
                        }
                    }
                ></textarea>
            </div>

            <div class="form-actions">
                <button
                    type="submit"
                    class="primary-btn"
                    prop:disabled=move || store.loading().get()
                >
                    "💾 " {move || store.with(|s| s.submit_label())}
                </button>
                <button type="button" class="secondary-btn" on:click=move |_| ctx.cancel()>
                    "✕ Cancel"
                </button>
            </div>
        </form>
    }
}

/// Inline message of the last failure
#[component]
fn ErrorBanner() -> impl IntoView {
    let store = use_app_context().store;

    move || {
        store.error().get().map(|error| view! {
            <div class="error-banner">{error.to_string()}</div>
        })
    }
}
