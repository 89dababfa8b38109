//! Page Dimmer Component
//!
//! Blocks input on the page while a bulk request is in flight.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn PageDimmer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div
            id="dimmer_of_page"
            class=move || if ctx.busy.get() { "ui page dimmer active" } else { "ui page dimmer" }
        >
            <div class="ui loader"></div>
        </div>
    }
}
