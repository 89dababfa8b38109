//! Notice Area Component
//!
//! Inline notifications; each one disappears on its own or when closed.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NoticeArea() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notice-area">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = notice.class();
                    view! {
                        <div class=class>
                            <i class="close icon" on:click=move |_| ctx.dismiss(id)></i>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
