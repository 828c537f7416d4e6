//! Notice Tray Component
//!
//! Stack of transient notices, newest at the bottom.

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_notice_store, NoticeStateStoreFields};

#[component]
pub fn NoticeTray() -> impl IntoView {
    let store = use_notice_store();

    view! {
        <div class="notice-tray" role="status" aria-live="polite">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = notice.css_class();
                    let text = notice.text;
                    view! {
                        <div class=class>
                            <span class="notice-text">{text}</span>
                            <button
                                class="btn-close"
                                aria-label="Dismiss"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    store_dismiss_notice(&store, id);
                                }
                            ></button>
                        </div>
                    }
                }
            />
        </div>
    }
}
