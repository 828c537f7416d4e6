//! Cocktail Favorites App
//!
//! Root component: reads the page configuration, wires the favorite toggle
//! controller to the server-rendered controls, and renders the notice tray.

use std::rc::Rc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpFavoritesApi;
use crate::components::NoticeTray;
use crate::controller::{FavoriteToggleController, NoticeLevel};
use crate::dom::{self, DomPage};
use crate::store::{store_push_notice, NoticeState, NoticeStore};

#[component]
pub fn App() -> impl IntoView {
    let notices: NoticeStore = Store::new(NoticeState::default());
    provide_context(notices);

    let (config, errors) = dom::read_config();
    for e in &errors {
        log::error!("{}; using the default for this setting", e);
    }
    if let Some(e) = errors.first() {
        store_push_notice(&notices, NoticeLevel::Error, e.user_message());
    }
    log::set_max_level(config.log_level);
    log::info!("favorites API at {}, delete policy {:?}", config.api_base, config.delete_policy);

    let controller = Rc::new(FavoriteToggleController::new(
        HttpFavoritesApi::new(&config),
        DomPage::new(notices, config.notice_ttl_ms),
        config.delete_policy,
    ));
    let bound = dom::bind_controls(controller);
    log::debug!("{} favorite controls on page", bound);

    view! {
        <NoticeTray />
    }
}
