//! Page Bindings
//!
//! Connects the controller to server-rendered markup: one delegated click
//! listener on `document`, and a `Page` implementation over web-sys.
//!
//! Markup contract: save controls carry `.saveDrink` or `.saveIngredient`
//! and a `data-id`; delete controls carry `.deleteOg` and a `data-id` and sit
//! inside a `.parentCard`.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::commands::FavoritesApi;
use crate::config::ClientConfig;
use crate::controller::{FavoriteToggleController, NoticeLevel, Page};
use crate::error::ClientError;
use crate::models::{ControlAction, ItemId, Presentation};
use crate::store::{store_dismiss_notice, store_push_notice, NoticeStore};

pub const CARD_SELECTOR: &str = ".parentCard";

pub type DomController<A> = FavoriteToggleController<A, DomPage>;

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Read `<meta name="favorites-*" content="...">` settings from the page
pub fn read_config() -> (ClientConfig, Vec<ClientError>) {
    let doc = document();
    ClientConfig::from_lookup(|key| {
        let doc = doc.as_ref()?;
        let selector = format!(r#"meta[name="{}"]"#, key);
        let meta = doc.query_selector(&selector).ok().flatten()?;
        meta.get_attribute("content")
    })
}

pub struct DomPage {
    notices: NoticeStore,
    notice_ttl_ms: u32,
}

impl DomPage {
    pub fn new(notices: NoticeStore, notice_ttl_ms: u32) -> Self {
        Self { notices, notice_ttl_ms }
    }
}

impl Page for DomPage {
    type Control = Element;

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn presentation(&self, control: &Element) -> Option<Presentation> {
        Presentation::from_class_list(&control.class_name())
    }

    fn show_presentation(&self, control: &Element, presentation: Presentation) {
        control.set_class_name(&presentation.apply_to_class_list(&control.class_name()));
        control.set_text_content(Some(presentation.label()));
    }

    fn set_busy(&self, control: &Element, busy: bool) {
        let result = if busy {
            control
                .set_attribute("disabled", "")
                .and_then(|_| control.set_attribute("aria-busy", "true"))
        } else {
            control
                .remove_attribute("disabled")
                .and_then(|_| control.remove_attribute("aria-busy"))
        };
        if let Err(e) = result {
            log::debug!("could not set busy={} on control: {:?}", busy, e);
        }
    }

    fn remove_card(&self, control: &Element) -> bool {
        match control.closest(CARD_SELECTOR) {
            Ok(Some(card)) => {
                card.remove();
                true
            }
            _ => false,
        }
    }

    fn notify(&self, level: NoticeLevel, text: &str) {
        let id = store_push_notice(&self.notices, level, text);
        let notices = self.notices;
        let ttl = self.notice_ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl).await;
            store_dismiss_notice(&notices, id);
        });
    }
}

/// Find the control a click landed on, walking up from the event target
fn match_control(target: Element) -> Option<(ControlAction, Element)> {
    let mut current = Some(target);
    while let Some(el) = current {
        if let Some(action) = ControlAction::from_class_list(&el.class_name()) {
            return Some((action, el));
        }
        current = el.parent_element();
    }
    None
}

/// Attach the delegated click listener; returns how many controls are on the page
pub fn bind_controls<A: FavoritesApi + 'static>(controller: Rc<DomController<A>>) -> usize {
    let Some(doc) = document() else {
        log::error!("no document; controls not bound");
        return 0;
    };

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Some((action, control)) = match_control(target) else {
            return;
        };
        ev.prevent_default();

        let id = match ItemId::from_attribute(control.get_attribute("data-id").as_deref()) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("{} control ignored: {}", action.selector(), e);
                return;
            }
        };

        let controller = controller.clone();
        spawn_local(async move {
            match action {
                ControlAction::Save(kind) => {
                    controller.toggle_save(kind, &id, &control).await;
                }
                ControlAction::DeleteOriginal => {
                    controller.delete_original(&id, &control).await;
                }
            }
        });
    });

    let listener = on_click.as_ref().unchecked_ref();
    if let Err(e) = doc.add_event_listener_with_callback("click", listener) {
        log::error!("failed to bind click listener: {:?}", e);
        return 0;
    }
    on_click.forget();

    ControlAction::ALL
        .iter()
        .map(|action| {
            doc.query_selector_all(action.selector())
                .map(|nodes| nodes.length() as usize)
                .unwrap_or(0)
        })
        .sum()
}
