//! Favorite Toggle Controller
//!
//! Click-triggered round trips against the favorites API, followed by a
//! single visual update on the page.
//!
//! The controller never changes a control optimistically: a save control's
//! presentation only moves after the server named the new state, and a
//! recipe card only leaves the page after the delete request completed.
//! Requests for the same item are serialized; a second click while one is in
//! flight is ignored.

use std::cell::RefCell;
use std::collections::HashSet;

use crate::commands::FavoritesApi;
use crate::config::DeletePolicy;
use crate::error::ClientError;
use crate::models::{ItemId, ItemKind, Presentation};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this recipe?";

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// Everything the controller touches on the page
pub trait Page {
    /// Handle to one clickable control
    type Control;

    /// Blocking yes/no question to the user
    fn confirm(&self, prompt: &str) -> bool;

    /// Current presentation of a save control, if recognizable
    fn presentation(&self, control: &Self::Control) -> Option<Presentation>;

    /// Set the styling and label of a save control
    fn show_presentation(&self, control: &Self::Control, presentation: Presentation);

    /// Disable a control while its request is in flight
    fn set_busy(&self, control: &Self::Control, busy: bool);

    /// Remove the card enclosing `control`; `false` when there is none
    fn remove_card(&self, control: &Self::Control) -> bool;

    fn notify(&self, level: NoticeLevel, text: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The control now shows this presentation
    Applied(Presentation),
    /// Server answered with a message outside `Saved`/`Removed`
    Unrecognized(String),
    /// A toggle for this item was already in flight
    Busy,
    Failed(ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    Removed,
    /// Removed under `DeletePolicy::Unconditional` although the request failed
    RemovedDespite(ClientError),
    /// Request succeeded but the control had no enclosing card
    CardMissing,
    Busy,
    Failed(ClientError),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum InFlight {
    Save(ItemKind, ItemId),
    Delete(ItemId),
}

/// Releases an in-flight slot when the round trip ends, however it ends
struct InFlightGuard<'a> {
    slots: &'a RefCell<HashSet<InFlight>>,
    key: InFlight,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.slots.borrow_mut().remove(&self.key);
    }
}

pub struct FavoriteToggleController<A, P> {
    api: A,
    page: P,
    delete_policy: DeletePolicy,
    in_flight: RefCell<HashSet<InFlight>>,
}

impl<A: FavoritesApi, P: Page> FavoriteToggleController<A, P> {
    pub fn new(api: A, page: P, delete_policy: DeletePolicy) -> Self {
        Self {
            api,
            page,
            delete_policy,
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    fn claim(&self, key: InFlight) -> Option<InFlightGuard<'_>> {
        if !self.in_flight.borrow_mut().insert(key.clone()) {
            return None;
        }
        Some(InFlightGuard { slots: &self.in_flight, key })
    }

    /// Toggle the favorite status of a drink or ingredient
    pub async fn toggle_save(
        &self,
        kind: ItemKind,
        id: &ItemId,
        control: &P::Control,
    ) -> ToggleOutcome {
        let Some(_guard) = self.claim(InFlight::Save(kind, id.clone())) else {
            log::debug!("{} {} toggle already in flight", kind.as_str(), id);
            return ToggleOutcome::Busy;
        };

        let before = self.page.presentation(control);
        self.page.set_busy(control, true);
        let result = self.api.toggle_save(kind, id).await;
        self.page.set_busy(control, false);

        match result.map(Presentation::from_message) {
            Ok(Ok(presentation)) => {
                log::info!("{} {}: {:?} -> {:?}", kind.as_str(), id, before, presentation);
                self.page.show_presentation(control, presentation);
                ToggleOutcome::Applied(presentation)
            }
            Ok(Err(raw)) => {
                log::warn!("{} {}: unrecognized save message {:?}", kind.as_str(), id, raw);
                self.page.notify(NoticeLevel::Warning, "The server sent an unexpected reply.");
                ToggleOutcome::Unrecognized(raw)
            }
            Err(err) => {
                log::error!("{} {} toggle failed: {}", kind.as_str(), id, err);
                self.page.notify(NoticeLevel::Error, err.user_message());
                ToggleOutcome::Failed(err)
            }
        }
    }

    /// Delete a user-authored recipe after confirmation
    pub async fn delete_original(&self, id: &ItemId, control: &P::Control) -> DeleteOutcome {
        let Some(_guard) = self.claim(InFlight::Delete(id.clone())) else {
            log::debug!("original {} delete already in flight", id);
            return DeleteOutcome::Busy;
        };

        if !self.page.confirm(DELETE_PROMPT) {
            log::debug!("original {} delete declined", id);
            return DeleteOutcome::Declined;
        }

        self.page.set_busy(control, true);
        let result = self.api.delete_original(id).await;

        match (result, self.delete_policy) {
            (Ok(()), _) => {
                if self.page.remove_card(control) {
                    log::info!("original {} deleted", id);
                    DeleteOutcome::Removed
                } else {
                    log::warn!("original {} deleted but no enclosing card was found", id);
                    self.page.set_busy(control, false);
                    DeleteOutcome::CardMissing
                }
            }
            (Err(err), DeletePolicy::Unconditional) => {
                log::warn!("original {} delete failed, removing card anyway: {}", id, err);
                self.page.notify(NoticeLevel::Error, err.user_message());
                if !self.page.remove_card(control) {
                    self.page.set_busy(control, false);
                }
                DeleteOutcome::RemovedDespite(err)
            }
            (Err(err), DeletePolicy::RequireSuccess) => {
                log::error!("original {} delete failed: {}", id, err);
                self.page.set_busy(control, false);
                self.page.notify(NoticeLevel::Error, err.user_message());
                DeleteOutcome::Failed(err)
            }
        }
    }
}
