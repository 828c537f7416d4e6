//! Notice Store
//!
//! Transient user-facing notices, held in a reactive_stores store so the
//! tray re-renders only when the notice list changes.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::NoticeLevel;

/// Most notices shown at once; older ones are evicted first
pub const MAX_VISIBLE_NOTICES: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    /// Bootstrap alert classes for the notice level
    pub fn css_class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Warning => "alert alert-warning notice",
            NoticeLevel::Error => "alert alert-danger notice",
        }
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct NoticeState {
    /// Visible notices, oldest first
    pub notices: Vec<Notice>,
    /// Id handed to the next notice
    pub next_id: u64,
}

/// Type alias for the store
pub type NoticeStore = Store<NoticeState>;

/// Get the notice store from context
pub fn use_notice_store() -> NoticeStore {
    expect_context::<NoticeStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a notice and return its id
pub fn store_push_notice(store: &NoticeStore, level: NoticeLevel, text: &str) -> u64 {
    let next_id = store.next_id();
    let id = {
        let mut next_id = next_id.write();
        let id = *next_id;
        *next_id += 1;
        id
    };
    let notices = store.notices();
    push_capped(
        &mut notices.write(),
        Notice { id, level, text: text.to_string() },
        MAX_VISIBLE_NOTICES,
    );
    id
}

/// Remove a notice by ID
pub fn store_dismiss_notice(store: &NoticeStore, id: u64) {
    let notices = store.notices();
    dismiss(&mut notices.write(), id);
}

fn push_capped(notices: &mut Vec<Notice>, notice: Notice, cap: usize) {
    notices.push(notice);
    if notices.len() > cap {
        let excess = notices.len() - cap;
        notices.drain(..excess);
    }
}

fn dismiss(notices: &mut Vec<Notice>, id: u64) -> bool {
    let before = notices.len();
    notices.retain(|notice| notice.id != id);
    notices.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(id: u64) -> Notice {
        Notice { id, level: NoticeLevel::Error, text: format!("notice {}", id) }
    }

    #[test]
    fn test_push_evicts_oldest() {
        let mut notices = Vec::new();
        for id in 0..7 {
            push_capped(&mut notices, notice(id), 5);
        }
        let ids: Vec<u64> = notices.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_dismiss() {
        let mut notices = vec![notice(1), notice(2)];
        assert!(dismiss(&mut notices, 1));
        assert!(!dismiss(&mut notices, 1));
        assert_eq!(notices, vec![notice(2)]);
    }

    #[test]
    fn test_store_helpers() {
        let owner = Owner::new();
        owner.with(|| {
            let store: NoticeStore = Store::new(NoticeState::default());
            for _ in 0..6 {
                store_push_notice(&store, NoticeLevel::Warning, "slow down");
            }
            let last = store_push_notice(&store, NoticeLevel::Error, "failed");
            assert_eq!(last, 6);
            assert_eq!(store.next_id().get_untracked(), 7);

            let ids: Vec<u64> = store.notices().get_untracked().iter().map(|n| n.id).collect();
            assert_eq!(ids, vec![2, 3, 4, 5, 6]);

            store_dismiss_notice(&store, 2);
            let notices = store.notices().get_untracked();
            assert_eq!(notices.len(), 4);
            assert_eq!(notices.last().map(|n| n.text.as_str()), Some("failed"));
        });
    }

    #[test]
    fn test_css_class() {
        let warning = Notice { id: 0, level: NoticeLevel::Warning, text: String::new() };
        assert_eq!(warning.css_class(), "alert alert-warning notice");
        assert_eq!(notice(0).css_class(), "alert alert-danger notice");
    }
}
