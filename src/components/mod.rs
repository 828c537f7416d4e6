//! UI Components
//!
//! Leptos components mounted alongside the server-rendered page.

mod notice_tray;

pub use notice_tray::NoticeTray;
