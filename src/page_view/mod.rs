//! Page-view state machine.

pub mod manager;

pub use manager::PageViewManager;
