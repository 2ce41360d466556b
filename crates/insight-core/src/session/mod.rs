//! Chat session domain module.
//!
//! This module contains the session log, its repository interface, and the
//! controller that drives a chat round trip.
//!
//! # Module Structure
//!
//! - `message`: Chat message types (`MessageRole`, `ChatMessage`)
//! - `log`: The ordered session log (`SessionLog`)
//! - `state`: Request gate and panel state (`RequestState`, `PanelState`)
//! - `repository`: Repository trait for log persistence
//! - `confirm`: Confirmation seam used by `clear`
//! - `controller`: Session lifecycle (`ChatController`)
//!
//! # Usage
//!
//! ```ignore
//! use insight_core::session::{ChatController, SessionLogRepository, SubmitOutcome};
//! use insight_core::session::{ChatMessage, MessageRole};
//! ```

mod confirm;
mod controller;
mod log;
mod message;
mod repository;
mod state;


// Re-export public API
pub use confirm::Confirmation;
pub use controller::{ChatController, IgnoreReason, SubmitOutcome};
pub use log::SessionLog;
pub use message::{ChatMessage, MessageRole};
pub use repository::SessionLogRepository;
pub use state::{PanelState, RequestState};
