//! # Core Application Logic
//!
//! This module contains Parley's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (root data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Tone tables          │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, the root container
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`selection`]: Character ranges and the last-selection tracker
//! - [`panel`]: Interaction/role state machine and relationship labels
//! - [`tone`]: Static recommendation and insight tables
//! - [`conversation`]: The fixed message list and contact
//! - [`config`]: Config file loading and resolution

pub mod action;
pub mod config;
pub mod conversation;
pub mod panel;
pub mod selection;
pub mod state;
pub mod tone;
