//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as parameters:
//! - `TitleBar`: contact header with the panel toggle hint
//! - `Message`: a single chat bubble
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep local state and emit events:
//! - `InputBox`: single-line composer with selection
//! - `MessageList`: scrollable conversation view with height caching
//! - `AnalysisPanel`: tone analysis sections (Setup, Insights, Recommendations)
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props" rather than reaching into
//! `App`. They never mutate core state; they emit events that the event
//! loop turns into `core::action::Action`s.
//!
//! ```rust,ignore
//! // Dependencies are explicit
//! TitleBar::new(&app.contact, app.panel_open).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Contact header)
//! ├── message.rs         (Single bubble renderer)
//! ├── message_list.rs    (Scrollable message container)
//! ├── analysis_panel.rs  (Tone analysis side panel)
//! └── input_box/         (Composer with selection)
//! ```

pub mod analysis_panel;
pub mod input_box;
pub mod message;
pub mod message_list;
pub mod title_bar;

pub use input_box::{InputBox, InputEvent};
pub use message_list::{MessageList, MessageListState};
pub use title_bar::TitleBar;
