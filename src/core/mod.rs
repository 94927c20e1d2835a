//! # Core Selection Logic
//!
//! This module contains the menu's business logic.
//! It knows nothing about terminals, escape sequences or raw mode.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Menu (session state) │
//!                    │  • Action (key intents) │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. Pure.          │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (raw ANSI) │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: `SelectRequest`, `Menu` and the `Selection` outcome
//! - [`action`]: the `Action` enum and the `update()` reducer
//! - [`config`]: config file loading and resolution
//! - [`error`]: `SelectError`

pub mod action;
pub mod config;
pub mod error;
pub mod state;
