//! # Core Application Logic
//!
//! The submission controller. It knows nothing about any specific UI
//! technology or how requests travel over the wire.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                ┌───────────────┴───────────────┐
//!                ▼                               ▼
//!         ┌────────────┐                  ┌────────────┐
//!         │    TUI     │                  │  Backend   │
//!         │  Adapter   │                  │  (HTTP)    │
//!         │ (ratatui)  │                  │            │
//!         └────────────┘                  └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: all controller state in one place
//! - [`action`]: The `Action` enum and the `update()` transition function
//! - [`submission`]: Runs one request and turns its outcome into an `Action`
//! - [`input`]: Detects what kind of input the user typed (display hint only)
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod input;
pub mod state;
pub mod submission;
