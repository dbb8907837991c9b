//! # Core Application Logic
//!
//! This module contains the Create Post form's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • PostDraft (value)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O in the reducer. │
//!                    └───────────┬─────────────┘
//!                                │ Vec<Effect>
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │    TUI     │              │ Controller │
//!           │  Adapter   │              │ (headless, │
//!           │ (ratatui)  │              │  batch)    │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`draft`]: `PostDraft`, the in-progress post
//! - [`state`]: `App` and `FormState`, all application state in one place
//! - [`action`]: `Action`, `Effect` and the `update()` reducer
//! - [`controller`]: runs effects inline against injected collaborators
//! - [`notify`]: `Notifier` / `Navigator` seams and user-facing messages
//! - [`photo`]: data URI helpers and saving photos to disk
//! - [`surprise`]: "surprise me" prompt suggestions
//! - [`config`]: layered configuration

pub mod action;
pub mod config;
pub mod controller;
pub mod draft;
pub mod notify;
pub mod photo;
pub mod state;
pub mod surprise;
