//! # pytt-help-core
//!
//! Platform-agnostic logic of the PyTT help viewer.
//!
//! The help viewer is a static page with two frames: a navigator frame showing
//! the table of contents and a content frame showing the selected topic. This
//! crate computes everything those pages do, as plain functions over explicit
//! inputs:
//! - **query**: query string parameter extraction
//! - **language**: language resolution and the language picker markup
//! - **locale**: locale identifiers and their parent chain
//! - **nav**: the top navigation bar markup
//! - **layout**: frame height computation
//! - **message**: the cross-frame message schema and origin checks
//! - **toc**: TOC anchor levels and the nested topic outline
//! - **controller**: the initial frame plan and message routing
//! - **config**: viewer configuration
//! - **error**: error types
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**: no DOM, no filesystem, no
//! async runtime. The `pytt-help-wasm` crate wires it into the browser.

pub mod config;
pub mod controller;
pub mod error;
pub mod language;
pub mod layout;
pub mod locale;
pub mod message;
pub mod nav;
pub mod query;
pub mod toc;

pub use config::ViewerConfig;
pub use controller::{FramePlan, MessageRouter, Routing};
pub use error::HelpError;
pub use language::{LanguageEntry, LanguageMenu, LanguageResolver};
pub use layout::{FrameSizing, Viewport};
pub use locale::Locale;
pub use message::{FrameMessage, OriginPolicy};
pub use nav::{NavOptions, render_nav};
pub use query::{QueryParameter, get_parameter_by_name};
pub use toc::{Topic, TocOutline, toc_level};
