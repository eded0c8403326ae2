//! # UI Module
//!
//! Terminal user interface: application state, section schemas, and
//! rendering.
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │        Header (brand + step indicators)          │
//! ├─────────────────────────────────────────────────┤
//! │  Section tabs (Edit step only)                   │
//! ├─────────────────────┬───────────────────────────┤
//! │                     │                           │
//! │   Record list /     │     Form / details /      │
//! │   picker            │     palette swatches      │
//! │                     │                           │
//! ├─────────────────────┴───────────────────────────┤
//! │        Footer (key hints, status, saved)         │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! The Preview and Export steps replace the body with a full-width preview
//! pane (2D themed document or the decorative perspective view) and the
//! export summary respectively.

pub mod app;
pub mod perspective;
pub mod render;
pub mod sections;

pub use app::{App, PreviewMode, Step};
pub use render::render;
