//! Shared Dioxus components and browser bridge for floater profile apps.
//!
//! This crate provides:
//! - `frame`: `requestAnimationFrame` coalescing, viewport size and resize hooks
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (date selector, summary, virtual list, etc.)

pub mod components;
pub mod frame;
pub mod state;
