//! Terminal binding for the gatehouse form controllers.
//!
//! The core crate only knows the abstract [`gatehouse_core::Modal`] and
//! [`gatehouse_core::FormDocument`] surfaces; this crate binds them to a
//! terminal, the way a browser binding would bind them to real DOM elements.
//! The `gatehouse-demo` binary wires everything into an interactive loop.

pub mod modal;

pub use modal::TerminalModal;
