//! # Gatehouse - Credential Form Controllers
//!
//! This is a facade crate that re-exports the public APIs of the gatehouse
//! components: two stateless form controllers (login, password reset) whose
//! validation logic is pure and whose side effects (focus transfer, modal
//! acknowledgments) go through port traits.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gatehouse = { path = "../gatehouse" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `OtpCode`, `FormError`, etc.
//! - **Port traits**: `FormDocument`, `Modal`, `CredentialGateway`
//! - **Use cases**: `LoginUseCase`, `RequestOtpUseCase`, `ResetPasswordUseCase`
//! - **Adapters**: `InMemoryDocument`, `RecordingModal`, `PlaceholderGateway`
//! - **Service**: `FormService` - attaches both controllers to a document

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatehouse_core::{
    Acknowledgment, Credentials, Field, FormError, LoginForm, OtpCode, OtpRequestForm, Password,
    ResetForm, ResetRequest, Username,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use gatehouse_core::{CredentialGateway, FormDocument, GatewayError, Modal};
}

// Re-export port traits at root level
pub use gatehouse_core::{CredentialGateway, FormDocument, GatewayError, Modal};

// ============================================================================
// Wire Contract
// ============================================================================

/// JSON contract for the (unwired) backend exchange
pub mod wire {
    pub use gatehouse_core::wire::*;
}

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use gatehouse_application::*;
}

// Re-export use cases at root level
pub use gatehouse_application::{Activation, LoginUseCase, RequestOtpUseCase, ResetPasswordUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Document implementations
    pub mod document {
        pub use gatehouse_adapters::document::*;
    }

    /// Modal implementations
    pub mod modal {
        pub use gatehouse_adapters::modal::*;
    }

    /// Gateway implementations
    pub mod gateway {
        pub use gatehouse_adapters::gateway::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

// Re-export commonly used adapters at root level
pub use gatehouse_adapters::{InMemoryDocument, PlaceholderGateway, RecordingModal};

// ============================================================================
// Form Service (Main Entry Point)
// ============================================================================

/// Main form service
pub use gatehouse_form_service::{FormEvent, FormService};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
