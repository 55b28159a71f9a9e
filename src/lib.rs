//! # Latchkey - Credential Authentication Service
//!
//! Facade crate re-exporting the public API of the latchkey workspace:
//! register, login, logout and token verification over HTTP.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! latchkey = { path = "../latchkey" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Username`, `Password`, `IdentityRecord`, `SessionClaims`
//! - **Ports**: `CredentialStore`, `CredentialHasher`, `SessionIssuer`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `VerifySessionUseCase`
//! - **Adapters**: `PostgresCredentialStore`, `Argon2CredentialHasher`, `JwtSessionIssuer`, etc.
//! - **Service**: `AuthService` - The main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use latchkey_core::*;
}

pub use latchkey_core::{
    ContactDetails, CredentialError, IdentityId, IdentityRecord, IssuedSession, NewIdentity,
    Password, PasswordHash, SessionClaims, Username,
};

// ============================================================================
// Ports
// ============================================================================

pub use latchkey_core::{
    CredentialHashError, CredentialHasher, CredentialStore, CredentialStoreError, SessionError,
    SessionIssuer,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use latchkey_application::*;
}

pub use latchkey_application::{LoginUseCase, RegisterUseCase, VerifySessionUseCase};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use latchkey_adapters::http::*;
    }

    /// Credential store implementations
    pub mod persistence {
        pub use latchkey_adapters::persistence::*;
    }

    /// Password hashing, session tokens and cookies
    pub mod auth {
        pub use latchkey_adapters::auth::*;
    }

    /// Configuration
    pub mod config {
        pub use latchkey_adapters::config::*;
    }
}

pub use latchkey_adapters::{
    auth::{Argon2CredentialHasher, JwtAuthConfig, JwtSessionIssuer, SessionCookie},
    config::Settings,
    persistence::{HashMapCredentialStore, PostgresCredentialStore},
};

// ============================================================================
// Auth Service (Main Entry Point)
// ============================================================================

pub use latchkey_service::{
    AuthService,
    helpers::{configure_postgresql, get_postgres_pool},
    telemetry::init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
