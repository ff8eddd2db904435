//! Server Module
//!
//! This module contains all code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading (port, owner token, snapshot)
//! └── init.rs   - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: Reads port, owner token, and snapshot
//!    path from the environment
//! 2. **State Restoration**: Restores the idea store from the snapshot
//!    file when configured
//! 3. **Router Creation**: Configures all routes and the CORS layer

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::{create_app, create_app_with_config};
pub use state::AppState;
