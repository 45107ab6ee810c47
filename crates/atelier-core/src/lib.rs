//! # Atelier Core
//!
//! Core business logic for the Atelier Gateway.
//!
//! ```text
//! atelier-core/src/
//! ├── config.rs     # Environment-driven configuration, loaded once at startup
//! ├── style.rs      # Style descriptor resolution + analysis prompt template
//! ├── image.rs      # Inbound image normalization (multipart / data-URI / raw base64)
//! ├── gallery.rs    # Image directory listing with static fallback
//! ├── rate_limit.rs # Fixed-window per-client request limiter
//! └── upstream/     # Outbound clients: vision analysis, auth passthrough,
//!                   # render-URL builder
//! ```
//!
//! Everything here is a pure function over its inputs except the upstream
//! clients, which perform the gateway's only network I/O.

pub mod config;
pub mod gallery;
pub mod image;
pub mod rate_limit;
pub mod style;
pub mod upstream;

pub use config::AppConfig;
pub use image::ImagePayload;
