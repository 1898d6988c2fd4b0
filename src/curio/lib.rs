//! # Curio Architecture
//!
//! Curio is a **UI-agnostic art gallery library**: search the Art
//! Institute of Chicago collection, keep a locally persisted gallery of
//! saved artworks with notes. The CLI is just one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, formats output, owns the terminal      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade; orchestrates remote client + gallery        │
//! │  - Returns structured Result types, never prints            │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                     │
//!                    ▼                     ▼
//! ┌──────────────────────────┐  ┌─────────────────────────────┐
//! │  Commands (commands/)    │  │  Remote client (aic.rs)     │
//! │  - Pure gallery logic    │  │  - One request per call     │
//! └──────────────────────────┘  │  - Validated via schema.rs  │
//!                    │          └─────────────────────────────┘
//!                    ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/, gallery.rs)                               │
//! │  - GalleryBackend trait: FileBackend / MemoryBackend        │
//! │  - Whole collection rewritten on every mutation             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Trust boundaries
//!
//! Two inputs are untrusted and both flow through [`schema`]: the
//! remote API response (records without a usable id are dropped,
//! everything else degrades to defaults) and the persisted gallery
//! file (a collection that fails validation loads as empty; `load`
//! never errors outward).
//!
//! ## Module Overview
//!
//! - [`api`]: the facade—entry point for all operations
//! - [`commands`]: gallery business logic per operation
//! - [`aic`]: Art Institute of Chicago search client and IIIF URLs
//! - [`schema`]: boundary validators for artworks, notes, collections
//! - [`gallery`]: the persisted collection and its mutation rules
//! - [`store`]: storage abstraction and implementations
//! - [`featured`]: landing rotation state, timer lifecycle, fencing
//! - [`model`]: core data types (`Artwork`, `GalleryItem`)
//! - [`config`]: configuration management
//! - [`error`]: error types

pub mod aic;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod featured;
pub mod gallery;
pub mod model;
pub mod schema;
pub mod store;
