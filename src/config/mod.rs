//! # Configuration Module
//!
//! Configuration structures for the analyses in this crate. Each config
//! provides a builder with `with_*` methods; builders implement
//! [`ConfigBuilder`](crate::common::ConfigBuilder) and validate on `build()`.
//!
//! ## Example
//!
//! ```
//! use cyclegraph::ConfigBuilder;
//! use cyclegraph::config::{DetectorConfig, DirectedAlgorithm};
//!
//! let config = DetectorConfig::builder()
//!     .with_directed_algorithm(DirectedAlgorithm::ReachabilityClosure)
//!     .with_max_rounds(Some(64))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_rounds, Some(64));
//! ```

pub mod detector;

pub use detector::{DetectorConfig, DetectorConfigBuilder, DirectedAlgorithm};
