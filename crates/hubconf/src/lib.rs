#![warn(missing_docs)]
//!# hubconf - Model Hub Configuration Records
//!
//! ## Notable Components
//!
//! * [`config`] - the configuration record capability.
//!   * [`config::ModelConfig`] - config-map conversion, `model_type` dispatch,
//!     config.json file IO.
//!   * [`config::ExtraFields`] - verbatim capture of unrecognized keys.
//! * [`cache`] - config directories and the local disk cache.
//!   * [`cache::prefabs`] - well-known config pre-fab machinery.
//!   * [`cache::archive`] - published config.json descriptors.
//!   * [`cache::disk`] - local cache layout and install/resolve.
//! * [`models`] - model configuration families.
//!   * [`models::resnet`] - the `ResNet` family.

/// Test-only macro import.
#[cfg(test)]
#[allow(unused_imports)]
#[macro_use]
extern crate hamcrest;

pub mod cache;
pub mod config;
pub mod models;
