//! Iconforge - square PNG icon generator
//!
//! Resizes `public/icon-192.png` into `public/icons/icon-{16,32,48,64,128}.png`.
//! This library crate exposes the generator for the binary and for
//! integration testing.

pub mod config;
pub mod error;
pub mod icons;

pub use config::GeneratorConfig;
pub use error::{IconError, Result};
pub use icons::{GeneratedIcon, IconGenerator, IconSize};
