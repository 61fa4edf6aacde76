//! Icon generation.
//!
//! `storage` holds the individual filesystem and imaging steps; `generator`
//! runs them in order over the fixed size list.

mod generator;
mod storage;

pub use generator::{GeneratedIcon, IconGenerator};
pub use storage::{ensure_output_dir, load_base_image, resize_icon, save_icon, IconSize};
