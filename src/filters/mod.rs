//! Per-pixel HSLA filters.
//!
//! ## Filters
//!
//! | Filter | Channels written | Rule |
//! |--------|------------------|------|
//! | grayscale | s | `s = 0` |
//! | spotlight | l | `l *= 1 - 0.005 * d`, flat `0.2` from `d >= 160` |
//! | illinify | h | snap to 11° or 216°, whichever is closer on the wheel |
//! | watermark | l | `l += 0.2` (max 1.0) where the stencil has `l == 1.0` |
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **In place** - The image is moved in, mutated and handed back; nothing is reallocated
//! - **Channel isolation** - Only the channel a filter names is written
//! - **Range safe** - Results stay inside each channel's range
//! - **Sequential and parallel** - Every filter has a `*_par` twin that walks rows on rayon
//!   and produces identical output
//! - **Tunable** - `*_with` variants take a parameter struct whose `Default` is the
//!   fixed behavior above

pub mod core;
pub mod grayscale;
pub mod illinify;
pub mod spotlight;
pub mod watermark;

pub use grayscale::{grayscale, grayscale_par};
pub use illinify::{illinify, illinify_par, illinify_par_with, illinify_with, HuePalette};
pub use spotlight::{spotlight, spotlight_par, spotlight_par_with, spotlight_with, SpotlightParams};
pub use watermark::{watermark, watermark_par, watermark_par_with, watermark_with, WatermarkParams};
