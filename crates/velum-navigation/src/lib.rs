//! Velum Navigation
//!
//! Address bar input resolution:
//! 1. Input with a space → search-engine query
//! 2. Otherwise → URL, with `https://` prepended when no scheme is given
//!
//! Also builds the rendering-service frame URL every remote load goes
//! through. The service itself is an opaque black box.

mod frame;
mod input;

pub use frame::frame_url;
pub use input::{InputResolver, Resolution};
