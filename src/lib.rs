//! Color ramps and single-color conversions.
//!
//! The crate is pure: nothing here touches the network or the filesystem.
//! Callers that store favorites or history lists hand the stored JSON value
//! to [`ColorList`] and persist whatever it returns.

pub mod color;
pub mod lists;
pub mod ramp;

pub use color::{ColorError, ColorInfo, Rgb, color_info, hex_to_rgb, random_color, rgb_to_hex};
pub use lists::{ColorList, ListError, ListKind};
pub use ramp::light_to_dark;
