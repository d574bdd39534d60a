//! Value types passed to and returned from the library.
//!
//! - [`Attributes`], [`AnchorTarget`] - element attribute input
//! - [`Params`] - parsed query strings
//! - [`Device`] - user-agent sniffing targets
//! - [`TypeTag`] - host class-tag inspection

mod attributes;
mod device;
mod params;
mod type_tag;

pub use attributes::{AnchorTarget, Attributes};
pub use device::Device;
pub use params::Params;
pub use type_tag::{TypeTag, is_array, is_object};
