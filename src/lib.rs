//! Device information descriptors for SYCL-style devices.
//!
//! Every descriptor of [`info::device::DeviceInfo`] has a marker type in
//! [`info::device::param`] which fixes, at compile time, the type a query
//! for it returns. Queries are answered by any [`util::InfoSource`], such as
//! the in-memory [`DeviceProperties`].

#[macro_use]
mod macros;

pub mod device;
mod error;
pub mod id;
pub mod info;
pub mod raw;
pub mod util;

pub use device::{DeviceProperties, DevicePropertiesBuilder};
pub use error::*;
pub use id::Id;
