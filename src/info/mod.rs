//! Information descriptors
//!
//! Each queryable property of a SYCL object is identified by a descriptor enum
//! value, and by a zero-sized marker type implementing [`InfoParam`] which
//! fixes the type of value a query for that property returns.

pub mod device;
mod param_traits;

pub use param_traits::*;
