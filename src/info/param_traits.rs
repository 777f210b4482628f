use crate::id::Id;
use crate::info::device::DeviceType;
use crate::raw::{cl_uint, cl_ulong};
use crate::util::{FromInfo, IntoInfo};
use libc::size_t;
use std::fmt::{self, Display, Formatter};

/// A compile-time association between an information descriptor and the
/// type of value a query for it returns.
///
/// Implemented by the marker types in [`device::param`](super::device::param).
pub trait InfoParam {
    /// The descriptor enum this parameter belongs to
    type Descriptor: Copy;

    /// The type of value a query for this parameter returns
    type Output: InfoOutput;

    /// The descriptor value identified by this parameter
    const DESCRIPTOR: Self::Descriptor;

    /// Get a short name of the output type, e.g. `String` or `u32`
    fn output_type_name() -> String {
        <Self::Output as InfoOutput>::type_name()
    }
}

/// The runtime counterpart of `InfoParam::Output`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// Queries for this descriptor return nothing
    Void,
    Uint,
    Ulong,
    SizeT,
    String,
    Id3,
    DeviceType,
}

impl ResultKind {
    /// Whether queries for this descriptor return a value at all
    pub fn is_void(self) -> bool {
        self == ResultKind::Void
    }
}

impl Display for ResultKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            ResultKind::Void => "void",
            ResultKind::Uint => "cl_uint",
            ResultKind::Ulong => "cl_ulong",
            ResultKind::SizeT => "size_t",
            ResultKind::String => "string",
            ResultKind::Id3 => "id<3>",
            ResultKind::DeviceType => "device_type",
        })
    }
}

/// A type that may be returned by an information query.
pub trait InfoOutput: FromInfo + IntoInfo {
    const KIND: ResultKind;

    fn type_name() -> String {
        tynm::type_name::<Self>()
    }
}

impl InfoOutput for () {
    const KIND: ResultKind = ResultKind::Void;
}

impl InfoOutput for cl_uint {
    const KIND: ResultKind = ResultKind::Uint;
}

impl InfoOutput for cl_ulong {
    const KIND: ResultKind = ResultKind::Ulong;
}

impl InfoOutput for size_t {
    const KIND: ResultKind = ResultKind::SizeT;
}

impl InfoOutput for String {
    const KIND: ResultKind = ResultKind::String;
}

impl InfoOutput for Id<3> {
    const KIND: ResultKind = ResultKind::Id3;

    fn type_name() -> String {
        "Id<3>".to_owned()
    }
}

impl InfoOutput for DeviceType {
    const KIND: ResultKind = ResultKind::DeviceType;
}
