use crate::id::Id;
use crate::info::device::{
    DeviceAffinityDomain, DeviceExecutionCapabilities, DeviceInfo, DevicePartitionProperty,
    DevicePartitionType, DeviceType, FpConfig, GlobalMemCacheType, LocalMemType,
};
use crate::info::{InfoParam, ResultKind};
use crate::raw::{cl_bool, cl_uint, cl_ulong, CL_FALSE, CL_TRUE};
use crate::{Error, Result};
use generic_array::{ArrayLength, GenericArray};
use libc::size_t;
use std::convert::{TryFrom, TryInto};
use std::fmt::{self, Debug, Display, Formatter};
use std::mem::size_of;

/// A source of raw information about an object, following the two-step
/// protocol of the OpenCL `clGet___Info` functions.
pub trait InfoSource {
    type Param: Copy + Debug;

    const DEBUG_CONTEXT: &'static str;

    /// Get the size in bytes of the value of `param_name`, copying the value
    /// into `param_value` if given.
    ///
    /// If the buffer is too small to hold the value, `Error::InvalidDataLength`
    /// is returned and the buffer is left untouched.
    fn raw_info(&self, param_name: Self::Param, param_value: Option<&mut [u8]>) -> Result<usize>;
}

/// A trait implemented by every information source to provide typed access
/// to its information
pub trait InfoQuery: InfoSource {
    /// Get raw binary info about this object.
    ///
    /// This function queries the source twice - once to determine the size of
    /// the information, and once to read the data once an appropriately-sized
    /// vector has been allocated to store it. If the reported size of the data
    /// changes between the two calls, `Error::InvalidDataLength` will be
    /// returned.
    ///
    /// If the size of the data is known at compile time, `get_info_raw_sized`
    /// should be preferred, as it only requires one query and does not perform
    /// any heap allocations.
    fn get_info_raw(&self, param_name: Self::Param) -> Result<Vec<u8>> {
        let size = self.raw_info(param_name, None)?;
        let mut data = vec![0u8; size];
        let actual = self.raw_info(param_name, Some(&mut data))?;

        log::trace!(
            "{}: read {} bytes for {:?}",
            Self::DEBUG_CONTEXT,
            actual,
            param_name
        );

        if data.len() != actual {
            return Err(Error::InvalidDataLength {
                expected: data.len(),
                actual,
            });
        }

        Ok(data)
    }

    /// Get raw binary info about this object, with a constant size.
    ///
    /// If the size of the data as reported by the source doesn't match the
    /// expected size as specified by the generic parameter,
    /// `Error::InvalidDataLength` will be returned.
    fn get_info_raw_sized<L: ArrayLength<u8>>(
        &self,
        param_name: Self::Param,
    ) -> Result<GenericArray<u8, L>> {
        let mut array = GenericArray::default();
        let size = self.raw_info(param_name, Some(array.as_mut_slice()))?;

        log::trace!(
            "{}: read {} bytes for {:?}",
            Self::DEBUG_CONTEXT,
            size,
            param_name
        );

        if L::USIZE != size {
            return Err(Error::InvalidDataLength {
                expected: L::USIZE,
                actual: size,
            });
        }

        Ok(array)
    }

    /// Get information about this object.
    ///
    /// This function will automatically convert the data to the type specified
    /// by the type parameter, but it's up to the programmer to ensure that this
    /// is the appropriate type for the given parameter. Prefer `info`, which
    /// takes the type from the parameter itself.
    fn get_info<T: FromInfo>(&self, param_name: Self::Param) -> Result<T>
    where
        Self: Sized,
    {
        T::read(self, param_name)
    }

    /// Get the value of the parameter `P`, as the type associated with it.
    fn info<P>(&self) -> Result<P::Output>
    where
        P: InfoParam<Descriptor = Self::Param>,
        Self: Sized,
    {
        log::debug!(
            "{}: querying {:?} as {}",
            Self::DEBUG_CONTEXT,
            P::DESCRIPTOR,
            P::output_type_name()
        );
        <P::Output as FromInfo>::read(self, P::DESCRIPTOR)
    }

    /// Get information about this object, decoded according to a kind only
    /// known at runtime.
    fn get_info_value(&self, param_name: Self::Param, kind: ResultKind) -> Result<InfoValue>
    where
        Self: Sized,
    {
        Ok(match kind {
            ResultKind::Void => InfoValue::Void,
            ResultKind::Uint => InfoValue::Uint(self.get_info(param_name)?),
            ResultKind::Ulong => InfoValue::Ulong(self.get_info(param_name)?),
            ResultKind::SizeT => InfoValue::SizeT(self.get_info(param_name)?),
            ResultKind::String => InfoValue::String(self.get_info(param_name)?),
            ResultKind::Id3 => InfoValue::Id3(self.get_info(param_name)?),
            ResultKind::DeviceType => InfoValue::DeviceType(self.get_info(param_name)?),
        })
    }

    /// Format all values known to this source as a debug map.
    fn info_fmt<I>(&self, f: &mut Formatter, params: I) -> fmt::Result
    where
        I: IntoIterator<Item = (Self::Param, ResultKind)>,
        Self::Param: Display,
        Self: Sized,
    {
        let mut map = f.debug_map();
        for (param, kind) in params {
            match self.get_info_value(param, kind) {
                Ok(InfoValue::Void) => match self.raw_info(param, None) {
                    Ok(size) => {
                        map.entry(&format_args!("{}", param), &format_args!("<{} bytes>", size))
                    }
                    Err(e) => map.entry(&format_args!("{}", param), &e),
                },
                Ok(v) => map.entry(&format_args!("{}", param), &v),
                Err(e) => map.entry(&format_args!("{}", param), &e),
            };
        }
        map.finish()
    }
}

impl<T: InfoSource> InfoQuery for T {}

/// A dynamically-typed information value
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum InfoValue {
    Void,
    Uint(cl_uint),
    Ulong(cl_ulong),
    SizeT(size_t),
    String(String),
    Id3(Id<3>),
    DeviceType(DeviceType),
}

impl InfoValue {
    pub fn kind(&self) -> ResultKind {
        match self {
            InfoValue::Void => ResultKind::Void,
            InfoValue::Uint(_) => ResultKind::Uint,
            InfoValue::Ulong(_) => ResultKind::Ulong,
            InfoValue::SizeT(_) => ResultKind::SizeT,
            InfoValue::String(_) => ResultKind::String,
            InfoValue::Id3(_) => ResultKind::Id3,
            InfoValue::DeviceType(_) => ResultKind::DeviceType,
        }
    }
}

impl Debug for InfoValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InfoValue::Void => f.write_str("()"),
            InfoValue::Uint(v) => Debug::fmt(v, f),
            InfoValue::Ulong(v) => Debug::fmt(v, f),
            InfoValue::SizeT(v) => Debug::fmt(v, f),
            InfoValue::String(v) => Debug::fmt(v, f),
            InfoValue::Id3(v) => Debug::fmt(v, f),
            InfoValue::DeviceType(v) => Display::fmt(v, f),
        }
    }
}

impl Display for InfoValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            InfoValue::Void => Ok(()),
            InfoValue::Uint(v) => Display::fmt(v, f),
            InfoValue::Ulong(v) => Display::fmt(v, f),
            InfoValue::SizeT(v) => Display::fmt(v, f),
            InfoValue::String(v) => f.write_str(v),
            InfoValue::Id3(v) => Display::fmt(v, f),
            InfoValue::DeviceType(v) => Display::fmt(v, f),
        }
    }
}

/// A trait to get information and automatically convert it to a more useful
/// type.
pub trait FromInfo: Sized {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self>;
}

/// The encoding counterpart of `FromInfo`, used to describe objects in
/// memory.
pub trait IntoInfo {
    fn to_info_bytes(&self) -> Vec<u8>;
}

// A void result never consults the source.
impl FromInfo for () {
    fn read<T: InfoQuery>(_from: &T, _param_name: T::Param) -> Result<Self> {
        Ok(())
    }
}

impl IntoInfo for () {
    fn to_info_bytes(&self) -> Vec<u8> {
        vec![]
    }
}

impl FromInfo for Vec<u8> {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
        from.get_info_raw(param_name)
    }
}

impl FromInfo for String {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
        let mut data = from.get_info_raw(param_name)?;

        if let Some(i) = data.iter().copied().position(|b| b == b'\0') {
            data.truncate(i);
        }

        Ok(String::from_utf8(data)?)
    }
}

impl IntoInfo for String {
    fn to_info_bytes(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.len() + 1);
        data.extend_from_slice(self.as_bytes());
        data.push(b'\0');
        data
    }
}

impl FromInfo for cl_ulong {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
        from.get_info_raw_sized(param_name)
            .map(|d| Self::from_ne_bytes(d.into()))
    }
}

impl FromInfo for size_t {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
        from.get_info_raw_sized(param_name)
            .map(|d| Self::from_ne_bytes(d.into()))
    }
}

impl FromInfo for cl_uint {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
        from.get_info_raw_sized(param_name)
            .map(|d| Self::from_ne_bytes(d.into()))
    }
}

macro_rules! into_info_scalars {
    ( $( $ty:ty ),* ) => {
        $(
            impl IntoInfo for $ty {
                fn to_info_bytes(&self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }
            }
        )*
    };
}

into_info_scalars!(cl_uint, cl_ulong, size_t);

impl FromInfo for bool {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
        from.get_info_raw_sized(param_name)
            .map(|d| cl_bool::from_ne_bytes(d.into()) != CL_FALSE)
    }
}

impl IntoInfo for bool {
    fn to_info_bytes(&self) -> Vec<u8> {
        let value: cl_bool = if *self { CL_TRUE } else { CL_FALSE };
        value.to_ne_bytes().to_vec()
    }
}

impl FromInfo for Vec<size_t> {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
        let raw = from.get_info_raw(param_name)?;
        raw.chunks(size_of::<size_t>())
            .map(|c| {
                c.try_into()
                    .map(size_t::from_ne_bytes)
                    .map_err(|_| Error::InvalidDataLength {
                        expected: size_of::<size_t>(),
                        actual: c.len(),
                    })
            })
            .collect()
    }
}

impl IntoInfo for Vec<size_t> {
    fn to_info_bytes(&self) -> Vec<u8> {
        self.iter().flat_map(|v| v.to_ne_bytes().to_vec()).collect()
    }
}

impl<const N: usize> FromInfo for Id<N> {
    fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
        let values = Vec::<size_t>::read(from, param_name)?;
        Id::try_from(values.as_slice())
    }
}

impl<const N: usize> IntoInfo for Id<N> {
    fn to_info_bytes(&self) -> Vec<u8> {
        self.as_slice()
            .iter()
            .flat_map(|v| v.to_ne_bytes().to_vec())
            .collect()
    }
}

/// Enums are stored as their discriminant, in a 32-bit integer.
macro_rules! info_enums {
    ( $( $name:ident($repr:ident) ),* $(,)? ) => {
        $(
            impl FromInfo for $name {
                fn read<T: InfoQuery>(from: &T, param_name: T::Param) -> Result<Self> {
                    let raw = cl_uint::read(from, param_name)?;
                    $name::try_from(raw as $repr)
                }
            }

            impl IntoInfo for $name {
                fn to_info_bytes(&self) -> Vec<u8> {
                    (self.raw() as cl_uint).to_info_bytes()
                }
            }
        )*
    };
}

info_enums! {
    DeviceType(u32),
    DeviceInfo(i32),
    DevicePartitionProperty(i32),
    DeviceAffinityDomain(i32),
    DevicePartitionType(i32),
    LocalMemType(i32),
    FpConfig(i32),
    GlobalMemCacheType(i32),
    DeviceExecutionCapabilities(u32),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::device::param;
    use std::cell::Cell;
    use std::collections::HashMap;

    /// A source backed by a plain map
    struct MapSource(HashMap<DeviceInfo, Vec<u8>>);

    impl InfoSource for MapSource {
        type Param = DeviceInfo;
        const DEBUG_CONTEXT: &'static str = "MapSource";

        fn raw_info(&self, param_name: DeviceInfo, param_value: Option<&mut [u8]>) -> Result<usize> {
            let data = self.0.get(&param_name).ok_or(Error::UnsupportedParam {
                param: param_name.to_string(),
                context: Self::DEBUG_CONTEXT,
            })?;

            if let Some(buf) = param_value {
                if buf.len() < data.len() {
                    return Err(Error::InvalidDataLength {
                        expected: buf.len(),
                        actual: data.len(),
                    });
                }
                buf[..data.len()].copy_from_slice(data);
            }

            Ok(data.len())
        }
    }

    /// A source whose value grows between the size query and the read
    struct GrowingSource(Cell<usize>);

    impl InfoSource for GrowingSource {
        type Param = DeviceInfo;
        const DEBUG_CONTEXT: &'static str = "GrowingSource";

        fn raw_info(&self, _param_name: DeviceInfo, param_value: Option<&mut [u8]>) -> Result<usize> {
            let size = self.0.get();
            self.0.set(size + 1);
            if let Some(buf) = param_value {
                for b in buf.iter_mut().take(size) {
                    *b = b'x';
                }
            }
            Ok(size)
        }
    }

    fn source(entries: Vec<(DeviceInfo, Vec<u8>)>) -> MapSource {
        MapSource(entries.into_iter().collect())
    }

    #[test]
    fn test_typed_queries() {
        let src = source(vec![
            (DeviceInfo::Name, b"Test GPU\0garbage".to_vec()),
            (DeviceInfo::MaxComputeUnits, 24u32.to_ne_bytes().to_vec()),
            (DeviceInfo::LocalMemSize, (64u64 * 1024).to_ne_bytes().to_vec()),
            (DeviceInfo::MaxWorkGroupSize, 256usize.to_ne_bytes().to_vec()),
            (
                DeviceInfo::MaxWorkItemSizes,
                vec![256usize, 256, 64].to_info_bytes(),
            ),
            (DeviceInfo::DeviceType, DeviceType::Gpu.to_info_bytes()),
        ]);

        assert_eq!(src.info::<param::Name>().unwrap(), "Test GPU");
        assert_eq!(src.info::<param::MaxComputeUnits>().unwrap(), 24);
        assert_eq!(src.info::<param::LocalMemSize>().unwrap(), 65536);
        assert_eq!(src.info::<param::MaxWorkGroupSize>().unwrap(), 256);
        assert_eq!(
            src.info::<param::MaxWorkItemSizes>().unwrap(),
            Id::new([256, 256, 64])
        );
        assert_eq!(src.info::<param::DeviceType>().unwrap(), DeviceType::Gpu);
    }

    #[test]
    fn test_void_query_does_not_touch_source() {
        let src = source(vec![]);
        assert_eq!(src.info::<param::Extensions>().unwrap(), ());
        assert!(src.info::<param::Vendor>().is_err());
    }

    #[test]
    fn test_sized_read_rejects_wrong_size() {
        let src = source(vec![(DeviceInfo::MaxComputeUnits, vec![1, 2])]);
        match src.info::<param::MaxComputeUnits>() {
            Err(Error::InvalidDataLength { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected result {:?}", other),
        }

        // too large for the fixed-size buffer
        let src = source(vec![(DeviceInfo::MaxComputeUnits, vec![0; 8])]);
        match src.get_info::<cl_uint>(DeviceInfo::MaxComputeUnits) {
            Err(Error::InvalidDataLength { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 8);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_size_change_between_queries() {
        let src = GrowingSource(Cell::new(4));
        match src.get_info_raw(DeviceInfo::Name) {
            Err(Error::InvalidDataLength { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 5);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_invalid_utf8() {
        let src = source(vec![(DeviceInfo::Vendor, vec![0xc3, 0x28, 0])]);
        assert!(matches!(
            src.info::<param::Vendor>(),
            Err(Error::InvalidString(_))
        ));
    }

    #[test]
    fn test_id_dimension_mismatch() {
        let src = source(vec![(
            DeviceInfo::MaxWorkItemSizes,
            vec![1usize, 2].to_info_bytes(),
        )]);
        assert!(matches!(
            src.info::<param::MaxWorkItemSizes>(),
            Err(Error::InvalidElementCount { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn test_enum_decoding() {
        let src = source(vec![
            (DeviceInfo::LocalMemType, LocalMemType::Global.to_info_bytes()),
            (DeviceInfo::GlobalMemCacheType, 9u32.to_ne_bytes().to_vec()),
            (DeviceInfo::ImageSupport, true.to_info_bytes()),
        ]);

        assert_eq!(
            src.get_info::<LocalMemType>(DeviceInfo::LocalMemType).unwrap(),
            LocalMemType::Global
        );
        assert!(src
            .get_info::<GlobalMemCacheType>(DeviceInfo::GlobalMemCacheType)
            .is_err());
        assert!(src.get_info::<bool>(DeviceInfo::ImageSupport).unwrap());
    }

    #[test]
    fn test_dynamic_values() {
        let src = source(vec![
            (DeviceInfo::Profile, "FULL_PROFILE".to_owned().to_info_bytes()),
            (DeviceInfo::MaxWorkItemSizes, Id::new([8, 4, 2]).to_info_bytes()),
        ]);

        let profile = src
            .get_info_value(DeviceInfo::Profile, DeviceInfo::Profile.result_kind())
            .unwrap();
        assert_eq!(profile, InfoValue::String("FULL_PROFILE".to_owned()));
        assert_eq!(profile.kind(), ResultKind::String);

        let sizes = src
            .get_info_value(
                DeviceInfo::MaxWorkItemSizes,
                DeviceInfo::MaxWorkItemSizes.result_kind(),
            )
            .unwrap();
        assert_eq!(dbg!(format!("{}", sizes)), "(8, 4, 2)");
    }
}
