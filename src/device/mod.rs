//! In-memory device descriptions
//!
//! A `DeviceProperties` holds the raw value of each known descriptor of one
//! device, and answers typed queries for them like any other information
//! source.

#[cfg(feature = "host")]
mod host;

use crate::id::Id;
use crate::info::device::{param, DeviceInfo, DeviceType};
use crate::info::{InfoOutput, InfoParam};
use crate::raw::{cl_uint, cl_ulong};
use crate::util::{InfoQuery, InfoSource, IntoInfo};
use crate::{Error, Result};
use libc::size_t;
use std::collections::BTreeMap;
use std::fmt::{self, Debug, Formatter};

/// A description of a device's properties
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DeviceProperties {
    values: BTreeMap<DeviceInfo, Vec<u8>>,
}

impl Debug for DeviceProperties {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.info_fmt(f, self.descriptors().map(|d| (d, d.result_kind())))
    }
}

impl InfoSource for DeviceProperties {
    type Param = DeviceInfo;
    const DEBUG_CONTEXT: &'static str = "DeviceProperties";

    fn raw_info(&self, param_name: DeviceInfo, param_value: Option<&mut [u8]>) -> Result<usize> {
        let data = self
            .values
            .get(&param_name)
            .ok_or_else(|| Error::UnsupportedParam {
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

impl DeviceProperties {
    pub fn builder() -> DevicePropertiesBuilder {
        DevicePropertiesBuilder::default()
    }

    /// Describe the host device.
    ///
    /// The number of compute units and the memory sizes are read from the
    /// operating system; if the memory size can't be determined, zero bytes
    /// are reported.
    #[cfg(feature = "host")]
    pub fn host() -> Self {
        let compute_units = host::compute_units();
        let memory = host::physical_memory();

        DeviceProperties::builder()
            .set::<param::DeviceType>(DeviceType::Host)
            .set::<param::Name>("Host device".to_owned())
            .set::<param::Vendor>(env!("CARGO_PKG_NAME").to_owned())
            .set::<param::Profile>("FULL_PROFILE".to_owned())
            .set::<param::MaxComputeUnits>(compute_units)
            .set::<param::MaxWorkGroupSize>(1)
            .set::<param::MaxWorkItemSizes>(Id::new([1, 1, 1]))
            .set::<param::LocalMemSize>(memory)
            .set::<param::MaxMemAllocSize>(memory)
            .build()
    }

    /// Iterate over the descriptors with a known value, in declaration order
    pub fn descriptors(&self) -> impl Iterator<Item = DeviceInfo> + '_ {
        self.values.keys().copied()
    }

    pub fn contains(&self, param: DeviceInfo) -> bool {
        self.values.contains_key(&param)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check whether this device is selected by the given device type. A
    /// description without a device type is never selected.
    pub fn is_selected_by(&self, selector: DeviceType) -> bool {
        self.device_type()
            .map(|t| selector.selects(t))
            .unwrap_or(false)
    }

    info_funcs! {
        pub fn device_type(&self) -> DeviceType = param::DeviceType;
        pub fn max_compute_units(&self) -> cl_uint = param::MaxComputeUnits;
        pub fn max_work_item_sizes(&self) -> Id<3> = param::MaxWorkItemSizes;
        pub fn max_work_group_size(&self) -> size_t = param::MaxWorkGroupSize;
        pub fn max_mem_alloc_size(&self) -> cl_ulong = param::MaxMemAllocSize;
        pub fn local_mem_size(&self) -> cl_ulong = param::LocalMemSize;
        pub fn name(&self) -> String = param::Name;
        pub fn vendor(&self) -> String = param::Vendor;
        pub fn profile(&self) -> String = param::Profile;
    }
}

/// A builder for `DeviceProperties`
#[derive(Clone, Debug, Default)]
pub struct DevicePropertiesBuilder {
    values: BTreeMap<DeviceInfo, Vec<u8>>,
}

impl DevicePropertiesBuilder {
    /// Set the value of the parameter `P`.
    ///
    /// Parameters whose queries return nothing have no value to set, so
    /// setting one is a no-op; use `set_raw` to attach data to them anyway.
    pub fn set<P: InfoParam<Descriptor = DeviceInfo>>(mut self, value: P::Output) -> Self {
        if <P::Output as InfoOutput>::KIND.is_void() {
            log::debug!("ignoring value for void parameter {}", P::DESCRIPTOR);
            return self;
        }

        self.values.insert(P::DESCRIPTOR, value.to_info_bytes());
        self
    }

    /// Set the raw value of a descriptor, bypassing its associated type.
    pub fn set_raw(mut self, param: DeviceInfo, data: Vec<u8>) -> Self {
        self.values.insert(param, data);
        self
    }

    /// Remove the value of a descriptor, if it was set
    pub fn unset(mut self, param: DeviceInfo) -> Self {
        self.values.remove(&param);
        self
    }

    pub fn build(self) -> DeviceProperties {
        log::debug!(
            "built device description with {} properties",
            self.values.len()
        );

        DeviceProperties {
            values: self.values,
        }
    }
}

impl From<DeviceProperties> for DevicePropertiesBuilder {
    fn from(properties: DeviceProperties) -> Self {
        Self {
            values: properties.values,
        }
    }
}
