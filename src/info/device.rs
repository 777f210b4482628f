//! Device information descriptors
//!
//! The enums in this module are closed sets of named integer constants. Their
//! discriminants follow declaration order, starting at zero; the OpenCL
//! encoding of each value is available separately through `to_cl`/`from_cl`.

use crate::raw::*;
use crate::{Error, Result};

flag_enum! {
    /// Type of devices
    ///
    /// Used either to describe the type of a device or, when selecting
    /// devices, to match a broader kind of device.
    pub enum DeviceType(u32) {
        Cpu = 0 => "cpu",
        Gpu = 1 => "gpu",
        Accelerator = 2 => "accelerator",
        Custom = 3 => "custom",
        /// Let the implementation pick
        Automatic = 4 => "automatic",
        /// The SYCL host device, which has no OpenCL counterpart
        Host = 5 => "host",
        /// Any OpenCL device
        Opencl = 6 => "opencl",
        All = 7 => "all",
    }
}

impl DeviceType {
    /// Check whether a device of type `device` is selected by this type.
    pub fn selects(self, device: DeviceType) -> bool {
        match self {
            DeviceType::All | DeviceType::Automatic => true,
            DeviceType::Opencl => device != DeviceType::Host,
            _ => self == device,
        }
    }

    /// Get the OpenCL device type bitfield for this type, or `None` for types
    /// which only exist in SYCL.
    pub fn to_cl(self) -> Option<cl_device_type> {
        match self {
            DeviceType::Cpu => Some(CL_DEVICE_TYPE_CPU),
            DeviceType::Gpu => Some(CL_DEVICE_TYPE_GPU),
            DeviceType::Accelerator => Some(CL_DEVICE_TYPE_ACCELERATOR),
            DeviceType::Custom => Some(CL_DEVICE_TYPE_CUSTOM),
            DeviceType::Automatic => Some(CL_DEVICE_TYPE_DEFAULT),
            DeviceType::All => Some(CL_DEVICE_TYPE_ALL),
            DeviceType::Host | DeviceType::Opencl => None,
        }
    }

    pub fn from_cl(value: cl_device_type) -> Result<Self> {
        match value {
            CL_DEVICE_TYPE_CPU => Ok(DeviceType::Cpu),
            CL_DEVICE_TYPE_GPU => Ok(DeviceType::Gpu),
            CL_DEVICE_TYPE_ACCELERATOR => Ok(DeviceType::Accelerator),
            CL_DEVICE_TYPE_CUSTOM => Ok(DeviceType::Custom),
            CL_DEVICE_TYPE_DEFAULT => Ok(DeviceType::Automatic),
            CL_DEVICE_TYPE_ALL => Ok(DeviceType::All),
            _ => Err(Error::InvalidFlag {
                value: value as i64,
                context: "cl_device_type",
            }),
        }
    }
}

flag_enum! {
    /// Device information descriptors
    pub enum DeviceInfo(i32) {
        DeviceType = 0 => "device_type",
        VendorId = 1 => "vendor_id",
        MaxComputeUnits = 2 => "max_compute_units",
        MaxWorkItemDimensions = 3 => "max_work_item_dimensions",
        MaxWorkItemSizes = 4 => "max_work_item_sizes",
        MaxWorkGroupSize = 5 => "max_work_group_size",
        PreferredVectorWidthChar = 6 => "preferred_vector_width_char",
        PreferredVectorWidthShort = 7 => "preferred_vector_width_short",
        PreferredVectorWidthInt = 8 => "preferred_vector_width_int",
        PreferredVectorWidthLongLong = 9 => "preferred_vector_width_long_long",
        PreferredVectorWidthFloat = 10 => "preferred_vector_width_float",
        PreferredVectorWidthDouble = 11 => "preferred_vector_width_double",
        PreferredVectorWidthHalf = 12 => "preferred_vector_width_half",
        NativeVectorWidthChar = 13 => "native_vector_width_char",
        NativeVectorWidthShort = 14 => "native_vector_width_short",
        NativeVectorWidthInt = 15 => "native_vector_width_int",
        NativeVectorWidthLongLong = 16 => "native_vector_width_long_long",
        NativeVectorWidthFloat = 17 => "native_vector_width_float",
        NativeVectorWidthDouble = 18 => "native_vector_width_double",
        NativeVectorWidthHalf = 19 => "native_vector_width_half",
        MaxClockFrequency = 20 => "max_clock_frequency",
        AddressBits = 21 => "address_bits",
        MaxMemAllocSize = 22 => "max_mem_alloc_size",
        ImageSupport = 23 => "image_support",
        MaxReadImageArgs = 24 => "max_read_image_args",
        MaxWriteImageArgs = 25 => "max_write_image_args",
        Image2dMaxHeight = 26 => "image2d_max_height",
        Image2dMaxWidth = 27 => "image2d_max_width",
        Image3dMaxHeight = 28 => "image3d_max_height",
        Image3dMaxWidth = 29 => "image3d_max_width",
        Image3dMaxDepth = 30 => "image3d_max_depth",
        ImageMaxBufferSize = 31 => "image_max_buffer_size",
        ImageMaxArraySize = 32 => "image_max_array_size",
        MaxSamplers = 33 => "max_samplers",
        MaxParameterSize = 34 => "max_parameter_size",
        MemBaseAddrAlign = 35 => "mem_base_addr_align",
        SingleFpConfig = 36 => "single_fp_config",
        DoubleFpConfig = 37 => "double_fp_config",
        GlobalMemCacheType = 38 => "global_mem_cache_type",
        GlobalMemCacheLineSize = 39 => "global_mem_cache_line_size",
        GlobalMemCacheSize = 40 => "global_mem_cache_size",
        GlobalMemSize = 41 => "global_mem_size",
        MaxConstantBufferSize = 42 => "max_constant_buffer_size",
        MaxConstantArgs = 43 => "max_constant_args",
        LocalMemType = 44 => "local_mem_type",
        LocalMemSize = 45 => "local_mem_size",
        ErrorCorrectionSupport = 46 => "error_correction_support",
        HostUnifiedMemory = 47 => "host_unified_memory",
        ProfilingTimerResolution = 48 => "profiling_timer_resolution",
        EndianLittle = 49 => "endian_little",
        IsAvailable = 50 => "is_available",
        IsCompilerAvailable = 51 => "is_compiler_available",
        IsLinkerAvailable = 52 => "is_linker_available",
        ExecutionCapabilities = 53 => "execution_capabilities",
        QueueProperties = 54 => "queue_properties",
        BuiltInKernels = 55 => "built_in_kernels",
        Platform = 56 => "platform",
        Name = 57 => "name",
        Vendor = 58 => "vendor",
        DriverVersion = 59 => "driver_version",
        Profile = 60 => "profile",
        DeviceVersion = 61 => "device_version",
        OpenclVersion = 62 => "opencl_version",
        Extensions = 63 => "extensions",
        PrintfBufferSize = 64 => "printf_buffer_size",
        PreferredInteropUserSync = 65 => "preferred_interop_user_sync",
        ParentDevice = 66 => "parent_device",
        PartitionMaxSubDevices = 67 => "partition_max_sub_devices",
        PartitionProperties = 68 => "partition_properties",
        PartitionAffinityDomain = 69 => "partition_affinity_domain",
        PartitionType = 70 => "partition_type",
        ReferenceCount = 71 => "reference_count",
    }
    aliases {
        "native_vector_witdth_char" => NativeVectorWidthChar,
        "native_vector_witdth_short" => NativeVectorWidthShort,
        "native_vector_witdth_int" => NativeVectorWidthInt,
        "native_vector_witdth_long_long" => NativeVectorWidthLongLong,
        "native_vector_witdth_float" => NativeVectorWidthFloat,
        "native_vector_witdth_double" => NativeVectorWidthDouble,
        "native_vector_witdth_half" => NativeVectorWidthHalf,
        "image3d_max_widht" => Image3dMaxWidth,
        "image3d_mas_depth" => Image3dMaxDepth,
    }
}

impl DeviceInfo {
    /// Get the `clGetDeviceInfo` parameter name for this descriptor
    pub fn to_cl(self) -> cl_device_info {
        match self {
            DeviceInfo::DeviceType => CL_DEVICE_TYPE,
            DeviceInfo::VendorId => CL_DEVICE_VENDOR_ID,
            DeviceInfo::MaxComputeUnits => CL_DEVICE_MAX_COMPUTE_UNITS,
            DeviceInfo::MaxWorkItemDimensions => CL_DEVICE_MAX_WORK_ITEM_DIMENSIONS,
            DeviceInfo::MaxWorkItemSizes => CL_DEVICE_MAX_WORK_ITEM_SIZES,
            DeviceInfo::MaxWorkGroupSize => CL_DEVICE_MAX_WORK_GROUP_SIZE,
            DeviceInfo::PreferredVectorWidthChar => CL_DEVICE_PREFERRED_VECTOR_WIDTH_CHAR,
            DeviceInfo::PreferredVectorWidthShort => CL_DEVICE_PREFERRED_VECTOR_WIDTH_SHORT,
            DeviceInfo::PreferredVectorWidthInt => CL_DEVICE_PREFERRED_VECTOR_WIDTH_INT,
            DeviceInfo::PreferredVectorWidthLongLong => CL_DEVICE_PREFERRED_VECTOR_WIDTH_LONG,
            DeviceInfo::PreferredVectorWidthFloat => CL_DEVICE_PREFERRED_VECTOR_WIDTH_FLOAT,
            DeviceInfo::PreferredVectorWidthDouble => CL_DEVICE_PREFERRED_VECTOR_WIDTH_DOUBLE,
            DeviceInfo::PreferredVectorWidthHalf => CL_DEVICE_PREFERRED_VECTOR_WIDTH_HALF,
            DeviceInfo::NativeVectorWidthChar => CL_DEVICE_NATIVE_VECTOR_WIDTH_CHAR,
            DeviceInfo::NativeVectorWidthShort => CL_DEVICE_NATIVE_VECTOR_WIDTH_SHORT,
            DeviceInfo::NativeVectorWidthInt => CL_DEVICE_NATIVE_VECTOR_WIDTH_INT,
            DeviceInfo::NativeVectorWidthLongLong => CL_DEVICE_NATIVE_VECTOR_WIDTH_LONG,
            DeviceInfo::NativeVectorWidthFloat => CL_DEVICE_NATIVE_VECTOR_WIDTH_FLOAT,
            DeviceInfo::NativeVectorWidthDouble => CL_DEVICE_NATIVE_VECTOR_WIDTH_DOUBLE,
            DeviceInfo::NativeVectorWidthHalf => CL_DEVICE_NATIVE_VECTOR_WIDTH_HALF,
            DeviceInfo::MaxClockFrequency => CL_DEVICE_MAX_CLOCK_FREQUENCY,
            DeviceInfo::AddressBits => CL_DEVICE_ADDRESS_BITS,
            DeviceInfo::MaxMemAllocSize => CL_DEVICE_MAX_MEM_ALLOC_SIZE,
            DeviceInfo::ImageSupport => CL_DEVICE_IMAGE_SUPPORT,
            DeviceInfo::MaxReadImageArgs => CL_DEVICE_MAX_READ_IMAGE_ARGS,
            DeviceInfo::MaxWriteImageArgs => CL_DEVICE_MAX_WRITE_IMAGE_ARGS,
            DeviceInfo::Image2dMaxHeight => CL_DEVICE_IMAGE2D_MAX_HEIGHT,
            DeviceInfo::Image2dMaxWidth => CL_DEVICE_IMAGE2D_MAX_WIDTH,
            DeviceInfo::Image3dMaxHeight => CL_DEVICE_IMAGE3D_MAX_HEIGHT,
            DeviceInfo::Image3dMaxWidth => CL_DEVICE_IMAGE3D_MAX_WIDTH,
            DeviceInfo::Image3dMaxDepth => CL_DEVICE_IMAGE3D_MAX_DEPTH,
            DeviceInfo::ImageMaxBufferSize => CL_DEVICE_IMAGE_MAX_BUFFER_SIZE,
            DeviceInfo::ImageMaxArraySize => CL_DEVICE_IMAGE_MAX_ARRAY_SIZE,
            DeviceInfo::MaxSamplers => CL_DEVICE_MAX_SAMPLERS,
            DeviceInfo::MaxParameterSize => CL_DEVICE_MAX_PARAMETER_SIZE,
            DeviceInfo::MemBaseAddrAlign => CL_DEVICE_MEM_BASE_ADDR_ALIGN,
            DeviceInfo::SingleFpConfig => CL_DEVICE_SINGLE_FP_CONFIG,
            DeviceInfo::DoubleFpConfig => CL_DEVICE_DOUBLE_FP_CONFIG,
            DeviceInfo::GlobalMemCacheType => CL_DEVICE_GLOBAL_MEM_CACHE_TYPE,
            DeviceInfo::GlobalMemCacheLineSize => CL_DEVICE_GLOBAL_MEM_CACHELINE_SIZE,
            DeviceInfo::GlobalMemCacheSize => CL_DEVICE_GLOBAL_MEM_CACHE_SIZE,
            DeviceInfo::GlobalMemSize => CL_DEVICE_GLOBAL_MEM_SIZE,
            DeviceInfo::MaxConstantBufferSize => CL_DEVICE_MAX_CONSTANT_BUFFER_SIZE,
            DeviceInfo::MaxConstantArgs => CL_DEVICE_MAX_CONSTANT_ARGS,
            DeviceInfo::LocalMemType => CL_DEVICE_LOCAL_MEM_TYPE,
            DeviceInfo::LocalMemSize => CL_DEVICE_LOCAL_MEM_SIZE,
            DeviceInfo::ErrorCorrectionSupport => CL_DEVICE_ERROR_CORRECTION_SUPPORT,
            DeviceInfo::HostUnifiedMemory => CL_DEVICE_HOST_UNIFIED_MEMORY,
            DeviceInfo::ProfilingTimerResolution => CL_DEVICE_PROFILING_TIMER_RESOLUTION,
            DeviceInfo::EndianLittle => CL_DEVICE_ENDIAN_LITTLE,
            DeviceInfo::IsAvailable => CL_DEVICE_AVAILABLE,
            DeviceInfo::IsCompilerAvailable => CL_DEVICE_COMPILER_AVAILABLE,
            DeviceInfo::IsLinkerAvailable => CL_DEVICE_LINKER_AVAILABLE,
            DeviceInfo::ExecutionCapabilities => CL_DEVICE_EXECUTION_CAPABILITIES,
            DeviceInfo::QueueProperties => CL_DEVICE_QUEUE_PROPERTIES,
            DeviceInfo::BuiltInKernels => CL_DEVICE_BUILT_IN_KERNELS,
            DeviceInfo::Platform => CL_DEVICE_PLATFORM,
            DeviceInfo::Name => CL_DEVICE_NAME,
            DeviceInfo::Vendor => CL_DEVICE_VENDOR,
            DeviceInfo::DriverVersion => CL_DRIVER_VERSION,
            DeviceInfo::Profile => CL_DEVICE_PROFILE,
            DeviceInfo::DeviceVersion => CL_DEVICE_VERSION,
            DeviceInfo::OpenclVersion => CL_DEVICE_OPENCL_C_VERSION,
            DeviceInfo::Extensions => CL_DEVICE_EXTENSIONS,
            DeviceInfo::PrintfBufferSize => CL_DEVICE_PRINTF_BUFFER_SIZE,
            DeviceInfo::PreferredInteropUserSync => CL_DEVICE_PREFERRED_INTEROP_USER_SYNC,
            DeviceInfo::ParentDevice => CL_DEVICE_PARENT_DEVICE,
            DeviceInfo::PartitionMaxSubDevices => CL_DEVICE_PARTITION_MAX_SUB_DEVICES,
            DeviceInfo::PartitionProperties => CL_DEVICE_PARTITION_PROPERTIES,
            DeviceInfo::PartitionAffinityDomain => CL_DEVICE_PARTITION_AFFINITY_DOMAIN,
            DeviceInfo::PartitionType => CL_DEVICE_PARTITION_TYPE,
            DeviceInfo::ReferenceCount => CL_DEVICE_REFERENCE_COUNT,
        }
    }

    /// Get the descriptor for a `clGetDeviceInfo` parameter name.
    ///
    /// OpenCL parameters with no SYCL descriptor (e.g.
    /// `CL_DEVICE_HALF_FP_CONFIG`) are rejected.
    pub fn from_cl(param: cl_device_info) -> Result<Self> {
        lazy_static::lazy_static! {
            static ref BY_CL_PARAM: std::collections::HashMap<cl_device_info, DeviceInfo> =
                DeviceInfo::ALL.iter().map(|&d| (d.to_cl(), d)).collect();
        }

        BY_CL_PARAM
            .get(&param)
            .copied()
            .ok_or(Error::InvalidFlag {
                value: param as i64,
                context: "cl_device_info",
            })
    }
}

flag_enum! {
    pub enum DevicePartitionProperty(i32) {
        Unsupported = 0 => "unsupported",
        PartitionEqually = 1 => "partition_equally",
        PartitionByCounts = 2 => "partition_by_counts",
        PartitionByAffinityDomain = 3 => "partition_by_affinity_domain",
        PartitionAffinityDomainNextPartitionable = 4 => "partition_affinity_domain_next_partitionable",
    }
}

impl DevicePartitionProperty {
    /// Get the OpenCL partition property for this value.
    ///
    /// Partitioning along the next partitionable affinity domain is expressed
    /// in OpenCL as `CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN` together with
    /// the `NEXT_PARTITIONABLE` domain, so both affinity variants share a
    /// property.
    pub fn to_cl(self) -> Option<cl_device_partition_property> {
        match self {
            DevicePartitionProperty::Unsupported => None,
            DevicePartitionProperty::PartitionEqually => Some(CL_DEVICE_PARTITION_EQUALLY),
            DevicePartitionProperty::PartitionByCounts => Some(CL_DEVICE_PARTITION_BY_COUNTS),
            DevicePartitionProperty::PartitionByAffinityDomain
            | DevicePartitionProperty::PartitionAffinityDomainNextPartitionable => {
                Some(CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN)
            }
        }
    }

    pub fn from_cl(value: cl_device_partition_property) -> Result<Self> {
        match value {
            CL_DEVICE_PARTITION_EQUALLY => Ok(DevicePartitionProperty::PartitionEqually),
            CL_DEVICE_PARTITION_BY_COUNTS => Ok(DevicePartitionProperty::PartitionByCounts),
            CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN => {
                Ok(DevicePartitionProperty::PartitionByAffinityDomain)
            }
            _ => Err(Error::InvalidFlag {
                value: value as i64,
                context: "cl_device_partition_property",
            }),
        }
    }
}

flag_enum! {
    pub enum DeviceAffinityDomain(i32) {
        Unsupported = 0 => "unsupported",
        Numa = 1 => "numa",
        L4Cache = 2 => "L4_cache",
        L3Cache = 3 => "L3_cache",
        L2Cache = 4 => "L2_cache",
        NextPartitionable = 5 => "next_partitionable",
    }
}

impl DeviceAffinityDomain {
    pub fn to_cl(self) -> Option<cl_device_affinity_domain> {
        match self {
            DeviceAffinityDomain::Unsupported => None,
            DeviceAffinityDomain::Numa => Some(CL_DEVICE_AFFINITY_DOMAIN_NUMA),
            DeviceAffinityDomain::L4Cache => Some(CL_DEVICE_AFFINITY_DOMAIN_L4_CACHE),
            DeviceAffinityDomain::L3Cache => Some(CL_DEVICE_AFFINITY_DOMAIN_L3_CACHE),
            DeviceAffinityDomain::L2Cache => Some(CL_DEVICE_AFFINITY_DOMAIN_L2_CACHE),
            DeviceAffinityDomain::NextPartitionable => {
                Some(CL_DEVICE_AFFINITY_DOMAIN_NEXT_PARTITIONABLE)
            }
        }
    }

    pub fn from_cl(value: cl_device_affinity_domain) -> Result<Self> {
        match value {
            CL_DEVICE_AFFINITY_DOMAIN_NUMA => Ok(DeviceAffinityDomain::Numa),
            CL_DEVICE_AFFINITY_DOMAIN_L4_CACHE => Ok(DeviceAffinityDomain::L4Cache),
            CL_DEVICE_AFFINITY_DOMAIN_L3_CACHE => Ok(DeviceAffinityDomain::L3Cache),
            CL_DEVICE_AFFINITY_DOMAIN_L2_CACHE => Ok(DeviceAffinityDomain::L2Cache),
            CL_DEVICE_AFFINITY_DOMAIN_NEXT_PARTITIONABLE => {
                Ok(DeviceAffinityDomain::NextPartitionable)
            }
            _ => Err(Error::InvalidFlag {
                value: value as i64,
                context: "cl_device_affinity_domain",
            }),
        }
    }
}

flag_enum! {
    pub enum DevicePartitionType(i32) {
        NoPartition = 0 => "no_partition",
        Numa = 1 => "numa",
        L4Cache = 2 => "L4_cache",
        L3Cache = 3 => "L3_cache",
        L2Cache = 4 => "L2_cache",
        L1Cache = 5 => "L1_cache",
    }
}

impl DevicePartitionType {
    /// Get the affinity domain a sub-device of this partition type was
    /// created along.
    pub fn to_cl(self) -> Option<cl_device_affinity_domain> {
        match self {
            DevicePartitionType::NoPartition => None,
            DevicePartitionType::Numa => Some(CL_DEVICE_AFFINITY_DOMAIN_NUMA),
            DevicePartitionType::L4Cache => Some(CL_DEVICE_AFFINITY_DOMAIN_L4_CACHE),
            DevicePartitionType::L3Cache => Some(CL_DEVICE_AFFINITY_DOMAIN_L3_CACHE),
            DevicePartitionType::L2Cache => Some(CL_DEVICE_AFFINITY_DOMAIN_L2_CACHE),
            DevicePartitionType::L1Cache => Some(CL_DEVICE_AFFINITY_DOMAIN_L1_CACHE),
        }
    }

    pub fn from_cl(value: cl_device_affinity_domain) -> Result<Self> {
        match value {
            CL_DEVICE_AFFINITY_DOMAIN_NUMA => Ok(DevicePartitionType::Numa),
            CL_DEVICE_AFFINITY_DOMAIN_L4_CACHE => Ok(DevicePartitionType::L4Cache),
            CL_DEVICE_AFFINITY_DOMAIN_L3_CACHE => Ok(DevicePartitionType::L3Cache),
            CL_DEVICE_AFFINITY_DOMAIN_L2_CACHE => Ok(DevicePartitionType::L2Cache),
            CL_DEVICE_AFFINITY_DOMAIN_L1_CACHE => Ok(DevicePartitionType::L1Cache),
            _ => Err(Error::InvalidFlag {
                value: value as i64,
                context: "cl_device_affinity_domain",
            }),
        }
    }
}

flag_enum! {
    /// Type of local memory for a device
    pub enum LocalMemType(i32) {
        /// No local memory - only custom devices may report this
        None = 0 => "none",
        Local = 1 => "local",
        Global = 2 => "global",
    }
}

impl LocalMemType {
    pub fn to_cl(self) -> cl_device_local_mem_type {
        match self {
            LocalMemType::None => CL_NONE,
            LocalMemType::Local => CL_LOCAL,
            LocalMemType::Global => CL_GLOBAL,
        }
    }

    pub fn from_cl(value: cl_device_local_mem_type) -> Result<Self> {
        match value {
            CL_NONE => Ok(LocalMemType::None),
            CL_LOCAL => Ok(LocalMemType::Local),
            CL_GLOBAL => Ok(LocalMemType::Global),
            _ => Err(Error::InvalidFlag {
                value: value as i64,
                context: "cl_device_local_mem_type",
            }),
        }
    }
}

flag_enum! {
    /// Floating point capabilities
    pub enum FpConfig(i32) {
        Denorm = 0 => "denorm",
        InfNan = 1 => "inf_nan",
        RoundToNearest = 2 => "round_to_nearest",
        RoundToZero = 3 => "round_to_zero",
        RoundToInf = 4 => "round_to_inf",
        Fma = 5 => "fma",
        CorrectlyRoundedDivideSqrt = 6 => "correctly_rounded_divide_sqrt",
        SoftFloat = 7 => "soft_float",
    }
}

impl FpConfig {
    /// Get the OpenCL bit for this capability. Note that the OpenCL bit
    /// order differs from the declaration order for the last two values.
    pub fn to_cl(self) -> cl_device_fp_config {
        match self {
            FpConfig::Denorm => CL_FP_DENORM,
            FpConfig::InfNan => CL_FP_INF_NAN,
            FpConfig::RoundToNearest => CL_FP_ROUND_TO_NEAREST,
            FpConfig::RoundToZero => CL_FP_ROUND_TO_ZERO,
            FpConfig::RoundToInf => CL_FP_ROUND_TO_INF,
            FpConfig::Fma => CL_FP_FMA,
            FpConfig::CorrectlyRoundedDivideSqrt => CL_FP_CORRECTLY_ROUNDED_DIVIDE_SQRT,
            FpConfig::SoftFloat => CL_FP_SOFT_FLOAT,
        }
    }

    pub fn from_cl(value: cl_device_fp_config) -> Result<Self> {
        FpConfig::ALL
            .iter()
            .copied()
            .find(|f| f.to_cl() == value)
            .ok_or(Error::InvalidFlag {
                value: value as i64,
                context: "cl_device_fp_config",
            })
    }
}

flag_enum! {
    /// Type of global memory cache supported by a device
    pub enum GlobalMemCacheType(i32) {
        None = 0 => "none",
        ReadOnly = 1 => "read_only",
        WriteOnly = 2 => "write_only",
    }
}

impl GlobalMemCacheType {
    /// Get the OpenCL cache type. OpenCL has no write-only cache; a cache the
    /// device may write through is reported as `CL_READ_WRITE_CACHE`.
    pub fn to_cl(self) -> cl_device_mem_cache_type {
        match self {
            GlobalMemCacheType::None => CL_NONE,
            GlobalMemCacheType::ReadOnly => CL_READ_ONLY_CACHE,
            GlobalMemCacheType::WriteOnly => CL_READ_WRITE_CACHE,
        }
    }

    pub fn from_cl(value: cl_device_mem_cache_type) -> Result<Self> {
        match value {
            CL_NONE => Ok(GlobalMemCacheType::None),
            CL_READ_ONLY_CACHE => Ok(GlobalMemCacheType::ReadOnly),
            CL_READ_WRITE_CACHE => Ok(GlobalMemCacheType::WriteOnly),
            _ => Err(Error::InvalidFlag {
                value: value as i64,
                context: "cl_device_mem_cache_type",
            }),
        }
    }
}

flag_enum! {
    pub enum DeviceExecutionCapabilities(u32) {
        ExecKernel = 0 => "exec_kernel",
        ExecNativeKernel = 1 => "exec_native_kernel",
    }
}

impl DeviceExecutionCapabilities {
    pub fn to_cl(self) -> cl_device_exec_capabilities {
        match self {
            DeviceExecutionCapabilities::ExecKernel => CL_EXEC_KERNEL,
            DeviceExecutionCapabilities::ExecNativeKernel => CL_EXEC_NATIVE_KERNEL,
        }
    }

    pub fn from_cl(value: cl_device_exec_capabilities) -> Result<Self> {
        match value {
            CL_EXEC_KERNEL => Ok(DeviceExecutionCapabilities::ExecKernel),
            CL_EXEC_NATIVE_KERNEL => Ok(DeviceExecutionCapabilities::ExecNativeKernel),
            _ => Err(Error::InvalidFlag {
                value: value as i64,
                context: "cl_device_exec_capabilities",
            }),
        }
    }
}

bitfield! {
    /// A bitfield of floating point capabilities, using the OpenCL bit layout
    pub struct DeviceFpConfig(cl_uint) {
        pub const DENORM = CL_FP_DENORM as cl_uint;
        pub const INF_NAN = CL_FP_INF_NAN as cl_uint;
        pub const ROUND_TO_NEAREST = CL_FP_ROUND_TO_NEAREST as cl_uint;
        pub const ROUND_TO_ZERO = CL_FP_ROUND_TO_ZERO as cl_uint;
        pub const ROUND_TO_INF = CL_FP_ROUND_TO_INF as cl_uint;
        pub const FMA = CL_FP_FMA as cl_uint;
        pub const CORRECTLY_ROUNDED_DIVIDE_SQRT = CL_FP_CORRECTLY_ROUNDED_DIVIDE_SQRT as cl_uint;
        pub const SOFT_FLOAT = CL_FP_SOFT_FLOAT as cl_uint;
    }
}

impl DeviceFpConfig {
    pub fn contains_flag(self, flag: FpConfig) -> bool {
        self.contains(flag.into())
    }

    /// Iterate over the capabilities set in this bitfield
    pub fn flags(self) -> impl Iterator<Item = FpConfig> {
        FpConfig::ALL
            .iter()
            .copied()
            .filter(move |&f| self.contains_flag(f))
    }
}

impl From<FpConfig> for DeviceFpConfig {
    fn from(flag: FpConfig) -> Self {
        DeviceFpConfig(flag.to_cl() as cl_uint)
    }
}

impl std::iter::FromIterator<FpConfig> for DeviceFpConfig {
    fn from_iter<I: IntoIterator<Item = FpConfig>>(iter: I) -> Self {
        iter.into_iter()
            .fold(DeviceFpConfig::EMPTY, |acc, f| acc | f.into())
    }
}

bitfield! {
    /// A bitfield of execution capabilities
    pub struct DeviceExecCapabilities(cl_uint) {
        pub const EXEC_KERNEL = CL_EXEC_KERNEL as cl_uint;
        pub const EXEC_NATIVE_KERNEL = CL_EXEC_NATIVE_KERNEL as cl_uint;
    }
}

impl DeviceExecCapabilities {
    pub fn contains_flag(self, flag: DeviceExecutionCapabilities) -> bool {
        self.contains(flag.into())
    }
}

impl From<DeviceExecutionCapabilities> for DeviceExecCapabilities {
    fn from(flag: DeviceExecutionCapabilities) -> Self {
        DeviceExecCapabilities(flag.to_cl() as cl_uint)
    }
}

bitfield! {
    /// A bitfield of command queue properties supported by a device
    pub struct DeviceQueueProperties(cl_uint) {
        pub const OUT_OF_ORDER_EXEC_MODE_ENABLE = CL_QUEUE_OUT_OF_ORDER_EXEC_MODE_ENABLE as cl_uint;
        pub const PROFILING_ENABLE = CL_QUEUE_PROFILING_ENABLE as cl_uint;
    }
}

/// Marker types for every device information descriptor.
///
/// Descriptors without an explicit association resolve to `()`.
pub mod param {
    use super::DeviceInfo;
    use crate::id::Id;
    use crate::raw::{cl_uint, cl_ulong};
    use libc::size_t;

    info_params! {
        DeviceInfo;
        DeviceType => super::DeviceType;
        VendorId => ();
        MaxComputeUnits => cl_uint;
        MaxWorkItemDimensions => ();
        /// Maximum number of work-items in each dimension of a work-group
        MaxWorkItemSizes => Id<3>;
        MaxWorkGroupSize => size_t;
        PreferredVectorWidthChar => ();
        PreferredVectorWidthShort => ();
        PreferredVectorWidthInt => ();
        PreferredVectorWidthLongLong => ();
        PreferredVectorWidthFloat => ();
        PreferredVectorWidthDouble => ();
        PreferredVectorWidthHalf => ();
        NativeVectorWidthChar => ();
        NativeVectorWidthShort => ();
        NativeVectorWidthInt => ();
        NativeVectorWidthLongLong => ();
        NativeVectorWidthFloat => ();
        NativeVectorWidthDouble => ();
        NativeVectorWidthHalf => ();
        MaxClockFrequency => ();
        AddressBits => ();
        /// Maximum size of a memory object allocation, in bytes
        MaxMemAllocSize => cl_ulong;
        ImageSupport => ();
        MaxReadImageArgs => ();
        MaxWriteImageArgs => ();
        Image2dMaxHeight => ();
        Image2dMaxWidth => ();
        Image3dMaxHeight => ();
        Image3dMaxWidth => ();
        Image3dMaxDepth => ();
        ImageMaxBufferSize => ();
        ImageMaxArraySize => ();
        MaxSamplers => ();
        MaxParameterSize => ();
        MemBaseAddrAlign => ();
        SingleFpConfig => ();
        DoubleFpConfig => ();
        GlobalMemCacheType => ();
        GlobalMemCacheLineSize => ();
        GlobalMemCacheSize => ();
        GlobalMemSize => ();
        MaxConstantBufferSize => ();
        MaxConstantArgs => ();
        LocalMemType => ();
        /// Size of the local memory arena, in bytes
        LocalMemSize => cl_ulong;
        ErrorCorrectionSupport => ();
        HostUnifiedMemory => ();
        ProfilingTimerResolution => ();
        EndianLittle => ();
        IsAvailable => ();
        IsCompilerAvailable => ();
        IsLinkerAvailable => ();
        ExecutionCapabilities => ();
        QueueProperties => ();
        BuiltInKernels => ();
        Platform => ();
        Name => String;
        Vendor => String;
        DriverVersion => ();
        Profile => String;
        DeviceVersion => ();
        OpenclVersion => ();
        Extensions => ();
        PrintfBufferSize => ();
        PreferredInteropUserSync => ();
        ParentDevice => ();
        PartitionMaxSubDevices => ();
        PartitionProperties => ();
        PartitionAffinityDomain => ();
        PartitionType => ();
        ReferenceCount => ();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::TryFrom;
    use std::str::FromStr;

    #[test]
    fn test_discriminants_follow_declaration_order() {
        for (i, d) in DeviceInfo::ALL.iter().enumerate() {
            assert_eq!(d.raw(), i as i32);
        }
        assert_eq!(DeviceInfo::ALL.len(), 72);
        assert_eq!(DeviceInfo::ReferenceCount.raw(), 71);
        assert_eq!(DeviceType::All.raw(), 7);
        assert_eq!(DevicePartitionType::L1Cache.raw(), 5);
        assert_eq!(FpConfig::SoftFloat.raw(), 7);
    }

    #[test]
    fn test_try_from_raw() {
        assert_eq!(LocalMemType::try_from(2i32).unwrap(), LocalMemType::Global);
        assert_eq!(DeviceInfo::try_from(57i32).unwrap(), DeviceInfo::Name);

        let err = GlobalMemCacheType::try_from(3i32).unwrap_err();
        assert!(dbg!(format!("{}", err)).contains("GlobalMemCacheType"));
        assert!(DeviceInfo::try_from(-1i32).is_err());
        assert!(DeviceType::try_from(8u32).is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(format!("{}", DeviceInfo::MaxComputeUnits), "max_compute_units");
        assert_eq!(format!("{}", DeviceAffinityDomain::L3Cache), "L3_cache");
        assert_eq!(
            DeviceInfo::from_str("max_work_item_sizes").unwrap(),
            DeviceInfo::MaxWorkItemSizes
        );

        for &d in DeviceInfo::ALL {
            assert_eq!(DeviceInfo::from_str(d.name()).unwrap(), d);
        }
        for &p in DevicePartitionProperty::ALL {
            assert_eq!(p.to_string().parse::<DevicePartitionProperty>().unwrap(), p);
        }

        assert!(DeviceType::from_str("CPU").is_err());
    }

    #[test]
    fn test_every_enum_round_trips() {
        macro_rules! check_round_trip {
            ( $( $name:ident ),* ) => {
                $(
                    for &v in $name::ALL {
                        assert_eq!($name::try_from(v.raw()).unwrap(), v);
                        assert_eq!(v.to_string().parse::<$name>().unwrap(), v);
                    }
                    let past_end = $name::ALL[$name::ALL.len() - 1].raw() + 1;
                    assert!($name::try_from(past_end).is_err());
                )*
            };
        }

        check_round_trip!(
            DeviceType,
            DeviceInfo,
            DevicePartitionProperty,
            DeviceAffinityDomain,
            DevicePartitionType,
            LocalMemType,
            FpConfig,
            GlobalMemCacheType,
            DeviceExecutionCapabilities
        );

        assert_eq!(
            dbg!(DeviceInfo::try_from(-1i32).unwrap_err().to_string()),
            "Invalid flag value -1 for type DeviceInfo"
        );
    }

    #[test]
    fn test_historical_spellings() {
        assert_eq!(
            DeviceInfo::from_str("native_vector_witdth_half").unwrap(),
            DeviceInfo::NativeVectorWidthHalf
        );
        assert_eq!(
            DeviceInfo::from_str("image3d_max_widht").unwrap(),
            DeviceInfo::Image3dMaxWidth
        );
        assert_eq!(
            DeviceInfo::from_str("image3d_mas_depth").unwrap(),
            DeviceInfo::Image3dMaxDepth
        );
        // display always uses the corrected spelling
        assert_eq!(DeviceInfo::Image3dMaxDepth.name(), "image3d_max_depth");
    }

    #[test]
    fn test_device_info_cl_mapping() {
        assert_eq!(DeviceInfo::DeviceType.to_cl(), CL_DEVICE_TYPE);
        assert_eq!(DeviceInfo::OpenclVersion.to_cl(), CL_DEVICE_OPENCL_C_VERSION);
        assert_eq!(
            DeviceInfo::PreferredVectorWidthLongLong.to_cl(),
            CL_DEVICE_PREFERRED_VECTOR_WIDTH_LONG
        );

        for &d in DeviceInfo::ALL {
            assert_eq!(DeviceInfo::from_cl(d.to_cl()).unwrap(), d);
        }

        assert!(DeviceInfo::from_cl(CL_DEVICE_HALF_FP_CONFIG).is_err());
        assert!(DeviceInfo::from_cl(CL_DEVICE_MIN_DATA_TYPE_ALIGN_SIZE).is_err());
    }

    #[test]
    fn test_device_type_cl_mapping() {
        assert_eq!(DeviceType::Host.to_cl(), None);
        assert_eq!(DeviceType::Opencl.to_cl(), None);
        assert_eq!(DeviceType::Automatic.to_cl(), Some(CL_DEVICE_TYPE_DEFAULT));

        for &t in DeviceType::ALL {
            if let Some(cl) = t.to_cl() {
                assert_eq!(DeviceType::from_cl(cl).unwrap(), t);
            }
        }

        assert!(DeviceType::from_cl(CL_DEVICE_TYPE_CPU | CL_DEVICE_TYPE_GPU).is_err());
    }

    #[test]
    fn test_device_type_selects() {
        assert!(DeviceType::All.selects(DeviceType::Host));
        assert!(DeviceType::Opencl.selects(DeviceType::Gpu));
        assert!(!DeviceType::Opencl.selects(DeviceType::Host));
        assert!(DeviceType::Cpu.selects(DeviceType::Cpu));
        assert!(!DeviceType::Cpu.selects(DeviceType::Gpu));
    }

    #[test]
    fn test_fp_config_bit_order() {
        assert_eq!(FpConfig::SoftFloat.to_cl(), 1 << 6);
        assert_eq!(FpConfig::CorrectlyRoundedDivideSqrt.to_cl(), 1 << 7);

        for &f in FpConfig::ALL {
            assert_eq!(FpConfig::from_cl(f.to_cl()).unwrap(), f);
        }
        assert!(FpConfig::from_cl(1 << 8).is_err());
    }

    #[test]
    fn test_partition_cl_mapping() {
        assert_eq!(DevicePartitionProperty::Unsupported.to_cl(), None);
        assert_eq!(
            DevicePartitionProperty::PartitionAffinityDomainNextPartitionable.to_cl(),
            Some(CL_DEVICE_PARTITION_BY_AFFINITY_DOMAIN)
        );
        assert_eq!(
            DevicePartitionProperty::from_cl(CL_DEVICE_PARTITION_BY_COUNTS).unwrap(),
            DevicePartitionProperty::PartitionByCounts
        );
        assert!(DevicePartitionProperty::from_cl(CL_DEVICE_PARTITION_BY_COUNTS_LIST_END).is_err());

        for &a in DeviceAffinityDomain::ALL {
            if let Some(cl) = a.to_cl() {
                assert_eq!(DeviceAffinityDomain::from_cl(cl).unwrap(), a);
            }
        }
        for &t in DevicePartitionType::ALL {
            if let Some(cl) = t.to_cl() {
                assert_eq!(DevicePartitionType::from_cl(cl).unwrap(), t);
            }
        }
        assert!(DeviceAffinityDomain::from_cl(CL_DEVICE_AFFINITY_DOMAIN_L1_CACHE).is_err());
    }

    #[test]
    fn test_memory_type_cl_mapping() {
        for &t in LocalMemType::ALL {
            assert_eq!(LocalMemType::from_cl(t.to_cl()).unwrap(), t);
        }
        for &t in GlobalMemCacheType::ALL {
            assert_eq!(GlobalMemCacheType::from_cl(t.to_cl()).unwrap(), t);
        }
        for &c in DeviceExecutionCapabilities::ALL {
            assert_eq!(DeviceExecutionCapabilities::from_cl(c.to_cl()).unwrap(), c);
        }
        assert!(LocalMemType::from_cl(3).is_err());
    }

    #[test]
    fn test_fp_config_bitfield() {
        let config: DeviceFpConfig = vec![FpConfig::Fma, FpConfig::InfNan].into_iter().collect();
        assert!(config.contains_flag(FpConfig::Fma));
        assert!(!config.contains_flag(FpConfig::Denorm));
        assert_eq!(
            config.flags().collect::<Vec<_>>(),
            vec![FpConfig::InfNan, FpConfig::Fma]
        );
        assert_eq!(config, DeviceFpConfig::FMA | DeviceFpConfig::INF_NAN);

        assert!(!dbg!(format!("{:?}", DeviceFpConfig::EMPTY)).contains("FMA"));
        assert!(dbg!(format!("{:?}", config)).contains("INF_NAN"));
    }

    #[test]
    fn test_exec_and_queue_bitfields() {
        let caps = DeviceExecCapabilities::EXEC_KERNEL;
        assert!(caps.contains_flag(DeviceExecutionCapabilities::ExecKernel));
        assert!(!caps.contains_flag(DeviceExecutionCapabilities::ExecNativeKernel));

        let props = DeviceQueueProperties::from_raw(0b11);
        assert!(props.contains(DeviceQueueProperties::PROFILING_ENABLE));
        assert_eq!(props.raw(), 3);
        assert!(DeviceQueueProperties::EMPTY.is_empty());
    }
}
