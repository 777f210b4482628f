extern crate sycl_device_info;

use sycl_device_info::info::device::{param, DeviceInfo, DeviceType};
use sycl_device_info::util::InfoQuery;
use sycl_device_info::DeviceProperties;

pub fn main() {
    let host = DeviceProperties::host();
    println!("Got host device: {:#?}", host);

    println!(
        "Max work item sizes: {} ({})",
        host.info::<param::MaxWorkItemSizes>().unwrap(),
        <param::MaxWorkItemSizes as sycl_device_info::info::InfoParam>::output_type_name()
    );

    for &selector in DeviceType::ALL {
        println!(
            "Selected by {}: {}",
            selector,
            host.is_selected_by(selector)
        );
    }

    for &d in DeviceInfo::ALL {
        if !d.result_kind().is_void() {
            println!("{} -> {} (OpenCL code {:#x})", d, d.result_kind(), d.to_cl());
        }
    }
}
