//! Probes of the host machine, used to describe the host device

use crate::raw::{cl_uint, cl_ulong};

/// Get the number of processors available to this process
pub fn compute_units() -> cl_uint {
    num_cpus::get() as cl_uint
}

/// Get the size of the physical memory in bytes, or 0 if it can't be
/// determined
pub fn physical_memory() -> cl_ulong {
    match physical_memory_bytes() {
        Some(n) => n,
        None => {
            log::warn!("unable to determine the size of host memory");
            0
        }
    }
}

#[cfg(any(target_os = "linux", target_os = "android", target_os = "macos"))]
fn physical_memory_bytes() -> Option<cl_ulong> {
    let (pages, page_size) =
        unsafe { (libc::sysconf(libc::_SC_PHYS_PAGES), libc::sysconf(libc::_SC_PAGESIZE)) };
    if pages < 0 || page_size < 0 {
        return None;
    }

    (pages as cl_ulong).checked_mul(page_size as cl_ulong)
}

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "macos")))]
fn physical_memory_bytes() -> Option<cl_ulong> {
    None
}
