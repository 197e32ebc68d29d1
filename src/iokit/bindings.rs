//! FFI bindings to the IOKit registry calls used by this crate.

#![allow(non_camel_case_types, non_snake_case)]

use std::os::raw::{c_char, c_void};

use core_foundation::base::{CFAllocatorRef, CFTypeRef};
use core_foundation::string::CFStringRef;
use libc::mach_port_t;

/// IO object type
pub type io_object_t = u32;
/// IO registry entry type
pub type io_registry_entry_t = io_object_t;
/// IO service type
pub type io_service_t = io_object_t;
/// Mach kernel return code
pub type kern_return_t = i32;

/// Default master port for IOKit
pub const K_IOMASTER_PORT_DEFAULT: mach_port_t = 0;
/// Operation completed successfully
pub const KERN_SUCCESS: kern_return_t = 0;

#[link(name = "IOKit", kind = "framework")]
extern "C" {
    /// Create matching dictionary for an IOKit service class
    pub fn IOServiceMatching(serviceName: *const c_char) -> *mut c_void;

    /// Get the first matching service from the IOKit registry
    pub fn IOServiceGetMatchingService(
        masterPort: mach_port_t,
        matchingDictionary: *mut c_void,
    ) -> io_service_t;

    /// Release an IOKit object reference
    pub fn IOObjectRelease(object: io_object_t) -> kern_return_t;

    /// Copy a single property from an IOKit registry entry
    pub fn IORegistryEntryCreateCFProperty(
        entry: io_registry_entry_t,
        key: CFStringRef,
        allocator: CFAllocatorRef,
        options: u32,
    ) -> CFTypeRef;
}
