//! IOKit interface for the battery service
//!
//! This module abstracts the three registry primitives the battery
//! reader consumes: matching a service by name, reading one typed
//! property by key, and releasing the handle. The [`IOKit`] trait is
//! the seam for test doubles; [`IOKitImpl`] is the real binding and is
//! only compiled on macOS.
//!
//! # Safety
//!
//! All unsafe FFI lives in [`IOKitImpl`]. CF objects returned by the
//! registry are wrapped under the create rule so they are released when
//! dropped; the matching dictionary is consumed by
//! `IOServiceGetMatchingService` and needs no release of its own.

#[cfg(target_os = "macos")]
mod bindings;

#[cfg(test)]
use mockall::automock;

/// Opaque reference to one matched entry in the IORegistry.
///
/// Wraps a raw `io_object_t`. Only [`IOKit`] implementations mint
/// these; the reader treats them as opaque tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceHandle(u32);

impl ServiceHandle {
    /// Wraps a raw `io_object_t` obtained from a registry lookup.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// The underlying `io_object_t` value.
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

/// The registry capability the battery reader depends on.
///
/// Lookup failure, a missing key, and a value of the wrong CF type all
/// collapse to `None`; only `io_object_release` distinguishes success
/// from failure, via its return value.
#[cfg_attr(test, automock)]
pub trait IOKit: Send + Sync {
    /// Looks up the first registry entry matching `service_name`.
    fn io_service_get_matching_service(&self, service_name: &str) -> Option<ServiceHandle>;

    /// Releases a handle returned by a previous lookup. Returns whether
    /// the registry reported success.
    fn io_object_release(&self, service: ServiceHandle) -> bool;

    /// Reads a numeric property from the entry.
    fn get_number_property(&self, service: ServiceHandle, key: &str) -> Option<i64>;

    /// Reads a boolean property from the entry.
    fn get_bool_property(&self, service: ServiceHandle, key: &str) -> Option<bool>;
}

/// The real IOKit binding.
#[derive(Debug, Default)]
pub struct IOKitImpl;

#[cfg(target_os = "macos")]
impl IOKitImpl {
    fn copy_property(
        &self,
        service: ServiceHandle,
        key: &str,
    ) -> Option<core_foundation::base::CFType> {
        use core_foundation::base::{kCFAllocatorDefault, TCFType};
        use core_foundation::string::CFString;

        let key = CFString::new(key);
        unsafe {
            let value = bindings::IORegistryEntryCreateCFProperty(
                service.as_raw(),
                key.as_concrete_TypeRef(),
                kCFAllocatorDefault,
                0,
            );
            if value.is_null() {
                None
            } else {
                Some(core_foundation::base::CFType::wrap_under_create_rule(value))
            }
        }
    }
}

#[cfg(target_os = "macos")]
impl IOKit for IOKitImpl {
    fn io_service_get_matching_service(&self, service_name: &str) -> Option<ServiceHandle> {
        let name = std::ffi::CString::new(service_name).ok()?;
        unsafe {
            let matching = bindings::IOServiceMatching(name.as_ptr());
            if matching.is_null() {
                return None;
            }
            // Consumes one reference to the matching dictionary.
            let service = bindings::IOServiceGetMatchingService(
                bindings::K_IOMASTER_PORT_DEFAULT,
                matching,
            );
            if service == 0 {
                None
            } else {
                Some(ServiceHandle::from_raw(service))
            }
        }
    }

    fn io_object_release(&self, service: ServiceHandle) -> bool {
        unsafe { bindings::IOObjectRelease(service.as_raw()) == bindings::KERN_SUCCESS }
    }

    fn get_number_property(&self, service: ServiceHandle, key: &str) -> Option<i64> {
        use core_foundation::number::CFNumber;

        self.copy_property(service, key)?.downcast::<CFNumber>()?.to_i64()
    }

    fn get_bool_property(&self, service: ServiceHandle, key: &str) -> Option<bool> {
        use core_foundation::boolean::CFBoolean;

        let value = self.copy_property(service, key)?.downcast::<CFBoolean>()?;
        Some(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_lookup_is_keyed_by_service_name() {
        let mut mock = MockIOKit::new();
        mock.expect_io_service_get_matching_service()
            .withf(|name| name == "AppleSmartBattery")
            .times(1)
            .returning(|_| Some(ServiceHandle::from_raw(7)));

        let service = mock.io_service_get_matching_service("AppleSmartBattery");
        assert_eq!(service, Some(ServiceHandle::from_raw(7)));
    }

    #[test]
    fn service_handle_round_trips_raw_value() {
        let handle = ServiceHandle::from_raw(0x2c1);
        assert_eq!(handle.as_raw(), 0x2c1);
    }
}
