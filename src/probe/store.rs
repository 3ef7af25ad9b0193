//! Hierarchical key/value preference stores with typed integer reads.

use crate::error::StoreError;
use std::sync::Arc;

/// A store addressed by hierarchical key paths, such as the Windows registry.
pub trait PreferenceStore: Send + Sync {
    /// Open the key at `path` for reading values.
    fn open_key(&self, path: &str) -> Result<Box<dyn PreferenceKey>, StoreError>;
}

/// An opened key. Dropping it releases the underlying handle.
pub trait PreferenceKey {
    /// Read an integer (DWORD) value.
    fn read_u32(&self, name: &str) -> Result<u32, StoreError>;
}

/// Store used on hosts without a structured preference store.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl PreferenceStore for UnavailableStore {
    fn open_key(&self, _path: &str) -> Result<Box<dyn PreferenceKey>, StoreError> {
        Err(StoreError::Unsupported)
    }
}

/// The current user's registry hive.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsRegistryStore;

#[cfg(windows)]
impl PreferenceStore for WindowsRegistryStore {
    fn open_key(&self, path: &str) -> Result<Box<dyn PreferenceKey>, StoreError> {
        use winreg::enums::{HKEY_CURRENT_USER, KEY_QUERY_VALUE};
        use winreg::RegKey;

        let key = RegKey::predef(HKEY_CURRENT_USER).open_subkey_with_flags(path, KEY_QUERY_VALUE)?;
        Ok(Box::new(RegistryKey(key)))
    }
}

#[cfg(windows)]
struct RegistryKey(winreg::RegKey);

#[cfg(windows)]
impl PreferenceKey for RegistryKey {
    fn read_u32(&self, name: &str) -> Result<u32, StoreError> {
        Ok(self.0.get_value::<u32, _>(name)?)
    }
}

/// The preference store backing the running host.
pub fn host_store() -> Arc<dyn PreferenceStore> {
    #[cfg(windows)]
    {
        return Arc::new(WindowsRegistryStore);
    }
    #[allow(unreachable_code)]
    Arc::new(UnavailableStore)
}
