//! Browser bridge
//!
//! Thin wrappers over the `planet_*` functions registered by the JS plugin in
//! `web/index.html`: localStorage access, file downloads and the file picker.
//! Strings cross the boundary as UTF-8 (pointer, length) pairs; results are
//! copied back into Rust-owned buffers.

use crate::storage::StorageError;

/// Imported profiles larger than this are rejected (10 MB)
const MAX_IMPORT_SIZE: usize = 10 * 1024 * 1024;

/// Sentinel length for a missing localStorage key
const MISSING: i32 = -1;

extern "C" {
    fn planet_storage_len(key_ptr: *const u8, key_len: usize) -> i32;
    fn planet_storage_read(key_ptr: *const u8, key_len: usize, dest_ptr: *mut u8, max_len: usize) -> usize;
    fn planet_storage_write(key_ptr: *const u8, key_len: usize, data_ptr: *const u8, data_len: usize) -> i32;
    fn planet_download(name_ptr: *const u8, name_len: usize, data_ptr: *const u8, data_len: usize);
    fn planet_import_file();
    fn planet_import_len() -> i32;
    fn planet_import_copy(dest_ptr: *mut u8, max_len: usize) -> usize;
    fn planet_import_clear();
}

/// Value stored under `key`, or None if the key is unset
pub fn storage_get(key: &str) -> Option<String> {
    let len = unsafe { planet_storage_len(key.as_ptr(), key.len()) };
    if len == MISSING {
        return None;
    }
    let mut buf = vec![0u8; len.max(0) as usize];
    let copied = unsafe { planet_storage_read(key.as_ptr(), key.len(), buf.as_mut_ptr(), buf.len()) };
    buf.truncate(copied);
    Some(String::from_utf8_lossy(&buf).into_owned())
}

/// Store `value` under `key`; false if the browser refused (quota, private mode)
pub fn storage_set(key: &str, value: &str) -> bool {
    unsafe { planet_storage_write(key.as_ptr(), key.len(), value.as_ptr(), value.len()) == 0 }
}

/// Offer `data` to the user as a file download
pub fn download(file_name: &str, data: &str) {
    unsafe { planet_download(file_name.as_ptr(), file_name.len(), data.as_ptr(), data.len()) }
}

/// Open the browser file picker; the chosen file arrives via [`take_import`]
pub fn request_import() {
    unsafe { planet_import_file() }
}

/// Contents of a picked file once the browser has finished reading it
pub fn take_import() -> Option<Result<String, StorageError>> {
    let len = unsafe { planet_import_len() };
    if len < 0 {
        return None;
    }
    let len = len as usize;
    if len > MAX_IMPORT_SIZE {
        unsafe { planet_import_clear() };
        return Some(Err(StorageError::Io(format!("file too large ({} bytes, max 10MB)", len))));
    }

    let mut buf = vec![0u8; len];
    let copied = unsafe {
        let copied = planet_import_copy(buf.as_mut_ptr(), len);
        planet_import_clear();
        copied
    };
    buf.truncate(copied);
    Some(String::from_utf8(buf).map_err(|e| StorageError::Io(format!("file is not UTF-8: {}", e))))
}
