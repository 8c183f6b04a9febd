use std::ffi::c_void;
use std::fs::{File, OpenOptions};
use std::num::NonZeroUsize;
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::slice;

use anyhow::{Context, Result};
use nix::sys::mman::{mmap, munmap, MapFlags, ProtFlags};

/// A shared, writable mapping of the first `len` bytes of a file.
///
/// Writes made through [`MappedHeader::as_mut_slice`] land on the underlying
/// file (`MAP_SHARED`, not copy-on-write). The mapping is torn down in
/// `Drop`, so every exit path that holds a `MappedHeader` releases both the
/// mapping and the descriptor.
#[derive(Debug)]
pub struct MappedHeader {
    ptr: *mut c_void,
    len: usize,
    // Keeps the descriptor open for the lifetime of the mapping.
    _file: File,
}

impl MappedHeader {
    /// Opens `path` read-write and maps its first `len` bytes.
    ///
    /// `len` is not validated against the file's actual size; a mapping that
    /// extends past end-of-file is passed through to platform behavior, with
    /// a warning. `len` must be nonzero.
    pub fn open(path: &Path, len: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .with_context(|| format!("failed to open {} read-write", path.display()))?;

        let file_len = file
            .metadata()
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len();
        if len as u64 > file_len {
            log::warn!(
                "mapping {len} bytes of {} but the file is only {file_len} bytes; \
                 writes past end-of-file may be lost or fault",
                path.display()
            );
        }

        let length = NonZeroUsize::new(len).context("header size must be nonzero")?;
        let ptr = unsafe {
            mmap(
                None,
                length,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_SHARED,
                file.as_raw_fd(),
                0,
            )
        }
        .with_context(|| format!("failed to map {len} bytes of {}", path.display()))?;

        Ok(MappedHeader {
            ptr,
            len,
            _file: file,
        })
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { slice::from_raw_parts_mut(self.ptr as *mut u8, self.len) }
    }
}

impl Drop for MappedHeader {
    fn drop(&mut self) {
        // Unmapping flushes the shared pages back to the file; the
        // descriptor closes right after when `_file` drops.
        if let Err(err) = unsafe { munmap(self.ptr, self.len) } {
            log::error!("failed to unmap header: {err}");
        }
    }
}
