//! In-place header mangler.
//!
//! Corrupts a small random number of bytes at the start of a file, biased
//! toward values with the high bit set, to produce malformed inputs for
//! stress-testing file-format parsers and loaders. The tool is byte-blind;
//! a wrapper script is expected to drive repeated runs against a target.

use std::path::Path;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub mod mapping;
pub mod mutate;
pub mod seed;

/// Header size used when the caller does not supply one.
pub const DEFAULT_HEADER_SIZE: usize = 1024;

/// Target file name used when the caller does not supply one.
pub const DEFAULT_NAME: &str = "test2";

/// Mutates the first `header_size` bytes of the file at `path` in place.
///
/// The generator is constructed here from `seed`, so two calls with the same
/// seed against identical files produce identical mutations. Returns the
/// number of byte writes performed (offsets may repeat).
pub fn mangle_file(path: &Path, header_size: usize, seed: u64) -> Result<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut header = mapping::MappedHeader::open(path, header_size)?;
    let count = mutate::mutate(&mut rng, header.as_mut_slice());
    log::debug!("wrote {count} random bytes into {}", path.display());
    Ok(count)
}
