use rand::Rng;

/// Upper bound (exclusive) on the number of mutations for a header of
/// `header_size` bytes: 1% of the header, never less than 4 so that tiny
/// headers can still be corrupted.
pub fn max_mutations(header_size: usize) -> usize {
    (header_size / 100).max(4)
}

/// Draws one byte value, skewed toward `[128, 256)`.
///
/// The high bit is set on half of the sub-128 draws to more often trigger
/// signed-vs-unsigned interpretation bugs in parsers reading the header.
fn biased_byte<T>(rng: &mut T) -> u8
where
    T: Rng,
{
    let value: u8 = rng.gen();
    if rng.gen::<bool>() && value < 128 {
        value | 0x80
    } else {
        value
    }
}

/// Corrupts a random number of bytes of `header` in place.
///
/// Draws a mutation count uniformly below [`max_mutations`], then for each
/// mutation overwrites a uniformly chosen offset with a biased random byte.
/// Offsets may repeat; the last write wins. An empty header is left alone.
///
/// Returns the number of writes performed.
pub fn mutate<T>(rng: &mut T, header: &mut [u8]) -> usize
where
    T: Rng,
{
    if header.is_empty() {
        return 0;
    }
    let count = rng.gen_range(0..max_mutations(header.len()));
    for _ in 0..count {
        let off = rng.gen_range(0..header.len());
        header[off] = biased_byte(rng);
    }
    count
}
