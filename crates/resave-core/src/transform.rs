//! Buffer transforms shared by every conversion.
//!
//! Both transforms are pure: they take a slice, return a fresh `Vec<u8>`,
//! and have no failure path regardless of input length.

/// Resize `data` to exactly `target_size` bytes.
///
/// With a non-negative `offset` the source bytes are copied into a
/// zero-filled buffer starting at that position; bytes that would land at or
/// past `target_size` are silently dropped. A negative `offset` first trims
/// `|offset|` bytes from the start of `data` (extracting a region that began
/// earlier in a larger container), then copies at position zero.
pub fn resize_bytes(data: &[u8], target_size: usize, offset: i64) -> Vec<u8> {
    let (data, start) = if offset < 0 {
        let trim = offset.unsigned_abs() as usize;
        (data.get(trim..).unwrap_or(&[]), 0)
    } else {
        (data, offset as usize)
    };

    let mut resized = vec![0u8; target_size];
    if start < target_size {
        let len = data.len().min(target_size - start);
        resized[start..start + len].copy_from_slice(&data[..len]);
    }
    resized
}

/// Swap the byte order of `data` in chunks of `swap_size` bytes.
///
/// For `swap_size <= 1` this is the identity. A trailing chunk shorter than
/// `swap_size` is reversed using only the bytes it has, matching the 7-Zip
/// Swap2/Swap4 convention for odd lengths.
pub fn byteswap(data: &[u8], swap_size: usize) -> Vec<u8> {
    if swap_size <= 1 {
        return data.to_vec();
    }

    let mut swapped = data.to_vec();
    for chunk in swapped.chunks_mut(swap_size) {
        chunk.reverse();
    }
    swapped
}
