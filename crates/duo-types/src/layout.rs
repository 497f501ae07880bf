//! Little-endian integer helpers shared by every codec in this crate.
//!
//! The wire/on-disk block and transaction bodies use host
//! little-endian for multi-byte integers (mirroring the reference
//! implementation's raw `memcpy` of integer fields); the outer
//! message length prefix used by `duo-node`'s wire framing is
//! big-endian and is handled separately, at that layer.

use crate::error::CodecError;

pub(crate) fn read_u64_le(buf: &[u8], context: &'static str) -> Result<u64, CodecError> {
    if buf.len() < 8 {
        return Err(CodecError::Truncated {
            context,
            needed: 8,
            available: buf.len(),
        });
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buf[..8]);
    Ok(u64::from_le_bytes(bytes))
}

pub(crate) fn write_u64_le(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub(crate) fn read_array<const N: usize>(
    buf: &[u8],
    context: &'static str,
) -> Result<[u8; N], CodecError> {
    if buf.len() < N {
        return Err(CodecError::Truncated {
            context,
            needed: N,
            available: buf.len(),
        });
    }
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(&buf[..N]);
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_u64_le_roundtrips_write() {
        let mut buf = Vec::new();
        write_u64_le(&mut buf, 0xDEAD_BEEF_CAFE_u64);
        assert_eq!(read_u64_le(&buf, "test").unwrap(), 0xDEAD_BEEF_CAFE_u64);
    }

    #[test]
    fn read_u64_le_rejects_short_buffer() {
        let err = read_u64_le(&[0u8; 7], "test").unwrap_err();
        assert!(matches!(err, CodecError::Truncated { needed: 8, available: 7, .. }));
    }

    #[test]
    fn read_array_rejects_short_buffer() {
        let err = read_array::<32>(&[0u8; 31], "test").unwrap_err();
        assert!(matches!(err, CodecError::Truncated { needed: 32, available: 31, .. }));
    }

    #[test]
    fn read_array_ignores_trailing_bytes_in_slice() {
        let buf = [0u8; 40];
        let arr = read_array::<32>(&buf, "test").unwrap();
        assert_eq!(arr, [0u8; 32]);
    }
}
