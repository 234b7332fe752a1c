#![doc = r#"
Variable-length quantities

Delta-times and meta/sysex lengths are written 7 bits per byte, most
significant group first. Every byte but the last has its leading bit set.

```text
0x00        => 00
0x40        => 40
0x7F        => 7F
0x80        => 81 00
0x2000      => C0 00
0x0FFFFFFF  => FF FF FF 7F
```

Standard files never use more than 4 bytes. The decoder gives up after
[`MAX_VARLEN_BYTES`] so corrupt input cannot keep it spinning.
"#]

use super::{ReadResult, Reader, ReaderErrorKind};

/// Bytes consumed before a quantity that has not terminated is rejected.
pub const MAX_VARLEN_BYTES: usize = 5;

/// The largest value [`encode`] accepts, `2^28 - 1`.
pub const MAX_ENCODABLE: u32 = 0x0FFF_FFFF;

/// Read one variable-length quantity.
///
/// Fails with [`ReaderErrorKind::MalformedVarint`] if more than
/// [`MAX_VARLEN_BYTES`] bytes have their continuation bit set, or the value
/// does not fit in a `u32`.
pub fn read(reader: &mut Reader<'_>) -> ReadResult<u32> {
    let start = reader.buffer_position();
    let mut value: u64 = 0;

    for _ in 0..MAX_VARLEN_BYTES {
        let byte = reader.read_u8()?;
        value = (value << 7) | u64::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return u32::try_from(value)
                .map_err(|_| reader.error(ReaderErrorKind::MalformedVarint));
        }
    }
    reader.seek(start);
    Err(reader.error(ReaderErrorKind::MalformedVarint))
}

/// The encoded form of a variable-length quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarLenBytes {
    buf: [u8; 4],
    len: u8,
}

impl VarLenBytes {
    /// The encoded bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[4 - self.len as usize..]
    }
}

/// Encode `value` as a variable-length quantity.
///
/// Returns `None` above [`MAX_ENCODABLE`].
pub const fn encode(value: u32) -> Option<VarLenBytes> {
    if value > MAX_ENCODABLE {
        return None;
    }
    let mut buf = [0u8; 4];
    let mut rest = value;
    let mut len = 0;
    loop {
        let continuation = if len == 0 { 0 } else { 0x80 };
        buf[3 - len] = (rest & 0x7F) as u8 | continuation;
        rest >>= 7;
        len += 1;
        if rest == 0 {
            break;
        }
    }
    Some(VarLenBytes {
        buf,
        len: len as u8,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(bytes: &[u8]) -> ReadResult<u32> {
        read(&mut Reader::from_byte_slice(bytes))
    }

    #[test]
    fn decodes_known_values() {
        assert_eq!(decode(&[0x00]).unwrap(), 0);
        assert_eq!(decode(&[0x7F]).unwrap(), 0x7F);
        assert_eq!(decode(&[0x81, 0x00]).unwrap(), 0x80);
        assert_eq!(decode(&[0xC0, 0x00]).unwrap(), 0x2000);
        assert_eq!(decode(&[0xFF, 0x7F]).unwrap(), 0x3FFF);
        assert_eq!(decode(&[0x81, 0x80, 0x00]).unwrap(), 0x4000);
        assert_eq!(decode(&[0xFF, 0xFF, 0xFF, 0x7F]).unwrap(), 0x0FFF_FFFF);
    }

    #[test]
    fn shifts_rather_than_sums() {
        // summing magnitudes would give 0x81 + 0x00
        assert_eq!(decode(&[0x81, 0x00]).unwrap(), 128);
        assert_eq!(decode(&[0x83, 0x60]).unwrap(), 480);
    }

    #[test]
    fn stops_at_first_terminating_byte() {
        let bytes = [0x81, 0x00, 0x90];
        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(read(&mut reader).unwrap(), 128);
        assert_eq!(reader.buffer_position(), 2);
    }

    #[test]
    fn five_byte_quantity_is_tolerated() {
        assert_eq!(decode(&[0x80, 0x80, 0x80, 0x80, 0x01]).unwrap(), 1);
    }

    #[test]
    fn unterminated_quantity_is_malformed() {
        let err = decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x01]).unwrap_err();
        assert_eq!(err.error_kind(), &ReaderErrorKind::MalformedVarint);
        assert_eq!(err.position(), 0);
    }

    #[test]
    fn overflowing_quantity_is_malformed() {
        let err = decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]).unwrap_err();
        assert_eq!(err.error_kind(), &ReaderErrorKind::MalformedVarint);
    }

    #[test]
    fn truncated_quantity_is_eof() {
        assert!(decode(&[0x81]).unwrap_err().is_eof());
    }

    #[test]
    fn encode_matches_table() {
        assert_eq!(encode(0).unwrap().as_slice(), &[0x00]);
        assert_eq!(encode(0x80).unwrap().as_slice(), &[0x81, 0x00]);
        assert_eq!(encode(0x2000).unwrap().as_slice(), &[0xC0, 0x00]);
        assert_eq!(encode(0x1F_FFFF).unwrap().as_slice(), &[0xFF, 0xFF, 0x7F]);
        assert_eq!(encode(MAX_ENCODABLE + 1), None);
    }

    #[test]
    fn round_trips_at_byte_boundaries() {
        for value in [
            0,
            1,
            0x7F,
            0x80,
            0x3FFF,
            0x4000,
            0x1F_FFFF,
            0x20_0000,
            123_456,
            MAX_ENCODABLE,
        ] {
            let encoded = encode(value).unwrap();
            assert_eq!(decode(encoded.as_slice()).unwrap(), value);
        }
    }

    #[test]
    fn round_trips_up_to_three_bytes() {
        for value in 0..0x20_0000 {
            let encoded = encode(value).unwrap();
            assert_eq!(decode(encoded.as_slice()).unwrap(), value);
        }
    }

    #[test]
    fn round_trips_across_four_bytes() {
        for value in (0x20_0000..=MAX_ENCODABLE).step_by(997) {
            let encoded = encode(value).unwrap();
            assert_eq!(encoded.as_slice().len(), 4);
            assert_eq!(decode(encoded.as_slice()).unwrap(), value);
        }
    }
}
