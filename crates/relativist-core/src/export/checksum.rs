use crate::color::hsl::Hsl;

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

pub fn crc32_hex(bytes: &[u8]) -> String {
    format!("{:08x}", crc32(bytes))
}

pub fn blake3_8(bytes: &[u8]) -> [u8; 8] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 8];
    out.copy_from_slice(&hash.as_bytes()[0..8]);
    out
}

/// 16 hex digits identifying a palette by the exact bits of its colors.
pub fn palette_fingerprint(palette: &[Hsl]) -> String {
    let mut b = Vec::with_capacity(palette.len() * 24);
    for c in palette {
        b.extend_from_slice(&c.h.to_le_bytes());
        b.extend_from_slice(&c.s.to_le_bytes());
        b.extend_from_slice(&c.l.to_le_bytes());
    }
    blake3_8(&b).iter().map(|x| format!("{x:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::palette::generate_palette;

    #[test]
    fn crc32_known_vector() {
        // standard check value for "123456789"
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
        assert_eq!(crc32_hex(b"123456789"), "cbf43926");
    }

    #[test]
    fn fingerprint_tracks_palette() {
        let a = palette_fingerprint(&generate_palette(10.0));
        let b = palette_fingerprint(&generate_palette(10.0));
        let c = palette_fingerprint(&generate_palette(11.0));
        assert_eq!(a.len(), 16);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
