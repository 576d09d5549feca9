// crates/fllt-core/src/width.rs
//
// Code-point counting by continuation-byte test.
// A byte counts as one unit unless its two high bits are `10`.
// Malformed sequences are counted leniently, never rejected.

pub const NEWLINE: u8 = b'\n';

#[inline]
pub fn is_continuation(b: u8) -> bool {
    (b & 0xC0) == 0x80
}

/// 1 if `b` starts a code point (or is a stray lead/ASCII byte), else 0.
#[inline]
pub fn unit_width(b: u8) -> usize {
    usize::from(!is_continuation(b))
}

/// Width of a byte slice in code points. Newlines count like any other byte,
/// callers pass a single line.
pub fn line_width(line: &[u8]) -> usize {
    line.iter().map(|&b| unit_width(b)).sum()
}
