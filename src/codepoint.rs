//! Code point representation shared by the host API and the compat layer.

/// One Unicode code point, the Rust side of `Py_UCS4`.
///
/// Lone surrogates are representable, since Python strings may carry them.
pub type CodePoint = u32;

/// Highest value a code point can take.
pub const MAX_CODE_POINT: CodePoint = 0x10FFFF;

/// Longest full lowercase expansion in Unicode (SpecialCasing.txt).
pub const MAX_LOWER_EXPANSION: usize = 3;

/// Caller-owned output of a full lowercase conversion.
pub type LowerBuffer = [CodePoint; MAX_LOWER_EXPANSION];

#[inline(always)]
pub fn is_code_point(value: u32) -> bool {
    value <= MAX_CODE_POINT
}

/// `Some` only for Unicode scalar values (surrogates excluded).
#[inline(always)]
pub fn as_scalar(cp: CodePoint) -> Option<char> {
    char::from_u32(cp)
}
