use crate::codepoint::{CodePoint, as_scalar};

// Code points whose full lowercase mapping expands, paired with their
// UnicodeData simple mapping. Sorted by key.
const SIMPLE_LOWER_EXCEPTIONS: &[(CodePoint, CodePoint)] = &[
    (0x0130, 0x0069), // LATIN CAPITAL LETTER I WITH DOT ABOVE
];

fn simple_lower_exception(cp: CodePoint) -> CodePoint {
    match SIMPLE_LOWER_EXCEPTIONS.binary_search_by(|&(key, _)| key.cmp(&cp)) {
        Ok(i) => SIMPLE_LOWER_EXCEPTIONS[i].1,
        Err(_) => cp,
    }
}

/// Simple (one-to-one) lowercase mapping.
///
/// Total over `CodePoint`: surrogates and anything without a mapping come
/// back unchanged.
#[inline]
pub fn simple_lowercase(cp: CodePoint) -> CodePoint {
    if cp < 0x80 {
        return (cp as u8).to_ascii_lowercase() as CodePoint;
    }

    let Some(ch) = as_scalar(cp) else {
        return cp;
    };

    let mut lower = ch.to_lowercase();
    if lower.len() == 1 {
        lower.next().map_or(cp, |c| c as CodePoint)
    } else {
        simple_lower_exception(cp)
    }
}
