use crate::codepoint::{CodePoint, LowerBuffer, MAX_LOWER_EXPANSION};
use crate::compat::to_lower_full;

// Calls `emit(source_idx, lowered)` for every input code point.
#[inline]
fn lower_each<I, F>(code_points: I, mut emit: F)
where
    I: IntoIterator<Item = CodePoint>,
    F: FnMut(usize, &[CodePoint]),
{
    let mut buf: LowerBuffer = [0; MAX_LOWER_EXPANSION];
    for (idx, cp) in code_points.into_iter().enumerate() {
        let count = to_lower_full(cp, &mut buf);
        emit(idx, &buf[..count]);
    }
}

#[inline]
fn push_code_points(out: &mut String, code_points: &[CodePoint]) {
    for &cp in code_points {
        // surrogates can't live in a Rust string
        out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
    }
}

/// Lowercase a code point sequence, lone surrogates included.
pub fn lower_full_code_points(code_points: &[CodePoint]) -> Vec<CodePoint> {
    let mut out = Vec::with_capacity(code_points.len());
    lower_each(code_points.iter().copied(), |_, lowered| {
        out.extend_from_slice(lowered)
    });
    out
}

/// Lowercase a whole string with `to_lower_full`, one char at a time.
pub fn lower_full_str(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    lower_each(text.chars().map(|ch| ch as CodePoint), |_, lowered| {
        push_code_points(&mut out, lowered)
    });
    out
}

/// Lowercased text plus, for every output code point, the index of the
/// source code point it was produced from.
///
/// Matching on the lowercase form and mapping hits back through the
/// alignment gives case-insensitive search over the original text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreCaseAlignment {
    lowercase: Vec<CodePoint>,
    alignment: Vec<usize>,
}

impl IgnoreCaseAlignment {
    pub fn new(text: &str) -> Self {
        Self::build(text.chars().map(|ch| ch as CodePoint), text.len())
    }

    pub fn from_code_points(code_points: &[CodePoint]) -> Self {
        Self::build(code_points.iter().copied(), code_points.len())
    }

    fn build<I>(code_points: I, capacity: usize) -> Self
    where
        I: IntoIterator<Item = CodePoint>,
    {
        let mut lowercase = Vec::with_capacity(capacity);
        let mut alignment = Vec::with_capacity(capacity);

        lower_each(code_points, |idx, lowered| {
            lowercase.extend_from_slice(lowered);
            alignment.extend(std::iter::repeat_n(idx, lowered.len()));
        });

        IgnoreCaseAlignment {
            lowercase,
            alignment,
        }
    }

    pub fn lowercase(&self) -> &[CodePoint] {
        &self.lowercase
    }

    /// Lowercase text as a Rust string; surrogates become U+FFFD.
    pub fn to_lowercase_string(&self) -> String {
        let mut out = String::with_capacity(self.lowercase.len());
        push_code_points(&mut out, &self.lowercase);
        out
    }

    pub fn alignment(&self) -> &[usize] {
        &self.alignment
    }

    /// Source index for the code point at `lower_idx` of the lowercase text.
    pub fn source_index(&self, lower_idx: usize) -> Option<usize> {
        self.alignment.get(lower_idx).copied()
    }

    /// Number of code points in the lowercase text.
    pub fn char_len(&self) -> usize {
        self.alignment.len()
    }
}
