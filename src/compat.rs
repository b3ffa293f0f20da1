//! `to_lower_full` with the same shape on every host generation.
//!
//! A full host already provides the operation, so it is re-exported as is.
//! A simple host only maps one code point to one code point; the adapter
//! below wraps that mapping into the buffer-plus-count contract and always
//! reports a single written slot.

use crate::codepoint::{CodePoint, LowerBuffer};

#[cfg(case_api = "full")]
pub use crate::host::to_lower_full;

/// Lowercase `cp` into `out`, returning the number of code points written.
///
/// Only `out[0]` is written; the count is always 1.
#[cfg(case_api = "simple")]
#[inline]
pub fn to_lower_full(cp: CodePoint, out: &mut LowerBuffer) -> usize {
    out[0] = crate::host::simple_lowercase(cp);
    1
}

/// Convenience wrapper returning the written slots as an owned vector.
pub fn lower_full_vec(cp: CodePoint) -> Vec<CodePoint> {
    let mut buf: LowerBuffer = [0; crate::codepoint::MAX_LOWER_EXPANSION];
    let count = to_lower_full(cp, &mut buf);
    buf[..count].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepoint::{MAX_CODE_POINT, MAX_LOWER_EXPANSION};
    use crate::host::simple_lowercase;
    use rayon::prelude::*;

    const UNTOUCHED: CodePoint = 0xFFFF_FFFF;

    fn lower(cp: CodePoint) -> (usize, LowerBuffer) {
        let mut buf = [UNTOUCHED; MAX_LOWER_EXPANSION];
        let count = to_lower_full(cp, &mut buf);
        (count, buf)
    }

    #[test]
    fn latin_capital() {
        let (count, buf) = lower('A' as u32);
        assert_eq!(count, 1);
        assert_eq!(buf[0], 'a' as u32);
    }

    #[test]
    fn already_lowercase() {
        let (count, buf) = lower('a' as u32);
        assert_eq!(count, 1);
        assert_eq!(buf[0], 'a' as u32);
    }

    #[test]
    fn caseless_digit() {
        let (count, buf) = lower(0x0030);
        assert_eq!(count, 1);
        assert_eq!(buf[0], 0x0030);
    }

    #[test]
    fn y_with_diaeresis() {
        let (count, buf) = lower(0x0178);
        assert_eq!(count, 1);
        assert_eq!(buf[0], 0x00FF);
    }

    #[test]
    fn slots_past_count_untouched() {
        for cp in 0..=MAX_CODE_POINT {
            let (count, buf) = lower(cp);
            assert!(buf[count..].iter().all(|&slot| slot == UNTOUCHED), "U+{cp:04X}");
        }
    }

    #[test]
    fn single_slot_matches_simple_mapping() {
        for cp in 0..=MAX_CODE_POINT {
            let (count, buf) = lower(cp);
            if count == 1 {
                assert_eq!(buf[0], simple_lowercase(cp), "U+{cp:04X}");
            }
        }
    }

    #[test]
    fn lowering_is_idempotent() {
        for cp in 0..=MAX_CODE_POINT {
            let (_, first) = lower(cp);
            let (count, again) = lower(first[0]);
            assert_eq!(count, 1);
            assert_eq!(again[0], first[0], "U+{cp:04X}");
        }
    }

    #[test]
    fn vec_wrapper() {
        assert_eq!(lower_full_vec('Q' as u32), vec!['q' as u32]);
    }

    #[test]
    fn concurrent_calls_match_sequential() {
        let inputs: Vec<CodePoint> = (0..0x3000).collect();
        let sequential: Vec<_> = inputs.iter().map(|&cp| lower(cp)).collect();
        let parallel: Vec<_> = inputs.par_iter().map(|&cp| lower(cp)).collect();
        assert_eq!(sequential, parallel);
    }

    #[cfg(case_api = "simple")]
    #[test]
    fn simple_host_never_expands() {
        for cp in 0..=MAX_CODE_POINT {
            let (count, buf) = lower(cp);
            assert_eq!(count, 1);
            assert_eq!(buf[0], simple_lowercase(cp));
        }
        assert_eq!(lower(0x0130), (1, [0x0069, UNTOUCHED, UNTOUCHED]));
    }

    #[cfg(case_api = "full")]
    #[test]
    fn full_host_expands() {
        assert_eq!(lower(0x0130), (2, [0x0069, 0x0307, UNTOUCHED]));
        assert_eq!(lower_full_vec(0x0130), vec![0x0069, 0x0307]);
    }
}
