use crate::codepoint::{CodePoint, LowerBuffer, as_scalar};

/// Full lowercase mapping, special casing included.
///
/// Writes 1 to 3 code points from `out[0]` and returns how many were written.
/// Surrogates are copied through unchanged.
#[inline]
pub fn to_lower_full(cp: CodePoint, out: &mut LowerBuffer) -> usize {
    let Some(ch) = as_scalar(cp) else {
        out[0] = cp;
        return 1;
    };

    let lower = ch.to_lowercase();
    debug_assert!(lower.len() <= out.len());

    let mut count = 0;
    for (slot, c) in out.iter_mut().zip(lower) {
        *slot = c as CodePoint;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepoint::{MAX_CODE_POINT, MAX_LOWER_EXPANSION};

    #[test]
    fn single_code_point() {
        let mut buf = [0; MAX_LOWER_EXPANSION];
        assert_eq!(to_lower_full('A' as u32, &mut buf), 1);
        assert_eq!(buf[0], 'a' as u32);

        assert_eq!(to_lower_full(0x0178, &mut buf), 1);
        assert_eq!(buf[0], 0x00FF);
    }

    #[test]
    fn expansion() {
        let mut buf = [0; MAX_LOWER_EXPANSION];
        assert_eq!(to_lower_full(0x0130, &mut buf), 2);
        assert_eq!(&buf[..2], &[0x0069, 0x0307]);
    }

    #[test]
    fn surrogate_copied() {
        let mut buf = [0; MAX_LOWER_EXPANSION];
        assert_eq!(to_lower_full(0xDC80, &mut buf), 1);
        assert_eq!(buf[0], 0xDC80);
    }

    #[test]
    fn count_in_range() {
        let mut buf = [0; MAX_LOWER_EXPANSION];
        for cp in 0..=MAX_CODE_POINT {
            let count = to_lower_full(cp, &mut buf);
            assert!((1..=MAX_LOWER_EXPANSION).contains(&count), "U+{cp:04X}");
        }
    }
}
