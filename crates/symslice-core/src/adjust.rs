//! Index adjustment — clamps a concrete slice against a sequence length
//!
//! This is the step the indexing engine runs after [`crate::slice::unpack_slice`]:
//! negative indices count from the end, out-of-range indices saturate, and
//! the number of selected elements is computed.

use serde::{Deserialize, Serialize};

use crate::slice::UnpackedSlice;
use crate::symint::SymbolicInt;
use crate::{Error, Result};

/// Slice bounds clamped to a sequence, with the selected element count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceIndices {
    pub start: isize,
    pub stop: isize,
    pub step: isize,
    pub len: usize,
}

impl SliceIndices {
    /// Selected indices, in slice order
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let SliceIndices { start, step, len, .. } = *self;
        (0..len).map(move |i| (start + i as isize * step) as usize)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: SymbolicInt> UnpackedSlice<S> {
    /// Clamp this slice against a sequence of `length` elements.
    ///
    /// # Errors
    /// Returns `SymbolicValue` if any field is symbolic and `LengthOverflow`
    /// if `length` exceeds `isize::MAX`.
    pub fn adjust_indices(&self, length: usize) -> Result<SliceIndices> {
        let (start, stop, step) = self.as_concrete()?;
        adjust_indices(start, stop, step, length)
    }
}

/// Clamp concrete slice bounds against a sequence of `length` elements.
///
/// # Errors
/// Returns `ZeroStep` for a zero step and `LengthOverflow` if `length`
/// exceeds `isize::MAX`.
pub fn adjust_indices(start: isize, stop: isize, step: isize, length: usize) -> Result<SliceIndices> {
    if step == 0 {
        return Err(Error::ZeroStep);
    }
    let step = step.max(-isize::MAX);
    let n = isize::try_from(length).map_err(|_| Error::LengthOverflow(length))?;

    let start = clamp_bound(start, step, n);
    let stop = clamp_bound(stop, step, n);

    let len = if step < 0 {
        if stop < start {
            (start - stop - 1) / -step + 1
        } else {
            0
        }
    } else if start < stop {
        (stop - start - 1) / step + 1
    } else {
        0
    };

    Ok(SliceIndices {
        start,
        stop,
        step,
        len: len as usize,
    })
}

fn clamp_bound(bound: isize, step: isize, n: isize) -> isize {
    if bound < 0 {
        // `bound + n` can't overflow: bound is negative and n non-negative.
        let bound = bound + n;
        if bound < 0 {
            if step < 0 {
                -1
            } else {
                0
            }
        } else {
            bound
        }
    } else if bound >= n {
        if step < 0 {
            n - 1
        } else {
            n
        }
    } else {
        bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::{unpack_slice, SliceDescriptor};
    use crate::symint::{ExtInt, SymVar};

    fn indices(start: Option<isize>, stop: Option<isize>, step: Option<isize>, len: usize) -> Vec<usize> {
        let desc = SliceDescriptor::<SymVar>::from_ints(start, stop, step);
        unpack_slice(&desc)
            .unwrap()
            .adjust_indices(len)
            .unwrap()
            .iter()
            .collect()
    }

    #[test]
    fn test_full_slice() {
        let adjusted = unpack_slice(&SliceDescriptor::<SymVar>::full())
            .unwrap()
            .adjust_indices(10)
            .unwrap();
        assert_eq!(
            adjusted,
            SliceIndices {
                start: 0,
                stop: 10,
                step: 1,
                len: 10
            }
        );
    }

    #[test]
    fn test_reversed_full_slice() {
        let adjusted = adjust_indices(isize::MAX, isize::MIN, -1, 10).unwrap();
        assert_eq!((adjusted.start, adjusted.stop, adjusted.len), (9, -1, 10));
        assert_eq!(indices(None, None, Some(-1), 4), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_matches_sequence_slicing() {
        // Reference values from slicing `list(range(n))`.
        assert_eq!(indices(Some(-3), None, None, 10), vec![7, 8, 9]);
        assert_eq!(indices(Some(1), Some(8), Some(3), 10), vec![1, 4, 7]);
        assert_eq!(indices(Some(-100), Some(100), None, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(indices(None, None, Some(-2), 5), vec![4, 2, 0]);
        assert_eq!(indices(Some(8), Some(2), Some(-3), 10), vec![8, 5]);
        assert_eq!(indices(Some(-1), Some(-4), Some(-1), 6), vec![5, 4, 3]);
        assert_eq!(indices(Some(2), Some(-2), None, 6), vec![2, 3]);
    }

    #[test]
    fn test_empty_selections() {
        assert!(indices(Some(5), Some(2), None, 10).is_empty());
        assert!(indices(Some(2), Some(5), Some(-1), 10).is_empty());
        assert!(indices(None, None, None, 0).is_empty());
        assert!(indices(None, None, Some(-1), 0).is_empty());
        assert!(adjust_indices(3, 3, 1, 10).unwrap().is_empty());
    }

    #[test]
    fn test_extreme_step() {
        assert_eq!(indices(None, None, Some(isize::MAX), 10), vec![0]);
        assert_eq!(indices(None, None, Some(isize::MIN), 10), vec![9]);
        let adjusted = adjust_indices(isize::MAX, isize::MIN, isize::MIN, 10).unwrap();
        assert_eq!(adjusted.step, -isize::MAX);
        assert_eq!(adjusted.len, 1);
    }

    #[test]
    fn test_zero_step_rejected() {
        assert_eq!(adjust_indices(0, 10, 0, 10), Err(Error::ZeroStep));
    }

    #[test]
    fn test_length_overflow() {
        assert_eq!(
            adjust_indices(0, 1, 1, usize::MAX),
            Err(Error::LengthOverflow(usize::MAX))
        );
    }

    #[test]
    fn test_symbolic_slice_cannot_be_adjusted() {
        let unpacked = UnpackedSlice {
            start: ExtInt::Sym(SymVar::new("s0")),
            stop: ExtInt::Int(4),
            step: ExtInt::Int(1),
        };
        assert_eq!(
            unpacked.adjust_indices(8),
            Err(Error::SymbolicValue("s0".into()))
        );
    }
}
