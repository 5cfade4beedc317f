/*!
An iterator over the `k`-element subsets of `{1..n}`, each represented as a bitmask.

Bit `i - 1` of a mask is set exactly when `i` is a member of the subset.
Masks are produced in strictly increasing numeric order, from the mask with the `k` lowest bits set to the mask with the `k` highest (of `n`) bits set.

Each successor is found with the 'next higher integer with the same number of set bits' trick (see HAKMEM item 175).

```rust
# use ordered_ramsey::generic::subsets::KSubsets;
let masks = KSubsets::new(4, 2).unwrap().collect::<Vec<_>>();
assert_eq!(masks, vec![0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100]);
```
*/

use crate::types::err::{self};

/// A subset of (at most [MAX_ORDER]) vertices, as a bitmask.
pub type SubsetMask = u64;

/// The largest ground set representable by a [SubsetMask].
pub const MAX_ORDER: u32 = SubsetMask::BITS;

/// The mask with the lowest `k` bits set.
fn low_bits(k: u32) -> SubsetMask {
    match k {
        MAX_ORDER => SubsetMask::MAX,
        _ => (1 << k) - 1,
    }
}

/// The next integer above `x` with the same number of set bits.
///
/// Requires `x` be nonzero and that the successor fits, i.e. `x` is not of the form `1…10…0` spanning the top bit.
pub fn next_with_same_popcount(x: SubsetMask) -> SubsetMask {
    let c = x & x.wrapping_neg();
    let r = x.wrapping_add(c);
    (((r ^ x) >> 2) / c) | r
}

/// A restartable iterator over all `C(n, k)` masks.
#[derive(Clone, Debug)]
pub struct KSubsets {
    first: SubsetMask,
    last: SubsetMask,
    next: Option<SubsetMask>,
}

impl KSubsets {
    /// The subsets of size `k` of a ground set of size `n`.
    pub fn new(n: u32, k: u32) -> Result<Self, err::SubsetError> {
        if n > MAX_ORDER {
            return Err(err::SubsetError::GroundTooLarge(n));
        }
        if k > n {
            return Err(err::SubsetError::TooMany { k, n });
        }

        let first = low_bits(k);
        let last = match k {
            0 => 0,
            _ => first << (n - k),
        };

        Ok(KSubsets {
            first,
            last,
            next: Some(first),
        })
    }

    /// Returns the iterator to the first mask.
    pub fn restart(&mut self) {
        self.next = Some(self.first);
    }

    /// The first mask of the sequence.
    pub fn first_mask(&self) -> SubsetMask {
        self.first
    }

    /// The final mask of the sequence.
    pub fn last_mask(&self) -> SubsetMask {
        self.last
    }
}

impl Iterator for KSubsets {
    type Item = SubsetMask;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.next?;
        self.next = match mask == self.last {
            true => None,
            false => Some(next_with_same_popcount(mask)),
        };
        Some(mask)
    }
}

/// The members of a mask, as `1`-indexed positions from least to most significant bit.
pub fn members(mask: SubsetMask) -> impl Iterator<Item = u32> {
    let mut remaining = mask;
    std::iter::from_fn(move || match remaining {
        0 => None,
        _ => {
            let position = remaining.trailing_zeros();
            remaining &= remaining - 1;
            Some(position + 1)
        }
    })
}

/// The count of `k`-element subsets of `n` elements, saturating at [u128::MAX].
pub fn binomial(n: u32, k: u32) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut count: u128 = 1;
    for i in 0..k {
        count = count.saturating_mul((n - i) as u128) / (i + 1) as u128;
    }
    count
}
