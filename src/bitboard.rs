//! A fixed-size bitboard implementation using const generics.
//!
//! The type is `no_std` friendly and avoids heap allocations. Boards are
//! represented as an `N×N` grid packed into an unsigned integer `T` and are
//! addressed with [`Coordinate`]s. Off-grid coordinates are never members.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};

use crate::coordinate::Coordinate;

/// A fixed-size N×N set of cells stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Create a new empty bitboard (all bits cleared).
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Number of cells in the set.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns true if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether `coord` lies on the N×N grid.
    #[inline]
    pub fn in_bounds(coord: Coordinate) -> bool {
        (0..N as i32).contains(&coord.row) && (0..N as i32).contains(&coord.col)
    }

    #[inline]
    fn bit(coord: Coordinate) -> Option<T> {
        Self::in_bounds(coord).then(|| T::one() << (coord.row as usize * N + coord.col as usize))
    }

    /// Whether `coord` is in the set; off-grid cells never are.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        Self::bit(coord).is_some_and(|bit| !(self.bits & bit).is_zero())
    }

    /// Add `coord`, returning `true` if it was not already present. Off-grid
    /// cells are ignored and report `false`.
    pub fn insert(&mut self, coord: Coordinate) -> bool {
        match Self::bit(coord) {
            Some(bit) if (self.bits & bit).is_zero() => {
                self.bits = self.bits | bit;
                true
            }
            _ => false,
        }
    }

    /// Clears all bits to `0`.
    #[inline]
    pub fn clear_all(&mut self) {
        self.bits = T::zero();
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}>:", N)?;
        for r in 0..N {
            for c in 0..N {
                let bit = if ((self.bits >> (r * N + c)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
