//! N-dimensional indices
//!
//! An `Id<N>` is the value type of range-like device properties, such as the
//! maximum number of work-items in each dimension of a work-group.

use crate::{Error, Result};
use libc::size_t;
use std::convert::TryFrom;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Index, IndexMut};

/// An index with `N` dimensions
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<const N: usize>([size_t; N]);

impl<const N: usize> Id<N> {
    /// The number of dimensions of this index type
    pub const DIMENSIONS: usize = N;

    pub const fn new(values: [size_t; N]) -> Self {
        Self(values)
    }

    /// Get the value of the given dimension, or `None` if it's out of range
    pub fn get(&self, dimension: usize) -> Option<size_t> {
        self.0.get(dimension).copied()
    }

    pub fn as_slice(&self) -> &[size_t] {
        &self.0
    }

    pub fn into_inner(self) -> [size_t; N] {
        self.0
    }

    /// The number of elements in the range described by this index, or `None`
    /// on overflow.
    pub fn checked_product(&self) -> Option<size_t> {
        self.0.iter().try_fold(1 as size_t, |acc, &v| acc.checked_mul(v))
    }
}

impl<const N: usize> Default for Id<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> From<[size_t; N]> for Id<N> {
    fn from(values: [size_t; N]) -> Self {
        Self(values)
    }
}

impl<const N: usize> TryFrom<&[size_t]> for Id<N> {
    type Error = Error;

    fn try_from(values: &[size_t]) -> Result<Self> {
        if values.len() != N {
            return Err(Error::InvalidElementCount {
                type_name: format!("Id<{}>", N),
                expected: N,
                actual: values.len(),
            });
        }

        let mut id = Self::default();
        id.0.copy_from_slice(values);
        Ok(id)
    }
}

impl<const N: usize> Index<usize> for Id<N> {
    type Output = size_t;

    fn index(&self, dimension: usize) -> &size_t {
        &self.0[dimension]
    }
}

impl<const N: usize> IndexMut<usize> for Id<N> {
    fn index_mut(&mut self, dimension: usize) -> &mut size_t {
        &mut self.0[dimension]
    }
}

impl<const N: usize> Debug for Id<N> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Id{}", self)
    }
}

impl<const N: usize> Display for Id<N> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", v)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::Id;
    use std::convert::TryFrom;

    #[test]
    fn test_id_from_slice_checks_dimensions() {
        let id = Id::<3>::try_from(&[1usize, 2, 3][..]).unwrap();
        assert_eq!(id, Id::new([1, 2, 3]));

        let err = Id::<3>::try_from(&[1usize, 2][..]).unwrap_err();
        assert!(dbg!(format!("{}", err)).contains("Expected 3 elements for Id<3>, got 2"));
    }

    #[test]
    fn test_id_fmt() {
        let id = Id::new([64, 8, 1]);
        assert_eq!(dbg!(format!("{}", id)), "(64, 8, 1)");
        assert_eq!(dbg!(format!("{:?}", id)), "Id(64, 8, 1)");
        assert_eq!(dbg!(format!("{}", Id::new([5]))), "(5)");
        assert_eq!(format!("{}", Id::<0>::default()), "()");
    }

    #[test]
    fn test_id_product() {
        assert_eq!(Id::new([4, 4, 2]).checked_product(), Some(32));
        assert_eq!(Id::new([usize::MAX, 2]).checked_product(), None);
        assert_eq!(Id::<3>::DIMENSIONS, 3);
        assert_eq!(Id::new([7, 8, 9])[2], 9);
    }
}
