//! File icons
//!
//! A 16 x 16 bitmap stored as a flat, heap-allocated array.

use std::fmt;

use crate::error::StorageError;

/// Number of values in every icon
pub const ICON_DIM: usize = 256;

/// Owned icon payload. Always holds exactly [`ICON_DIM`] values.
///
/// Cloning allocates a fresh buffer, so two icons never share storage.
#[derive(Clone, PartialEq, Eq)]
pub struct Icon {
    pixels: Box<[i32; ICON_DIM]>,
}

impl Icon {
    pub fn new(pixels: [i32; ICON_DIM]) -> Self {
        Self {
            pixels: Box::new(pixels),
        }
    }

    /// An icon with every value set to `value`
    pub fn filled(value: i32) -> Self {
        Self::new([value; ICON_DIM])
    }

    /// Builds an icon from a slice, which must hold exactly [`ICON_DIM`] values.
    pub fn from_slice(values: &[i32]) -> Result<Self, StorageError> {
        let pixels: [i32; ICON_DIM] = values
            .try_into()
            .map_err(|_| StorageError::InvalidIconLength(values.len()))?;
        Ok(Self::new(pixels))
    }

    pub fn pixels(&self) -> &[i32; ICON_DIM] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [i32; ICON_DIM] {
        &mut self.pixels
    }
}

impl fmt::Debug for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the full bitmap drowns out everything else in debug output
        write!(f, "Icon({} values)", ICON_DIM)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_requires_exact_length() {
        assert_eq!(
            Icon::from_slice(&[1, 2, 3]),
            Err(StorageError::InvalidIconLength(3))
        );
        assert_eq!(
            Icon::from_slice(&[0; ICON_DIM + 1]),
            Err(StorageError::InvalidIconLength(ICON_DIM + 1))
        );

        let values: Vec<i32> = (0..ICON_DIM as i32).collect();
        let icon = Icon::from_slice(&values).unwrap();
        assert_eq!(icon.pixels()[255], 255);
    }

    #[test]
    fn test_clone_is_independent_allocation() {
        let original = Icon::filled(7);
        let mut copy = original.clone();
        assert_eq!(copy, original);
        assert!(!std::ptr::eq(copy.pixels(), original.pixels()));

        copy.pixels_mut()[0] = 42;
        assert_eq!(original.pixels()[0], 7);
        assert_ne!(copy, original);
    }
}
