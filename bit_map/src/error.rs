#[cfg(feature = "std")]
use thiserror::Error;

/// The single failure mode of this layer, reported once at view
/// construction. The bit operations themselves are infallible.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitMapError {
    #[cfg_attr(
        feature = "std",
        error("{bits} bits do not fit in {words} backing words")
    )]
    CapacityExceeded { bits: usize, words: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitMapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitMapError::CapacityExceeded { bits, words } => {
                write!(f, "{} bits do not fit in {} backing words", bits, words)
            }
        }
    }
}
