//! The capability-selected word backing all bit operations.

#[cfg(all(not(feature = "single-context"), not(target_has_atomic = "ptr")))]
compile_error!(
    "this target has no pointer-wide atomic read-modify-write; \
     enable the `single-context` feature for one-context builds, \
     or target a platform with atomic support"
);

#[cfg(not(feature = "single-context"))]
pub use core::sync::atomic::Ordering;

/// Stand-in for `core::sync::atomic::Ordering` in single-context builds,
/// where every ordering collapses to a plain access.
#[cfg(feature = "single-context")]
#[derive(Clone, Copy, Debug)]
pub enum Ordering {
    Relaxed,
    Acquire,
    Release,
    AcqRel,
    SeqCst,
}

/// One machine word (`usize` width) supporting atomic bit updates.
///
/// Bit `nr` occupies the `1 << nr` position, so bit 0 is the least
/// significant bit of the word. The bitmap layer relies on this convention.
///
/// The backend is chosen when the crate is compiled, never at runtime:
///
/// - default: `core::sync::atomic::AtomicUsize` (requires
///   `target_has_atomic = "ptr"`)
/// - feature `single-context`: `core::cell::Cell<usize>`, for targets with
///   no atomic instruction but exactly one execution context; the type is
///   then `!Sync`, so sharing it across threads is rejected at compile time
///
/// Both backends satisfy the same contract; callers cannot observe which
/// one was selected.
#[derive(Debug)]
#[repr(transparent)]
pub struct AtomicWord {
    #[cfg(feature = "single-context")]
    inner: core::cell::Cell<usize>,

    #[cfg(not(feature = "single-context"))]
    inner: core::sync::atomic::AtomicUsize,
}

// All-zero bits is a valid word, so callers may declare backing storage
// with `bytemuck::Zeroable`.
unsafe impl bytemuck::Zeroable for AtomicWord {}

impl AtomicWord {
    /// A word with every bit clear.
    pub const ZERO: Self = Self::new(0);

    #[inline(always)]
    pub const fn new(val: usize) -> Self {
        #[cfg(feature = "single-context")]
        return AtomicWord {
            inner: core::cell::Cell::new(val),
        };

        #[cfg(not(feature = "single-context"))]
        return AtomicWord {
            inner: core::sync::atomic::AtomicUsize::new(val),
        };
    }

    #[inline(always)]
    pub fn load(&self, ordering: Ordering) -> usize {
        #[cfg(feature = "single-context")]
        {
            let _ = ordering;
            self.inner.get()
        }

        #[cfg(not(feature = "single-context"))]
        self.inner.load(ordering)
    }

    #[inline(always)]
    pub fn store(&self, val: usize, ordering: Ordering) {
        #[cfg(feature = "single-context")]
        {
            let _ = ordering;
            self.inner.set(val);
        }

        #[cfg(not(feature = "single-context"))]
        self.inner.store(val, ordering);
    }

    /// Bitwise OR into the word, returning the previous value.
    #[inline(always)]
    pub fn fetch_or(&self, val: usize, ordering: Ordering) -> usize {
        #[cfg(feature = "single-context")]
        {
            let _ = ordering;
            let old = self.inner.get();
            self.inner.set(old | val);
            old
        }

        #[cfg(not(feature = "single-context"))]
        self.inner.fetch_or(val, ordering)
    }

    /// Bitwise AND into the word, returning the previous value.
    #[inline(always)]
    pub fn fetch_and(&self, val: usize, ordering: Ordering) -> usize {
        #[cfg(feature = "single-context")]
        {
            let _ = ordering;
            let old = self.inner.get();
            self.inner.set(old & val);
            old
        }

        #[cfg(not(feature = "single-context"))]
        self.inner.fetch_and(val, ordering)
    }

    /// Consume the word, returning the contained value.
    #[inline]
    pub fn into_inner(self) -> usize {
        self.inner.into_inner()
    }
}

impl Default for AtomicWord {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<usize> for AtomicWord {
    fn from(val: usize) -> Self {
        Self::new(val)
    }
}
