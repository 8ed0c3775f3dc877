use core::fmt;
use core::num::NonZeroU32;

/// Compact identifier of a boundary face within one mesh partition.
///
/// - `u32` keeps memory small
/// - `NonZero` enables `Option<FaceId>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u32", into = "u32"))]
pub struct FaceId(NonZeroU32);

impl FaceId {
    /// Create a FaceId from a 0-based face index by storing index+1.
    pub fn from_index(index: u32) -> Self {
        // saturates at u32::MAX, never zero
        Self(NonZeroU32::MIN.saturating_add(index))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl From<u32> for FaceId {
    fn from(index: u32) -> Self {
        Self::from_index(index)
    }
}

impl From<FaceId> for u32 {
    fn from(id: FaceId) -> Self {
        id.index()
    }
}

impl fmt::Debug for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FaceId({})", self.index())
    }
}

impl fmt::Display for FaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
