/// Limb radix. Every limb is a base-2^32 digit of the magnitude.
pub const RADIX: u64 = 1 << u32::BITS;

/// Largest power of ten that fits in one limb; decimal conversion moves
/// nine digits per short multiply/divide instead of one.
pub const STRING_RADIX: u32 = 1_000_000_000;

pub const CHAR_RADIX: u32 = 10;

pub const DIGITS_PER_GROUP: usize = 9;

/// Magnitudes up to this value are served from the sign caches.
pub const MAX_CACHED: usize = 16;
