//! Uniform integer sampling in the configured dtype.

use rand::Rng;
use randint_core::Dtype;

/// Draw one integer uniformly from `[low, high)` in the native type of `dtype`.
///
/// The bounds must already fit the dtype (see [`Dtype::fits`]); the draw is
/// done over the inclusive range `low..=high - 1` so that an exclusive bound
/// one past the type's maximum is still representable.
pub fn sample_int<R: Rng>(rng: &mut R, dtype: Dtype, low: i128, high: i128) -> i128 {
    debug_assert!(low < high && dtype.fits(low, high));

    macro_rules! draw {
        ($t:ty) => {
            rng.gen_range((low as $t)..=((high - 1) as $t)) as i128
        };
    }

    match dtype {
        Dtype::Int8 => draw!(i8),
        Dtype::Int16 => draw!(i16),
        Dtype::Int32 => draw!(i32),
        Dtype::Int64 => draw!(i64),
        Dtype::Uint8 => draw!(u8),
        Dtype::Uint16 => draw!(u16),
        Dtype::Uint32 => draw!(u32),
        Dtype::Uint64 => draw!(u64),
    }
}
