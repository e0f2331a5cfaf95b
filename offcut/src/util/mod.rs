/// Set of functions used throughout assure the correctness of the library.
pub mod assertions;

mod fpa;

#[doc(inline)]
pub use fpa::FPA;

/// Number of decimals kept when rounding millimeter values for deduplication
pub const MM_DECIMALS: i32 = 4;

/// Rounds `v` to [`MM_DECIMALS`] decimals.
pub fn round_mm(v: f64) -> f64 {
    let factor = 10f64.powi(MM_DECIMALS);
    (v * factor).round() / factor
}

/// Integer key of `v` at [`MM_DECIMALS`] precision, usable for hashing and deduplication.
pub fn mm_key(v: f64) -> i64 {
    (v * 10f64.powi(MM_DECIMALS)).round() as i64
}
