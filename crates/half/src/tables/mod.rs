use {
    crate::generate::build_to_float_table,
    std::{sync::OnceLock, time::Instant},
};

mod exp_lut;
pub use exp_lut::EXP_LUT;

/// Entries in the exponent lookup table, one per (sign, 8-bit exponent) key.
pub const EXP_LUT_SIZE: usize = 1 << 9;

/// Entries in the to-float table, one per half bit pattern.
pub const TO_FLOAT_TABLE_SIZE: usize = 1 << 16;

/// Half-to-float table, indexed by the half bit pattern.
/// Built from the arithmetic decoder on first use.
static TO_FLOAT: OnceLock<Vec<u32>> = OnceLock::new();

/// The to-float table, building it if this is the first call in the process.
///
/// Concurrent first callers block until the one building thread finishes, so
/// no caller ever sees a partial table.
pub fn to_float_table() -> &'static [u32] {
    TO_FLOAT.get_or_init(|| {
        let start = Instant::now();
        let table = build_to_float_table();
        log::debug!(
            "built half-to-float table ({} entries) in {:?}",
            table.len(),
            start.elapsed()
        );
        table
    })
}

/// Whether the to-float table has been built yet.
pub fn to_float_table_ready() -> bool {
    TO_FLOAT.get().is_some()
}
