//! Table generator.
//!
//! Recomputes the conversion tables from first principles and renders them
//! as Rust source for embedding. Nothing here runs on the conversion path
//! except [`build_to_float_table`], which the to-float table uses for its
//! one-time build.

use {
    crate::{
        decode::decode_arith,
        layout::*,
        tables::{EXP_LUT_SIZE, TO_FLOAT_TABLE_SIZE},
    },
    std::fmt::{self, Write},
};

/// Which table to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "tools", derive(clap::ValueEnum))]
pub enum TableKind {
    /// Float (sign, exponent) to half (sign, exponent) lookup, 512 entries.
    ExpLut,
    /// Half bit pattern to float bit pattern, 65536 entries.
    ToFloat,
}

impl TableKind {
    /// Name used on the generator command line.
    pub fn flag(&self) -> &'static str {
        match self {
            TableKind::ExpLut => "exp-lut",
            TableKind::ToFloat => "to-float",
        }
    }

    fn item_name(&self) -> &'static str {
        match self {
            TableKind::ExpLut => "EXP_LUT",
            TableKind::ToFloat => "TO_FLOAT",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag())
    }
}

// generator configuration
#[derive(Clone, Debug)]
pub struct GenConfig {
    pub table: TableKind,
    pub columns: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            table: TableKind::ExpLut,
            columns: 8,
        }
    }
}

impl GenConfig {
    pub fn with_table(mut self, table: TableKind) -> Self {
        self.table = table;
        self
    }

    /// Entries per output line. Zero is treated as one.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }
}

/// Derive the exponent lookup table.
///
/// For each key (sign bit and 8-bit float exponent) the unbiased exponent is
/// rebiased for half. Keys that could produce a zero, a subnormal, an
/// exponent overflow, an infinity or a NaN map to the sentinel 0. Exponent 30
/// is excluded too: rounding the mantissa could carry it into 31.
pub const fn build_exp_lut() -> [u16; EXP_LUT_SIZE] {
    let mut table = [0u16; EXP_LUT_SIZE];
    let mut i = 0;
    while i < 0x100 {
        let e = i as i32 - BIAS_DELTA;
        if e > 0 && e < 30 {
            let fragment = (e as u16) << HALF_MANTISSA_BITS;
            table[i] = fragment;
            table[i | 0x100] = fragment | HALF_SIGN_MASK;
        }
        i += 1;
    }
    table
}

/// Run the arithmetic decoder over every half bit pattern.
pub fn build_to_float_table() -> Vec<u32> {
    let table: Vec<u32> = (0..=u16::MAX).map(decode_arith).collect();
    debug_assert_eq!(table.len(), TO_FLOAT_TABLE_SIZE);
    table
}

/// Render the configured table as a Rust `pub static` item.
pub fn emit(config: &GenConfig) -> String {
    log::trace!("emitting {} with {} columns", config.table, config.columns);
    match config.table {
        TableKind::ExpLut => {
            let table = build_exp_lut();
            render(config, "u16", &table, |out, v| write!(out, "{:>5},", v))
        }
        TableKind::ToFloat => {
            let table = build_to_float_table();
            render(config, "u32", &table, |out, v| write!(out, "0x{:08x},", v))
        }
    }
}

fn render<T: Copy>(
    config: &GenConfig,
    element: &str,
    values: &[T],
    entry: impl Fn(&mut String, T) -> fmt::Result,
) -> String {
    let columns = config.columns.max(1);
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = writeln!(out, "// This is an automatically generated file.");
    let _ = writeln!(
        out,
        "// Do not edit; regenerate with `gentables --table {}`.",
        config.table
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "#[rustfmt::skip]");
    let _ = writeln!(
        out,
        "pub static {}: [{}; {}] = [",
        config.table.item_name(),
        element,
        values.len()
    );
    for row in values.chunks(columns) {
        out.push_str("    ");
        for (i, &value) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = entry(&mut out, value);
        }
        out.push('\n');
    }
    out.push_str("];\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_lut_normal_range() {
        let table = build_exp_lut();
        // float exponent 127 (1.0) maps to half exponent 15
        assert_eq!(table[127], 15 << 10);
        assert_eq!(table[127 | 0x100], (15 << 10) | 0x8000);
        // smallest and largest exponents the fast path may take
        assert_eq!(table[113], 1 << 10);
        assert_eq!(table[141], 29 << 10);
    }

    #[test]
    fn test_exp_lut_sentinels() {
        let table = build_exp_lut();
        for key in [0, 112, 142, 143, 255, 0x100, 0x100 | 112, 0x100 | 142, 0x1ff] {
            assert_eq!(table[key], 0, "key {:#x}", key);
        }
        assert_eq!(table.iter().filter(|&&v| v != 0).count(), 2 * 29);
    }

    #[test]
    fn test_render_columns() {
        let config = GenConfig::default().with_columns(3);
        let text = render(&config, "u16", &[1u16, 2, 3, 4], |out, v| write!(out, "{},", v));
        assert!(text.contains("pub static EXP_LUT: [u16; 4] = [\n    1, 2, 3,\n    4,\n];\n"));
    }

    #[test]
    fn test_render_zero_columns() {
        let config = GenConfig::default().with_columns(0);
        let text = render(&config, "u16", &[7u16, 8], |out, v| write!(out, "{},", v));
        assert!(text.ends_with("[\n    7,\n    8,\n];\n"));
    }
}
