use half::{
    decode_arith,
    generate::{GenConfig, TableKind, build_exp_lut, build_to_float_table, emit},
    tables::{EXP_LUT, EXP_LUT_SIZE, TO_FLOAT_TABLE_SIZE, to_float_table},
};

const EMBEDDED_EXP_LUT: &str = include_str!("../src/tables/exp_lut.rs");

// --- Exponent lookup table ---

#[test]
fn test_exp_lut_matches_regeneration() {
    assert_eq!(EXP_LUT.len(), EXP_LUT_SIZE);
    assert_eq!(EXP_LUT, build_exp_lut());
}

#[test]
fn test_exp_lut_source_matches_generator_output() {
    assert_eq!(emit(&GenConfig::default()), EMBEDDED_EXP_LUT);
}

#[test]
fn test_exp_lut_regeneration_is_deterministic() {
    assert_eq!(build_exp_lut(), build_exp_lut());
    let config = GenConfig::default().with_table(TableKind::ExpLut);
    assert_eq!(emit(&config), emit(&config));
}

#[test]
fn test_exp_lut_signs() {
    for key in 0..0x100 {
        let positive = EXP_LUT[key];
        let negative = EXP_LUT[key | 0x100];
        if positive == 0 {
            assert_eq!(negative, 0, "key {:#x}", key);
        } else {
            assert_eq!(negative, positive | 0x8000, "key {:#x}", key);
        }
    }
}

// --- To-float table ---

#[test]
fn test_to_float_table_matches_arithmetic_decoder() {
    let table = to_float_table();
    assert_eq!(table.len(), TO_FLOAT_TABLE_SIZE);
    for h in 0..=u16::MAX {
        assert_eq!(table[h as usize], decode_arith(h), "{:#06x}", h);
    }
}

#[test]
fn test_to_float_table_built_once() {
    let first = to_float_table();
    let second = to_float_table();
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_to_float_table_ordered_by_bit_pattern() {
    let table = build_to_float_table();
    // negative halves sort after every positive one
    assert_eq!(table[0x0000], 0x0000_0000);
    assert_eq!(table[0x7fff] >> 31, 0);
    assert_eq!(table[0x8000], 0x8000_0000);
    assert_eq!(table[0xffff] >> 31, 1);
}

// --- Emitted source ---

#[test]
fn test_emit_to_float_table() {
    let config = GenConfig::default().with_table(TableKind::ToFloat).with_columns(4);
    let text = emit(&config);
    assert!(text.starts_with("// This is an automatically generated file.\n"));
    assert!(text.contains("regenerate with `gentables --table to-float`"));
    assert!(text.contains("pub static TO_FLOAT: [u32; 65536] = [\n"));
    // first row: +0, smallest subnormals
    assert!(text.contains("    0x00000000, 0x33800000, 0x34000000, 0x34400000,\n"));
    assert!(text.ends_with("];\n"));
    assert_eq!(text.lines().filter(|l| l.starts_with("    0x")).count(), 65536 / 4);
}

#[test]
fn test_table_kind_flags() {
    assert_eq!(TableKind::ExpLut.to_string(), "exp-lut");
    assert_eq!(TableKind::ToFloat.flag(), "to-float");
}
