// Bit-layout dumps for debugging, fields separated by spaces.

/// `"s eeeee mmmmmmmmmm"`
pub fn format_half_bits(h: u16) -> String {
    let mut out = String::with_capacity(18);
    for i in (0..16).rev() {
        out.push(if (h >> i) & 1 != 0 { '1' } else { '0' });
        if i == 15 || i == 10 {
            out.push(' ');
        }
    }
    out
}

/// `"s eeeeeeee mmmmmmmmmmmmmmmmmmmmmmm"`
pub fn format_float_bits(f: u32) -> String {
    let mut out = String::with_capacity(34);
    for i in (0..32).rev() {
        out.push(if (f >> i) & 1 != 0 { '1' } else { '0' });
        if i == 31 || i == 23 {
            out.push(' ');
        }
    }
    out
}
