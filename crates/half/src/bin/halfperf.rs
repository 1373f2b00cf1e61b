use {
    base::log_fatal,
    clap::Parser,
    half::{decode_arith, decode_table, encode_arith, encode_table, tables::to_float_table},
    rand::{Rng, SeedableRng, rngs::StdRng},
    std::{hint::black_box, time::Instant},
};

/// Time the table and arithmetic conversion paths against each other.
#[derive(Parser, Debug)]
#[command(name = "halfperf")]
struct Args {
    /// Values converted per direction.
    #[arg(long, default_value_t = 1920 * 1080 * 3, value_parser = clap::value_parser!(u64).range(1..))]
    count: u64,

    /// Seed for the random inputs.
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

// run `convert` over every input, returning outputs and nanoseconds per call
fn time_path<I: Copy, O>(inputs: &[I], convert: impl Fn(I) -> O) -> (Vec<O>, f64) {
    let start = Instant::now();
    let outputs: Vec<O> = inputs.iter().map(|&i| black_box(convert(black_box(i)))).collect();
    let nanos = start.elapsed().as_nanos() as f64;
    (outputs, nanos / inputs.len() as f64)
}

fn main() {
    base::init_stderr_logger();
    let args = Args::parse();
    let count = args.count as usize;
    let mut rng = StdRng::seed_from_u64(args.seed);

    // keep the one-time table build out of the measurement
    to_float_table();

    let halves: Vec<u16> = (0..count).map(|_| rng.r#gen()).collect();
    let (table_out, table_ns) = time_path(&halves, decode_table);
    let (arith_out, arith_ns) = time_path(&halves, decode_arith);
    if let Some(i) = (0..count).find(|&i| table_out[i] != arith_out[i]) {
        log_fatal!(
            "half -> float paths disagree on {:#06x}: table {:#010x}, arith {:#010x}",
            halves[i],
            table_out[i],
            arith_out[i]
        );
    }
    log::info!("half -> float  table: {:.3} ns/call  arith: {:.3} ns/call", table_ns, arith_ns);

    // real-world magnitudes
    let floats: Vec<u32> = (0..count)
        .map(|_| (65504.0 * rng.gen_range(-1.0_f32..1.0)).to_bits())
        .collect();
    let (table_out, table_ns) = time_path(&floats, encode_table);
    let (arith_out, arith_ns) = time_path(&floats, encode_arith);
    if let Some(i) = (0..count).find(|&i| table_out[i] != arith_out[i]) {
        log_fatal!(
            "float -> half paths disagree on {:#010x}: table {:#06x}, arith {:#06x}",
            floats[i],
            table_out[i],
            arith_out[i]
        );
    }
    log::info!("float -> half  table: {:.3} ns/call  arith: {:.3} ns/call", table_ns, arith_ns);
}
