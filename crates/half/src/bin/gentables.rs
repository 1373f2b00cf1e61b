use {
    anyhow::{Context, Result},
    clap::Parser,
    half::generate::{GenConfig, TableKind, emit},
    std::{fs, io::Write, path::PathBuf},
};

/// Regenerate the half conversion tables as Rust source.
#[derive(Parser, Debug)]
#[command(name = "gentables")]
struct Args {
    /// Table to generate.
    #[arg(long, value_enum, default_value_t = TableKind::ExpLut)]
    table: TableKind,

    /// Entries per line.
    #[arg(long, default_value_t = 8)]
    columns: usize,

    /// Write to this file instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    base::init_stderr_logger();
    let args = Args::parse();

    let config = GenConfig::default()
        .with_table(args.table)
        .with_columns(args.columns);
    let source = emit(&config);
    log::info!("generated {} ({} bytes)", config.table, source.len());

    match args.output {
        Some(path) => {
            fs::write(&path, &source)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(source.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}
