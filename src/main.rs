//! Reads a FEN from standard input and prints the mirrored position.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let mut stdout = io::stdout().lock();
    write!(stdout, "FEN: ")?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read FEN from standard input")?;
    if read == 0 {
        bail!("expected a FEN line on standard input");
    }
    let fen = line.trim_end_matches(['\n', '\r']);
    log::debug!("input: '{fen}'");

    let mirrored = fen_mirror::mirror_fen(fen)?;
    log::debug!("output: '{mirrored}'");

    writeln!(stdout)?;
    writeln!(stdout, "Output:")?;
    writeln!(stdout, "{mirrored}")?;
    writeln!(stdout)?;
    Ok(())
}
