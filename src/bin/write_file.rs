//! Writes a short payload through a scoped write guard, waits for one
//! line of standard input as the signal to proceed to cleanup, then
//! releases the handle explicitly so a close failure can be caught and
//! reported instead of surfacing from the implicit scope-exit path.

use std::env;
use std::io::{self, BufRead};

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use wind_down::WriteFile;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let path = env::args().nth(1).context("usage: write_file <path>")?;

    let mut file = WriteFile::create(&path)?;
    file.write(b"Hello, from Rust.")?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    if let Err(err) = file.release() {
        eprintln!("{}", err);
    }

    Ok(())
}
