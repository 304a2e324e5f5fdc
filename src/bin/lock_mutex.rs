//! Runs one lock/unlock cycle on a scoped mutex guard and lets the guard
//! fall out of scope, destroying the (unlocked, hence destructible)
//! primitive on the implicit cleanup path.

use std::io;

use tracing_subscriber::EnvFilter;
use wind_down::OsMutex;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let mut mutex = OsMutex::init()?;
    mutex.lock()?;
    mutex.unlock()?;

    // End of scope destroys the primitive; a failure would be reported on
    // the diagnostic channel.
    Ok(())
}
