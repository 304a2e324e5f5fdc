//! Drives the teardown-cascade chain under a handler that can never be
//! reached: the outermost stage's teardown failure starts unwinding, the
//! nested stage's teardown fails while that unwind is in flight, and the
//! runtime aborts the process before either failure has a delivery
//! target.

use std::io;
use std::panic;

use tracing_subscriber::EnvFilter;
use wind_down::CascadeStage;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    eprintln!("begin main");

    let result = panic::catch_unwind(|| {
        let _stage = CascadeStage::new();
        eprintln!("end body");
    });

    if result.is_err() {
        // Unreachable in practice: the second in-flight failure aborts
        // the process before unwinding can deliver the first one here.
        eprintln!("caught teardown failure");
    }

    eprintln!("end main");
}
