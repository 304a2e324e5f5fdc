//! A demonstration of cleanup that itself fails, in three nested stages.
//!
//! Each stage writes `begin`/`end` markers to stderr so the construction
//! and teardown interleaving is observable. Construction runs
//! outer-to-inner; teardown runs in strict reverse. A single teardown
//! failure is an ordinary panic an enclosing handler can catch; a second
//! teardown failure raised while the first is still unwinding has no
//! delivery target, and the runtime aborts the process.

/// Innermost stage: construction and teardown both succeed.
pub struct QuietStage(());

impl QuietStage {
    pub fn new() -> QuietStage {
        eprintln!("begin QuietStage::new");
        eprintln!("end QuietStage::new");
        QuietStage(())
    }
}

impl Default for QuietStage {
    fn default() -> QuietStage {
        QuietStage::new()
    }
}

impl Drop for QuietStage {
    fn drop(&mut self) {
        eprintln!("begin QuietStage::drop");
        eprintln!("end QuietStage::drop");
    }
}

/// Middle stage: its teardown constructs (and therefore tears down) a
/// [`QuietStage`] of its own, then deliberately fails.
///
/// With no other failure in flight this is a single failure, deliverable
/// to an enclosing handler:
///
/// ```should_panic
/// use wind_down::FaultyStage;
///
/// let _stage = FaultyStage::new();
/// // teardown at end of scope raises the failure
/// ```
pub struct FaultyStage(());

impl FaultyStage {
    pub fn new() -> FaultyStage {
        eprintln!("begin FaultyStage::new");
        eprintln!("end FaultyStage::new");
        FaultyStage(())
    }
}

impl Default for FaultyStage {
    fn default() -> FaultyStage {
        FaultyStage::new()
    }
}

impl Drop for FaultyStage {
    fn drop(&mut self) {
        eprintln!("begin FaultyStage::drop");
        // The nested stage must finish its own teardown before the
        // failure is raised: once this drop panics there is no further
        // unwinding of its locals.
        {
            let _inner = QuietStage::new();
        }
        eprintln!("failing from FaultyStage::drop");
        panic!("FaultyStage teardown failed");
    }
}

/// Outermost stage: its teardown constructs a [`FaultyStage`], then
/// fails. Unwinding out of that failure tears down the nested stage,
/// whose own failure arrives while the first is still propagating; the
/// runtime aborts the process and no handler receives either failure.
///
/// ```no_run
/// use wind_down::CascadeStage;
///
/// let stage = CascadeStage::new();
/// drop(stage); // aborts: two in-flight failures cannot both be delivered
/// ```
pub struct CascadeStage(());

impl CascadeStage {
    pub fn new() -> CascadeStage {
        eprintln!("begin CascadeStage::new");
        eprintln!("end CascadeStage::new");
        CascadeStage(())
    }
}

impl Default for CascadeStage {
    fn default() -> CascadeStage {
        CascadeStage::new()
    }
}

impl Drop for CascadeStage {
    fn drop(&mut self) {
        eprintln!("begin CascadeStage::drop");
        // The nested stage stays live across the panic: its teardown must
        // run while this failure is unwinding.
        let _inner = FaultyStage::new();
        eprintln!("failing from CascadeStage::drop");
        panic!("CascadeStage teardown failed");
    }
}
