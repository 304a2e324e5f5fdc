// Subscribe to most of the clippy lints.
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]

// Disable warnings for things we don't care about.
#![allow(unknown_lints)]
#![allow(clippy::implicit_return)]
#![allow(clippy::missing_inline_in_public_items)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]

//! Scoped resource guards whose release can fail, observably, plus a
//! demonstration of what happens when release failures cascade during
//! stack unwinding. See the README for the full story.

mod cascade;
mod error;
mod file;
mod guard;
mod mutex;

// Expose the interface publicly.
//
pub use cascade::CascadeStage;
pub use cascade::FaultyStage;
pub use cascade::QuietStage;
pub use error::AcquireError;
pub use error::CascadingFailure;
pub use error::ReleaseError;
pub use error::UseError;
pub use file::WriteFile;
pub use guard::ScopeGuard;
pub use guard::Scoped;
pub use mutex::OsMutex;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
