//! Dashboard view model for the Quid creator dashboard
//!
//! This crate provides the [`DashboardViewModel`] state machine over a
//! pluggable [`DashboardSource`], together with a mock source serving
//! fixture data after a simulated network delay.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::multiple_crate_versions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod mock;
pub mod source;
pub mod viewmodel;

pub use error::{DashboardError, DashboardResult};
pub use source::DashboardSource;
pub use viewmodel::{DashboardState, DashboardViewModel, LOAD_ERROR_MESSAGE};

// Re-export commonly used items
pub use mock::MockDashboardSource;
pub use quid_core::{DashboardSnapshot, DashboardStats, Quest, QuestResponse};
