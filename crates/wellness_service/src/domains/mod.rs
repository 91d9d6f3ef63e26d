//! Domain modules for the scoring core and lab ingestion.
//!
//! # Modules
//!
//! - [`pillars`]: per-pillar scorers (sleep, movement, mindfulness, nutrition)
//! - [`weight`]: legacy weight pillar
//! - [`overall`]: blending pillar scores
//! - [`profile`]: weekly averages from raw provider series
//! - [`plans`]: plan-goal documents and target overrides
//! - [`messages`]: tiered message selection
//! - [`pools`]: literal message pools
//! - [`biomarkers`]: lab rows to provider biomarkers
//! - [`ledger`]: sync de-duplication

pub mod biomarkers;
pub mod ledger;
pub mod messages;
pub mod overall;
pub mod pillars;
pub mod plans;
pub mod pools;
pub mod profile;
pub mod weight;

pub use overall::OverallPolicy;
pub use pillars::{Pillar, PillarScores, SleepBand};
pub use profile::Profile;
