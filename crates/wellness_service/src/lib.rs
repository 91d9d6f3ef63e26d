//! Weekly wellness scoring and lab-result ingestion.
//!
//! Scores four pillars (sleep, movement, mindfulness, nutrition) from a
//! week of provider signals, blends them into an overall score and picks a
//! motivational message. A second pipeline pulls lab orders and stores them
//! as provider biomarkers exactly once per order.

pub mod config;
pub mod domains;
pub mod error;
pub mod middleware;
pub mod notify;
pub mod routes;
pub mod services;
pub mod state;
pub mod transforms;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use config::ServiceSettings;
pub use error::{ServiceError, ServiceResult};
pub use middleware::LoggingMiddleware;
pub use routes::router;
pub use services::{LabSyncService, ScoreService};
pub use state::AppState;
