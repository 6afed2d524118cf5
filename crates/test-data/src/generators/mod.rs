//! Record generators for test data.
//!
//! - [`sample`]: the fixed sample users and cases
//! - [`UserGenerator`]: random users, every fifth one an organization
//! - [`CaseGenerator`]: random demo tutoring cases

pub mod case;
pub mod sample;
pub mod user;

pub use case::{CaseGenConfig, CaseGenerator};
pub use sample::{SampleCases, SampleUsers, sample_cases, sample_users};
pub use user::{UserGenConfig, UserGenerator};
