//! Service layer providing the campus event operations on top of models.
//! - Separates business rules (existence checks, one-shot flags) from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Aggregate reports live in `report_service`.

pub mod errors;
pub mod domain;
pub mod college_service;
pub mod student_service;
pub mod event_service;
pub mod registration_service;
pub mod attendance_service;
pub mod feedback_service;
pub mod report_service;
pub mod seed;
#[cfg(test)]
pub mod test_support;
