pub mod errors;
pub mod db;
pub mod college;
pub mod student;
pub mod event;
pub mod registration;
pub mod attendance;
pub mod feedback;

#[cfg(test)]
mod tests;
