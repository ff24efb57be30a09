//! Shared building blocks for the campus event workspace.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn message_from_str() {
        let m = types::Message::new("Attendance marked");
        assert_eq!(m.message, "Attendance marked");
        assert_eq!(m, types::Message { message: "Attendance marked".to_string() });
    }
}
