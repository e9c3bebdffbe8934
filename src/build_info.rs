use chrono::{DateTime, Datelike, Utc};

/// Stamped by `build.rs` so the server render and the hydrated bundle agree.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_year() -> i32 {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_is_rfc3339() {
        assert!(DateTime::parse_from_rfc3339(BUILD_TIME).is_ok());
        assert!(build_year() >= 2024);
    }
}
