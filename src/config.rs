use std::env;
use std::time::Duration;

/// Fixed admin account. Compared literally; there is no credential store.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Fixed student account and the profile that becomes the session identity
/// when it signs in.
#[derive(Debug, Clone)]
pub struct StudentAccount {
    pub email: String,
    pub password: String,
    pub name: String,
    pub student_id: String,
    pub room_number: String,
    pub phone: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub admin: AdminAccount,
    pub student: StudentAccount,
    /// Artificial latency applied before submit/login/register complete.
    pub submit_delay: Duration,
}

fn parse_delay_ms(value: Option<&str>) -> Duration {
    Duration::from_millis(value.and_then(|v| v.trim().parse().ok()).unwrap_or(1000))
}

impl Config {
    pub fn load() -> Self {
        Self {
            admin: AdminAccount {
                email: env::var("HOSTEL_ADMIN_EMAIL")
                    .unwrap_or_else(|_| "admin@hostel.local".into()),
                password: env::var("HOSTEL_ADMIN_PASSWORD").unwrap_or_else(|_| "1234".into()),
                name: env::var("HOSTEL_ADMIN_NAME").unwrap_or_else(|_| "Admin User".into()),
            },
            student: StudentAccount {
                email: env::var("HOSTEL_STUDENT_EMAIL")
                    .unwrap_or_else(|_| "student@hostel.local".into()),
                password: env::var("HOSTEL_STUDENT_PASSWORD")
                    .unwrap_or_else(|_| "student123".into()),
                name: env::var("HOSTEL_STUDENT_NAME").unwrap_or_else(|_| "John Doe".into()),
                student_id: env::var("HOSTEL_STUDENT_ID").unwrap_or_else(|_| "STU001".into()),
                room_number: env::var("HOSTEL_STUDENT_ROOM").unwrap_or_else(|_| "A-101".into()),
                phone: env::var("HOSTEL_STUDENT_PHONE")
                    .unwrap_or_else(|_| "+1 555 0100".into()),
            },
            submit_delay: parse_delay_ms(env::var("HOSTEL_SUBMIT_DELAY_MS").ok().as_deref()),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    Config {
        admin: AdminAccount {
            email: "warden@test.local".into(),
            password: "adminpass".into(),
            name: "Test Warden".into(),
        },
        student: StudentAccount {
            email: "student@test.local".into(),
            password: "studentpass".into(),
            name: "Test Student".into(),
            student_id: "STU042".into(),
            room_number: "B-204".into(),
            phone: "+1 555 0142".into(),
        },
        submit_delay: Duration::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_delay_default() {
        assert_eq!(parse_delay_ms(None), Duration::from_millis(1000));
    }

    #[test]
    fn parse_delay_explicit() {
        assert_eq!(parse_delay_ms(Some("250")), Duration::from_millis(250));
        assert_eq!(parse_delay_ms(Some(" 0 ")), Duration::ZERO);
    }

    #[test]
    fn parse_delay_garbage_falls_back() {
        assert_eq!(parse_delay_ms(Some("soon")), Duration::from_millis(1000));
        assert_eq!(parse_delay_ms(Some("-5")), Duration::from_millis(1000));
    }

    #[test]
    fn default_admin_name() {
        // Only reliable when HOSTEL_ADMIN_NAME is unset (typical in test/CI)
        let config = Config::load();
        if env::var("HOSTEL_ADMIN_NAME").is_err() {
            assert_eq!(config.admin.name, "Admin User");
        }
    }

    #[test]
    fn default_student_room() {
        let config = Config::load();
        if env::var("HOSTEL_STUDENT_ROOM").is_err() {
            assert_eq!(config.student.room_number, "A-101");
        }
    }
}
