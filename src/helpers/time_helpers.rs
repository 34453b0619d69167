use chrono::{DateTime, Local};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

pub struct SystemClock {}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        return Local::now();
    }
}

/// Second resolution, `YYYYMMDDHHMMSS`. Used to keep output files of separate runs apart.
pub fn format_file_timestamp(date_time: &DateTime<Local>) -> String {
    return date_time.format("%Y%m%d%H%M%S").to_string();
}

#[test]
fn test_format_file_timestamp() {
    use chrono::TimeZone;

    let date_time = Local.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let timestamp = format_file_timestamp(&date_time);

    assert_eq!("20240102030405", timestamp);
    assert_eq!(14, timestamp.len());
}
