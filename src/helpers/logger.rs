use std::io::Write;

use chrono::{Datelike, DateTime, Local, Timelike};
use log::{Level, LevelFilter};

pub fn init_logger(is_dev_build: bool) {
    let level_filter = if is_dev_build {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Tests may call this multiple times, only the first call installs the logger
    let _ = env_logger::builder()
        .filter_level(level_filter)
        .format(|buf, record| {
            let local_time: DateTime<Local> = Local::now();
            let thread = std::thread::current();

            writeln!(
                buf,
                "{} [{}] {}@{} -- {}",
                log_level_to_string(record.level()),
                format_date_time(&local_time),
                record.target(),
                thread.name().unwrap_or("unnamed"),
                record.args()
            )
        })
        .is_test(cfg!(test))
        .try_init();
}

fn format_date_time(local_time: &DateTime<Local>) -> String {
    return format!(
        "{}-{:02}-{:02} {:02}-{:02}-{:02}.{:03}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second(),
        local_time.timestamp_subsec_millis(),
    );
}

fn log_level_to_string(log_level: Level) -> &'static str {
    return match log_level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    };
}

#[test]
fn test_format_date_time() {
    use chrono::TimeZone;

    let local_time = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
    assert_eq!("2024-03-07 09-05-01.000", format_date_time(&local_time));
}
