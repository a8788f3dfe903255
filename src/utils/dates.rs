use chrono::{Datelike, Duration, NaiveDate, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunWindow {
    NotStarted,
    Open,
    Expired,
}

/// 開始日當天可執行，結束日當天起視為過期
pub fn check_window(today: NaiveDate, start: NaiveDate, end: NaiveDate) -> RunWindow {
    if today < start {
        RunWindow::NotStarted
    } else if today >= end {
        RunWindow::Expired
    } else {
        RunWindow::Open
    }
}

/// 下一個指定曜日，今天剛好是該曜日時取一週後
pub fn next_weekday(today: NaiveDate, target: Weekday) -> NaiveDate {
    let current = today.weekday().num_days_from_monday() as i64;
    let wanted = target.num_days_from_monday() as i64;
    let days_ahead = match (wanted - current).rem_euclid(7) {
        0 => 7,
        n => n,
    };

    today + Duration::days(days_ahead)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
