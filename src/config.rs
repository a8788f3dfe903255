use crate::{
    errors::AppError,
    services::slack::DEFAULT_API_URL,
    structs::roster::{Roster, RosterFile},
};
use chrono::{NaiveDate, Weekday};
use std::{collections::HashSet, env::var, fs, num::NonZeroUsize};

const DEFAULT_CHANNEL: &str = "#general";
const DEFAULT_START_DATE: &str = "2025-09-25";
const DEFAULT_END_DATE: &str = "2026-01-21";
const DEFAULT_DAYS: &str = "Monday,Wednesday";
const DEFAULT_NUM_TEAMS: &str = "3";
const DEFAULT_SUPERVISOR: &str = "Hirano";

/// 沒有指定 `LUNCH_ROSTER_FILE` 時使用的名單
fn default_roster() -> Roster {
    [
        (
            "B4",
            vec!["Arai", "Uchida", "Karasawa", "Shimabara", "Hara", "Yoshida", "Liang"],
        ),
        (
            "M1M2",
            vec!["Ito", "Song", "Nakajima", "Kiryu", "Shigeyoshi", "Nishikata", "Watanabe"],
        ),
        ("DPD", vec!["Shujun", "Fujii"]),
    ]
    .into_iter()
    .map(|(category, members)| {
        (
            category.to_string(),
            members.into_iter().map(String::from).collect(),
        )
    })
    .collect()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub roster: Roster,
    pub supervisor: String,
    pub days: Vec<String>,
    pub weekdays: Vec<Weekday>,
    pub num_teams: NonZeroUsize,
    pub channel: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let (supervisor, roster) = match var("LUNCH_ROSTER_FILE") {
            Ok(path) => {
                let file = load_roster_file(&path)?;
                (file.supervisor, file.categories)
            }
            Err(_) => (DEFAULT_SUPERVISOR.to_string(), default_roster()),
        };

        Self::build(roster, supervisor, |key, default| {
            var(key).unwrap_or_else(|_| default.to_string())
        })
    }

    /// `get(key, default)` 取得設定值，沒有設定時回傳 default
    fn build<F>(roster: Roster, supervisor: String, get: F) -> Result<Self, AppError>
    where
        F: Fn(&str, &str) -> String,
    {
        let days = parse_days(&get("LUNCH_DAYS", DEFAULT_DAYS))?;
        let weekdays = days
            .iter()
            .map(|day| {
                day.parse::<Weekday>()
                    .map_err(|_| AppError::InvalidConfig(format!("無法辨識的曜日: {}", day)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let num_teams = get("LUNCH_NUM_TEAMS", DEFAULT_NUM_TEAMS);
        let num_teams = num_teams
            .trim()
            .parse::<NonZeroUsize>()
            .map_err(|_| AppError::InvalidConfig(format!("隊伍數必須是正整數: {}", num_teams)))?;

        let start_date = parse_date(&get("LUNCH_START_DATE", DEFAULT_START_DATE))?;
        let end_date = parse_date(&get("LUNCH_END_DATE", DEFAULT_END_DATE))?;
        if start_date >= end_date {
            return Err(AppError::InvalidConfig(format!(
                "結束日 {} 必須晚於開始日 {}",
                end_date, start_date
            )));
        }

        Ok(Self {
            roster,
            supervisor,
            days,
            weekdays,
            num_teams,
            channel: get("SLACK_CHANNEL", DEFAULT_CHANNEL),
            start_date,
            end_date,
            api_url: get("SLACK_API_URL", DEFAULT_API_URL),
        })
    }
}

fn load_roster_file(path: &str) -> Result<RosterFile, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn parse_days(raw: &str) -> Result<Vec<String>, AppError> {
    let days: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|day| !day.is_empty())
        .map(String::from)
        .collect();

    if days.is_empty() {
        return Err(AppError::InvalidConfig("至少需要一個曜日".to_string()));
    }

    let mut seen = HashSet::new();
    for day in &days {
        if !seen.insert(day.clone()) {
            return Err(AppError::InvalidConfig(format!("重複的曜日: {}", day)));
        }
    }

    Ok(days)
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidConfig(format!("日期格式錯誤 (YYYY-MM-DD): {}", raw)))
}
