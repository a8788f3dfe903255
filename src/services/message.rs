use std::num::NonZeroUsize;

pub const HEADER: &str = "Here is the team assignment for next week.\n\n";
pub const SEPARATOR: &str = "─────────────────────────\n";
pub const EMPTY_TEAM: &str = "なし";

/// 隊伍編號 -> 座位位置說明
static LOCATION_LEGENDS: [(usize, &str); 5] = [
    (1, ""),
    (2, "※ Team 1: Front (on the side of Prof. Hirano's office)  2: Back"),
    (
        3,
        "※ Team 1: Front (on the side of Prof. Hirano's office)  2: Center  3: Back",
    ),
    (
        4,
        "※ Team 1: Front (on the side of Prof. Hirano's office)  2: Center (window side)  3: Center (hallway side)  4: Back",
    ),
    (
        5,
        "※ Team 1: Front (on the side of Prof. Hirano's office)  2: Center (window side)  3: Center (hallway side)  4: Back (window side)  5: Back (door side)",
    ),
];

/// 查不到對應的隊伍數時回傳空字串並記錄警告
pub fn location_legend(num_teams: NonZeroUsize) -> &'static str {
    match LOCATION_LEGENDS
        .iter()
        .find(|(count, _)| *count == num_teams.get())
    {
        Some((_, legend)) => *legend,
        None => {
            tracing::warn!(
                "Warning: NUM_TEAMS = {} exceeds predefined location mapping.",
                num_teams
            );
            ""
        }
    }
}

/// 單一曜日的區塊
pub fn format_day(label: &str, date: &str, teams: &[Vec<String>]) -> String {
    let mut message = format!(":calendar: *{} ({}) Group*\n", label, date);
    for (i, team) in teams.iter().enumerate() {
        let members = if team.is_empty() {
            EMPTY_TEAM.to_string()
        } else {
            team.join(", ")
        };
        message.push_str(&format!("• Team {} : {}\n", i + 1, members));
    }
    message.push_str(SEPARATOR);
    message
}

/// 組合完整的公告
pub fn compose(day_sections: &[String], legend: &str) -> String {
    let mut message = String::from(HEADER);
    message.push_str(SEPARATOR);
    for section in day_sections {
        message.push_str(section);
    }
    message.push('\n');
    message.push_str(legend);
    message
}
