use serde::Deserialize;
use std::collections::BTreeMap;

/// 類別名稱 -> 成員名單
pub type Roster = BTreeMap<String, Vec<String>>;

/// `LUNCH_ROSTER_FILE` 指向的 JSON 格式
#[derive(Debug, Deserialize)]
pub struct RosterFile {
    pub supervisor: String,
    pub categories: Roster,
}

/// 某一天被分配到的所有人（含 supervisor）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    pub label: String,
    pub members: Vec<String>,
}

/// 依設定的曜日順序排列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAssignment {
    pub days: Vec<DayGroup>,
}

impl DayAssignment {
    pub fn get(&self, label: &str) -> Option<&DayGroup> {
        self.days.iter().find(|day| day.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_file_parses_categories() {
        let raw = r#"{
            "supervisor": "S",
            "categories": { "B4": ["a", "b"], "M1M2": [] }
        }"#;
        let file: RosterFile = serde_json::from_str(raw).unwrap();

        assert_eq!(file.supervisor, "S");
        assert_eq!(file.categories["B4"], vec!["a", "b"]);
        assert!(file.categories["M1M2"].is_empty());
    }

    #[test]
    fn get_finds_day_by_label() {
        let assignment = DayAssignment {
            days: vec![
                DayGroup {
                    label: "Monday".to_string(),
                    members: vec!["S".to_string()],
                },
                DayGroup {
                    label: "Wednesday".to_string(),
                    members: vec!["S".to_string(), "x".to_string()],
                },
            ],
        };

        assert_eq!(assignment.get("Wednesday").unwrap().members.len(), 2);
        assert!(assignment.get("Friday").is_none());
    }
}
