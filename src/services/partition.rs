use crate::structs::roster::{DayAssignment, DayGroup, Roster};
use rand::{seq::SliceRandom, Rng};

/// 分配過程中的累積狀態，每個類別處理完後傳回新的狀態
#[derive(Debug, Clone)]
pub struct DayAccumulator {
    groups: Vec<Vec<String>>,
    remainder_seen: usize,
}

impl DayAccumulator {
    /// 每一天都先放入 supervisor
    pub fn new(supervisor: &str, day_count: usize) -> Self {
        Self {
            groups: vec![vec![supervisor.to_string()]; day_count],
            remainder_seen: 0,
        }
    }

    pub fn totals(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// 目前人數最少的曜日 index
    fn min_days(&self) -> Vec<usize> {
        let totals = self.totals();
        let min = totals.iter().copied().min().unwrap_or(0);
        totals
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == min)
            .map(|(index, _)| index)
            .collect()
    }

    fn into_groups(self) -> Vec<Vec<String>> {
        self.groups
    }
}

/// 決定一個類別從哪一天開始發牌
///
/// 整除的類別固定從 0 開始；第一個餘數類別隨機決定起點，
/// 之後的餘數類別從目前人數最少的曜日開始（平手時隨機）。
fn start_offset<R>(acc: &DayAccumulator, category_size: usize, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    let day_count = acc.groups.len();
    if category_size % day_count == 0 {
        return 0;
    }

    if acc.remainder_seen == 0 {
        rng.gen_range(0..day_count)
    } else {
        acc.min_days().choose(rng).copied().unwrap_or(0)
    }
}

/// 將一個類別的成員打亂後以 round-robin 分到各曜日
pub fn assign_category<R>(
    mut acc: DayAccumulator,
    members: &[String],
    rng: &mut R,
) -> DayAccumulator
where
    R: Rng + ?Sized,
{
    let day_count = acc.groups.len();
    let mut shuffled = members.to_vec();
    shuffled.shuffle(rng);

    let offset = start_offset(&acc, shuffled.len(), rng);
    if shuffled.len() % day_count != 0 {
        acc.remainder_seen += 1;
    }

    for (i, member) in shuffled.into_iter().enumerate() {
        acc.groups[(i + offset) % day_count].push(member);
    }

    acc
}

/// 把整份名單分配到各曜日
///
/// `days` 至少要有一個曜日，由呼叫端（設定檢查）保證。
pub fn split_into_days<R>(
    roster: &Roster,
    supervisor: &str,
    days: &[String],
    rng: &mut R,
) -> DayAssignment
where
    R: Rng + ?Sized,
{
    // 類別的處理順序每次隨機
    let mut categories: Vec<&Vec<String>> = roster.values().collect();
    categories.shuffle(rng);

    let acc = categories
        .into_iter()
        .fold(DayAccumulator::new(supervisor, days.len()), |acc, members| {
            assign_category(acc, members, rng)
        });

    DayAssignment {
        days: days
            .iter()
            .cloned()
            .zip(acc.into_groups())
            .map(|(label, members)| DayGroup { label, members })
            .collect(),
    }
}
