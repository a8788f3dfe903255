use rand::{seq::SliceRandom, Rng};
use std::num::NonZeroUsize;

/// 把同一天的成員打亂後依序輪流放進各隊
pub fn assign_teams<R>(
    group: &[String],
    num_teams: NonZeroUsize,
    rng: &mut R,
) -> Vec<Vec<String>>
where
    R: Rng + ?Sized,
{
    let mut combined = group.to_vec();
    combined.shuffle(rng);

    let mut teams = vec![Vec::new(); num_teams.get()];
    for (member, team) in combined.into_iter().zip((0..teams.len()).cycle()) {
        teams[team].push(member);
    }

    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn group(size: usize) -> Vec<String> {
        (0..size).map(|i| format!("m{i}")).collect()
    }

    fn teams(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn four_members_into_three_teams() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = assign_teams(&group(4), teams(3), &mut rng);

        let sizes: Vec<usize> = result.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 1, 1]);
    }

    #[test]
    fn sizes_differ_by_at_most_one() {
        for size in 0..20 {
            for n in 1..7 {
                let mut rng = StdRng::seed_from_u64((size * 10 + n) as u64);
                let result = assign_teams(&group(size), teams(n), &mut rng);

                assert_eq!(result.len(), n);
                let max = result.iter().map(Vec::len).max().unwrap();
                let min = result.iter().map(Vec::len).min().unwrap();
                assert!(max - min <= 1);

                let mut all: Vec<String> = result.into_iter().flatten().collect();
                all.sort();
                let mut expected = group(size);
                expected.sort();
                assert_eq!(all, expected);
            }
        }
    }

    #[test]
    fn fewer_members_than_teams_leaves_empty_teams() {
        let mut rng = StdRng::seed_from_u64(5);
        let result = assign_teams(&group(2), teams(5), &mut rng);

        assert_eq!(result.len(), 5);
        assert_eq!(result.iter().filter(|team| team.is_empty()).count(), 3);
    }
}
