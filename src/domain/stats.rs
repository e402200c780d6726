//! Mood frequency statistics

use crate::domain::{MoodEntry, MoodLevel};

/// Count and share of one mood level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodShare {
    pub mood: MoodLevel,
    pub count: usize,
    /// Rounded percentage of all entries, 0 when there are none
    pub percentage: u32,
}

/// Per-mood breakdown of a set of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodStats {
    pub total: usize,
    /// One share per level, in `MoodLevel::ALL` order
    pub shares: Vec<MoodShare>,
    pub dominant: Option<MoodLevel>,
}

impl MoodStats {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a MoodEntry>,
    {
        let mut counts = [0usize; MoodLevel::ALL.len()];
        for entry in entries {
            counts[index_of(entry.mood)] += 1;
        }
        let total: usize = counts.iter().sum();

        let shares = MoodLevel::ALL
            .iter()
            .zip(counts.iter())
            .map(|(&mood, &count)| MoodShare {
                mood,
                count,
                percentage: percentage(count, total),
            })
            .collect();

        MoodStats {
            total,
            shares,
            dominant: dominant(&counts),
        }
    }

    /// Share for a single level
    pub fn share(&self, mood: MoodLevel) -> MoodShare {
        self.shares[index_of(mood)]
    }
}

fn index_of(mood: MoodLevel) -> usize {
    MoodLevel::ALL
        .iter()
        .position(|&level| level == mood)
        .unwrap_or_default()
}

fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

/// Highest count wins; ties go to the level listed first in `MoodLevel::ALL`.
fn dominant(counts: &[usize]) -> Option<MoodLevel> {
    let mut best: Option<(MoodLevel, usize)> = None;
    for (&mood, &count) in MoodLevel::ALL.iter().zip(counts) {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if best_count >= count => {}
            _ => best = Some((mood, count)),
        }
    }
    best.map(|(mood, _)| mood)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(moods: &[MoodLevel]) -> Vec<MoodEntry> {
        moods
            .iter()
            .enumerate()
            .map(|(i, &mood)| {
                MoodEntry::new(
                    i.to_string(),
                    format!("2025-01-{:02}", i + 1),
                    mood,
                    None,
                    None,
                )
            })
            .collect()
    }

    #[test]
    fn test_percentages_and_dominant() {
        use MoodLevel::*;
        let stats = MoodStats::from_entries(&entries(&[Great, Great, Good, Bad]));

        assert_eq!(stats.total, 4);
        assert_eq!(stats.share(Great).percentage, 50);
        assert_eq!(stats.share(Good).percentage, 25);
        assert_eq!(stats.share(Bad).percentage, 25);
        assert_eq!(stats.share(Neutral).percentage, 0);
        assert_eq!(stats.share(Terrible).percentage, 0);
        assert_eq!(stats.share(Great).count, 2);
        assert_eq!(stats.dominant, Some(Great));
    }

    #[test]
    fn test_tie_breaks_on_level_order() {
        use MoodLevel::*;
        let stats = MoodStats::from_entries(&entries(&[Bad, Good]));
        assert_eq!(stats.dominant, Some(Good));

        let stats = MoodStats::from_entries(&entries(&[Terrible, Neutral, Terrible, Neutral]));
        assert_eq!(stats.dominant, Some(Neutral));
    }

    #[test]
    fn test_empty_entries() {
        let stats = MoodStats::from_entries(&Vec::<MoodEntry>::new());

        assert_eq!(stats.total, 0);
        assert_eq!(stats.dominant, None);
        assert_eq!(stats.shares.len(), 5);
        assert!(stats.shares.iter().all(|s| s.percentage == 0 && s.count == 0));
    }

    #[test]
    fn test_shares_follow_level_order() {
        let stats = MoodStats::from_entries(&entries(&[MoodLevel::Terrible]));
        let order: Vec<MoodLevel> = stats.shares.iter().map(|s| s.mood).collect();
        assert_eq!(order, MoodLevel::ALL.to_vec());
        assert_eq!(stats.share(MoodLevel::Terrible).percentage, 100);
    }

    #[test]
    fn test_percentages_round_half_up() {
        use MoodLevel::*;
        // 1/3 -> 33, 2/3 -> 67
        let stats = MoodStats::from_entries(&entries(&[Good, Good, Bad]));
        assert_eq!(stats.share(Good).percentage, 67);
        assert_eq!(stats.share(Bad).percentage, 33);

        // 1/8 = 12.5 -> 13
        let stats =
            MoodStats::from_entries(&entries(&[Great, Bad, Bad, Bad, Bad, Bad, Bad, Bad]));
        assert_eq!(stats.share(Great).percentage, 13);
    }
}
