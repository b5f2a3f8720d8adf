//! Profile achievements, derived from the progress record on demand
//!
//! Nothing here writes to the record. The stored `badges` set is separate.

use serde::Serialize;

use crate::types::ProgressRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Milestone,
    Skill,
    Dedication,
    Progression,
    Mastery,
}

/// What a record must reach to unlock an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    GamesCompleted(u32),
    StreakDays(u32),
    Level(u32),
}

impl Requirement {
    pub fn is_met(&self, record: &ProgressRecord) -> bool {
        match *self {
            Requirement::GamesCompleted(n) => record.games_completed >= n,
            Requirement::StreakDays(n) => record.streak_days >= n,
            Requirement::Level(n) => record.level >= n,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub requirement: Requirement,
}

pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first-win",
        title: "First Victory",
        description: "Complete your first debate challenge",
        category: AchievementCategory::Milestone,
        requirement: Requirement::GamesCompleted(1),
    },
    Achievement {
        id: "fallacy-hunter",
        title: "Fallacy Hunter",
        description: "Spot 10 logical fallacies correctly",
        category: AchievementCategory::Skill,
        requirement: Requirement::GamesCompleted(3),
    },
    Achievement {
        id: "argumentation-master",
        title: "Argumentation Master",
        description: "Build 5 high-quality arguments",
        category: AchievementCategory::Skill,
        requirement: Requirement::GamesCompleted(5),
    },
    Achievement {
        id: "streak-warrior",
        title: "Streak Warrior",
        description: "Maintain a 7-day learning streak",
        category: AchievementCategory::Dedication,
        requirement: Requirement::StreakDays(7),
    },
    Achievement {
        id: "debate-scholar",
        title: "Debate Scholar",
        description: "Reach Level 10",
        category: AchievementCategory::Progression,
        requirement: Requirement::Level(10),
    },
    Achievement {
        id: "logic-champion",
        title: "Logic Champion",
        description: "Complete all game modes",
        category: AchievementCategory::Mastery,
        requirement: Requirement::GamesCompleted(15),
    },
];

/// One achievement with its unlock state for a given record
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AchievementStatus {
    pub achievement: &'static Achievement,
    pub unlocked: bool,
}

/// Unlock state of every achievement, in table order
pub fn evaluate(record: &ProgressRecord) -> Vec<AchievementStatus> {
    ACHIEVEMENTS
        .iter()
        .map(|achievement| AchievementStatus {
            achievement,
            unlocked: achievement.requirement.is_met(record),
        })
        .collect()
}

pub fn unlocked_count(record: &ProgressRecord) -> usize {
    ACHIEVEMENTS.iter().filter(|a| a.requirement.is_met(record)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked_ids(record: &ProgressRecord) -> Vec<&'static str> {
        evaluate(record)
            .into_iter()
            .filter(|s| s.unlocked)
            .map(|s| s.achievement.id)
            .collect()
    }

    #[test]
    fn test_fresh_record_unlocks_nothing() {
        assert!(unlocked_ids(&ProgressRecord::default()).is_empty());
        assert_eq!(evaluate(&ProgressRecord::default()).len(), 6);
    }

    #[test]
    fn test_games_thresholds() {
        let record = ProgressRecord { games_completed: 5, ..ProgressRecord::default() };
        assert_eq!(unlocked_ids(&record), vec!["first-win", "fallacy-hunter", "argumentation-master"]);
    }

    #[test]
    fn test_streak_and_level() {
        let record = ProgressRecord {
            level: 10,
            xp: 950,
            streak_days: 7,
            ..ProgressRecord::default()
        };
        assert_eq!(unlocked_ids(&record), vec!["streak-warrior", "debate-scholar"]);
        assert_eq!(unlocked_count(&record), 2);
    }
}
