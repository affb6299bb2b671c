// ABOUTME: Multi-week periodized mat schedule scaled by experience level
// ABOUTME: Fixed weekly template with an optional randomly chosen weakness focus per week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use super::pick_weakness;
use bjj_core::models::SkillLevel;
use rand::Rng;

const WEEK_TEMPLATE: [&str; 7] = [
    "  Monday: High Intensity - Upper Body Focus",
    "  Tuesday: Technical - Lower Body Focus",
    "  Wednesday: Active Recovery",
    "  Thursday: High Volume - Submissions Focus",
    "  Friday: Technical - Guard and Takedowns",
    "  Saturday: Competition Simulation",
    "  Sunday: Rest",
];

/// Number of weeks in the periodized block for a level
#[must_use]
pub const fn periodized_weeks(level: SkillLevel) -> usize {
    match level {
        SkillLevel::Beginner => 4,
        SkillLevel::Intermediate => 6,
        SkillLevel::Advanced => 8,
    }
}

/// Render the periodized plan, one output line per entry
///
/// Each week is a `Week N:` header followed by the seven day lines. When
/// `weaknesses` is non-empty every week closes with one weakness drawn from it.
pub fn create_periodized_plan<R>(level: SkillLevel, weaknesses: &[String], rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let weeks = periodized_weeks(level);
    let mut plan = Vec::with_capacity(weeks * (WEEK_TEMPLATE.len() + 2));

    for week in 1..=weeks {
        plan.push(format!("Week {week}:"));
        plan.extend(WEEK_TEMPLATE.iter().map(|line| (*line).to_owned()));
        if let Some(focus) = pick_weakness(weaknesses, rng) {
            plan.push(format!("  Weakness Focus: {focus}"));
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_week_count_follows_level() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for (level, weeks) in [
            (SkillLevel::Beginner, 4),
            (SkillLevel::Intermediate, 6),
            (SkillLevel::Advanced, 8),
        ] {
            let plan = create_periodized_plan(level, &[], &mut rng);
            assert_eq!(plan.iter().filter(|l| l.starts_with("Week ")).count(), weeks);
            assert_eq!(plan.len(), weeks * 8);
            assert!(plan.iter().all(|l| !l.contains("Weakness Focus")));
        }
    }

    #[test]
    fn test_weakness_focus_added_every_week() {
        let weaknesses = vec!["guard passing".to_owned(), "grip fighting".to_owned()];
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let plan = create_periodized_plan(SkillLevel::Beginner, &weaknesses, &mut rng);

        let focus: Vec<_> = plan
            .iter()
            .filter_map(|l| l.strip_prefix("  Weakness Focus: "))
            .collect();
        assert_eq!(focus.len(), 4);
        assert!(focus.iter().all(|f| weaknesses.iter().any(|w| w == f)));
        assert_eq!(plan[1], "  Monday: High Intensity - Upper Body Focus");
        assert_eq!(plan[7], "  Sunday: Rest");
    }
}
