// ABOUTME: One-week mat schedule pairing training days with technique categories
// ABOUTME: Recommended techniques fill each day first, topped up from the catalog at random
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use super::{pick, pick_weakness};
use bjj_core::models::TechniqueCategory;
use bjj_core::TechniqueCatalog;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

const TECHNIQUES_PER_DAY: usize = 2;

const TRAINING_DAYS: [(&str, TechniqueCategory); 5] = [
    ("Monday", TechniqueCategory::UpperBody),
    ("Tuesday", TechniqueCategory::LowerBody),
    ("Thursday", TechniqueCategory::Submissions),
    ("Friday", TechniqueCategory::Guard),
    ("Saturday", TechniqueCategory::Takedowns),
];

const CONDITIONING: [&str; 3] = ["HIIT", "Strength Training", "Cardio"];

fn intensity(day: &str) -> &'static str {
    if matches!(day, "Monday" | "Thursday") {
        "High Intensity"
    } else {
        "Technical"
    }
}

const fn focus_explanation(category: TechniqueCategory) -> [&'static str; 3] {
    match category {
        TechniqueCategory::UpperBody => [
            "Emphasizes techniques that primarily use arms, shoulders, and chest",
            "Includes submissions like armbars, kimuras, and chokes",
            "Drill grip fighting and upper body control positions",
        ],
        TechniqueCategory::LowerBody => [
            "Concentrates on techniques involving legs and hips",
            "Includes leg locks, sweeps, and guard retention drills",
            "Practice hip mobility and leg dexterity exercises",
        ],
        TechniqueCategory::Submissions => [
            "Focuses on finishing techniques from various positions",
            "Drill submission setups and transitions between submissions",
            "Practice both gi and no-gi specific submissions",
        ],
        TechniqueCategory::Guard => [
            "Emphasizes guard retention, recovery, and attacks",
            "Practice different guard types (closed, open, half)",
            "Drill sweeps and submissions from guard positions",
        ],
        TechniqueCategory::Takedowns => [
            "Concentrates on techniques to bring the fight to the ground",
            "Practice both gi and no-gi takedowns",
            "Drill takedown defense and sprawls",
        ],
    }
}

/// Techniques for one day: recommended ones in `category` first, then random
/// catalog picks from the same category until the day is full
fn day_techniques<'a, R>(
    catalog: &'a TechniqueCatalog,
    recommended: &'a [String],
    category: TechniqueCategory,
    rng: &mut R,
) -> Vec<&'a str>
where
    R: Rng + ?Sized,
{
    let mut picks: Vec<&str> = recommended
        .iter()
        .map(String::as_str)
        .filter(|name| catalog.category_of(name) == Some(category))
        .take(TECHNIQUES_PER_DAY)
        .collect();

    let missing = TECHNIQUES_PER_DAY - picks.len();
    if missing > 0 {
        let mut top_up = catalog
            .techniques_in(category)
            .filter(|name| !picks.contains(name))
            .choose_multiple(rng, missing);
        top_up.shuffle(rng);
        picks.extend(top_up);
    }

    picks
}

/// Render the weekly plan, one output line per entry
///
/// Five training days (Monday, Tuesday, Thursday, Friday, Saturday), each
/// with up to two techniques, a conditioning pick, and a focus explanation.
/// When `weaknesses` is non-empty each day has an even chance of adding a
/// weakness focus block. Wednesday recovery and Sunday rest close the week.
pub fn create_weekly_plan<R>(
    catalog: &TechniqueCatalog,
    recommended: &[String],
    weaknesses: &[String],
    rng: &mut R,
) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut plan = Vec::new();

    for (day, category) in TRAINING_DAYS {
        plan.push(format!("{day} ({} - {category} Focus):", intensity(day)));

        let techniques = day_techniques(catalog, recommended, category, rng);
        let mut item = 0;
        for technique in techniques {
            item += 1;
            plan.push(format!("  {item}. {technique}"));
        }
        item += 1;
        plan.push(format!("  {item}. Conditioning: {}", pick(&CONDITIONING, rng)));

        plan.push(format!("  {category} Focus Explanation:"));
        plan.extend(
            focus_explanation(category)
                .iter()
                .map(|line| format!("   - {line}")),
        );

        if !weaknesses.is_empty() && rng.gen_bool(0.5) {
            if let Some(focus) = pick_weakness(weaknesses, rng) {
                item += 1;
                plan.push(format!("  {item}. Weakness Focus: {focus}"));
                plan.push("   - Dedicate extra time to drilling and situational sparring".to_owned());
                plan.push(
                    "   - Focus on specific techniques or positions related to this weakness"
                        .to_owned(),
                );
            }
        }
    }

    plan.push("Wednesday: Active Recovery (Light drilling, Yoga, or Mobility work)".to_owned());
    plan.push("Sunday: Rest".to_owned());
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn day_block<'a>(plan: &'a [String], header: &str) -> &'a [String] {
        let start = plan.iter().position(|l| l.starts_with(header)).unwrap();
        let end = plan[start + 1..]
            .iter()
            .position(|l| !l.starts_with(' '))
            .map_or(plan.len(), |offset| start + 1 + offset);
        &plan[start..end]
    }

    #[test]
    fn test_recommended_techniques_lead_their_day() {
        let catalog = TechniqueCatalog::default();
        let recommended = vec![
            "No-Gi: Kimura".to_owned(),
            "Gi: Footlock".to_owned(),
            "Gi: Armbar".to_owned(),
            "No-Gi: Rear Naked Choke".to_owned(),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let plan = create_weekly_plan(&catalog, &recommended, &[], &mut rng);

        let monday = day_block(&plan, "Monday");
        assert_eq!(monday[0], "Monday (High Intensity - Upper Body Focus):");
        assert_eq!(monday[1], "  1. No-Gi: Kimura");
        assert_eq!(monday[2], "  2. Gi: Armbar");
        assert!(monday[3].starts_with("  3. Conditioning: "));

        let tuesday = day_block(&plan, "Tuesday");
        assert_eq!(tuesday[0], "Tuesday (Technical - Lower Body Focus):");
        assert_eq!(tuesday[1], "  1. Gi: Footlock");
        let topped_up = tuesday[2].strip_prefix("  2. ").unwrap();
        assert_ne!(topped_up, "Gi: Footlock");
        assert_eq!(
            catalog.category_of(topped_up),
            Some(TechniqueCategory::LowerBody)
        );
    }

    #[test]
    fn test_week_structure_without_weaknesses() {
        let catalog = TechniqueCatalog::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let plan = create_weekly_plan(&catalog, &[], &[], &mut rng);

        // 5 days × (header + 2 techniques + conditioning + 4 explanation lines) + 2
        assert_eq!(plan.len(), 5 * 8 + 2);
        assert_eq!(
            plan[plan.len() - 2],
            "Wednesday: Active Recovery (Light drilling, Yoga, or Mobility work)"
        );
        assert_eq!(plan[plan.len() - 1], "Sunday: Rest");
        assert!(plan.iter().all(|l| !l.contains("Weakness Focus")));

        let thursday = day_block(&plan, "Thursday");
        assert_eq!(thursday[0], "Thursday (High Intensity - Submissions Focus):");
        assert_eq!(thursday[4], "  Submissions Focus Explanation:");
    }

    #[test]
    fn test_weakness_blocks_use_given_weaknesses() {
        let catalog = TechniqueCatalog::default();
        let weaknesses = vec!["escapes".to_owned()];
        let mut seen = 0;
        for seed in 0..16 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let plan = create_weekly_plan(&catalog, &[], &weaknesses, &mut rng);
            for line in plan.iter().filter(|l| l.contains("Weakness Focus")) {
                assert_eq!(line, "  4. Weakness Focus: escapes");
                seen += 1;
            }
        }
        assert!(seen > 0);
    }
}
