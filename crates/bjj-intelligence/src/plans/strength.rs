// ABOUTME: Strength & conditioning methods and their 12-week plan templates
// ABOUTME: Level-dependent intensity/volume tables with randomly picked lifts per session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BJJ Recommender Contributors

use super::pick;
use bjj_core::models::{SkillLevel, UserProfile};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write as _};
use std::str::FromStr;

const OLYMPIC_LIFTS: [&str; 3] = ["Power Clean", "Hang Snatch", "Clean and Jerk"];
const COMPOUND_EXERCISES: [&str; 4] = ["Squat", "Bench Press", "Deadlift", "Overhead Press"];
const ACCESSORY_EXERCISES: [&str; 4] = ["Pull-ups", "Dips", "Barbell Row", "Lunges"];
const MAX_EFFORT_EXERCISES: [&str; 4] = ["Box Squat", "Floor Press", "Rack Deadlift", "Good Morning"];
const DYNAMIC_EFFORT_EXERCISES: [&str; 3] = ["Speed Squat", "Speed Bench", "Speed Deadlift"];

const CLOSING_NOTES: [&str; 3] = [
    "Note: Adjust weights based on your current strength levels and recovery ability.",
    "Always warm up properly and maintain good form throughout your workouts.",
    "Consult with a certified strength and conditioning coach to tailor this plan to your specific needs.",
];

/// Strength & conditioning programming method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StrengthMethod {
    /// Submaximal weights moved with maximum speed
    #[default]
    #[serde(rename = "Dynamic Effort Method")]
    DynamicEffort,
    /// Alternating max-effort and dynamic-effort days
    #[serde(rename = "Conjugate Method (Westside Barbell)")]
    Conjugate,
    /// Intensity rises while volume falls over the block
    #[serde(rename = "Linear Periodization")]
    LinearPeriodization,
    /// Volume and intensity vary within the week
    #[serde(rename = "Undulating Periodization")]
    UndulatingPeriodization,
    /// Hypertrophy, strength, and power in distinct blocks
    #[serde(rename = "Block Periodization")]
    BlockPeriodization,
}

impl StrengthMethod {
    /// Every method, in menu order
    pub const ALL: [Self; 5] = [
        Self::DynamicEffort,
        Self::Conjugate,
        Self::LinearPeriodization,
        Self::UndulatingPeriodization,
        Self::BlockPeriodization,
    ];

    /// Display name used in plan headers
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DynamicEffort => "Dynamic Effort Method",
            Self::Conjugate => "Conjugate Method (Westside Barbell)",
            Self::LinearPeriodization => "Linear Periodization",
            Self::UndulatingPeriodization => "Undulating Periodization",
            Self::BlockPeriodization => "Block Periodization",
        }
    }

    /// Short command-line identifier
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::DynamicEffort => "dynamic-effort",
            Self::Conjugate => "conjugate",
            Self::LinearPeriodization => "linear",
            Self::UndulatingPeriodization => "undulating",
            Self::BlockPeriodization => "block",
        }
    }

    /// One-sentence summary of the method
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::DynamicEffort => "Focuses on moving submaximal weights with maximum speed to develop explosive strength.",
            Self::Conjugate => "Rotates between maximal effort and dynamic effort days, focusing on variety in exercise selection.",
            Self::LinearPeriodization => "Progressively increases intensity while decreasing volume over time.",
            Self::UndulatingPeriodization => "Varies volume and intensity more frequently, often within the same week.",
            Self::BlockPeriodization => "Focuses on specific adaptations (e.g., hypertrophy, strength, power) in distinct blocks.",
        }
    }
}

impl fmt::Display for StrengthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrengthMethod {
    type Err = String;

    /// Accepts the display name or the slug, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|method| method.name().to_lowercase() == wanted || method.slug() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown strength method '{s}' (expected one of: {})",
                    Self::ALL.map(Self::slug).join(", ")
                )
            })
    }
}

/// Sets/reps/load prescriptions for the three training phases
struct PhaseLoads {
    hypertrophy: &'static str,
    strength: &'static str,
    power: &'static str,
}

const fn phase_loads(level: SkillLevel) -> PhaseLoads {
    match level {
        SkillLevel::Beginner => PhaseLoads {
            hypertrophy: "3x10-12 @ 65-70% 1RM",
            strength: "4x6-8 @ 75-80% 1RM",
            power: "5x3-5 @ 80-85% 1RM",
        },
        SkillLevel::Intermediate => PhaseLoads {
            hypertrophy: "4x10-12 @ 70-75% 1RM",
            strength: "5x6-8 @ 77-82% 1RM",
            power: "6x3-5 @ 82-87% 1RM",
        },
        SkillLevel::Advanced => PhaseLoads {
            hypertrophy: "5x10-12 @ 72-77% 1RM",
            strength: "6x6-8 @ 80-85% 1RM",
            power: "7x3-5 @ 85-90% 1RM",
        },
    }
}

/// Render a strength & conditioning plan for `profile`
///
/// The header names the method, the capitalized skill focus, and the level;
/// the body is the method's template; three closing notes follow.
pub fn create_sc_plan<R>(method: StrengthMethod, profile: &UserProfile, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let mut plan = format!(
        "{method} Plan for {} focused {} BJJ practitioner:\n\n",
        capitalize(&profile.skill),
        profile.level.title()
    );

    let body = match method {
        StrengthMethod::DynamicEffort => dynamic_effort(profile.level, rng),
        StrengthMethod::Conjugate => conjugate(profile.level, rng),
        StrengthMethod::LinearPeriodization => linear_periodization(profile.level, rng),
        StrengthMethod::UndulatingPeriodization => undulating_periodization(profile.level, rng),
        StrengthMethod::BlockPeriodization => block_periodization(profile.level, rng),
    };
    plan.push_str(&body);

    for note in CLOSING_NOTES {
        plan.push('\n');
        plan.push_str(note);
    }
    plan
}

/// First character uppercased, the rest lowercased
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

// `writeln!` into a String cannot fail; results are discarded below.

fn dynamic_effort<R: Rng + ?Sized>(level: SkillLevel, rng: &mut R) -> String {
    let (intensity, volume) = match level {
        SkillLevel::Beginner => ("40-50% 1RM", "3x3"),
        SkillLevel::Intermediate => ("50-60% 1RM", "4x3"),
        SkillLevel::Advanced => ("60-70% 1RM", "5x3"),
    };

    let mut plan = String::from("12-Week Plan:\n\nWeeks 1-4 (Speed Strength Focus):\n");
    for (day, speed_lift) in [
        ("Monday", "Speed Squat 8x2"),
        ("Wednesday", "Speed Bench 8x3"),
        ("Friday", "Speed Deadlift 8x2"),
    ] {
        let _ = writeln!(
            plan,
            "- {day}: {} {volume} @ {intensity}, {speed_lift} @ {intensity}, {} 3x10",
            pick(&OLYMPIC_LIFTS, rng),
            pick(&ACCESSORY_EXERCISES, rng),
        );
    }
    plan.push_str("\nWeeks 5-8: Increase intensity by 5%, reduce rest times\n");
    plan.push_str("Weeks 9-12: Increase bar speed, maintain intensity\n");
    plan
}

fn conjugate<R: Rng + ?Sized>(level: SkillLevel, rng: &mut R) -> String {
    let (max_effort, dynamic_effort) = match level {
        SkillLevel::Beginner => ("80-85% 1RM", "50-60% 1RM"),
        SkillLevel::Intermediate => ("85-90% 1RM", "60-70% 1RM"),
        SkillLevel::Advanced => ("90-95% 1RM", "70-80% 1RM"),
    };

    let mut plan = String::from("12-Week Plan:\n\nWeek 1 Example:\n");
    let _ = writeln!(
        plan,
        "- Monday (ME Lower): {} 5x3 @ {max_effort}, {} 3x3, {} 3x10",
        pick(&MAX_EFFORT_EXERCISES, rng),
        pick(&OLYMPIC_LIFTS, rng),
        pick(&ACCESSORY_EXERCISES, rng),
    );
    for (session, scheme) in [("Wednesday (DE Upper)", "8x3"), ("Friday (DE Lower)", "8x2")] {
        let _ = writeln!(
            plan,
            "- {session}: {} {scheme} @ {dynamic_effort}, {} 3x3, {} 3x10",
            pick(&DYNAMIC_EFFORT_EXERCISES, rng),
            pick(&OLYMPIC_LIFTS, rng),
            pick(&ACCESSORY_EXERCISES, rng),
        );
    }
    plan.push_str("\nRotate exercises every 1-3 weeks for ME days\n");
    plan.push_str("Gradually increase bar speed and/or weight for DE days\n");
    plan
}

/// Monday/Wednesday/Friday at the same prescription
fn three_day_week<R: Rng + ?Sized>(plan: &mut String, load: &str, rng: &mut R) {
    for day in ["Monday", "Wednesday", "Friday"] {
        let _ = writeln!(
            plan,
            "- {day}: {} {load}, {} {load}, {} 3x12",
            pick(&OLYMPIC_LIFTS, rng),
            pick(&COMPOUND_EXERCISES, rng),
            pick(&ACCESSORY_EXERCISES, rng),
        );
    }
}

fn linear_periodization<R: Rng + ?Sized>(level: SkillLevel, rng: &mut R) -> String {
    let loads = phase_loads(level);
    let mut plan = String::from("12-Week Plan:\n\nWeeks 1-4 (Hypertrophy):\n");
    three_day_week(&mut plan, loads.hypertrophy, rng);
    let _ = write!(
        plan,
        "\nWeeks 5-8 (Strength): Same structure, but {}\nWeeks 9-12 (Power): Same structure, but {}\n",
        loads.strength, loads.power
    );
    plan
}

fn undulating_periodization<R: Rng + ?Sized>(level: SkillLevel, rng: &mut R) -> String {
    let loads = phase_loads(level);
    let mut plan = String::from("Weekly Plan (repeat for 12 weeks):\n\n");
    for (session, load, accessory_reps) in [
        ("Monday (Hypertrophy)", loads.hypertrophy, "3x12"),
        ("Wednesday (Strength)", loads.strength, "3x10"),
        ("Friday (Power)", loads.power, "3x8"),
    ] {
        let _ = writeln!(
            plan,
            "- {session}: {} {load}, {} {load}, {} {accessory_reps}",
            pick(&OLYMPIC_LIFTS, rng),
            pick(&COMPOUND_EXERCISES, rng),
            pick(&ACCESSORY_EXERCISES, rng),
        );
    }
    plan.push_str("\nRotate exercises weekly while maintaining the undulating structure\n");
    plan
}

fn block_periodization<R: Rng + ?Sized>(level: SkillLevel, rng: &mut R) -> String {
    let loads = phase_loads(level);
    let mut plan = String::from("12-Week Plan:\n\nWeeks 1-4 (Hypertrophy Block):\n");
    three_day_week(&mut plan, loads.hypertrophy, rng);
    let _ = write!(
        plan,
        "\nWeeks 5-8 (Strength Block): Same structure, but {}\nWeeks 9-12 (Power Block): Same structure, but {}\n",
        loads.strength, loads.power
    );
    plan.push_str("\nFocus on increasing weight and/or volume each week within each block\n");
    plan
}
