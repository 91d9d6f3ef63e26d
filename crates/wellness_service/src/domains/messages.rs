//! Motivational message selection.
//!
//! The overall score picks a tier. The high tier celebrates the best pillar
//! and the moderate tier nudges the worst one. The low tier draws from a
//! single start-tracking pool. Within a pool the line is chosen uniformly by
//! a [`PoolPicker`].

use super::overall::round_to_tenth;
use super::pillars::{Pillar, PillarScores};
use super::pools::{self, Line};
use super::profile::Profile;

pub const HIGH_THRESHOLD: f64 = 3.5;
pub const MODERATE_THRESHOLD: f64 = 1.5;

const STEPS_GOAL: i64 = 10_000;
const SLEEP_GOAL_HOURS: f64 = 7.0;
const LOW_QUALITY_PERCENT: f64 = 70.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    High,
    Moderate,
    Low,
}

impl Tier {
    pub fn classify(overall: f64) -> Self {
        if overall >= HIGH_THRESHOLD {
            Tier::High
        } else if overall >= MODERATE_THRESHOLD {
            Tier::Moderate
        } else {
            Tier::Low
        }
    }
}

/// Source of the index drawn from a pool of `len` lines.
pub trait PoolPicker: Send + Sync {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform picks from the calling thread's RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngPicker;

impl PoolPicker for ThreadRngPicker {
    fn pick(&self, len: usize) -> usize {
        rand::random_range(0..len)
    }
}

/// Highest-scoring pillar; on a tie the later pillar in traversal order wins.
pub fn best_pillar(scores: &PillarScores) -> Pillar {
    let mut best = (Pillar::TRAVERSAL[0], f64::NEG_INFINITY);
    for (pillar, score) in scores.iter() {
        if score >= best.1 {
            best = (pillar, score);
        }
    }
    best.0
}

/// Lowest-scoring pillar; on a tie the later pillar in traversal order wins.
pub fn worst_pillar(scores: &PillarScores) -> Pillar {
    let mut worst = (Pillar::TRAVERSAL[0], f64::INFINITY);
    for (pillar, score) in scores.iter() {
        if score <= worst.1 {
            worst = (pillar, score);
        }
    }
    worst.0
}

/// Group an integer with commas, `1234567` -> `1,234,567`.
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Shortest decimal form, with `7.0` printed as `7` and no negative zero.
pub fn format_number(n: f64) -> String {
    format!("{}", n + 0.0)
}

/// Live metrics interpolated into the pool templates.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageContext {
    pub steps: i64,
    pub exercise_minutes: f64,
    pub sleep_hours: f64,
    pub sleep_quality: Option<f64>,
    pub meal_compliance: f64,
}

impl MessageContext {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            steps: profile.steps.round() as i64,
            exercise_minutes: profile.exercise_minutes,
            sleep_hours: round_to_tenth(profile.sleep_minutes / 60.0),
            sleep_quality: profile.sleep_quality.filter(|q| *q > 0.0),
            meal_compliance: profile.meal_compliance.round(),
        }
    }

    /// Choose the template variant a line resolves to for these metrics.
    pub fn template(&self, line: &Line) -> &'static str {
        match *line {
            Line::Text(text) => text,
            Line::WithQuality { with, without } => {
                if self.sleep_quality.is_some() {
                    with
                } else {
                    without
                }
            }
            Line::LowQuality { low, otherwise } => match self.sleep_quality {
                Some(q) if q < LOW_QUALITY_PERCENT => low,
                _ => otherwise,
            },
            Line::ComplianceAbove {
                threshold,
                above,
                otherwise,
            } => {
                if self.meal_compliance > threshold {
                    above
                } else {
                    otherwise
                }
            }
        }
    }

    pub fn fill(&self, template: &str) -> String {
        if !template.contains('{') {
            return template.to_string();
        }
        let gap = SLEEP_GOAL_HOURS - self.sleep_hours;
        let sleep_more = if gap > 0.0 {
            format!("{} more", format_number(round_to_tenth(gap)))
        } else {
            "consistency".to_string()
        };
        let quality = self
            .sleep_quality
            .map(format_number)
            .unwrap_or_default();

        template
            .replace("{steps_left}", &format_thousands(STEPS_GOAL - self.steps))
            .replace("{steps}", &format_thousands(self.steps))
            .replace("{exercise}", &format_number(self.exercise_minutes))
            .replace("{hours}", &format_number(self.sleep_hours))
            .replace("{quality}", &quality)
            .replace("{sleep_more}", &sleep_more)
            .replace("{sleep_gap_minutes}", &format_number((gap * 60.0).round()))
            .replace("{compliance_gap}", &format_number(100.0 - self.meal_compliance))
            .replace("{compliance}", &format_number(self.meal_compliance))
    }

    pub fn render(&self, line: &Line) -> String {
        self.fill(self.template(line))
    }
}

fn pick_line<'a>(pool: &'a [Line], picker: &dyn PoolPicker) -> Option<&'a Line> {
    if pool.is_empty() {
        return None;
    }
    pool.get(picker.pick(pool.len()).min(pool.len() - 1))
}

/// Pick a message for `overall`, drawing from the pool its tier selects.
pub fn select_message(
    overall: f64,
    scores: &PillarScores,
    ctx: &MessageContext,
    picker: &dyn PoolPicker,
) -> String {
    match Tier::classify(overall) {
        Tier::High => {
            let pillar = best_pillar(scores);
            pick_line(pools::celebration(pillar), picker)
                .map(|line| ctx.render(line))
                .unwrap_or_else(|| pools::HIGH_FALLBACK.to_string())
        }
        Tier::Moderate => {
            let pillar = worst_pillar(scores);
            pick_line(pools::encouragement(pillar), picker)
                .map(|line| ctx.render(line))
                .unwrap_or_else(|| pools::MODERATE_FALLBACK.to_string())
        }
        Tier::Low => pick_line(pools::LOW_TRACKING, picker)
            .map(|line| ctx.render(line))
            .unwrap_or_else(|| pools::NO_DATA_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Walks the pool in order so every line gets exercised.
    struct SequencePicker(AtomicUsize);

    impl PoolPicker for SequencePicker {
        fn pick(&self, len: usize) -> usize {
            self.0.fetch_add(1, Ordering::Relaxed) % len
        }
    }

    fn ctx() -> MessageContext {
        MessageContext {
            steps: 8_432,
            exercise_minutes: 25.0,
            sleep_hours: 6.5,
            sleep_quality: Some(64.0),
            meal_compliance: 40.0,
        }
    }

    fn scores(sleep: f64, movement: f64, mindfulness: f64, nutrition: f64) -> PillarScores {
        PillarScores {
            sleep,
            movement,
            mindfulness,
            nutrition,
        }
    }

    fn rendered(pool: &[Line], ctx: &MessageContext) -> Vec<String> {
        pool.iter().map(|l| ctx.render(l)).collect()
    }

    #[test]
    fn tiers() {
        assert_eq!(Tier::classify(4.0), Tier::High);
        assert_eq!(Tier::classify(3.5), Tier::High);
        assert_eq!(Tier::classify(3.49), Tier::Moderate);
        assert_eq!(Tier::classify(1.5), Tier::Moderate);
        assert_eq!(Tier::classify(1.4), Tier::Low);
    }

    #[test]
    fn high_tier_draws_from_best_pillar_pool() {
        let s = scores(4.0, 5.0, 2.5, 4.5);
        let c = ctx();
        let pool = rendered(pools::celebration(Pillar::Movement), &c);
        for _ in 0..50 {
            let msg = select_message(4.0, &s, &c, &ThreadRngPicker);
            assert!(pool.contains(&msg), "{msg}");
        }
    }

    #[test]
    fn moderate_tier_draws_from_worst_pillar_pool() {
        let s = scores(3.5, 2.8, 2.5, 1.0);
        let c = ctx();
        let pool = rendered(pools::encouragement(Pillar::Nutrition), &c);
        let picker = SequencePicker(AtomicUsize::new(0));
        for _ in 0..20 {
            let msg = select_message(2.5, &s, &c, &picker);
            assert!(pool.contains(&msg), "{msg}");
        }
    }

    #[test]
    fn low_tier_ignores_pillars() {
        let c = ctx();
        let pool = rendered(pools::LOW_TRACKING, &c);
        let msg = select_message(0.8, &scores(5.0, 0.0, 0.0, 0.0), &c, &ThreadRngPicker);
        assert!(pool.contains(&msg));
    }

    #[test]
    fn ties_go_to_the_later_pillar() {
        let even = scores(2.5, 2.5, 2.5, 2.5);
        assert_eq!(best_pillar(&even), Pillar::Nutrition);
        assert_eq!(worst_pillar(&even), Pillar::Nutrition);
        let s = scores(5.0, 5.0, 2.5, 0.0);
        assert_eq!(best_pillar(&s), Pillar::Sleep);
        let s = scores(0.0, 0.0, 2.5, 4.0);
        assert_eq!(worst_pillar(&s), Pillar::Sleep);
    }

    #[test]
    fn placeholders_are_filled() {
        let c = ctx();
        assert_eq!(
            c.fill("{steps} steps - you're {steps_left} away from 10K! 🎯"),
            "8,432 steps - you're 1,568 away from 10K! 🎯"
        );
        assert_eq!(
            c.fill("{hours} hours of sleep. Your body wants {sleep_more}! 💤"),
            "6.5 hours of sleep. Your body wants 0.5 more! 💤"
        );
        assert_eq!(
            c.fill("At {hours}h, you're {sleep_gap_minutes} minutes from optimal! ⏰"),
            "At 6.5h, you're 30 minutes from optimal! ⏰"
        );
        assert_eq!(
            c.fill("{compliance}% compliance. You're {compliance_gap}% away"),
            "40% compliance. You're 60% away"
        );
    }

    #[test]
    fn enough_sleep_asks_for_consistency() {
        let c = MessageContext {
            sleep_hours: 7.5,
            ..ctx()
        };
        assert_eq!(c.fill("wants {sleep_more}"), "wants consistency");
    }

    #[test]
    fn conditional_lines_follow_metrics() {
        let line = Line::LowQuality {
            low: "low {quality}",
            otherwise: "{hours}h",
        };
        assert_eq!(ctx().render(&line), "low 64");
        let good = MessageContext {
            sleep_quality: Some(85.0),
            ..ctx()
        };
        assert_eq!(good.render(&line), "6.5h");

        let line = Line::ComplianceAbove {
            threshold: 20.0,
            above: "{compliance}%",
            otherwise: "start",
        };
        assert_eq!(ctx().render(&line), "40%");
        let none = MessageContext {
            meal_compliance: 0.0,
            ..ctx()
        };
        assert_eq!(none.render(&line), "start");
    }

    #[test]
    fn thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(-2_500), "-2,500");
    }

    #[test]
    fn numbers_drop_trailing_zero() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(6.5), "6.5");
        assert_eq!(format_number(-0.0), "0");
    }
}
