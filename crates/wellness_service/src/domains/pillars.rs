//! Per-pillar scorers. Every score lands on the 0-5 scale.

use serde::Serialize;

/// Neutral mindfulness score used until a mindfulness signal exists.
pub const MINDFULNESS_NEUTRAL: f64 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pillar {
    Sleep,
    Movement,
    Mindfulness,
    Nutrition,
}

impl Pillar {
    /// Order used when picking the best or worst pillar. On ties the later
    /// entry wins.
    pub const TRAVERSAL: [Pillar; 4] = [
        Pillar::Movement,
        Pillar::Sleep,
        Pillar::Mindfulness,
        Pillar::Nutrition,
    ];

    /// Capitalised name as used in plan file names.
    pub fn title(self) -> &'static str {
        match self {
            Pillar::Sleep => "Sleep",
            Pillar::Movement => "Movement",
            Pillar::Mindfulness => "Mindfulness",
            Pillar::Nutrition => "Nutrition",
        }
    }

    pub fn from_title(s: &str) -> Option<Self> {
        match s {
            "Sleep" => Some(Pillar::Sleep),
            "Movement" => Some(Pillar::Movement),
            "Mindfulness" => Some(Pillar::Mindfulness),
            "Nutrition" => Some(Pillar::Nutrition),
            _ => None,
        }
    }
}

/// Target sleep duration in hours that earns the full duration sub-score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SleepBand {
    pub min: f64,
    pub max: f64,
}

impl Default for SleepBand {
    fn default() -> Self {
        Self { min: 7.0, max: 9.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PillarScores {
    pub sleep: f64,
    pub movement: f64,
    pub mindfulness: f64,
    pub nutrition: f64,
}

impl PillarScores {
    pub fn get(&self, pillar: Pillar) -> f64 {
        match pillar {
            Pillar::Sleep => self.sleep,
            Pillar::Movement => self.movement,
            Pillar::Mindfulness => self.mindfulness,
            Pillar::Nutrition => self.nutrition,
        }
    }

    /// Scores in [`Pillar::TRAVERSAL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Pillar, f64)> + '_ {
        Pillar::TRAVERSAL.into_iter().map(|p| (p, self.get(p)))
    }

    pub fn values(&self) -> [Option<f64>; 4] {
        [
            Some(self.sleep),
            Some(self.movement),
            Some(self.mindfulness),
            Some(self.nutrition),
        ]
    }
}

fn sleep_duration_score(hours: f64, band: &SleepBand) -> f64 {
    if hours >= band.min && hours <= band.max {
        5.0
    } else if (6.0..7.0).contains(&hours) {
        3.5
    } else if (5.0..6.0).contains(&hours) {
        2.0
    } else if (4.0..5.0).contains(&hours) {
        1.0
    } else if hours > 9.0 && hours <= 10.0 {
        4.0
    } else {
        0.5
    }
}

/// Sleep score from average nightly minutes and optional quality (0-100).
///
/// A quality of `None` or `<= 0` leaves the duration sub-score standing alone;
/// otherwise the two sub-scores are averaged.
pub fn sleep_score(minutes: f64, quality: Option<f64>, band: &SleepBand) -> f64 {
    let duration = sleep_duration_score(minutes / 60.0, band);
    match quality {
        Some(q) if q > 0.0 => {
            let quality_score = q / 100.0 * 5.0;
            ((duration + quality_score) / 2.0).min(5.0)
        }
        _ => duration,
    }
}

fn steps_score(steps: f64) -> f64 {
    match steps {
        s if s >= 10_000.0 => 5.0,
        s if s >= 7_500.0 => 4.0,
        s if s >= 5_000.0 => 3.0,
        s if s >= 2_500.0 => 2.0,
        s if s >= 1_000.0 => 1.0,
        _ => 0.0,
    }
}

fn exercise_score(minutes: f64) -> f64 {
    match minutes {
        m if m >= 30.0 => 5.0,
        m if m >= 20.0 => 4.0,
        m if m >= 15.0 => 3.0,
        m if m >= 10.0 => 2.0,
        m if m >= 5.0 => 1.0,
        _ => 0.0,
    }
}

/// Weighted blend of daily steps (40%) and exercise minutes (60%).
pub fn movement_score(steps: f64, exercise_minutes: f64) -> f64 {
    (steps_score(steps) * 0.4 + exercise_score(exercise_minutes) * 0.6).min(5.0)
}

/// No mindfulness signal is collected yet, so every profile gets the neutral
/// score.
pub fn mindfulness_score() -> f64 {
    MINDFULNESS_NEUTRAL
}

/// Meal-plan compliance percentage mapped onto the 0-5 scale.
pub fn nutrition_score(compliance: f64) -> f64 {
    compliance.clamp(0.0, 100.0) / 100.0 * 5.0
}
