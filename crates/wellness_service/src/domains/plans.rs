//! Coaching plan documents and the goals they carry.
//!
//! Plans live in a content directory as `{Pillar}-{week}-{day}.json`. Only
//! files whose pillar matches one of the user's assigned programs are loaded.
//! A missing or unreadable directory yields an empty library; scoring then
//! falls back to the default targets.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::pillars::{Pillar, SleepBand};

pub const GOALS_SECTION: &str = "Overall Goals";

static PLAN_FILE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Sleep|Movement|Mindfulness|Nutrition)-(\d+)-(\d+)\.json$")
        .expect("valid plan file regex")
});

static SLEEP_TARGET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bto\s+(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)\s*hours?\b")
        .expect("valid sleep target regex")
});

/// A program assigned to the user, as supplied by the caller.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Program {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Program {
    /// A program covers a pillar when its name mentions the pillar or its
    /// category is the upper-cased pillar name.
    pub fn covers(&self, pillar: Pillar) -> bool {
        let title = pillar.title();
        self.name.to_lowercase().contains(&title.to_lowercase())
            || self.category.as_deref() == Some(title.to_uppercase().as_str())
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct PlanSection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct PlanDocument {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sections: Vec<PlanSection>,
}

impl PlanDocument {
    pub fn goals(&self) -> Option<&[String]> {
        self.sections
            .iter()
            .find(|s| s.title == GOALS_SECTION)
            .map(|s| s.items.as_slice())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlanGoal {
    pub pillar: Pillar,
    pub week: u32,
    pub day: u32,
    pub filename: String,
    pub document: PlanDocument,
}

/// Parse `Sleep-2-1.json` into `(Sleep, 2, 1)`.
pub fn parse_plan_filename(name: &str) -> Option<(Pillar, u32, u32)> {
    let caps = PLAN_FILE_RE.captures(name)?;
    let pillar = Pillar::from_title(caps.get(1)?.as_str())?;
    let week = caps.get(2)?.as_str().parse().ok()?;
    let day = caps.get(3)?.as_str().parse().ok()?;
    Some((pillar, week, day))
}

/// Target band from goal text such as "Increase sleep from 4-5 hours to
/// 5-6 hours". The first "to A-B hours" phrase wins.
pub fn parse_sleep_band(goals: &[String]) -> Option<SleepBand> {
    goals.iter().find_map(|goal| {
        let caps = SLEEP_TARGET_RE.captures(goal)?;
        let min: f64 = caps.get(1)?.as_str().parse().ok()?;
        let max: f64 = caps.get(2)?.as_str().parse().ok()?;
        (min <= max).then_some(SleepBand { min, max })
    })
}

#[derive(Clone, Debug, Default)]
pub struct PlanLibrary {
    plans: Vec<PlanGoal>,
}

impl PlanLibrary {
    /// Load every plan file in `dir` that an assigned program covers. Files
    /// are visited in name order so lookups are stable.
    pub async fn load(dir: &Path, programs: &[Program]) -> Self {
        if programs.is_empty() {
            return Self::default();
        }

        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "plan directory unreadable");
                return Self::default();
            }
        };

        let mut names = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    if let Some(name) = entry.file_name().to_str() {
                        names.push(name.to_string());
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(dir = %dir.display(), error = %e, "plan directory listing failed");
                    return Self::default();
                }
            }
        }
        names.sort();

        let mut plans = Vec::new();
        for name in names {
            let Some((pillar, week, day)) = parse_plan_filename(&name) else {
                continue;
            };
            if !programs.iter().any(|p| p.covers(pillar)) {
                continue;
            }
            let path = dir.join(&name);
            let document = match tokio::fs::read_to_string(&path).await {
                Ok(text) => match serde_json::from_str::<PlanDocument>(&text) {
                    Ok(doc) => doc,
                    Err(e) => {
                        tracing::warn!(file = %name, error = %e, "invalid plan document");
                        continue;
                    }
                },
                Err(e) => {
                    tracing::warn!(file = %name, error = %e, "plan file unreadable");
                    continue;
                }
            };
            plans.push(PlanGoal {
                pillar,
                week,
                day,
                filename: name,
                document,
            });
        }

        tracing::debug!(count = plans.len(), "loaded plan files for assigned programs");
        Self { plans }
    }

    pub fn for_pillar(&self, pillar: Pillar) -> Option<&PlanGoal> {
        self.plans.iter().find(|p| p.pillar == pillar)
    }

    /// Sleep target band from the sleep plan's goals, or the default band.
    pub fn sleep_band(&self) -> SleepBand {
        self.for_pillar(Pillar::Sleep)
            .and_then(|p| p.document.goals())
            .and_then(parse_sleep_band)
            .unwrap_or_default()
    }

    pub fn plans(&self) -> &[PlanGoal] {
        &self.plans
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
