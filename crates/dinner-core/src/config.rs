//! dinner.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::types::{HostingCapability, Participant, SeatCapacity};

const DEFAULT_TEAM_SIZE: u32 = 2;

/// One course of the dinner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealClass {
    pub label: String,
}

impl MealClass {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
        }
    }

    pub fn appetizer() -> Self {
        Self::new("Appetizer")
    }

    pub fn main_course() -> Self {
        Self::new("Main course")
    }

    pub fn dessert() -> Self {
        Self::new("Dessert")
    }

    pub fn default_meals() -> Vec<MealClass> {
        vec![Self::appetizer(), Self::main_course(), Self::dessert()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunningDinnerConfig {
    #[serde(default = "default_team_size")]
    pub team_size: u32,
    /// Classify participants by their declared seats before balancing.
    /// When false, the whole pool is split purely by running count.
    #[serde(default = "default_strict")]
    pub strict_capacity_balancing: bool,
    #[serde(default = "MealClass::default_meals")]
    pub meals: Vec<MealClass>,
}

fn default_team_size() -> u32 {
    DEFAULT_TEAM_SIZE
}

fn default_strict() -> bool {
    true
}

impl Default for RunningDinnerConfig {
    fn default() -> Self {
        Self {
            team_size: DEFAULT_TEAM_SIZE,
            strict_capacity_balancing: true,
            meals: MealClass::default_meals(),
        }
    }
}

impl RunningDinnerConfig {
    pub fn builder() -> RunningDinnerConfigBuilder {
        RunningDinnerConfigBuilder::default()
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: RunningDinnerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Scaffold a dinner.toml with the standard three courses.
    pub fn scaffold() -> Self {
        Self::default()
    }

    pub fn course_count(&self) -> u32 {
        self.meals.len() as u32
    }

    /// Seats a host needs to seat every team once per course.
    pub fn needed_seats(&self) -> u32 {
        self.team_size * self.course_count()
    }

    pub fn can_host(&self, participant: &Participant) -> HostingCapability {
        match participant.seats {
            SeatCapacity::Undefined => HostingCapability::Unknown,
            SeatCapacity::Seats(n) if n >= self.needed_seats() => HostingCapability::Yes,
            SeatCapacity::Seats(_) => HostingCapability::No,
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.team_size == 0 {
            return Err(CoreError::InvalidConfig("team_size must be at least 1".into()));
        }
        if self.meals.is_empty() {
            return Err(CoreError::InvalidConfig("at least one meal is required".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunningDinnerConfigBuilder {
    team_size: Option<u32>,
    meals: Option<Vec<MealClass>>,
    strict_capacity_balancing: Option<bool>,
}

impl RunningDinnerConfigBuilder {
    pub fn team_size(mut self, team_size: u32) -> Self {
        self.team_size = Some(team_size);
        self
    }

    pub fn meals(mut self, meals: Vec<MealClass>) -> Self {
        self.meals = Some(meals);
        self
    }

    pub fn strict_capacity_balancing(mut self, strict: bool) -> Self {
        self.strict_capacity_balancing = Some(strict);
        self
    }

    pub fn build(self) -> CoreResult<RunningDinnerConfig> {
        let defaults = RunningDinnerConfig::default();
        let config = RunningDinnerConfig {
            team_size: self.team_size.unwrap_or(defaults.team_size),
            strict_capacity_balancing: self
                .strict_capacity_balancing
                .unwrap_or(defaults.strict_capacity_balancing),
            meals: self.meals.unwrap_or(defaults.meals),
        };
        config.validate()?;
        Ok(config)
    }
}
