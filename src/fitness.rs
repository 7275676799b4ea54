use crate::inflight::{Generation, Pending};
use crate::models::{FitnessPlanRequest, FitnessPlanResponse, FitnessPlanResult};
use crate::transport::{BackendClient, TransportError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const PLAN_ERROR: &str = "Error fetching fitness plan. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} option '{value}'")]
pub struct UnknownOption {
    pub field: &'static str,
    pub value: String,
}

/// Implements `label`, `ALL`, `Display` and `FromStr` over a fixed set of option labels.
macro_rules! option_set {
    ($name:ident, $field:literal, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label() == value)
                    .ok_or_else(|| UnknownOption {
                        field: $field,
                        value: value.to_string(),
                    })
            }
        }
    };
}

option_set!(Goal, "goal", {
    WeightLoss => "Weight Loss",
    MuscleGain => "Muscle Gain / Strength",
    GeneralFitness => "General Fitness & Health",
    Flexibility => "Flexibility & Mobility",
});

option_set!(ActivityLevel, "activity level", {
    Beginner => "Beginner",
    Moderate => "Moderate",
    Active => "Active",
});

option_set!(AgeGroup, "age group", {
    From18To25 => "18-25",
    From26To35 => "26-35",
    From36To45 => "36-45",
    From46 => "46+",
});

impl Default for FitnessPlanRequest {
    fn default() -> Self {
        Self {
            goal: Goal::WeightLoss,
            activity_level: ActivityLevel::Beginner,
            age_group: AgeGroup::From18To25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessState {
    Idle,
    Generating,
}

#[derive(Debug, Serialize)]
pub struct FitnessPlanner {
    selection: FitnessPlanRequest,
    state: FitnessState,
    result: FitnessPlanResult,
    #[serde(skip)]
    generation: Generation,
}

impl Default for FitnessPlanner {
    fn default() -> Self {
        Self {
            selection: FitnessPlanRequest::default(),
            state: FitnessState::Idle,
            result: FitnessPlanResult::default(),
            generation: Generation::default(),
        }
    }
}

impl FitnessPlanner {
    pub fn selection(&self) -> FitnessPlanRequest {
        self.selection
    }

    pub fn state(&self) -> FitnessState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state == FitnessState::Generating
    }

    pub fn plan(&self) -> &[String] {
        &self.result.plan
    }

    pub fn tips(&self) -> &[String] {
        &self.result.tips
    }

    pub fn begin_generate(
        &mut self,
        goal: Goal,
        activity_level: ActivityLevel,
        age_group: AgeGroup,
    ) -> Option<Pending<FitnessPlanRequest>> {
        if self.is_busy() {
            debug!("fitness plan already generating, ignoring request");
            return None;
        }

        self.selection = FitnessPlanRequest {
            goal,
            activity_level,
            age_group,
        };
        self.state = FitnessState::Generating;
        Some(Pending {
            ticket: self.generation.issue(),
            request: self.selection,
        })
    }

    /// Replaces the current plan and tips. Returns `false` if the request was stale.
    pub fn finish_generate(
        &mut self,
        pending: Pending<FitnessPlanRequest>,
        outcome: Result<FitnessPlanResponse, TransportError>,
    ) -> bool {
        if !self.generation.is_current(pending.ticket) {
            debug!("discarding stale fitness plan");
            return false;
        }

        self.result = match outcome {
            Ok(response) => response.into(),
            Err(err) => {
                warn!("fitness plan failed: {err}");
                FitnessPlanResult {
                    plan: vec![PLAN_ERROR.to_string()],
                    tips: Vec::new(),
                }
            }
        };
        self.state = FitnessState::Idle;
        true
    }

    pub fn reset(&mut self) {
        self.generation.advance();
        self.result = FitnessPlanResult::default();
        self.state = FitnessState::Idle;
    }
}

pub async fn generate(
    panel: &Mutex<FitnessPlanner>,
    client: &BackendClient,
    goal: Goal,
    activity_level: ActivityLevel,
    age_group: AgeGroup,
) -> bool {
    let Some(pending) = panel
        .lock()
        .await
        .begin_generate(goal, activity_level, age_group)
    else {
        return false;
    };
    let outcome = client.fitness_plan(&pending.request).await;
    panel.lock().await.finish_generate(pending, outcome)
}
