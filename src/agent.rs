//! The value types of the model: [`Agent`] and its [`Condition`].
//!
//! Agents are immutable values. A meeting never mutates an agent in place;
//! it produces a new `Agent` with the same name and an updated condition via
//! [`Agent::with_condition`].

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MeetupError;

/// The health condition of an [`Agent`]. The set is closed; there is no
/// catch-all variant and no extension mechanism.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    /// Carries the cure. Improves whoever it meets and is never harmed.
    Cure,
    /// Neither infects nor gets infected. Sits meetups out.
    Healthy,
    Sick,
    Dying,
    Dead,
}

impl Condition {
    /// Whether an agent in this condition takes part in meetups. The healthy
    /// have nothing to spread and the dead do not show up; everyone else
    /// gets paired.
    #[must_use]
    pub fn participates(self) -> bool {
        matches!(self, Condition::Cure | Condition::Sick | Condition::Dying)
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Condition::Cure => "CURE",
            Condition::Healthy => "HEALTHY",
            Condition::Sick => "SICK",
            Condition::Dying => "DYING",
            Condition::Dead => "DEAD",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Condition {
    type Err = MeetupError;

    /// Parses a canonical condition name. Anything outside the closed set is
    /// rejected here, at construction time, so malformed conditions never
    /// reach the meetup processor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CURE" => Ok(Condition::Cure),
            "HEALTHY" => Ok(Condition::Healthy),
            "SICK" => Ok(Condition::Sick),
            "DYING" => Ok(Condition::Dying),
            "DEAD" => Ok(Condition::Dead),
            other => Err(MeetupError::UnknownCondition(other.to_string())),
        }
    }
}

/// A named agent with a health condition. The name is an opaque identifier;
/// the model never compares or orders agents by it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub condition: Condition,
}

impl Agent {
    #[must_use]
    pub fn new(name: impl Into<String>, condition: Condition) -> Agent {
        Agent {
            name: name.into(),
            condition,
        }
    }

    /// Returns a copy of this agent with the condition replaced. The name is
    /// always preserved.
    #[must_use]
    pub fn with_condition(&self, condition: Condition) -> Agent {
        Agent {
            name: self.name.clone(),
            condition,
        }
    }
}

impl Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.condition)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Agent, Condition};
    use crate::error::MeetupError;

    const ALL_CONDITIONS: [Condition; 5] = [
        Condition::Cure,
        Condition::Healthy,
        Condition::Sick,
        Condition::Dying,
        Condition::Dead,
    ];

    #[test]
    fn display_and_parse_round_trip() {
        for condition in ALL_CONDITIONS {
            let parsed = Condition::from_str(&condition.to_string()).unwrap();
            assert_eq!(parsed, condition);
        }
    }

    #[test]
    fn unknown_condition_is_rejected() {
        let result = Condition::from_str("ZOMBIE");
        assert!(matches!(
            result,
            Err(MeetupError::UnknownCondition(name)) if name == "ZOMBIE"
        ));
        // Parsing is case-sensitive; only the canonical names are accepted.
        assert!(Condition::from_str("sick").is_err());
    }

    #[test]
    fn participation_is_limited_to_cure_sick_and_dying() {
        let participating: Vec<Condition> = ALL_CONDITIONS
            .into_iter()
            .filter(|c| c.participates())
            .collect();
        assert_eq!(
            participating,
            vec![Condition::Cure, Condition::Sick, Condition::Dying]
        );
    }

    #[test]
    fn with_condition_preserves_the_name() {
        let agent = Agent::new("alice", Condition::Sick);
        let updated = agent.with_condition(Condition::Dying);
        assert_eq!(updated.name, "alice");
        assert_eq!(updated.condition, Condition::Dying);
        // The original value is untouched.
        assert_eq!(agent.condition, Condition::Sick);
    }
}
