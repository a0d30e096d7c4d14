//! A model of pairwise meetings between agents with health conditions
//!
//! Each agent carries one of five conditions: CURE, HEALTHY, SICK, DYING or
//! DEAD. A round of meetings pairs off the agents that can still meet --
//! the sick, the dying, and the cure carriers -- in roster order and applies
//! a fixed transition rule to each pair: a cure carrier improves whoever it
//! meets by one step, while sick and dying agents drag each other one step
//! closer to death. Healthy and dead agents sit the round out unchanged.
//!
//! The crate exposes:
//! * [`Agent`] and [`Condition`], the value types of the model
//! * [`meet`], the transition rule for a single pair of conditions
//! * [`meetup`], one full round of meetings over an ordered roster
//!
//! ```rust
//! use ::meetup::{meetup, Agent, Condition};
//!
//! let roster = vec![
//!     Agent::new("alice", Condition::Cure),
//!     Agent::new("bob", Condition::Sick),
//! ];
//! let updated = meetup(&roster);
//! assert_eq!(updated[1].condition, Condition::Healthy);
//! ```
//!
//! A round is a pure function over its input roster: it holds no state
//! between calls and is safe to run from multiple threads at once.
pub mod agent;
pub mod error;
pub mod log;
pub mod meetup;
pub mod prelude;

pub use crate::agent::{Agent, Condition};
pub use crate::error::MeetupError;
pub use crate::meetup::{meet, meetup};
