//! The meetup processor.
//!
//! A round of meetings runs in four steps:
//! 1. Partition the roster into participants (SICK, DYING, CURE) and
//!    bystanders (HEALTHY, DEAD), each group keeping its input order.
//! 2. Pair participants consecutively in roster order: (1st, 2nd),
//!    (3rd, 4th), and so on. With an odd count the last participant has no
//!    one to meet and is carried through unchanged.
//! 3. Apply the [`meet`] rule to each pair.
//! 4. Reassemble: processed participants first, then the bystanders in
//!    their original relative order.
//!
//! The output roster may therefore be ordered differently from the input,
//! but it always holds exactly the same agents by name.

use crate::agent::{Agent, Condition};
use crate::log::trace;

/// The transition rule for a single meeting, as a total function over an
/// ordered pair of conditions.
///
/// A cure carrier improves the agent it meets by one step (DYING to SICK,
/// SICK to HEALTHY) and is never harmed itself. Sick and dying agents drag
/// each other one step closer to death. Two cure carriers have nothing to
/// trade. Symmetric inputs produce symmetric outcomes.
///
/// HEALTHY and DEAD never reach this table; [`meetup`] filters them out
/// before pairing. Pairs outside the table fall through unchanged.
#[must_use]
pub fn meet(a: Condition, b: Condition) -> (Condition, Condition) {
    use crate::agent::Condition::{Cure, Dead, Dying, Healthy, Sick};
    match (a, b) {
        (Cure, Sick) => (Cure, Healthy),
        (Cure, Dying) => (Cure, Sick),
        (Sick, Cure) => (Healthy, Cure),
        (Dying, Cure) => (Sick, Cure),
        (Sick, Sick) => (Dying, Dying),
        (Sick, Dying) => (Dying, Dead),
        (Dying, Sick) => (Dead, Dying),
        (Dying, Dying) => (Dead, Dead),
        // CURE/CURE, plus anything that never reaches the table.
        _ => (a, b),
    }
}

/// Models the outcome of one round of meetings over an ordered roster.
///
/// Participants are paired in roster order and updated per [`meet`]; with an
/// odd participant count the last one is unchanged. Bystanders (HEALTHY and
/// DEAD agents) are appended after the participants in their original
/// relative order. The output always has the same length and the same names
/// as the input; only conditions change.
#[must_use]
pub fn meetup(agents: &[Agent]) -> Vec<Agent> {
    let (participants, bystanders) = partition(agents);
    trace!(
        "Processing a round of meetings: {} participants, {} bystanders",
        participants.len(),
        bystanders.len()
    );

    let mut updated = Vec::with_capacity(agents.len());
    let mut pairs = participants.chunks_exact(2);
    for pair in pairs.by_ref() {
        if let [a, b] = pair {
            let (next_a, next_b) = meet(a.condition, b.condition);
            trace!("{} meets {}: {} / {}", a, b, next_a, next_b);
            updated.push(a.with_condition(next_a));
            updated.push(b.with_condition(next_b));
        }
    }
    // Odd participant count: the last agent found no one to meet.
    updated.extend(pairs.remainder().iter().cloned());
    updated.extend(bystanders);
    updated
}

/// Splits a roster into the agents that join meetups and the agents that sit
/// them out, each preserving input order.
fn partition(agents: &[Agent]) -> (Vec<Agent>, Vec<Agent>) {
    agents
        .iter()
        .cloned()
        .partition(|agent| agent.condition.participates())
}
