//! Conversation state carried between turns.
//!
//! The host persists this value and hands it back on the next turn. At most
//! one sub-dialogue can be pending, which [`DialogueMode`] makes structural.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::debug;

/// Which clarifying question, if any, the previous turn asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogueMode {
    /// No sub-dialogue is pending.
    #[default]
    Idle,
    /// The bot asked for a favorite color; the next turn gets a fashion tip.
    AwaitingFashionAnswer,
    /// The bot asked which kind of health tip; the next turn gets one.
    AwaitingHealthAnswer,
}

/// The state bag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    /// Turns seen since the state was created, minus one. Never read by
    /// routing.
    pub counter: u64,
    /// Pending sub-dialogue.
    #[serde(default)]
    pub mode: DialogueMode,
    /// A fashion tip was the previous reply.
    #[serde(default)]
    pub fashion_tip_given: bool,
}

impl ConversationState {
    /// Normalizes the incoming state for a new turn.
    ///
    /// An absent state starts over at `counter == 0`; a present one has its
    /// counter bumped.
    #[must_use]
    pub fn advance(prior: Option<Self>) -> Self {
        match prior {
            None => Self::default(),
            Some(mut state) => {
                state.counter = state.counter.saturating_add(1);
                state
            }
        }
    }

    /// Reads a host-supplied bag. Null, malformed, or counter-less bags
    /// count as absent.
    #[must_use]
    pub fn from_bag(bag: Option<JsonValue>) -> Option<Self> {
        let bag = bag.filter(|v| !v.is_null())?;
        serde_json::from_value(bag)
            .inspect_err(|e| debug!(error = %e, "discarding unreadable conversation state"))
            .ok()
    }

    /// The previous turn asked a fashion question.
    #[must_use]
    pub fn asking_preference(&self) -> bool {
        self.mode == DialogueMode::AwaitingFashionAnswer
    }

    /// The previous turn asked a health question.
    #[must_use]
    pub fn asking_health_condition(&self) -> bool {
        self.mode == DialogueMode::AwaitingHealthAnswer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_state_starts_at_zero() {
        let state = ConversationState::advance(None);
        assert_eq!(state.counter, 0);
        assert_eq!(state.mode, DialogueMode::Idle);
        assert!(!state.fashion_tip_given);
    }

    #[test]
    fn present_state_bumps_counter_and_keeps_flags() {
        let prior = ConversationState {
            counter: 4,
            mode: DialogueMode::AwaitingHealthAnswer,
            fashion_tip_given: true,
        };
        let state = ConversationState::advance(Some(prior));
        assert_eq!(state.counter, 5);
        assert!(state.asking_health_condition());
        assert!(state.fashion_tip_given);
    }

    #[test]
    fn bag_without_counter_is_absent() {
        let bag = json!({"mode": "awaiting_fashion_answer"});
        assert_eq!(ConversationState::from_bag(Some(bag)), None);
    }

    #[test]
    fn null_and_garbage_bags_are_absent() {
        assert_eq!(ConversationState::from_bag(None), None);
        assert_eq!(ConversationState::from_bag(Some(JsonValue::Null)), None);
        assert_eq!(ConversationState::from_bag(Some(json!("counter"))), None);
        assert_eq!(ConversationState::from_bag(Some(json!({"counter": -1}))), None);
    }

    #[test]
    fn bag_with_only_counter_defaults_the_rest() {
        let state = ConversationState::from_bag(Some(json!({"counter": 7}))).expect("state");
        assert_eq!(state.counter, 7);
        assert_eq!(state.mode, DialogueMode::Idle);
    }

    #[test]
    fn serialized_shape() {
        let state = ConversationState {
            counter: 2,
            mode: DialogueMode::AwaitingFashionAnswer,
            fashion_tip_given: false,
        };
        assert_eq!(
            serde_json::to_value(&state).expect("serialize"),
            json!({"counter": 2, "mode": "awaiting_fashion_answer", "fashion_tip_given": false})
        );
    }
}
