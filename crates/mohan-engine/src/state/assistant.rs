use mohan_types::{CannedReply, ChatMessage, Role, Scenario};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use crate::responder::AssistantRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssistantPhase {
    Idle,
    Thinking,
}

/// What to do with a submission that arrives while a reply is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BusyPolicy {
    /// Drop the new submission; the input text is kept.
    #[default]
    Ignore,
    /// Accept it and answer after the pending reply lands.
    Queue,
    /// Accept it and discard the pending reply when it arrives.
    Replace,
}

impl fmt::Display for BusyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BusyPolicy::Ignore => "ignore",
            BusyPolicy::Queue => "queue",
            BusyPolicy::Replace => "replace",
        })
    }
}

impl FromStr for BusyPolicy {
    type Err = mohan_types::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(BusyPolicy::Ignore),
            "queue" => Ok(BusyPolicy::Queue),
            "replace" => Ok(BusyPolicy::Replace),
            _ => Err(mohan_types::Error::UnknownVariant {
                kind: "busy policy",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only text.
    Rejected,
    /// Busy and the policy says drop it.
    Ignored,
    /// Waiting behind the in-flight request.
    Queued,
    /// Became the in-flight request; the runtime must schedule its reply.
    Scheduled(AssistantRequest),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeliverOutcome {
    /// Reply appended. `next` is the queued request that is now in flight.
    Delivered { next: Option<AssistantRequest> },
    /// Ticket doesn't match the in-flight request (superseded or reset).
    Discarded,
}

/// Chat log plus the `Idle → Thinking → Idle` lifecycle.
#[derive(Debug, Clone, Serialize)]
pub struct AssistantState {
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// Scenario tag sent with employee submissions.
    pub scenario: Scenario,
    pub phase: AssistantPhase,
    #[serde(skip)]
    in_flight: Option<AssistantRequest>,
    #[serde(skip)]
    queue: VecDeque<AssistantRequest>,
    #[serde(skip)]
    next_message_id: u64,
    #[serde(skip)]
    next_ticket: u64,
}

impl Default for AssistantState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            input: String::new(),
            scenario: Scenario::default(),
            phase: AssistantPhase::Idle,
            in_flight: None,
            queue: VecDeque::new(),
            next_message_id: 1,
            next_ticket: 1,
        }
    }
}

impl AssistantState {
    pub fn is_thinking(&self) -> bool {
        self.phase == AssistantPhase::Thinking
    }

    pub fn in_flight(&self) -> Option<&AssistantRequest> {
        self.in_flight.as_ref()
    }

    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Back to the initial state. Id counters keep counting so replies
    /// issued before the reset can never match a later request.
    pub fn reset(&mut self) {
        *self = Self {
            next_message_id: self.next_message_id,
            next_ticket: self.next_ticket,
            ..Self::default()
        };
    }

    pub fn submit(
        &mut self,
        text: &str,
        role: Role,
        scenario: Option<Scenario>,
        policy: BusyPolicy,
    ) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Rejected;
        }
        if self.is_thinking() && policy == BusyPolicy::Ignore {
            return SubmitOutcome::Ignored;
        }

        let id = self.take_message_id();
        self.messages.push(ChatMessage::user(id, text));
        self.input.clear();

        let request = AssistantRequest {
            ticket: self.next_ticket,
            role,
            scenario: match role {
                Role::Manager => None,
                Role::Employee => scenario,
            },
            prompt: text.to_string(),
        };
        self.next_ticket += 1;

        if self.is_thinking() && policy == BusyPolicy::Queue {
            self.queue.push_back(request);
            return SubmitOutcome::Queued;
        }

        self.phase = AssistantPhase::Thinking;
        self.in_flight = Some(request.clone());
        SubmitOutcome::Scheduled(request)
    }

    pub fn deliver(&mut self, ticket: u64, reply: CannedReply) -> DeliverOutcome {
        if self.in_flight.as_ref().map(|r| r.ticket) != Some(ticket) {
            return DeliverOutcome::Discarded;
        }

        let id = self.take_message_id();
        self.messages.push(ChatMessage::assistant(id, reply));

        self.in_flight = self.queue.pop_front();
        if self.in_flight.is_none() {
            self.phase = AssistantPhase::Idle;
        }
        DeliverOutcome::Delivered {
            next: self.in_flight.clone(),
        }
    }

    fn take_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mohan_types::Sender;

    fn reply(text: &str) -> CannedReply {
        CannedReply {
            content: text.to_string(),
            payload: None,
        }
    }

    fn ticket(outcome: &SubmitOutcome) -> u64 {
        match outcome {
            SubmitOutcome::Scheduled(req) => req.ticket,
            other => panic!("expected Scheduled, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_submission_is_rejected() {
        let mut state = AssistantState::default();
        let outcome = state.submit("   \t", Role::Manager, None, BusyPolicy::Ignore);
        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(state.messages.is_empty());
        assert_eq!(state.phase, AssistantPhase::Idle);
    }

    #[test]
    fn test_submit_then_deliver_cycles_phase() {
        let mut state = AssistantState::default();
        state.input = "why?".to_string();
        let t = ticket(&state.submit("why?", Role::Manager, None, BusyPolicy::Ignore));

        assert!(state.is_thinking());
        assert!(state.input.is_empty());
        assert_eq!(state.messages.len(), 1);
        assert_eq!(state.messages[0].sender, Sender::User);

        let outcome = state.deliver(t, reply("because"));
        assert_eq!(outcome, DeliverOutcome::Delivered { next: None });
        assert_eq!(state.phase, AssistantPhase::Idle);
        assert_eq!(state.messages.len(), 2);
        assert_eq!(state.messages[1].content, "because");
    }

    #[test]
    fn test_manager_requests_drop_scenario() {
        let mut state = AssistantState::default();
        let outcome = state.submit("q", Role::Manager, Some(Scenario::Report), BusyPolicy::Ignore);
        match outcome {
            SubmitOutcome::Scheduled(req) => assert_eq!(req.scenario, None),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_ignore_policy_keeps_input() {
        let mut state = AssistantState::default();
        state.submit("first", Role::Employee, None, BusyPolicy::Ignore);
        state.input = "second".to_string();

        let outcome = state.submit("second", Role::Employee, None, BusyPolicy::Ignore);
        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(state.input, "second");
        assert_eq!(state.messages.len(), 1);
    }

    #[test]
    fn test_queue_policy_answers_in_order() {
        let mut state = AssistantState::default();
        let first = ticket(&state.submit("one", Role::Employee, None, BusyPolicy::Queue));
        let outcome = state.submit("two", Role::Employee, Some(Scenario::Report), BusyPolicy::Queue);
        assert_eq!(outcome, SubmitOutcome::Queued);
        assert_eq!(state.queued(), 1);

        let next = match state.deliver(first, reply("r1")) {
            DeliverOutcome::Delivered { next: Some(req) } => req,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(next.prompt, "two");
        assert!(state.is_thinking());

        assert_eq!(
            state.deliver(next.ticket, reply("r2")),
            DeliverOutcome::Delivered { next: None }
        );
        assert!(!state.is_thinking());
        let contents: Vec<&str> = state.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["one", "two", "r1", "r2"]);
    }

    #[test]
    fn test_replace_policy_discards_stale_reply() {
        let mut state = AssistantState::default();
        let old = ticket(&state.submit("one", Role::Manager, None, BusyPolicy::Replace));
        let new = ticket(&state.submit("two", Role::Manager, None, BusyPolicy::Replace));

        assert_eq!(state.deliver(old, reply("stale")), DeliverOutcome::Discarded);
        assert!(state.is_thinking());
        assert_eq!(
            state.deliver(new, reply("fresh")),
            DeliverOutcome::Delivered { next: None }
        );
        let replies: Vec<&str> = state
            .messages
            .iter()
            .filter(|m| !m.is_user())
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(replies, vec!["fresh"]);
    }

    #[test]
    fn test_reset_invalidates_pending_ticket() {
        let mut state = AssistantState::default();
        let t = ticket(&state.submit("q", Role::Manager, None, BusyPolicy::Ignore));
        state.reset();

        assert!(state.messages.is_empty());
        assert_eq!(state.phase, AssistantPhase::Idle);
        assert_eq!(state.deliver(t, reply("late")), DeliverOutcome::Discarded);

        let fresh = ticket(&state.submit("q2", Role::Manager, None, BusyPolicy::Ignore));
        assert!(fresh > t);
    }

    #[test]
    fn test_busy_policy_parsing() {
        assert_eq!("Queue".parse::<BusyPolicy>().unwrap(), BusyPolicy::Queue);
        assert!("drop".parse::<BusyPolicy>().is_err());
        assert_eq!(BusyPolicy::Replace.to_string(), "replace");
    }
}
