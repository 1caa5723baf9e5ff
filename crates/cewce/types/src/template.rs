//! Workflow templates: reusable state-transition tables
//!
//! A WorkflowTemplate is a flat state machine: a list of named states
//! (exactly one initial, at least one terminal) and a list of named
//! transitions between them. Templates are immutable once published;
//! to modify one, bump the version.

use crate::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ── Identifiers ──────────────────────────────────────────────────────

/// Unique identifier for a workflow template
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateId(pub String);

impl TemplateId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Numeric identifier of a state within a template
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub u32);

impl StateId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Template lifecycle ───────────────────────────────────────────────

/// Lifecycle status of a workflow template
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateStatus {
    /// Being authored; visible only to template authors
    Draft,
    /// Live and available for new instances
    Published,
    /// No new instances; existing ones keep running
    Deprecated,
    /// Retired
    Archived,
}

impl std::fmt::Display for TemplateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TemplateStatus::Draft => "DRAFT",
            TemplateStatus::Published => "PUBLISHED",
            TemplateStatus::Deprecated => "DEPRECATED",
            TemplateStatus::Archived => "ARCHIVED",
        };
        f.write_str(label)
    }
}

// ── States and transitions ───────────────────────────────────────────

/// A state declared by a workflow template
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowState {
    /// Identifier, unique within the template
    pub id: StateId,
    /// Human-readable name
    pub name: String,
    /// Optional description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether instances start here (exactly one per template)
    #[serde(default)]
    pub is_initial: bool,
    /// Whether this state ends the workflow
    #[serde(default)]
    pub is_terminal: bool,
}

impl WorkflowState {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: StateId(id),
            name: name.into(),
            description: None,
            is_initial: false,
            is_terminal: false,
        }
    }

    pub fn initial(mut self) -> Self {
        self.is_initial = true;
        self
    }

    pub fn terminal(mut self) -> Self {
        self.is_terminal = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

/// A declared, named edge between two states of a template
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowTransition {
    /// Source state
    pub from: StateId,
    /// Target state
    pub to: StateId,
    /// Machine action label ("submit", "approve", ...)
    pub action: String,
    /// Human-readable label for action buttons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl WorkflowTransition {
    pub fn new(from: u32, to: u32, action: impl Into<String>) -> Self {
        Self {
            from: StateId(from),
            to: StateId(to),
            action: action.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The button text: the explicit label, or the action itself
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.action)
    }
}

// ── Workflow Template ────────────────────────────────────────────────

/// A workflow template — the state-transition table instances run over
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowTemplate {
    /// Unique identifier
    pub id: TemplateId,
    /// Human-readable name
    pub name: String,
    /// Description of what this workflow accomplishes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Version, bumped on every published change
    pub version: u32,
    /// Declared states, in declaration order
    pub states: Vec<WorkflowState>,
    /// Declared transitions, in declaration order
    pub transitions: Vec<WorkflowTransition>,
    /// Days until the instance breaches its SLA
    pub sla_days: u32,
    /// Days until an unattended instance escalates
    pub escalation_days: u32,
    /// Lifecycle status
    pub status: TemplateStatus,
    /// When the template was created
    pub created_at: DateTime<Utc>,
    /// When the template was last updated
    pub updated_at: DateTime<Utc>,
}

impl WorkflowTemplate {
    /// Create an empty draft template
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TemplateId::new(id),
            name: name.into(),
            description: None,
            version: 1,
            states: Vec::new(),
            transitions: Vec::new(),
            sla_days: 0,
            escalation_days: 0,
            status: TemplateStatus::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_sla(mut self, sla_days: u32, escalation_days: u32) -> Self {
        self.sla_days = sla_days;
        self.escalation_days = escalation_days;
        self
    }

    pub fn with_status(mut self, status: TemplateStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_state(mut self, state: WorkflowState) -> Self {
        self.states.push(state);
        self
    }

    pub fn with_transition(mut self, transition: WorkflowTransition) -> Self {
        self.transitions.push(transition);
        self
    }

    pub fn with_timestamps(mut self, created: DateTime<Utc>, updated: DateTime<Utc>) -> Self {
        self.created_at = created;
        self.updated_at = updated;
        self
    }

    /// Add a state, rejecting duplicate ids
    pub fn add_state(&mut self, state: WorkflowState) -> EngineResult<()> {
        if self.states.iter().any(|s| s.id == state.id) {
            return Err(EngineError::DuplicateState {
                template: self.id.clone(),
                state: state.id,
            });
        }
        self.states.push(state);
        Ok(())
    }

    /// Add a transition, rejecting unknown endpoints and exact duplicates
    pub fn add_transition(&mut self, transition: WorkflowTransition) -> EngineResult<()> {
        for endpoint in [transition.from, transition.to] {
            if self.state(endpoint).is_none() {
                return Err(EngineError::UnknownState {
                    template: self.id.clone(),
                    state: endpoint,
                });
            }
        }
        if self.transitions.iter().any(|t| {
            t.from == transition.from && t.to == transition.to && t.action == transition.action
        }) {
            return Err(EngineError::DuplicateTransition {
                from: transition.from,
                to: transition.to,
                action: transition.action,
            });
        }
        self.transitions.push(transition);
        Ok(())
    }

    /// Look up a declared state by id
    pub fn state(&self, id: StateId) -> Option<&WorkflowState> {
        self.states.iter().find(|s| s.id == id)
    }

    /// The single initial state, if declared
    pub fn initial_state(&self) -> Option<&WorkflowState> {
        self.states.iter().find(|s| s.is_initial)
    }

    /// All terminal states
    pub fn terminal_states(&self) -> Vec<&WorkflowState> {
        self.states.iter().filter(|s| s.is_terminal).collect()
    }

    /// The available-actions lookup: transitions declared out of a
    /// state, in declaration order
    pub fn transitions_from(&self, state: StateId) -> Vec<&WorkflowTransition> {
        self.transitions.iter().filter(|t| t.from == state).collect()
    }

    /// Find the declared transition out of `state` carrying `action`
    pub fn transition(&self, state: StateId, action: &str) -> Option<&WorkflowTransition> {
        self.transitions
            .iter()
            .find(|t| t.from == state && t.action == action)
    }

    pub fn is_published(&self) -> bool {
        self.status == TemplateStatus::Published
    }

    /// Validate the state-transition table for structural correctness
    pub fn validate(&self) -> EngineResult<()> {
        if self.states.is_empty() {
            return Err(EngineError::ValidationError(
                "Template must declare at least one state".into(),
            ));
        }

        let initial_count = self.states.iter().filter(|s| s.is_initial).count();
        if initial_count == 0 {
            return Err(EngineError::NoInitialState(self.id.clone()));
        }
        if initial_count > 1 {
            return Err(EngineError::MultipleInitialStates(self.id.clone()));
        }

        if self.terminal_states().is_empty() {
            return Err(EngineError::NoTerminalState(self.id.clone()));
        }

        let mut seen = HashSet::new();
        for state in &self.states {
            if !seen.insert(state.id) {
                return Err(EngineError::DuplicateState {
                    template: self.id.clone(),
                    state: state.id,
                });
            }
        }

        for transition in &self.transitions {
            for endpoint in [transition.from, transition.to] {
                if self.state(endpoint).is_none() {
                    return Err(EngineError::UnknownState {
                        template: self.id.clone(),
                        state: endpoint,
                    });
                }
            }
        }

        Ok(())
    }

    /// All states reachable from the initial state via declared
    /// transitions (BFS)
    pub fn reachable_states(&self) -> HashSet<StateId> {
        let mut visited = HashSet::new();
        let Some(initial) = self.initial_state() else {
            return visited;
        };
        let mut queue = vec![initial.id];

        while let Some(current) = queue.pop() {
            if visited.insert(current) {
                for transition in self.transitions_from(current) {
                    if !visited.contains(&transition.to) {
                        queue.push(transition.to);
                    }
                }
            }
        }

        visited
    }

    /// Opt-in check that a state can actually be reached.
    ///
    /// Instances are not required to pass this; the store never ran
    /// it and the demo keeps that behavior. It exists for callers
    /// that want the stricter guarantee.
    pub fn check_state_reachable(&self, state: StateId) -> EngineResult<()> {
        if self.state(state).is_none() {
            return Err(EngineError::UnknownState {
                template: self.id.clone(),
                state,
            });
        }
        if !self.reachable_states().contains(&state) {
            return Err(EngineError::StateUnreachable {
                template: self.id.clone(),
                state,
            });
        }
        Ok(())
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }
}
