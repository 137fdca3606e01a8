//! Interactive auto-assign session.
//!
//! Drives one collect → preview → apply cycle against a
//! [`SeatingPlan`]:
//!
//! ```text
//! CollectingInput --run--> Previewing --apply--> Applied
//!        ^                    |
//!        +-------back---------+        (any open state) --cancel--> Cancelled
//! ```
//!
//! Running is synchronous, so there is no observable "simulating" state.

use tracing::{debug, info};

use super::config::AssignConfig;
use super::runner::AutoAssigner;
use super::types::AssignResult;
use crate::error::{Result, SeatingError};
use crate::grouping::GroupMode;
use crate::plan::SeatingPlan;
use crate::ranking::AffinitySource;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The user is choosing mode, criteria and strictness.
    CollectingInput,
    /// A preview exists and awaits confirmation.
    Previewing,
    /// The preview was written into the plan.
    Applied,
    /// The session was closed without applying.
    Cancelled,
}

impl SessionState {
    /// Human-readable state name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::CollectingInput => "collecting input",
            SessionState::Previewing => "previewing",
            SessionState::Applied => "applied",
            SessionState::Cancelled => "cancelled",
        }
    }

    /// Whether the session has reached `Applied` or `Cancelled`.
    pub fn is_finished(&self) -> bool {
        matches!(self, SessionState::Applied | SessionState::Cancelled)
    }
}

/// One auto-assign dialog: input collection, preview, and apply.
///
/// # Examples
///
/// ```
/// use u_seating::assign::{AutoAssignSession, SessionState};
/// use u_seating::grouping::GroupMode;
/// use u_seating::model::{Guest, Table};
/// use u_seating::plan::SeatingPlan;
///
/// let mut plan = SeatingPlan::new(
///     vec![Table::new("t1", "Table 1", 2)],
///     vec![Guest::new("g1", "Ann", "Family"), Guest::new("g2", "Ben", "Friend")],
/// );
///
/// let mut session = AutoAssignSession::new(&plan, GroupMode::Category);
/// assert_eq!(session.config().selected_criteria, vec!["Family", "Friend"]);
///
/// let preview = session.run(&plan).unwrap();
/// assert_eq!(preview.assignments.len(), 2);
///
/// session.apply(&mut plan).unwrap();
/// assert_eq!(session.state(), SessionState::Applied);
/// assert!(plan.unseated_guests().next().is_none());
/// ```
#[derive(Debug)]
pub struct AutoAssignSession {
    config: AssignConfig,
    assigner: AutoAssigner,
    state: SessionState,
    preview: Option<AssignResult>,
}

impl AutoAssignSession {
    /// Opens a session with every available criterion value selected.
    pub fn new(plan: &SeatingPlan, mode: GroupMode) -> Self {
        Self::with_config(AssignConfig::all_available(&plan.guests, mode))
    }

    /// Opens a session with an explicit starting configuration.
    pub fn with_config(config: AssignConfig) -> Self {
        Self {
            config,
            assigner: AutoAssigner::new(),
            state: SessionState::CollectingInput,
            preview: None,
        }
    }

    /// Uses a custom assigner (e.g. one with extra ranking rules).
    pub fn with_assigner(mut self, assigner: AutoAssigner) -> Self {
        self.assigner = assigner;
        self
    }

    /// Current dialog state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The configuration the next run will use.
    pub fn config(&self) -> &AssignConfig {
        &self.config
    }

    /// The current preview, if one is being shown or was applied.
    pub fn preview(&self) -> Option<&AssignResult> {
        self.preview.as_ref()
    }

    /// Whether [`run`](Self::run) would be accepted.
    pub fn can_run(&self) -> bool {
        self.state == SessionState::CollectingInput && self.config.validate().is_ok()
    }

    /// Switches grouping mode and reselects every available value of the
    /// new mode.
    pub fn set_mode(&mut self, plan: &SeatingPlan, mode: GroupMode) -> Result<()> {
        self.require_state(SessionState::CollectingInput, "change mode")?;
        let strict = self.config.strict_mode;
        let source = self.config.affinity_source;
        self.config = AssignConfig::all_available(&plan.guests, mode)
            .with_strict_mode(strict)
            .with_affinity_source(source);
        Ok(())
    }

    /// Flips the selection of one criterion value. Returns whether it is
    /// selected afterwards.
    pub fn toggle_criterion(&mut self, value: &str) -> Result<bool> {
        self.require_state(SessionState::CollectingInput, "change selection")?;
        Ok(self.config.toggle_criterion(value))
    }

    /// Turns strict grouping on or off.
    pub fn set_strict_mode(&mut self, strict: bool) -> Result<()> {
        self.require_state(SessionState::CollectingInput, "change strictness")?;
        self.config.strict_mode = strict;
        Ok(())
    }

    /// Chooses where table affinity is read from.
    pub fn set_affinity_source(&mut self, source: AffinitySource) -> Result<()> {
        self.require_state(SessionState::CollectingInput, "change affinity source")?;
        self.config.affinity_source = source;
        Ok(())
    }

    /// Simulates the assignment and moves to `Previewing`.
    ///
    /// On error the session stays in `CollectingInput`.
    pub fn run(&mut self, plan: &SeatingPlan) -> Result<&AssignResult> {
        self.require_state(SessionState::CollectingInput, "run")?;
        let result = self.assigner.run(&plan.tables, &plan.guests, &self.config)?;
        self.state = SessionState::Previewing;
        Ok(&*self.preview.insert(result))
    }

    /// Discards the preview and returns to input collection.
    pub fn back(&mut self) -> Result<()> {
        self.require_state(SessionState::Previewing, "go back")?;
        self.preview = None;
        self.state = SessionState::CollectingInput;
        debug!("preview discarded");
        Ok(())
    }

    /// Writes the previewed assignments into `plan`. Returns how many
    /// guests were seated.
    ///
    /// The plan must not have changed since [`run`](Self::run); if it has,
    /// the apply is rejected and the session stays in `Previewing`.
    pub fn apply(&mut self, plan: &mut SeatingPlan) -> Result<usize> {
        self.require_state(SessionState::Previewing, "apply")?;
        let Some(preview) = self.preview.as_ref() else {
            return Err(SeatingError::InvalidTransition {
                action: "apply",
                state: "previewing without a preview",
            });
        };
        let seated = plan.apply_assignments(&preview.assignments)?;
        self.state = SessionState::Applied;
        info!(seated, "auto-assign applied");
        Ok(seated)
    }

    /// Closes the session without touching the plan.
    pub fn cancel(&mut self) -> Result<()> {
        if self.state.is_finished() {
            return Err(SeatingError::InvalidTransition {
                action: "cancel",
                state: self.state.as_str(),
            });
        }
        self.preview = None;
        self.state = SessionState::Cancelled;
        Ok(())
    }

    fn require_state(&self, wanted: SessionState, action: &'static str) -> Result<()> {
        if self.state == wanted {
            Ok(())
        } else {
            Err(SeatingError::InvalidTransition {
                action,
                state: self.state.as_str(),
            })
        }
    }
}
