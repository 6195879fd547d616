//! Survey form flow controller
//!
//! Drives the multi-step form on the client: one status step, then three
//! status-conditioned steps. Forward navigation is gated by the active
//! step's completeness rule; backward navigation is unconditional. A
//! submitting flag guards against duplicate sends while a request is
//! outstanding. The state lives for one browsing session only.

use crate::types::{RelationshipStatus, SurveyAnswers, SurveyResponse};

/// Step count once a status has been chosen
pub const FULL_STEP_COUNT: usize = 4;

/// In-progress survey form state
#[derive(Debug, Clone)]
pub struct FormState {
    step: usize,
    status: Option<RelationshipStatus>,
    pub answers: SurveyAnswers,
    submitting: bool,
    submitted: bool,
}

impl FormState {
    /// Create a fresh form positioned on the status step
    pub fn new() -> Self {
        Self {
            step: 1,
            status: None,
            answers: SurveyAnswers::default(),
            submitting: false,
            submitted: false,
        }
    }

    /// Current step, 1-based
    pub fn step(&self) -> usize {
        self.step
    }

    /// Chosen relationship status, if any
    pub fn status(&self) -> Option<RelationshipStatus> {
        self.status
    }

    /// Total step count: one step until a status is chosen, four after
    pub fn total_steps(&self) -> usize {
        if self.status.is_some() {
            FULL_STEP_COUNT
        } else {
            1
        }
    }

    /// Choose (or change) the relationship status on step 1
    pub fn choose_status(&mut self, status: RelationshipStatus) {
        self.status = Some(status);
    }

    /// Toggle a challenge selection for the active status track
    pub fn toggle_challenge(&mut self, option: &str) {
        match self.status {
            Some(RelationshipStatus::Single) => toggle(&mut self.answers.single_challenges, option),
            Some(RelationshipStatus::Married) => {
                toggle(&mut self.answers.married_challenges, option)
            }
            None => {}
        }
    }

    /// Toggle a topic selection for the active status track
    pub fn toggle_topic(&mut self, option: &str) {
        match self.status {
            Some(RelationshipStatus::Single) => toggle(&mut self.answers.single_topics, option),
            Some(RelationshipStatus::Married) => toggle(&mut self.answers.married_topics, option),
            None => {}
        }
    }

    /// Whether the active step's completeness rule is satisfied
    pub fn can_proceed(&self) -> bool {
        match self.step {
            1 => self.status.is_some(),
            2 => match self.status {
                Some(RelationshipStatus::Single) => !self.answers.single_challenges.is_empty(),
                Some(RelationshipStatus::Married) => {
                    !self.answers.married_challenges.is_empty()
                        && !self.answers.married_years.is_empty()
                }
                None => false,
            },
            3 => match self.status {
                Some(RelationshipStatus::Single) => {
                    !self.answers.single_desires.trim().is_empty()
                        || !self.answers.single_fears.trim().is_empty()
                }
                Some(RelationshipStatus::Married) => {
                    !self.answers.married_strengths.trim().is_empty()
                }
                None => false,
            },
            4 => match self.status {
                Some(RelationshipStatus::Single) => !self.answers.single_topics.is_empty(),
                Some(RelationshipStatus::Married) => !self.answers.married_topics.is_empty(),
                None => false,
            },
            _ => true,
        }
    }

    /// Advance to the next step; returns false when gated or already last
    pub fn next_step(&mut self) -> bool {
        if self.step < self.total_steps() && self.can_proceed() {
            self.step += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step; always allowed, floored at step 1
    pub fn prev_step(&mut self) {
        if self.step > 1 {
            self.step -= 1;
        }
    }

    /// Whether a submission may be sent right now
    pub fn can_submit(&self) -> bool {
        self.step == FULL_STEP_COUNT && self.can_proceed() && !self.submitting && !self.submitted
    }

    /// Begin a submission: marks the form in-flight and hands back the
    /// payload to send. Returns None when gated or a request is already
    /// outstanding, so a second concurrent send cannot start.
    pub fn begin_submission(&mut self) -> Option<SurveyResponse> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        // Status is present: can_submit implies the step-4 rule held,
        // which requires a chosen status.
        let status = self.status?;
        Some(SurveyResponse {
            status,
            answers: self.answers.clone(),
        })
    }

    /// Record the outcome of the in-flight submission. On failure the
    /// answers are preserved so the user can retry manually.
    pub fn finish_submission(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.submitted = true;
        }
    }

    /// Whether a submission request is outstanding
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the form was submitted successfully
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Select-again-to-deselect semantics of the checkbox groups
fn toggle(selected: &mut Vec<String>, option: &str) {
    if let Some(pos) = selected.iter().position(|s| s == option) {
        selected.remove(pos);
    } else {
        selected.push(option.to_string());
    }
}
