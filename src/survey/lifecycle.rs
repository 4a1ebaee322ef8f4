//! Status transitions, duplication and response counting.

use crate::survey::error::SurveyError;
use crate::survey::model::{Survey, SurveyStatus};
use chrono::NaiveDate;
use tracing::info;

/// Appended to the title of a duplicated survey.
pub const COPY_SUFFIX: &str = " (Copy)";

impl SurveyStatus {
    /// The only legal steps are draft to published and published to closed.
    pub fn can_transition_to(self, target: SurveyStatus) -> bool {
        matches!(
            (self, target),
            (SurveyStatus::Draft, SurveyStatus::Published)
                | (SurveyStatus::Published, SurveyStatus::Closed)
        )
    }
}

impl Survey {
    /// Move the survey to `target`.
    pub fn transition_status(&self, target: SurveyStatus) -> Result<Survey, SurveyError> {
        if !self.status.can_transition_to(target) {
            return Err(SurveyError::IllegalStatusTransition {
                from: self.status,
                to: target,
            });
        }

        info!(
            "Survey {} status {} -> {}",
            self.id.as_deref().unwrap_or("<unsaved>"),
            self.status,
            target
        );

        let mut updated = self.clone();
        updated.status = target;
        Ok(updated)
    }

    pub fn publish(&self) -> Result<Survey, SurveyError> {
        self.transition_status(SurveyStatus::Published)
    }

    pub fn close(&self) -> Result<Survey, SurveyError> {
        self.transition_status(SurveyStatus::Closed)
    }

    /// A new draft copy.
    ///
    /// Title gets [`COPY_SUFFIX`]; questions are copied verbatim including
    /// their ids and orders. Identity, timestamps, the response count and
    /// the expiry date are not carried over.
    pub fn duplicate(&self) -> Survey {
        Survey {
            id: None,
            title: format!("{}{}", self.title, COPY_SUFFIX),
            description: self.description.clone(),
            survey_type: self.survey_type,
            is_anonymous: self.is_anonymous,
            allow_multiple_submissions: self.allow_multiple_submissions,
            valid_until: None,
            status: SurveyStatus::Draft,
            questions: self.questions.clone(),
            response_count: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// Whether new responses may be submitted on `today`.
    pub fn ensure_accepting_responses(&self, today: NaiveDate) -> Result<(), SurveyError> {
        if self.status != SurveyStatus::Published {
            return Err(SurveyError::NotAcceptingResponses(self.status));
        }
        match self.valid_until {
            Some(valid_until) if self.is_expired(today) => Err(SurveyError::Expired(valid_until)),
            _ => Ok(()),
        }
    }

    /// Count one more response.
    pub fn record_response(&self, today: NaiveDate) -> Result<Survey, SurveyError> {
        self.ensure_accepting_responses(today)?;

        let mut updated = self.clone();
        updated.response_count = updated.response_count.saturating_add(1);
        Ok(updated)
    }
}
