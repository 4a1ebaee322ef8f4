//! Survey authoring: creating drafts, editing metadata and managing questions.
//!
//! Every operation takes the current survey by reference and returns an
//! updated copy, so a failed validation leaves the caller's survey untouched.

use crate::survey::error::SurveyError;
use crate::survey::model::{Question, QuestionKind, ScaleRange, Survey, SurveyStatus, SurveyType};
use chrono::NaiveDate;
use tracing::debug;
use uuid::Uuid;

/// Type-specific input of a question under construction.
///
/// Unlike [`QuestionKind`] this tolerates blank options and missing scale
/// bounds, which is what an authoring form holds while the user is typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftKind {
    Text,
    Boolean,
    MultipleChoice {
        options: Vec<String>,
        allow_multiple: bool,
    },
    Scale {
        min: Option<i32>,
        max: Option<i32>,
        min_label: Option<String>,
        max_label: Option<String>,
    },
}

/// A candidate question, validated by [`Survey::add_question`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    /// Generated when absent
    pub id: Option<String>,
    pub text: String,
    pub required: bool,
    pub kind: DraftKind,
}

impl QuestionDraft {
    fn new(text: impl Into<String>, kind: DraftKind) -> Self {
        Self {
            id: None,
            text: text.into(),
            required: false,
            kind,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, DraftKind::Text)
    }

    pub fn boolean(text: impl Into<String>) -> Self {
        Self::new(text, DraftKind::Boolean)
    }

    pub fn multiple_choice<I, S>(text: impl Into<String>, options: I, allow_multiple: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            text,
            DraftKind::MultipleChoice {
                options: options.into_iter().map(Into::into).collect(),
                allow_multiple,
            },
        )
    }

    pub fn scale(text: impl Into<String>, min: Option<i32>, max: Option<i32>) -> Self {
        Self::new(
            text,
            DraftKind::Scale {
                min,
                max,
                min_label: None,
                max_label: None,
            },
        )
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the end labels of a scale question. No effect on other types.
    pub fn with_scale_labels(mut self, low: impl Into<String>, high: impl Into<String>) -> Self {
        if let DraftKind::Scale {
            min_label,
            max_label,
            ..
        } = &mut self.kind
        {
            *min_label = Some(low.into());
            *max_label = Some(high.into());
        }
        self
    }

    /// Validate and turn the draft into a question at position `order`.
    ///
    /// Checks run in a fixed order: text, then options, then scale bounds.
    pub fn into_question(self, order: u32) -> Result<Question, SurveyError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(SurveyError::EmptyQuestionText);
        }

        let kind = match self.kind {
            DraftKind::Text => QuestionKind::Text,
            DraftKind::Boolean => QuestionKind::Boolean,
            DraftKind::MultipleChoice {
                options,
                allow_multiple,
            } => {
                let options: Vec<String> = options
                    .iter()
                    .map(|option| option.trim())
                    .filter(|option| !option.is_empty())
                    .map(str::to_string)
                    .collect();
                if options.is_empty() {
                    return Err(SurveyError::NoOptionsProvided);
                }
                QuestionKind::MultipleChoice {
                    options,
                    allow_multiple,
                }
            }
            DraftKind::Scale {
                min,
                max,
                min_label,
                max_label,
            } => match (min, max) {
                (Some(low), Some(high)) if low < high => QuestionKind::Scale {
                    scale: ScaleRange {
                        min: low,
                        max: high,
                        min_label: non_blank(min_label),
                        max_label: non_blank(max_label),
                    },
                },
                _ => return Err(SurveyError::InvalidScaleRange { min, max }),
            },
        };

        Ok(Question {
            id: self.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            text: text.to_string(),
            required: self.required,
            order,
            kind,
        })
    }
}

fn non_blank(label: Option<String>) -> Option<String> {
    label
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
}

/// Editable survey metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyDetails {
    pub title: String,
    pub description: String,
    pub survey_type: SurveyType,
    pub is_anonymous: bool,
    pub allow_multiple_submissions: bool,
    pub valid_until: Option<NaiveDate>,
}

impl Survey {
    /// A new, empty draft.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        survey_type: SurveyType,
    ) -> Result<Survey, SurveyError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(SurveyError::EmptyTitle);
        }

        Ok(Survey {
            id: None,
            title: title.trim().to_string(),
            description: description.into(),
            survey_type,
            is_anonymous: false,
            allow_multiple_submissions: false,
            valid_until: None,
            status: SurveyStatus::Draft,
            questions: Vec::new(),
            response_count: 0,
            created_at: None,
            updated_at: None,
        })
    }

    pub fn is_editable(&self) -> bool {
        self.status == SurveyStatus::Draft
    }

    fn ensure_editable(&self) -> Result<(), SurveyError> {
        if self.is_editable() {
            Ok(())
        } else {
            Err(SurveyError::NotEditable(self.status))
        }
    }

    /// Position for the next question: one past the question count, or past
    /// the highest existing order when removals left that slot taken.
    ///
    /// Fails when a question already sits at `u32::MAX`.
    pub fn next_order(&self) -> Result<u32, SurveyError> {
        let count = u32::try_from(self.questions.len()).unwrap_or(u32::MAX);
        let highest = self.questions.iter().map(|q| q.order).max().unwrap_or(0);
        let last = count.max(highest);
        last.checked_add(1).ok_or(SurveyError::QuestionOrderExhausted(last))
    }

    /// Validate `draft` and append it.
    pub fn add_question(&self, draft: QuestionDraft) -> Result<Survey, SurveyError> {
        self.ensure_editable()?;

        let question = draft.into_question(self.next_order()?)?;
        if self.question(&question.id).is_some() {
            return Err(SurveyError::DuplicateQuestionId(question.id));
        }
        debug!(
            "Adding {} question {} at order {}",
            question.kind.type_name(),
            question.id,
            question.order
        );

        let mut updated = self.clone();
        updated.questions.push(question);
        Ok(updated)
    }

    /// Remove the question with `question_id`. Remaining orders are kept as
    /// they are; an unknown id leaves the questions unchanged.
    pub fn remove_question(&self, question_id: &str) -> Result<Survey, SurveyError> {
        self.ensure_editable()?;

        let mut updated = self.clone();
        updated.questions.retain(|question| question.id != question_id);
        if updated.questions.len() == self.questions.len() {
            debug!("No question {} to remove", question_id);
        }
        Ok(updated)
    }

    /// Replace the survey metadata.
    pub fn update_details(&self, details: SurveyDetails) -> Result<Survey, SurveyError> {
        self.ensure_editable()?;

        let title = details.title.trim();
        if title.is_empty() {
            return Err(SurveyError::EmptyTitle);
        }

        let mut updated = self.clone();
        updated.title = title.to_string();
        updated.description = details.description;
        updated.survey_type = details.survey_type;
        updated.is_anonymous = details.is_anonymous;
        updated.allow_multiple_submissions = details.allow_multiple_submissions;
        updated.valid_until = details.valid_until;
        Ok(updated)
    }
}
