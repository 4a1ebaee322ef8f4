//! Survey and question data model.
//!
//! The serde representation matches the backend's survey shape: camelCase
//! for `isAnonymous`, `allowMultipleSubmissions`, `validUntil`, `minLabel`,
//! `maxLabel` and `allowMultiple`; snake_case for `response_count`,
//! `created_at` and `updated_at`; and a `type` discriminant on questions.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyType {
    Assessment,
    Feedback,
    Progress,
    Satisfaction,
    Custom,
}

/// Lifecycle state. Only moves forward: draft, published, closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    Draft,
    Published,
    Closed,
}

impl SurveyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurveyStatus::Draft => "draft",
            SurveyStatus::Published => "published",
            SurveyStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for SurveyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounds and end labels of a scale question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleRange {
    pub min: i32,
    pub max: i32,
    #[serde(rename = "minLabel", default, skip_serializing_if = "Option::is_none")]
    pub min_label: Option<String>,
    #[serde(rename = "maxLabel", default, skip_serializing_if = "Option::is_none")]
    pub max_label: Option<String>,
}

impl ScaleRange {
    /// Number of selectable points, `max - min + 1`; zero for an inverted range.
    pub fn point_count(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            (i64::from(self.max) - i64::from(self.min) + 1) as usize
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Type-specific part of a question. Options exist only on multiple choice
/// questions and bounds only on scale questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    Text,
    MultipleChoice {
        options: Vec<String>,
        /// Checkboxes when true, radio buttons when false
        #[serde(rename = "allowMultiple", default)]
        allow_multiple: bool,
    },
    Scale {
        scale: ScaleRange,
    },
    Boolean,
}

impl QuestionKind {
    /// The wire name of the question type.
    pub fn type_name(&self) -> &'static str {
        match self {
            QuestionKind::Text => "text",
            QuestionKind::MultipleChoice { .. } => "multiple_choice",
            QuestionKind::Scale { .. } => "scale",
            QuestionKind::Boolean => "boolean",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub required: bool,
    /// Display position; unique within a survey, gaps allowed
    pub order: u32,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    /// Assigned by the backend; absent until the survey is persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub survey_type: SurveyType,
    #[serde(rename = "isAnonymous", default)]
    pub is_anonymous: bool,
    #[serde(rename = "allowMultipleSubmissions", default)]
    pub allow_multiple_submissions: bool,
    #[serde(rename = "validUntil", default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    pub status: SurveyStatus,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub response_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Survey {
    /// Questions in display order (ascending `order`).
    pub fn sorted_questions(&self) -> Vec<&Question> {
        let mut questions: Vec<&Question> = self.questions.iter().collect();
        questions.sort_by_key(|question| question.order);
        questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_until.is_some_and(|valid_until| valid_until < today)
    }
}
