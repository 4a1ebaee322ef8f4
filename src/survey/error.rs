use crate::survey::model::SurveyStatus;
use chrono::NaiveDate;
use thiserror::Error;

/// Authoring and lifecycle failures. The survey is never modified when one
/// of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("Survey title cannot be empty")]
    EmptyTitle,

    #[error("Question text cannot be empty")]
    EmptyQuestionText,

    #[error("A multiple choice question needs at least one non-empty option")]
    NoOptionsProvided,

    #[error("Scale range is invalid (min {min:?}, max {max:?}); min must be lower than max")]
    InvalidScaleRange { min: Option<i32>, max: Option<i32> },

    #[error("Cannot change survey status from {from} to {to}")]
    IllegalStatusTransition {
        from: SurveyStatus,
        to: SurveyStatus,
    },

    #[error("A question with id {0} already exists in this survey")]
    DuplicateQuestionId(String),

    #[error("No question order left after {0}")]
    QuestionOrderExhausted(u32),

    #[error("Survey is {0} and can no longer be edited")]
    NotEditable(SurveyStatus),

    #[error("Survey is {0} and does not accept responses")]
    NotAcceptingResponses(SurveyStatus),

    #[error("Survey expired on {0}")]
    Expired(NaiveDate),
}

/// A single answer that does not satisfy its question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseError {
    #[error("Question {question_id} is required")]
    Required { question_id: String },

    #[error("Question {question_id} expects a {expected} answer")]
    WrongAnswerType {
        question_id: String,
        expected: &'static str,
    },

    #[error("'{option}' is not an option of question {question_id}")]
    UnknownOption { question_id: String, option: String },

    #[error("Question {question_id} allows only one option")]
    MultipleNotAllowed { question_id: String },

    #[error("{value} is outside the scale {min}..={max} of question {question_id}")]
    OutOfScale {
        question_id: String,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Answer given for unknown question {question_id}")]
    UnknownQuestion { question_id: String },
}

/// Why a whole submission was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Survey(#[from] SurveyError),

    #[error("{} answer(s) are invalid", .0.len())]
    InvalidAnswers(Vec<ResponseError>),
}
