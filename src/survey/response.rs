//! Answer validation per question type.

use crate::survey::error::{ResponseError, SubmissionError};
use crate::survey::model::{Question, QuestionKind, Survey};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A respondent's answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Answer {
    Text(String),
    Boolean(bool),
    /// One option of a radio question
    Choice(String),
    /// Selected options of a checkbox question
    Choices(Vec<String>),
    Scale(i32),
}

impl Answer {
    /// Whether the answer carries no content, e.g. blank text or no options.
    pub fn is_blank(&self) -> bool {
        match self {
            Answer::Text(text) | Answer::Choice(text) => text.trim().is_empty(),
            Answer::Choices(selected) => selected.is_empty(),
            Answer::Boolean(_) | Answer::Scale(_) => false,
        }
    }
}

/// Check one answer against its question.
///
/// `None` and blank answers are accepted for optional questions.
pub fn validate_answer(question: &Question, answer: Option<&Answer>) -> Result<(), ResponseError> {
    let question_id = || question.id.clone();

    let answer = match answer.filter(|answer| !answer.is_blank()) {
        Some(answer) => answer,
        None if question.required => {
            return Err(ResponseError::Required {
                question_id: question_id(),
            })
        }
        None => return Ok(()),
    };

    let wrong_type = |expected| ResponseError::WrongAnswerType {
        question_id: question_id(),
        expected,
    };
    let check_option = |options: &[String], option: &str| {
        if options.iter().any(|candidate| candidate == option) {
            Ok(())
        } else {
            Err(ResponseError::UnknownOption {
                question_id: question_id(),
                option: option.to_string(),
            })
        }
    };

    match (&question.kind, answer) {
        (QuestionKind::Text, Answer::Text(_)) => Ok(()),
        (QuestionKind::Text, _) => Err(wrong_type("text")),

        (QuestionKind::Boolean, Answer::Boolean(_)) => Ok(()),
        (QuestionKind::Boolean, _) => Err(wrong_type("yes/no")),

        (QuestionKind::Scale { scale }, Answer::Scale(value)) => {
            if scale.contains(*value) {
                Ok(())
            } else {
                Err(ResponseError::OutOfScale {
                    question_id: question_id(),
                    value: *value,
                    min: scale.min,
                    max: scale.max,
                })
            }
        }
        (QuestionKind::Scale { .. }, _) => Err(wrong_type("scale")),

        (QuestionKind::MultipleChoice { options, .. }, Answer::Choice(option)) => {
            check_option(options.as_slice(), option.as_str())
        }
        (
            QuestionKind::MultipleChoice {
                options,
                allow_multiple,
            },
            Answer::Choices(selected),
        ) => {
            if !allow_multiple && selected.len() > 1 {
                return Err(ResponseError::MultipleNotAllowed {
                    question_id: question_id(),
                });
            }
            selected
                .iter()
                .try_for_each(|option| check_option(options.as_slice(), option.as_str()))
        }
        (QuestionKind::MultipleChoice { .. }, _) => Err(wrong_type("choice")),
    }
}

/// Check a complete submission keyed by question id.
///
/// The survey must be published and not expired. All invalid answers are
/// reported together, in display order, followed by answers to unknown
/// questions.
pub fn validate_submission(
    survey: &Survey,
    answers: &HashMap<String, Answer>,
    today: NaiveDate,
) -> Result<(), SubmissionError> {
    survey.ensure_accepting_responses(today)?;

    let mut errors: Vec<ResponseError> = survey
        .sorted_questions()
        .into_iter()
        .filter_map(|question| validate_answer(question, answers.get(&question.id)).err())
        .collect();

    let known: HashSet<&str> = survey.questions.iter().map(|q| q.id.as_str()).collect();
    let mut unknown: Vec<&String> = answers
        .keys()
        .filter(|id| !known.contains(id.as_str()))
        .collect();
    unknown.sort();
    errors.extend(unknown.into_iter().map(|id| ResponseError::UnknownQuestion {
        question_id: id.clone(),
    }));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(SubmissionError::InvalidAnswers(errors))
    }
}
