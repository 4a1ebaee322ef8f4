//! Survey model, authoring rules and response validation.
//!
//! Everything here is a pure transformation: operations take a survey by
//! reference and return either an updated copy or an error. Persisting the
//! result is up to the caller (see [`crate::survey_api`]).
//!
//! - `model`: `Survey`, `Question`, `QuestionKind` and their wire format
//! - `authoring`: drafts, `add_question`, `remove_question`, metadata edits
//! - `render`: question type to input shape
//! - `lifecycle`: status transitions, duplication, response counting
//! - `response`: answer validation

mod authoring;
mod error;
mod lifecycle;
mod model;
mod render;
mod response;

pub use authoring::{DraftKind, QuestionDraft, SurveyDetails};
pub use error::{ResponseError, SubmissionError, SurveyError};
pub use lifecycle::COPY_SUFFIX;
pub use model::{Question, QuestionKind, ScaleRange, Survey, SurveyStatus, SurveyType};
pub use render::{render_question_input, BinaryChoice, Cardinality, RenderSpec, ScalePoint};
pub use response::{validate_answer, validate_submission, Answer};
