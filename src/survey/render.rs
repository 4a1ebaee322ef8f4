//! Mapping from question type to input shape.
//!
//! The question type alone decides how many values an answer holds: one
//! text value, one discrete value, or a set of values. For multiple choice
//! questions `allow_multiple` decides between checkbox and radio input.
//!
//! Scale points are produced lazily from the range, so a wide range read
//! from the backend costs nothing until a caller walks it.

use crate::survey::model::{Question, QuestionKind, ScaleRange};
use serde::Serialize;

/// Answer cardinality of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    SingleText,
    SingleValue,
    ValueSet,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryChoice {
    pub value: bool,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScalePoint {
    pub value: i32,
    pub label: String,
}

/// Render-ready description of one question's input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum RenderSpec {
    FreeText {
        required: bool,
    },
    YesNo {
        required: bool,
        choices: [BinaryChoice; 2],
    },
    /// Radio buttons
    SingleChoice {
        required: bool,
        options: Vec<String>,
    },
    /// Checkboxes; any subset may be selected
    MultiChoice {
        required: bool,
        options: Vec<String>,
    },
    Scale {
        required: bool,
        #[serde(flatten)]
        range: ScaleRange,
    },
}

impl ScaleRange {
    /// Discrete points `min..=max`, each labelled with its value.
    pub fn points(&self) -> impl DoubleEndedIterator<Item = ScalePoint> {
        (self.min..=self.max).map(|value| ScalePoint {
            value,
            label: value.to_string(),
        })
    }
}

impl RenderSpec {
    pub fn cardinality(&self) -> Cardinality {
        match self {
            RenderSpec::FreeText { .. } => Cardinality::SingleText,
            RenderSpec::YesNo { .. }
            | RenderSpec::SingleChoice { .. }
            | RenderSpec::Scale { .. } => Cardinality::SingleValue,
            RenderSpec::MultiChoice { .. } => Cardinality::ValueSet,
        }
    }

    pub fn is_required(&self) -> bool {
        match self {
            RenderSpec::FreeText { required }
            | RenderSpec::YesNo { required, .. }
            | RenderSpec::SingleChoice { required, .. }
            | RenderSpec::MultiChoice { required, .. }
            | RenderSpec::Scale { required, .. } => *required,
        }
    }
}

pub fn render_question_input(question: &Question) -> RenderSpec {
    let required = question.required;

    match &question.kind {
        QuestionKind::Text => RenderSpec::FreeText { required },
        QuestionKind::Boolean => RenderSpec::YesNo {
            required,
            choices: [
                BinaryChoice {
                    value: true,
                    label: "Yes",
                },
                BinaryChoice {
                    value: false,
                    label: "No",
                },
            ],
        },
        QuestionKind::MultipleChoice {
            options,
            allow_multiple: true,
        } => RenderSpec::MultiChoice {
            required,
            options: options.clone(),
        },
        QuestionKind::MultipleChoice {
            options,
            allow_multiple: false,
        } => RenderSpec::SingleChoice {
            required,
            options: options.clone(),
        },
        QuestionKind::Scale { scale } => RenderSpec::Scale {
            required,
            range: scale.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::model::ScaleRange;
    use proptest::prelude::*;

    fn question(kind: QuestionKind) -> Question {
        Question {
            id: "q".to_string(),
            text: "Question".to_string(),
            required: true,
            order: 1,
            kind,
        }
    }

    fn scale_question(min: i32, max: i32) -> Question {
        question(QuestionKind::Scale {
            scale: ScaleRange {
                min,
                max,
                min_label: Some("Not at all".to_string()),
                max_label: Some("Completely".to_string()),
            },
        })
    }

    #[test]
    fn test_text_renders_free_text() {
        let spec = render_question_input(&question(QuestionKind::Text));
        assert_eq!(spec, RenderSpec::FreeText { required: true });
        assert_eq!(spec.cardinality(), Cardinality::SingleText);
    }

    #[test]
    fn test_boolean_renders_yes_no() {
        match render_question_input(&question(QuestionKind::Boolean)) {
            RenderSpec::YesNo { choices, .. } => {
                assert_eq!(choices[0].label, "Yes");
                assert!(choices[0].value);
                assert_eq!(choices[1].label, "No");
                assert!(!choices[1].value);
            }
            other => panic!("expected yes/no, got {:?}", other),
        }
    }

    #[test]
    fn test_multiple_choice_checkbox_vs_radio() {
        let options = vec!["A".to_string(), "B".to_string()];

        let checkbox = render_question_input(&question(QuestionKind::MultipleChoice {
            options: options.clone(),
            allow_multiple: true,
        }));
        assert_eq!(checkbox.cardinality(), Cardinality::ValueSet);
        assert!(matches!(checkbox, RenderSpec::MultiChoice { .. }));

        let radio = render_question_input(&question(QuestionKind::MultipleChoice {
            options,
            allow_multiple: false,
        }));
        assert_eq!(radio.cardinality(), Cardinality::SingleValue);
        assert!(matches!(radio, RenderSpec::SingleChoice { .. }));
    }

    #[test]
    fn test_scale_one_to_ten() {
        match render_question_input(&scale_question(1, 10)) {
            RenderSpec::Scale { range, .. } => {
                let points: Vec<ScalePoint> = range.points().collect();
                assert_eq!(points.len(), 10);
                assert_eq!(points[0].label, "1");
                assert_eq!(points[9].label, "10");
                assert_eq!(range.min_label.as_deref(), Some("Not at all"));
                assert_eq!(range.max_label.as_deref(), Some("Completely"));
            }
            other => panic!("expected scale, got {:?}", other),
        }
    }

    #[test]
    fn test_render_spec_serializes_with_input_tag() {
        let spec = render_question_input(&question(QuestionKind::Text));
        let value = serde_json::to_value(&spec).expect("serialize");
        assert_eq!(value["input"], "free_text");
        assert_eq!(value["required"], true);
    }

    #[test]
    fn test_optional_question_is_not_required() {
        let mut q = question(QuestionKind::Boolean);
        q.required = false;
        assert!(!render_question_input(&q).is_required());
    }

    #[test]
    fn test_full_i32_scale_renders_without_materialising() {
        match render_question_input(&scale_question(i32::MIN, i32::MAX)) {
            RenderSpec::Scale { range, .. } => {
                assert_eq!(range.point_count() as u64, 1u64 << 32);
                let mut points = range.points();
                assert_eq!(points.next().map(|p| p.value), Some(i32::MIN));
                assert_eq!(range.points().next_back().map(|p| p.value), Some(i32::MAX));
            }
            other => panic!("expected scale, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_scale_point_count(min in -50i32..50, span in 1i32..60) {
            let max = min + span;
            match render_question_input(&scale_question(min, max)) {
                RenderSpec::Scale { range, .. } => {
                    let points: Vec<ScalePoint> = range.points().collect();
                    prop_assert_eq!(range.point_count(), points.len());
                    prop_assert_eq!(points.len(), (max - min + 1) as usize);
                    prop_assert_eq!(points.first().map(|p| p.value), Some(min));
                    prop_assert_eq!(points.last().map(|p| p.value), Some(max));
                    let min_label = min.to_string();
                    let max_label = max.to_string();
                    prop_assert_eq!(points.first().map(|p| p.label.as_str()), Some(min_label.as_str()));
                    prop_assert_eq!(points.last().map(|p| p.label.as_str()), Some(max_label.as_str()));
                }
                other => prop_assert!(false, "expected scale, got {:?}", other),
            }
        }
    }
}
