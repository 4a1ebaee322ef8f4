//! Integration tests for the PraktijkEPD core library
//!
//! These tests drive the public API the way an application would: one
//! translation service injected into consumers, surveys authored and moved
//! through their lifecycle, and the backend client against a mock server.

use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use praktijk_epd::config::Config;
use praktijk_epd::i18n::{
    CatalogValidator, FilePreferenceStore, InMemoryDocument, Language, PreferenceStore,
    TranslationKey, TranslationParams, TranslationService,
};
use praktijk_epd::survey::{
    render_question_input, validate_submission, Answer, QuestionDraft, QuestionKind, RenderSpec,
    SubmissionError, Survey, SurveyError, SurveyStatus, SurveyType,
};
use praktijk_epd::survey_api::SurveyApiClient;

// ==================== Test Helpers ====================

fn file_service(
    temp_dir: &TempDir,
) -> (
    TranslationService,
    Arc<FilePreferenceStore>,
    Arc<InMemoryDocument>,
) {
    let store = Arc::new(FilePreferenceStore::new(
        temp_dir.path().join("prefs").join("preferences.json"),
    ));
    let document = Arc::new(InMemoryDocument::with_language_meta("en"));
    let service = TranslationService::new(store.clone(), document.clone(), None);
    (service, store, document)
}

fn intake_survey() -> Survey {
    Survey::new("Intake", "First session", SurveyType::Assessment)
        .and_then(|s| s.add_question(QuestionDraft::text("What brings you here?").required()))
        .and_then(|s| {
            s.add_question(QuestionDraft::multiple_choice(
                "Preferred day",
                ["A", "", "  ", "B"],
                false,
            ))
        })
        .and_then(|s| {
            s.add_question(
                QuestionDraft::scale("Mood", Some(1), Some(10))
                    .with_scale_labels("Very low", "Very good"),
            )
        })
        .expect("valid survey")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 17).expect("valid date")
}

// ==================== Translation Fallback Tests ====================

#[test]
fn test_unknown_key_returns_key() {
    let service = TranslationService::detached(Language::DUTCH);
    assert_eq!(service.translate_str("nav.doesNotExist", None), "nav.doesNotExist");
    assert_eq!(service.metrics().missing_keys(), 1);
}

#[test]
fn test_english_only_key_falls_back_under_dutch() {
    let service = TranslationService::detached(Language::DUTCH);
    assert_eq!(service.translate_str("role.substitute", None), "Substitute");
    assert_eq!(service.t(TranslationKey::RoleSubstitute), "Substitute");
}

#[test]
fn test_label_helpers_fall_back_to_raw_value() {
    let service = TranslationService::detached(Language::DUTCH);
    assert_eq!(service.role_label("ADMIN"), "Beheerder");
    assert_eq!(service.role_label("intern"), "intern");
    assert_eq!(service.status_label("active"), "Actief");
    assert_eq!(service.status_label("archived"), "archived");
}

proptest! {
    #[test]
    fn prop_absent_keys_translate_to_themselves(key in "[a-z]{1,8}\\.[a-zA-Z]{1,12}") {
        prop_assume!(TranslationKey::from_key(&key).is_none());
        let service = TranslationService::detached(Language::ENGLISH);
        prop_assert_eq!(service.translate_str(&key, None), key);
    }
}

// ==================== Parameter Substitution Tests ====================

#[test]
fn test_min_length_in_both_languages() {
    let params = TranslationParams::positional([8]);

    let service = TranslationService::detached(Language::ENGLISH);
    assert_eq!(
        service.translate(TranslationKey::ValidationMinLength, Some(&params)),
        "Minimum length is 8 characters"
    );

    service.set_language(Language::DUTCH);
    assert_eq!(
        service.translate_str("validation.minLength", Some(&params)),
        "Minimale lengte is 8 karakters"
    );
}

#[test]
fn test_named_parameters() {
    let service = TranslationService::detached(Language::ENGLISH);
    let params = TranslationParams::new().with("min", 1).with("max", 10);
    assert_eq!(
        service.translate(TranslationKey::ValidationRange, Some(&params)),
        "Enter a value between 1 and 10"
    );
}

// ==================== Language Persistence Tests ====================

#[test]
fn test_set_language_is_idempotent_and_persisted() {
    let temp_dir = TempDir::new().expect("temp dir");
    let (service, store, document) = file_service(&temp_dir);
    assert_eq!(service.language(), Language::ENGLISH);

    service.set_language(Language::DUTCH);
    assert_eq!(service.language(), Language::DUTCH);
    assert_eq!(store.load().as_deref(), Some("nl"));

    service.set_language(Language::DUTCH);
    assert_eq!(service.language(), Language::DUTCH);
    assert_eq!(store.load().as_deref(), Some("nl"));

    assert_eq!(document.root_language().as_deref(), Some("nl"));
    assert_eq!(document.meta_language().as_deref(), Some("nl"));
}

#[test]
fn test_persisted_language_survives_restart() {
    let temp_dir = TempDir::new().expect("temp dir");
    {
        let (service, _, _) = file_service(&temp_dir);
        service.set_language(Language::DUTCH);
    }

    let (restarted, _, _) = file_service(&temp_dir);
    assert_eq!(restarted.language(), Language::DUTCH);
    assert_eq!(restarted.t(TranslationKey::NavDashboard), "Dashboard");
    assert_eq!(restarted.t(TranslationKey::RoleAdmin), "Beheerder");
}

#[test]
fn test_configured_default_applies_without_preference() {
    let config = Config::from_lookup(|name| match name {
        "DEFAULT_LANGUAGE" => Some("nl-NL".to_string()),
        _ => None,
    })
    .expect("valid config");

    let temp_dir = TempDir::new().expect("temp dir");
    let store = Arc::new(FilePreferenceStore::new(temp_dir.path().join("prefs.json")));
    let service = TranslationService::new(
        store,
        Arc::new(InMemoryDocument::new()),
        config.default_language.as_deref(),
    );
    assert_eq!(service.language(), Language::DUTCH);
}

#[test]
fn test_services_do_not_share_state() {
    let english = TranslationService::detached(Language::ENGLISH);
    let dutch = TranslationService::detached(Language::ENGLISH);
    dutch.set_language(Language::DUTCH);

    assert_eq!(english.t(TranslationKey::RoleClient), "Client");
    assert_eq!(dutch.t(TranslationKey::RoleClient), "Cliënt");
}

#[test]
fn test_shipped_catalog_has_no_errors() {
    let report = CatalogValidator::validate_catalog();
    assert!(!report.has_errors(), "catalog errors: {:?}", report.errors);
}

// ==================== Survey Authoring Tests ====================

#[test]
fn test_blank_options_are_dropped() {
    let survey = intake_survey();
    let questions = survey.sorted_questions();
    match &questions[1].kind {
        QuestionKind::MultipleChoice { options, .. } => assert_eq!(options, &["A", "B"]),
        other => panic!("expected multiple choice, got {:?}", other),
    }
}

#[test]
fn test_question_orders_follow_insertion() {
    let survey = intake_survey();
    let orders: Vec<u32> = survey.sorted_questions().iter().map(|q| q.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
}

#[test]
fn test_invalid_drafts_leave_survey_unchanged() {
    let survey = intake_survey();

    assert_eq!(
        survey.add_question(QuestionDraft::text("   ")),
        Err(SurveyError::EmptyQuestionText)
    );
    assert_eq!(
        survey.add_question(QuestionDraft::multiple_choice("Pick", ["", " "], true)),
        Err(SurveyError::NoOptionsProvided)
    );
    assert!(matches!(
        survey.add_question(QuestionDraft::scale("Rate", Some(5), Some(5))),
        Err(SurveyError::InvalidScaleRange { .. })
    ));
    assert_eq!(survey.questions.len(), 3);
}

#[test]
fn test_render_scale_from_authored_question() {
    let survey = intake_survey();
    match render_question_input(survey.sorted_questions()[2]) {
        RenderSpec::Scale { range, .. } => {
            let labels: Vec<String> = range.points().map(|point| point.label).collect();
            assert_eq!(labels.len(), 10);
            assert_eq!(labels.first().map(String::as_str), Some("1"));
            assert_eq!(labels.last().map(String::as_str), Some("10"));
            assert_eq!(range.min_label.as_deref(), Some("Very low"));
            assert_eq!(range.max_label.as_deref(), Some("Very good"));
        }
        other => panic!("expected scale, got {:?}", other),
    }
}

// ==================== Lifecycle Tests ====================

#[test]
fn test_status_transitions() {
    let draft = intake_survey();
    assert!(matches!(
        draft.transition_status(SurveyStatus::Closed),
        Err(SurveyError::IllegalStatusTransition { .. })
    ));

    let published = draft
        .transition_status(SurveyStatus::Published)
        .expect("draft can be published");
    assert_eq!(published.status, SurveyStatus::Published);
    assert!(published.transition_status(SurveyStatus::Draft).is_err());

    assert_eq!(
        published.add_question(QuestionDraft::boolean("Late question?")),
        Err(SurveyError::NotEditable(SurveyStatus::Published))
    );
}

#[test]
fn test_duplicate_of_published_survey() {
    let mut source = intake_survey().publish().expect("publish");
    source.id = Some("s-7".to_string());
    source.response_count = 31;

    let copy = source.duplicate();
    assert_eq!(copy.status, SurveyStatus::Draft);
    assert_eq!(copy.response_count, 0);
    assert_eq!(copy.title, "Intake (Copy)");
    assert_eq!(copy.questions, source.questions);

    let value = serde_json::to_value(&copy).expect("serialize");
    assert!(value.get("id").is_none());
    assert!(value.get("created_at").is_none());
    assert!(value.get("updated_at").is_none());
}

// ==================== Response Tests ====================

#[test]
fn test_submission_flow() {
    let survey = intake_survey().publish().expect("publish");
    let ids: Vec<String> = survey.sorted_questions().iter().map(|q| q.id.clone()).collect();

    let answers = HashMap::from([
        (ids[0].clone(), Answer::Text("Sleeping badly".to_string())),
        (ids[1].clone(), Answer::Choice("B".to_string())),
        (ids[2].clone(), Answer::Scale(7)),
    ]);
    assert_eq!(validate_submission(&survey, &answers, today()), Ok(()));

    let counted = survey.record_response(today()).expect("accepting");
    assert_eq!(counted.response_count, 1);

    let closed = counted.close().expect("close");
    assert_eq!(
        validate_submission(&closed, &answers, today()),
        Err(SubmissionError::Survey(SurveyError::NotAcceptingResponses(
            SurveyStatus::Closed
        )))
    );
}

// ==================== Survey API Tests ====================

#[tokio::test]
async fn test_duplicate_through_backend() {
    let server = MockServer::start().await;

    let source = serde_json::json!({
        "id": "s1",
        "title": "Satisfaction",
        "type": "satisfaction",
        "status": "closed",
        "questions": [
            { "id": "q1", "text": "Happy?", "order": 1, "type": "boolean" }
        ],
        "response_count": 40
    });
    Mock::given(method("GET"))
        .and(path("/api/surveys/s1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "success": true, "data": source })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut created = source.clone();
    created["id"] = serde_json::json!("s9");
    created["title"] = serde_json::json!("Satisfaction (Copy)");
    created["status"] = serde_json::json!("draft");
    created["response_count"] = serde_json::json!(0);
    Mock::given(method("POST"))
        .and(path("/api/surveys"))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(serde_json::json!({ "success": true, "data": created })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::from_lookup(|name| match name {
        "API_BASE_URL" => Some(format!("{}/api/", server.uri())),
        "API_TIMEOUT_SECS" => Some("5".to_string()),
        _ => None,
    })
    .expect("valid config");
    let client = SurveyApiClient::new(&config).expect("client");

    let copy = client.duplicate_survey("s1").await.expect("Should succeed");
    assert_eq!(copy.id.as_deref(), Some("s9"));
    assert_eq!(copy.status, SurveyStatus::Draft);
    assert_eq!(copy.response_count, 0);
    assert_eq!(copy.title, "Satisfaction (Copy)");
}
