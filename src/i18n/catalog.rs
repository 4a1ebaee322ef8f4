//! Static translation catalog.
//!
//! Keys form the closed [`TranslationKey`] enum, so a typo in a key used from
//! Rust is a compile error. Keys that are built at runtime (for example
//! `"role." + backend_value`) go through [`TranslationKey::from_key`] and fall
//! back at runtime when absent.
//!
//! Every entry carries an English string. The Dutch string is optional;
//! lookups for a missing or empty Dutch string resolve to English.

use crate::i18n::Language;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Per-language strings for one catalog key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry {
    pub en: &'static str,
    pub nl: Option<&'static str>,
}

/// Outcome of resolving an entry for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The requested language had a string
    Exact(&'static str),
    /// The requested language had no string; English was used
    Fallback(&'static str),
    /// Not even English is usable (empty string)
    Missing,
}

impl TranslationEntry {
    /// The raw string stored for `language`, if any.
    pub fn get(&self, language: Language) -> Option<&'static str> {
        match language.code() {
            "en" => Some(self.en),
            "nl" => self.nl,
            _ => None,
        }
    }

    /// Pick the string to display for `language`.
    ///
    /// Empty strings count as absent, so an entry whose English value is
    /// empty resolves to [`Resolution::Missing`] and the caller shows the key.
    pub fn resolve(&self, language: Language) -> Resolution {
        match self.get(language).filter(|s| !s.is_empty()) {
            Some(text) => Resolution::Exact(text),
            None if !self.en.is_empty() => Resolution::Fallback(self.en),
            None => Resolution::Missing,
        }
    }
}

macro_rules! translation_catalog {
    (@nl) => { None };
    (@nl $nl:literal) => { Some($nl) };
    (
        $(
            $variant:ident => $key:literal { en: $en:literal $(, nl: $nl:literal)? }
        ),* $(,)?
    ) => {
        /// Every key known to the catalog.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum TranslationKey {
            $($variant),*
        }

        impl TranslationKey {
            pub const ALL: &'static [TranslationKey] = &[$(TranslationKey::$variant),*];

            /// The dot-namespaced key string, e.g. `"nav.dashboard"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(TranslationKey::$variant => $key),*
                }
            }

            pub const fn entry(self) -> TranslationEntry {
                match self {
                    $(
                        TranslationKey::$variant => TranslationEntry {
                            en: $en,
                            nl: translation_catalog!(@nl $($nl)?),
                        }
                    ),*
                }
            }
        }
    };
}

translation_catalog! {
    // Navigation
    NavDashboard => "nav.dashboard" { en: "Dashboard", nl: "Dashboard" },
    NavClients => "nav.clients" { en: "Clients", nl: "Cliënten" },
    NavAppointments => "nav.appointments" { en: "Appointments", nl: "Afspraken" },
    NavInvoices => "nav.invoices" { en: "Invoices", nl: "Facturen" },
    NavMessages => "nav.messages" { en: "Messages", nl: "Berichten" },
    NavSurveys => "nav.surveys" { en: "Surveys", nl: "Vragenlijsten" },
    NavResources => "nav.resources" { en: "Resources", nl: "Hulpmiddelen" },
    NavSettings => "nav.settings" { en: "Settings", nl: "Instellingen" },
    NavLogout => "nav.logout" { en: "Log out", nl: "Uitloggen" },

    // Common actions
    ActionSave => "action.save" { en: "Save", nl: "Opslaan" },
    ActionCancel => "action.cancel" { en: "Cancel", nl: "Annuleren" },
    ActionDelete => "action.delete" { en: "Delete", nl: "Verwijderen" },
    ActionEdit => "action.edit" { en: "Edit", nl: "Bewerken" },
    ActionCreate => "action.create" { en: "Create", nl: "Aanmaken" },
    ActionSearch => "action.search" { en: "Search", nl: "Zoeken" },
    ActionExport => "action.export" { en: "Export", nl: "Exporteren" },
    ActionDuplicate => "action.duplicate" { en: "Duplicate", nl: "Dupliceren" },
    ActionAssign => "action.assign" { en: "Assign", nl: "Toewijzen" },

    // Roles
    RoleAdmin => "role.admin" { en: "Administrator", nl: "Beheerder" },
    RoleTherapist => "role.therapist" { en: "Therapist", nl: "Therapeut" },
    RoleAssistant => "role.assistant" { en: "Assistant", nl: "Assistent" },
    RoleBookkeeper => "role.bookkeeper" { en: "Bookkeeper", nl: "Boekhouder" },
    RoleClient => "role.client" { en: "Client", nl: "Cliënt" },
    RoleSubstitute => "role.substitute" { en: "Substitute" },

    // Statuses
    StatusActive => "status.active" { en: "Active", nl: "Actief" },
    StatusInactive => "status.inactive" { en: "Inactive", nl: "Inactief" },
    StatusPending => "status.pending" { en: "Pending", nl: "In afwachting" },
    StatusScheduled => "status.scheduled" { en: "Scheduled", nl: "Gepland" },
    StatusConfirmed => "status.confirmed" { en: "Confirmed", nl: "Bevestigd" },
    StatusCompleted => "status.completed" { en: "Completed", nl: "Voltooid" },
    StatusCancelled => "status.cancelled" { en: "Cancelled", nl: "Geannuleerd" },
    StatusNoShow => "status.no_show" { en: "No show", nl: "Niet verschenen" },
    StatusPaid => "status.paid" { en: "Paid", nl: "Betaald" },
    StatusSent => "status.sent" { en: "Sent", nl: "Verzonden" },
    StatusOverdue => "status.overdue" { en: "Overdue", nl: "Achterstallig" },
    StatusDraft => "status.draft" { en: "Draft", nl: "Concept" },
    StatusPublished => "status.published" { en: "Published", nl: "Gepubliceerd" },
    StatusClosed => "status.closed" { en: "Closed", nl: "Gesloten" },

    // Form validation
    ValidationRequired => "validation.required" { en: "This field is required", nl: "Dit veld is verplicht" },
    ValidationEmail => "validation.email" { en: "Enter a valid email address", nl: "Voer een geldig e-mailadres in" },
    ValidationMinLength => "validation.minLength" { en: "Minimum length is {0} characters", nl: "Minimale lengte is {0} karakters" },
    ValidationMaxLength => "validation.maxLength" { en: "Maximum length is {0} characters", nl: "Maximale lengte is {0} karakters" },
    ValidationRange => "validation.range" { en: "Enter a value between {min} and {max}", nl: "Voer een waarde in tussen {min} en {max}" },

    // Surveys
    SurveyTitle => "survey.title" { en: "Survey title", nl: "Titel vragenlijst" },
    SurveyDescription => "survey.description" { en: "Description", nl: "Beschrijving" },
    SurveyAddQuestion => "survey.addQuestion" { en: "Add question", nl: "Vraag toevoegen" },
    SurveyRemoveQuestion => "survey.removeQuestion" { en: "Remove question", nl: "Vraag verwijderen" },
    SurveyQuestionCount => "survey.questionCount" { en: "{count} questions", nl: "{count} vragen" },
    SurveyResponseCount => "survey.responseCount" { en: "{count} responses", nl: "{count} reacties" },
    SurveyAnonymous => "survey.anonymous" { en: "Anonymous responses", nl: "Anonieme reacties" },
    SurveyAllowMultiple => "survey.allowMultipleSubmissions" { en: "Allow multiple submissions", nl: "Meerdere inzendingen toestaan" },
    SurveyValidUntil => "survey.validUntil" { en: "Valid until {date}", nl: "Geldig tot {date}" },
    SurveyCopySuffix => "survey.copySuffix" { en: "(Copy)" },
    SurveyPublished => "survey.published" { en: "Survey \"{title}\" is now published", nl: "Vragenlijst \"{title}\" is gepubliceerd" },
    SurveyAssigned => "survey.assigned" { en: "Survey assigned to {count} clients", nl: "Vragenlijst toegewezen aan {count} cliënten" },
    SurveyTypeAssessment => "survey.type.assessment" { en: "Assessment", nl: "Intake / beoordeling" },
    SurveyTypeFeedback => "survey.type.feedback" { en: "Feedback", nl: "Feedback" },
    SurveyTypeProgress => "survey.type.progress" { en: "Progress", nl: "Voortgang" },
    SurveyTypeSatisfaction => "survey.type.satisfaction" { en: "Satisfaction", nl: "Tevredenheid" },
    SurveyTypeCustom => "survey.type.custom" { en: "Custom", nl: "Aangepast" },
    QuestionText => "question.type.text" { en: "Open text", nl: "Open tekst" },
    QuestionMultipleChoice => "question.type.multipleChoice" { en: "Multiple choice", nl: "Meerkeuze" },
    QuestionScale => "question.type.scale" { en: "Scale", nl: "Schaal" },
    QuestionBoolean => "question.type.boolean" { en: "Yes / No", nl: "Ja / Nee" },
    QuestionRequired => "question.required" { en: "Required", nl: "Verplicht" },
    QuestionYes => "question.yes" { en: "Yes", nl: "Ja" },
    QuestionNo => "question.no" { en: "No", nl: "Nee" },
    ErrorEmptyQuestionText => "survey.error.emptyQuestionText" { en: "Question text cannot be empty", nl: "Vraagtekst mag niet leeg zijn" },
    ErrorNoOptions => "survey.error.noOptions" { en: "Add at least one answer option", nl: "Voeg minstens één antwoordoptie toe" },
    ErrorInvalidScale => "survey.error.invalidScale" { en: "Scale minimum must be lower than maximum", nl: "Schaalminimum moet lager zijn dan het maximum" },
    ErrorIllegalTransition => "survey.error.illegalTransition" { en: "Cannot change status from {from} to {to}", nl: "Status kan niet van {from} naar {to} worden gewijzigd" },

    // Dashboards
    DashboardWelcome => "dashboard.welcome" { en: "Welcome back, {name}", nl: "Welkom terug, {name}" },
    DashboardUpcoming => "dashboard.upcomingAppointments" { en: "Upcoming appointments", nl: "Komende afspraken" },
    DashboardUnread => "dashboard.unreadMessages" { en: "{count} unread messages", nl: "{count} ongelezen berichten" },
    DashboardOutstanding => "dashboard.outstandingInvoices" { en: "Outstanding invoices", nl: "Openstaande facturen" },

    // Common
    CommonLoading => "common.loading" { en: "Loading...", nl: "Laden..." },
    CommonNoResults => "common.noResults" { en: "No results found", nl: "Geen resultaten gevonden" },
    CommonError => "common.error" { en: "Something went wrong", nl: "Er is iets misgegaan" },
    CommonLanguage => "common.language" { en: "Language", nl: "Taal" },
    CommonPageOf => "common.pageOf" { en: "Page {page} of {total}", nl: "Pagina {page} van {total}" },
}

static KEY_INDEX: OnceLock<HashMap<&'static str, TranslationKey>> = OnceLock::new();

impl TranslationKey {
    /// Look up a key by its string form.
    pub fn from_key(key: &str) -> Option<TranslationKey> {
        KEY_INDEX
            .get_or_init(|| {
                TranslationKey::ALL
                    .iter()
                    .map(|key| (key.as_str(), *key))
                    .collect()
            })
            .get(key)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = TranslationKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), TranslationKey::ALL.len());
    }

    #[test]
    fn test_every_entry_has_english() {
        for key in TranslationKey::ALL {
            assert!(!key.entry().en.is_empty(), "{} has no English", key.as_str());
        }
    }

    #[test]
    fn test_from_key_roundtrip() {
        for key in TranslationKey::ALL {
            assert_eq!(TranslationKey::from_key(key.as_str()), Some(*key));
        }
        assert_eq!(TranslationKey::from_key("nav.nothing"), None);
        assert_eq!(TranslationKey::from_key(""), None);
    }

    #[test]
    fn test_min_length_entry() {
        let entry = TranslationKey::ValidationMinLength.entry();
        assert_eq!(entry.en, "Minimum length is {0} characters");
        assert_eq!(entry.nl, Some("Minimale lengte is {0} karakters"));
    }

    #[test]
    fn test_english_only_entry_has_no_dutch() {
        assert_eq!(TranslationKey::RoleSubstitute.entry().nl, None);
    }

    // ==================== Resolution Tests ====================

    #[test]
    fn test_resolve_exact() {
        let entry = TranslationKey::NavClients.entry();
        assert_eq!(entry.resolve(Language::DUTCH), Resolution::Exact("Cliënten"));
        assert_eq!(entry.resolve(Language::ENGLISH), Resolution::Exact("Clients"));
    }

    #[test]
    fn test_resolve_falls_back_to_english() {
        let entry = TranslationKey::RoleSubstitute.entry();
        assert_eq!(entry.resolve(Language::DUTCH), Resolution::Fallback("Substitute"));
    }

    #[test]
    fn test_resolve_empty_dutch_falls_back() {
        let entry = TranslationEntry {
            en: "Hello",
            nl: Some(""),
        };
        assert_eq!(entry.resolve(Language::DUTCH), Resolution::Fallback("Hello"));
    }

    #[test]
    fn test_resolve_empty_english_is_missing() {
        let entry = TranslationEntry { en: "", nl: None };
        assert_eq!(entry.resolve(Language::ENGLISH), Resolution::Missing);
        assert_eq!(entry.resolve(Language::DUTCH), Resolution::Missing);
    }
}
