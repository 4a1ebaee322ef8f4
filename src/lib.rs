//! PraktijkEPD core: interface translations and the survey model.

pub mod config;
pub mod i18n;
pub mod retry;
pub mod survey;
pub mod survey_api;
