//! Tagged-variant update commands for the editor.
//!
//! Every field mutation arrives as an explicit `{field, value}` command so
//! dispatch stays generic on the wire while the set of mutable fields is a
//! closed enum. Applying `Current(true)` deliberately leaves a stale end
//! date in place; the renderer is responsible for never displaying it.

use serde::Deserialize;

use crate::models::document::{DegreeKind, EducationEntry, ExperienceEntry, PersonalInfo, ResumeConfig};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum PersonalUpdate {
    FullName(String),
    Email(String),
    Phone(String),
    Linkedin(String),
    Address(String),
    JobTitle(String),
}

impl PersonalUpdate {
    pub fn apply(self, info: &mut PersonalInfo) {
        match self {
            PersonalUpdate::FullName(v) => info.full_name = v,
            PersonalUpdate::Email(v) => info.email = v,
            PersonalUpdate::Phone(v) => info.phone = v,
            PersonalUpdate::Linkedin(v) => info.linkedin = Some(v),
            PersonalUpdate::Address(v) => info.address = Some(v),
            PersonalUpdate::JobTitle(v) => info.job_title = v,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ConfigUpdate {
    /// Stored as given; unknown tags fall back to the modern layout at render time.
    TemplateId(String),
    Color(String),
}

impl ConfigUpdate {
    pub fn apply(self, config: &mut ResumeConfig) {
        match self {
            ConfigUpdate::TemplateId(v) => config.template_id = v,
            ConfigUpdate::Color(v) => config.color = v,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ExperienceUpdate {
    Company(String),
    Position(String),
    StartDate(String),
    EndDate(String),
    Current(bool),
    Description(String),
}

impl ExperienceUpdate {
    pub fn apply(self, entry: &mut ExperienceEntry) {
        match self {
            ExperienceUpdate::Company(v) => entry.company = v,
            ExperienceUpdate::Position(v) => entry.position = v,
            ExperienceUpdate::StartDate(v) => entry.start_date = v,
            ExperienceUpdate::EndDate(v) => entry.end_date = v,
            ExperienceUpdate::Current(v) => entry.current = v,
            ExperienceUpdate::Description(v) => entry.description = v,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum EducationUpdate {
    Institution(String),
    Course(String),
    Kind(DegreeKind),
    StartDate(String),
    EndDate(String),
    Current(bool),
}

impl EducationUpdate {
    pub fn apply(self, entry: &mut EducationEntry) {
        match self {
            EducationUpdate::Institution(v) => entry.institution = v,
            EducationUpdate::Course(v) => entry.course = v,
            EducationUpdate::Kind(v) => entry.kind = v,
            EducationUpdate::StartDate(v) => entry.start_date = v,
            EducationUpdate::EndDate(v) => entry.end_date = v,
            EducationUpdate::Current(v) => entry.current = v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_personal_update_deserializes_from_tagged_json() {
        let update: PersonalUpdate =
            serde_json::from_str(r#"{"field": "full_name", "value": "Ana Silva"}"#).unwrap();
        let mut info = PersonalInfo::default();
        update.apply(&mut info);
        assert_eq!(info.full_name, "Ana Silva");
    }

    #[test]
    fn test_experience_current_accepts_bool_value() {
        let update: ExperienceUpdate =
            serde_json::from_str(r#"{"field": "current", "value": true}"#).unwrap();
        let mut entry = ExperienceEntry::blank();
        update.apply(&mut entry);
        assert!(entry.current);
    }

    #[test]
    fn test_setting_current_keeps_stale_end_date() {
        let mut entry = ExperienceEntry::blank();
        entry.end_date = "2021-02-20".to_string();
        ExperienceUpdate::Current(true).apply(&mut entry);
        assert!(entry.current);
        assert_eq!(entry.end_date, "2021-02-20", "stale end date is retained, not cleared");
    }

    #[test]
    fn test_education_kind_uses_portuguese_label() {
        let update: EducationUpdate =
            serde_json::from_str(r#"{"field": "kind", "value": "Mestrado"}"#).unwrap();
        let mut entry = EducationEntry::blank();
        update.apply(&mut entry);
        assert_eq!(entry.kind, DegreeKind::Masters);
    }

    #[test]
    fn test_unknown_field_is_rejected_at_parse_time() {
        let parsed = serde_json::from_str::<ExperienceUpdate>(r#"{"field": "salary", "value": "1"}"#);
        assert!(parsed.is_err());
    }
}
