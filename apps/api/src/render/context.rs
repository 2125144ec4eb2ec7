//! The render context shared by all template variants.
//!
//! All per-field display rules live here so the minijinja templates carry
//! only geometry and typography: date labels are preformatted, durations
//! computed, the current flag hides any stale end date, and optional
//! contact items flatten to empty strings (falsy in templates). Variants
//! differ solely in how they lay these values out.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::document::{Document, EducationEntry, ExperienceEntry};
use crate::render::dates::{calculate_duration, format_display_date, parse_iso_date};

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceView {
    pub position: String,
    pub company: String,
    pub description: String,
    pub start: String,
    /// Formatted end date; empty when the entry is current, so a stale
    /// stored value can never leak into display.
    pub end: String,
    pub current: bool,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationView {
    pub course: String,
    pub institution: String,
    pub start: String,
    pub end: String,
    pub start_year: String,
    pub end_year: String,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageContext {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub photo: String,
    pub objective: String,
    pub color: String,
    pub experience: Vec<ExperienceView>,
    pub education: Vec<EducationView>,
    pub skills: Vec<String>,
}

pub fn build_context(doc: &Document, today: NaiveDate) -> PageContext {
    PageContext {
        full_name: doc.personal_info.full_name.clone(),
        job_title: doc.personal_info.job_title.clone(),
        email: doc.personal_info.email.clone(),
        phone: doc.personal_info.phone.clone(),
        address: doc.personal_info.address.clone().unwrap_or_default(),
        linkedin: doc.personal_info.linkedin.clone().unwrap_or_default(),
        photo: doc.personal_info.photo.clone().unwrap_or_default(),
        objective: doc.objective.clone(),
        color: doc.config.color.clone(),
        experience: doc
            .experience
            .iter()
            .map(|e| experience_view(e, today))
            .collect(),
        education: doc.education.iter().map(education_view).collect(),
        skills: doc.skills.clone(),
    }
}

fn experience_view(entry: &ExperienceEntry, today: NaiveDate) -> ExperienceView {
    ExperienceView {
        position: entry.position.clone(),
        company: entry.company.clone(),
        description: entry.description.clone(),
        start: format_display_date(&entry.start_date),
        end: if entry.current {
            String::new()
        } else {
            format_display_date(&entry.end_date)
        },
        current: entry.current,
        duration: calculate_duration(&entry.start_date, &entry.end_date, entry.current, today),
    }
}

fn education_view(entry: &EducationEntry) -> EducationView {
    let end = if entry.current {
        String::new()
    } else {
        format_display_date(&entry.end_date)
    };
    EducationView {
        course: entry.course.clone(),
        institution: entry.institution.clone(),
        start: format_display_date(&entry.start_date),
        start_year: year_label(&entry.start_date),
        end_year: if entry.current {
            String::new()
        } else {
            year_label(&entry.end_date)
        },
        end,
        current: entry.current,
    }
}

/// Year-only label for compact layouts; empty unless the date parses.
fn year_label(raw: &str) -> String {
    parse_iso_date(raw)
        .map(|d| chrono::Datelike::year(&d).to_string())
        .unwrap_or_default()
}
