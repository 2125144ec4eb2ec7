//! One-shot recency sort for experience and education lists.
//!
//! User-invoked transform; insertion order stays authoritative otherwise.
//! Current entries always sort first regardless of dates. The reference
//! date is the start date for experience and the end date (falling back to
//! the start date) for education. Missing or unparseable reference dates
//! sort as the earliest possible date, i.e. last.

use chrono::NaiveDate;

use crate::models::document::{EducationEntry, ExperienceEntry};
use crate::render::dates::parse_iso_date;

/// Sort key ordered so that a plain descending comparison yields the
/// desired order: current first, then most recent reference date.
fn recency_key(current: bool, reference: Option<NaiveDate>) -> (bool, NaiveDate) {
    (current, reference.unwrap_or(NaiveDate::MIN))
}

pub fn sort_experience_by_recency(entries: &[ExperienceEntry]) -> Vec<ExperienceEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let ka = recency_key(a.current, parse_iso_date(&a.start_date));
        let kb = recency_key(b.current, parse_iso_date(&b.start_date));
        kb.cmp(&ka)
    });
    sorted
}

pub fn sort_education_by_recency(entries: &[EducationEntry]) -> Vec<EducationEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let ka = recency_key(a.current, education_reference(a));
        let kb = recency_key(b.current, education_reference(b));
        kb.cmp(&ka)
    });
    sorted
}

fn education_reference(entry: &EducationEntry) -> Option<NaiveDate> {
    parse_iso_date(&entry.end_date).or_else(|| parse_iso_date(&entry.start_date))
}
