//! Editor operations over the Document.
//!
//! Every operation is a pure copy-on-write function: it borrows the prior
//! Document and returns a new value, never mutating in place. Rendering and
//! comparison can therefore reason about value identity, and a collaborator
//! failure between snapshot and apply can never leave a half-mutated state.
//!
//! Lookup misses in update/remove-by-id are silent no-ops by contract.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use uuid::Uuid;

use crate::editor::commands::{ConfigUpdate, EducationUpdate, ExperienceUpdate, PersonalUpdate};
use crate::editor::sorter::{sort_education_by_recency, sort_experience_by_recency};
use crate::models::document::{Document, EducationEntry, ExperienceEntry};

pub fn apply_personal(doc: &Document, update: PersonalUpdate) -> Document {
    let mut next = doc.clone();
    update.apply(&mut next.personal_info);
    next
}

pub fn apply_config(doc: &Document, update: ConfigUpdate) -> Document {
    let mut next = doc.clone();
    update.apply(&mut next.config);
    next
}

pub fn set_objective(doc: &Document, text: String) -> Document {
    let mut next = doc.clone();
    next.objective = text;
    next
}

/// Prepends a blank experience entry with a fresh unique id.
pub fn add_experience(doc: &Document) -> Document {
    let mut next = doc.clone();
    next.experience.insert(0, ExperienceEntry::blank());
    next
}

pub fn update_experience(doc: &Document, id: Uuid, update: ExperienceUpdate) -> Document {
    let mut next = doc.clone();
    if let Some(entry) = next.experience.iter_mut().find(|e| e.id == id) {
        update.apply(entry);
    }
    next
}

/// Removes at most one matching entry; no-op when the id is absent.
pub fn remove_experience(doc: &Document, id: Uuid) -> Document {
    let mut next = doc.clone();
    if let Some(pos) = next.experience.iter().position(|e| e.id == id) {
        next.experience.remove(pos);
    }
    next
}

pub fn sort_experience(doc: &Document) -> Document {
    let mut next = doc.clone();
    next.experience = sort_experience_by_recency(&next.experience);
    next
}

pub fn add_education(doc: &Document) -> Document {
    let mut next = doc.clone();
    next.education.insert(0, EducationEntry::blank());
    next
}

pub fn update_education(doc: &Document, id: Uuid, update: EducationUpdate) -> Document {
    let mut next = doc.clone();
    if let Some(entry) = next.education.iter_mut().find(|e| e.id == id) {
        update.apply(entry);
    }
    next
}

pub fn remove_education(doc: &Document, id: Uuid) -> Document {
    let mut next = doc.clone();
    if let Some(pos) = next.education.iter().position(|e| e.id == id) {
        next.education.remove(pos);
    }
    next
}

pub fn sort_education(doc: &Document) -> Document {
    let mut next = doc.clone();
    next.education = sort_education_by_recency(&next.education);
    next
}

/// Replaces the skill list wholesale from a comma-separated input:
/// pieces are trimmed and blanks dropped.
pub fn set_skills_from_text(doc: &Document, text: &str) -> Document {
    let mut next = doc.clone();
    next.skills = text
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    next
}

/// Replaces the whole Document with the empty one, preserving only the
/// current Configuration. Callers must have collected an explicit user
/// confirmation before invoking.
pub fn reset_to_empty(doc: &Document) -> Document {
    let mut next = Document::empty();
    next.config = doc.config.clone();
    next
}

/// Same preservation rule as [`reset_to_empty`], loading the built-in example.
pub fn reset_to_example(doc: &Document) -> Document {
    let mut next = Document::example();
    next.config = doc.config.clone();
    next
}

/// Stores the uploaded image as a self-contained data URL.
pub fn attach_photo(doc: &Document, bytes: &[u8], mime: &str) -> Document {
    let mut next = doc.clone();
    next.personal_info.photo = Some(format!("data:{mime};base64,{}", STANDARD.encode(bytes)));
    next
}

pub fn clear_photo(doc: &Document) -> Document {
    let mut next = doc.clone();
    next.personal_info.photo = None;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::commands::PersonalUpdate;

    #[test]
    fn test_operations_leave_prior_document_untouched() {
        let doc = Document::empty();
        let next = apply_personal(&doc, PersonalUpdate::FullName("Ana".to_string()));
        assert_eq!(doc.personal_info.full_name, "");
        assert_eq!(next.personal_info.full_name, "Ana");
    }

    #[test]
    fn test_add_experience_prepends_blank_entry() {
        let doc = add_experience(&Document::example());
        assert_eq!(doc.experience.len(), 3);
        assert!(doc.experience[0].company.is_empty());
        assert_eq!(doc.experience[1].company, "Tech Solutions Ltda");
    }

    #[test]
    fn test_added_entries_have_unique_ids() {
        let doc = add_experience(&add_experience(&Document::empty()));
        assert_ne!(doc.experience[0].id, doc.experience[1].id);
    }

    #[test]
    fn test_update_experience_unknown_id_is_silent_noop() {
        let doc = Document::example();
        let next = update_experience(
            &doc,
            Uuid::new_v4(),
            ExperienceUpdate::Company("X".to_string()),
        );
        assert_eq!(doc, next, "unknown id leaves list length and content identical");
    }

    #[test]
    fn test_update_experience_targets_single_entry() {
        let doc = Document::example();
        let id = doc.experience[1].id;
        let next = update_experience(&doc, id, ExperienceUpdate::Position("CTO".to_string()));
        assert_eq!(next.experience[1].position, "CTO");
        assert_eq!(next.experience[0].position, doc.experience[0].position);
    }

    #[test]
    fn test_remove_experience_removes_at_most_one() {
        let doc = Document::example();
        let id = doc.experience[0].id;
        let next = remove_experience(&doc, id);
        assert_eq!(next.experience.len(), 1);
        let unchanged = remove_experience(&next, id);
        assert_eq!(unchanged.experience.len(), 1);
    }

    #[test]
    fn test_remove_education_unknown_id_is_noop() {
        let doc = Document::example();
        let next = remove_education(&doc, Uuid::new_v4());
        assert_eq!(doc, next);
    }

    #[test]
    fn test_set_skills_trims_and_drops_blanks() {
        let doc = set_skills_from_text(&Document::empty(), "React, Go ,  , SQL");
        assert_eq!(doc.skills, vec!["React", "Go", "SQL"]);
    }

    #[test]
    fn test_set_skills_replaces_wholesale() {
        let doc = set_skills_from_text(&Document::example(), "Excel");
        assert_eq!(doc.skills, vec!["Excel"]);
    }

    #[test]
    fn test_set_skills_empty_input_clears_list() {
        let doc = set_skills_from_text(&Document::example(), "  ,  , ");
        assert!(doc.skills.is_empty());
    }

    #[test]
    fn test_reset_to_empty_preserves_config() {
        let mut doc = Document::example();
        doc.config.template_id = "minimal".to_string();
        doc.config.color = "#dc2626".to_string();
        let next = reset_to_empty(&doc);
        assert!(next.personal_info.full_name.is_empty());
        assert!(next.experience.is_empty());
        assert_eq!(next.config.template_id, "minimal");
        assert_eq!(next.config.color, "#dc2626");
    }

    #[test]
    fn test_reset_to_example_preserves_config() {
        let mut doc = Document::empty();
        doc.config.color = "#059669".to_string();
        let next = reset_to_example(&doc);
        assert_eq!(next.personal_info.full_name, "Ana Silva");
        assert_eq!(next.config.color, "#059669");
    }

    #[test]
    fn test_attach_photo_builds_data_url() {
        let doc = attach_photo(&Document::empty(), b"fake-png-bytes", "image/png");
        let photo = doc.personal_info.photo.unwrap();
        assert!(photo.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_clear_photo_resets_field() {
        let doc = attach_photo(&Document::empty(), b"x", "image/jpeg");
        let next = clear_photo(&doc);
        assert!(next.personal_info.photo.is_none());
    }

    #[test]
    fn test_sort_experience_is_one_shot_transform() {
        let doc = Document::example();
        // Example data already has the current entry first; reverse it to
        // prove the sort reorders.
        let mut reversed = doc.clone();
        reversed.experience.reverse();
        let sorted = sort_experience(&reversed);
        assert!(sorted.experience[0].current);
    }
}
