//! The canonical in-memory résumé Document and its entry types.
//!
//! A Document is valid in any state, including fully empty; the renderer
//! substitutes placeholders where display requires them. List entries carry
//! v4 UUIDs generated at creation time so update/remove-by-id can never
//! merge two distinct entries.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Degree-type tag for an education entry, drawn from a fixed closed set.
/// Serialized with the Portuguese labels the editor presents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeKind {
    #[serde(rename = "Graduação")]
    Undergraduate,
    #[serde(rename = "Técnico")]
    Technical,
    #[serde(rename = "Curso Livre")]
    ShortCourse,
    #[serde(rename = "Mestrado")]
    Masters,
    #[serde(rename = "Doutorado")]
    Doctorate,
    #[serde(rename = "Outro")]
    Other,
}

impl Default for DegreeKind {
    fn default() -> Self {
        DegreeKind::Undergraduate
    }
}

/// Free-form personal header data. No field is required; `photo` holds a
/// self-contained `data:<mime>;base64,...` URL when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
    pub job_title: String,
}

/// One professional experience record. Dates are ISO calendar strings or
/// empty; unparseable values are tolerated and surface verbatim in display.
/// When `current` is true the `end_date` may hold a stale value; it is
/// retained but never shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub description: String,
}

impl ExperienceEntry {
    /// A blank entry with a fresh unique id, as prepended by the editor.
    pub fn blank() -> Self {
        ExperienceEntry {
            id: Uuid::new_v4(),
            company: String::new(),
            position: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
            description: String::new(),
        }
    }
}

/// One education record. Same date and current-flag conventions as
/// [`ExperienceEntry`]; the degree kind is stored but not rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub institution: String,
    pub course: String,
    pub kind: DegreeKind,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
}

impl EducationEntry {
    pub fn blank() -> Self {
        EducationEntry {
            id: Uuid::new_v4(),
            institution: String::new(),
            course: String::new(),
            kind: DegreeKind::default(),
            start_date: String::new(),
            end_date: String::new(),
            current: false,
        }
    }
}

/// The user's design choices. Preserved across document resets.
///
/// `template_id` is stored as given; resolution to a concrete layout happens
/// at render time with an explicit fallback to the modern variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeConfig {
    pub template_id: String,
    pub color: String,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        ResumeConfig {
            template_id: "modern".to_string(),
            color: crate::models::catalog::DEFAULT_COLOR.to_string(),
        }
    }
}

/// The complete in-memory résumé state for one session.
///
/// Experience and education lists keep insertion order as display order
/// (newest additions prepended); skills keep the order they were parsed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub personal_info: PersonalInfo,
    pub objective: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
    pub config: ResumeConfig,
}

impl Document {
    /// The all-empty default every session starts from.
    pub fn empty() -> Self {
        Document {
            personal_info: PersonalInfo::default(),
            objective: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            config: ResumeConfig::default(),
        }
    }

    /// The built-in example résumé (Ana Silva) users can load to explore
    /// the templates. Photo stays empty; users upload their own.
    pub fn example() -> Self {
        Document {
            personal_info: PersonalInfo {
                full_name: "Ana Silva".to_string(),
                email: "ana.silva@email.com.br".to_string(),
                phone: "(11) 99876-5432".to_string(),
                linkedin: Some("linkedin.com/in/ana-silva-mkt".to_string()),
                address: Some("São Paulo, SP".to_string()),
                photo: None,
                job_title: "Gerente de Marketing Digital".to_string(),
            },
            objective: "Profissional com mais de 8 anos de experiência em estratégias de \
                        marketing digital, liderança de equipes e gestão de marca. Focada em \
                        resultados, aumento de ROI e implementação de metodologias ágeis em \
                        departamentos de comunicação."
                .to_string(),
            experience: vec![
                ExperienceEntry {
                    id: Uuid::new_v4(),
                    company: "Tech Solutions Ltda".to_string(),
                    position: "Coordenadora de Marketing".to_string(),
                    start_date: "2021-03-01".to_string(),
                    end_date: String::new(),
                    current: true,
                    description: "Responsável pela gestão de equipe de 10 pessoas, planejamento \
                                  de campanhas de inbound marketing e análise de métricas de \
                                  performance (KPIs). Aumentei o lead scoring em 40% no primeiro \
                                  ano."
                        .to_string(),
                },
                ExperienceEntry {
                    id: Uuid::new_v4(),
                    company: "Agência Criativa".to_string(),
                    position: "Analista de Mídia Senior".to_string(),
                    start_date: "2018-01-15".to_string(),
                    end_date: "2021-02-20".to_string(),
                    current: false,
                    description: "Gestão de tráfego pago (Google Ads, Meta Ads) com verba mensal \
                                  de R$ 50k. Criação de relatórios gerenciais e otimização de \
                                  conversão (CRO)."
                        .to_string(),
                },
            ],
            education: vec![
                EducationEntry {
                    id: Uuid::new_v4(),
                    institution: "USP - Universidade de São Paulo".to_string(),
                    course: "Publicidade e Propaganda".to_string(),
                    kind: DegreeKind::Undergraduate,
                    start_date: "2014-02-01".to_string(),
                    end_date: "2017-12-15".to_string(),
                    current: false,
                },
                EducationEntry {
                    id: Uuid::new_v4(),
                    institution: "FGV".to_string(),
                    course: "MBA em Gestão Empresarial".to_string(),
                    kind: DegreeKind::Masters,
                    start_date: "2019-03-01".to_string(),
                    end_date: "2020-12-20".to_string(),
                    current: false,
                },
            ],
            skills: [
                "Liderança de Equipes",
                "Google Analytics 4",
                "SEO & SEM",
                "Gestão de Projetos (Scrum)",
                "Inglês Fluente",
                "CRM (Salesforce)",
                "Copywriting",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            config: ResumeConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_has_modern_defaults() {
        let doc = Document::empty();
        assert_eq!(doc.config.template_id, "modern");
        assert_eq!(doc.config.color, "#2563eb");
        assert!(doc.experience.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.skills.is_empty());
        assert!(doc.personal_info.full_name.is_empty());
    }

    #[test]
    fn test_example_document_is_populated() {
        let doc = Document::example();
        assert_eq!(doc.personal_info.full_name, "Ana Silva");
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.education.len(), 2);
        assert_eq!(doc.skills.len(), 7);
        assert!(doc.experience[0].current);
        assert!(doc.personal_info.photo.is_none());
    }

    #[test]
    fn test_blank_entries_get_distinct_ids() {
        let a = ExperienceEntry::blank();
        let b = ExperienceEntry::blank();
        assert_ne!(a.id, b.id);
        assert!(!a.current);
        assert!(a.company.is_empty());
    }

    #[test]
    fn test_degree_kind_serializes_to_portuguese_label() {
        let json = serde_json::to_string(&DegreeKind::Undergraduate).unwrap();
        assert_eq!(json, "\"Graduação\"");
        let back: DegreeKind = serde_json::from_str("\"Curso Livre\"").unwrap();
        assert_eq!(back, DegreeKind::ShortCourse);
    }

    #[test]
    fn test_document_round_trips_through_json() {
        let doc = Document::example();
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(doc, back);
    }
}
