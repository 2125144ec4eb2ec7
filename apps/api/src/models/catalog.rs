//! The curated design catalog: template descriptors and the accent palette.
//! Read-only data served to editors; free-form colors remain accepted.

use serde::Serialize;

pub const DEFAULT_COLOR: &str = "#2563eb";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeColor {
    pub name: &'static str,
    pub value: &'static str,
}

pub const THEME_COLORS: &[ThemeColor] = &[
    ThemeColor {
        name: "Azul Executivo",
        value: "#2563eb",
    },
    ThemeColor {
        name: "Verde Sucesso",
        value: "#059669",
    },
    ThemeColor {
        name: "Roxo Criativo",
        value: "#7c3aed",
    },
    ThemeColor {
        name: "Preto Clássico",
        value: "#1e293b",
    },
    ThemeColor {
        name: "Vermelho Impacto",
        value: "#dc2626",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemplateDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const TEMPLATES: &[TemplateDescriptor] = &[
    TemplateDescriptor {
        id: "modern",
        name: "Moderno",
        description: "Barra lateral e design limpo.",
    },
    TemplateDescriptor {
        id: "classic",
        name: "Clássico",
        description: "Elegante, tradicional e sério.",
    },
    TemplateDescriptor {
        id: "minimal",
        name: "Minimalista",
        description: "Foco total no conteúdo.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_contains_default_color() {
        assert!(THEME_COLORS.iter().any(|c| c.value == DEFAULT_COLOR));
        assert_eq!(THEME_COLORS.len(), 5);
    }

    #[test]
    fn test_template_catalog_covers_all_variants() {
        let ids: Vec<&str> = TEMPLATES.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["modern", "classic", "minimal"]);
    }
}
