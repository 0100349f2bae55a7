//! Static template catalog consumed by the renderer and the gallery endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateId {
    #[default]
    Modern,
    Classic,
    Minimal,
    Creative,
    Executive,
    Elegant,
    Tech,
    Corporate,
    Swiss,
    Sidebar,
}

impl TemplateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::Modern => "modern",
            TemplateId::Classic => "classic",
            TemplateId::Minimal => "minimal",
            TemplateId::Creative => "creative",
            TemplateId::Executive => "executive",
            TemplateId::Elegant => "elegant",
            TemplateId::Tech => "tech",
            TemplateId::Corporate => "corporate",
            TemplateId::Swiss => "swiss",
            TemplateId::Sidebar => "sidebar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Professional,
    Creative,
    Simple,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    SingleColumn,
    TwoColumn,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    pub id: TemplateId,
    pub name: &'static str,
    pub category: TemplateCategory,
    pub layout: LayoutKind,
    pub is_premium: bool,
    pub recommended_for: &'static [&'static str],
}

pub static CATALOG: [TemplateInfo; 10] = [
    TemplateInfo {
        id: TemplateId::Modern,
        name: "Modern",
        category: TemplateCategory::Professional,
        layout: LayoutKind::SingleColumn,
        is_premium: false,
        recommended_for: &["Software engineers", "Product managers", "Marketing"],
    },
    TemplateInfo {
        id: TemplateId::Classic,
        name: "Classic",
        category: TemplateCategory::Professional,
        layout: LayoutKind::SingleColumn,
        is_premium: false,
        recommended_for: &["Law", "Finance", "Academia"],
    },
    TemplateInfo {
        id: TemplateId::Minimal,
        name: "Minimal",
        category: TemplateCategory::Simple,
        layout: LayoutKind::SingleColumn,
        is_premium: false,
        recommended_for: &["Students", "Internships", "ATS-heavy pipelines"],
    },
    TemplateInfo {
        id: TemplateId::Creative,
        name: "Creative",
        category: TemplateCategory::Creative,
        layout: LayoutKind::SingleColumn,
        is_premium: true,
        recommended_for: &["Designers", "Content creators"],
    },
    TemplateInfo {
        id: TemplateId::Executive,
        name: "Executive",
        category: TemplateCategory::Professional,
        layout: LayoutKind::SingleColumn,
        is_premium: true,
        recommended_for: &["Senior leadership", "Consulting"],
    },
    TemplateInfo {
        id: TemplateId::Elegant,
        name: "Elegant",
        category: TemplateCategory::Creative,
        layout: LayoutKind::SingleColumn,
        is_premium: true,
        recommended_for: &["Hospitality", "Communications"],
    },
    TemplateInfo {
        id: TemplateId::Tech,
        name: "Tech",
        category: TemplateCategory::Technical,
        layout: LayoutKind::SingleColumn,
        is_premium: false,
        recommended_for: &["Developers", "Data scientists", "DevOps"],
    },
    TemplateInfo {
        id: TemplateId::Corporate,
        name: "Corporate",
        category: TemplateCategory::Professional,
        layout: LayoutKind::TwoColumn,
        is_premium: true,
        recommended_for: &["Business analysts", "Operations", "Sales"],
    },
    TemplateInfo {
        id: TemplateId::Swiss,
        name: "Swiss",
        category: TemplateCategory::Simple,
        layout: LayoutKind::TwoColumn,
        is_premium: true,
        recommended_for: &["Architects", "Engineers"],
    },
    TemplateInfo {
        id: TemplateId::Sidebar,
        name: "Sidebar",
        category: TemplateCategory::Creative,
        layout: LayoutKind::TwoColumn,
        is_premium: false,
        recommended_for: &["Career changers", "Freelancers"],
    },
];

pub fn template_info(id: TemplateId) -> &'static TemplateInfo {
    CATALOG
        .iter()
        .find(|t| t.id == id)
        .unwrap_or(&CATALOG[0])
}

pub fn templates_in(category: Option<TemplateCategory>) -> Vec<&'static TemplateInfo> {
    CATALOG
        .iter()
        .filter(|t| category.map_or(true, |c| t.category == c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_unique_and_resolvable() {
        for (i, info) in CATALOG.iter().enumerate() {
            assert_eq!(template_info(info.id).id, info.id);
            assert!(CATALOG[i + 1..].iter().all(|other| other.id != info.id));
        }
    }

    #[test]
    fn test_two_column_templates() {
        let two_column: Vec<_> = CATALOG
            .iter()
            .filter(|t| t.layout == LayoutKind::TwoColumn)
            .map(|t| t.id)
            .collect();
        assert_eq!(
            two_column,
            vec![TemplateId::Corporate, TemplateId::Swiss, TemplateId::Sidebar]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let simple = templates_in(Some(TemplateCategory::Simple));
        assert!(simple
            .iter()
            .all(|t| t.category == TemplateCategory::Simple));
        assert_eq!(templates_in(None).len(), CATALOG.len());
    }

    #[test]
    fn test_template_id_serializes_snake_case() {
        assert_eq!(
            serde_json::to_value(TemplateId::Swiss).unwrap(),
            serde_json::json!("swiss")
        );
        assert_eq!(TemplateId::Swiss.as_str(), "swiss");
    }
}
