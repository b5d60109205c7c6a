use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::validation::{required, ValidationErrors};

// ============================================================================
// ID Type
// ============================================================================

/// Category identifier assigned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Record
// ============================================================================

/// Book category as listed by `GET /api/categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "categoryId")]
    pub id: CategoryId,
    #[serde(alias = "categoryName")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

pub const NAME_MAX_LEN: usize = 100;

/// Query filter of the category list
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryFilter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

// ============================================================================
// Form / Draft
// ============================================================================

/// Raw category form input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn from_record(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<CategoryDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = required(&mut errors, "name", "Name", &self.name);
        if name.chars().count() > NAME_MAX_LEN {
            errors.push(
                "name",
                format!("Name must be at most {} characters", NAME_MAX_LEN),
            );
        }
        let description = self.description.trim();
        let description = (!description.is_empty()).then(|| description.to_string());
        errors.into_result(|| CategoryDraft { name, description })
    }
}

/// Body of `POST /api/categories` and `PUT /api/categories/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryDraft {
    pub fn into_record(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_name_rejected() {
        let form = CategoryForm {
            name: "  ".into(),
            description: "Novels".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_long_name_rejected() {
        let form = CategoryForm {
            name: "x".repeat(NAME_MAX_LEN + 1),
            description: String::new(),
        };
        assert!(form.validate().unwrap_err().get("name").is_some());
    }

    #[test]
    fn test_draft_serializes_name_only_when_description_blank() {
        let draft = CategoryForm {
            name: " Fiction ".into(),
            description: "".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(serde_json::to_value(&draft).unwrap(), json!({"name": "Fiction"}));
    }

    #[test]
    fn test_record_accepts_backend_aliases() {
        let category: Category =
            serde_json::from_value(json!({"categoryId": 3, "categoryName": "Poetry"})).unwrap();
        assert_eq!(category.id, CategoryId(3));
        assert_eq!(category.name, "Poetry");
        assert_eq!(category.description, None);
    }
}
