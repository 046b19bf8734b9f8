use serde::{Deserialize, Serialize};

/// Assessment categories. The set is closed: the top-level weight profile
/// assumes exactly these three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Kra,
    Goal,
    Competency,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Kra, Category::Goal, Category::Competency];

    pub fn label(self) -> &'static str {
        match self {
            Category::Kra => "KRA",
            Category::Goal => "Goal",
            Category::Competency => "Competency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_uppercase() {
        let json = serde_json::to_string(&Category::Kra).unwrap();
        assert_eq!(json, "\"KRA\"");
        let parsed: Category = serde_json::from_str("\"COMPETENCY\"").unwrap();
        assert_eq!(parsed, Category::Competency);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let parsed: Result<Category, _> = serde_json::from_str("\"OKR\"");
        assert!(parsed.is_err());
    }
}
