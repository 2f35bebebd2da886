use structural_model::StructuralModel;

/// Entity categories that get a Go record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Account,
    Camera,
}

impl EntityCategory {
    /// Table names recognized for this category, compared case-insensitively
    pub fn table_aliases(self) -> &'static [&'static str] {
        match self {
            EntityCategory::Account => &["users", "user", "accounts", "account"],
            EntityCategory::Camera => &["cameras", "camera"],
        }
    }

    pub fn model_file(self) -> &'static str {
        match self {
            EntityCategory::Account => "internal/models/user.go",
            EntityCategory::Camera => "internal/models/camera.go",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            EntityCategory::Account => "user.go.txt",
            EntityCategory::Camera => "camera.go.txt",
        }
    }

    pub fn recognized_in(self, model: &StructuralModel) -> bool {
        self.table_aliases().iter().any(|alias| model.has_table(alias))
    }

    /// The auth handler always needs the account record, so only the camera
    /// record depends on the discovered schema.
    pub fn is_emitted(self, model: &StructuralModel) -> bool {
        match self {
            EntityCategory::Account => true,
            EntityCategory::Camera => self.recognized_in(model),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(tables: &[&str]) -> StructuralModel {
        StructuralModel {
            schema_tables: tables.iter().map(|t| t.to_string()).collect(),
            ..StructuralModel::default()
        }
    }

    #[test]
    fn test_recognition_is_case_insensitive() {
        assert!(EntityCategory::Camera.recognized_in(&model_with(&["Cameras"])));
        assert!(EntityCategory::Account.recognized_in(&model_with(&["ACCOUNT"])));
        assert!(!EntityCategory::Camera.recognized_in(&model_with(&["camera_groups"])));
    }

    #[test]
    fn test_account_always_emitted() {
        let empty = StructuralModel::default();
        assert!(EntityCategory::Account.is_emitted(&empty));
        assert!(!EntityCategory::Camera.is_emitted(&empty));
    }
}
