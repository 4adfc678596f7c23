use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Category, CategoryCreate, CategoryPatch};

/// Trims a category name, rejecting names that are blank.
pub fn normalize_name(raw: &str) -> Result<String, FrameworkError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FrameworkError::Validation("category name is required".into()));
    }
    Ok(name.to_string())
}

impl Entity for Category {
    type Id = String;
    type CreateParams = CategoryCreate;
    type Patch = CategoryPatch;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: CategoryCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            name: normalize_name(&params.name)?,
        })
    }

    fn on_update(&mut self, patch: CategoryPatch) -> Result<(), FrameworkError> {
        self.name = normalize_name(&patch.name)?;
        Ok(())
    }

    /// Names are unique ignoring case.
    fn conflicts_with(&self, other: &Self) -> bool {
        other.has_name(&self.name)
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), FrameworkError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_trimmed_and_required() {
        assert_eq!(normalize_name("  Watercolor ").unwrap(), "Watercolor");
        assert!(normalize_name("   ").is_err());

        let mut category =
            Category::from_create_params("category_1".into(), CategoryCreate { name: " Oil ".into() }).unwrap();
        assert_eq!(category.name, "Oil");
        assert!(category.on_update(CategoryPatch { name: "".into() }).is_err());
        assert_eq!(category.name, "Oil");
    }

    #[test]
    fn test_names_conflict_ignoring_case() {
        let oil = Category::new("category_1", "Oil");
        assert!(Category::new("category_2", "oil").conflicts_with(&oil));
        assert!(!Category::new("category_2", "Oil pastel").conflicts_with(&oil));
    }
}
