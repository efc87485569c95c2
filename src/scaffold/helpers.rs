//! Naming helpers for view scaffolding
//!
//! Table and model names are derived from user input with the same
//! conventions the surrounding framework uses for resource naming:
//! plural `snake_case` directories, singular variable names.

use inflector::Inflector;

/// Naming helpers for stub generation
pub struct NameHelpers;

impl NameHelpers {
    /// Strip any namespace or path prefix from a model name.
    ///
    /// Both `/` and `\` are treated as separators; only the final segment
    /// takes part in name derivation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bladegen_lib::scaffold::helpers::NameHelpers;
    /// assert_eq!(NameHelpers::basename("Admin/Example"), "Example");
    /// assert_eq!(NameHelpers::basename("App\\Models\\Example"), "Example");
    /// assert_eq!(NameHelpers::basename("Example"), "Example");
    /// ```
    #[must_use]
    pub fn basename(input: &str) -> &str {
        input
            .trim()
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or_default()
    }

    /// Convert string to `snake_case`
    ///
    /// # Examples
    ///
    /// ```
    /// # use bladegen_lib::scaffold::helpers::NameHelpers;
    /// assert_eq!(NameHelpers::to_snake_case("UserProfile"), "user_profile");
    /// assert_eq!(NameHelpers::to_snake_case("Example"), "example");
    /// ```
    #[must_use]
    pub fn to_snake_case(input: &str) -> String {
        input.to_snake_case()
    }

    /// Pluralize a word
    ///
    /// # Examples
    ///
    /// ```
    /// # use bladegen_lib::scaffold::helpers::NameHelpers;
    /// assert_eq!(NameHelpers::pluralize("post"), "posts");
    /// assert_eq!(NameHelpers::pluralize("category"), "categories");
    /// ```
    #[must_use]
    pub fn pluralize(input: &str) -> String {
        input.to_plural()
    }

    /// Singularize a word
    ///
    /// # Examples
    ///
    /// ```
    /// # use bladegen_lib::scaffold::helpers::NameHelpers;
    /// assert_eq!(NameHelpers::singularize("posts"), "post");
    /// assert_eq!(NameHelpers::singularize("categories"), "category");
    /// ```
    #[must_use]
    pub fn singularize(input: &str) -> String {
        input.to_singular()
    }

    /// Convert a model basename to its table name.
    ///
    /// Pluralizes first, then converts to `snake_case`. The two orders can disagree for
    /// irregular compound plurals; this order matches the original command
    /// and is kept deliberately.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bladegen_lib::scaffold::helpers::NameHelpers;
    /// assert_eq!(NameHelpers::to_table_name("Example"), "examples");
    /// assert_eq!(NameHelpers::to_table_name("UserProfile"), "user_profiles");
    /// assert_eq!(NameHelpers::to_table_name("Category"), "categories");
    /// ```
    #[must_use]
    pub fn to_table_name(basename: &str) -> String {
        Self::to_snake_case(&Self::pluralize(basename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename() {
        assert_eq!(NameHelpers::basename("Example"), "Example");
        assert_eq!(NameHelpers::basename("Admin/Example"), "Example");
        assert_eq!(NameHelpers::basename("App\\Models\\Example"), "Example");
        assert_eq!(NameHelpers::basename("  Example  "), "Example");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(NameHelpers::to_snake_case("UserProfile"), "user_profile");
        assert_eq!(NameHelpers::to_snake_case("Example"), "example");
        assert_eq!(NameHelpers::to_snake_case("simple"), "simple");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(NameHelpers::pluralize("post"), "posts");
        assert_eq!(NameHelpers::pluralize("category"), "categories");
        assert_eq!(NameHelpers::pluralize("comment"), "comments");
        assert_eq!(NameHelpers::pluralize("user"), "users");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(NameHelpers::singularize("posts"), "post");
        assert_eq!(NameHelpers::singularize("categories"), "category");
        assert_eq!(NameHelpers::singularize("examples"), "example");
    }

    #[test]
    fn test_table_name() {
        assert_eq!(NameHelpers::to_table_name("Example"), "examples");
        assert_eq!(NameHelpers::to_table_name("UserProfile"), "user_profiles");
        assert_eq!(NameHelpers::to_table_name("Category"), "categories");
    }
}
