//! Blade view stub generator
//!
//! Given a model name and a selection of view kinds, resolves a stub
//! template per kind (project override first, bundled default second),
//! substitutes the placeholder tokens with derived names, and writes the
//! result under the views root. Existing files are never overwritten:
//! the write uses an atomic create-if-absent open, and a pre-existing
//! target is reported as a skip rather than an error.

use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::helpers::NameHelpers;
use crate::stubs;

/// Paths the generator reads from and writes to.
///
/// Passed explicitly so the generator stays a pure function of
/// configuration and request, with no ambient global lookup.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Application base path; stub overrides are looked up under
    /// `<base_path>/stubs/`.
    pub base_path: PathBuf,
    /// Root directory generated views are written under.
    pub views_root: PathBuf,
}

/// The four view kinds the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Index,
    Show,
    Create,
    Edit,
}

impl ViewKind {
    /// Generation always runs in this order, regardless of flag order.
    pub const ALL: [Self; 4] = [Self::Index, Self::Show, Self::Create, Self::Edit];

    /// Short name shared by the stub and the generated file.
    #[must_use]
    pub const fn stem(self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Show => "show",
            Self::Create => "create",
            Self::Edit => "edit",
        }
    }

    /// File name written under the table directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Index => "index.blade.php",
            Self::Show => "show.blade.php",
            Self::Create => "create.blade.php",
            Self::Edit => "edit.blade.php",
        }
    }

    /// Stub file name checked at the project override location.
    #[must_use]
    pub const fn stub_name(self) -> &'static str {
        match self {
            Self::Index => "index.blade.stub",
            Self::Show => "show.blade.stub",
            Self::Create => "create.blade.stub",
            Self::Edit => "edit.blade.stub",
        }
    }

    /// Default stub bundled with the generator.
    #[must_use]
    pub const fn bundled_stub(self) -> &'static str {
        match self {
            Self::Index => stubs::INDEX_STUB,
            Self::Show => stubs::SHOW_STUB,
            Self::Create => stubs::CREATE_STUB,
            Self::Edit => stubs::EDIT_STUB,
        }
    }
}

/// A request to scaffold views for one model.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    /// Raw model name; may carry a namespace or path prefix.
    pub model: String,
    /// Requested kinds. Duplicates and ordering are irrelevant because
    /// generation iterates [`ViewKind::ALL`] and membership-tests this set.
    pub kinds: Vec<ViewKind>,
}

impl ViewRequest {
    #[must_use]
    pub const fn new(model: String, kinds: Vec<ViewKind>) -> Self {
        Self { model, kinds }
    }

    /// Request all four kinds (the `--crud` shorthand).
    #[must_use]
    pub fn crud(model: String) -> Self {
        Self::new(model, ViewKind::ALL.to_vec())
    }
}

/// Names derived deterministically from the raw model input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// Plural `snake_case` basename; also the output directory name.
    pub table_name: String,
    /// Singular form of the table name.
    pub model_name: String,
}

impl DerivedNames {
    /// Derive names from raw input: take the basename (namespace prefixes
    /// are discarded), pluralize, then snake_case; the model name is the
    /// singular of that.
    #[must_use]
    pub fn derive(raw_model: &str) -> Self {
        let basename = NameHelpers::basename(raw_model);
        let table_name = NameHelpers::to_table_name(basename);
        let model_name = NameHelpers::singularize(&table_name);
        Self {
            table_name,
            model_name,
        }
    }
}

/// What happened to a single target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// File did not exist and was written.
    Created,
    /// File already existed and was left untouched.
    SkippedExisting,
}

/// Per-kind result of a generation run.
#[derive(Debug)]
pub struct GeneratedView {
    /// Output directory name (the derived table name).
    pub dir: String,
    /// File name within that directory.
    pub file_name: &'static str,
    /// Full path the file was written to (or found at).
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Blade view generator
pub struct ViewGenerator {
    config: ScaffoldConfig,
}

impl ViewGenerator {
    #[must_use]
    pub const fn new(config: ScaffoldConfig) -> Self {
        Self { config }
    }

    /// Generate the requested views.
    ///
    /// Kinds are processed in the fixed order index, show, create, edit.
    /// A pre-existing target file yields [`WriteOutcome::SkippedExisting`]
    /// and processing continues with the remaining kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if a stub override cannot be read, the destination
    /// directory cannot be created, or a file write fails. An existing
    /// destination file is not an error.
    pub fn generate(&self, request: &ViewRequest) -> Result<Vec<GeneratedView>> {
        let names = DerivedNames::derive(&request.model);
        let target_dir = self.config.views_root.join(&names.table_name);

        let mut views = Vec::new();
        for kind in ViewKind::ALL {
            if !request.kinds.contains(&kind) {
                continue;
            }

            let stub = self.load_stub(kind)?;
            let content = substitute(&stub, &names);

            fs::create_dir_all(&target_dir).with_context(|| {
                format!("Failed to create views directory: {}", target_dir.display())
            })?;

            let path = target_dir.join(kind.file_name());
            let outcome = write_new(&path, &content)?;

            views.push(GeneratedView {
                dir: names.table_name.clone(),
                file_name: kind.file_name(),
                path,
                outcome,
            });
        }

        Ok(views)
    }

    /// Resolve the stub for a kind: a project override under
    /// `<base_path>/stubs/` wins, else the bundled default. Overrides are
    /// read fresh on every invocation.
    fn load_stub(&self, kind: ViewKind) -> Result<Cow<'static, str>> {
        let override_path = self.config.base_path.join("stubs").join(kind.stub_name());
        if override_path.exists() {
            let text = fs::read_to_string(&override_path).with_context(|| {
                format!("Failed to read stub: {}", override_path.display())
            })?;
            return Ok(Cow::Owned(text));
        }
        Ok(Cow::Borrowed(kind.bundled_stub()))
    }
}

/// Replace every occurrence of both placeholder tokens.
fn substitute(stub: &str, names: &DerivedNames) -> String {
    stub.replace(stubs::TABLES_TOKEN, &names.table_name)
        .replace(stubs::TABLE_TOKEN, &names.model_name)
}

/// Atomic create-if-absent write. An existing file is reported as a skip
/// and never modified; any other I/O failure propagates.
fn write_new(path: &Path, content: &str) -> Result<WriteOutcome> {
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())
                .with_context(|| format!("Failed to write view file: {}", path.display()))?;
            Ok(WriteOutcome::Created)
        }
        Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(WriteOutcome::SkippedExisting),
        Err(err) => Err(err)
            .with_context(|| format!("Failed to create view file: {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn generator_in(base: &Path) -> ViewGenerator {
        ViewGenerator::new(ScaffoldConfig {
            base_path: base.to_path_buf(),
            views_root: base.join("resources").join("views"),
        })
    }

    #[test]
    fn test_derive_names() {
        let names = DerivedNames::derive("Example");
        assert_eq!(names.table_name, "examples");
        assert_eq!(names.model_name, "example");
    }

    #[test]
    fn test_derive_names_strips_prefix() {
        assert_eq!(
            DerivedNames::derive("Admin/Example"),
            DerivedNames::derive("Example")
        );
        assert_eq!(
            DerivedNames::derive("App\\Models\\Example"),
            DerivedNames::derive("Example")
        );
    }

    #[test]
    fn test_substitute_replaces_every_token() {
        let names = DerivedNames::derive("Example");
        let out = substitute("{{ tables }}/{{ table }}/{{ tables }}", &names);
        assert_eq!(out, "examples/example/examples");
    }

    #[test]
    fn test_generate_single_kind() {
        let temp_dir = tempdir().unwrap();
        let generator = generator_in(temp_dir.path());

        let request = ViewRequest::new("Example".to_string(), vec![ViewKind::Index]);
        let views = generator.generate(&request).unwrap();

        assert_eq!(views.len(), 1);
        assert_eq!(views[0].dir, "examples");
        assert_eq!(views[0].file_name, "index.blade.php");
        assert_eq!(views[0].outcome, WriteOutcome::Created);
        assert!(views[0].path.exists());
    }

    #[test]
    fn test_generate_runs_in_fixed_order() {
        let temp_dir = tempdir().unwrap();
        let generator = generator_in(temp_dir.path());

        // Kinds listed backwards; output order must not change.
        let request = ViewRequest::new(
            "Example".to_string(),
            vec![ViewKind::Edit, ViewKind::Create, ViewKind::Show, ViewKind::Index],
        );
        let views = generator.generate(&request).unwrap();

        let names: Vec<_> = views.iter().map(|v| v.file_name).collect();
        assert_eq!(
            names,
            vec![
                "index.blade.php",
                "show.blade.php",
                "create.blade.php",
                "edit.blade.php"
            ]
        );
    }

    #[test]
    fn test_existing_file_is_skipped_not_overwritten() {
        let temp_dir = tempdir().unwrap();
        let generator = generator_in(temp_dir.path());
        let request = ViewRequest::new("Example".to_string(), vec![ViewKind::Show]);

        let first = generator.generate(&request).unwrap();
        assert_eq!(first[0].outcome, WriteOutcome::Created);
        let original = fs::read_to_string(&first[0].path).unwrap();

        let second = generator.generate(&request).unwrap();
        assert_eq!(second[0].outcome, WriteOutcome::SkippedExisting);
        assert_eq!(fs::read_to_string(&second[0].path).unwrap(), original);
    }

    #[test]
    fn test_override_stub_wins_over_bundled() {
        let temp_dir = tempdir().unwrap();
        let stubs_dir = temp_dir.path().join("stubs");
        fs::create_dir_all(&stubs_dir).unwrap();
        fs::write(stubs_dir.join("index.blade.stub"), "custom {{ tables }}").unwrap();

        let generator = generator_in(temp_dir.path());
        let request = ViewRequest::new("Example".to_string(), vec![ViewKind::Index]);
        let views = generator.generate(&request).unwrap();

        let content = fs::read_to_string(&views[0].path).unwrap();
        assert_eq!(content, "custom examples");
    }

    #[test]
    fn test_unreadable_override_stub_is_fatal() {
        let temp_dir = tempdir().unwrap();
        // A directory at the override path makes the read fail.
        fs::create_dir_all(temp_dir.path().join("stubs").join("index.blade.stub")).unwrap();

        let generator = generator_in(temp_dir.path());
        let request = ViewRequest::new("Example".to_string(), vec![ViewKind::Index]);
        assert!(generator.generate(&request).is_err());
    }
}
