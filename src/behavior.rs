use std::any::type_name;

use tracing::debug;

use crate::errors::{SlugError, SlugResult};
use crate::options::SlugOptions;
use crate::record::SluggedRecord;
use crate::slugify::slugify;
use crate::strategy::{RecordCallback, SlugStrategy};
use crate::validate::{CompiledValidations, ValidationErrors};

/// A slug behavior registered for one record type.
///
/// Immutable after construction; one instance serves every record of the
/// type. The host invokes [`Self::before_validation`] (or
/// [`Self::validate`]) once per save attempt, immediately before its own
/// validation runs.
#[derive(Debug)]
pub struct SlugBehavior<R> {
    source_column: String,
    cache_column: String,
    lock_column: String,
    allow_lock: bool,
    separator: String,
    strategy: SlugStrategy<R>,
    validations: Option<CompiledValidations>,
}

impl<R: SluggedRecord> SlugBehavior<R> {
    /// Register a behavior deriving from `source_column`.
    ///
    /// Resolves strategy precedence and column-name defaults and compiles
    /// the validation ruleset. Fails on empty column names, an empty
    /// separator, or a malformed format pattern.
    pub fn new(source_column: impl Into<String>, options: SlugOptions<R>) -> SlugResult<Self> {
        let source_column = source_column.into();
        if source_column.is_empty() {
            return Err(SlugError::config("source column name cannot be empty"));
        }

        let SlugOptions {
            allow_lock,
            callback,
            callback_method,
            cache_column,
            lock_column,
            separator,
            validates,
        } = options;

        if cache_column.is_empty() {
            return Err(SlugError::config("cache column name cannot be empty"));
        }
        if separator.is_empty() {
            return Err(SlugError::config("separator cannot be empty"));
        }
        let lock_column = lock_column.unwrap_or_else(|| format!("{cache_column}_lock"));
        if lock_column.is_empty() {
            return Err(SlugError::config("lock column name cannot be empty"));
        }

        let strategy = match (callback_method, callback) {
            (Some(method), _) => SlugStrategy::Record(method),
            (None, Some(function)) => SlugStrategy::Function(function),
            (None, None) => SlugStrategy::Standard,
        };
        let validations = validates.map(|rules| rules.compile()).transpose()?;

        Ok(Self {
            source_column,
            cache_column,
            lock_column,
            allow_lock,
            separator,
            strategy,
            validations,
        })
    }

    pub fn source_column(&self) -> &str {
        &self.source_column
    }

    pub fn cache_column(&self) -> &str {
        &self.cache_column
    }

    pub fn lock_column(&self) -> &str {
        &self.lock_column
    }

    pub fn allow_lock(&self) -> bool {
        self.allow_lock
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Compute the slug for `record` with the configured strategy. The
    /// source column reads as the empty string when absent.
    pub fn derive(&self, record: &R) -> String {
        let source = record.field(&self.source_column).unwrap_or_default();
        match &self.strategy {
            SlugStrategy::Standard => slugify(&source, &self.separator),
            SlugStrategy::Function(function) => function(&source),
            SlugStrategy::Record(RecordCallback::NoArgs(method)) => method(record),
            SlugStrategy::Record(RecordCallback::WithSource(method)) => method(record, &source),
        }
    }

    /// External write to the cache column.
    ///
    /// Without lock mode the cache column is derived-only and this returns
    /// [`SlugError::NotAssignable`]. With lock mode the value is stored as
    /// given and the record is marked locked, so later cycles preserve it.
    pub fn write_slug(&self, record: &mut R, value: impl Into<String>) -> SlugResult<()> {
        if !self.allow_lock {
            return Err(SlugError::NotAssignable {
                column: self.cache_column.clone(),
                record: type_name::<R>(),
            });
        }
        record.set_flag(&self.lock_column, true);
        record.set_field(&self.cache_column, value.into());
        Ok(())
    }

    /// Clear the lock column; the next cycle recomputes from source.
    pub fn unlock(&self, record: &mut R) {
        record.set_flag(&self.lock_column, false);
    }

    /// Pre-validation hook: recompute and cache the slug unless the record
    /// is locked. The forced write does not touch the lock column.
    pub fn before_validation(&self, record: &mut R) {
        if self.locked(record) {
            debug!(column = %self.cache_column, "slug locked, skipping derivation");
            return;
        }
        let value = self.derive(record);
        debug!(column = %self.cache_column, value = %value, "caching derived slug");
        self.force_write(record, value);
    }

    /// Run the hook, then the attached ruleset against the cache column.
    pub fn validate(&self, record: &mut R) -> Result<(), ValidationErrors> {
        self.before_validation(record);
        let mut errors = ValidationErrors::default();
        if let Some(validations) = &self.validations {
            let value = record.field(&self.cache_column);
            validations.check(&self.cache_column, value.as_deref(), &mut errors);
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    fn locked(&self, record: &R) -> bool {
        self.allow_lock && record.flag(&self.lock_column).unwrap_or(false)
    }

    /// Internal write path; bypasses the guard and leaves lock state alone.
    fn force_write(&self, record: &mut R, value: String) {
        record.set_field(&self.cache_column, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::RecordCallback;

    #[derive(Debug, Default)]
    struct Note {
        title: Option<String>,
        subtitle: Option<String>,
        slug: Option<String>,
        slug_lock: Option<bool>,
    }

    impl SluggedRecord for Note {
        fn field(&self, column: &str) -> Option<String> {
            match column {
                "title" => self.title.clone(),
                "subtitle" => self.subtitle.clone(),
                "slug" => self.slug.clone(),
                _ => None,
            }
        }

        fn set_field(&mut self, column: &str, value: String) {
            match column {
                "title" => self.title = Some(value),
                "subtitle" => self.subtitle = Some(value),
                "slug" => self.slug = Some(value),
                _ => {}
            }
        }

        fn flag(&self, column: &str) -> Option<bool> {
            match column {
                "slug_lock" => self.slug_lock,
                _ => None,
            }
        }

        fn set_flag(&mut self, column: &str, value: bool) {
            if column == "slug_lock" {
                self.slug_lock = Some(value);
            }
        }
    }

    #[test]
    fn lock_column_defaults_follow_cache_column() {
        let behavior: SlugBehavior<Note> =
            SlugBehavior::new("title", SlugOptions::new().cache_column("short_name")).unwrap();
        assert_eq!(behavior.cache_column(), "short_name");
        assert_eq!(behavior.lock_column(), "short_name_lock");
    }

    #[test]
    fn record_callback_wins_over_function() {
        let behavior = SlugBehavior::new(
            "title",
            SlugOptions::new()
                .callback(|value: &str| value.to_uppercase())
                .callback_method(RecordCallback::no_args(|note: &Note| {
                    format!(
                        "{}-{}",
                        note.title.as_deref().unwrap_or(""),
                        note.subtitle.as_deref().unwrap_or("")
                    )
                })),
        )
        .unwrap();

        let note = Note {
            title: Some("a".into()),
            subtitle: Some("b".into()),
            ..Note::default()
        };
        assert_eq!(behavior.derive(&note), "a-b");
    }

    #[test]
    fn empty_separator_is_rejected() {
        let err = SlugBehavior::<Note>::new("title", SlugOptions::new().separator("")).unwrap_err();
        assert!(matches!(err, SlugError::Config(_)));
    }

    #[test]
    fn forced_write_leaves_lock_state_alone() {
        let behavior =
            SlugBehavior::new("title", SlugOptions::<Note>::new().allow_lock(true)).unwrap();
        let mut note = Note {
            title: Some("First".into()),
            ..Note::default()
        };

        behavior.before_validation(&mut note);
        assert_eq!(note.slug.as_deref(), Some("first"));
        assert_eq!(note.slug_lock, None);

        behavior.unlock(&mut note);
        behavior.before_validation(&mut note);
        assert_eq!(note.slug_lock, Some(false));
    }
}
