use crate::strategy::RecordCallback;
use crate::validate::SlugValidations;

/// Registration options for a slug behavior.
///
/// Every option has a default: derivation caches into `slug` using the
/// standard algorithm with a `-` separator, lock mode off, no
/// validations.
pub struct SlugOptions<R> {
    pub(crate) allow_lock: bool,
    pub(crate) callback: Option<Box<dyn Fn(&str) -> String + Send + Sync>>,
    pub(crate) callback_method: Option<RecordCallback<R>>,
    pub(crate) cache_column: String,
    pub(crate) lock_column: Option<String>,
    pub(crate) separator: String,
    pub(crate) validates: Option<SlugValidations>,
}

impl<R> Default for SlugOptions<R> {
    fn default() -> Self {
        Self {
            allow_lock: false,
            callback: None,
            callback_method: None,
            cache_column: "slug".into(),
            lock_column: None,
            separator: "-".into(),
            validates: None,
        }
    }
}

impl<R> SlugOptions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow manual slug assignment; an assigned value is preserved across
    /// cycles until the lock column is reset.
    pub fn allow_lock(mut self, allow: bool) -> Self {
        self.allow_lock = allow;
        self
    }

    /// Derive with a function over the source value instead of the
    /// standard algorithm. Ignored when a record callback is configured.
    pub fn callback(mut self, callback: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Derive with a callback on the record; wins over [`Self::callback`].
    pub fn callback_method(mut self, callback: RecordCallback<R>) -> Self {
        self.callback_method = Some(callback);
        self
    }

    /// Column the derived slug is cached into. Defaults to `slug`.
    pub fn cache_column(mut self, column: impl Into<String>) -> Self {
        self.cache_column = column.into();
        self
    }

    /// Boolean column marking a manually assigned slug. Defaults to
    /// `<cache_column>_lock`; only read when lock mode is enabled.
    pub fn lock_column(mut self, column: impl Into<String>) -> Self {
        self.lock_column = Some(column.into());
        self
    }

    /// Word separator for the standard algorithm. Defaults to `-`.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Ruleset evaluated against the cache column after derivation.
    pub fn validates(mut self, validations: SlugValidations) -> Self {
        self.validates = Some(validations);
        self
    }
}
