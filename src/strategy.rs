use std::fmt;

/// How the cached slug is produced from a record.
///
/// Resolved once at registration: a record callback wins over a plain
/// function, which wins over the standard algorithm.
pub enum SlugStrategy<R> {
    /// Built-in normalization of the source value ([`crate::slugify`]).
    Standard,
    /// User-supplied function over the source value; result used verbatim.
    Function(Box<dyn Fn(&str) -> String + Send + Sync>),
    /// User-supplied callback on the record; result used verbatim.
    Record(RecordCallback<R>),
}

/// A derivation callback on the record itself, tagged by arity.
pub enum RecordCallback<R> {
    /// Called with the record only; reads whatever fields it needs.
    NoArgs(Box<dyn Fn(&R) -> String + Send + Sync>),
    /// Called with the record and the source column's current value.
    WithSource(Box<dyn Fn(&R, &str) -> String + Send + Sync>),
}

impl<R> RecordCallback<R> {
    pub fn no_args(callback: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        Self::NoArgs(Box::new(callback))
    }

    pub fn with_source(callback: impl Fn(&R, &str) -> String + Send + Sync + 'static) -> Self {
        Self::WithSource(Box::new(callback))
    }
}

impl<R> fmt::Debug for SlugStrategy<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("Standard"),
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Record(callback) => write!(f, "Record({callback:?})"),
        }
    }
}

impl<R> fmt::Debug for RecordCallback<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoArgs(_) => f.write_str("NoArgs(..)"),
            Self::WithSource(_) => f.write_str("WithSource(..)"),
        }
    }
}
