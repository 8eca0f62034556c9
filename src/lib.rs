//! Cached slug derivation for record types.
//!
//! A [`SlugBehavior`] is registered once per record type and derives a
//! URL-safe slug from a source column on every validation cycle, caching
//! it into a dedicated column. With lock mode enabled a manually assigned
//! slug is preserved across cycles until the lock column is reset.
//!
//! ```
//! use sluggable::{SlugBehavior, SlugOptions, SluggedRecord};
//!
//! #[derive(Default)]
//! struct Post {
//!     title: Option<String>,
//!     slug: Option<String>,
//! }
//!
//! impl SluggedRecord for Post {
//!     fn field(&self, column: &str) -> Option<String> {
//!         match column {
//!             "title" => self.title.clone(),
//!             "slug" => self.slug.clone(),
//!             _ => None,
//!         }
//!     }
//!
//!     fn set_field(&mut self, column: &str, value: String) {
//!         match column {
//!             "title" => self.title = Some(value),
//!             "slug" => self.slug = Some(value),
//!             _ => {}
//!         }
//!     }
//!
//!     fn flag(&self, _column: &str) -> Option<bool> {
//!         None
//!     }
//!
//!     fn set_flag(&mut self, _column: &str, _value: bool) {}
//! }
//!
//! # fn main() -> Result<(), sluggable::SlugError> {
//! let behavior = SlugBehavior::new("title", SlugOptions::new())?;
//! let mut post = Post {
//!     title: Some("A Tale of Two Cities".into()),
//!     ..Post::default()
//! };
//! behavior.before_validation(&mut post);
//! assert_eq!(post.slug.as_deref(), Some("a-tale-of-two-cities"));
//! # Ok(())
//! # }
//! ```

pub mod behavior;
pub mod errors;
pub mod options;
pub mod record;
pub mod slugify;
pub mod strategy;
pub mod validate;

pub use behavior::SlugBehavior;
pub use errors::{SlugError, SlugResult};
pub use options::SlugOptions;
pub use record::SluggedRecord;
pub use slugify::slugify;
pub use strategy::{RecordCallback, SlugStrategy};
pub use validate::{FieldError, LengthRule, SlugValidations, ValidationErrors};
