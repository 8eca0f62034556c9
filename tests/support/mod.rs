// Shared record fixture used by multiple integration test binaries. Some
// symbols go unused in individual test crates; allow that at the module
// level to keep test output clean.
#![allow(dead_code)]

use sluggable::{SlugBehavior, SluggedRecord, ValidationErrors};

/// In-memory stand-in for a database row with the columns the suite uses.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub slug_lock: Option<bool>,
    pub short_name: Option<String>,
    pub short_name_lock: Option<bool>,
}

impl Page {
    pub fn with_title(title: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            ..Self::default()
        }
    }
}

impl SluggedRecord for Page {
    fn field(&self, column: &str) -> Option<String> {
        match column {
            "title" => self.title.clone(),
            "slug" => self.slug.clone(),
            "short_name" => self.short_name.clone(),
            _ => None,
        }
    }

    fn set_field(&mut self, column: &str, value: String) {
        match column {
            "title" => self.title = Some(value),
            "slug" => self.slug = Some(value),
            "short_name" => self.short_name = Some(value),
            _ => {}
        }
    }

    fn flag(&self, column: &str) -> Option<bool> {
        match column {
            "slug_lock" => self.slug_lock,
            "short_name_lock" => self.short_name_lock,
            _ => None,
        }
    }

    fn set_flag(&mut self, column: &str, value: bool) {
        match column {
            "slug_lock" => self.slug_lock = Some(value),
            "short_name_lock" => self.short_name_lock = Some(value),
            _ => {}
        }
    }
}

/// Run one save cycle: the pre-validation hook plus attached validations.
pub fn save(behavior: &SlugBehavior<Page>, page: &mut Page) -> Result<(), ValidationErrors> {
    behavior.validate(page)
}
