/// Column access a slug behavior needs from a host record.
///
/// Hosts implement this over whatever backs their records (an ORM row, a
/// plain struct, a map). Columns are addressed by name so a behavior can
/// be configured against renamed cache and lock columns.
pub trait SluggedRecord {
    /// Current value of a string column, `None` when absent.
    fn field(&self, column: &str) -> Option<String>;

    /// Store a string column value.
    fn set_field(&mut self, column: &str, value: String);

    /// Current value of a boolean flag column, `None` when never written.
    fn flag(&self, column: &str) -> Option<bool>;

    /// Store a boolean flag column value.
    fn set_flag(&mut self, column: &str, value: bool);
}
