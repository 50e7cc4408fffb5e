//! Column names the converter reads by convention.
//!
//! Any other column is carried through untouched.

pub const SET_NUMBER: &str = "Set Number";
pub const NAME: &str = "Name";
/// Theme (licensed IP such as "Star Wars").
pub const IP: &str = "IP";
pub const THEME: &str = "Theme";
pub const PIECES: &str = "Pieces";
pub const AGE_MIN: &str = "Age min";
pub const STATE: &str = "State";
pub const MISSING_PIECES: &str = "Missing Pieces";
pub const NOTES: &str = "Notes";

// Lower-case columns of the name/description listing.
pub const SIMPLE_NAME: &str = "name";
pub const SIMPLE_DESCRIPTION: &str = "description";

/// Columns coerced to integers during normalization.
pub const NUMERIC_FIELDS: [&str; 2] = [PIECES, AGE_MIN];

pub fn is_numeric_field(name: &str) -> bool {
    NUMERIC_FIELDS.contains(&name)
}
