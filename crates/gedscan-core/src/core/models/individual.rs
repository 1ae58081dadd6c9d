const NAME_DELIMITER: char = '/';

/// A person record (`INDI`) as read from a GEDCOM source.
///
/// Only the raw name is stored; the given name and surname are derived from it
/// on demand. `father_id` and `mother_id` are not read from the file: they are
/// filled in by the relationship resolver from the family of origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Individual {
    /// Cross-reference identifier including its sentinels, e.g. `@I1@`.
    pub id: String,
    /// Raw `NAME` payload, e.g. `John /Smith/`.
    pub name: String,
    /// Raw `DATE` payload of the birth event, empty if never set.
    pub birth: String,
    /// Identifier of the family in which this individual is a child (`FAMC`).
    pub family_of_origin: Option<String>,
    pub father_id: Option<String>,
    pub mother_id: Option<String>,
}

impl Individual {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    /// Returns the given-name part of the raw name: everything before the first `/`, trimmed.
    pub fn first_name(&self) -> &str {
        self.name
            .split(NAME_DELIMITER)
            .next()
            .unwrap_or("")
            .trim()
    }

    /// Returns the surname part of the raw name.
    ///
    /// The surname is the text following the first `/` up to the next `/` (or the
    /// end of the string when it is not closed), trimmed. A name without any `/`
    /// has an empty surname.
    pub fn surname(&self) -> &str {
        self.name
            .split(NAME_DELIMITER)
            .nth(1)
            .unwrap_or("")
            .trim()
    }

    /// Returns `true` if at least one parent is still unknown after resolution.
    pub fn has_incomplete_parentage(&self) -> bool {
        self.father_id.is_none() || self.mother_id.is_none()
    }
}
