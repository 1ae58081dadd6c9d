use phf::{Map, phf_map};

/// The GEDCOM tags that carry meaning for the record model.
///
/// Every other keyword maps to [`Tag::Other`] and is ignored by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Individual,   // INDI
    Family,       // FAM
    Name,         // NAME
    FamilyChild,  // FAMC
    Birth,        // BIRT
    Date,         // DATE
    Husband,      // HUSB
    Wife,         // WIFE
    Child,        // CHIL
    Other,
}

static TAG_KEYWORDS: Map<&'static str, Tag> = phf_map! {
    "INDI" => Tag::Individual,
    "FAM" => Tag::Family,
    "NAME" => Tag::Name,
    "FAMC" => Tag::FamilyChild,
    "BIRT" => Tag::Birth,
    "DATE" => Tag::Date,
    "HUSB" => Tag::Husband,
    "WIFE" => Tag::Wife,
    "CHIL" => Tag::Child,
};

impl Tag {
    /// Maps a raw keyword to its tag. Matching is exact and case-sensitive.
    pub fn from_keyword(keyword: &str) -> Tag {
        TAG_KEYWORDS.get(keyword).copied().unwrap_or(Tag::Other)
    }
}
