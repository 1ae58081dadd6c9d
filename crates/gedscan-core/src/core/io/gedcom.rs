use super::tags::Tag;
use super::traits::GenealogyFile;
use crate::core::models::ids::{FamilyKey, IndividualKey};
use crate::core::models::tree::FamilyTree;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace};

const DEFAULT_XREF_SENTINEL: char = '@';
const BYTE_ORDER_MARK: char = '\u{feff}';

#[derive(Debug, Error)]
pub enum GedcomError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Options controlling how GEDCOM lines are tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GedcomOptions {
    /// Character that opens and closes a cross-reference identifier.
    pub xref_sentinel: char,
}

impl Default for GedcomOptions {
    fn default() -> Self {
        Self {
            xref_sentinel: DEFAULT_XREF_SENTINEL,
        }
    }
}

/// Counters collected while reading a GEDCOM source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub individuals: usize,
    pub families: usize,
}

/// One tokenized GEDCOM line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GedcomLine<'a> {
    pub level: u64,
    pub xref: Option<&'a str>,
    pub tag: &'a str,
    pub value: &'a str,
}

fn split_field(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(end) => (&text[..end], text[end..].trim_start()),
        None => (text, ""),
    }
}

fn is_xref(field: &str, sentinel: char) -> bool {
    field.chars().count() >= 2 && field.starts_with(sentinel) && field.ends_with(sentinel)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Splits a raw line into level, optional cross-reference, tag and value.
///
/// Returns `None` for lines that cannot be interpreted: blank lines, lines with
/// a single field, and lines whose first field is not a non-negative integer.
///
/// When the second field is a cross-reference, the whole remainder of the line
/// is the tag, so trailing text leaves it unrecognized.
pub fn tokenize_line(line: &str, sentinel: char) -> Option<GedcomLine<'_>> {
    let line = line.trim_end();
    let (level_field, rest) = split_field(line);
    if level_field.is_empty() || rest.is_empty() {
        return None;
    }
    let level = level_field.parse::<u64>().ok()?;

    let (second, third) = split_field(rest);
    if is_xref(second, sentinel) && !third.is_empty() {
        return Some(GedcomLine {
            level,
            xref: Some(second),
            tag: third,
            value: "",
        });
    }
    Some(GedcomLine {
        level,
        xref: None,
        tag: second,
        value: third,
    })
}

/// The record currently receiving nested lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    #[default]
    NoContext,
    InIndividual(IndividualKey),
    InFamily(FamilyKey),
}

/// Incremental line-by-line GEDCOM parser.
///
/// Level-0 lines open or close a record context; nested lines refine the record
/// of the current context. Lines that cannot be interpreted are skipped.
#[derive(Debug, Default)]
pub struct GedcomParser {
    options: GedcomOptions,
    tree: FamilyTree,
    state: ParseState,
    in_birth_event: bool,
    stats: ParseStats,
}

impl GedcomParser {
    pub fn new(options: GedcomOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn in_birth_event(&self) -> bool {
        self.in_birth_event
    }

    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    /// Consumes one raw line and updates the tree accordingly.
    pub fn feed_line(&mut self, raw: &str) {
        self.stats.lines_read += 1;
        let raw = if self.stats.lines_read == 1 {
            raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw)
        } else {
            raw
        };

        let Some(line) = tokenize_line(raw, self.options.xref_sentinel) else {
            if !raw.trim().is_empty() {
                self.stats.lines_skipped += 1;
                trace!(
                    line_number = self.stats.lines_read,
                    "Skipping malformed line: {:?}",
                    raw.trim_end()
                );
            }
            return;
        };

        if line.level == 0 {
            self.start_record(&line);
        } else {
            self.apply_field(&line);
        }
    }

    fn start_record(&mut self, line: &GedcomLine<'_>) {
        self.in_birth_event = false;
        self.state = match (line.xref, Tag::from_keyword(line.tag)) {
            (Some(xref), Tag::Individual) => {
                ParseState::InIndividual(self.tree.start_individual(xref))
            }
            (Some(xref), Tag::Family) => ParseState::InFamily(self.tree.start_family(xref)),
            _ => ParseState::NoContext,
        };
    }

    fn apply_field(&mut self, line: &GedcomLine<'_>) {
        let tag = Tag::from_keyword(line.tag);
        match self.state {
            ParseState::InIndividual(key) => {
                let Some(individual) = self.tree.individual_mut(key) else {
                    return;
                };
                match tag {
                    Tag::Name => individual.name = line.value.to_string(),
                    Tag::FamilyChild => individual.family_of_origin = non_empty(line.value),
                    Tag::Birth => self.in_birth_event = true,
                    Tag::Date if self.in_birth_event => {
                        individual.birth = line.value.to_string();
                        self.in_birth_event = false;
                    }
                    _ => {}
                }
            }
            ParseState::InFamily(key) => {
                let Some(family) = self.tree.family_mut(key) else {
                    return;
                };
                match tag {
                    Tag::Husband => family.father = non_empty(line.value),
                    Tag::Wife => family.mother = non_empty(line.value),
                    Tag::Child => family.add_child(line.value),
                    _ => {}
                }
            }
            ParseState::NoContext => {}
        }
    }

    /// Ends parsing and hands over the tree together with the collected counters.
    pub fn finish(self) -> (FamilyTree, ParseStats) {
        let stats = ParseStats {
            individuals: self.tree.individual_count(),
            families: self.tree.family_count(),
            ..self.stats
        };
        (self.tree, stats)
    }
}

/// Reader for GEDCOM sources. Undecodable bytes are replaced, never rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct GedcomFile {
    pub options: GedcomOptions,
}

impl GedcomFile {
    pub fn new(options: GedcomOptions) -> Self {
        Self { options }
    }
}

impl GenealogyFile for GedcomFile {
    type Metadata = ParseStats;
    type Error = GedcomError;

    fn read_from(
        &self,
        reader: &mut impl BufRead,
    ) -> Result<(FamilyTree, Self::Metadata), Self::Error> {
        let mut parser = GedcomParser::new(self.options);
        let mut buffer = Vec::new();

        loop {
            buffer.clear();
            if reader.read_until(b'\n', &mut buffer)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buffer);
            parser.feed_line(&line);
        }

        let (tree, stats) = parser.finish();
        debug!(
            lines = stats.lines_read,
            skipped = stats.lines_skipped,
            individuals = stats.individuals,
            families = stats.families,
            "Finished reading GEDCOM source."
        );
        Ok((tree, stats))
    }
}
