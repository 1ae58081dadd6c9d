use crate::core::io::report::ReportRow;
use crate::core::models::ids::IndividualKey;
use crate::core::models::tree::FamilyTree;
use crate::engine::resolver::resolve_parents_for;
use tracing::{debug, instrument};

/// One line of the surname search report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRow {
    pub id: String,
    pub first_name: String,
    pub surname: String,
    pub birth: String,
    pub father: String,
    pub mother: String,
}

impl ReportRow for SearchRow {
    const HEADER: &'static [&'static str] = &[
        "ID",
        "Firstname",
        "Lastname",
        "Date of Birth",
        "Father",
        "Mother",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.first_name.clone(),
            self.surname.clone(),
            self.birth.clone(),
            self.father.clone(),
            self.mother.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurnameSearchReport {
    pub query: String,
    /// Number of individuals carrying the surname, complete or not.
    pub total_matches: usize,
    /// Matches missing a father or a mother, in creation order.
    pub incomplete: Vec<SearchRow>,
}

impl SurnameSearchReport {
    /// The one-line summary delivered after every search.
    pub fn summary(&self) -> String {
        format!(
            "Found {} individuals with surname '{}'.",
            self.total_matches, self.query
        )
    }
}

/// Finds individuals whose surname equals `query` (case-insensitively) and
/// reports the ones with incomplete parentage.
///
/// Parentage of the matched individuals is resolved again before filtering.
#[instrument(skip(tree), name = "surname_search")]
pub fn run(tree: &mut FamilyTree, query: &str) -> SurnameSearchReport {
    let needle = query.to_lowercase();
    let matches: Vec<IndividualKey> = tree
        .individuals_iter()
        .filter(|(_, individual)| individual.surname().to_lowercase() == needle)
        .map(|(key, _)| key)
        .collect();

    resolve_parents_for(tree, &matches);

    let incomplete: Vec<SearchRow> = matches
        .iter()
        .filter_map(|&key| tree.individual(key))
        .filter(|individual| individual.has_incomplete_parentage())
        .map(|individual| SearchRow {
            id: individual.id.clone(),
            first_name: individual.first_name().to_string(),
            surname: individual.surname().to_string(),
            birth: individual.birth.clone(),
            father: tree.name_of(individual.father_id.as_deref()).to_string(),
            mother: tree.name_of(individual.mother_id.as_deref()).to_string(),
        })
        .collect();

    debug!(
        matches = matches.len(),
        incomplete = incomplete.len(),
        "Surname search finished."
    );

    SurnameSearchReport {
        query: query.to_string(),
        total_matches: matches.len(),
        incomplete,
    }
}
