use crate::core::io::report::ReportRow;
use crate::core::models::tree::FamilyTree;
use crate::engine::resolver::sibling_count;

/// One line of the full dump report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpRow {
    pub id: String,
    pub name: String,
    pub father: String,
    pub mother: String,
    pub siblings: usize,
}

impl ReportRow for DumpRow {
    const HEADER: &'static [&'static str] = &["ID", "Name", "Father", "Mother", "Sibling Count"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.father.clone(),
            self.mother.clone(),
            self.siblings.to_string(),
        ]
    }
}

/// Builds one row per individual, in creation order.
///
/// Parent names come from the already-resolved `father_id`/`mother_id`; run
/// [`crate::engine::resolver::resolve_parents`] first.
pub fn run(tree: &FamilyTree) -> Vec<DumpRow> {
    tree.individuals_iter()
        .map(|(_, individual)| DumpRow {
            id: individual.id.clone(),
            name: individual.name.clone(),
            father: tree.name_of(individual.father_id.as_deref()).to_string(),
            mother: tree.name_of(individual.mother_id.as_deref()).to_string(),
            siblings: sibling_count(tree, individual),
        })
        .collect()
}
