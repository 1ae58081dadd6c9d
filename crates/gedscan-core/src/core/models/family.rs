/// A family record (`FAM`) linking two partners and their children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    pub id: String,                 // Cross-reference identifier, e.g. `@F1@`
    pub father: Option<String>,     // `HUSB` individual identifier
    pub mother: Option<String>,     // `WIFE` individual identifier
    pub(crate) children: Vec<String>, // `CHIL` identifiers in source order, duplicates kept
}

impl Family {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn add_child(&mut self, individual_id: &str) {
        self.children.push(individual_id.to_string());
    }

    pub fn has_child(&self, individual_id: &str) -> bool {
        self.children.iter().any(|child| child == individual_id)
    }
}
