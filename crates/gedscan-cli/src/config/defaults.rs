pub struct DefaultsConfig {
    pub output: String,
    pub delimiter: char,
    pub xref_sentinel: char,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output: "report.csv".to_string(),
            delimiter: ',',
            xref_sentinel: '@',
        }
    }
}
