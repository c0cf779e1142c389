//! Fixed role → article URL table for the interview-question scraper.

const DEFAULT_ROLES: &[(&str, &str)] = &[
    (
        "Backend Engineer",
        "https://www.geeksforgeeks.org/backend-developer-interview-questions-and-answers/",
    ),
    (
        "AI/ML Engineer",
        "https://www.geeksforgeeks.org/machine-learning-interview-questions/",
    ),
    (
        "MLOps Engineer",
        "https://www.geeksforgeeks.org/comprehensive-mlops-interview-questions-from-basic-to-advanced/",
    ),
    (
        "SDE",
        "https://www.geeksforgeeks.org/top-50-software-engineering-interview-questions-and-answers/",
    ),
    (
        "Frontend Engineer",
        "https://www.geeksforgeeks.org/front-end-developer-interview-questions/",
    ),
    (
        "Fullstack Engineer",
        "https://www.geeksforgeeks.org/full-stack-developer-interview-questions-and-answers/",
    ),
    (
        "Data Analyst",
        "https://www.geeksforgeeks.org/data-analyst-interview-questions-and-answers/",
    ),
    (
        "Data Scientist",
        "https://www.geeksforgeeks.org/data-science-interview-questions-and-answers/",
    ),
    (
        "HR Interview Questions",
        "https://www.geeksforgeeks.org/top-10-traditional-hr-interview-questions-and-answers/",
    ),
];

/// Ordered mapping of role names to the page their questions are scraped from.
/// Role lookup is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    entries: Vec<(String, String)>,
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_ROLES
                .iter()
                .map(|(role, url)| (role.to_string(), url.to_string())),
        )
    }
}

impl RoleCatalog {
    pub fn new(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn url_for(&self, role: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, url)| url.as_str())
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
