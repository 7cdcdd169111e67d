use super::CharFilter;

/// A char filter that lower-cases the whole input.
#[derive(Clone, Debug, Default)]
pub struct CaseFoldCharFilter;

impl CaseFoldCharFilter {
    pub fn new() -> Self {
        CaseFoldCharFilter
    }
}

impl CharFilter for CaseFoldCharFilter {
    fn filter(&self, input: &str) -> String {
        input.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "case_fold"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_fold() {
        assert_eq!(CaseFoldCharFilter::new().filter("Show CONTRACT 1"), "show contract 1");
    }
}
