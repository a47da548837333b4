//! Install plans - the ordered package list.
//!
//! A plan is fixed at authoring time: insertion order is the installation
//! order, and nothing mutates a plan after construction.

use crate::core::package_spec::{PackageSpec, SpecError};

/// An ordered sequence of package specs.
///
/// Duplicates are not rejected; the authoring layer is trusted and entries
/// are dispatched exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallPlan {
    packages: Vec<PackageSpec>,
}

impl InstallPlan {
    /// Create a plan from already-parsed specs.
    pub fn new(packages: Vec<PackageSpec>) -> Self {
        InstallPlan { packages }
    }

    /// Parse a plan from identifier strings, preserving order.
    pub fn parse<I, S>(identifiers: I) -> Result<Self, SpecError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let packages = identifiers
            .into_iter()
            .map(|s| PackageSpec::parse(s.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(InstallPlan { packages })
    }

    /// Number of entries in the plan.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// Check if the plan has no entries.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Iterate the entries in installation order.
    pub fn iter(&self) -> std::slice::Iter<'_, PackageSpec> {
        self.packages.iter()
    }

    /// Get the entries as a slice.
    pub fn packages(&self) -> &[PackageSpec] {
        &self.packages
    }
}

impl<'a> IntoIterator for &'a InstallPlan {
    type Item = &'a PackageSpec;
    type IntoIter = std::slice::Iter<'a, PackageSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_preserves_order() {
        let plan = InstallPlan::parse(["aiohttp", "flask", "gunicorn"]).unwrap();

        let names: Vec<_> = plan.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, ["aiohttp", "flask", "gunicorn"]);
        assert_eq!(plan.len(), 3);
        assert!(!plan.is_empty());
    }

    #[test]
    fn test_plan_keeps_duplicates() {
        let plan = InstallPlan::parse(["flask", "flask"]).unwrap();

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.packages()[0], plan.packages()[1]);
    }

    #[test]
    fn test_plan_empty() {
        let plan = InstallPlan::parse(Vec::<&str>::new()).unwrap();

        assert!(plan.is_empty());
        assert_eq!(plan.len(), 0);
    }

    #[test]
    fn test_plan_propagates_parse_errors() {
        let result = InstallPlan::parse(["aiohttp", "not a name"]);

        assert!(result.is_err());
    }
}
