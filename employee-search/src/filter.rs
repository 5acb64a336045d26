//! Search constraints for one query.

use crate::errors::SearchError;

/// Optional search constraints, all independently absent by default.
///
/// Presence is the only test the compiler applies: `Some(0)` filters the
/// zero-coded category and is never treated as "unset". A range field is
/// constrained as soon as either of its bounds is present.
///
/// # Building Filters
///
/// ```
/// use employee_search::EmployeeSearchFilter;
///
/// let filter = EmployeeSearchFilter::new()
///     .with_age(34)
///     .with_salary_gte(28000.0)
///     .with_salary_lte(38000.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeSearchFilter {
    pub age: Option<i64>,
    pub gender: Option<i64>,
    pub occupation: Option<String>,
    pub healthy_lifestyle: Option<String>,
    pub salary_gte: Option<f64>,
    pub salary_lte: Option<f64>,
    pub monthly_expenditure_gte: Option<f64>,
    pub monthly_expenditure_lte: Option<f64>,
}

impl EmployeeSearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_age(mut self, age: i64) -> Self {
        self.age = Some(age);
        self
    }

    #[inline]
    pub fn with_gender(mut self, gender: i64) -> Self {
        self.gender = Some(gender);
        self
    }

    #[inline]
    pub fn with_occupation(mut self, occupation: impl Into<String>) -> Self {
        self.occupation = Some(occupation.into());
        self
    }

    #[inline]
    pub fn with_healthy_lifestyle(mut self, lifestyle: impl Into<String>) -> Self {
        self.healthy_lifestyle = Some(lifestyle.into());
        self
    }

    #[inline]
    pub fn with_salary_gte(mut self, bound: f64) -> Self {
        self.salary_gte = Some(bound);
        self
    }

    #[inline]
    pub fn with_salary_lte(mut self, bound: f64) -> Self {
        self.salary_lte = Some(bound);
        self
    }

    #[inline]
    pub fn with_monthly_expenditure_gte(mut self, bound: f64) -> Self {
        self.monthly_expenditure_gte = Some(bound);
        self
    }

    #[inline]
    pub fn with_monthly_expenditure_lte(mut self, bound: f64) -> Self {
        self.monthly_expenditure_lte = Some(bound);
        self
    }

    /// True when no constraint is set at all.
    pub fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.gender.is_none()
            && self.occupation.is_none()
            && self.healthy_lifestyle.is_none()
            && self.salary_gte.is_none()
            && self.salary_lte.is_none()
            && self.monthly_expenditure_gte.is_none()
            && self.monthly_expenditure_lte.is_none()
    }

    /// Precondition check applied before a filter reaches the compiler:
    /// a range whose bounds are inverted is rejected here, never inside
    /// `Query::compile`. Equal bounds pass (a single-value range), and
    /// bound values themselves are caller-defined.
    pub fn validate(&self) -> Result<(), SearchError> {
        check_bounds("salary", self.salary_gte, self.salary_lte)?;
        check_bounds(
            "monthly_expenditure",
            self.monthly_expenditure_gte,
            self.monthly_expenditure_lte,
        )
    }
}

fn check_bounds(
    field: &'static str,
    gte: Option<f64>,
    lte: Option<f64>,
) -> Result<(), SearchError> {
    if let (Some(lower), Some(upper)) = (gte, lte)
        && lower > upper
    {
        return Err(SearchError::InvalidFilterRange {
            field,
            gte: lower,
            lte: upper,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_empty() {
        assert!(EmployeeSearchFilter::new().is_empty());
    }

    #[test]
    fn builder_sets_only_named_fields() {
        let filter = EmployeeSearchFilter::new().with_age(34).with_gender(0);
        assert_eq!(filter.age, Some(34));
        assert_eq!(filter.gender, Some(0));
        assert!(filter.occupation.is_none());
        assert!(filter.salary_gte.is_none());
        assert!(!filter.is_empty());
    }

    #[test]
    fn zero_valued_fields_are_present_not_empty() {
        // Zero is a legitimate category code, distinguishable from unset.
        let filter = EmployeeSearchFilter::new().with_gender(0);
        assert!(!filter.is_empty());
        assert_eq!(filter.gender, Some(0));
        assert_ne!(filter, EmployeeSearchFilter::new());
    }

    #[test]
    fn validate_accepts_ordered_and_equal_bounds() {
        let ordered = EmployeeSearchFilter::new()
            .with_salary_gte(28000.0)
            .with_salary_lte(38000.0);
        assert!(ordered.validate().is_ok());

        let pinned = EmployeeSearchFilter::new()
            .with_monthly_expenditure_gte(1500.0)
            .with_monthly_expenditure_lte(1500.0);
        assert!(pinned.validate().is_ok());
    }

    #[test]
    fn validate_accepts_half_open_ranges() {
        let lower_only = EmployeeSearchFilter::new().with_salary_gte(28000.0);
        assert!(lower_only.validate().is_ok());

        let upper_only = EmployeeSearchFilter::new().with_monthly_expenditure_lte(900.0);
        assert!(upper_only.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_salary_bounds() {
        let filter = EmployeeSearchFilter::new()
            .with_salary_gte(38000.0)
            .with_salary_lte(28000.0);
        let err = filter.validate().expect_err("inverted bounds should fail");
        assert!(
            matches!(err, SearchError::InvalidFilterRange { field, .. } if field == "salary")
        );
    }

    #[test]
    fn validate_rejects_inverted_expenditure_bounds() {
        let filter = EmployeeSearchFilter::new()
            .with_monthly_expenditure_gte(2000.0)
            .with_monthly_expenditure_lte(100.0);
        let err = filter.validate().expect_err("inverted bounds should fail");
        assert!(
            matches!(err, SearchError::InvalidFilterRange { field, .. } if field == "monthly_expenditure")
        );
    }

    #[test]
    fn negative_bounds_are_caller_defined() {
        let filter = EmployeeSearchFilter::new().with_salary_gte(-1.0);
        assert!(filter.validate().is_ok());
    }
}
