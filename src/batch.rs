//! Batch validation of many submitted forms.
//!
//! Useful for re-checking stored submissions or replaying a log of form
//! posts. Every form is validated against the same clock reading rules as
//! [`FormValidator::validate`].
//!
//! Enable the `parallel` feature to spread large batches over rayon's
//! thread pool.

use crate::clock::Clock;
use crate::form::{FormReport, FormValidator, FormValues};

/// Validates each form, returning reports in input order.
///
/// # Example
///
/// ```
/// use card_form::batch::validate_forms;
/// use card_form::clock::FixedClock;
/// use card_form::{ExpirationDate, FormValidator, FormValues};
///
/// let validator = FormValidator::with_clock(FixedClock::from_ymd(2024, 1, 1).unwrap());
/// let forms = vec![
///     FormValues::new("John Smith", "4111111111111111", "123", ExpirationDate::new("06", "26")),
///     FormValues::new("", "", "", ExpirationDate::default()),
/// ];
///
/// let reports = validate_forms(&validator, &forms);
/// assert!(reports[0].is_form_valid);
/// assert!(!reports[1].is_form_valid);
/// ```
pub fn validate_forms<C: Clock>(validator: &FormValidator<C>, forms: &[FormValues]) -> Vec<FormReport> {
    forms.iter().map(|f| validator.validate(f)).collect()
}

/// Splits forms into the indices of accepted and rejected ones.
pub fn partition_forms<C: Clock>(
    validator: &FormValidator<C>,
    forms: &[FormValues],
) -> (Vec<usize>, Vec<(usize, FormReport)>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();

    for (i, form) in forms.iter().enumerate() {
        let report = validator.validate(form);
        if report.is_form_valid {
            accepted.push(i);
        } else {
            rejected.push((i, report));
        }
    }

    (accepted, rejected)
}

/// Counts valid and invalid forms.
///
/// # Returns
///
/// Tuple of (valid_count, invalid_count)
pub fn count_valid<C: Clock>(validator: &FormValidator<C>, forms: &[FormValues]) -> (usize, usize) {
    let valid = forms
        .iter()
        .filter(|f| validator.validate(f).is_form_valid)
        .count();
    (valid, forms.len() - valid)
}

/// Counts valid and invalid verdicts among reports already computed.
///
/// Summaries printed next to per-form verdicts should use this rather than
/// [`count_valid`], which validates again and may read a later clock.
pub fn count_reports(reports: &[FormReport]) -> (usize, usize) {
    let valid = reports.iter().filter(|r| r.is_form_valid).count();
    (valid, reports.len() - valid)
}

/// Validates forms in parallel, returning reports in input order.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn validate_forms_parallel<C: Clock + Sync>(
    validator: &FormValidator<C>,
    forms: &[FormValues],
) -> Vec<FormReport> {
    use rayon::prelude::*;
    forms.par_iter().map(|f| validator.validate(f)).collect()
}

/// Counts valid and invalid forms in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn count_valid_parallel<C: Clock + Sync>(
    validator: &FormValidator<C>,
    forms: &[FormValues],
) -> (usize, usize) {
    use rayon::prelude::*;

    let valid = forms
        .par_iter()
        .filter(|f| validator.validate(f).is_form_valid)
        .count();
    (valid, forms.len() - valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::expiry::ExpirationDate;
    use crate::form::Field;

    fn validator() -> FormValidator<FixedClock> {
        FormValidator::with_clock(FixedClock::from_ymd(2024, 1, 1).unwrap())
    }

    fn valid_form() -> FormValues {
        FormValues::new(
            "John Smith",
            "4111111111111111",
            "123",
            ExpirationDate::new("06", "26"),
        )
    }

    fn bad_cvv_form() -> FormValues {
        FormValues::new(
            "Jane Smith",
            "5500000000000004",
            "12",
            ExpirationDate::new("12", "25"),
        )
    }

    #[test]
    fn test_validate_forms_keeps_order() {
        let forms = vec![valid_form(), bad_cvv_form(), valid_form()];
        let reports = validate_forms(&validator(), &forms);
        assert_eq!(reports.len(), 3);
        assert!(reports[0].is_form_valid);
        assert!(!reports[1].is_form_valid);
        assert!(reports[2].is_form_valid);
    }

    #[test]
    fn test_partition() {
        let forms = vec![bad_cvv_form(), valid_form(), FormValues::default()];
        let (accepted, rejected) = partition_forms(&validator(), &forms);
        assert_eq!(accepted, vec![1]);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].0, 0);
        assert_eq!(rejected[0].1.results.invalid_fields(), vec![Field::Cvv]);
        assert_eq!(rejected[1].0, 2);
    }

    #[test]
    fn test_count_valid() {
        let forms = vec![valid_form(), bad_cvv_form(), FormValues::default()];
        assert_eq!(count_valid(&validator(), &forms), (1, 2));
    }

    #[test]
    fn test_count_reports_agrees_with_verdicts_under_moving_clock() {
        use chrono::NaiveDateTime;
        use std::sync::atomic::{AtomicUsize, Ordering};

        // First reading is 2026-05-31, every later one 2026-06-02.
        struct Ticking(AtomicUsize);

        impl Clock for Ticking {
            fn now(&self) -> NaiveDateTime {
                let (month, day) = match self.0.fetch_add(1, Ordering::SeqCst) {
                    0 => (5, 31),
                    _ => (6, 2),
                };
                chrono::NaiveDate::from_ymd_opt(2026, month, day)
                    .unwrap()
                    .and_hms_opt(0, 0, 0)
                    .unwrap()
            }
        }

        let validator = FormValidator::with_clock(Ticking(AtomicUsize::new(0)));
        let forms = vec![FormValues::new(
            "John Smith",
            "4111111111111111",
            "123",
            ExpirationDate::new("06", "26"),
        )];

        let reports = validate_forms(&validator, &forms);
        assert!(reports[0].is_form_valid);
        assert_eq!(count_reports(&reports), (1, 0));
        // A second pass reads the later clock and disagrees.
        assert_eq!(count_valid(&validator, &forms), (0, 1));
    }

    #[test]
    fn test_empty_batch() {
        assert!(validate_forms(&validator(), &[]).is_empty());
        assert_eq!(count_valid(&validator(), &[]), (0, 0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let forms: Vec<FormValues> = (0..500)
            .map(|i| if i % 3 == 0 { bad_cvv_form() } else { valid_form() })
            .collect();
        let v = validator();
        assert_eq!(validate_forms_parallel(&v, &forms), validate_forms(&v, &forms));
        assert_eq!(count_valid_parallel(&v, &forms), count_valid(&v, &forms));
    }
}
