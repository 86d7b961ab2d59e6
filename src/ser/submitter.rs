use super::classify::is_eligible_submitter;
use crate::model::FormModel;

/// Picks the one submit control, if any, whose entry is included.
///
/// - An eligible explicit submitter wins.
/// - An explicit submitter that is not eligible (a checkbox, a `<div>`, an
///   unnamed submit) suppresses every button, unless `fallback` is set.
/// - Without an explicit submitter, the first eligible submit control in
///   document order is used.
///
/// Eligible means a submit-type control with a non-empty name that is not
/// disabled.
pub fn resolve_submitter<'a, F: FormModel + ?Sized>(
    form: &'a F,
    submitter: Option<&'a F::Control>,
    fallback: bool,
) -> Option<&'a F::Control> {
    match submitter {
        Some(submitter) if is_eligible_submitter(submitter) => Some(submitter),
        Some(_) if !fallback => None,
        _ => form
            .controls()
            .find(|control| is_eligible_submitter(*control)),
    }
}
