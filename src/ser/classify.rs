use crate::model::{Element, FormControl};

/// How a control contributes to the entry list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Text, email, hidden, password, `<textarea>`, and any `<input>` type
    /// not listed below.
    Text,
    Checkbox,
    Radio,
    SelectOne,
    SelectMultiple,
    Button(ButtonType),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonType {
    Submit,
    Reset,
    Button,
}

impl ControlKind {
    /// Classifies `control`, or returns `None` for elements that are not
    /// form controls.
    pub fn of<C: FormControl + ?Sized>(control: &C) -> Option<Self> {
        let type_attr = control.type_attr().unwrap_or_default();
        let is = |ty: &str| type_attr.eq_ignore_ascii_case(ty);
        let kind = match control.element() {
            Element::Input if is("checkbox") => Self::Checkbox,
            Element::Input if is("radio") => Self::Radio,
            Element::Input if is("submit") => Self::Button(ButtonType::Submit),
            Element::Input if is("reset") => Self::Button(ButtonType::Reset),
            Element::Input if is("button") => Self::Button(ButtonType::Button),
            Element::Input | Element::Textarea => Self::Text,
            Element::Select if control.multiple() => Self::SelectMultiple,
            Element::Select => Self::SelectOne,
            // a missing or unknown type on <button> means submit
            Element::Button if is("reset") => Self::Button(ButtonType::Reset),
            Element::Button if is("button") => Self::Button(ButtonType::Button),
            Element::Button => Self::Button(ButtonType::Submit),
            Element::Other => return None,
        };
        Some(kind)
    }

    pub fn is_submit(self) -> bool {
        self == Self::Button(ButtonType::Submit)
    }
}

/// The non-empty name of `control`, or `None` if it has none.
pub fn control_name<C: FormControl + ?Sized>(control: &C) -> Option<&str> {
    control.name().filter(|name| !name.is_empty())
}

/// Whether `control` could submit the form: a submit-type control with a
/// non-empty name that is not disabled.
pub fn is_eligible_submitter<C: FormControl + ?Sized>(control: &C) -> bool {
    ControlKind::of(control).is_some_and(ControlKind::is_submit)
        && control_name(control).is_some()
        && !control.disabled()
}

/// Why a control was left out of the entry list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    NotAControl,
    Unnamed,
    Disabled,
    NotSubmitter,
}

/// Returns the kind and name of `control` if it contributes, or the reason
/// it does not.
///
/// `is_submitter` reports whether this control is the resolved submitter.
/// A contributing control may still produce no entries (an unchecked
/// checkbox, a multi-select with nothing selected).
pub fn classify<C: FormControl + ?Sized>(
    control: &C,
    is_submitter: bool,
) -> Result<(ControlKind, &str), Skip> {
    let kind = ControlKind::of(control).ok_or(Skip::NotAControl)?;
    let name = control_name(control).ok_or(Skip::Unnamed)?;
    if control.disabled() {
        return Err(Skip::Disabled);
    }
    if matches!(kind, ControlKind::Button(_)) && !(kind.is_submit() && is_submitter) {
        return Err(Skip::NotSubmitter);
    }
    Ok((kind, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Control;

    fn kind(control: Control) -> Option<ControlKind> {
        ControlKind::of(&control)
    }

    #[test]
    fn input_types() {
        assert_eq!(kind(Control::text()), Some(ControlKind::Text));
        assert_eq!(kind(Control::input("email")), Some(ControlKind::Text));
        assert_eq!(kind(Control::hidden()), Some(ControlKind::Text));
        assert_eq!(kind(Control::checkbox()), Some(ControlKind::Checkbox));
        assert_eq!(kind(Control::input("RADIO")), Some(ControlKind::Radio));
        assert_eq!(
            kind(Control::submit()),
            Some(ControlKind::Button(ButtonType::Submit))
        );
        assert_eq!(
            kind(Control::input("reset")),
            Some(ControlKind::Button(ButtonType::Reset))
        );
    }

    #[test]
    fn unknown_input_type_is_text() {
        assert_eq!(kind(Control::input("bogus")), Some(ControlKind::Text));
        assert_eq!(
            kind(Control::new(Element::Input)),
            Some(ControlKind::Text)
        );
    }

    #[test]
    fn button_defaults_to_submit() {
        assert_eq!(
            kind(Control::button()),
            Some(ControlKind::Button(ButtonType::Submit))
        );
        assert_eq!(
            kind(Control::button().with_type("submit name=")),
            Some(ControlKind::Button(ButtonType::Submit))
        );
        assert_eq!(
            kind(Control::button().with_type("button")),
            Some(ControlKind::Button(ButtonType::Button))
        );
    }

    #[test]
    fn selects() {
        assert_eq!(kind(Control::select()), Some(ControlKind::SelectOne));
        assert_eq!(
            kind(Control::select().with_multiple(true)),
            Some(ControlKind::SelectMultiple)
        );
    }

    #[test]
    fn skip_reasons() {
        assert_eq!(
            classify(&Control::other().with_name("foo"), false),
            Err(Skip::NotAControl)
        );
        assert_eq!(classify(&Control::text(), false), Err(Skip::Unnamed));
        assert_eq!(
            classify(&Control::text().with_name(""), false),
            Err(Skip::Unnamed)
        );
        assert_eq!(
            classify(&Control::text().with_name("a").with_disabled(true), false),
            Err(Skip::Disabled)
        );
        assert_eq!(
            classify(&Control::submit().with_name("a"), false),
            Err(Skip::NotSubmitter)
        );
        // reset buttons never contribute, even as the submitter
        assert_eq!(
            classify(&Control::input("reset").with_name("a"), true),
            Err(Skip::NotSubmitter)
        );
        assert_eq!(
            classify(&Control::submit().with_name("a"), true),
            Ok((ControlKind::Button(ButtonType::Submit), "a"))
        );
    }

    #[test]
    fn eligible_submitters() {
        assert!(is_eligible_submitter(&Control::submit().with_name("commit")));
        assert!(is_eligible_submitter(&Control::button().with_name("commit")));
        assert!(!is_eligible_submitter(&Control::submit()));
        assert!(!is_eligible_submitter(&Control::submit().with_name("")));
        assert!(!is_eligible_submitter(
            &Control::submit().with_name("commit").with_disabled(true)
        ));
        assert!(!is_eligible_submitter(&Control::checkbox().with_name("public")));
        assert!(!is_eligible_submitter(&Control::other().with_name("foo")));
    }
}
