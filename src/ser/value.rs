use std::borrow::Cow;

use serde::ser::{Serialize, Serializer};

use super::classify::ControlKind;
use crate::model::{FormControl, FormOption};

/// A single `(name, value)` contribution, before encoding.
///
/// Names are kept exactly as written on the control: `user[tags][]` is a
/// plain string here, not a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry<'a> {
    pub name: &'a str,
    pub value: Cow<'a, str>,
}

impl<'a> Entry<'a> {
    pub fn new(name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn into_pair(self) -> (String, String) {
        (self.name.to_owned(), self.value.into_owned())
    }
}

/// Serializes as a `(name, value)` tuple, so a list of entries can be fed
/// to any pair-based format.
impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.name, &*self.value).serialize(serializer)
    }
}

/// The value a checked checkbox or radio submits when it has no `value`.
const DEFAULT_CHECKED_VALUE: &str = "on";

/// Appends the entries contributed by a control that has already been
/// classified as contributing.
pub fn resolve<'a, C: FormControl + ?Sized>(
    control: &'a C,
    kind: ControlKind,
    name: &'a str,
    out: &mut Vec<Entry<'a>>,
) {
    match kind {
        ControlKind::Text | ControlKind::Button(_) => {
            out.push(Entry::new(name, control.value().unwrap_or_default()));
        }
        ControlKind::Checkbox | ControlKind::Radio => {
            if control.checked() {
                out.push(Entry::new(
                    name,
                    control.value().unwrap_or(DEFAULT_CHECKED_VALUE),
                ));
            }
        }
        ControlKind::SelectOne => {
            if let Some(option) = selected_option(control) {
                out.push(Entry::new(name, option_value(option)));
            }
        }
        ControlKind::SelectMultiple => {
            out.extend(
                control
                    .options()
                    .filter(|option| option.selected() && !option.disabled())
                    .map(|option| Entry::new(name, option_value(option))),
            );
        }
    }
}

/// The option a single-select submits: the first selected option, or the
/// first enabled option when none is selected.
fn selected_option<C: FormControl + ?Sized>(control: &C) -> Option<&C::Choice> {
    match control.options().find(|option| option.selected()) {
        Some(option) if option.disabled() => None,
        Some(option) => Some(option),
        None => control.options().find(|option| !option.disabled()),
    }
}

/// The `value` attribute, falling back to the text content.
fn option_value<O: FormOption + ?Sized>(option: &O) -> Cow<'_, str> {
    match option.value() {
        Some(value) => Cow::Borrowed(value),
        None => strip_and_collapse_whitespace(option.text()),
    }
}

fn is_ascii_whitespace(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0C' | '\r' | ' ')
}

/// Trims ASCII whitespace and collapses interior runs to a single space.
fn strip_and_collapse_whitespace(text: &str) -> Cow<'_, str> {
    let trimmed = text.trim_matches(is_ascii_whitespace);
    let needs_collapse = trimmed.contains("  ")
        || trimmed.contains(|c: char| c != ' ' && is_ascii_whitespace(c));
    if !needs_collapse {
        return Cow::Borrowed(trimmed);
    }
    let mut collapsed = String::with_capacity(trimmed.len());
    for word in trimmed
        .split(is_ascii_whitespace)
        .filter(|word| !word.is_empty())
    {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(word);
    }
    Cow::Owned(collapsed)
}
