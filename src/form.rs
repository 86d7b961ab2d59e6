//! An owned, in-memory form.
//!
//! Useful when the form state is already known (tests, fixtures, forms
//! described in JSON) and there is no live document to query.
//!
//! ```
//! use form_qs::{Control, Form, SelectOption};
//!
//! let form = Form::new()
//!     .with_control(Control::text().with_name("title").with_value("Hello World"))
//!     .with_control(
//!         Control::select()
//!             .with_name("tags[]")
//!             .with_multiple(true)
//!             .with_option(SelectOption::new("rust").with_selected(true))
//!             .with_option(SelectOption::new("go")),
//!     );
//!
//! assert_eq!(
//!     form_qs::to_string(&form, None),
//!     "title=Hello%20World&tags%5B%5D=rust"
//! );
//! ```

use serde::{Deserialize, Serialize};

use crate::model::{Element, FormControl, FormModel, FormOption};

/// A list of controls in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Form {
    #[serde(default)]
    pub controls: Vec<Control>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_control(mut self, control: Control) -> Self {
        self.controls.push(control);
        self
    }

    pub fn push(&mut self, control: Control) {
        self.controls.push(control);
    }

    /// Returns the control at `index` in document order.
    ///
    /// The returned reference can be passed as the submitter.
    pub fn control(&self, index: usize) -> Option<&Control> {
        self.controls.get(index)
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

impl FromIterator<Control> for Form {
    fn from_iter<I: IntoIterator<Item = Control>>(iter: I) -> Self {
        Self {
            controls: iter.into_iter().collect(),
        }
    }
}

impl FormModel for Form {
    type Control = Control;

    fn controls(&self) -> impl Iterator<Item = &Control> {
        self.controls.iter()
    }
}

/// A single form control.
///
/// In JSON a control looks like
/// `{"element": "input", "type": "checkbox", "name": "foo", "checked": true}`.
/// Everything except `element` is optional.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Control {
    pub element: Element,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_attr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub checked: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub multiple: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl Control {
    pub fn new(element: Element) -> Self {
        Self {
            element,
            type_attr: None,
            name: None,
            value: None,
            checked: false,
            disabled: false,
            multiple: false,
            options: Vec::new(),
        }
    }

    /// An `<input>` with the given `type` attribute.
    pub fn input(type_attr: impl Into<String>) -> Self {
        Self::new(Element::Input).with_type(type_attr)
    }

    pub fn text() -> Self {
        Self::input("text")
    }

    pub fn hidden() -> Self {
        Self::input("hidden")
    }

    pub fn checkbox() -> Self {
        Self::input("checkbox")
    }

    pub fn radio() -> Self {
        Self::input("radio")
    }

    pub fn submit() -> Self {
        Self::input("submit")
    }

    /// A `<textarea>` whose value is `text`.
    pub fn textarea(text: impl Into<String>) -> Self {
        Self::new(Element::Textarea).with_value(text)
    }

    pub fn select() -> Self {
        Self::new(Element::Select)
    }

    /// A `<button>` with no `type` attribute, i.e. a submit button.
    pub fn button() -> Self {
        Self::new(Element::Button)
    }

    /// A non-form element such as a `<div>`.
    pub fn other() -> Self {
        Self::new(Element::Other)
    }

    pub fn with_type(mut self, type_attr: impl Into<String>) -> Self {
        self.type_attr = Some(type_attr.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_option(mut self, option: SelectOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options.extend(options);
        self
    }
}

impl FormControl for Control {
    type Choice = SelectOption;

    fn element(&self) -> Element {
        self.element
    }

    fn type_attr(&self) -> Option<&str> {
        self.type_attr.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn checked(&self) -> bool {
        self.checked
    }

    fn disabled(&self) -> bool {
        self.disabled
    }

    fn multiple(&self) -> bool {
        self.multiple
    }

    fn options(&self) -> impl Iterator<Item = &SelectOption> {
        self.options.iter()
    }
}

/// An `<option>` inside a [`Control::select`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub selected: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub disabled: bool,
}

impl SelectOption {
    /// An option with the given text content and no `value` attribute.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl FormOption for SelectOption {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn selected(&self) -> bool {
        self.selected
    }

    fn disabled(&self) -> bool {
        self.disabled
    }
}
