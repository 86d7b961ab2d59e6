//! The view of a form that the serializer queries.
//!
//! `form_qs` does not own a document tree. Anything that can list its
//! controls in tree order and answer attribute queries about them can be
//! serialized: a DOM binding, a parsed HTML fragment, or the in-memory
//! [`Form`](crate::Form) shipped with this crate.
//!
//! Whatever host state is needed to answer "is this checkbox checked right
//! now?" lives inside the implementation. The serializer only ever reads
//! through these traits and never mutates the form.

/// The element a control is backed by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// `<input>`
    Input,
    /// `<select>`
    Select,
    /// `<textarea>`
    Textarea,
    /// `<button>`
    Button,
    /// Any other element (`<div>`, `<fieldset>`, ...). Never contributes.
    Other,
}

/// A form: an ordered list of controls.
///
/// `controls` must yield controls in document order, and must yield the
/// same references on every call. Submitter matching is by identity, so a
/// control handed in as the submitter is compared against these references.
pub trait FormModel {
    type Control: FormControl;

    fn controls(&self) -> impl Iterator<Item = &Self::Control>;
}

/// A single control and the attribute state the serializer reads.
pub trait FormControl {
    type Choice: FormOption;

    fn element(&self) -> Element;

    /// The raw `type` attribute, if any.
    fn type_attr(&self) -> Option<&str>;

    /// The `name` attribute. `None` and `Some("")` are both treated as
    /// unnamed.
    fn name(&self) -> Option<&str>;

    /// The current value. For a `<textarea>` this is its text.
    fn value(&self) -> Option<&str>;

    fn checked(&self) -> bool {
        false
    }

    /// Whether the control is disabled, including by a disabled ancestor
    /// `<fieldset>`.
    fn disabled(&self) -> bool {
        false
    }

    fn multiple(&self) -> bool {
        false
    }

    /// `<option>` children of a `<select>`, in document order.
    fn options(&self) -> impl Iterator<Item = &Self::Choice> {
        std::iter::empty()
    }
}

/// An `<option>` of a `<select>`.
pub trait FormOption {
    /// The `value` attribute, if present.
    fn value(&self) -> Option<&str>;

    /// The text content. Used as the value when there is no `value`
    /// attribute.
    fn text(&self) -> &str;

    fn selected(&self) -> bool;

    fn disabled(&self) -> bool {
        false
    }
}

impl<F: FormModel + ?Sized> FormModel for &F {
    type Control = F::Control;

    fn controls(&self) -> impl Iterator<Item = &Self::Control> {
        (**self).controls()
    }
}

/// An absent form has no controls.
impl<F: FormModel> FormModel for Option<F> {
    type Control = F::Control;

    fn controls(&self) -> impl Iterator<Item = &Self::Control> {
        self.iter().flat_map(|form| form.controls())
    }
}
