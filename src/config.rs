use std::io::Write;

use crate::error::Result;
use crate::model::FormModel;
use crate::ser::{Entry, FormSerializer, collect_entries};

/// Configuration for form serialization.
///
/// ## Encoding
///
/// By default names and values are encoded the way `encodeURIComponent`
/// encodes them: spaces become `%20`, and everything except ASCII
/// alphanumerics and `-_.!~*'()` is percent-encoded.
///
/// ```
/// use form_qs::{Config, Control, Form};
///
/// let form = Form::new()
///     .with_control(Control::text().with_name("q").with_value("Carrot City"));
///
/// assert_eq!(Config::new().serialize_string(&form, None), "q=Carrot%20City");
/// assert_eq!(
///     Config::new().use_form_encoding(true).serialize_string(&form, None),
///     "q=Carrot+City"
/// );
/// ```
///
/// ## Submitter fallback
///
/// When the element passed as the submitter is not a named submit control,
/// no button contributes. With `submitter_fallback` enabled, the first named
/// submit control is used instead, as if no submitter had been passed.
///
/// ```
/// use form_qs::{Config, Control, Form};
///
/// let form = Form::new()
///     .with_control(Control::text().with_name("name").with_value("Hello"))
///     .with_control(Control::submit().with_name("commit").with_value("Save"));
/// let text_input = form.control(0);
///
/// assert_eq!(Config::new().serialize_string(&form, text_input), "name=Hello");
/// assert_eq!(
///     Config::new()
///         .submitter_fallback(true)
///         .serialize_string(&form, text_input),
///     "name=Hello&commit=Save"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Config {
    pub(crate) use_form_encoding: bool,
    pub(crate) submitter_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self {
            use_form_encoding: cfg!(feature = "default_to_form_encoding"),
            submitter_fallback: false,
        }
    }

    /// By default, `form_qs` percent-encodes the way `encodeURIComponent`
    /// does, writing spaces as `%20`.
    ///
    /// Setting this to `true` uses the
    /// [`application/x-www-form-urlencoded`](https://url.spec.whatwg.org/#application-x-www-form-urlencoded-percent-encode-set)
    /// set instead, which also encodes `!~'()` and writes spaces as `+`.
    ///
    /// Alternatively, you can use the `default_to_form_encoding` Cargo feature
    /// to set this to `true` by default.
    pub const fn use_form_encoding(mut self, use_form_encoding: bool) -> Self {
        self.use_form_encoding = use_form_encoding;
        self
    }

    /// Whether a submitter that cannot submit the form (not a submit
    /// control, unnamed, or disabled) falls back to the form's first named
    /// submit control. Default is `false`: such a submitter suppresses all
    /// buttons.
    pub const fn submitter_fallback(mut self, submitter_fallback: bool) -> Self {
        self.submitter_fallback = submitter_fallback;
        self
    }

    /// Returns the unencoded entries of `form` using this `Config`.
    pub fn entries<'a, F: FormModel + ?Sized>(
        self,
        form: &'a F,
        submitter: Option<&'a F::Control>,
    ) -> Vec<Entry<'a>> {
        collect_entries(form, submitter, self.submitter_fallback)
    }

    /// Serializes `form` to a querystring using this `Config`.
    pub fn serialize_string<F: FormModel + ?Sized>(
        self,
        form: &F,
        submitter: Option<&F::Control>,
    ) -> String {
        let mut out = String::with_capacity(128);
        for entry in self.entries(form, submitter) {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&crate::ser::encode_with(entry.name, self.use_form_encoding));
            out.push('=');
            out.push_str(&crate::ser::encode_with(&entry.value, self.use_form_encoding));
        }
        out
    }

    /// Serializes `form` into `writer` using this `Config`.
    pub fn serialize_to_writer<F: FormModel + ?Sized, W: Write>(
        self,
        form: &F,
        submitter: Option<&F::Control>,
        writer: &mut W,
    ) -> Result<()> {
        let mut serializer = FormSerializer::new(writer, self);
        serializer.serialize_form(form, submitter)
    }

    /// Percent-encodes a single name or value using this `Config`.
    pub fn encode(self, input: &str) -> String {
        crate::ser::encode_with(input, self.use_form_encoding).into_owned()
    }
}
