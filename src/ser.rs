//! Serialization of forms into querystrings.

mod classify;
mod percent;
mod submitter;
mod value;

pub use classify::{ButtonType, ControlKind};
pub use value::Entry;

use classify::classify;
pub(crate) use percent::encode_to_string as encode_with;
use submitter::resolve_submitter;
use value::resolve;

use crate::error::Result;
#[cfg(feature = "tracing")]
use crate::model::FormControl;
use crate::model::FormModel;

use std::io::Write;

/// Serializes a form into a querystring.
///
/// Only controls that would be submitted contribute, in document order.
/// When `submitter` is `None` the first named submit control is included,
/// as if the form were submitted with the enter key.
///
/// ```
/// use form_qs::{Control, Form};
///
/// let form = Form::new()
///     .with_control(Control::text().with_name("title").with_value("Post"))
///     .with_control(Control::submit().with_name("commit").with_value("Create Post"));
///
/// assert_eq!(
///     form_qs::to_string(&form, None),
///     "title=Post&commit=Create%20Post"
/// );
///
/// // no form, no output
/// assert_eq!(form_qs::to_string(&None::<Form>, None), "");
/// ```
pub fn to_string<F: FormModel + ?Sized>(form: &F, submitter: Option<&F::Control>) -> String {
    let config = crate::Config::default();
    config.serialize_string(form, submitter)
}

/// Serializes a form into a generic writer object.
///
/// ```
/// use form_qs::{Control, Form};
///
/// let form = Form::new()
///     .with_control(Control::checkbox().with_name("public").with_checked(true));
///
/// let mut buffer = Vec::new();
/// form_qs::to_writer(&form, None, &mut buffer).unwrap();
/// assert_eq!(String::from_utf8(buffer).unwrap(), "public=on");
/// ```
pub fn to_writer<F: FormModel + ?Sized, W: Write>(
    form: &F,
    submitter: Option<&F::Control>,
    writer: &mut W,
) -> Result<()> {
    let config = crate::Config::default();
    config.serialize_to_writer(form, submitter, writer)
}

/// Returns the unencoded entries a form would submit, in order.
///
/// ```
/// use form_qs::{Control, Form};
///
/// let form = Form::new()
///     .with_control(Control::text().with_name("user[tags][]").with_value("cow"))
///     .with_control(Control::text().with_name("user[tags][]").with_value("milk"));
///
/// let pairs: Vec<_> = form_qs::entries(&form, None)
///     .into_iter()
///     .map(|entry| (entry.name, entry.value.into_owned()))
///     .collect();
/// assert_eq!(
///     pairs,
///     [("user[tags][]", "cow".to_owned()), ("user[tags][]", "milk".to_owned())]
/// );
/// ```
pub fn entries<'a, F: FormModel + ?Sized>(
    form: &'a F,
    submitter: Option<&'a F::Control>,
) -> Vec<Entry<'a>> {
    let config = crate::Config::default();
    config.entries(form, submitter)
}

/// Percent-encodes a single name or value.
///
/// ```
/// assert_eq!(form_qs::encode("na&me=Stimulus Reflex"), "na%26me%3DStimulus%20Reflex");
/// ```
pub fn encode(input: &str) -> String {
    crate::Config::default().encode(input)
}

/// Walks the controls of `form` and collects their entries.
pub(crate) fn collect_entries<'a, F: FormModel + ?Sized>(
    form: &'a F,
    submitter: Option<&'a F::Control>,
    submitter_fallback: bool,
) -> Vec<Entry<'a>> {
    let submitter = resolve_submitter(form, submitter, submitter_fallback);
    #[cfg(feature = "tracing")]
    if let Some(submitter) = submitter {
        tracing::debug!(name = ?submitter.name(), value = ?submitter.value(), "resolved submitter");
    }

    let mut entries = Vec::new();
    for control in form.controls() {
        let is_submitter = submitter.is_some_and(|submitter| std::ptr::eq(submitter, control));
        match classify(control, is_submitter) {
            Ok((kind, name)) => resolve(control, kind, name, &mut entries),
            Err(_reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(reason = ?_reason, name = ?control.name(), "skipping control");
            }
        }
    }
    entries
}

/// Writes entries into a querystring.
///
/// Pairs are written as `name=value`, separated by `&`, with both sides
/// percent-encoded. Nothing is written for a form with no entries.
pub struct FormSerializer<W: Write> {
    writer: W,
    first_pair: bool,
    config: crate::Config,
}

impl<W: Write> FormSerializer<W> {
    /// Creates a new `FormSerializer` with the given writer.
    pub fn new(writer: W, config: crate::Config) -> Self {
        Self {
            writer,
            first_pair: true,
            config,
        }
    }

    /// Writes every entry of `form`.
    ///
    /// Can be called more than once to concatenate several forms.
    pub fn serialize_form<F: FormModel + ?Sized>(
        &mut self,
        form: &F,
        submitter: Option<&F::Control>,
    ) -> Result<()> {
        for entry in collect_entries(form, submitter, self.config.submitter_fallback) {
            self.serialize_pair(entry.name, &entry.value)?;
        }
        Ok(())
    }

    /// Writes a single `name=value` pair.
    pub fn serialize_pair(&mut self, name: &str, value: &str) -> Result<()> {
        if self.first_pair {
            self.first_pair = false;
        } else {
            self.writer.write_all(b"&")?;
        }
        self.write_encoded(name)?;
        self.writer.write_all(b"=")?;
        self.write_encoded(value)
    }

    fn write_encoded(&mut self, input: &str) -> Result<()> {
        for encoded in percent::encode(input, self.config.use_form_encoding) {
            self.writer.write_all(encoded.as_bytes())?;
        }
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
