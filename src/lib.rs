//! Serialize form controls into querystrings
//!
//! Given a form (anything implementing [`FormModel`]) and optionally the
//! control that submitted it, `form_qs` produces the querystring a browser
//! would send: the same controls, in the same document order, with names and
//! values percent-encoded.
//!
//! Which controls contribute:
//!
//! * Unnamed, disabled, and non-form elements never contribute.
//! * Text-like controls always contribute, with an empty value if they have
//!   none.
//! * Checkboxes and radios contribute only when checked, with `on` as the
//!   default value.
//! * A `<select>` contributes its selected options. A single select with
//!   nothing selected falls back to its first option.
//! * At most one submit control contributes: the submitter, or the first
//!   named submit control when no submitter is given.
//!
//! Bracket names such as `user[tags][]` are not interpreted. Each control
//! produces its own pair and the name is encoded like any other string, so
//! repeated names give the usual "array" querystring.
//!
//! For the reverse direction of nested querystrings, the `serde_qs` crate is
//! a better fit. [`from_str`] here only splits a querystring back into flat
//! pairs.
//!
//! ## Usage
//!
//! ```
//! use form_qs::{Control, Form, SelectOption};
//!
//! let form = Form::new()
//!     .with_control(Control::text().with_name("account[name]").with_value("Foo Dude"))
//!     .with_control(Control::checkbox().with_name("public").with_checked(true))
//!     .with_control(Control::radio().with_name("plan").with_value("free"))
//!     .with_control(
//!         Control::select()
//!             .with_name("role")
//!             .with_option(SelectOption::new("Admin").with_value("admin"))
//!             .with_option(SelectOption::new("User").with_value("user")),
//!     )
//!     .with_control(Control::submit().with_name("commit").with_value("One"))
//!     .with_control(Control::submit().with_name("commit").with_value("Two"));
//!
//! assert_eq!(
//!     form_qs::to_string(&form, None),
//!     "account%5Bname%5D=Foo%20Dude&public=on&role=admin&commit=One"
//! );
//!
//! // the second button submitted the form
//! assert_eq!(
//!     form_qs::to_string(&form, form.control(5)),
//!     "account%5Bname%5D=Foo%20Dude&public=on&role=admin&commit=Two"
//! );
//! ```
//!
//! ## Bring your own document
//!
//! Implement [`FormModel`], [`FormControl`] and [`FormOption`] over whatever
//! tree holds your form. The serializer only reads attribute state through
//! these traits, so any live state (such as `checked`) is answered by your
//! implementation at the time of the call.

mod config;
mod de;
mod error;
mod form;
mod model;
mod ser;

#[doc(inline)]
pub use config::Config;
#[doc(inline)]
pub use de::{from_bytes, from_str};
pub use error::{Error, Result};
#[doc(inline)]
pub use form::{Control, Form, SelectOption};
#[doc(inline)]
pub use model::{Element, FormControl, FormModel, FormOption};
#[doc(inline)]
pub use ser::{
    ButtonType, ControlKind, Entry, FormSerializer, encode, entries, to_string, to_writer,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_sync() {
        assert_send_sync::<Form>();
        assert_send_sync::<Control>();
        assert_send_sync::<SelectOption>();
        assert_send_sync::<Entry<'static>>();
        assert_send_sync::<Config>();
        assert_send_sync::<Error>();
        assert_send_sync::<FormSerializer<Vec<u8>>>();
    }
}
