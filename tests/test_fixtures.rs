//! Forms described as JSON, the way a client might ship form state to a
//! server for replay.

use form_qs::{Config, Form};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixture() -> Form {
    serde_json::from_value(json!({
        "controls": [
            {"element": "input", "type": "hidden", "name": "authenticity_token", "value": "a+b/c="},
            {"element": "input", "type": "text", "name": "post[title]", "value": "Hello World"},
            {"element": "textarea", "name": "post[body]", "value": "First!"},
            {"element": "input", "type": "checkbox", "name": "post[tag_ids][]", "value": "1", "checked": true},
            {"element": "input", "type": "checkbox", "name": "post[tag_ids][]", "value": "2"},
            {"element": "input", "type": "checkbox", "name": "post[tag_ids][]", "value": "3", "checked": true},
            {"element": "select", "name": "post[status]", "options": [
                {"value": "draft", "text": "Draft"},
                {"value": "live", "text": "Live", "selected": true}
            ]},
            {"element": "input", "type": "text", "name": "post[slug]", "value": "hello", "disabled": true},
            {"element": "other", "name": "ignored"},
            {"element": "input", "type": "submit", "name": "commit", "value": "Save"},
            {"element": "button", "name": "commit", "value": "Publish"}
        ]
    }))
    .unwrap()
}

#[test]
fn element_names_are_closed() {
    let form: Form = serde_json::from_value(json!({
        "controls": [{"element": "other", "name": "x"}]
    }))
    .unwrap();
    assert_eq!(form.len(), 1);

    let err = serde_json::from_value::<Form>(json!({
        "controls": [{"element": "div"}]
    }));
    assert!(err.is_err());
}

#[test]
fn serialize_fixture() {
    let form = fixture();
    insta::assert_snapshot!(
        form_qs::to_string(&form, None),
        @"authenticity_token=a%2Bb%2Fc%3D&post%5Btitle%5D=Hello%20World&post%5Bbody%5D=First!&post%5Btag_ids%5D%5B%5D=1&post%5Btag_ids%5D%5B%5D=3&post%5Bstatus%5D=live&commit=Save"
    );
}

#[test]
fn serialize_fixture_with_publish() {
    let form = fixture();
    insta::assert_snapshot!(
        form_qs::to_string(&form, form.control(10)),
        @"authenticity_token=a%2Bb%2Fc%3D&post%5Btitle%5D=Hello%20World&post%5Bbody%5D=First!&post%5Btag_ids%5D%5B%5D=1&post%5Btag_ids%5D%5B%5D=3&post%5Bstatus%5D=live&commit=Publish"
    );
}

#[test]
fn serialize_fixture_form_encoded() {
    let form = fixture();
    let config = Config::new().use_form_encoding(true);
    insta::assert_snapshot!(
        config.serialize_string(&form, None),
        @"authenticity_token=a%2Bb%2Fc%3D&post%5Btitle%5D=Hello+World&post%5Bbody%5D=First%21&post%5Btag_ids%5D%5B%5D=1&post%5Btag_ids%5D%5B%5D=3&post%5Bstatus%5D=live&commit=Save"
    );
}

#[test]
fn fixture_round_trips_through_json() {
    let form = fixture();
    let json = serde_json::to_value(&form).unwrap();
    let reloaded: Form = serde_json::from_value(json).unwrap();
    assert_eq!(reloaded, form);
}

#[test]
fn entries_serialize_as_pairs() {
    let form = fixture();
    let entries = form_qs::entries(&form, None);
    assert_eq!(
        serde_json::to_value(&entries[..2]).unwrap(),
        json!([["authenticity_token", "a+b/c="], ["post[title]", "Hello World"]])
    );
}
