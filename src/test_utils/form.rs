use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let got = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("form is missing the {attribute} attribute"));

    assert_eq!(
        got, endpoint,
        "want form with {attribute}=\"{endpoint}\", got {got:?}"
    );
}

/// Find the input named `name` and check that it has the type `type_`.
#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str, type_: &str) -> ElementRef<'a> {
    let selector = Selector::parse(&format!("input[name=\"{name}\"]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let got_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        got_type, type_,
        "want input {name} with type \"{type_}\", got {got_type:?}"
    );

    input
}

/// Assert that the form has a required input named `name`.
#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    let input = must_get_input(form, name, type_);

    assert!(
        input.value().attr("required").is_some(),
        "want input {name} to have the required attribute"
    );
}

/// Assert that the input named `name` is filled in with `value`.
#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input = must_get_input(form, name, type_);
    let got_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        got_value, value,
        "want input {name} with value \"{value}\", got {got_value:?}"
    );
}

/// Assert the text of the form's submit button.
///
/// Cancel links and other buttons in the form are ignored.
#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button[type=\"submit\"]").unwrap())
        .next()
        .expect("No submit button found");

    let got_text = submit_button.text().collect::<String>();
    assert_eq!(text, got_text.trim());
}

/// Assert the message shown when the submitted product details were rejected.
#[track_caller]
pub(crate) fn assert_form_error_message(form: &ElementRef<'_>, want_error_message: &str) {
    let error_message = form
        .select(&Selector::parse("p").unwrap())
        .next()
        .expect("No error message found")
        .text()
        .collect::<String>();

    assert_eq!(want_error_message, error_message.trim());
}
