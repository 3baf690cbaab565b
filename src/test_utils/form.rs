use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
pub(crate) fn assert_hx_endpoint(form: &ElementRef<'_>, endpoint: &str, attribute: &str) {
    let hx_attribute = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        hx_attribute, endpoint,
        "want form with attribute {attribute}=\"{endpoint}\", got {hx_attribute:?}"
    );
}

/// Assert that `form` has a required input named `name` of type `type_`
/// whose value is `value`. A missing value attribute counts as "".
#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let selector = Selector::parse(&format!("input[name={name}]")).unwrap();
    let input = form
        .select(&selector)
        .next()
        .unwrap_or_else(|| panic!("No input found with name \"{name}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert_eq!(
        input_value, value,
        "want input {name} with value \"{value}\", got {input_value:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );
}

/// Assert that the select named `name` has exactly one selected option and
/// that its value is `value`.
#[track_caller]
pub(crate) fn assert_form_select_with_value(form: &ElementRef<'_>, name: &str, value: &str) {
    let selector = Selector::parse(&format!("select[name={name}] option[selected]")).unwrap();
    let selected = form
        .select(&selector)
        .filter_map(|option| option.value().attr("value"))
        .collect::<Vec<_>>();

    assert_eq!(
        selected,
        vec![value],
        "want select {name} to have \"{value}\" selected, got {selected:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );
    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    let got_text = got_text.trim();
    assert_eq!(text, got_text);
}
