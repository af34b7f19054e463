use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement};

/// Get element by ID
pub fn get_element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element not found: {}", id)))
}

/// Get HTML element by ID
pub fn get_html_element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    let element = get_element_by_id(document, id)?;
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("Element is not HtmlElement: {}", id)))
}

/// Get input element by ID
pub fn get_input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, JsValue> {
    let element = get_element_by_id(document, id)?;
    element
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str(&format!("Element is not HtmlInputElement: {}", id)))
}

/// First `<button>` inside `parent`, if any
pub fn find_button(parent: &Element) -> Option<HtmlButtonElement> {
    parent
        .query_selector("button")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
}

/// Create element with class
pub fn create_element_with_class(
    document: &Document,
    tag: &str,
    class: &str,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_class_name(class);
    Ok(element)
}

/// `<div class=outer><tag class=inner>` pair; returns (outer, inner)
pub fn create_bubble(
    document: &Document,
    outer_class: &str,
    inner_tag: &str,
    inner_class: &str,
) -> Result<(Element, Element), JsValue> {
    let outer = create_element_with_class(document, "div", outer_class)?;
    let inner = create_element_with_class(document, inner_tag, inner_class)?;
    outer.append_child(&inner)?;
    Ok((outer, inner))
}

/// Set text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}
