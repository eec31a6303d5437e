use tour::domain::booking::FormPayload;
use tour::kernel::document::Document;
use tracing::trace;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, FormData, HtmlCollection, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTextAreaElement, Node,
};

const FORM_CONTROLS: [&str; 3] = ["input", "select", "textarea"];
const DISABLED: &str = "disabled";

/// The live DOM.
#[derive(Debug, Clone)]
pub struct BrowserDocument {
    document: web_sys::Document,
}

impl BrowserDocument {
    #[must_use]
    pub const fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

fn collect(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length()).filter_map(|i| collection.item(i)).collect()
}

/// DOM writes only throw on malformed names, which are all constants here.
fn settle<T>(result: Result<T, JsValue>, op: &'static str) {
    if let Err(err) = result {
        trace!(op, error = ?err, "DOM call failed");
    }
}

/// Form controls below `form`, in document order.
fn controls(form: &Element) -> Vec<Element> {
    collect(&form.get_elements_by_tag_name("*"))
        .into_iter()
        .filter(|el| FORM_CONTROLS.contains(&el.tag_name().to_ascii_lowercase().as_str()))
        .collect()
}

impl Document for BrowserDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_by_class(&self, class: &str) -> Vec<Element> {
        collect(&self.document.get_elements_by_class_name(class))
    }

    fn links_with_href_prefix(&self, prefix: &str) -> Vec<Element> {
        collect(&self.document.get_elements_by_tag_name("a"))
            .into_iter()
            .filter(|a| a.get_attribute("href").is_some_and(|href| href.starts_with(prefix)))
            .collect()
    }

    fn find_within(&self, root: &Element, class: &str) -> Option<Element> {
        root.get_elements_by_class_name(class).item(0)
    }

    fn contains(&self, ancestor: &Element, node: &Element) -> bool {
        let node: &Node = node;
        ancestor.contains(Some(node))
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn set_class(&self, element: &Element, class: &str, present: bool) {
        settle(element.class_list().toggle_with_force(class, present), "toggle class");
    }

    fn style(&self, element: &Element, property: &str) -> String {
        element
            .dyn_ref::<HtmlElement>()
            .and_then(|el| el.style().get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn set_style(&self, element: &Element, property: &str, value: &str) {
        let Some(style) = element.dyn_ref::<HtmlElement>().map(HtmlElement::style) else {
            return;
        };
        if value.is_empty() {
            settle(style.remove_property(property), "remove style");
        } else {
            settle(style.set_property(property, value), "set style");
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_top()))
    }

    fn offset_height(&self, element: &Element) -> f64 {
        element.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height()))
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn is_disabled(&self, element: &Element) -> bool {
        element.has_attribute(DISABLED)
    }

    fn set_disabled(&self, element: &Element, disabled: bool) {
        if disabled {
            settle(element.set_attribute(DISABLED, ""), "disable");
        } else {
            settle(element.remove_attribute(DISABLED), "enable");
        }
    }

    fn form_field(&self, form: &Element, name: &str) -> Option<Element> {
        controls(form).into_iter().find(|el| el.get_attribute("name").as_deref() == Some(name))
    }

    fn field_value(&self, field: &Element) -> String {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(text) = field.dyn_ref::<HtmlTextAreaElement>() {
            text.value()
        } else {
            String::new()
        }
    }

    /// Entries exactly as the browser would submit them.
    fn form_entries(&self, form: &Element) -> FormPayload {
        let Some(data) =
            form.dyn_ref::<HtmlFormElement>().and_then(|f| FormData::new_with_form(f).ok())
        else {
            return FormPayload::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return FormPayload::new();
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair = entry.dyn_into::<js_sys::Array>().ok()?;
                let name = pair.get(0).as_string()?;
                Some((name, pair.get(1).as_string().unwrap_or_default()))
            })
            .collect()
    }

    fn reset_form(&self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }
}
