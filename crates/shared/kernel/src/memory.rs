//! In-memory [`Document`] and [`Browser`] used to exercise handlers without a browser.
//!
//! ```rust
//! use tour_kernel::memory::{ElementSpec, MemoryDocument};
//! use tour_kernel::prelude::*;
//!
//! let doc = MemoryDocument::new();
//! let menu = doc.append(doc.body(), ElementSpec::new("ul").id("nav-menu"));
//! let link = doc.append(menu, ElementSpec::new("a").class("nav-link").attr("href", "#tours"));
//!
//! assert!(doc.contains(&menu, &link));
//! assert_eq!(doc.links_with_href_prefix("#"), vec![link]);
//! ```

use crate::document::{Browser, Document};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tour_domain::booking::FormPayload;

const FORM_CONTROLS: [&str; 3] = ["input", "select", "textarea"];

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Declarative description of an element to append.
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: FxHashMap<String, String>,
    text: String,
    value: String,
    default_value: String,
    offset_top: f64,
    offset_height: f64,
}

impl ElementSpec {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into().to_ascii_lowercase(), ..Self::default() }
    }

    /// A named form control.
    #[must_use]
    pub fn field(tag: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(tag).attr("name", name)
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Current value of a control, as typed by the user.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Markup default of a control (the `value` attribute); also becomes the current value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self.value.clone_from(&self.default_value);
        self
    }

    #[must_use]
    pub const fn offset(mut self, top: f64, height: f64) -> Self {
        self.offset_top = top;
        self.offset_height = height;
        self
    }
}

#[derive(Debug)]
struct Node {
    spec: ElementSpec,
    styles: FxHashMap<String, String>,
    disabled: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn is_control(&self) -> bool {
        FORM_CONTROLS.contains(&self.spec.tag.as_str())
    }

    fn name(&self) -> Option<&str> {
        self.spec.attributes.get("name").map(String::as_str)
    }
}

#[derive(Debug)]
struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    /// Pre-order walk below (and including) `root`.
    fn walk(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        order
    }

    fn controls(&self, form: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.walk(form).into_iter().filter(|id| self.node(*id).is_control())
    }
}

/// Shared, mutable element tree rooted at `<body>`.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    tree: Arc<RwLock<Tree>>,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        let body = Node {
            spec: ElementSpec::new("body"),
            styles: FxHashMap::default(),
            disabled: false,
            parent: None,
            children: Vec::new(),
        };
        Self { tree: Arc::new(RwLock::new(Tree { nodes: vec![body] })) }
    }

    #[must_use]
    pub const fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Appends a new element as the last child of `parent`.
    pub fn append(&self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let mut tree = self.tree.write();
        let id = NodeId(tree.nodes.len());
        tree.nodes.push(Node {
            spec,
            styles: FxHashMap::default(),
            disabled: false,
            parent: Some(parent),
            children: Vec::new(),
        });
        tree.node_mut(parent).children.push(id);
        id
    }

    /// Simulates the user typing into a control.
    pub fn set_value(&self, field: NodeId, value: impl Into<String>) {
        self.tree.write().node_mut(field).spec.value = value.into();
    }

    fn find_all(&self, predicate: impl Fn(&Node) -> bool) -> Vec<NodeId> {
        let tree = self.tree.read();
        tree.walk(self.body()).into_iter().filter(|id| predicate(tree.node(*id))).collect()
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find_all(|n| n.spec.id.as_deref() == Some(id)).into_iter().next()
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find_all(|n| n.spec.classes.iter().any(|c| c == class))
    }

    fn links_with_href_prefix(&self, prefix: &str) -> Vec<NodeId> {
        self.find_all(|n| {
            n.spec.tag == "a"
                && n.spec.attributes.get("href").is_some_and(|h| h.starts_with(prefix))
        })
    }

    fn find_within(&self, root: &NodeId, class: &str) -> Option<NodeId> {
        let tree = self.tree.read();
        tree.walk(*root)
            .into_iter()
            .skip(1)
            .find(|id| tree.node(*id).spec.classes.iter().any(|c| c == class))
    }

    fn contains(&self, ancestor: &NodeId, node: &NodeId) -> bool {
        let tree = self.tree.read();
        let mut current = Some(*node);
        while let Some(id) = current {
            if id == *ancestor {
                return true;
            }
            current = tree.node(id).parent;
        }
        false
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.tree.read().node(*element).spec.classes.iter().any(|c| c == class)
    }

    fn set_class(&self, element: &NodeId, class: &str, present: bool) {
        let mut tree = self.tree.write();
        let classes = &mut tree.node_mut(*element).spec.classes;
        let has = classes.iter().any(|c| c == class);
        if present && !has {
            classes.push(class.to_owned());
        } else if !present && has {
            classes.retain(|c| c != class);
        }
    }

    fn style(&self, element: &NodeId, property: &str) -> String {
        self.tree.read().node(*element).styles.get(property).cloned().unwrap_or_default()
    }

    fn set_style(&self, element: &NodeId, property: &str, value: &str) {
        let mut tree = self.tree.write();
        let styles = &mut tree.node_mut(*element).styles;
        if value.is_empty() {
            styles.remove(property);
        } else {
            styles.insert(property.to_owned(), value.to_owned());
        }
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.tree.read().node(*element).spec.attributes.get(name).cloned()
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.tree.read().node(*element).spec.offset_top
    }

    fn offset_height(&self, element: &NodeId) -> f64 {
        self.tree.read().node(*element).spec.offset_height
    }

    fn text(&self, element: &NodeId) -> String {
        self.tree.read().node(*element).spec.text.clone()
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        self.tree.write().node_mut(*element).spec.text = text.to_owned();
    }

    fn is_disabled(&self, element: &NodeId) -> bool {
        self.tree.read().node(*element).disabled
    }

    fn set_disabled(&self, element: &NodeId, disabled: bool) {
        self.tree.write().node_mut(*element).disabled = disabled;
    }

    fn form_field(&self, form: &NodeId, name: &str) -> Option<NodeId> {
        let tree = self.tree.read();
        tree.walk(*form).into_iter().skip(1).find(|id| tree.node(*id).name() == Some(name))
    }

    fn field_value(&self, field: &NodeId) -> String {
        let tree = self.tree.read();
        let node = tree.node(*field);
        if node.is_control() { node.spec.value.clone() } else { String::new() }
    }

    fn form_entries(&self, form: &NodeId) -> FormPayload {
        let tree = self.tree.read();
        tree.controls(*form)
            .map(|id| tree.node(id))
            .filter(|n| !n.disabled)
            .filter_map(|n| n.name().map(|name| (name.to_owned(), n.spec.value.clone())))
            .collect()
    }

    fn reset_form(&self, form: &NodeId) {
        let mut tree = self.tree.write();
        let controls: Vec<NodeId> = tree.controls(*form).collect();
        for id in controls {
            let spec = &mut tree.node_mut(id).spec;
            spec.value.clone_from(&spec.default_value);
        }
    }
}

#[derive(Debug, Default)]
struct Window {
    pathname: String,
    scroll_y: f64,
    alerts: Vec<String>,
    navigations: Vec<String>,
    scrolls: Vec<f64>,
}

/// Recording browser: every alert, navigation and smooth scroll is kept for inspection.
#[derive(Debug, Clone)]
pub struct MemoryBrowser {
    window: Arc<RwLock<Window>>,
}

impl Default for MemoryBrowser {
    fn default() -> Self {
        Self::at("/")
    }
}

impl MemoryBrowser {
    /// A browser showing `pathname`.
    #[must_use]
    pub fn at(pathname: impl Into<String>) -> Self {
        let window = Window { pathname: pathname.into(), ..Window::default() };
        Self { window: Arc::new(RwLock::new(window)) }
    }

    pub fn set_scroll_y(&self, scroll_y: f64) {
        self.window.write().scroll_y = scroll_y;
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.window.read().alerts.clone()
    }

    #[must_use]
    pub fn navigations(&self) -> Vec<String> {
        self.window.read().navigations.clone()
    }

    #[must_use]
    pub fn scrolls(&self) -> Vec<f64> {
        self.window.read().scrolls.clone()
    }
}

impl Browser for MemoryBrowser {
    fn pathname(&self) -> String {
        self.window.read().pathname.clone()
    }

    fn navigate(&self, href: &str) {
        self.window.write().navigations.push(href.to_owned());
    }

    fn scroll_y(&self) -> f64 {
        self.window.read().scroll_y
    }

    fn smooth_scroll_to(&self, top: f64) {
        self.window.write().scrolls.push(top);
    }

    fn alert(&self, message: &str) {
        self.window.write().alerts.push(message.to_owned());
    }
}
