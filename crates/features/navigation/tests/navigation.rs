use tour_domain::config::NavigationConfig;
use tour_domain::state::{DropdownState, MenuState, NavbarTone};
use tour_kernel::memory::{ElementSpec, MemoryBrowser, MemoryDocument, NodeId};
use tour_kernel::prelude::*;
use tour_navigation::{AnchorScroller, LanguageSelector, NavbarBackground, NavigationMenu};

struct Page {
    doc: MemoryDocument,
    hamburger: NodeId,
    hamburger_bar: NodeId,
    menu: NodeId,
    link: NodeId,
    lang_button: NodeId,
    lang_dropdown: NodeId,
    lang_option: NodeId,
    tours_link: NodeId,
    bare_link: NodeId,
    ghost_link: NodeId,
    content: NodeId,
}

fn page() -> Page {
    let doc = MemoryDocument::new();
    let nav = doc.append(doc.body(), ElementSpec::new("nav").class("navbar").offset(0.0, 70.0));
    let hamburger = doc.append(nav, ElementSpec::new("div").id("hamburger"));
    let hamburger_bar = doc.append(hamburger, ElementSpec::new("span").class("bar"));
    let menu = doc.append(nav, ElementSpec::new("ul").id("nav-menu"));
    let link = doc.append(
        menu,
        ElementSpec::new("a").class("nav-link").attr("href", "#tours").text("Tours"),
    );
    let lang_button =
        doc.append(nav, ElementSpec::new("a").id("lang-button").attr("href", "/lang"));
    let lang_dropdown = doc.append(nav, ElementSpec::new("div").id("lang-dropdown"));
    let lang_option = doc.append(lang_dropdown, ElementSpec::new("a").attr("href", "/?lang=es"));
    let tours_link = doc.append(doc.body(), ElementSpec::new("a").attr("href", "#tours"));
    let bare_link = doc.append(doc.body(), ElementSpec::new("a").attr("href", "#"));
    let ghost_link = doc.append(doc.body(), ElementSpec::new("a").attr("href", "#nowhere"));
    let content =
        doc.append(doc.body(), ElementSpec::new("section").id("tours").offset(900.0, 400.0));

    Page {
        doc,
        hamburger,
        hamburger_bar,
        menu,
        link,
        lang_button,
        lang_dropdown,
        lang_option,
        tours_link,
        bare_link,
        ghost_link,
        content,
    }
}

#[test]
fn hamburger_toggles_both_elements_together() {
    let p = page();
    let menu = NavigationMenu::bind(&p.doc).expect("menu bound");

    menu.on_element_click(&p.doc, &p.hamburger_bar);
    assert_eq!(menu.state(&p.doc), MenuState::Open);
    assert!(p.doc.has_class(&p.hamburger, "active"));
    assert!(p.doc.has_class(&p.menu, "active"));

    menu.on_element_click(&p.doc, &p.hamburger);
    assert_eq!(menu.state(&p.doc), MenuState::Closed);
    assert!(!p.doc.has_class(&p.hamburger, "active"));
}

#[test]
fn menu_link_and_outside_click_close_the_menu() {
    let p = page();
    let menu = NavigationMenu::bind(&p.doc).expect("menu bound");

    menu.toggle(&p.doc);
    menu.on_element_click(&p.doc, &p.link);
    assert_eq!(menu.state(&p.doc), MenuState::Closed);

    menu.toggle(&p.doc);
    menu.on_document_click(&p.doc, &p.link);
    assert_eq!(menu.state(&p.doc), MenuState::Open, "clicks inside the panel keep it open");

    menu.on_document_click(&p.doc, &p.content);
    assert_eq!(menu.state(&p.doc), MenuState::Closed);

    menu.on_document_click(&p.doc, &p.content);
    assert_eq!(menu.state(&p.doc), MenuState::Closed, "closing twice is a no-op");
}

#[test]
fn menu_without_markup_is_not_bound() {
    let doc = MemoryDocument::new();
    doc.append(doc.body(), ElementSpec::new("ul").id("nav-menu"));
    assert!(NavigationMenu::bind(&doc).is_none());
}

#[test]
fn language_trigger_toggles_paired_styles() {
    let p = page();
    let selector = LanguageSelector::bind(&p.doc).expect("selector bound");

    let action = selector.on_element_click(&p.doc, &p.lang_button);
    assert_eq!(action, DefaultAction::Prevent);
    assert_eq!(selector.state(&p.doc), DropdownState::Open);
    assert_eq!(p.doc.style(&p.lang_dropdown, "opacity"), "1");
    assert_eq!(p.doc.style(&p.lang_dropdown, "visibility"), "visible");

    selector.on_element_click(&p.doc, &p.lang_button);
    assert_eq!(p.doc.style(&p.lang_dropdown, "opacity"), "0");
    assert_eq!(p.doc.style(&p.lang_dropdown, "visibility"), "hidden");

    assert_eq!(selector.on_element_click(&p.doc, &p.content), DefaultAction::Allow);
}

#[test]
fn language_dropdown_closes_on_outside_click_only() {
    let p = page();
    let selector = LanguageSelector::bind(&p.doc).expect("selector bound");
    selector.render(&p.doc, DropdownState::Open);

    selector.on_document_click(&p.doc, &p.lang_option);
    assert_eq!(selector.state(&p.doc), DropdownState::Open);

    selector.on_document_click(&p.doc, &p.content);
    assert_eq!(selector.state(&p.doc), DropdownState::Closed);
    assert_eq!(p.doc.style(&p.lang_dropdown, "visibility"), "hidden");
}

#[test]
fn language_selector_requires_both_elements() {
    let doc = MemoryDocument::new();
    doc.append(doc.body(), ElementSpec::new("a").id("lang-button"));
    assert!(LanguageSelector::bind(&doc).is_none());
}

#[test]
fn anchor_scrolls_below_the_navbar() {
    let p = page();
    let browser = MemoryBrowser::default();
    let scroller = AnchorScroller::bind(&p.doc, &NavigationConfig::default());

    let action = scroller.on_element_click(&p.doc, &browser, &p.tours_link);
    assert_eq!(action, DefaultAction::Prevent);
    assert_eq!(browser.scrolls(), [900.0 - 70.0 - 20.0]);
    assert!(browser.navigations().is_empty());
}

#[test]
fn anchor_without_section_is_a_silent_no_op() {
    let p = page();
    let browser = MemoryBrowser::default();
    let scroller = AnchorScroller::bind(&p.doc, &NavigationConfig::default());

    scroller.on_element_click(&p.doc, &browser, &p.ghost_link);
    scroller.on_element_click(&p.doc, &browser, &p.bare_link);
    scroller.follow(&p.doc, &browser, "#missing");

    assert!(browser.scrolls().is_empty());
    assert!(browser.navigations().is_empty());
}

#[test]
fn anchor_off_the_home_page_navigates_home() {
    let p = page();
    let browser = MemoryBrowser::at("/tour/lisbon");
    let scroller = AnchorScroller::bind(&p.doc, &NavigationConfig::default());

    let action = scroller.on_element_click(&p.doc, &browser, &p.tours_link);
    assert_eq!(action, DefaultAction::Allow);
    assert_eq!(browser.navigations(), ["/#tours"]);
    assert!(browser.scrolls().is_empty());
}

#[test]
fn anchor_without_navbar_uses_margin_only() {
    let doc = MemoryDocument::new();
    let section =
        doc.append(doc.body(), ElementSpec::new("section").id("faq").offset(500.0, 10.0));
    let scroller = AnchorScroller::bind(&doc, &NavigationConfig::default());
    assert!((scroller.scroll_target(&doc, &section) - 480.0).abs() < f64::EPSILON);
}

#[test]
fn navbar_tone_follows_scroll_offset() {
    let p = page();
    let browser = MemoryBrowser::default();
    let navbar = NavbarBackground::bind(&p.doc, &NavigationConfig::default()).expect("navbar");
    let nav = p.doc.first_by_class("navbar").expect("navbar element");

    browser.set_scroll_y(50.0);
    assert_eq!(navbar.on_scroll(&p.doc, &browser), NavbarTone::Translucent);
    assert_eq!(p.doc.style(&nav, "background"), "rgba(255, 255, 255, 0.95)");

    browser.set_scroll_y(51.0);
    assert_eq!(navbar.on_scroll(&p.doc, &browser), NavbarTone::Solid);
    assert_eq!(p.doc.style(&nav, "background"), "rgba(255, 255, 255, 0.98)");

    browser.set_scroll_y(10.0);
    navbar.on_scroll(&p.doc, &browser);
    assert_eq!(p.doc.style(&nav, "background"), "rgba(255, 255, 255, 0.95)");
}
