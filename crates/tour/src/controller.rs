use tour_booking::{BookingForm, BookingTransport, SubmissionOutcome};
use tour_domain::config::PageConfig;
use tour_effects::{PressFeedback, TagPulse};
use tour_kernel::prelude::*;
use tour_navigation::{AnchorScroller, LanguageSelector, NavbarBackground, NavigationMenu};
use tracing::{debug, info};

/// Every page behavior, bound once against the live document.
///
/// Clicks are dispatched the way they bubble: element handlers first, in attach order,
/// then the document-level "outside click" handlers.
#[derive(Debug)]
pub struct PageInteractionController<D, B, S, T>
where
    D: Document,
    B: Browser,
    S: Scheduler,
    T: BookingTransport,
{
    document: D,
    browser: B,
    scheduler: S,
    transport: T,
    config: PageConfig,

    menu: Option<NavigationMenu<D>>,
    language: Option<LanguageSelector<D>>,
    pulse: TagPulse<D>,
    anchors: AnchorScroller<D>,
    navbar: Option<NavbarBackground<D>>,
    booking: Option<BookingForm<D>>,
    press: PressFeedback<D>,
}

impl<D, B, S, T> PageInteractionController<D, B, S, T>
where
    D: Document,
    B: Browser,
    S: Scheduler,
    T: BookingTransport,
{
    /// Resolves every element the page behaviors need. Missing elements disable only the
    /// behavior that needs them.
    pub fn attach(document: D, browser: B, scheduler: S, transport: T, config: PageConfig) -> Self {
        let menu = NavigationMenu::bind(&document);
        let language = LanguageSelector::bind(&document);
        let pulse = TagPulse::bind(&document, &config.effects);
        let anchors = AnchorScroller::bind(&document, &config.navigation);
        let navbar = NavbarBackground::bind(&document, &config.navigation);
        let booking = BookingForm::bind(&document);
        let press = PressFeedback::bind(&document, &config.effects);

        let controller = Self {
            document,
            browser,
            scheduler,
            transport,
            config,
            menu,
            language,
            pulse,
            anchors,
            navbar,
            booking,
            press,
        };
        info!(slices = ?controller.bound_slices(), "Page interactions attached");
        controller
    }

    /// Names of the optional behaviors whose markup was found.
    #[must_use]
    pub fn bound_slices(&self) -> Vec<&'static str> {
        [
            ("menu", self.menu.is_some()),
            ("language", self.language.is_some()),
            ("navbar", self.navbar.is_some()),
            ("booking", self.booking.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, bound)| bound.then_some(name))
        .collect()
    }

    /// Handles a document click on `target`. The host calls `preventDefault()` when the
    /// result is [`DefaultAction::Prevent`].
    pub fn on_click(&self, target: &D::Element) -> DefaultAction {
        let doc = &self.document;
        let mut action = DefaultAction::Allow;

        if let Some(menu) = &self.menu {
            action = action.and(menu.on_element_click(doc, target));
        }
        if let Some(language) = &self.language {
            action = action.and(language.on_element_click(doc, target));
        }
        action = action
            .and(self.pulse.on_element_click(doc, &self.scheduler, target))
            .and(self.anchors.on_element_click(doc, &self.browser, target))
            .and(self.press.on_element_click(doc, &self.scheduler, target));

        if let Some(menu) = &self.menu {
            menu.on_document_click(doc, target);
        }
        if let Some(language) = &self.language {
            language.on_document_click(doc, target);
        }

        action
    }

    pub fn on_scroll(&self) {
        if let Some(navbar) = &self.navbar {
            navbar.on_scroll(&self.document, &self.browser);
        }
    }

    /// Runs one booking attempt; `None` when the page has no booking form.
    pub async fn submit_booking(&self) -> Option<SubmissionOutcome> {
        let Some(booking) = &self.booking else {
            debug!("Submit ignored, no booking form bound");
            return None;
        };
        let outcome = booking
            .submit(&self.document, &self.browser, &self.transport, &self.config.booking)
            .await;
        Some(outcome)
    }

    /// The bound booking form element, for hosts that register the submit listener.
    pub fn booking_form(&self) -> Option<&D::Element> {
        self.booking.as_ref().map(BookingForm::element)
    }
}
