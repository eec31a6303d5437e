//! Markup contract shared with the server-rendered templates and stylesheets.

// Element ids
pub const HAMBURGER: &str = "hamburger";
pub const NAV_MENU: &str = "nav-menu";
pub const LANG_BUTTON: &str = "lang-button";
pub const LANG_DROPDOWN: &str = "lang-dropdown";
pub const BOOKING_FORM: &str = "booking-form";
pub const PAGE_CONFIG: &str = "page-config";

// Element classes
pub const INTEREST_TAG: &str = "interest-tag";
pub const NAV_LINK: &str = "nav-link";
pub const CTA_BUTTON: &str = "cta-button";
pub const TOUR_BUTTON: &str = "tour-button";
pub const NAVBAR: &str = "navbar";
pub const BOOK_BUTTON: &str = "book-button";

/// State class toggled on the hamburger and the menu panel.
pub const ACTIVE: &str = "active";

// Inline style properties
pub const OPACITY: &str = "opacity";
pub const VISIBILITY: &str = "visibility";
pub const BACKGROUND: &str = "background";
pub const COLOR: &str = "color";
pub const TRANSFORM: &str = "transform";
pub const BORDER_COLOR: &str = "border-color";

// Attributes
pub const HREF: &str = "href";

pub const ROOT_PATH: &str = "/";
pub const FRAGMENT_PREFIX: &str = "#";

// Booking form field names, as posted to the booking endpoint
pub const USER_NAME: &str = "user_name";
pub const USER_EMAIL: &str = "user_email";
pub const USER_PHONE: &str = "user_phone";
pub const PREFERRED_DATE_TIME: &str = "preferred_date_time";
pub const NUMBER_OF_PEOPLE: &str = "number_of_people";

/// Fields that must be present and non-blank, in validation order.
pub const REQUIRED_FIELDS: [&str; 5] =
    [USER_NAME, USER_EMAIL, USER_PHONE, PREFERRED_DATE_TIME, NUMBER_OF_PEOPLE];
