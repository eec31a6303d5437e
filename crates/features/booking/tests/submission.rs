mod fixtures;

use fixtures::{BookingPage, Reply, StubTransport};
use std::time::Duration;
use tour_booking::{BookingForm, FieldStatus, SubmissionOutcome};
use tour_domain::config::BookingConfig;
use tour_domain::constants::REQUIRED_FIELDS;
use tour_kernel::memory::{ElementSpec, MemoryBrowser, MemoryDocument};
use tour_kernel::prelude::*;

const ERROR: &str = "#ff3b30";
const NEUTRAL: &str = "#d2d2d7";

async fn submit(
    page: &BookingPage,
    browser: &MemoryBrowser,
    transport: &StubTransport,
) -> SubmissionOutcome {
    let form = BookingForm::bind(&page.doc).expect("form bound");
    form.submit(&page.doc, browser, transport, &BookingConfig::default()).await
}

#[tokio::test]
async fn blank_required_field_blocks_submission() {
    for name in REQUIRED_FIELDS {
        let page = BookingPage::new();
        let browser = MemoryBrowser::default();
        let transport = StubTransport::new(&page, Reply::Body(r#"{"success": true}"#));
        page.set(name, "   ");

        let outcome = submit(&page, &browser, &transport).await;

        let SubmissionOutcome::Invalid(report) = outcome else {
            panic!("{name}: expected invalid outcome, got {outcome:?}");
        };
        assert_eq!(report.failures().map(|c| c.name).collect::<Vec<_>>(), [name]);
        assert!(transport.calls().is_empty(), "{name}: nothing is sent");
        assert_eq!(page.border(name), ERROR, "{name}");
        assert_eq!(browser.alerts(), ["Please fill in all required fields correctly."]);
        for other in REQUIRED_FIELDS.iter().filter(|other| **other != name) {
            assert_eq!(page.border(other), NEUTRAL, "{other}");
        }
    }
}

#[tokio::test]
async fn malformed_email_blocks_submission() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Body(r#"{"success": true}"#));
    page.set("user_email", "not-an-email");

    let outcome = submit(&page, &browser, &transport).await;

    let SubmissionOutcome::Invalid(report) = outcome else { panic!("expected invalid outcome") };
    let email = report.checks().iter().find(|c| c.name == "user_email").expect("email checked");
    assert_eq!(email.status, FieldStatus::MalformedEmail);
    assert_eq!(page.border("user_email"), ERROR);
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn missing_field_blocks_submission_without_panicking() {
    let doc = MemoryDocument::new();
    let form = doc.append(doc.body(), ElementSpec::new("form").id("booking-form"));
    let name = doc.append(form, ElementSpec::field("input", "user_name").value("Ana"));
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Body(r#"{"success": true}"#));

    let outcome = BookingForm::bind(&doc)
        .expect("form bound")
        .submit(&doc, &browser, &transport, &BookingConfig::default())
        .await;

    let SubmissionOutcome::Invalid(report) = outcome else { panic!("expected invalid outcome") };
    assert_eq!(report.failures().filter(|c| c.status == FieldStatus::Missing).count(), 4);
    assert_eq!(doc.style(&name, "border-color"), NEUTRAL);
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn success_posts_every_named_field_and_resets_the_form() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Body(r#"{"success": true}"#));

    assert_eq!(submit(&page, &browser, &transport).await, SubmissionOutcome::Booked);

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    let call = &calls[0];
    assert_eq!(call.endpoint, "/book");
    assert_eq!(call.button_label, "Booking...");
    assert!(call.button_disabled);
    let names: Vec<_> = call.payload.iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        [
            "tour_id",
            "user_name",
            "user_email",
            "user_phone",
            "preferred_date_time",
            "number_of_people",
            "special_requests"
        ]
    );
    assert_eq!(call.payload.get("user_email"), Some("a@b.co"));

    assert_eq!(
        browser.alerts(),
        ["Booking successful! We will contact you soon to confirm the details."]
    );
    assert_eq!(page.value("user_name"), "");
    assert_eq!(page.value("tour_id"), "lisbon-old-town", "hidden defaults survive the reset");
    assert_eq!(page.doc.text(&page.button), "Book Now");
    assert!(!page.doc.is_disabled(&page.button));
}

#[tokio::test]
async fn server_rejection_shows_its_message_and_keeps_values() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport =
        StubTransport::new(&page, Reply::Body(r#"{"success": false, "message": "Slot full"}"#));

    let outcome = submit(&page, &browser, &transport).await;

    assert_eq!(outcome, SubmissionOutcome::Rejected { message: "Slot full".to_owned() });
    assert_eq!(browser.alerts(), ["Slot full"]);
    assert_eq!(page.value("user_name"), "Ana Costa");
    assert_eq!(page.doc.text(&page.button), "Book Now");
    assert!(!page.doc.is_disabled(&page.button));
}

#[tokio::test]
async fn rejection_without_message_uses_fallback() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Body(r#"{"success": 0, "message": ""}"#));

    submit(&page, &browser, &transport).await;

    assert_eq!(browser.alerts(), ["Booking failed. Please try again or contact us directly."]);
}

#[tokio::test]
async fn transport_error_alerts_generic_message_and_restores_button() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Fail("connection reset"));

    assert_eq!(submit(&page, &browser, &transport).await, SubmissionOutcome::Failed);
    assert_eq!(browser.alerts(), ["An error occurred. Please try again or contact us directly."]);
    assert_eq!(page.doc.text(&page.button), "Book Now");
    assert!(!page.doc.is_disabled(&page.button));
    assert_eq!(page.value("user_name"), "Ana Costa");
}

#[tokio::test]
async fn non_object_reply_reads_as_rejection() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Body(r#""ok""#));

    let outcome = submit(&page, &browser, &transport).await;

    let fallback = "Booking failed. Please try again or contact us directly.";
    assert_eq!(outcome, SubmissionOutcome::Rejected { message: fallback.to_owned() });
    assert_eq!(browser.alerts(), [fallback]);
    assert_eq!(page.value("user_name"), "Ana Costa");
}

#[tokio::test]
async fn null_reply_counts_as_failure() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Body("null"));

    assert_eq!(submit(&page, &browser, &transport).await, SubmissionOutcome::Failed);
    assert_eq!(browser.alerts(), ["An error occurred. Please try again or contact us directly."]);
}

#[tokio::test]
async fn unreadable_reply_counts_as_failure() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Body("<html>502 Bad Gateway</html>"));

    assert_eq!(submit(&page, &browser, &transport).await, SubmissionOutcome::Failed);
    assert_eq!(browser.alerts(), ["An error occurred. Please try again or contact us directly."]);
}

#[tokio::test]
async fn dropped_submission_still_restores_button() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Pending);

    let attempt =
        tokio::time::timeout(Duration::from_millis(5), submit(&page, &browser, &transport)).await;

    assert!(attempt.is_err(), "the request never settles");
    assert_eq!(transport.calls().len(), 1);
    assert_eq!(page.doc.text(&page.button), "Book Now");
    assert!(!page.doc.is_disabled(&page.button));
    assert!(browser.alerts().is_empty());
}

#[tokio::test]
async fn missing_submit_button_does_not_block_submission() {
    let page = BookingPage::new();
    let browser = MemoryBrowser::default();
    let transport = StubTransport::new(&page, Reply::Body(r#"{"success": true}"#));
    page.doc.set_class(&page.button, "book-button", false);

    assert_eq!(submit(&page, &browser, &transport).await, SubmissionOutcome::Booked);
    assert_eq!(transport.calls()[0].button_label, "Book Now");
    assert!(!transport.calls()[0].button_disabled);
}
