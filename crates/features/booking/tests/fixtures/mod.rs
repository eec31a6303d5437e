#![allow(dead_code)]

use std::cell::RefCell;
use tour_booking::{BookingError, BookingTransport};
use tour_domain::booking::FormPayload;
use tour_kernel::memory::{ElementSpec, MemoryDocument, NodeId};
use tour_kernel::prelude::*;

/// What the stub answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Body(&'static str),
    Fail(&'static str),
    /// Never settles.
    Pending,
}

/// One recorded request, with the submit button as it looked while the request was in flight.
#[derive(Debug, Clone)]
pub struct Call {
    pub endpoint: String,
    pub payload: FormPayload,
    pub button_label: String,
    pub button_disabled: bool,
}

#[derive(Debug)]
pub struct StubTransport {
    reply: Reply,
    doc: MemoryDocument,
    button: NodeId,
    calls: RefCell<Vec<Call>>,
}

impl StubTransport {
    pub fn new(page: &BookingPage, reply: Reply) -> Self {
        Self { reply, doc: page.doc.clone(), button: page.button, calls: RefCell::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl BookingTransport for StubTransport {
    async fn send(&self, endpoint: &str, payload: &FormPayload) -> Result<String, BookingError> {
        self.calls.borrow_mut().push(Call {
            endpoint: endpoint.to_owned(),
            payload: payload.clone(),
            button_label: self.doc.text(&self.button),
            button_disabled: self.doc.is_disabled(&self.button),
        });

        match self.reply {
            Reply::Body(body) => Ok(body.to_owned()),
            Reply::Fail(message) => Err(BookingError::transport(message)),
            Reply::Pending => std::future::pending().await,
        }
    }
}

/// A filled-in booking form with every required field valid.
#[derive(Debug)]
pub struct BookingPage {
    pub doc: MemoryDocument,
    pub form: NodeId,
    pub button: NodeId,
}

impl BookingPage {
    pub fn new() -> Self {
        let doc = MemoryDocument::new();
        let form = doc.append(doc.body(), ElementSpec::new("form").id("booking-form"));
        doc.append(form, ElementSpec::field("input", "tour_id").default_value("lisbon-old-town"));
        doc.append(form, ElementSpec::field("input", "user_name").value("Ana Costa"));
        doc.append(form, ElementSpec::field("input", "user_email").value("a@b.co"));
        doc.append(form, ElementSpec::field("input", "user_phone").value("+351 910 000 000"));
        doc.append(
            form,
            ElementSpec::field("input", "preferred_date_time").value("2026-11-02T10:00"),
        );
        doc.append(form, ElementSpec::field("select", "number_of_people").value("2"));
        doc.append(form, ElementSpec::field("textarea", "special_requests").value("Window seat"));
        let button =
            doc.append(form, ElementSpec::new("button").class("book-button").text("Book Now"));
        Self { doc, form, button }
    }

    pub fn field(&self, name: &str) -> NodeId {
        self.doc.form_field(&self.form, name).expect("field present")
    }

    pub fn set(&self, name: &str, value: &str) {
        self.doc.set_value(self.field(name), value);
    }

    pub fn value(&self, name: &str) -> String {
        self.doc.field_value(&self.field(name))
    }

    pub fn border(&self, name: &str) -> String {
        self.doc.style(&self.field(name), "border-color")
    }
}
