use log::{error, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::notice::TransientNotice;
use crate::dom;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9-]+$").expect("valid phone pattern"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("올바른 이메일 주소를 입력해주세요.")]
    InvalidEmailFormat,
    #[error("올바른 전화번호를 입력해주세요.")]
    InvalidPhoneFormat,
}

/// Snapshot of the inquiry form at submit time.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Inquiry {
    pub business_name: String,
    pub manager_name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub message: String,
}

impl Inquiry {
    pub fn validate(&self) -> Result<(), InquiryError> {
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(InquiryError::InvalidEmailFormat);
        }
        if !PHONE_PATTERN.is_match(&self.phone) {
            return Err(InquiryError::InvalidPhoneFormat);
        }
        Ok(())
    }

    fn from_form(form: &HtmlFormElement) -> Self {
        Inquiry {
            business_name: field_value(form, "business_name"),
            manager_name: field_value(form, "manager_name"),
            phone: field_value(form, "phone"),
            email: field_value(form, "email"),
            location: field_value(form, "location"),
            message: field_value(form, "message"),
        }
    }
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(field) = form.get_with_name(name) else {
        return String::new();
    };
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

fn log_inquiry(inquiry: &Inquiry) {
    match serde_wasm_bindgen::to_value(inquiry) {
        Ok(record) => gloo_console::log!("문의 내용:", record),
        Err(e) => warn!("could not convert inquiry for console: {}", e),
    }
    info!("Inquiry accepted from {}", inquiry.business_name);
}

fn submit(form: &HtmlFormElement, document: &Document, notice: &TransientNotice) -> Result<(), JsValue> {
    let inquiry = Inquiry::from_form(form);
    if let Err(e) = inquiry.validate() {
        info!("Inquiry rejected: {:?}", e);
        dom::window()?.alert_with_message(&e.to_string())?;
        return Ok(());
    }

    // No transport: the record only goes to the console.
    log_inquiry(&inquiry);
    notice.show(document)?;
    form.reset();
    Ok(())
}

pub fn init(document: &Document) -> Result<(), JsValue> {
    let Some(form) = document
        .get_element_by_id("inquiryForm")
        .and_then(|e| e.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };

    let notice = TransientNotice::default();
    let form_el = form.clone();
    let document = document.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        if let Err(e) = submit(&form_el, &document, &notice) {
            error!("inquiry submission failed: {:?}", e);
        }
    })?;

    info!("Contact form attached");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry(email: &str, phone: &str) -> Inquiry {
        Inquiry {
            business_name: "모이소 카페".into(),
            manager_name: "김담당".into(),
            phone: phone.into(),
            email: email.into(),
            location: "서울".into(),
            message: "납품 문의드립니다".into(),
        }
    }

    #[test]
    fn accepts_well_formed_contact_details() {
        assert_eq!(inquiry("a@b.co", "010-1234-5678").validate(), Ok(()));
        assert_eq!(inquiry("sales@shop.example.kr", "0212345678").validate(), Ok(()));
    }

    #[test]
    fn rejects_emails_without_at_or_domain_dot() {
        for email in ["", "ab.co", "a@bco", "a@.co@", "a b@c.de", "@b.co", "a@b."] {
            assert_eq!(
                inquiry(email, "010-1234-5678").validate(),
                Err(InquiryError::InvalidEmailFormat),
                "{email:?}"
            );
        }
    }

    #[test]
    fn rejects_phones_outside_digits_and_hyphens() {
        for phone in ["", "010 1234 5678", "+82-10-1234", "010.1234", "call me"] {
            assert_eq!(
                inquiry("a@b.co", phone).validate(),
                Err(InquiryError::InvalidPhoneFormat),
                "{phone:?}"
            );
        }
    }

    #[test]
    fn email_is_checked_before_phone() {
        assert_eq!(inquiry("bad", "bad").validate(), Err(InquiryError::InvalidEmailFormat));
    }

    #[test]
    fn errors_carry_the_alert_text() {
        assert_eq!(InquiryError::InvalidEmailFormat.to_string(), "올바른 이메일 주소를 입력해주세요.");
        assert_eq!(InquiryError::InvalidPhoneFormat.to_string(), "올바른 전화번호를 입력해주세요.");
    }

    #[test]
    fn record_serializes_with_form_field_names() {
        let value = serde_json::to_value(inquiry("a@b.co", "010-1234-5678")).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        for field in ["business_name", "manager_name", "phone", "email", "location", "message"] {
            assert!(keys.contains(&field), "missing {field}");
        }
        assert_eq!(value["email"], "a@b.co");
    }
}
