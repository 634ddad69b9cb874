use log::{info, warn};
use stylist::GlobalStyle;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Keyframes and rules for the submission notice.
pub const NOTICE_CSS: &str = r#"
    @keyframes slideIn {
        from {
            opacity: 0;
            transform: translate(-50%, -60%);
        }
        to {
            opacity: 1;
            transform: translate(-50%, -50%);
        }
    }

    @keyframes slideOut {
        from {
            opacity: 1;
            transform: translate(-50%, -50%);
        }
        to {
            opacity: 0;
            transform: translate(-50%, -40%);
        }
    }

    .success-content {
        color: #333;
    }

    .success-icon {
        display: inline-block;
        width: 60px;
        height: 60px;
        background-color: #FF9F45;
        color: white;
        border-radius: 50%;
        font-size: 36px;
        line-height: 60px;
        margin-bottom: 20px;
    }

    .success-content p {
        font-size: 18px;
        font-weight: 600;
        margin: 10px 0;
    }

    .success-sub {
        font-size: 14px !important;
        font-weight: 400 !important;
        color: #999;
    }

    .success-overlay {
        transition: opacity 0.3s ease;
    }
"#;

fn append_style_element(document: &Document) -> Result<(), JsValue> {
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no head"))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(NOTICE_CSS));
    head.append_child(&style)?;
    Ok(())
}

/// Registers the notice stylesheet. Stylist keeps it mounted for the page's
/// lifetime; a raw `<style>` tag is the fallback if its parser refuses it.
pub fn install(document: &Document) -> Result<(), JsValue> {
    match GlobalStyle::new(NOTICE_CSS) {
        Ok(_) => {
            info!("Notice styles registered");
            Ok(())
        }
        Err(e) => {
            warn!("stylist rejected notice styles ({}), appending raw stylesheet", e);
            append_style_element(document)
        }
    }
}
