//! Minimal TwiML messaging response.
//!
//! The provider expects `application/xml` with a single `<Message>`.

/// Content type for every webhook reply.
pub const TWIML_CONTENT_TYPE: &str = "application/xml";

/// A `<Response>` carrying one outbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagingResponse {
    body: String,
}

impl MessagingResponse {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    /// Render the XML document.
    pub fn to_xml(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
             <Response><Message><Body>{}</Body></Message></Response>",
            escape_xml(&self.body)
        )
    }
}

/// Escape the five XML special characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}
