//! Admin-panel alert banners: Django `messagelist` markup with the
//! message severity rendered as the list item's CSS class.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Debug,
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }

    pub fn parse(s: &str) -> Option<Severity> {
        match s {
            "debug" => Some(Severity::Debug),
            "info" => Some(Severity::Info),
            "success" => Some(Severity::Success),
            "warning" => Some(Severity::Warning),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Severity::Info
    }
}

/// Element id used when the caller does not supply one.
pub const DEFAULT_ID: &str = "message";

pub struct AlertMessage {
    pub id: String,
    pub severity: Severity,
    pub message: String,
}

impl AlertMessage {
    pub fn new(message: &str, severity: Severity, id: &str) -> AlertMessage {
        AlertMessage {
            id: id.to_string(),
            severity,
            message: message.to_string(),
        }
    }

    pub fn info(message: &str) -> AlertMessage {
        AlertMessage::new(message, Severity::default(), DEFAULT_ID)
    }

    /// Serialized banner; message and id are escaped, the severity class
    /// comes from the closed `Severity` set and needs no escaping.
    pub fn markup(&self) -> String {
        format!(
            r#"<ul id="{}" class="messagelist"><li class="{}">{}</li></ul>"#,
            escape(&self.id),
            self.severity.as_str(),
            escape(&self.message)
        )
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_classes() {
        assert_eq!(Severity::Warning.as_str(), "warning");
        assert_eq!(Severity::parse("success"), Some(Severity::Success));
        assert_eq!(Severity::parse("fatal"), None);
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn markup_shape_and_defaults() {
        let m = AlertMessage::info("3 users created");
        assert_eq!(
            m.markup(),
            r#"<ul id="message" class="messagelist"><li class="info">3 users created</li></ul>"#
        );
    }

    #[test]
    fn markup_escapes_payload() {
        let m = AlertMessage::new("<script>alert(1)</script>", Severity::Error, "m&m");
        let html = m.markup();
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains(r#"id="m&amp;m""#));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"class="error""#));
    }
}
