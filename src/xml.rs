//! XML command construction
//!
//! Every GMP request is a single XML element. [`XmlCommand`] builds one
//! incrementally: attributes and children keep insertion order, and elements
//! with no content serialize self-closed, which is what the manager daemon
//! expects for commands like `<get_version/>`.

use std::fmt;

/// Escape text content: `&`, `<` and `>` become entities.
fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape an attribute value: text escaping plus `"`.
fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// An XML element under construction.
///
/// Setters chain, so a leaf with text reads as one statement:
///
/// ```
/// use gmp_client::xml::XmlCommand;
///
/// let mut cmd = XmlCommand::new("get_tasks");
/// cmd.set_attribute("task_id", "t1");
/// assert_eq!(cmd.to_string(), r#"<get_tasks task_id="t1"/>"#);
/// ```
#[derive(Debug, Clone)]
pub struct XmlCommand {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlCommand>,
    text: Option<String>,
}

impl XmlCommand {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Tag name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set an attribute, replacing any previous value for the same name.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        let value = value.into();
        if let Some(attr) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            attr.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }

    /// Set the text content of this element.
    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child element and return a mutable reference to it.
    pub fn add_element(&mut self, name: impl Into<String>) -> &mut XmlCommand {
        self.children.push(XmlCommand::new(name));
        self.children.last_mut().unwrap()
    }
}

impl fmt::Display for XmlCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.name)?;
        for (name, value) in &self.attributes {
            write!(f, " {}=\"{}\"", name, escape_attribute(value))?;
        }

        let text = self.text.as_deref().unwrap_or("");
        if self.children.is_empty() && text.is_empty() {
            return write!(f, "/>");
        }

        write!(f, ">{}", escape_text(text))?;
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.name)
    }
}
