//! Window title parsing.

use crate::types::config::TitleConfig;

/// Record and record type taken from a window title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// Record name, e.g. "Jane Doe".
    pub record: String,

    /// Record type, e.g. "Contact".
    pub category: String,
}

/// Splits titles shaped like `"Jane Doe | Contact | Salesforce - Lightning"`.
///
/// The title is split on the delimiter into at most four pieces and accepted
/// only when there are exactly three and the last starts with the marker.
#[derive(Debug, Clone)]
pub struct TitleParser {
    delimiter: String,
    marker: String,
}

impl TitleParser {
    /// Creates a parser.
    pub fn new(delimiter: impl Into<String>, marker: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
            marker: marker.into(),
        }
    }

    /// Creates a parser from configuration.
    pub fn from_config(config: &TitleConfig) -> Self {
        Self::new(config.delimiter.clone(), config.marker.clone())
    }

    /// Parses `title`, returning `None` when it does not match.
    pub fn parse(&self, title: &str) -> Option<ParsedTitle> {
        if self.delimiter.is_empty() {
            return None;
        }

        let parts: Vec<&str> = title.splitn(4, self.delimiter.as_str()).collect();
        match parts.as_slice() {
            [record, category, app] if app.starts_with(&self.marker) => {
                if record.is_empty() || category.is_empty() {
                    return None;
                }
                Some(ParsedTitle {
                    record: record.to_string(),
                    category: category.to_string(),
                })
            }
            _ => None,
        }
    }
}

impl Default for TitleParser {
    fn default() -> Self {
        Self::from_config(&TitleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_salesforce_title() {
        let parser = TitleParser::default();
        let parsed = parser
            .parse("Jane Doe | Contact | Salesforce - Google Chrome")
            .unwrap();

        assert_eq!(parsed.record, "Jane Doe");
        assert_eq!(parsed.category, "Contact");
    }

    #[test]
    fn test_wrong_marker() {
        let parser = TitleParser::default();
        assert!(parser.parse("Inbox | Mail | Outlook").is_none());
    }

    #[test]
    fn test_wrong_arity() {
        let parser = TitleParser::default();

        assert!(parser.parse("Contacts | Salesforce").is_none());
        assert!(parser.parse("A | B | Salesforce | extra").is_none());
        assert!(parser.parse("plain title").is_none());
    }

    #[test]
    fn test_empty_segments_rejected() {
        let parser = TitleParser::default();
        assert!(parser.parse(" | Contact | Salesforce").is_none());
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = TitleParser::new(" - ", "CRM");
        let parsed = parser.parse("00042 - Case - CRM Web").unwrap();

        assert_eq!(parsed.record, "00042");
        assert_eq!(parsed.category, "Case");
    }
}
