//! Parsing of `gio info` output

/// Attribute line carrying the human-readable name
pub const DISPLAY_NAME_KEY: &str = "standard::display-name";

/// Extract the display name from raw `gio info` output.
///
/// Only the first `standard::display-name:` line counts. An empty value is
/// treated as no name at all.
pub fn display_name(output: &str) -> Option<String> {
    output.lines().find_map(|line| {
        let value = line
            .trim()
            .strip_prefix(DISPLAY_NAME_KEY)?
            .strip_prefix(':')?
            .trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Ordered key/value view of one entry's metadata
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    attributes: Vec<(String, String)>,
}

impl Metadata {
    /// Collect every `key: value` line, skipping section headers such as
    /// `attributes:`.
    pub fn parse(output: &str) -> Self {
        let attributes = output
            .lines()
            .filter_map(|line| {
                let (key, value) = line.trim().split_once(": ")?;
                Some((key.trim().to_string(), value.trim().to_string()))
            })
            .collect();
        Self { attributes }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "display name: Quarterly Report.pdf
edit name: Quarterly Report.pdf
name: 1aB2cD3eF4
type: regular
size:  48213
uri: google-drive://me@example.com/0AbCdEf/1aB2cD3eF4
attributes:
  standard::type: 1
  standard::display-name: Quarterly Report.pdf
  standard::content-type: application/pdf
  time::modified: 1700000000
";

    #[test]
    fn test_display_name_from_attribute_line() {
        assert_eq!(
            display_name(SAMPLE),
            Some("Quarterly Report.pdf".to_string())
        );
    }

    #[test]
    fn test_display_name_ignores_summary_header() {
        // "display name:" at the top is not the attribute line
        assert_eq!(display_name("display name: Wrong\n"), None);
    }

    #[test]
    fn test_display_name_missing_or_empty() {
        assert_eq!(display_name("name: x\ntype: regular\n"), None);
        assert_eq!(display_name("  standard::display-name:   \n"), None);
        assert_eq!(display_name(""), None);
    }

    #[test]
    fn test_display_name_keeps_inner_colons() {
        assert_eq!(
            display_name("  standard::display-name: Notes: draft 2\n"),
            Some("Notes: draft 2".to_string())
        );
    }

    #[test]
    fn test_metadata_parse_keeps_order() {
        let metadata = Metadata::parse(SAMPLE);
        let keys: Vec<&str> = metadata.iter().map(|(k, _)| k).collect();
        assert_eq!(keys[0], "display name");
        assert!(!keys.contains(&"attributes"));
        assert_eq!(metadata.get("size"), Some("48213"));
        assert_eq!(
            metadata.get("standard::content-type"),
            Some("application/pdf")
        );
        assert_eq!(metadata.len(), 10);
    }
}
