//! Decoding of the HTML entities the markdown renderer leaves in heading titles.

/// Entities decoded in heading titles, in the order they are applied.
pub const DECODED_ENTITIES: [(&str, &str); 3] =
    [("&#39;", "'"), ("&amp;", "&"), ("&quot;", "\"")];

/// Decodes `&#39;`, `&amp;` and `&quot;` in `input`.
///
/// The replacements run one after another on the progressively modified
/// string and each one rewrites only the first occurrence of its entity.
/// Later occurrences stay encoded, as do all other entities.
///
/// # Example
///
/// ```
/// use page_headers::decode_entities;
///
/// assert_eq!(decode_entities("Tom &amp; Jerry"), "Tom & Jerry");
/// assert_eq!(decode_entities("&#39;&#39;"), "'&#39;");
/// ```
pub fn decode_entities(input: &str) -> String {
    DECODED_ENTITIES
        .iter()
        .fold(input.to_owned(), |text, (entity, decoded)| {
            text.replacen(entity, decoded, 1)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entities() {
        assert_eq!(decode_entities("&#39;"), "'");
        assert_eq!(decode_entities("&amp;"), "&");
        assert_eq!(decode_entities("&quot;"), "\"");
    }

    #[test]
    fn test_plain_text_is_unchanged() {
        for text in ["", "Getting Started", "a & b", "it's \"quoted\"", "&lt;tag&gt;", "&#38;"] {
            assert_eq!(decode_entities(text), text);
        }
    }

    #[test]
    fn test_only_first_occurrence_is_decoded() {
        assert_eq!(decode_entities("&#39;&#39;"), "'&#39;");
        assert_eq!(decode_entities("&amp;&amp;&amp;"), "&&amp;&amp;");
        assert_eq!(
            decode_entities("Tom &amp; Jerry&#39;s &quot;Show&quot;"),
            "Tom & Jerry's \"Show&quot;"
        );
    }

    #[test]
    fn test_replacements_apply_in_sequence() {
        // `&amp;` is decoded before `&quot;` is searched for.
        assert_eq!(decode_entities("&amp;quot;"), "\"");
        // `&#39;` runs first, so the `&amp;` it would need is still intact.
        assert_eq!(decode_entities("&amp;#39;"), "&#39;");
    }
}
