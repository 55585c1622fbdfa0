//! MapQuest key notation.

/// Turn an underscore-separated name into MapQuest's `lowerCamelCase`.
///
/// The first segment is kept as written; every following segment gets its
/// first character uppercased and the rest lowercased. Doubled or trailing
/// underscores produce empty segments, which disappear.
///
/// ```
/// use mapquest_core::camelize;
///
/// assert_eq!(camelize("max_results"), "maxResults");
/// assert_eq!(camelize("a_long_string"), "aLongString");
/// assert_eq!(camelize("maxResults"), "maxResults");
/// ```
///
/// An empty name stays empty. That falls out of splitting `""` into a
/// single empty segment rather than being special-cased.
pub fn camelize(name: &str) -> String {
    let mut segments = name.split('_');
    let mut out = String::with_capacity(name.len());

    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize_basic() {
        assert_eq!(camelize("a_b"), "aB");
        assert_eq!(camelize("a_key"), "aKey");
        assert_eq!(camelize("another_key"), "anotherKey");
        assert_eq!(camelize("geocode_quality_code"), "geocodeQualityCode");
    }

    #[test]
    fn test_camelize_single_segment_unchanged() {
        assert_eq!(camelize("a"), "a");
        assert_eq!(camelize("street"), "street");
        assert_eq!(camelize("maxResults"), "maxResults");
        assert_eq!(camelize(&camelize("maxResults")), "maxResults");
    }

    #[test]
    fn test_camelize_empty() {
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn test_camelize_lowercases_segment_tail() {
        assert_eq!(camelize("side_OF_street"), "sideOfStreet");
        assert_eq!(camelize("Thumb_maps"), "ThumbMaps");
    }

    #[test]
    fn test_camelize_stray_underscores() {
        assert_eq!(camelize("max__results"), "maxResults");
        assert_eq!(camelize("max_results_"), "maxResults");
        assert_eq!(camelize("_private"), "Private");
        assert_eq!(camelize("_"), "");
    }

    #[test]
    fn test_camelize_admin_area() {
        assert_eq!(camelize("admin_area5_type"), "adminArea5Type");
        assert_eq!(camelize("lat_lng"), "latLng");
    }
}
