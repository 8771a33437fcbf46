//! Optional pass-through attribute capability.
//!
//! Hosts that forward arbitrary attributes from the component configuration to the rendered
//! markup expose them through [`PassThroughAttributes`]. Hosts without that feature keep the
//! default methods, which report no attribute map at all.

use indexmap::IndexMap;

pub trait PassThroughAttributes {
    fn pass_through_attributes(&self) -> Option<&IndexMap<String, String>> {
        None
    }

    fn pass_through_attributes_mut(&mut self) -> Option<&mut IndexMap<String, String>> {
        None
    }
}

/// Removes every `type` pass-through attribute, in any letter case, so none can override the
/// input type chosen by the renderer.
///
/// Returns the first removed value, if any. A host without pass-through support is left
/// untouched.
pub fn remove_type_override<H: PassThroughAttributes + ?Sized>(host: &mut H) -> Option<String> {
    let attributes = host.pass_through_attributes_mut()?;
    let mut removed = None;
    attributes.retain(|name, value| {
        if !name.eq_ignore_ascii_case("type") {
            return true;
        }
        tracing::debug!(name = %name, value = %value, "dropped pass-through `type` attribute");
        if removed.is_none() {
            removed = Some(value.clone());
        }
        false
    });
    removed
}

/// Whether `name` can be written as an HTML attribute name without breaking the surrounding
/// tag: non-empty, no whitespace or control characters, none of `"'<>/=`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '<' | '>' | '/' | '=')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoPassThrough;

    impl PassThroughAttributes for NoPassThrough {}

    struct WithPassThrough(IndexMap<String, String>);

    impl PassThroughAttributes for WithPassThrough {
        fn pass_through_attributes(&self) -> Option<&IndexMap<String, String>> {
            Some(&self.0)
        }

        fn pass_through_attributes_mut(&mut self) -> Option<&mut IndexMap<String, String>> {
            Some(&mut self.0)
        }
    }

    #[test]
    fn host_without_capability_is_a_no_op() {
        let mut host = NoPassThrough;
        assert_eq!(remove_type_override(&mut host), None);
        assert!(host.pass_through_attributes().is_none());
    }

    #[test]
    fn type_is_removed_and_order_of_the_rest_is_kept() {
        let mut attrs = IndexMap::new();
        attrs.insert("data-a".to_string(), "1".to_string());
        attrs.insert("type".to_string(), "number".to_string());
        attrs.insert("data-b".to_string(), "2".to_string());
        let mut host = WithPassThrough(attrs);

        assert_eq!(remove_type_override(&mut host).as_deref(), Some("number"));
        assert_eq!(
            host.0.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["data-a", "data-b"]
        );
        assert_eq!(remove_type_override(&mut host), None);
    }

    #[test]
    fn type_removal_ignores_letter_case() {
        let mut attrs = IndexMap::new();
        attrs.insert("TYPE".to_string(), "number".to_string());
        attrs.insert("data-a".to_string(), "1".to_string());
        attrs.insert("Type".to_string(), "range".to_string());
        let mut host = WithPassThrough(attrs);

        assert_eq!(remove_type_override(&mut host).as_deref(), Some("number"));
        assert_eq!(host.0.keys().map(String::as_str).collect::<Vec<_>>(), vec!["data-a"]);
    }

    #[test]
    fn attribute_names_that_would_break_a_tag_are_invalid() {
        for name in ["data-unit", "aria-label", "x:lang", "data_1"] {
            assert!(is_valid_attribute_name(name), "{name}");
        }
        for name in ["", "data-x><b", "a b", "a\"b", "a'b", "a=b", "a/b", "a<b", "a\tb"] {
            assert!(!is_valid_attribute_name(name), "{name:?}");
        }
    }
}
