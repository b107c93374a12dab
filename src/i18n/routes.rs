//! Route translation table: per-locale URI templates keyed by route name.
//!
//! Templates are `/`-separated segments. A segment is a literal (`about`), a
//! placeholder (`{id}`), an optional placeholder (`{project_id?}`) or a mix of
//! both (`item-{id}`). Optional placeholders may only be omitted from the
//! tail of a path.
//!
//! # Example
//!
//! ```rust
//! use url_localization::i18n::{RouteKey, RouteTranslations};
//!
//! let mut routes = RouteTranslations::new();
//! routes.add_translation("routes.view", "en", "view/{id}").unwrap();
//! routes.add_translation("routes.view", "es", "ver/{id}").unwrap();
//!
//! let template = routes.resolve(&RouteKey::from("routes.view"), "es").unwrap();
//! assert_eq!(template.substitute(&[("id", "1")]).unwrap(), "ver/1");
//! ```

use crate::error::{LocalizationError, Result};
use indexmap::IndexMap;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Everything except RFC 3986 unreserved characters is escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encode a single path segment.
pub(crate) fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Decode a raw path segment. Invalid UTF-8 is replaced, not rejected.
pub(crate) fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Logical route name (e.g., "routes.about").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteKey(String);

impl RouteKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RouteKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for RouteKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl Borrow<str> for RouteKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
enum Part {
    Literal(String),
    Param { name: String, optional: bool },
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Param { name: String, optional: bool },
    /// Literals and placeholders sharing one segment, matched with a regex
    /// that has one capture group per placeholder.
    Mixed { parts: Vec<Part>, pattern: Regex },
}

impl Segment {
    fn is_optional(&self) -> bool {
        matches!(self, Segment::Param { optional: true, .. })
    }
}

/// A parsed URI template.
#[derive(Debug, Clone)]
pub struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Parse a template string.
    ///
    /// # Errors
    /// `InvalidTemplate` for unbalanced braces or empty placeholder names.
    pub fn parse(template: &str) -> Result<Self> {
        let segments = template
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| parse_segment(template, segment))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            raw: template.to_string(),
            segments,
        })
    }

    /// The template as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholder names in template order.
    pub fn parameter_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(_) => {}
                Segment::Param { name, .. } => names.push(name.as_str()),
                Segment::Mixed { parts, .. } => {
                    for part in parts {
                        if let Part::Param { name, .. } = part {
                            names.push(name.as_str());
                        }
                    }
                }
            }
        }
        names
    }

    /// Render the template into a path (no leading slash).
    ///
    /// Placeholders are matched to `parameters` by name, so supply order does
    /// not matter. Values are percent-encoded. Unused values are ignored.
    /// Omitted optional placeholders drop their segment.
    ///
    /// # Errors
    /// `MissingParameter` if a required placeholder has no value or an empty
    /// one, `InvalidParameter` if a value would render as `.` or `..`.
    pub fn substitute<K, V>(&self, parameters: &[(K, V)]) -> Result<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let value_of = |name: &str| {
            parameters
                .iter()
                .find(|(key, _)| key.as_ref() == name)
                .map(|(_, value)| value.as_ref())
        };
        let missing = |name: &str| LocalizationError::MissingParameter {
            name: name.to_string(),
            template: self.raw.clone(),
        };

        // Empty, "." and ".." segments would be dropped or collapsed by URL
        // path normalization, leaving a different route.
        let check = |name: &str, segment: String| match segment.as_str() {
            "" => Err(missing(name)),
            "." | ".." => Err(LocalizationError::InvalidParameter {
                name: name.to_string(),
                value: segment,
                template: self.raw.clone(),
            }),
            _ => Ok(segment),
        };

        let mut rendered = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push(encode_segment(text)),
                Segment::Param { name, optional } => match value_of(name) {
                    Some("") if *optional => {}
                    Some(value) => rendered.push(check(name, encode_segment(value))?),
                    None if *optional => {}
                    None => return Err(missing(name)),
                },
                Segment::Mixed { parts, .. } => {
                    let mut out = String::new();
                    let mut last = None;
                    for part in parts {
                        match part {
                            Part::Literal(text) => out.push_str(&encode_segment(text)),
                            Part::Param { name, optional } => match value_of(name) {
                                Some(value) => {
                                    out.push_str(&encode_segment(value));
                                    last = Some(name.as_str());
                                }
                                None if *optional => {}
                                None => return Err(missing(name)),
                            },
                        }
                    }
                    match last {
                        Some(name) => rendered.push(check(name, out)?),
                        None if out.is_empty() => {}
                        None => rendered.push(out),
                    }
                }
            }
        }

        Ok(rendered.join("/"))
    }

    /// Match decoded path segments positionally against this template.
    ///
    /// Literal segments must match exactly; placeholders bind the segment
    /// value. Trailing optional placeholders may be absent.
    ///
    /// # Returns
    /// The bound `(name, value)` pairs in template order, or `None`.
    pub fn match_segments<S: AsRef<str>>(&self, segments: &[S]) -> Option<Vec<(String, String)>> {
        if segments.len() > self.segments.len() {
            return None;
        }
        if !self.segments[segments.len()..]
            .iter()
            .all(Segment::is_optional)
        {
            return None;
        }

        let mut bindings = Vec::new();
        for (segment, value) in self.segments.iter().zip(segments) {
            let value = value.as_ref();
            match segment {
                Segment::Literal(text) => {
                    if text != value {
                        return None;
                    }
                }
                Segment::Param { name, .. } => bindings.push((name.clone(), value.to_string())),
                Segment::Mixed { parts, pattern } => {
                    let captures = pattern.captures(value)?;
                    let names = parts.iter().filter_map(|part| match part {
                        Part::Param { name, .. } => Some(name),
                        Part::Literal(_) => None,
                    });
                    for (group, name) in names.enumerate() {
                        let captured = captures.get(group + 1).map_or("", |m| m.as_str());
                        if !captured.is_empty() {
                            bindings.push((name.clone(), captured.to_string()));
                        }
                    }
                }
            }
        }

        Some(bindings)
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn parse_segment(template: &str, segment: &str) -> Result<Segment> {
    let invalid = |reason: &str| LocalizationError::InvalidTemplate {
        template: template.to_string(),
        reason: reason.to_string(),
    };

    let mut parts = Vec::new();
    let mut rest = segment;
    while !rest.is_empty() {
        match rest.find(['{', '}']) {
            Some(pos) if rest[pos..].starts_with('}') => {
                return Err(invalid("unexpected '}'"));
            }
            Some(pos) => {
                if pos > 0 {
                    parts.push(Part::Literal(rest[..pos].to_string()));
                }
                let after = &rest[pos + 1..];
                let close = after.find('}').ok_or_else(|| invalid("unclosed '{'"))?;
                let inner = &after[..close];
                if inner.contains('{') {
                    return Err(invalid("nested '{'"));
                }
                let (name, optional) = match inner.strip_suffix('?') {
                    Some(name) => (name.trim(), true),
                    None => (inner.trim(), false),
                };
                if name.is_empty() {
                    return Err(invalid("empty placeholder name"));
                }
                parts.push(Part::Param {
                    name: name.to_string(),
                    optional,
                });
                rest = &after[close + 1..];
            }
            None => {
                parts.push(Part::Literal(rest.to_string()));
                rest = "";
            }
        }
    }

    if parts.len() == 1 {
        if let Some(part) = parts.pop() {
            return Ok(match part {
                Part::Literal(text) => Segment::Literal(text),
                Part::Param { name, optional } => Segment::Param { name, optional },
            });
        }
    }

    let mut expression = String::from("^");
    for part in &parts {
        match part {
            Part::Literal(text) => expression.push_str(&regex::escape(text)),
            Part::Param { optional: true, .. } => expression.push_str("(.*?)"),
            Part::Param { optional: false, .. } => expression.push_str("(.+?)"),
        }
    }
    expression.push('$');
    let pattern = Regex::new(&expression).map_err(|e| invalid(&e.to_string()))?;

    Ok(Segment::Mixed { parts, pattern })
}

/// Parse and render a template in one step.
///
/// # Errors
/// `InvalidTemplate` or `MissingParameter`.
pub fn substitute<K, V>(template: &str, parameters: &[(K, V)]) -> Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    RouteTemplate::parse(template)?.substitute(parameters)
}

/// A route recovered from a path by template matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteKey,
    pub parameters: Vec<(String, String)>,
}

/// Route key -> locale -> template, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RouteTranslations {
    routes: IndexMap<RouteKey, HashMap<String, RouteTemplate>>,
}

impl RouteTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template for a route in a locale. Last write wins.
    ///
    /// # Errors
    /// `InvalidTemplate` if the template cannot be parsed.
    pub fn add_translation(
        &mut self,
        route: impl Into<RouteKey>,
        locale: &str,
        template: &str,
    ) -> Result<()> {
        let parsed = RouteTemplate::parse(template)?;
        self.routes
            .entry(route.into())
            .or_default()
            .insert(locale.to_string(), parsed);
        Ok(())
    }

    /// Get the template for an exact `(route, locale)` pair.
    pub fn lookup(&self, route: &str, locale: &str) -> Option<&RouteTemplate> {
        self.routes.get(route)?.get(locale)
    }

    /// Get the template for an exact `(route, locale)` pair.
    ///
    /// # Errors
    /// `UnknownRoute` when there is no entry. Callers usually fall back to the
    /// literal route key.
    pub fn resolve(&self, route: &RouteKey, locale: &str) -> Result<&RouteTemplate> {
        self.lookup(route.as_str(), locale)
            .ok_or_else(|| LocalizationError::UnknownRoute {
                route: route.to_string(),
                locale: locale.to_string(),
            })
    }

    /// The raw template for a route, or the route key itself when untranslated.
    pub fn trans_route<'a>(&'a self, route: &'a RouteKey, locale: &str) -> &'a str {
        self.lookup(route.as_str(), locale)
            .map_or(route.as_str(), RouteTemplate::as_str)
    }

    /// Find the first route (insertion order) whose template for `locale`
    /// matches the decoded path segments.
    pub fn match_path<S: AsRef<str>>(&self, locale: &str, segments: &[S]) -> Option<RouteMatch<'_>> {
        self.routes.iter().find_map(|(route, templates)| {
            let parameters = templates.get(locale)?.match_segments(segments)?;
            Some(RouteMatch { route, parameters })
        })
    }

    /// Route keys in insertion order.
    pub fn route_keys(&self) -> impl Iterator<Item = &RouteKey> {
        self.routes.keys()
    }

    /// Every locale key that has at least one template, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self
            .routes
            .values()
            .flat_map(|templates| templates.keys().map(String::as_str))
            .collect();
        locales.sort_unstable();
        locales.dedup();
        locales
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Load from a JSON document shaped `{ "<locale>": { "<route>": "<template>" } }`.
    ///
    /// # Errors
    /// `RouteFile` for malformed JSON, `InvalidTemplate` for bad templates.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: IndexMap<String, IndexMap<String, String>> =
            serde_json::from_str(json).map_err(|e| LocalizationError::RouteFile(e.to_string()))?;

        let mut table = Self::new();
        for (locale, routes) in &document {
            for (route, template) in routes {
                table.add_translation(route.as_str(), locale, template)?;
            }
        }
        Ok(table)
    }

    /// Load from a JSON file. See [`RouteTranslations::from_json_str`].
    ///
    /// # Errors
    /// `RouteFile` if the file cannot be read or parsed.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| LocalizationError::RouteFile(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTranslations {
        let mut routes = RouteTranslations::new();
        routes.add_translation("routes.about", "en", "about").unwrap();
        routes.add_translation("routes.about", "es", "acerca").unwrap();
        routes.add_translation("routes.view", "en", "view/{id}").unwrap();
        routes.add_translation("routes.view", "es", "ver/{id}").unwrap();
        routes
            .add_translation("routes.view_project", "en", "view/{id}/project/{project_id?}")
            .unwrap();
        routes
            .add_translation("routes.view_project", "es", "ver/{id}/proyecto/{project_id?}")
            .unwrap();
        routes
    }

    // ==================== Parse Tests ====================

    #[test]
    fn test_parse_parameter_names_in_order() {
        let template = RouteTemplate::parse("/view/{id}/project/{project_id?}/").unwrap();
        assert_eq!(template.parameter_names(), vec!["id", "project_id"]);
        assert_eq!(template.as_str(), "/view/{id}/project/{project_id?}/");
    }

    #[test]
    fn test_parse_rejects_unclosed_brace() {
        let err = RouteTemplate::parse("view/{id").unwrap_err();
        assert!(matches!(err, LocalizationError::InvalidTemplate { .. }));
    }

    #[test]
    fn test_parse_rejects_stray_closing_brace() {
        assert!(RouteTemplate::parse("view/id}").is_err());
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert!(RouteTemplate::parse("view/{}").is_err());
        assert!(RouteTemplate::parse("view/{?}").is_err());
    }

    #[test]
    fn test_parse_rejects_nested_brace() {
        assert!(RouteTemplate::parse("view/{a{b}}").is_err());
    }

    // ==================== Substitute Tests ====================

    #[test]
    fn test_substitute_matches_by_name_not_position() {
        let rendered = substitute("a/{first}/b/{second}", &[("second", "2"), ("first", "1")]).unwrap();
        assert_eq!(rendered, "a/1/b/2");
    }

    #[test]
    fn test_substitute_ignores_extra_values() {
        let rendered = substitute("view/{id}", &[("id", "7"), ("unused", "x")]).unwrap();
        assert_eq!(rendered, "view/7");
    }

    #[test]
    fn test_substitute_missing_required_parameter() {
        let err = substitute("view/{id}", &[("other", "1")]).unwrap_err();
        assert_eq!(
            err,
            LocalizationError::MissingParameter {
                name: "id".to_string(),
                template: "view/{id}".to_string(),
            }
        );
    }

    #[test]
    fn test_substitute_omits_missing_optional() {
        let params: [(&str, &str); 1] = [("id", "1")];
        assert_eq!(substitute("view/{id}/project/{project_id?}", &params).unwrap(), "view/1/project");
        let params = [("id", "1"), ("project_id", "9")];
        assert_eq!(substitute("view/{id}/project/{project_id?}", &params).unwrap(), "view/1/project/9");
    }

    #[test]
    fn test_substitute_rejects_dot_segments() {
        for value in [".", ".."] {
            let err = substitute("view/{id}", &[("id", value)]).unwrap_err();
            assert_eq!(
                err,
                LocalizationError::InvalidParameter {
                    name: "id".to_string(),
                    value: value.to_string(),
                    template: "view/{id}".to_string(),
                }
            );
        }
        assert_eq!(substitute("view/{id}", &[("id", "...")]).unwrap(), "view/...");
        assert_eq!(substitute("view/{id}", &[("id", "a.b")]).unwrap(), "view/a.b");
    }

    #[test]
    fn test_substitute_rejects_empty_required_value() {
        let err = substitute("view/{id}", &[("id", "")]).unwrap_err();
        assert!(matches!(err, LocalizationError::MissingParameter { ref name, .. } if name == "id"));
    }

    #[test]
    fn test_substitute_empty_optional_value_is_omitted() {
        let params = [("id", "1"), ("project_id", "")];
        assert_eq!(substitute("view/{id}/project/{project_id?}", &params).unwrap(), "view/1/project");
    }

    #[test]
    fn test_substitute_mixed_segment_rejects_dot_result() {
        let err = substitute("files/{name}{ext?}", &[("name", "."), ("ext", ".")]).unwrap_err();
        assert!(matches!(err, LocalizationError::InvalidParameter { ref value, .. } if value == ".."));
        assert_eq!(substitute("item-{id}.html", &[("id", ".")]).unwrap(), "item-..html");
    }

    #[test]
    fn test_substitute_percent_encodes_reserved_characters() {
        let rendered = substitute("search/{term}", &[("term", "a b/c?d#e&f")]).unwrap();
        assert_eq!(rendered, "search/a%20b%2Fc%3Fd%23e%26f");
    }

    #[test]
    fn test_substitute_keeps_unreserved_characters() {
        let rendered = substitute("file/{name}", &[("name", "report-2024_v1.0~draft")]).unwrap();
        assert_eq!(rendered, "file/report-2024_v1.0~draft");
    }

    #[test]
    fn test_substitute_mixed_segment() {
        let rendered = substitute("item-{id}.html", &[("id", "42")]).unwrap();
        assert_eq!(rendered, "item-42.html");
    }

    #[test]
    fn test_substitute_owned_parameters() {
        let params = vec![("id".to_string(), "3".to_string())];
        assert_eq!(substitute("ver/{id}", &params).unwrap(), "ver/3");
    }

    // ==================== Match Tests ====================

    #[test]
    fn test_match_literal_and_placeholder() {
        let template = RouteTemplate::parse("view/{id}").unwrap();
        assert_eq!(
            template.match_segments(&["view", "1"]),
            Some(vec![("id".to_string(), "1".to_string())])
        );
        assert_eq!(template.match_segments(&["ver", "1"]), None);
        assert_eq!(template.match_segments(&["view"]), None);
        assert_eq!(template.match_segments(&["view", "1", "extra"]), None);
    }

    #[test]
    fn test_match_trailing_optional() {
        let template = RouteTemplate::parse("view/{id}/project/{project_id?}").unwrap();
        assert_eq!(
            template.match_segments(&["view", "1", "project"]),
            Some(vec![("id".to_string(), "1".to_string())])
        );
        assert_eq!(
            template.match_segments(&["view", "1", "project", "2"]),
            Some(vec![
                ("id".to_string(), "1".to_string()),
                ("project_id".to_string(), "2".to_string()),
            ])
        );
    }

    #[test]
    fn test_match_mixed_segment() {
        let template = RouteTemplate::parse("shop/item-{id}.html").unwrap();
        assert_eq!(
            template.match_segments(&["shop", "item-42.html"]),
            Some(vec![("id".to_string(), "42".to_string())])
        );
        assert_eq!(template.match_segments(&["shop", "item-.html"]), None);
    }

    // ==================== Table Tests ====================

    #[test]
    fn test_resolve_and_lookup() {
        let routes = table();
        let key = RouteKey::from("routes.view");
        assert_eq!(routes.resolve(&key, "es").unwrap().as_str(), "ver/{id}");
        assert!(routes.lookup("routes.view", "fr").is_none());
        assert_eq!(
            routes.resolve(&key, "fr").unwrap_err(),
            LocalizationError::UnknownRoute {
                route: "routes.view".to_string(),
                locale: "fr".to_string(),
            }
        );
    }

    #[test]
    fn test_add_translation_last_write_wins() {
        let mut routes = table();
        routes.add_translation("routes.about", "es", "sobre").unwrap();
        assert_eq!(routes.lookup("routes.about", "es").unwrap().as_str(), "sobre");
        assert_eq!(routes.len(), 3);
    }

    #[test]
    fn test_trans_route_falls_back_to_key() {
        let routes = table();
        let about = RouteKey::from("routes.about");
        assert_eq!(routes.trans_route(&about, "es"), "acerca");
        assert_eq!(routes.trans_route(&about, "fr"), "routes.about");
    }

    #[test]
    fn test_match_path_first_route_wins() {
        let routes = table();
        let found = routes.match_path("es", &["ver", "1", "proyecto"]).unwrap();
        assert_eq!(found.route.as_str(), "routes.view_project");

        let found = routes.match_path("en", &["view", "5"]).unwrap();
        assert_eq!(found.route.as_str(), "routes.view");
        assert_eq!(found.parameters, vec![("id".to_string(), "5".to_string())]);

        assert!(routes.match_path("en", &["unknown"]).is_none());
        assert!(routes.match_path("fr", &["view", "5"]).is_none());
    }

    #[test]
    fn test_route_keys_keep_insertion_order() {
        let routes = table();
        let keys: Vec<_> = routes.route_keys().map(RouteKey::as_str).collect();
        assert_eq!(keys, vec!["routes.about", "routes.view", "routes.view_project"]);
        assert_eq!(routes.locales(), vec!["en", "es"]);
    }

    // ==================== Loader Tests ====================

    #[test]
    fn test_from_json_str() {
        let json = r#"{
            "en": { "routes.about": "about", "routes.view": "view/{id}" },
            "es": { "routes.about": "acerca", "routes.view": "ver/{id}" }
        }"#;
        let routes = RouteTranslations::from_json_str(json).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes.lookup("routes.view", "es").unwrap().as_str(), "ver/{id}");
    }

    #[test]
    fn test_from_json_str_malformed() {
        let err = RouteTranslations::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, LocalizationError::RouteFile(_)));
    }

    #[test]
    fn test_from_json_str_bad_template() {
        let err = RouteTranslations::from_json_str(r#"{ "en": { "r": "view/{id" } }"#).unwrap_err();
        assert!(matches!(err, LocalizationError::InvalidTemplate { .. }));
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = RouteTranslations::from_json_file("/nonexistent/routes.json").unwrap_err();
        assert!(matches!(err, LocalizationError::RouteFile(_)));
    }

    // ==================== Encoding Tests ====================

    #[test]
    fn test_decode_segment() {
        assert_eq!(decode_segment("a%20b"), "a b");
        assert_eq!(decode_segment("plain"), "plain");
        assert_eq!(encode_segment("über"), "%C3%BCber");
        assert_eq!(decode_segment(&encode_segment("über")), "über");
    }
}
