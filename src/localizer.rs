//! URL localization engine.
//!
//! Every operation decomposes a URL, strips a leading locale segment when
//! one is present, optionally re-renders the path through the route table,
//! and reassembles the URL with the locale prefix the display policy asks
//! for. The engine is shared read-only between requests; per-request state
//! lives in a [`RequestContext`].
//!
//! The locale segment is always the first path segment after the host. A
//! path on the base URL is not preserved.

use crate::error::Result;
use crate::i18n::{self, decode_segment, Locale, LocaleRegistry, LocaleState, RouteKey, RouteTranslations};
use std::sync::Arc;
use tracing::debug;
use url::{ParseError, Url};

/// URL display policy and link base.
#[derive(Debug, Clone, Default)]
pub struct LocalizerOptions {
    /// Omit the prefix for the default locale
    pub hide_default_locale_in_url: bool,

    /// Scheme/host/port used when no request URL is available
    pub base_url: Option<Url>,
}

/// Per-request locale state and inbound URL.
#[derive(Debug, Clone)]
pub struct RequestContext {
    state: LocaleState,
    url: Option<Url>,
}

impl RequestContext {
    pub fn new(state: LocaleState, url: Option<Url>) -> Self {
        Self { state, url }
    }

    pub fn state(&self) -> &LocaleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut LocaleState {
        &mut self.state
    }

    /// The inbound request URL, if there is an active request.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }
}

/// Split the leading locale segment off a path.
///
/// Only the first segment is inspected, and only an exact key match counts.
pub fn extract_locale<'r, 's, S: AsRef<str>>(
    segments: &'s [S],
    registry: &'r LocaleRegistry,
) -> (Option<&'r Locale>, &'s [S]) {
    match segments.split_first() {
        Some((first, rest)) => match registry.find(first.as_ref()) {
            Some(locale) => (Some(locale), rest),
            None => (None, segments),
        },
        None => (None, segments),
    }
}

/// Non-empty, still percent-encoded path segments.
fn path_segments(url: &Url) -> Vec<String> {
    url.path_segments()
        .map(|segments| {
            segments
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace the path, keeping scheme, host, port, query and fragment.
fn assemble<S: AsRef<str>>(mut url: Url, prefix: Option<&str>, segments: &[S]) -> String {
    let parts: Vec<&str> = prefix
        .into_iter()
        .chain(segments.iter().map(|segment| segment.as_ref()))
        .collect();
    url.set_path(&format!("/{}", parts.join("/")));
    url.into()
}

/// The localization engine.
#[derive(Debug, Clone)]
pub struct Localizer {
    registry: Arc<LocaleRegistry>,
    routes: Arc<RouteTranslations>,
    options: LocalizerOptions,
    initial_state: LocaleState,
}

impl Localizer {
    /// Create the engine, validating the default locale against the registry.
    ///
    /// # Errors
    /// `UnsupportedLocale` if `default_locale` is not supported.
    pub fn new(
        registry: Arc<LocaleRegistry>,
        routes: Arc<RouteTranslations>,
        default_locale: &str,
        options: LocalizerOptions,
    ) -> Result<Self> {
        let initial_state = LocaleState::initialize(Arc::clone(&registry), default_locale)?;
        Ok(Self {
            registry,
            routes,
            options,
            initial_state,
        })
    }

    /// Change the default-locale display policy.
    pub fn with_hide_default_locale(mut self, hide: bool) -> Self {
        self.options.hide_default_locale_in_url = hide;
        self
    }

    /// Change the base URL used outside a request.
    pub fn with_base_url(mut self, base_url: Option<Url>) -> Self {
        self.options.base_url = base_url;
        self
    }

    /// A fresh context with no inbound request (console, tests, jobs).
    pub fn context(&self) -> RequestContext {
        RequestContext::new(self.initial_state.clone(), None)
    }

    /// A fresh context for an inbound request URL.
    ///
    /// Relative URLs are resolved against the base URL. An unparsable URL
    /// yields a context without a request URL.
    pub fn context_for(&self, request_url: &str) -> RequestContext {
        let url = self.resolve_url(None, request_url);
        if url.is_none() {
            debug!("Request URL '{}' could not be resolved", request_url);
        }
        RequestContext::new(self.initial_state.clone(), url)
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    pub fn routes(&self) -> &RouteTranslations {
        &self.routes
    }

    pub fn supported_locale_keys(&self) -> Vec<&str> {
        self.registry.keys()
    }

    pub fn hides_default_locale(&self) -> bool {
        self.options.hide_default_locale_in_url
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.options.base_url.as_ref()
    }

    // ==================== Operations ====================

    /// Rewrite a URL so its locale prefix matches `locale`.
    ///
    /// Defaults: the request URL (or base URL) and the current locale.
    ///
    /// # Returns
    /// `None` when the target locale is unsupported or no host can be
    /// determined.
    pub fn localize_url(
        &self,
        ctx: &RequestContext,
        locale: Option<&str>,
        url: Option<&str>,
    ) -> Option<String> {
        let target = self.target_locale(ctx, locale)?;
        let url = self.input_url(ctx, url)?;
        let segments = path_segments(&url);
        let (_, rest) = extract_locale(&segments, &self.registry);
        Some(self.render(ctx, url, target, rest))
    }

    /// Like [`Localizer::localize_url`], but translates a recognized route
    /// path into the target locale's template with the same parameters.
    ///
    /// The path is matched against the stripped locale's templates (or the
    /// current locale's), then every other supported locale in order. When
    /// nothing matches the path is kept literally.
    pub fn get_localized_url(
        &self,
        ctx: &RequestContext,
        locale: Option<&str>,
        url: Option<&str>,
    ) -> Option<String> {
        let target = self.target_locale(ctx, locale)?;
        let url = self.input_url(ctx, url)?;
        let segments = path_segments(&url);
        let (source, rest) = extract_locale(&segments, &self.registry);
        let source = source.unwrap_or_else(|| ctx.state.current());

        match self.translate_path(source, target, rest) {
            Some(translated) => Some(self.render(ctx, url, target, &translated)),
            None => Some(self.render(ctx, url, target, rest)),
        }
    }

    /// Build a URL from a route key and parameters in `locale`.
    ///
    /// An untranslated route renders its key literally.
    ///
    /// # Returns
    /// `Ok(None)` when the locale is unsupported or there is no base URL.
    ///
    /// # Errors
    /// `MissingParameter` if the template needs a value that was not supplied
    /// or was empty, `InvalidParameter` for a `.` or `..` value.
    pub fn url_from_route_name<K, V>(
        &self,
        ctx: &RequestContext,
        locale: &str,
        route: &RouteKey,
        parameters: &[(K, V)],
    ) -> Result<Option<String>>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let Some(target) = self.registry.find(locale) else {
            debug!("Cannot build route '{}' for unsupported locale '{}'", route, locale);
            return Ok(None);
        };

        let path = match self.routes.resolve(route, target.key()) {
            Ok(template) => template.substitute(parameters)?,
            Err(e) => {
                debug!("{}; rendering the route key literally", e);
                route.as_str().to_string()
            }
        };

        let Some(base) = self.base(ctx) else {
            debug!("No base URL available for route '{}'", route);
            return Ok(None);
        };

        Ok(Some(self.render(ctx, base, target, &split_path(&path))))
    }

    /// Remove any locale prefix, regardless of the display policy.
    pub fn non_localized_url(&self, ctx: &RequestContext, url: Option<&str>) -> Option<String> {
        let url = self.input_url(ctx, url)?;
        let segments = path_segments(&url);
        let (_, rest) = extract_locale(&segments, &self.registry);
        Some(assemble(url, None, rest))
    }

    /// Prefix a bare URI with the base URL and the current locale.
    ///
    /// No route translation is attempted.
    pub fn create_url_from_uri(&self, ctx: &RequestContext, uri: &str) -> Option<String> {
        let base = self.base(ctx)?;
        let url = base.join(uri.trim_start_matches('/')).ok()?;
        let segments = path_segments(&url);
        let (_, rest) = extract_locale(&segments, &self.registry);
        Some(self.render(ctx, url, ctx.state.current(), rest))
    }

    // ==================== Helpers for callers ====================

    /// The current locale's template for a route, or the key itself.
    pub fn trans_route<'a>(&'a self, ctx: &RequestContext, route: &'a RouteKey) -> &'a str {
        self.routes.trans_route(route, ctx.state.current().key())
    }

    /// Recover the route key a path belongs to.
    ///
    /// Templates of `locale` are used; without it, the path's own locale
    /// prefix, else the current locale.
    pub fn route_key_from_path(
        &self,
        ctx: &RequestContext,
        path: &str,
        locale: Option<&str>,
    ) -> Option<RouteKey> {
        let url = self.resolve_url(Some(ctx), path)?;
        let segments = path_segments(&url);
        let (prefix, rest) = extract_locale(&segments, &self.registry);
        let locale = locale
            .or_else(|| prefix.map(Locale::key))
            .unwrap_or_else(|| ctx.state.current().key());
        let decoded: Vec<String> = rest.iter().map(|s| decode_segment(s)).collect();

        self.routes
            .match_path(locale, &decoded)
            .map(|found| found.route.clone())
    }

    /// Make the request URL's locale segment current, if it has one.
    ///
    /// # Returns
    /// The key that was set, or `None` when the first segment is not a
    /// supported locale.
    pub fn locale_from_request(&self, ctx: &mut RequestContext) -> Option<String> {
        let segments = path_segments(ctx.url.as_ref()?);
        let (locale, _) = extract_locale(&segments, &self.registry);
        let key = locale?.key().to_string();
        ctx.state.set_current(&key).map(str::to_string)
    }

    /// Negotiate from an `Accept-Language` value and make the result current.
    pub fn negotiate<'c>(&self, ctx: &'c mut RequestContext, header: &str) -> &'c Locale {
        let key = i18n::negotiate(header, &self.registry, ctx.state.default())
            .key()
            .to_string();
        ctx.state.set_current(&key);
        ctx.state.current()
    }

    // ==================== Internals ====================

    fn target_locale<'a>(&'a self, ctx: &'a RequestContext, locale: Option<&str>) -> Option<&'a Locale> {
        match locale {
            None => Some(ctx.state.current()),
            Some(key) => {
                let found = self.registry.find(key);
                if found.is_none() {
                    debug!("Unsupported target locale '{}'", key);
                }
                found
            }
        }
    }

    /// Scheme, host and port for generated links: the configured base URL,
    /// else the request URL.
    fn base(&self, ctx: &RequestContext) -> Option<Url> {
        let mut base = self
            .options
            .base_url
            .clone()
            .or_else(|| ctx.url.clone())?;
        base.set_path("/");
        base.set_query(None);
        base.set_fragment(None);
        Some(base)
    }

    fn input_url(&self, ctx: &RequestContext, url: Option<&str>) -> Option<Url> {
        let resolved = match url {
            Some(raw) => self.resolve_url(Some(ctx), raw),
            None => ctx.url.clone().or_else(|| self.options.base_url.clone()),
        };
        if resolved.is_none() {
            debug!("No URL or host available to localize");
        }
        resolved
    }

    /// Parse an absolute URL, or join a relative one onto the base.
    fn resolve_url(&self, ctx: Option<&RequestContext>, raw: &str) -> Option<Url> {
        let url = match Url::parse(raw) {
            Ok(url) => url,
            Err(ParseError::RelativeUrlWithoutBase) => {
                let base = match ctx {
                    Some(ctx) => self.base(ctx)?,
                    None => self.options.base_url.clone()?,
                };
                base.join(raw).ok()?
            }
            Err(e) => {
                debug!("Invalid URL '{}': {}", raw, e);
                return None;
            }
        };

        if url.cannot_be_a_base() || url.host().is_none() {
            debug!("URL '{}' has no host", raw);
            return None;
        }
        Some(url)
    }

    fn render<S: AsRef<str>>(
        &self,
        ctx: &RequestContext,
        url: Url,
        target: &Locale,
        segments: &[S],
    ) -> String {
        let hidden = self.options.hide_default_locale_in_url
            && target.key() == ctx.state.default().key();
        let prefix = (!hidden).then(|| target.key());
        assemble(url, prefix, segments)
    }

    /// Re-render a route path from `source`'s templates into `target`'s.
    fn translate_path<S: AsRef<str>>(
        &self,
        source: &Locale,
        target: &Locale,
        segments: &[S],
    ) -> Option<Vec<String>> {
        if segments.is_empty() || self.routes.is_empty() {
            return None;
        }

        let decoded: Vec<String> = segments.iter().map(|s| decode_segment(s.as_ref())).collect();
        let candidates = std::iter::once(source.key()).chain(
            self.registry
                .iter()
                .map(Locale::key)
                .filter(|key| *key != source.key()),
        );
        let found = candidates
            .into_iter()
            .find_map(|locale| self.routes.match_path(locale, &decoded))?;

        let Some(template) = self.routes.lookup(found.route.as_str(), target.key()) else {
            debug!("Route '{}' has no template for '{}'", found.route, target);
            return None;
        };

        match template.substitute(&found.parameters) {
            Ok(path) => Some(split_path(&path)),
            Err(e) => {
                debug!("{}; keeping the literal path", e);
                None
            }
        }
    }
}
