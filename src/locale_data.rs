//! Locale data for range formatting: the range-join and "approximately" patterns.

use icu::locale::Locale as IcuLocale;
use rustc_hash::FxHashMap;
use tinystr::TinyAsciiStr;

use crate::decoration::Decoration;
use crate::locale::{DEFAULT_NUMBERING_SYSTEM, fallback_chain};
use crate::pattern::{
    DEFAULT_APPROXIMATELY_PATTERN, DEFAULT_RANGE_PATTERN, RangePattern, approximately_decoration,
};

/// Numbering system identifier such as `latn` or `arab`.
pub type NumberingSystem = TinyAsciiStr<8>;

/// The `miscPatterns` entries a locale may define. Either may be missing,
/// in which case a less specific locale is consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MiscPatterns {
    pub range: Option<String>,
    pub approximately: Option<String>,
}

/// Read-only source of locale data, injected into the range formatter.
pub trait RangeDataProvider: Send + Sync + std::fmt::Debug {
    /// Data stored for exactly this locale tag and numbering system, without fallback.
    fn misc_patterns(&self, locale: &str, numbering_system: &str) -> Option<MiscPatterns>;
}

/// In-memory table keyed by `(locale, numbering system)`.
#[derive(Debug, Clone, Default)]
pub struct StaticRangeData {
    entries: FxHashMap<(String, NumberingSystem), MiscPatterns>,
}

impl StaticRangeData {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Patterns for a handful of common locales.
    pub fn builtin() -> Self {
        let mut data = Self::empty();
        for (locale, range, approximately) in [
            ("en", "{0}\u{2013}{1}", "~{0}"),
            ("de", "{0}\u{2013}{1}", "\u{2248}{0}"),
            ("fr", "{0}\u{2013}{1}", "\u{2243}{0}"),
            ("es", "{0}-{1}", "~{0}"),
            ("it", "{0}-{1}", "~{0}"),
            ("pt", "{0}\u{2013}{1}", "~{0}"),
            ("pt-PT", "{0} - {1}", "~{0}"),
            ("nl", "{0}-{1}", "~{0}"),
            ("ru", "{0}\u{2013}{1}", "\u{2248}{0}"),
            ("ja", "{0}\u{FF5E}{1}", "\u{7D04} {0}"),
            ("ko", "{0}~{1}", "\u{C57D} {0}"),
            ("zh", "{0}-{1}", "\u{7EA6}{0}"),
            ("zh-Hant", "{0}-{1}", "\u{7D04}{0}"),
        ] {
            data.insert(locale, DEFAULT_NUMBERING_SYSTEM, MiscPatterns {
                range: Some(range.to_string()),
                approximately: Some(approximately.to_string()),
            });
        }
        data.insert("ar", "arab", MiscPatterns {
            range: Some("{0}\u{2013}{1}".to_string()),
            approximately: Some("~\u{061C}{0}".to_string()),
        });
        data
    }

    pub fn insert(&mut self, locale: &str, numbering_system: &str, patterns: MiscPatterns) {
        match NumberingSystem::try_from_str(numbering_system) {
            Ok(ns) => {
                self.entries.insert((locale.to_string(), ns), patterns);
            }
            Err(_) => tracing::debug!(numbering_system, "ignoring data for invalid numbering system"),
        }
    }
}

impl RangeDataProvider for StaticRangeData {
    fn misc_patterns(&self, locale: &str, numbering_system: &str) -> Option<MiscPatterns> {
        let ns = NumberingSystem::try_from_str(numbering_system).ok()?;
        self.entries.get(&(locale.to_string(), ns)).cloned()
    }
}

/// The compiled patterns a range formatter uses for its whole life.
#[derive(Debug, Clone)]
pub struct RangeData {
    pub range: RangePattern,
    pub approximately: Decoration,
}

impl RangeData {
    /// Resolves both patterns with locale fallback, then `latn` fallback, then
    /// built-in defaults. Patterns that fail to compile are skipped.
    pub fn load(provider: &dyn RangeDataProvider, locale: &IcuLocale, numbering_system: &str) -> Self {
        let mut systems = vec![numbering_system];
        if numbering_system != DEFAULT_NUMBERING_SYSTEM {
            systems.push(DEFAULT_NUMBERING_SYSTEM);
        }

        let mut range = None;
        let mut approximately = None;
        'search: for ns in systems {
            for tag in fallback_chain(locale) {
                let Some(found) = provider.misc_patterns(&tag, ns) else {
                    continue;
                };
                if range.is_none() {
                    range = found.range.as_deref().and_then(|p| {
                        RangePattern::parse(p)
                            .inspect_err(|e| tracing::debug!(%tag, error = %e, "skipping range pattern"))
                            .ok()
                    });
                }
                if approximately.is_none() {
                    approximately = found.approximately.as_deref().and_then(|p| {
                        approximately_decoration(p)
                            .inspect_err(|e| tracing::debug!(%tag, error = %e, "skipping approximately pattern"))
                            .ok()
                    });
                }
                if range.is_some() && approximately.is_some() {
                    break 'search;
                }
            }
        }

        let range = range.unwrap_or_else(|| {
            tracing::debug!(%locale, numbering_system, "no range pattern, using {DEFAULT_RANGE_PATTERN}");
            RangePattern::default()
        });
        let approximately = approximately
            .or_else(|| approximately_decoration(DEFAULT_APPROXIMATELY_PATTERN).ok())
            .unwrap_or_default();
        Self {
            range,
            approximately,
        }
    }
}
