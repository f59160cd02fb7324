use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("an invalid pattern reached the regex cache: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Concurrent cache of compiled regular expressions, keyed by pattern
/// text. Metadata patterns are compiled on first use and shared between
/// threads from then on.
pub(crate) struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_string())
            .or_try_insert_with(|| regex::Regex::new(pattern).map(Arc::new))?;
        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RegexCache;

    #[test]
    fn caches_and_reports_errors() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get(r"\d{3}").expect("valid pattern");
        let second = cache.get(r"\d{3}").expect("valid pattern");
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.get(r"(unclosed").is_err());
    }
}
