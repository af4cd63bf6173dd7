//! Query string construction.
//!
//! Absent optional parameters are omitted entirely, never sent empty: the
//! server treats absence as "no filter". Blank strings count as absent.

/// Ordered query parameters for one request.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a required parameter.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.pairs.push((key, value.into()));
        self
    }

    /// Append an optional parameter; `None` and blank values are skipped.
    #[must_use]
    pub fn with_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => self.with(key, v),
            _ => self,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render `path` with the encoded query string appended, if any.
    #[must_use]
    pub fn to_path(&self, path: &str) -> String {
        if self.pairs.is_empty() {
            return path.to_string();
        }
        let query = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_render_bare_path() {
        assert_eq!(QueryParams::new().to_path("/api/market-prices"), "/api/market-prices");
    }

    #[test]
    fn absent_and_blank_optionals_are_omitted() {
        let path = QueryParams::new()
            .with_opt("crop_name", None)
            .with_opt("region", Some("  "))
            .with("language", "en")
            .to_path("/api/weather-alerts");
        assert_eq!(path, "/api/weather-alerts?language=en");
    }

    #[test]
    fn values_are_percent_encoded_in_order() {
        let path = QueryParams::new()
            .with_opt("crop_name", Some("Basmati Rice"))
            .with_opt("region", Some("D.I. Khan&Co"))
            .to_path("/api/market-prices");
        assert_eq!(
            path,
            "/api/market-prices?crop_name=Basmati%20Rice&region=D.I.%20Khan%26Co"
        );
    }
}
