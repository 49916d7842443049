use std::collections::BTreeMap;

use exitcheck_utils::types::ConfigSource;

use crate::model::Config;

fn source_label(source: Option<&ConfigSource>) -> String {
    source.unwrap_or(&ConfigSource::Default).label().to_string()
}

impl Config {
    /// Effective configuration as `key -> (value, source)` pairs.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let mut config = BTreeMap::new();

        let mut add = |key: &str, value: String| {
            let source = source_label(self.source_attribution.get(key));
            config.insert(key.to_string(), (value, source));
        };

        add("results_path", self.results.path.to_string());
        add("format", self.results.format.to_string());
        add("messages", format!("{} entries", self.messages.len()));

        config
    }
}
