use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use log::debug;

use crate::{
    common::generated_name::GeneratedName,
    error::{Error, Result},
    utils::{capitalize, clean_feature_name, normalize_nested_name},
};

const SEPARATOR: &str = "__";

const DEFAULT_NAMESPACE: &str = "__.";

/// Generate unique names based on an optional target identifier and a feature
/// name. This type is stateful so the same instance should be used for all
/// name generation within one session; every method takes `&self`, so the
/// instance can be shared across caller threads behind an `Arc`.
#[derive(Default)]
pub struct NameGenerator {
    sequences: DashMap<String, AtomicU64>,
}

impl NameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a unique [`GeneratedName`] from `target` and `feature_name`.
    ///
    /// With a target, the generated name is a suffixed version of it: a
    /// `com.example.Demo` target with an `Initializer` feature leads to
    /// `com.example.Demo__Initializer`. If that feature was already requested
    /// for the same target, a sequence counter keeps the result unique.
    /// Without a target, the cleaned feature name is placed in the `__`
    /// namespace.
    pub fn generate_name(&self, target: Option<&str>, feature_name: &str) -> Result<GeneratedName> {
        if feature_name.is_empty() {
            return Err(Error::InvalidArgument("feature name must not be empty".to_string()));
        }

        let feature_name = clean_feature_name(feature_name);
        let base = match target {
            Some(target) => format!(
                "{}{}{}",
                normalize_nested_name(target),
                SEPARATOR,
                capitalize(&feature_name)
            ),
            None => format!("{}{}", DEFAULT_NAMESPACE, feature_name),
        };

        Ok(self.add_sequence(base))
    }

    fn add_sequence(&self, name: String) -> GeneratedName {
        let sequence = self
            .sequences
            .entry(name.clone())
            .or_default()
            .fetch_add(1, Ordering::Relaxed);

        if sequence > 0 {
            debug!("Base name {} already in use, adding sequence {}", name, sequence);
            GeneratedName::from(format!("{}{}", name, sequence))
        } else {
            GeneratedName::from(name)
        }
    }
}
