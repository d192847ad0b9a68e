// ============================================================================
// mediaprobe-core/src/options.rs
// ============================================================================
//
// PROBE OPTIONS: Caller-supplied ffprobe options and their command-line form
//
// Options are kept in a sorted map so the generated command line does not
// depend on insertion order.
//
// AI-ASSISTANT-INFO: Conversion of named options to ffprobe flags

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::error::{CoreError, CoreResult};

/// Value attached to a named ffprobe option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// `-name`
    Flag,
    /// `-name value`
    Value(String),
    /// `-name [value]` once per element.
    Repeated(Vec<Option<String>>),
}

impl OptionValue {
    fn push(&mut self, value: Option<String>) {
        let previous = std::mem::replace(self, OptionValue::Flag);
        let mut values = match previous {
            OptionValue::Flag => vec![None],
            OptionValue::Value(v) => vec![Some(v)],
            OptionValue::Repeated(values) => values,
        };
        values.push(value);
        *self = OptionValue::Repeated(values);
    }
}

impl From<Option<String>> for OptionValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => OptionValue::Value(v),
            None => OptionValue::Flag,
        }
    }
}

/// Extra options passed to ffprobe between the fixed output flags and the
/// input path.
///
/// ```rust
/// use mediaprobe_core::options::ProbeOptions;
///
/// let options = ProbeOptions::new()
///     .with_value("v", "error")
///     .with_flag("show_chapters");
/// assert_eq!(options.to_args(), vec!["-show_chapters", "-v", "error"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeOptions {
    entries: BTreeMap<String, OptionValue>,
}

impl ProbeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag(mut self, name: impl Into<String>) -> Self {
        self.insert(name, OptionValue::Flag);
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, OptionValue::Value(value.into()));
        self
    }

    /// Sets an option, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: OptionValue) {
        self.entries.insert(name.into(), value);
    }

    /// Adds a value for `name`. A second value for the same name turns the
    /// option into [`OptionValue::Repeated`].
    pub fn push(&mut self, name: impl Into<String>, value: Option<String>) {
        match self.entries.entry(name.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(value.into());
            }
        }
    }

    /// Parses `key=value` or a bare `key` into an option name and value.
    /// One leading `-` on the key is accepted and dropped.
    pub fn parse_pair(raw: &str) -> CoreResult<(String, Option<String>)> {
        let (key, value) = match raw.split_once('=') {
            Some((key, value)) => (key, Some(value.to_string())),
            None => (raw, None),
        };
        let key = key.trim();
        let key = key.strip_prefix('-').unwrap_or(key);
        if key.is_empty() || key.chars().any(char::is_whitespace) {
            return Err(CoreError::InvalidOption(format!(
                "'{raw}' has no usable option name"
            )));
        }
        Ok((key.to_string(), value))
    }

    /// Builds options from `key=value` strings, in the order given.
    pub fn from_pairs<I, S>(pairs: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::new();
        for pair in pairs {
            let (key, value) = Self::parse_pair(pair.as_ref())?;
            options.push(key, value);
        }
        Ok(options)
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Renders the options as ffprobe arguments, sorted by option name.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();
        for (name, value) in &self.entries {
            match value {
                OptionValue::Flag => args.push(format!("-{name}")),
                OptionValue::Value(v) => {
                    args.push(format!("-{name}"));
                    args.push(v.clone());
                }
                OptionValue::Repeated(values) => {
                    for v in values {
                        args.push(format!("-{name}"));
                        if let Some(v) = v {
                            args.push(v.clone());
                        }
                    }
                }
            }
        }
        args
    }
}
