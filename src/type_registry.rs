use std::borrow::Cow;

use regex::Regex;

/// Ordered set of message types, each identified by a regular expression.
///
/// Classification walks the types in registration order and stops at the
/// first pattern that matches anywhere in the message. Ordering therefore
/// matters: a broad pattern registered early shadows narrower ones after it.
///
/// Patterns are compiled once, when registered, and live as long as the
/// registry. Registration never fails: a pattern that does not compile is
/// reported through `log` and the type then never matches.
///
/// Patterns use the `regex` crate syntax, not PCRE. Lookaround (`(?=..)`,
/// `(?<=..)`) and backreferences are rejected by that syntax, so a type
/// written with them never classifies anything.
///
/// # Examples
///
/// ```
/// # use log_accumulator::TypeRegistry;
/// let mut types = TypeRegistry::new();
/// types.register("err", "ERROR");
/// types.register("warn", "ERR");
///
/// // "ERR" matches too, but "err" was registered first
/// assert_eq!(types.classify("ERROR: disk full"), Some("err"));
/// assert_eq!(types.classify("all good"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: Vec<MessageType>,
}

#[derive(Debug, Clone)]
struct MessageType {
    name: String,
    pattern: String,
    regex: Option<Regex>,
}

fn compile(name: &str, pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("message type '{}': invalid pattern '{}': {}", name, pattern, e);
            None
        }
    }
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` with `pattern`.
    ///
    /// Registering an existing name replaces its pattern but keeps its
    /// position in the classification order. There is no removal.
    pub fn register(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
        let name = name.into();
        let pattern = pattern.into();
        let regex = compile(&name, &pattern);
        match self.types.iter_mut().find(|t| t.name == name) {
            Some(existing) => {
                existing.pattern = pattern;
                existing.regex = regex;
            }
            None => self.types.push(MessageType { name, pattern, regex }),
        }
    }

    /// Pattern text registered for `name`.
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.find(name).map(|t| t.pattern.as_str())
    }

    /// Compiled pattern for `name`; `None` if unknown or invalid.
    pub fn compiled(&self, name: &str) -> Option<&Regex> {
        self.find(name).and_then(|t| t.regex.as_ref())
    }

    /// Name of the first registered type whose pattern matches `message`.
    pub fn classify(&self, message: &str) -> Option<&str> {
        self.types
            .iter()
            .find(|t| t.regex.as_ref().is_some_and(|re| re.is_match(message)))
            .map(|t| t.name.as_str())
    }

    /// Removes the first match of `type_name`'s pattern from `message`.
    ///
    /// Only a single occurrence is removed. Unknown type names and invalid
    /// patterns leave the message untouched.
    pub fn strip_marker<'a>(&self, message: &'a str, type_name: &str) -> Cow<'a, str> {
        match self.compiled(type_name) {
            Some(re) => re.replace(message, ""),
            None => Cow::Borrowed(message),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered `(name, pattern)` pairs in classification order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.types.iter().map(|t| (t.name.as_str(), t.pattern.as_str()))
    }

    fn find(&self, name: &str) -> Option<&MessageType> {
        self.types.iter().find(|t| t.name == name)
    }
}
