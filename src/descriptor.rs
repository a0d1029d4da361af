//! Per-node failure-message state and rendering.
//!
//! Every assertion node owns exactly one [`Descriptor`]. It accumulates the
//! caller's custom override (if any), the default description a failing
//! predicate installs, and the ancestry lines a conversion carries forward.
//! Nothing is rendered until a predicate actually fails.

use std::fmt;

use crate::error::AssertionError;

/// Builds the failure value from a rendered message.
pub type FailureFactory = Box<dyn Fn(String) -> AssertionError>;

/// Mutable failure-message state for one assertion node.
///
/// Two rendering paths exist and the override always wins: a caller-supplied
/// template with positional `{0}`/`{1}` placeholders, or the failing
/// predicate's default description followed by its named variables as
/// indented `name: 'value'` lines.
#[derive(Default)]
pub struct Descriptor {
    override_template: Option<String>,
    override_args: Vec<String>,
    default_template: Option<String>,
    variables: Vec<(String, String)>,
    origin: Vec<String>,
    factory: Option<FailureFactory>,
}

impl fmt::Debug for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("override_template", &self.override_template)
            .field("override_args", &self.override_args)
            .field("default_template", &self.default_template)
            .field("variables", &self.variables)
            .field("origin", &self.origin)
            .field("custom_factory", &self.factory.is_some())
            .finish()
    }
}

impl Descriptor {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // State mutation
    // =========================================================================

    /// Store a caller-supplied description verbatim. Last write wins.
    ///
    /// The template is never validated against the argument list; a mismatch
    /// only surfaces if the chain fails and the message is rendered.
    pub fn set_override(&mut self, template: impl Into<String>, args: Vec<String>) {
        self.override_template = Some(template.into());
        self.override_args = args;
    }

    /// Install the default description a predicate reports when it fails.
    ///
    /// No-op when an override is present: the caller's description wins.
    pub fn set_default_description<V>(&mut self, template: &str, variables: V)
    where
        V: IntoIterator<Item = (String, String)>,
    {
        if self.override_template.is_some() {
            return;
        }
        self.default_template = Some(template.to_string());
        self.variables = variables.into_iter().collect();
    }

    /// Replace the failure factory for this node.
    pub fn set_factory(&mut self, factory: FailureFactory) {
        self.factory = Some(factory);
    }

    /// Record one ancestry line from a conversion ("size of [1, 2, 3]").
    pub fn push_origin(&mut self, line: String) {
        self.origin.push(line);
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn has_override(&self) -> bool {
        self.override_template.is_some()
    }

    /// True while no failing predicate has installed a default description.
    ///
    /// A passing chain leaves its descriptor pristine, which is how tests
    /// verify that rendering never ran.
    pub fn is_pristine(&self) -> bool {
        self.default_template.is_none() && self.variables.is_empty()
    }

    pub fn origin(&self) -> &[String] {
        &self.origin
    }

    // =========================================================================
    // Rendering and failure
    // =========================================================================

    /// Render the final message.
    ///
    /// Override path: `{i}` tokens are substituted from the argument list;
    /// out-of-range or non-numeric tokens stay literal. Default path: the
    /// template line, one indented line per named variable in insertion
    /// order, then one `derived from:` line per ancestry entry. With neither
    /// set, the message is empty.
    pub fn render(&self) -> String {
        if let Some(template) = &self.override_template {
            return substitute(template, &self.override_args);
        }
        if let Some(template) = &self.default_template {
            let mut message = template.clone();
            for (name, value) in &self.variables {
                message.push_str(&format!("\n  {name}: '{value}'"));
            }
            for line in &self.origin {
                message.push_str(&format!("\n  derived from: {line}"));
            }
            return message;
        }
        String::new()
    }

    /// Render, build the failure through the factory, and unwind.
    pub fn fail(&self) -> ! {
        let message = self.render();
        let error = match &self.factory {
            Some(factory) => factory(message),
            None => AssertionError::InvalidArgument(message),
        };
        panic!("{error}");
    }

    /// Report malformed use of the API through the same throwing path.
    pub fn fail_usage(&self, message: String) -> ! {
        let error = match &self.factory {
            Some(factory) => factory(message),
            None => AssertionError::Usage(message),
        };
        panic!("{error}");
    }

    /// Fail with a default description without mutating this descriptor.
    ///
    /// Used by conversions, which only borrow their source node. An override
    /// on the node still wins, exactly as in the mutating path.
    pub fn fail_with_default<V>(&self, template: &str, variables: V) -> !
    where
        V: IntoIterator<Item = (String, String)>,
    {
        if self.override_template.is_some() {
            self.fail();
        }
        let mut message = template.to_string();
        for (name, value) in variables {
            message.push_str(&format!("\n  {name}: '{value}'"));
        }
        for line in &self.origin {
            message.push_str(&format!("\n  derived from: {line}"));
        }
        let error = match &self.factory {
            Some(factory) => factory(message),
            None => AssertionError::InvalidArgument(message),
        };
        panic!("{error}");
    }
}

/// Debug-format a named variable for a default description.
pub fn var(name: &str, value: impl fmt::Debug) -> (String, String) {
    (name.to_string(), format!("{value:?}"))
}

/// A named variable whose value is already prose ("greater than 3").
pub fn var_text(name: &str, text: impl Into<String>) -> (String, String) {
    (name.to_string(), text.into())
}

fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        rest = &rest[open..];
        match rest.find('}') {
            Some(close) => {
                let token = &rest[1..close];
                match token.parse::<usize>() {
                    Ok(index) if index < args.len() => out.push_str(&args[index]),
                    _ => out.push_str(&rest[..=close]),
                }
                rest = &rest[close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_descriptor_renders_empty() {
        let descriptor = Descriptor::new();
        assert_eq!(descriptor.render(), "");
    }

    #[test]
    fn test_override_substitutes_positional_args() {
        let mut descriptor = Descriptor::new();
        descriptor.set_override("must be {0}, not {1}", vec!["red".into(), "blue".into()]);
        assert_eq!(descriptor.render(), "must be red, not blue");
    }

    #[test]
    fn test_missing_indices_stay_literal() {
        let mut descriptor = Descriptor::new();
        descriptor.set_override("must be {0} and {3}", vec!["red".into()]);
        assert_eq!(descriptor.render(), "must be red and {3}");
    }

    #[test]
    fn test_non_numeric_tokens_stay_literal() {
        let mut descriptor = Descriptor::new();
        descriptor.set_override("must keep {name} and {}", vec!["x".into()]);
        assert_eq!(descriptor.render(), "must keep {name} and {}");
    }

    #[test]
    fn test_last_override_wins() {
        let mut descriptor = Descriptor::new();
        descriptor.set_override("first", vec![]);
        descriptor.set_override("second", vec![]);
        assert_eq!(descriptor.render(), "second");
    }

    #[test]
    fn test_default_description_renders_variables_in_order() {
        let mut descriptor = Descriptor::new();
        descriptor.set_default_description(
            "must contain the expected element",
            [var("actual", [1, 2]), var("expected", 9)],
        );
        assert_eq!(
            descriptor.render(),
            "must contain the expected element\n  actual: '[1, 2]'\n  expected: '9'"
        );
    }

    #[test]
    fn test_override_wins_over_default_description() {
        let mut descriptor = Descriptor::new();
        descriptor.set_override("custom message", vec![]);
        descriptor.set_default_description("must be empty", [var("actual", [1])]);
        assert_eq!(descriptor.render(), "custom message");
    }

    #[test]
    fn test_origin_lines_render_after_variables() {
        let mut descriptor = Descriptor::new();
        descriptor.push_origin("size of [1, 2, 3]".to_string());
        descriptor.set_default_description("must be less than the bound", [var("actual", 3)]);
        assert_eq!(
            descriptor.render(),
            "must be less than the bound\n  actual: '3'\n  derived from: size of [1, 2, 3]"
        );
    }

    #[test]
    fn test_pristine_until_a_default_is_installed() {
        let mut descriptor = Descriptor::new();
        assert!(descriptor.is_pristine());
        descriptor.set_override("custom", vec![]);
        assert!(descriptor.is_pristine());
        let mut failing = Descriptor::new();
        failing.set_default_description("must hold", [var("actual", 1)]);
        assert!(!failing.is_pristine());
    }

    #[test]
    #[should_panic(expected = "rendered by factory")]
    fn test_custom_factory_shapes_the_failure() {
        let mut descriptor = Descriptor::new();
        descriptor.set_factory(Box::new(|message| {
            AssertionError::InvalidArgument(format!("rendered by factory: {message}"))
        }));
        descriptor.set_default_description("must hold", []);
        descriptor.fail();
    }
}
