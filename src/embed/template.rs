//! Template types for typed variable injection.

use std::marker::PhantomData;

/// Trait for template variable sets
pub trait TemplateVars {
    fn apply(&self, content: &str) -> String;
}

/// Template with typed variable injection
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _marker: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _marker: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        vars.apply(self.content)
    }
}

/// Replace `__KEY__` placeholders in a single pass.
///
/// Substituted values are never rescanned, so user text that happens to
/// contain a placeholder name comes out literally.
pub fn substitute(content: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find("__") {
        let tail = &rest[start..];
        match vars.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = &tail[2..];
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute() {
        let out = substitute(
            "<h1>__TITLE__</h1><p>__BODY__</p>",
            &[("__TITLE__", "Hi"), ("__BODY__", "there")],
        );
        assert_eq!(out, "<h1>Hi</h1><p>there</p>");
    }

    #[test]
    fn test_substitute_is_single_pass() {
        let out = substitute(
            "__A__|__B__",
            &[("__A__", "__B__"), ("__B__", "x")],
        );
        assert_eq!(out, "__B__|x");
    }

    #[test]
    fn test_unknown_placeholders_kept() {
        assert_eq!(substitute("a__b__c", &[("__X__", "y")]), "a__b__c");
    }
}
