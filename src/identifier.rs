//! Default Java identifier rule
//!
//! Identifier syntax is project-specific and injected into validation as a
//! plain predicate; hosts with a real language model supply their own. This
//! module is the batteries-included default for Java targets.

/// Java reserved words plus the literals, none of which may name a class.
const RESERVED: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Whether `s` is a legal Java identifier.
///
/// First character must be a letter, `_`, or `$`; later characters may also
/// be digits. Reserved words and the `true`/`false`/`null` literals are
/// rejected. Unicode letters are accepted, as Java does.
///
/// # Examples
/// ```
/// use matchgen::identifier::is_java_identifier;
/// assert!(is_java_identifier("WidgetMatcher"));
/// assert!(!is_java_identifier("123Bad"));
/// assert!(!is_java_identifier("class"));
/// ```
pub fn is_java_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    let starts_legally = match chars.next() {
        Some(c) => c.is_alphabetic() || c == '_' || c == '$',
        None => return false,
    };

    starts_legally
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        && !RESERVED.contains(&s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_typical_class_names() {
        assert!(is_java_identifier("WidgetMatcher"));
        assert!(is_java_identifier("Matcher2"));
        assert!(is_java_identifier("_internal"));
        assert!(is_java_identifier("$Generated"));
        assert!(is_java_identifier("Übersicht"));
    }

    #[test]
    fn test_rejects_bad_syntax() {
        assert!(!is_java_identifier(""));
        assert!(!is_java_identifier("123Bad"));
        assert!(!is_java_identifier("foo-bar"));
        assert!(!is_java_identifier("foo bar"));
        assert!(!is_java_identifier("foo.Bar"));
    }

    #[test]
    fn test_rejects_reserved_words() {
        assert!(!is_java_identifier("class"));
        assert!(!is_java_identifier("null"));
        assert!(!is_java_identifier("true"));
        // ...but only exact matches
        assert!(is_java_identifier("classy"));
        assert!(is_java_identifier("Class"));
    }
}
