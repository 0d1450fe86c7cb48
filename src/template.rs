//! Minimal `{{name}}` placeholder substitution.
//!
//! Templates are plain text containing placeholders of the form `{{name}}`.
//! Rendering replaces each placeholder with the value supplied for `name`.
//!
//! ## Missing variables
//!
//! A placeholder without a supplied value is an error
//! ([`TemplateError::MissingVariable`]) rather than an empty substitution, so a
//! stanza is never written with a silently blank key. Unused variables are
//! ignored, and substituted values are inserted verbatim without being scanned
//! for further placeholders.

use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("no value supplied for template variable `{0}`")]
    MissingVariable(String),

    #[error("unterminated placeholder at byte {0}")]
    Unterminated(usize),
}

/// Substitutes every `{{name}}` in `template` with the matching value in `vars`.
///
/// # Errors
///
/// * [`TemplateError::MissingVariable`] - a placeholder names a variable absent from `vars`
/// * [`TemplateError::Unterminated`] - an opening `{{` has no closing `}}`
///
/// # Example
///
/// ```
/// use aws_sso_files::template::render;
///
/// let text = render("[{{profile}}]\n", &[("profile", "dev")]).unwrap();
/// assert_eq!(text, "[dev]\n");
/// ```
pub fn render(template: &str, vars: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);

        let after_open = &rest[start + OPEN.len()..];
        let end = after_open.find(CLOSE).ok_or_else(|| {
            TemplateError::Unterminated(template.len() - rest.len() + start)
        })?;

        let name = &after_open[..end];
        let value = vars
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(*value))
            .ok_or_else(|| TemplateError::MissingVariable(name.to_string()))?;
        out.push_str(value);

        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let text = render("{{a}}-{{b}}-{{a}}", &[("a", "x"), ("b", "y")]).unwrap();
        assert_eq!(text, "x-y-x");
    }

    #[test]
    fn text_without_placeholders_is_unchanged() {
        assert_eq!(render("output = json\n", &[]).unwrap(), "output = json\n");
    }

    #[test]
    fn missing_variable_is_an_error() {
        let err = render("region = {{region}}", &[("profile", "dev")]).unwrap_err();
        assert_eq!(err, TemplateError::MissingVariable("region".into()));
    }

    #[test]
    fn unterminated_placeholder_reports_offset() {
        let err = render("abc {{region", &[("region", "eu-west-1")]).unwrap_err();
        assert_eq!(err, TemplateError::Unterminated(4));
    }

    #[test]
    fn values_are_not_rescanned() {
        let text = render("{{a}}", &[("a", "{{b}}"), ("b", "nope")]).unwrap();
        assert_eq!(text, "{{b}}");
    }

    #[test]
    fn unused_variables_are_ignored() {
        let text = render("[{{profile}}]", &[("profile", "dev"), ("extra", "1")]).unwrap();
        assert_eq!(text, "[dev]");
    }
}
