//! Flask-style path templates.
//!
//! # Responsibilities
//! - Parse `<name>`, `<converter:name>` and `<converter(args):name>` placeholders
//! - Compile a template into an anchored regex
//! - Validate captured values against converter bounds
//!
//! # Design Decisions
//! - One template = one rule; no URL map, no method dispatch
//! - Static text is regex-escaped, so `.` or `+` in a template are literal
//! - A trailing slash is significant: `/docs/` does not match `/docs`

use regex::{Regex, RegexBuilder};

use crate::pattern::types::PatternError;

const UUID_REGEX: &str =
    "[A-Fa-f0-9]{8}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{4}-[A-Fa-f0-9]{12}";

/// A compiled single-rule path template.
#[derive(Debug, Clone)]
pub struct RouteTemplate {
    source: String,
    regex: Regex,
    params: Vec<Param>,
}

/// Values captured by a successful template match, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TemplateMatch {
    values: Vec<(String, String)>,
}

impl TemplateMatch {
    /// Raw captured text for a placeholder.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[derive(Debug, Clone)]
struct Param {
    name: String,
    converter: Converter,
}

#[derive(Debug, Clone, PartialEq)]
enum Converter {
    Default {
        min_length: usize,
        max_length: Option<usize>,
        length: Option<usize>,
    },
    Path,
    Int {
        fixed_digits: usize,
        min: Option<i64>,
        max: Option<i64>,
        signed: bool,
    },
    Float {
        min: Option<f64>,
        max: Option<f64>,
        signed: bool,
    },
    Uuid,
    Any(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
enum ArgValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

#[derive(Debug, Default)]
struct ConverterArgs {
    positional: Vec<ArgValue>,
    keywords: Vec<(String, ArgValue)>,
}

impl ConverterArgs {
    /// Look up an argument by position, then by keyword.
    fn get(&self, index: usize, name: &str) -> Option<&ArgValue> {
        self.positional.get(index).or_else(|| {
            self.keywords
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v)
        })
    }

    /// Reject keywords and surplus positionals a converter does not accept.
    fn check(&self, converter: &str, names: &[&str]) -> Result<(), PatternError> {
        if self.positional.len() > names.len() {
            return Err(invalid(format!(
                "converter '{converter}' takes at most {} arguments",
                names.len()
            )));
        }
        for (key, _) in &self.keywords {
            if !names.contains(&key.as_str()) {
                return Err(invalid(format!(
                    "converter '{converter}' got an unexpected argument '{key}'"
                )));
            }
        }
        Ok(())
    }

    fn usize_arg(&self, index: usize, name: &str) -> Result<Option<usize>, PatternError> {
        match self.get(index, name) {
            None => Ok(None),
            Some(ArgValue::Int(v)) if *v >= 0 => Ok(Some(*v as usize)),
            Some(other) => Err(invalid(format!(
                "argument '{name}' must be a non-negative integer, got {other:?}"
            ))),
        }
    }

    fn int_arg(&self, index: usize, name: &str) -> Result<Option<i64>, PatternError> {
        match self.get(index, name) {
            None => Ok(None),
            Some(ArgValue::Int(v)) => Ok(Some(*v)),
            Some(other) => Err(invalid(format!(
                "argument '{name}' must be an integer, got {other:?}"
            ))),
        }
    }

    fn float_arg(&self, index: usize, name: &str) -> Result<Option<f64>, PatternError> {
        match self.get(index, name) {
            None => Ok(None),
            Some(ArgValue::Int(v)) => Ok(Some(*v as f64)),
            Some(ArgValue::Float(v)) => Ok(Some(*v)),
            Some(other) => Err(invalid(format!(
                "argument '{name}' must be a number, got {other:?}"
            ))),
        }
    }

    fn bool_arg(&self, index: usize, name: &str) -> Result<bool, PatternError> {
        match self.get(index, name) {
            None => Ok(false),
            Some(ArgValue::Bool(v)) => Ok(*v),
            Some(other) => Err(invalid(format!(
                "argument '{name}' must be True or False, got {other:?}"
            ))),
        }
    }
}

impl Converter {
    fn build(name: &str, args: ConverterArgs) -> Result<Self, PatternError> {
        match name {
            "default" | "string" => {
                args.check(name, &["minlength", "maxlength", "length"])?;
                Ok(Converter::Default {
                    min_length: args.usize_arg(0, "minlength")?.unwrap_or(1),
                    max_length: args.usize_arg(1, "maxlength")?,
                    length: args.usize_arg(2, "length")?,
                })
            }
            "path" => {
                args.check(name, &[])?;
                Ok(Converter::Path)
            }
            "int" => {
                args.check(name, &["fixed_digits", "min", "max", "signed"])?;
                Ok(Converter::Int {
                    fixed_digits: args.usize_arg(0, "fixed_digits")?.unwrap_or(0),
                    min: args.int_arg(1, "min")?,
                    max: args.int_arg(2, "max")?,
                    signed: args.bool_arg(3, "signed")?,
                })
            }
            "float" => {
                args.check(name, &["min", "max", "signed"])?;
                Ok(Converter::Float {
                    min: args.float_arg(0, "min")?,
                    max: args.float_arg(1, "max")?,
                    signed: args.bool_arg(2, "signed")?,
                })
            }
            "uuid" => {
                args.check(name, &[])?;
                Ok(Converter::Uuid)
            }
            "any" => {
                if !args.keywords.is_empty() {
                    return Err(invalid("converter 'any' takes only positional items"));
                }
                let items = args
                    .positional
                    .into_iter()
                    .map(|v| match v {
                        ArgValue::Str(s) => s,
                        ArgValue::Int(i) => i.to_string(),
                        ArgValue::Float(f) => f.to_string(),
                        ArgValue::Bool(b) => (if b { "True" } else { "False" }).to_string(),
                    })
                    .collect::<Vec<_>>();
                if items.is_empty() {
                    return Err(invalid("converter 'any' needs at least one item"));
                }
                Ok(Converter::Any(items))
            }
            other => Err(invalid(format!("unknown converter '{other}'"))),
        }
    }

    fn regex(&self) -> String {
        match self {
            Converter::Default { length: Some(len), .. } => format!("[^/]{{{len}}}"),
            Converter::Default {
                min_length,
                max_length,
                ..
            } => match max_length {
                Some(max) => format!("[^/]{{{min_length},{max}}}"),
                None => format!("[^/]{{{min_length},}}"),
            },
            Converter::Path => "[^/].*?".to_string(),
            Converter::Int { signed, .. } => {
                (if *signed { "-?[0-9]+" } else { "[0-9]+" }).to_string()
            }
            Converter::Float { signed, .. } => {
                (if *signed { r"-?[0-9]+\.[0-9]+" } else { r"[0-9]+\.[0-9]+" }).to_string()
            }
            Converter::Uuid => UUID_REGEX.to_string(),
            Converter::Any(items) => {
                let alternatives = items
                    .iter()
                    .map(|i| regex::escape(i))
                    .collect::<Vec<_>>()
                    .join("|");
                format!("(?:{alternatives})")
            }
        }
    }

    /// Post-match checks the regex alone cannot express.
    fn accepts(&self, raw: &str) -> bool {
        match self {
            Converter::Int {
                fixed_digits,
                min,
                max,
                ..
            } => {
                // The width counts the whole captured value, sign included.
                if *fixed_digits > 0 && raw.chars().count() != *fixed_digits {
                    return false;
                }
                let Ok(value) = raw.parse::<i64>() else {
                    return false;
                };
                min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
            }
            Converter::Float { min, max, .. } => {
                let Ok(value) = raw.parse::<f64>() else {
                    return false;
                };
                min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
            }
            _ => true,
        }
    }
}

impl RouteTemplate {
    /// Parse and compile a template, case-sensitive.
    pub fn parse(template: &str) -> Result<Self, PatternError> {
        Self::compile(template, false)
    }

    /// Parse and compile a template.
    pub fn compile(template: &str, ignore_case: bool) -> Result<Self, PatternError> {
        let mut pattern = String::from(r"\A");
        let mut params: Vec<Param> = Vec::new();
        let mut rest = template;

        while let Some(open) = rest.find('<') {
            pattern.push_str(&regex::escape(&rest[..open]));
            let after = &rest[open + 1..];
            let close = after
                .find('>')
                .ok_or_else(|| invalid(format!("unclosed placeholder in '{template}'")))?;
            let body = &after[..close];
            if body.contains('<') {
                return Err(invalid(format!("nested '<' in placeholder of '{template}'")));
            }
            let param = parse_placeholder(body)?;
            if params.iter().any(|p| p.name == param.name) {
                return Err(invalid(format!(
                    "variable name '{}' used twice",
                    param.name
                )));
            }
            pattern.push('(');
            pattern.push_str(&param.converter.regex());
            pattern.push(')');
            params.push(param);
            rest = &after[close + 1..];
        }
        pattern.push_str(&regex::escape(rest));
        pattern.push_str(r"\z");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(ignore_case)
            .build()
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            source: template.to_string(),
            regex,
            params,
        })
    }

    /// The template text this rule was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Placeholder names in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.captures(path).is_some()
    }

    /// Match a path and return the captured placeholder values.
    pub fn captures(&self, path: &str) -> Option<TemplateMatch> {
        let caps = self.regex.captures(path)?;
        let mut values = Vec::with_capacity(self.params.len());
        for (i, param) in self.params.iter().enumerate() {
            let raw = caps.get(i + 1)?.as_str();
            if !param.converter.accepts(raw) {
                return None;
            }
            values.push((param.name.clone(), raw.to_string()));
        }
        Some(TemplateMatch { values })
    }
}

fn invalid(msg: impl Into<String>) -> PatternError {
    PatternError::InvalidTemplate(msg.into())
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse the text between `<` and `>`.
fn parse_placeholder(body: &str) -> Result<Param, PatternError> {
    let body = body.trim_end();
    let (converter_spec, name) = match body.rfind(':') {
        Some(idx) => (Some(&body[..idx]), &body[idx + 1..]),
        None => (None, body),
    };
    if !is_identifier(name) {
        return Err(invalid(format!("invalid variable name '{name}'")));
    }

    let converter = match converter_spec {
        None => Converter::build("default", ConverterArgs::default())?,
        Some(spec) => {
            let (conv_name, args) = match spec.find('(') {
                Some(idx) => {
                    let args = spec[idx + 1..]
                        .strip_suffix(')')
                        .ok_or_else(|| invalid(format!("unbalanced arguments in '{spec}'")))?;
                    (&spec[..idx], parse_args(args)?)
                }
                None => (spec, ConverterArgs::default()),
            };
            if !is_identifier(conv_name) {
                return Err(invalid(format!("invalid converter name '{conv_name}'")));
            }
            Converter::build(conv_name, args)?
        }
    };

    Ok(Param {
        name: name.to_string(),
        converter,
    })
}

fn parse_args(raw: &str) -> Result<ConverterArgs, PatternError> {
    let mut args = ConverterArgs::default();
    if raw.trim().is_empty() {
        return Ok(args);
    }
    for piece in raw.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            return Err(invalid(format!("empty argument in '({raw})'")));
        }
        match piece.split_once('=') {
            Some((key, value)) if is_identifier(key.trim()) => {
                args.keywords
                    .push((key.trim().to_string(), parse_value(value.trim())?));
            }
            _ => {
                if !args.keywords.is_empty() {
                    return Err(invalid("positional argument follows keyword argument"));
                }
                args.positional.push(parse_value(piece)?);
            }
        }
    }
    Ok(args)
}

fn parse_value(raw: &str) -> Result<ArgValue, PatternError> {
    if raw == "True" {
        return Ok(ArgValue::Bool(true));
    }
    if raw == "False" {
        return Ok(ArgValue::Bool(false));
    }
    if let Ok(i) = raw.parse::<i64>() {
        return Ok(ArgValue::Int(i));
    }
    if let Ok(f) = raw.parse::<f64>() {
        return Ok(ArgValue::Float(f));
    }
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return Ok(ArgValue::Str(raw[1..raw.len() - 1].to_string()));
        }
    }
    if raw.chars().all(|c| c.is_ascii_alphanumeric() || "_-.".contains(c)) {
        return Ok(ArgValue::Str(raw.to_string()));
    }
    Err(invalid(format!("cannot parse argument value '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_template() {
        let t = RouteTemplate::parse("/docs/index.html").unwrap();
        assert!(t.is_match("/docs/index.html"));
        assert!(!t.is_match("/docs/indexXhtml"));
        assert!(!t.is_match("/docs/index.html/extra"));
    }

    #[test]
    fn test_default_converter_stops_at_slash() {
        let t = RouteTemplate::parse("/user/<name>").unwrap();
        let m = t.captures("/user/alice").unwrap();
        assert_eq!(m.get("name"), Some("alice"));
        assert!(!t.is_match("/user/alice/posts"));
        assert!(!t.is_match("/user/"));
    }

    #[test]
    fn test_int_converter() {
        let t = RouteTemplate::parse("/post/<int:id>").unwrap();
        assert!(t.is_match("/post/42"));
        assert!(!t.is_match("/post/abc"));
        assert!(!t.is_match("/post/-1"));

        let signed = RouteTemplate::parse("/offset/<int(signed=True):n>").unwrap();
        assert!(signed.is_match("/offset/-3"));
    }

    #[test]
    fn test_int_bounds_and_fixed_digits() {
        let t = RouteTemplate::parse("/year/<int(fixed_digits=4, min=2000):y>").unwrap();
        assert!(t.is_match("/year/2024"));
        assert!(!t.is_match("/year/1999"));
        assert!(!t.is_match("/year/20245"));

        let signed = RouteTemplate::parse("/n/<int(fixed_digits=3, signed=True):n>").unwrap();
        assert!(signed.is_match("/n/-12"));
        assert!(!signed.is_match("/n/-123"));
    }

    #[test]
    fn test_numbers_are_ascii_digits() {
        let int = RouteTemplate::parse("/post/<int:id>").unwrap();
        assert!(!int.is_match("/post/\u{0664}\u{0662}"));
        let float = RouteTemplate::parse("/v/<float:ver>").unwrap();
        assert!(!float.is_match("/v/\u{0661}.5"));
    }

    #[test]
    fn test_float_converter() {
        let t = RouteTemplate::parse("/v/<float(max=2.5):ver>").unwrap();
        assert!(t.is_match("/v/1.5"));
        assert!(!t.is_match("/v/3.0"));
        assert!(!t.is_match("/v/1"));
    }

    #[test]
    fn test_path_converter_spans_segments() {
        let t = RouteTemplate::parse("/files/<path:rest>").unwrap();
        let m = t.captures("/files/a/b/c.txt").unwrap();
        assert_eq!(m.get("rest"), Some("a/b/c.txt"));
    }

    #[test]
    fn test_any_and_uuid_converters() {
        let t = RouteTemplate::parse("/<any(docs, api):section>/<uuid:id>").unwrap();
        assert!(t.is_match("/docs/123e4567-e89b-12d3-a456-426614174000"));
        assert!(!t.is_match("/blog/123e4567-e89b-12d3-a456-426614174000"));
        assert!(!t.is_match("/docs/not-a-uuid"));
    }

    #[test]
    fn test_trailing_slash_is_significant() {
        let t = RouteTemplate::parse("/docs/").unwrap();
        assert!(t.is_match("/docs/"));
        assert!(!t.is_match("/docs"));
    }

    #[test]
    fn test_case_insensitive_compile() {
        let t = RouteTemplate::compile("/Guide/<page>", true).unwrap();
        assert!(t.is_match("/guide/intro"));
    }

    #[test]
    fn test_malformed_templates() {
        for bad in [
            "/user/<name",
            "/user/<>",
            "/user/<1abc>",
            "/user/<bogus:name>",
            "/user/<int(:id>",
            "/<a>/<a>",
            "/x/<string(minlength=x y):s>",
        ] {
            assert!(
                matches!(RouteTemplate::parse(bad), Err(PatternError::InvalidTemplate(_))),
                "expected failure for {bad}"
            );
        }
    }

    #[test]
    fn test_variables_listed_in_order() {
        let t = RouteTemplate::parse("/<a>/<int:b>/<path:c>").unwrap();
        assert_eq!(t.variables().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
