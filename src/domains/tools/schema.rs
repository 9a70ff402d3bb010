//! Declarative argument schemas.
//!
//! Operations describe their arguments as static [`ArgSpec`] data. The same
//! data renders the JSON Schema advertised to clients and drives the generic
//! validator run before any upstream call.

use std::sync::Arc;

use rmcp::model::{Tool, ToolAnnotations};
use serde_json::{Map, Value, json};

use super::error::{ToolError, ToolResult};

/// Argument object as received from the transport.
pub type JsonObject = Map<String, Value>;

/// JSON type accepted for an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    String,
    Number,
    NumberOrString,
}

impl ArgKind {
    fn schema_type(self) -> Value {
        match self {
            Self::String => json!("string"),
            Self::Number => json!("number"),
            Self::NumberOrString => json!(["number", "string"]),
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::NumberOrString => value.is_number() || value.is_string(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::NumberOrString => "number or string",
        }
    }
}

/// A permitted literal value of an enumerated argument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal {
    Str(&'static str),
    Num(i64),
}

impl Literal {
    fn to_json(self) -> Value {
        match self {
            Self::Str(s) => json!(s),
            Self::Num(n) => json!(n),
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::Str(s) => value.as_str() == Some(s),
            Self::Num(n) => value.as_f64() == Some(n as f64),
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Num(n) => write!(f, "{n}"),
        }
    }
}

/// String shapes checked beyond the JSON type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Six hex digits, no leading `#`.
    HexColor,
    /// `N` or `N-M`; both ends are checked against the argument bounds.
    WeightRange,
}

/// Description of a single argument.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    pub name: &'static str,
    pub kind: ArgKind,
    pub description: &'static str,
    pub required: bool,
    pub allowed: &'static [Literal],
    /// Inclusive numeric bounds; `None` on either side leaves it open.
    pub minimum: Option<i64>,
    pub maximum: Option<i64>,
    pub format: Option<Format>,
}

impl ArgSpec {
    pub const fn new(name: &'static str, kind: ArgKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            allowed: &[],
            minimum: None,
            maximum: None,
            format: None,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn one_of(mut self, allowed: &'static [Literal]) -> Self {
        self.allowed = allowed;
        self
    }

    pub const fn at_least(mut self, minimum: i64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    pub const fn between(mut self, minimum: i64, maximum: i64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    pub const fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    fn property_schema(&self) -> Value {
        let mut prop = Map::new();
        prop.insert("type".to_string(), self.kind.schema_type());
        if !self.allowed.is_empty() {
            prop.insert(
                "enum".to_string(),
                Value::Array(self.allowed.iter().map(|l| l.to_json()).collect()),
            );
        }
        if self.kind == ArgKind::Number {
            if let Some(min) = self.minimum {
                prop.insert("minimum".to_string(), json!(min));
            }
            if let Some(max) = self.maximum {
                prop.insert("maximum".to_string(), json!(max));
            }
        }
        prop.insert("description".to_string(), json!(self.description));
        Value::Object(prop)
    }

    fn check(&self, value: &Value) -> ToolResult<()> {
        if !self.kind.accepts(value) {
            return Err(self.invalid(format!("must be a {}", self.kind.label())));
        }

        if value.as_f64().is_some_and(|n| n.fract() != 0.0) {
            return Err(self.invalid("must be an integer"));
        }

        if !self.allowed.is_empty() && !self.allowed.iter().any(|l| l.matches(value)) {
            let options: Vec<String> = self.allowed.iter().map(|l| l.to_string()).collect();
            return Err(self.invalid(format!("must be one of: {}", options.join(", "))));
        }

        if let Some(n) = value.as_f64() {
            self.check_bounds(n)?;
        }

        if let (Some(format), Some(text)) = (self.format, value.as_str()) {
            match format {
                Format::HexColor => {
                    if text.len() != 6 || !text.chars().all(|c| c.is_ascii_hexdigit()) {
                        return Err(self.invalid(
                            "must be a 6-digit hex color without '#' (e.g. \"FF0000\")",
                        ));
                    }
                }
                Format::WeightRange => {
                    let parts: Vec<&str> = text.splitn(2, '-').collect();
                    for part in parts {
                        let weight: f64 = part.trim().parse().map_err(|_| {
                            self.invalid("must be a number or a range such as \"18-20\"")
                        })?;
                        self.check_bounds(weight)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Rewrite an integral float such as `84.0` as the integer `84`.
    fn normalize(&self, value: Value) -> Value {
        match value {
            Value::Number(n) if n.is_f64() && self.kind != ArgKind::String => match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 => {
                    Value::from(f as i64)
                }
                _ => Value::Number(n),
            },
            other => other,
        }
    }

    fn check_bounds(&self, n: f64) -> ToolResult<()> {
        let below = self.minimum.is_some_and(|min| n < min as f64);
        let above = self.maximum.is_some_and(|max| n > max as f64);
        if !below && !above {
            return Ok(());
        }
        let msg = match (self.minimum, self.maximum) {
            (Some(min), Some(max)) => format!("must be between {min} and {max}"),
            (Some(min), None) => format!("must be at least {min}"),
            (None, Some(max)) => format!("must be at most {max}"),
            (None, None) => unreachable!("bounds violated without bounds"),
        };
        Err(self.invalid(msg))
    }

    fn invalid(&self, msg: impl std::fmt::Display) -> ToolError {
        ToolError::invalid_arguments(format!("Argument '{}' {}", self.name, msg))
    }
}

/// Static metadata for one operation.
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub args: &'static [ArgSpec],
}

impl OperationDescriptor {
    /// Names of the arguments the caller must supply.
    pub fn required_args(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.args.iter().filter(|a| a.required).map(|a| a.name)
    }

    /// Render the argument schema as a JSON Schema object.
    pub fn input_schema(&self) -> JsonObject {
        let properties: Map<String, Value> = self
            .args
            .iter()
            .map(|arg| (arg.name.to_string(), arg.property_schema()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));

        let required: Vec<Value> = self.required_args().map(|n| json!(n)).collect();
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// Create a Tool model for this operation (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: Some(
                ToolAnnotations::with_title(self.title)
                    .read_only(true)
                    .open_world(true),
            ),
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Check an argument object against the schema.
    ///
    /// `null` counts as absent. Arguments the schema does not declare are
    /// left for the upstream service to judge.
    pub fn validate(&self, args: &JsonObject) -> ToolResult<()> {
        for spec in self.args {
            match args.get(spec.name) {
                None | Some(Value::Null) => {
                    if spec.required {
                        return Err(ToolError::invalid_arguments(format!(
                            "Missing required argument: {}",
                            spec.name
                        )));
                    }
                }
                Some(value) => spec.check(value)?,
            }
        }
        Ok(())
    }

    /// Put validated arguments into the shape the typed parameters expect.
    ///
    /// Numeric arguments are integers upstream; clients often send them as
    /// integral floats.
    pub fn normalize(&self, mut args: JsonObject) -> JsonObject {
        for spec in self.args {
            if let Some(value) = args.remove(spec.name) {
                args.insert(spec.name.to_string(), spec.normalize(value));
            }
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[Literal] = &[Literal::Num(42), Literal::Num(84), Literal::Num(200)];

    const SAMPLE: OperationDescriptor = OperationDescriptor {
        name: "sample",
        title: "Sample",
        description: "Sample operation",
        args: &[
            ArgSpec::new("query", ArgKind::String, "Search term").required(),
            ArgSpec::new("thumbnail_size", ArgKind::Number, "Thumbnail size").one_of(SIZES),
            ArgSpec::new("line_weight", ArgKind::NumberOrString, "Line weight")
                .between(1, 60)
                .format(Format::WeightRange),
            ArgSpec::new("color", ArgKind::String, "Hex color").format(Format::HexColor),
            ArgSpec::new("size", ArgKind::Number, "Pixel size").between(20, 1200),
        ],
    };

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn message(result: ToolResult<()>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn test_input_schema_shape() {
        let schema = Value::Object(SAMPLE.input_schema());
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["required"], json!(["query"]));
        assert_eq!(schema["properties"]["thumbnail_size"]["enum"], json!([42, 84, 200]));
        assert_eq!(
            schema["properties"]["line_weight"]["type"],
            json!(["number", "string"])
        );
        assert_eq!(schema["properties"]["size"]["minimum"], 20);
        assert_eq!(schema["properties"]["size"]["maximum"], 1200);
        assert!(schema["properties"]["line_weight"].get("minimum").is_none());
    }

    #[test]
    fn test_schema_without_required_omits_key() {
        let empty = OperationDescriptor {
            name: "empty",
            title: "Empty",
            description: "No arguments",
            args: &[],
        };
        let schema = empty.input_schema();
        assert!(!schema.contains_key("required"));
        assert_eq!(schema["properties"], json!({}));
    }

    #[test]
    fn test_missing_required_argument() {
        assert_eq!(
            message(SAMPLE.validate(&JsonObject::new())),
            "Invalid arguments: Missing required argument: query"
        );
        assert!(SAMPLE.validate(&args(json!({ "query": null }))).is_err());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let msg = message(SAMPLE.validate(&args(json!({ "query": 5 }))));
        assert!(msg.contains("'query' must be a string"));
    }

    #[test]
    fn test_enum_membership() {
        assert!(SAMPLE
            .validate(&args(json!({ "query": "dog", "thumbnail_size": 84 })))
            .is_ok());
        let msg = message(SAMPLE.validate(&args(json!({ "query": "dog", "thumbnail_size": 100 }))));
        assert!(msg.contains("must be one of: 42, 84, 200"));
    }

    #[test]
    fn test_line_weight_number_and_range() {
        assert!(SAMPLE.validate(&args(json!({ "query": "q", "line_weight": 18 }))).is_ok());
        assert!(SAMPLE.validate(&args(json!({ "query": "q", "line_weight": "18-20" }))).is_ok());
        assert!(SAMPLE.validate(&args(json!({ "query": "q", "line_weight": 61 }))).is_err());
        assert!(SAMPLE.validate(&args(json!({ "query": "q", "line_weight": "0-20" }))).is_err());
        assert!(SAMPLE.validate(&args(json!({ "query": "q", "line_weight": "thin" }))).is_err());
    }

    #[test]
    fn test_hex_color_format() {
        assert!(SAMPLE.validate(&args(json!({ "query": "q", "color": "FF00aa" }))).is_ok());
        let msg = message(SAMPLE.validate(&args(json!({ "query": "q", "color": "#FF0000" }))));
        assert!(msg.contains("6-digit hex color"));
    }

    #[test]
    fn test_size_bounds() {
        let msg = message(SAMPLE.validate(&args(json!({ "query": "q", "size": 10 }))));
        assert!(msg.contains("between 20 and 1200"));
        assert!(SAMPLE.validate(&args(json!({ "query": "q", "size": 1200 }))).is_ok());
    }

    #[test]
    fn test_fractional_numbers_rejected() {
        let msg = message(SAMPLE.validate(&args(json!({ "query": "q", "size": 200.5 }))));
        assert_eq!(msg, "Invalid arguments: Argument 'size' must be an integer");
        assert!(SAMPLE
            .validate(&args(json!({ "query": "q", "thumbnail_size": 84.0 })))
            .is_ok());
    }

    #[test]
    fn test_normalize_turns_integral_floats_into_integers() {
        let normalized = SAMPLE.normalize(args(json!({
            "query": "q",
            "thumbnail_size": 84.0,
            "line_weight": "18-20",
            "extra": 1.0
        })));
        assert_eq!(normalized["thumbnail_size"], json!(84));
        assert!(normalized["thumbnail_size"].is_u64());
        assert_eq!(normalized["line_weight"], json!("18-20"));
        assert!(normalized["extra"].is_f64());
        assert_eq!(normalized["query"], json!("q"));
    }

    #[test]
    fn test_undeclared_arguments_ignored() {
        assert!(SAMPLE.validate(&args(json!({ "query": "q", "extra": true }))).is_ok());
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = SAMPLE.to_tool();
        assert_eq!(tool.name, "sample");
        let annotations = tool.annotations.unwrap();
        assert_eq!(annotations.title.as_deref(), Some("Sample"));
        assert_eq!(annotations.read_only_hint, Some(true));
        assert_eq!(annotations.open_world_hint, Some(true));
    }
}
