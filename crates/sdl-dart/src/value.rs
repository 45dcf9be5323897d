use apollo_compiler::ast;
use indexmap::IndexMap;

use crate::GenerateError;

/// A GraphQL literal decoded into plain data.
///
/// *Value*:
///     Variable | IntValue | FloatValue | StringValue | BooleanValue | NullValue | EnumValue | ListValue | ObjectValue
///
/// Detailed documentation can be found in [GraphQL spec](https://spec.graphql.org/October2021/#Value).
///
/// ### Example
/// ```rust
/// use apollo_compiler::ast;
/// use sdl_dart::Value;
///
/// let literal = ast::Value::String("use displayName".to_string());
///
/// assert_eq!(
///     Value::try_from(&literal),
///     Ok(Value::String("use displayName".to_string()))
/// );
/// ```
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// A variable reference, decoded to its name without the `$`.
    Variable(String),
    /// Int value example: `7`
    Int(i64),
    /// Float value example: `25.4`
    Float(f64),
    /// String value example: `"My string"`
    String(String),
    /// Boolean value example: `false`
    Boolean(bool),
    /// Null value example: `null`
    Null,
    /// Enum value example: `VARIANT_EXAMPLE`
    Enum(String),
    /// List value example: `[1, 2, 3]`
    List(Vec<Value>),
    /// Object value example: `{ first: 1, second: 2 }`
    Object(IndexMap<String, Value>),
}

impl Value {
    /// The contained string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }
}

impl TryFrom<&ast::Value> for Value {
    type Error = GenerateError;

    fn try_from(node: &ast::Value) -> Result<Self, Self::Error> {
        let value = match node {
            ast::Value::Variable(name) => Self::Variable(name.to_string()),
            ast::Value::Int(int) => Self::Int(int.as_str().parse()?),
            ast::Value::Float(float) => Self::Float(float.as_str().parse()?),
            ast::Value::String(string) => Self::String(string.clone()),
            ast::Value::Boolean(boolean) => Self::Boolean(*boolean),
            ast::Value::Null => Self::Null,
            ast::Value::Enum(name) => Self::Enum(name.to_string()),
            ast::Value::List(list) => {
                let values = list
                    .iter()
                    .map(|value| Self::try_from(&**value))
                    .collect::<Result<Vec<_>, GenerateError>>()?;
                Self::List(values)
            }
            ast::Value::Object(object) => {
                let fields = object
                    .iter()
                    .map(|(name, value)| Ok((name.to_string(), Self::try_from(&**value)?)))
                    .collect::<Result<IndexMap<_, _>, GenerateError>>()?;
                Self::Object(fields)
            }
        };

        Ok(value)
    }
}
