use crate::ast::*;
use crate::error::{Error, ErrorType, Result};
use serde_json::Value as JSValue;

impl From<&JSValue> for Value {
    fn from(value: &JSValue) -> Self {
        match value {
            JSValue::Null => Value::Null,
            JSValue::Bool(value) => Value::Boolean(*value),
            JSValue::Number(number) => match number.as_i64() {
                Some(int) => Value::Int(int),
                None => Value::Float(number.as_f64().unwrap_or(0.0)),
            },
            JSValue::String(value) => Value::String(value.clone()),
            JSValue::Array(items) => Value::List(items.iter().map(Value::from).collect()),
            JSValue::Object(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(name, value)| (name.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<JSValue> for Value {
    #[inline]
    fn from(value: JSValue) -> Self {
        Value::from(&value)
    }
}

/// Convert a JSON selection list into typed [Selection] items.
///
/// A JSON array is used as the item list directly; any other value is treated as a single-item
/// list, except that a falsy value — `null`, `false`, `0`, or an empty string — fails with
/// `MissingSelection` like an empty list does. Per item the reference builder's dispatch
/// applies: a string passes through as a field, a single-entry object is an alias (or, when its
/// value is an array, a nested query), and everything else is rejected.
pub fn selections_from_json(value: &JSValue) -> Result<Vec<Selection>> {
    let items = match value {
        JSValue::Array(items) => items.as_slice(),
        other if is_falsy(other) => {
            return Err(Error::new(
                "Find value can not be empty",
                ErrorType::MissingSelection,
            ))
        }
        other => std::slice::from_ref(other),
    };
    if items.is_empty() {
        return Err(Error::new(
            "Find value can not be empty",
            ErrorType::MissingSelection,
        ));
    }
    items.iter().map(selection_from_json).collect()
}

fn is_falsy(value: &JSValue) -> bool {
    match value {
        JSValue::Null => true,
        JSValue::Bool(value) => !value,
        JSValue::String(value) => value.is_empty(),
        JSValue::Number(number) => number.as_f64() == Some(0.0),
        _ => false,
    }
}

fn selection_from_json(item: &JSValue) -> Result<Selection> {
    match item {
        JSValue::String(field) => Ok(Selection::Field(field.clone())),
        JSValue::Object(entries) => {
            let mut entries = entries.iter();
            match (entries.next(), entries.next()) {
                // The `{name: [..]}` shorthand for a nested selection.
                (Some((alias, items @ JSValue::Array(_))), None) => Ok(Selection::Query(
                    Query::new(alias.as_str()).find(selections_from_json(items)?)?,
                )),
                (Some((alias, JSValue::String(field))), None) => {
                    Ok(Selection::alias(alias.as_str(), field.as_str()))
                }
                // An object as the alias value has no selection meaning; JSON text would not
                // be valid selection syntax, so it is rejected rather than interpolated.
                (Some((_, JSValue::Object(_))), None) => Err(Error::new_with_context(
                    "Cannot handle an object as an alias value".to_string(),
                    item.to_string(),
                    ErrorType::UnsupportedSelectionValue,
                )),
                (Some((alias, value)), None) => {
                    // Scalar values are carried over as literal field text, as the
                    // reference builder interpolated them.
                    Ok(Selection::alias(alias.as_str(), value.to_string()))
                }
                _ => Err(Error::new_with_context(
                    "Alias objects should only have exactly one entry".to_string(),
                    item.to_string(),
                    ErrorType::AmbiguousAlias,
                )),
            }
        }
        other => Err(Error::new_with_context(
            "Cannot handle Find value".to_string(),
            other.to_string(),
            ErrorType::UnsupportedSelectionValue,
        )),
    }
}

fn arguments_from_json(args: &JSValue) -> Result<Vec<(String, Value)>> {
    match args {
        JSValue::Object(entries) => Ok(entries
            .iter()
            .map(|(name, value)| (name.clone(), Value::from(value)))
            .collect()),
        other => Err(Error::new_with_context(
            "Filter arguments must be an object".to_string(),
            other.to_string(),
            ErrorType::InvalidArgument,
        )),
    }
}

impl Query {
    /// The reference builder's two-argument constructor.
    ///
    /// A JSON string sets the alias and a JSON object is passed to [`Query::filter`]
    /// immediately. Explicitly passing JSON `null` — the caller's placeholder for "no value" —
    /// fails with `InvalidArgument`, as does any other JSON type.
    pub fn with<S: Into<String>>(name: S, alias_or_args: JSValue) -> Result<Self> {
        let query = Query::new(name);
        match alias_or_args {
            JSValue::String(alias) => Ok(query.set_alias(alias)),
            JSValue::Object(_) => query.filter_json(&alias_or_args),
            JSValue::Null => Err(Error::new(
                "You have passed null as the second argument to 'Query'",
                ErrorType::InvalidArgument,
            )),
            other => Err(Error::new_with_context(
                "The second argument to 'Query' should be an alias name (String) or filter arguments (Object)".to_string(),
                other.to_string(),
                ErrorType::InvalidArgument,
            )),
        }
    }

    /// Append arguments from a JSON object, like [`Query::filter`] does for typed entries.
    ///
    /// Fails with `InvalidArgument` when `args` is not a JSON object.
    pub fn filter_json(self, args: &JSValue) -> Result<Self> {
        Ok(self.filter(arguments_from_json(args)?))
    }

    /// Set the selection from a JSON selection list, like [`Query::find`] does for typed items.
    pub fn find_json(self, selection: &JSValue) -> Result<Self> {
        self.find(selections_from_json(selection)?)
    }
}

impl Mutation {
    /// Replace the stored selection list from a JSON selection list.
    ///
    /// The JSON shapes are checked during conversion; the emptiness of the resulting selection
    /// is still only checked by [`Mutation::render`].
    pub fn find_json(&mut self, selection: &JSValue) -> Result<()> {
        self.find(selections_from_json(selection)?);
        Ok(())
    }
}
