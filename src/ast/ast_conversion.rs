use super::ast::*;

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<EnumValue> for Value {
    #[inline]
    fn from(value: EnumValue) -> Self {
        Value::Enum(value)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<ObjectValue> for Value {
    #[inline]
    fn from(value: ObjectValue) -> Self {
        Value::Object(value)
    }
}

impl<N: Into<String>> From<Vec<(N, Value)>> for Value {
    #[inline]
    fn from(value: Vec<(N, Value)>) -> Self {
        Value::Object(value.into_iter().collect())
    }
}

impl<N: Into<String>> FromIterator<(N, Value)> for ObjectValue {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        ObjectValue {
            children: iter
                .into_iter()
                .map(|(name, value)| ObjectField {
                    name: name.into(),
                    value,
                })
                .collect(),
        }
    }
}

impl From<&str> for Selection {
    #[inline]
    fn from(field: &str) -> Self {
        Selection::Field(field.to_string())
    }
}

impl From<String> for Selection {
    #[inline]
    fn from(field: String) -> Self {
        Selection::Field(field)
    }
}

impl From<Query> for Selection {
    #[inline]
    fn from(query: Query) -> Self {
        Selection::Query(query)
    }
}

impl IntoIterator for ObjectValue {
    type Item = ObjectField;
    type IntoIter = std::vec::IntoIter<ObjectField>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl IntoIterator for Arguments {
    type Item = Argument;
    type IntoIter = std::vec::IntoIter<Argument>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl IntoIterator for SelectionSet {
    type Item = Selection;
    type IntoIter = std::vec::IntoIter<Selection>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.selections.into_iter()
    }
}

impl IntoIterator for VariableDefinitions {
    type Item = VariableDefinition;
    type IntoIter = std::vec::IntoIter<VariableDefinition>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}
