use super::printer::PrintNode;
use crate::error::{Error, ErrorType, Result};

/// Node of an enum value.
///
/// Wraps a raw identifier that must be emitted unquoted in the output document, e.g. "`MOBILE_WEB`",
/// rather than as a quoted string literal.
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct EnumValue {
    pub(crate) value: String,
}

impl EnumValue {
    /// Create a new enum value from a raw identifier.
    ///
    /// The identifier ends up in the output document verbatim, so an empty identifier is rejected
    /// here rather than producing a syntactically broken document later.
    pub fn new<S: Into<String>>(value: S) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            Err(Error::new(
                "Enum value can not be empty",
                ErrorType::InvalidEnumValue,
            ))
        } else {
            Ok(EnumValue { value })
        }
    }

    /// Returns the raw identifier this enum value prints as.
    #[inline]
    pub fn raw(&self) -> &str {
        self.value.as_ref()
    }
}

/// Create a [Value] wrapping a raw enum identifier.
///
/// Shorthand for `EnumValue::new(raw).map(Value::Enum)`.
pub fn enum_value<S: Into<String>>(raw: S) -> Result<Value> {
    EnumValue::new(raw).map(Value::Enum)
}

/// Node of possible input values.
///
/// Fields and operations accept input values as arguments. This is a closed union of every value
/// shape the builder can serialize, so no runtime shape-sniffing is ever needed.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    /// A string, printed as a double-quoted, JSON-escaped literal.
    String(String),
    /// A 64-bit integer, printed in its native textual form.
    Int(i64),
    /// A double precision float, printed in its native textual form.
    Float(f64),
    /// A boolean, printed as `true` or `false`.
    Boolean(bool),
    /// A raw enum identifier, printed unquoted.
    Enum(EnumValue),
    /// An ordered list of values, printed as `[...]`.
    List(Vec<Value>),
    /// An ordered list of named values, printed as `{...}`.
    Object(ObjectValue),
    /// A variable identifier, printed with a `$` prefix.
    Variable(String),
    /// The JSON-like `null` value, printed as the bare literal `null`.
    Null,
    /// An explicitly absent value, printed as the bare literal `undefined`.
    ///
    /// This mirrors the reference builder's output when a caller passes an empty placeholder
    /// instead of omitting the argument. The output is not valid GraphQL input syntax and is kept
    /// for compatibility rather than normalized to `null`.
    Undefined,
}

/// Node for a field of an Object value.
///
/// An Object's contents may be any arbitrary value, which enables arbitrarily deep argument trees.
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField {
    pub name: String,
    pub value: Value,
}

/// Node for an Object value, which is a list of Object fields.
///
/// Fields are kept in construction order, and print in that order. Output order is part of this
/// crate's contract, which is why this is an association list and not a hash map.
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone, Default)]
pub struct ObjectValue {
    pub children: Vec<ObjectField>,
}

impl ObjectValue {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument {
    pub name: String,
    pub value: Value,
}

/// Node for a list of Arguments attached to a field invocation.
///
/// Arguments accumulate in the order they were added across repeated [`Query::filter`] calls.
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Arguments {
    pub children: Vec<Argument>,
}

impl Arguments {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Node of a selection as contained inside a [`SelectionSet`].
///
/// This is a closed union of the selection item shapes the builder supports: a plain field (or a
/// pre-joined list of fields passed through verbatim), an aliased field, and an embedded [`Query`]
/// that renders recursively in place.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection {
    Field(String),
    Alias { alias: String, field: String },
    Query(Query),
}

impl Selection {
    /// Create a plain field selection from its output text.
    #[inline]
    pub fn field<S: Into<String>>(field: S) -> Self {
        Selection::Field(field.into())
    }

    /// Create an aliased field selection, printed as `alias: field`.
    #[inline]
    pub fn alias<A: Into<String>, F: Into<String>>(alias: A, field: F) -> Self {
        Selection::Alias {
            alias: alias.into(),
            field: field.into(),
        }
    }

    /// Create a nested selection: a field named `name` with its own sub-selection.
    ///
    /// This is the structured equivalent of the reference builder's `{name: [..]}` selection
    /// shorthand and builds the same embedded [`Query`]. Fails with `MissingSelection` when
    /// `items` is empty.
    pub fn nested<N, T, I>(name: N, items: I) -> Result<Self>
    where
        N: Into<String>,
        T: Into<Selection>,
        I: IntoIterator<Item = T>,
    {
        Ok(Selection::Query(Query::new(name).find(items)?))
    }
}

/// Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone, Default)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
}

impl SelectionSet {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// Node for a mutation variable declaration, e.g. `$categoryId: ID!`.
///
/// The type is carried as a plain GraphQL type string and printed verbatim.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct VariableDefinition {
    pub name: String,
    pub of_type: String,
}

/// Node for a list of mutation variable declarations.
///
/// Declarations are fixed at construction and print in construction order, both in the outer
/// declaration clause and in the inner forwarding clause of a [`Mutation`] document.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct VariableDefinitions {
    pub children: Vec<VariableDefinition>,
}

impl VariableDefinitions {
    /// Checks whether this list contains any variable declarations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A composable builder for one GraphQL field invocation.
///
/// A `Query` carries a field name, an optional alias, an accumulated argument list, and an
/// optional selection set. All mutators are fluent and consume the builder, so a node is built in
/// a single ownership chain:
///
/// ```
/// use graphql_query_builder::ast::*;
///
/// let query = Query::new("user")
///     .filter([("id", Value::Int(12345))])
///     .find(["name"])
///     .unwrap();
/// assert_eq!(query.render(), "user(id: 12345) { name }");
/// ```
///
/// A `Query` may itself be embedded as a [`Selection`] inside another query's selection set, in
/// which case rendering the parent recurses into it.
#[derive(Debug, PartialEq, Clone)]
pub struct Query {
    /// The field name this invocation selects.
    pub name: String,
    /// An optional alias, which requests the field under a different name in the response.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<String>,
    /// Arguments that are passed to the field.
    ///
    /// When no arguments were added this is an empty list, as can be checked using
    /// `Arguments::is_empty`, and no argument clause is printed.
    pub arguments: Arguments,
    /// The field's sub-selection.
    ///
    /// `None` means a selection was never requested and no braces are printed. A present
    /// selection set always prints its braces, even when its parsed body is empty.
    pub selection_set: Option<SelectionSet>,
}

impl Query {
    /// Create a new query node for the field invocation `name`.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Query {
            name: name.into(),
            alias: None,
            arguments: Arguments::default(),
            selection_set: None,
        }
    }

    /// Set the alias under which this field is requested, overwriting any previous alias.
    pub fn set_alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Append arguments to this node's argument clause.
    ///
    /// May be called repeatedly; every call appends in iteration order and never replaces
    /// previously added arguments. An entry whose value is an empty object is dropped entirely,
    /// since it would otherwise print as a `name: {}` argument that selects nothing. Empty
    /// objects nested deeper inside a retained value still print as `{}`.
    pub fn filter<N, I>(mut self, args: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, Value)>,
    {
        for (name, value) in args {
            if matches!(&value, Value::Object(object) if object.is_empty()) {
                continue;
            }
            self.arguments.children.push(Argument {
                name: name.into(),
                value,
            });
        }
        self
    }

    /// Set this node's selection set, replacing any previous one.
    ///
    /// Accepts anything convertible to selection items, e.g. plain field names:
    ///
    /// ```
    /// use graphql_query_builder::ast::*;
    ///
    /// let query = Query::new("user").find(["firstname", "lastname"]).unwrap();
    /// assert_eq!(query.render(), "user { firstname, lastname }");
    /// ```
    ///
    /// Fails with `MissingSelection` when `selection` yields no items.
    pub fn find<T, I>(mut self, selection: I) -> Result<Self>
    where
        T: Into<Selection>,
        I: IntoIterator<Item = T>,
    {
        let selections: Vec<Selection> = selection.into_iter().map(Into::into).collect();
        if selections.is_empty() {
            return Err(Error::new(
                "Find value can not be empty",
                ErrorType::MissingSelection,
            ));
        }
        self.selection_set = Some(SelectionSet { selections });
        Ok(self)
    }

    /// Render this node to GraphQL field invocation text.
    ///
    /// Rendering reads the node without modifying it; repeated calls on an unmodified node
    /// return identical strings.
    pub fn render(&self) -> String {
        self.print()
    }
}

/// A builder for a GraphQL mutation operation document.
///
/// A `Mutation` carries an operation name, an ordered list of variable declarations fixed at
/// construction, an optional alias for the inner field invocation, and a selection list.
/// Rendering produces the two-level document that declares the variables on the outer operation
/// and forwards each of them to the inner field call:
///
/// ```text
/// addProduct($categoryId: ID!, $productData: ProductInput!) {
///   addProduct(categoryId: $categoryId, productData: $productData) { id, title }
/// }
/// ```
///
/// Unlike [`Query::find`], the selection list is not validated when it is stored: an empty
/// selection only fails once [`Mutation::render`] is called.
#[derive(Debug, PartialEq, Clone)]
pub struct Mutation {
    /// The mutation operation's name, used both for the outer operation and the inner field call.
    pub name: String,
    /// An optional alias for the inner field invocation.
    pub alias: Option<String>,
    /// The variable declarations, fixed at construction.
    pub variables: VariableDefinitions,
    /// The selection of the inner field call. Replaced wholesale by [`Mutation::find`] and
    /// validated only at render time.
    pub selection_set: SelectionSet,
}

impl Mutation {
    /// Create a new mutation node with its variable declarations and initial selection.
    ///
    /// `variables` is an ordered sequence of `(name, type)` pairs; the declaration order is the
    /// output order. The selection is stored as passed, without validation.
    pub fn new<S, VN, VT, V, T, I>(name: S, variables: V, selection: I) -> Self
    where
        S: Into<String>,
        VN: Into<String>,
        VT: Into<String>,
        V: IntoIterator<Item = (VN, VT)>,
        T: Into<Selection>,
        I: IntoIterator<Item = T>,
    {
        Mutation {
            name: name.into(),
            alias: None,
            variables: VariableDefinitions {
                children: variables
                    .into_iter()
                    .map(|(name, of_type)| VariableDefinition {
                        name: name.into(),
                        of_type: of_type.into(),
                    })
                    .collect(),
            },
            selection_set: SelectionSet {
                selections: selection.into_iter().map(Into::into).collect(),
            },
        }
    }

    /// Set the alias of the inner field invocation, overwriting any previous alias.
    pub fn set_alias<S: Into<String>>(mut self, alias: S) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Replace the stored selection list wholesale.
    ///
    /// Deliberately not chainable: the reference builder's mutation `find` returns nothing, and
    /// this asymmetry with [`Query::find`] is preserved. The new list is not validated here.
    pub fn find<T, I>(&mut self, selection: I)
    where
        T: Into<Selection>,
        I: IntoIterator<Item = T>,
    {
        self.selection_set = SelectionSet {
            selections: selection.into_iter().map(Into::into).collect(),
        };
    }

    /// Render this node to GraphQL mutation document text.
    ///
    /// The selection list is validated here, not when it was stored: a mutation whose selection
    /// is empty fails with `MissingSelection` at this point.
    pub fn render(&self) -> Result<String> {
        if self.selection_set.is_empty() {
            return Err(Error::new(
                "Find value can not be empty",
                ErrorType::MissingSelection,
            ));
        }
        Ok(self.print())
    }
}
