use super::ast::*;
use std::{fmt, fmt::Write};

/// Trait for printing builder nodes to a new String allocated on the heap.
/// This is implemented by all builder nodes and can hence be used to granularly print GraphQL
/// language. However, mostly this will be used via `Query::render` and `Mutation::render`.
///
/// For convience when debugging, nodes that implement `PrintNode` also automatically
/// implement the [`fmt::Display`] trait.
pub trait PrintNode {
    /// Write a node to a buffer implementing the [Write] trait.
    ///
    /// The `level` indicates the level of nesting, which increases with the body of a
    /// [`Mutation`] document and is typically initialized as zero (`0`).
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Print a node to source text as a String allocated on the heap.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

impl PrintNode for EnumValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.raw())
    }
}

// See: https://github.com/graphql-rust/graphql-parser/blob/ff34bae/src/format.rs#L127-L167
//
// The escapes match JSON string encoding, which is what GraphQL string literals are modeled
// after and what the reference builder produced for string arguments.
fn write_escaped_string(value: &str, buffer: &mut dyn Write) -> fmt::Result {
    use lexical_core::*;
    let mut buf = [b'0'; u32::FORMATTED_SIZE];

    buffer.write_char('"')?;
    for c in value.chars() {
        match c {
            '\u{0008}' => buffer.write_str(r"\b")?,
            '\u{000C}' => buffer.write_str(r"\f")?,
            '\r' => buffer.write_str(r"\r")?,
            '\n' => buffer.write_str(r"\n")?,
            '\t' => buffer.write_str(r"\t")?,
            '"' => buffer.write_str("\\\"")?,
            '\\' => buffer.write_str(r"\\")?,
            '\u{0020}'.. => buffer.write_char(c)?,
            _ => unsafe {
                const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
                const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();
                let buf = write_with_options_unchecked::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                write!(buffer, "\\u{:0>4}", std::str::from_utf8_unchecked(buf))?;
            },
        };
    }
    buffer.write_char('"')
}

impl PrintNode for Value {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::String(value) => write_escaped_string(value, buffer),
            Value::Int(value) => write!(buffer, "{}", value),
            Value::Float(value) => write!(buffer, "{}", value),
            Value::Boolean(true) => buffer.write_str("true"),
            Value::Boolean(false) => buffer.write_str("false"),
            Value::Enum(value) => value.write_to_buffer(level, buffer),
            Value::List(value) => {
                buffer.write_str("[")?;
                let mut first = true;
                for item in value.iter() {
                    if first {
                        first = false;
                    } else {
                        buffer.write_str(", ")?;
                    }
                    item.write_to_buffer(level, buffer)?;
                }
                buffer.write_str("]")
            }
            Value::Object(value) => value.write_to_buffer(level, buffer),
            Value::Variable(name) => write!(buffer, "${}", name),
            Value::Null => buffer.write_str("null"),
            // Kept as the reference builder printed it; see the variant's docs.
            Value::Undefined => buffer.write_str("undefined"),
        }
    }
}

impl PrintNode for ObjectField {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl PrintNode for ObjectValue {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("{")?;
        let mut first = true;
        for field in self.children.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            field.write_to_buffer(level, buffer)?;
        }
        buffer.write_str("}")
    }
}

impl PrintNode for Argument {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl PrintNode for Arguments {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            let mut first = true;
            for argument in self.children.iter() {
                if first {
                    first = false;
                } else {
                    buffer.write_str(", ")?;
                }
                argument.write_to_buffer(level, buffer)?;
            }
            buffer.write_str(")")
        } else {
            Ok(())
        }
    }
}

impl PrintNode for Selection {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Selection::Field(field) => buffer.write_str(field),
            Selection::Alias { alias, field } => write!(buffer, "{}: {}", alias, field),
            Selection::Query(query) => query.write_to_buffer(level, buffer),
        }
    }
}

impl PrintNode for SelectionSet {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("{ ")?;
        let mut first = true;
        for selection in self.selections.iter() {
            if first {
                first = false;
            } else {
                buffer.write_str(", ")?;
            }
            selection.write_to_buffer(level, buffer)?;
        }
        buffer.write_str(" }")
    }
}

impl PrintNode for VariableDefinition {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}: {}", self.name, self.of_type)
    }
}

impl PrintNode for VariableDefinitions {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_str("(")?;
            let mut first = true;
            for var_definition in self.children.iter() {
                if first {
                    first = false;
                } else {
                    buffer.write_str(", ")?;
                }
                var_definition.write_to_buffer(level, buffer)?;
            }
            buffer.write_str(")")
        } else {
            Ok(())
        }
    }
}

impl PrintNode for Query {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if let Some(alias) = &self.alias {
            write!(buffer, "{}: {}", alias, self.name)?;
        } else {
            buffer.write_str(&self.name)?;
        };
        self.arguments.write_to_buffer(level, buffer)?;
        if let Some(selection_set) = &self.selection_set {
            buffer.write_str(" ")?;
            selection_set.write_to_buffer(level, buffer)?;
        };
        Ok(())
    }
}

impl PrintNode for Mutation {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        let level = level + 1;
        buffer.write_str(&self.name)?;
        self.variables.write_to_buffer(level, buffer)?;
        buffer.write_str(" {\n")?;
        write_indent(level, buffer)?;
        if let Some(alias) = &self.alias {
            write!(buffer, "{}: {}", alias, self.name)?;
        } else {
            buffer.write_str(&self.name)?;
        };
        // The inner field call forwards every declared variable in declaration order.
        if !self.variables.is_empty() {
            buffer.write_str("(")?;
            let mut first = true;
            for var_definition in self.variables.children.iter() {
                if first {
                    first = false;
                } else {
                    buffer.write_str(", ")?;
                }
                write!(buffer, "{}: ${}", var_definition.name, var_definition.name)?;
            }
            buffer.write_str(")")?;
        }
        buffer.write_str(" ")?;
        self.selection_set.write_to_buffer(level, buffer)?;
        buffer.write_char('\n')?;
        write_indent(level - 1, buffer)?;
        buffer.write_char('}')
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

#[inline(always)]
fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?
    }
    Ok(())
}
