//! JSON pretty-printer.
//!
//! Deterministic recursive tree-walk over a [`JsonValue`]. A container is
//! printed on a single line unless one of its direct children is itself an
//! object or array, in which case every child gets its own line, indented
//! two spaces deeper, with the closing bracket flush with the container's
//! own indentation. Printing never fails: malformed string bytes degrade to
//! U+FFFD inside the escape codec.

use json_tree_buffers::Writer;

use crate::escape;
use crate::value::{JsonArray, JsonObject, JsonValue};

/// Tree-walk printer writing JSON text into a [`Writer`].
///
/// # Example
///
/// ```
/// use json_tree::{parse, JsonPrinter};
///
/// let tree = parse(br#"[1, "two", null]"#).unwrap();
/// let text = JsonPrinter::new().print(&tree);
/// assert_eq!(text, b"[1.000000, \"two\", null]\n");
/// ```
pub struct JsonPrinter {
    writer: Writer,
    ascii: bool,
}

impl Default for JsonPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonPrinter {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
            ascii: false,
        }
    }

    /// Escape every non-ASCII scalar in string values as `\uXXXX`
    /// (surrogate pairs above the BMP). Object keys are exempt and always
    /// pass non-ASCII bytes through.
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    /// Prints the document: the value followed by a trailing newline.
    pub fn print(&mut self, value: &JsonValue) -> Vec<u8> {
        self.writer.reset();
        self.write_value(value, 0);
        self.writer.u8(b'\n');
        self.writer.flush()
    }

    fn write_value(&mut self, value: &JsonValue, indent: usize) {
        match value {
            JsonValue::Object(object) => self.write_object(object, indent),
            JsonValue::Array(array) => self.write_array(array, indent),
            JsonValue::String(s) => {
                escape::write_escaped(&mut self.writer, s.as_bytes(), self.ascii);
            }
            JsonValue::Number(n) => self.writer.ascii(&format!("{n:.6}")),
            JsonValue::Bool(true) => self.writer.buf(b"true"),
            JsonValue::Bool(false) => self.writer.buf(b"false"),
            JsonValue::Null => self.writer.buf(b"null"),
        }
    }

    fn write_object(&mut self, object: &JsonObject, indent: usize) {
        let multi = object.iter().any(|(_, v)| v.is_object() || v.is_array());

        self.writer.u8(b'{');
        if multi {
            self.writer.u8(b'\n');
        }

        let last = object.len().saturating_sub(1);
        for (i, (key, value)) in object.iter().enumerate() {
            if multi {
                self.writer.repeat(b' ', indent + 2);
            }
            // Keys always pass non-ASCII through, even in ASCII mode.
            escape::write_escaped(&mut self.writer, key.as_bytes(), false);
            self.writer.buf(b": ");
            self.write_value(value, indent + 2);
            if i < last {
                self.writer.buf(b", ");
            }
            if multi {
                self.writer.u8(b'\n');
            }
        }

        if multi {
            self.writer.repeat(b' ', indent);
        }
        self.writer.u8(b'}');
    }

    fn write_array(&mut self, array: &JsonArray, indent: usize) {
        let multi = array.iter().any(|v| v.is_object() || v.is_array());

        self.writer.u8(b'[');
        if multi {
            self.writer.u8(b'\n');
        }

        let last = array.len().saturating_sub(1);
        for (i, value) in array.iter().enumerate() {
            if multi {
                self.writer.repeat(b' ', indent + 2);
            }
            self.write_value(value, indent + 2);
            if i < last {
                self.writer.buf(b", ");
            }
            if multi {
                self.writer.u8(b'\n');
            }
        }

        if multi {
            self.writer.repeat(b' ', indent);
        }
        self.writer.u8(b']');
    }
}
