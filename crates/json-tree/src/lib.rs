//! json-tree — parse JSON text into an owned value tree, build and mutate
//! trees programmatically, and print them back as JSON text.
//!
//! The tokenizer feeds a grammar-driven builder that constructs the
//! [`JsonValue`] tree; the printer walks the tree back into text. Strings go
//! through a UTF-8-aware escape codec in both directions: surrogate pairs
//! and malformed escapes are rejected while parsing, malformed payload
//! bytes degrade to U+FFFD while printing.
//!
//! # Example
//!
//! ```
//! use json_tree::{parse, JsonPrinter, JsonValue};
//!
//! let mut tree = parse(br#"{"greeting": "hi"}"#).unwrap();
//! if let Some(object) = tree.as_object_mut() {
//!     object.insert("count", JsonValue::from(2.0));
//! }
//! let text = JsonPrinter::new().print(&tree);
//! assert_eq!(text, b"{\"greeting\": \"hi\", \"count\": 2.000000}\n");
//! ```

pub mod error;
pub mod escape;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod utf8;
pub mod value;

pub use error::JsonError;
pub use lexer::{Lexer, Token};
pub use parser::{parse, Parser};
pub use printer::JsonPrinter;
pub use value::{JsonArray, JsonKind, JsonObject, JsonString, JsonValue};
