//! Printable documents: the quote rendered as a standalone HTML page and
//! the French amount-in-words spelling used in its closing formula.

pub mod quote_doc;
pub mod words;

pub use quote_doc::{render_quote_html, QuoteRenderContext};
pub use words::{amount_to_words, number_to_words};
