//! Earthquake statistics lookup
//!
//! Request path, leaf-first:
//!
//! - `row_key`: (state, year, month) to `STATE#YYYY#MM`
//! - `decode`: raw column bytes to numbers
//! - `validate`: untrusted form input to a [`Query`]
//! - `classify`: storage outcome to a [`ViewModel`]
//! - `handler`: the whole request, ending in a [`SearchResponse`]

mod classify;
mod decode;
mod handler;
mod record;
mod row_key;
mod states;
mod validate;
mod view;

pub use classify::{classify, looks_like_missing, LookupOutcome};
pub use decode::{decode_decimal, decode_int64_be, DecodeError};
pub use handler::{SearchHandler, SearchParams, SearchResponse};
pub use record::{columns, QuakeRecord};
pub use row_key::{build_row_key, RowKey};
pub use states::{is_lower48, LOWER48_STATES};
pub use validate::{validate, Query, QueryEcho, ValidationOutcome};
pub use view::{ViewFields, ViewModel};
