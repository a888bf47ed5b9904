//! Nested querystrings to structured values and back.
//!
//! Querystrings are not formally defined and loosely take the form of
//! _nested_ urlencoded queries. This crate converts between a [`Map`] of
//! [`Value`]s and such strings:
//!
//! - [`encode`] walks a record and emits one `key=value` segment per
//!   scalar. Nested records use bracket keys (`user[id]=1`), or dot keys
//!   (`user.id=1`) in strict mode. Sequences repeat their key
//!   (`tags=a&tags=b`).
//! - [`decode`] reads either key form back into a record. A key seen more
//!   than once collects its values into a sequence.
//!
//! Both are total: neither fails on any input. Round-tripping is only
//! approximate, since a querystring does not record whether `1` was a
//! number or a string, and a sequence of one element reads back as a bare
//! value.
//!
//! ## Serde
//!
//! [`to_string`] and [`from_str`] run any serde type through the same
//! codec, by way of [`to_value`] and [`from_value`]. On the way back in,
//! string leaves are parsed into the numbers and booleans the target
//! type asks for.
//!
//! ```
//! # use serde::{Deserialize, Serialize};
//! #[derive(Debug, PartialEq, Deserialize, Serialize)]
//! struct Address {
//!     city: String,
//!     postcode: String,
//! }
//!
//! #[derive(Debug, PartialEq, Deserialize, Serialize)]
//! struct QueryParams {
//!     id: u8,
//!     name: String,
//!     address: Address,
//!     user_ids: Vec<u8>,
//! }
//!
//! let params = QueryParams {
//!     id: 42,
//!     name: "Acme".to_string(),
//!     address: Address {
//!         city: "Carrot City".to_string(),
//!         postcode: "12345".to_string(),
//!     },
//!     user_ids: vec![1, 2, 3, 4],
//! };
//!
//! let config = urlchemy::Config::new().encode(false);
//! let encoded = config.serialize_string(&params).unwrap();
//! assert_eq!(
//!     encoded,
//!     "id=42&name=Acme&address[city]=Carrot City&address[postcode]=12345&\
//!      user_ids=1&user_ids=2&user_ids=3&user_ids=4"
//! );
//!
//! let rec_params: QueryParams = urlchemy::from_str(
//!     "name=Acme&id=42&address[postcode]=12345&\
//!      address.city=Carrot%20City&user_ids=1&user_ids=2&user_ids=3&user_ids=4",
//! )
//! .unwrap();
//! assert_eq!(rec_params, params);
//! ```

mod config;
mod de;
mod error;
mod ser;
mod value;

pub use config::Config;
#[doc(inline)]
pub use de::{decode, decode_strict, from_str};
pub use error::{Error, Result};
#[doc(inline)]
pub use ser::{encode, to_string};
pub use value::{Map, Number, Value, from_value, to_value};
