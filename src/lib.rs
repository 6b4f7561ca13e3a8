pub mod client;
pub mod error;
pub mod fetch;
pub mod types;
pub mod urls;
pub mod validate;

pub use client::{EventsClient, EventsConfig};
pub use error::{Error, HttpError, Result, ValidationError};
pub use fetch::{AuthFetch, BearerFetch};
pub use types::{Credentials, FetchOptions, QueryParams, RequestOptions, ResponseBody};
pub use urls::{ApiUrlBuilder, UrlBuilder};
pub use validate::{RequiredFields, Validator};
