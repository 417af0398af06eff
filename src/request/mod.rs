//! Request construction: parameter modeling, canonical serialization,
//! signing, and system-parameter composition.
//!
//! The pipeline runs caller params through [`compose`] (system parameters),
//! [`sign`] (shared-secret MD5 signature), and [`query_string`] (wire
//! serialization). [`signed_params`] bundles the first two steps.

mod canonical;
mod compose;
mod params;
mod sign;

pub use canonical::{query_string, sign_string};
pub use compose::{
    compose, signed_params, API_VERSION, RESPONSE_FORMAT, SIGN_METHOD, TIMESTAMP_FORMAT,
};
pub use params::{ParamValue, RequestParams};
pub use sign::sign;
