//! Domain logic for number classification
//!
//! - `number` - parsing and the pure classification predicates
//! - `facts` - best-effort fun-fact lookup from the external provider

pub mod facts;
pub mod number;

pub use facts::{DisabledFacts, FactProvider, NumbersApiClient};
pub use number::{Classification, NumberValue};
