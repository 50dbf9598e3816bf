//! Public types for the Cachet API.

mod call;
mod evict;
mod key;
mod metadata;
mod producer;
mod shape;

pub use call::{Argument, CallDescription, Role};
pub use evict::{EvictDirective, EvictTarget};
pub use key::{DynamicKey, DynamicKeyGroup};
pub use metadata::{CallMetadata, LifeCache, TimeUnit};
pub use producer::{Produce, Producer};
pub use shape::{Payload, ReturnShape};
