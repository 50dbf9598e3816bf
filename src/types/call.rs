//! Description of an intercepted call, as supplied by the interception layer.

use std::fmt;

use super::{CallMetadata, DynamicKey, DynamicKeyGroup, EvictDirective, Producer, ReturnShape};

/// Semantic role an argument can play in a cached call.
///
/// At most one argument per role is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    DynamicKey,
    DynamicKeyGroup,
    EvictDirective,
    Producer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DynamicKey => "DynamicKey",
            Self::DynamicKeyGroup => "DynamicKeyGroup",
            Self::EvictDirective => "EvictDirective",
            Self::Producer => "Producer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One argument value of an intercepted call, tagged with its role.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument<T> {
    DynamicKey(DynamicKey),
    DynamicKeyGroup(DynamicKeyGroup),
    Evict(EvictDirective),
    Producer(Producer<T>),
    /// An argument with no caching role, identified by its type name.
    Other(String),
}

impl<T> Argument<T> {
    pub fn other(type_name: impl Into<String>) -> Self {
        Self::Other(type_name.into())
    }

    /// The role this argument plays, or `None` for [`Argument::Other`].
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::DynamicKey(_) => Some(Role::DynamicKey),
            Self::DynamicKeyGroup(_) => Some(Role::DynamicKeyGroup),
            Self::Evict(_) => Some(Role::EvictDirective),
            Self::Producer(_) => Some(Role::Producer),
            Self::Other(_) => None,
        }
    }
}

impl<T> From<DynamicKey> for Argument<T> {
    fn from(key: DynamicKey) -> Self {
        Self::DynamicKey(key)
    }
}

impl<T> From<DynamicKeyGroup> for Argument<T> {
    fn from(key: DynamicKeyGroup) -> Self {
        Self::DynamicKeyGroup(key)
    }
}

impl<T> From<EvictDirective> for Argument<T> {
    fn from(directive: EvictDirective) -> Self {
        Self::Evict(directive)
    }
}

impl<T> From<Producer<T>> for Argument<T> {
    fn from(producer: Producer<T>) -> Self {
        Self::Producer(producer)
    }
}

/// An intercepted call: identity, declared return shape, arguments, metadata.
///
/// ```rust
/// # use cachet::{CallDescription, CallMetadata, DynamicKey, Producer, ReturnShape, TimeUnit};
/// let call = CallDescription::new("fetchUser", ReturnShape::raw())
///     .arg(DynamicKey::new(42))
///     .arg(Producer::ready("ada".to_string()))
///     .metadata(CallMetadata::new().lifetime(10, TimeUnit::Minutes));
/// assert_eq!(call.arguments().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CallDescription<T> {
    identity: String,
    return_shape: ReturnShape,
    arguments: Vec<Argument<T>>,
    metadata: Option<CallMetadata>,
}

impl<T> CallDescription<T> {
    pub fn new(identity: impl Into<String>, return_shape: ReturnShape) -> Self {
        Self {
            identity: identity.into(),
            return_shape,
            arguments: Vec::new(),
            metadata: None,
        }
    }

    /// Append an argument, keeping declaration order.
    pub fn arg(mut self, argument: impl Into<Argument<T>>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn metadata(mut self, metadata: CallMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn return_shape(&self) -> &ReturnShape {
        &self.return_shape
    }

    pub fn arguments(&self) -> &[Argument<T>] {
        &self.arguments
    }

    pub fn attached_metadata(&self) -> Option<&CallMetadata> {
        self.metadata.as_ref()
    }
}
