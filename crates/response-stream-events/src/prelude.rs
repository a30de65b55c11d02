//! Common imports for consumers that match on classified events.
pub use crate::event::*;
pub use crate::{
    Classifier, ClassifierConfig, ClassifyError, LifecyclePhase, ResponseEnvelope,
    ResponseSnapshot, classify, classify_str,
};
