//! Intent classifier trait definition.

use crate::error::Result;
use crate::intent::types::{Classification, ClassificationInput};

/// Intent classifier trait.
///
/// Implementations are stateless with respect to queries: the same input
/// always yields the same classification.
pub trait IntentClassifier: Send + Sync {
    /// Classify an analyzed query.
    fn classify(&self, input: &ClassificationInput<'_>) -> Result<Classification>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
