mod change_normalizer;
mod impact_resolver;
mod reverse_graph_builder;

pub use change_normalizer::{ChangeNormalizer, NormalizedChanges};
pub use impact_resolver::ImpactResolver;
pub use reverse_graph_builder::ReverseGraphBuilder;
