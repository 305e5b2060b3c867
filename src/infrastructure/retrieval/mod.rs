mod in_memory;
mod managed;

pub use in_memory::InMemoryKnowledgeBase;
pub use managed::ManagedKnowledgeBase;
