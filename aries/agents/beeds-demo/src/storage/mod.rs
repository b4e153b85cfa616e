pub(crate) mod agent_storage_inmem;
pub mod invitation_store;

use crate::error::AgentResult;

pub(crate) trait AgentStorage<T>
where
    T: Clone,
{
    fn get(&self, id: &str) -> AgentResult<T>;
    fn insert(&self, id: &str, obj: T) -> AgentResult<String>;
    fn contains_key(&self, id: &str) -> bool;
    /// Applies `closure` to the stored object while holding its lock.
    fn update<F, R>(&self, id: &str, closure: F) -> AgentResult<R>
    where
        F: FnOnce(&mut T) -> AgentResult<R>;
}
