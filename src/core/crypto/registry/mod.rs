/*!
Registry of installed key construction providers.

The registry is owned by the caller and handed to the resolver; there is
no process-wide instance.
*/

pub mod manager;

pub use manager::{ProviderRegistry, SharedProviderRegistry};
