pub mod resolve;

pub use resolve::{CallerResolver, ResolverOptions};
