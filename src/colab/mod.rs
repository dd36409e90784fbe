//! Core Colab helper operations

pub mod browser;
pub mod error;
pub mod notebook_id;
pub mod recent;
pub mod resolve;
pub mod settings;

// Re-exports for library consumers
#[allow(unused_imports)]
pub use error::ColabError;
#[allow(unused_imports)]
pub use notebook_id::extract_notebook_id;
#[allow(unused_imports)]
pub use resolve::resolve_notebook_url;
