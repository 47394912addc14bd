//! Page-side half of localization: the DOM contract and the code that writes
//! translations through it.

pub mod applier;
pub mod binding;
pub mod document;
pub mod memory;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use applier::ContentApplier;
pub use document::{PageDocument, PageElement, Selector};
pub use memory::MemoryDocument;
#[cfg(target_arch = "wasm32")]
pub use web::WebDocument;
