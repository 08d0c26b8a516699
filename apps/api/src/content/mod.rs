// Note content pipeline: stored content -> markdown -> presentation tree -> HTML.
// Every stage is a pure, synchronous function and never fails on its input.

pub mod block;
pub mod html;
pub mod normalize;
pub mod render;
pub mod styles;

pub use block::NoteContent;
pub use html::to_html;
pub use normalize::{excerpt, normalize};
pub use render::{render, Document, RenderOptions};
