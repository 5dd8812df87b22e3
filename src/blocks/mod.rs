//! Block Kit model.
//!
//! Serde records mirroring the platform's UI schema: composition objects,
//! interactive elements, layout blocks, and the two surfaces built from them
//! (views and legacy dialogs).

mod composition;
mod dialog;
mod elements;
mod layout;
mod tagged;
mod view;

pub use composition::*;
pub use dialog::*;
pub use elements::*;
pub use layout::*;
pub use view::*;
