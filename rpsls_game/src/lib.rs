mod choice;
mod format;
mod interaction;
mod table;

pub use choice::{normalize, Choice, Normalized};
pub use format::{format_outcome, welcome_banner};
pub use interaction::{InteractionResult, Outcome};
pub use table::{resolve, DOMINANCE_TABLE};
