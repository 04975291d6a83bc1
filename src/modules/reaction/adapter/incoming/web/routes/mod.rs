mod toggle_reaction;

pub use toggle_reaction::*;
