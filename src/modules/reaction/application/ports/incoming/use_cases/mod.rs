mod toggle_post_reaction_use_case;

pub use toggle_post_reaction_use_case::{TogglePostReactionError, TogglePostReactionUseCase};
