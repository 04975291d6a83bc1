mod toggle_post_reaction_service;

pub use toggle_post_reaction_service::TogglePostReactionService;
