pub mod likes;
pub mod shares;

/// Runs `$body` with `$table` bound to the entity module backing `$kind`.
/// Both tables share the same columns, so one body serves either kind.
macro_rules! with_reaction_table {
    ($kind:expr, $table:ident => $body:expr) => {
        match $kind {
            $crate::modules::reaction::application::domain::entities::ReactionKind::Like => {
                use $crate::modules::reaction::adapter::outgoing::sea_orm_entity::likes as $table;
                $body
            }
            $crate::modules::reaction::application::domain::entities::ReactionKind::Share => {
                use $crate::modules::reaction::adapter::outgoing::sea_orm_entity::shares as $table;
                $body
            }
        }
    };
}

pub(crate) use with_reaction_table;
