pub mod missing_primary_key;
pub mod queryable_char_equality;
