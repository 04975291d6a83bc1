pub mod user_profiles;
