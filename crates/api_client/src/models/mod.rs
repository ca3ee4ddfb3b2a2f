pub mod gender;
pub use self::gender::Gender;
pub mod postgrest_error;
pub use self::postgrest_error::PostgrestError;
pub mod valentine_profile;
pub use self::valentine_profile::ValentineProfile;
