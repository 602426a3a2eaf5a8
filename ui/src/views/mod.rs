mod home;
mod profile;

pub use home::Home;
pub use profile::Profile;
