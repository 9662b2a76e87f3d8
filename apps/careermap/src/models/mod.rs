pub mod career;
pub mod profile;

pub use career::CareerRecord;
pub use profile::UserProfile;
