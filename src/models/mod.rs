pub mod farm_profile;
pub mod history;
pub mod notifications;
pub mod prediction;
pub mod recommendation;
pub mod soil;
pub mod weather;

pub use farm_profile::*;
pub use history::*;
pub use notifications::*;
pub use prediction::*;
pub use recommendation::*;
pub use soil::*;
pub use weather::*;
