//! RigIntent- und RigCommand-Enums für den Intent/Command-Datenfluss.

mod command;
mod intent;

pub use command::RigCommand;
pub use intent::RigIntent;
