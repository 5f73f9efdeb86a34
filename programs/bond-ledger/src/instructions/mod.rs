pub mod bond;
pub mod create_instance;
pub mod create_registry;
pub mod create_vote_option;
pub mod redeem;
pub mod topup_vault;

pub use bond::*;
pub use create_instance::*;
pub use create_registry::*;
pub use create_vote_option::*;
pub use redeem::*;
pub use topup_vault::*;
