//! Domain models shared between the API server and its clients

pub mod clan;
pub mod kingdom;
pub mod member;

pub use clan::{Clan, ClanCreate, ClanUpdate, ClanWithMembers};
pub use kingdom::{Kingdom, KingdomCreate, KingdomCreated, KingdomDetail, KingdomSummary};
pub use member::{Member, MemberCreate, MemberUpdate};
