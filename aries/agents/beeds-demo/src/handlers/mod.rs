pub mod holder;
pub mod issuer;
pub mod ledger;
pub mod out_of_band;
pub mod session;
