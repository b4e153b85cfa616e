pub mod connection;
pub mod did_exchange;
pub mod out_of_band;
