pub mod balance;

pub use balance::{BalanceOutcome, RowShare, balance};
