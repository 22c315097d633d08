pub mod chaincode;

pub use chaincode::{ChaincodeClient, LedgerGateway};
