// src/models/mod.rs
pub mod chaincode;

pub use chaincode::{
    BackendResponse,
    ChaincodeRequest,
    InvocationForm,
    InvocationMethod,
    InvocationView,
    QueryForm,
    QueryMethod,
    QueryView,
};
