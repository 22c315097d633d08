// All service modules
pub mod console;
