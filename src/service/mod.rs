pub mod error;
pub mod lookup;
pub mod privilege;
pub mod registrar;
pub mod supervisor;
