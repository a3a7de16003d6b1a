pub mod keys;
pub mod rbac;
pub mod session;
pub mod structs;
