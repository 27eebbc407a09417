//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each auth page only picks a form schema; rendering and the submit
//! workflow live in `components::auth_form`.

pub mod home;
pub mod signin;
pub mod signup;
