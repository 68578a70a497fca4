//! Wire contracts shared between the back-office client and its REST backend.

pub mod list;
