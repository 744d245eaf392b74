//! Core data structures shared by the auth, storage and server layers

pub mod models;
