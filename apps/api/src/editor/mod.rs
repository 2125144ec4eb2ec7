// Editor: the owner of all Document mutations. Operations are pure
// copy-on-write functions dispatched from tagged-variant commands; the
// HTTP handlers serialize them through the session's Document lock.

pub mod commands;
pub mod controller;
pub mod handlers;
pub mod sorter;
