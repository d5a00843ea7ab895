//! End-to-end checks of everything the binary prints, run against an in-memory console.

mod test_drive;
mod transcript;
