#![deny(clippy::all, clippy::pedantic, clippy::nursery, warnings)]
#![allow(clippy::missing_errors_doc)]

pub mod platform;
pub mod report;

/// A byte count, as the target ABI measures the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    B(usize),
}

impl Size {
    #[must_use]
    pub const fn of<T>() -> Self {
        Self::B(size_of::<T>())
    }

    #[must_use]
    pub const fn as_bytes(self) -> usize {
        let Self::B(bytes) = self;
        bytes
    }
}
