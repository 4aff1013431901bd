//! In-memory backend, used by [`crate::file::File::from_mem`].

use super::Backend;
use crate::{Error::OutOfBounds, Result};

/// A PE image held in a heap buffer. The buffer is frozen on creation, its length never
/// changes afterwards.
#[derive(Debug)]
pub struct Memory {
    data: Box<[u8]>,
}

impl From<Vec<u8>> for Memory {
    fn from(data: Vec<u8>) -> Self {
        Memory {
            data: data.into_boxed_slice(),
        }
    }
}

impl Backend for Memory {
    fn data_slice(&self, offset: usize, len: usize) -> Result<&[u8]> {
        let end = offset.checked_add(len).ok_or(OutOfBounds)?;
        self.data.get(offset..end).ok_or(OutOfBounds)
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
