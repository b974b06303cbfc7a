pub mod owned_buffer;

pub use owned_buffer::OwnedBuffer;

#[cfg(test)]
mod tests;
