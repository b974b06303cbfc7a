pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Fails the enclosing function with an out-of-range error unless
/// `$index < $size`.
#[macro_export]
macro_rules! verify_index {
    ($index:expr, $size:expr) => {{
        let index: usize = $index;
        let size: usize = $size;
        $crate::result::verify_index(index, size)?;
    }};
}

#[inline]
pub fn verify_index(index: usize, size: usize) -> Result<()> {
    if index < size {
        Ok(())
    } else {
        out_of_range(index, size)
    }
}

#[cold]
pub fn out_of_range(index: usize, size: usize) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange { index, size }.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(index: usize, size: usize) -> Result<usize> {
        crate::verify_index!(index, size);
        Ok(index)
    }

    #[test]
    fn test_verify_index() {
        assert_eq!(checked(0, 1).unwrap(), 0);
        assert!(checked(1, 1).unwrap_err().is_out_of_range());
        assert!(checked(0, 0).unwrap_err().is_out_of_range());
    }
}
