// Copyright (c) 2022-2026 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Syntactic sugar for `Ok(())` and `Ok($value)`.
/// - If no arg is passed in then it will return `Ok(())`.
/// - If an arg is passed in then it will return `Ok($arg)`.
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}

#[cfg(test)]
mod tests {
    use crate::CommonResult;

    #[test]
    fn test_ok() {
        let unit: CommonResult<()> = ok!();
        assert!(unit.is_ok());
        let value: CommonResult<u8> = ok!(7);
        assert_eq!(value.unwrap(), 7);
    }
}
