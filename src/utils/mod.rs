#[cfg(test)]
pub mod test_utils;
