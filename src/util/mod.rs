pub mod files;
pub mod paths;
#[cfg(test)]
pub mod test_support;
